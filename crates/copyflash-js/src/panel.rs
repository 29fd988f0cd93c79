//! Settings panel wiring.
//!
//! Builds three text fields on the host's declarative form. Color fields
//! write through verbatim; the duration field parses and falls back to
//! the stored value, redisplaying it after a rejected edit.

use std::cell::RefCell;
use std::rc::Rc;

use copyflash_core::settings::{
    DEFAULT_BACKGROUND_COLOR, DEFAULT_DURATION_MS, DEFAULT_FOREGROUND_COLOR, coerce_duration,
    parse_duration,
};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use crate::host::{SettingsForm, TextField};
use crate::store::SettingsStore;

/// Populate the host's settings form.
///
/// Each change callback writes through the store (which persists) and is
/// leaked via `forget` - the host owns the field lifetimes, not us.
pub fn build(form: &SettingsForm, store: Rc<SettingsStore>) {
    let initial = store.snapshot();

    {
        let store = store.clone();
        let on_change = Closure::wrap(Box::new(move |value: String| {
            store.update(|settings| settings.background_color = value.clone());
        }) as Box<dyn FnMut(String)>);
        form.add_text_field(
            "Highlight background color",
            DEFAULT_BACKGROUND_COLOR,
            &initial.background_color,
            on_change.as_ref().unchecked_ref(),
        );
        on_change.forget();
    }

    {
        let store = store.clone();
        let on_change = Closure::wrap(Box::new(move |value: String| {
            store.update(|settings| settings.foreground_color = value.clone());
        }) as Box<dyn FnMut(String)>);
        form.add_text_field(
            "Highlight text color",
            DEFAULT_FOREGROUND_COLOR,
            &initial.foreground_color,
            on_change.as_ref().unchecked_ref(),
        );
        on_change.forget();
    }

    {
        let field: Rc<RefCell<Option<TextField>>> = Rc::new(RefCell::new(None));
        let field_in = field.clone();
        let on_change = Closure::wrap(Box::new(move |value: String| {
            let prior = store.snapshot().duration_ms;
            let coerced = coerce_duration(&value, Some(prior));
            store.update(|settings| settings.duration_ms = coerced);
            if parse_duration(&value).is_none() {
                // Rejected input: show what is actually stored.
                if let Some(field) = field_in.borrow().as_ref() {
                    field.set_value(&coerced.to_string());
                }
            }
        }) as Box<dyn FnMut(String)>);
        let created = form.add_text_field(
            "Highlight duration (ms)",
            &DEFAULT_DURATION_MS.to_string(),
            &initial.duration_ms.to_string(),
            on_change.as_ref().unchecked_ref(),
        );
        *field.borrow_mut() = Some(created);
        on_change.forget();
    }
}
