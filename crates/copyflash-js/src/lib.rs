//! WASM plugin bindings for copyflash.
//!
//! Exposes the copy-highlight plugin to a JavaScript markdown host:
//! lifecycle hooks (`onload`/`onunload`), a settings panel builder, and a
//! typed settings snapshot for host-side tooling.

mod host;
mod panel;
mod plugin;
mod store;
mod types;

pub use host::*;
pub use plugin::*;
pub use types::*;

use wasm_bindgen::prelude::*;

/// Initialize panic hook and console logging.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();

    #[cfg(all(target_family = "wasm", target_os = "unknown"))]
    {
        use tracing::Level;
        use tracing::subscriber::set_global_default;
        use tracing_subscriber::Registry;
        use tracing_subscriber::layer::SubscriberExt;

        let console_level = if cfg!(debug_assertions) {
            Level::DEBUG
        } else {
            Level::INFO
        };

        let wasm_layer = tracing_wasm::WASMLayer::new(
            tracing_wasm::WASMLayerConfigBuilder::new()
                .set_max_level(console_level)
                .build(),
        );

        // Reloading the plugin re-runs start; keep the first subscriber.
        let _ = set_global_default(Registry::default().with(wasm_layer));
    }
}
