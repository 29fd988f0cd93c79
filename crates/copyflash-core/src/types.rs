//! Shared types: text positions, selection endpoints, and view/engine
//! classification.

/// A line/column position in a legacy editor document.
///
/// Lines and columns are both zero-based, matching the legacy engine's
/// position objects. Ordering is line-major: a position on an earlier line
/// sorts before any position on a later line, regardless of column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct TextPosition {
    /// Zero-based line index.
    pub line: u32,
    /// Zero-based column within the line.
    pub col: u32,
}

impl TextPosition {
    /// Create a new position.
    pub fn new(line: u32, col: u32) -> Self {
        Self { line, col }
    }
}

/// Selection endpoints as reported by the legacy engine.
///
/// The anchor is where the selection started, the head is where the cursor
/// is now. They may be in any order - use `normalized()` for ordered bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectionEndpoints {
    /// Where selection started
    pub anchor: TextPosition,
    /// Where cursor is now
    pub head: TextPosition,
}

impl SelectionEndpoints {
    /// Create from raw anchor/head endpoints.
    pub fn new(anchor: TextPosition, head: TextPosition) -> Self {
        Self { anchor, head }
    }

    /// Ordered `(from, to)` bounds, regardless of drag direction.
    pub fn normalized(&self) -> (TextPosition, TextPosition) {
        if self.head < self.anchor {
            (self.head, self.anchor)
        } else {
            (self.anchor, self.head)
        }
    }

    /// Check if the selection is backwards (head before anchor).
    pub fn is_backwards(&self) -> bool {
        self.head < self.anchor
    }

    /// Check if the selection is collapsed to a caret.
    pub fn is_collapsed(&self) -> bool {
        self.anchor == self.head
    }
}

/// Display mode of a markdown view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewMode {
    /// Raw-markdown editing surface.
    Source,
    /// Rendered preview surface.
    Preview,
}

impl ViewMode {
    /// Parse the host's mode string.
    ///
    /// Unknown mode strings are treated as preview: the view still gets
    /// the selection flash, but no editor-level marking is attempted.
    pub fn parse(mode: &str) -> Self {
        match mode {
            "source" => ViewMode::Source,
            _ => ViewMode::Preview,
        }
    }
}

/// Which generation of editing engine a view is running.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EngineKind {
    /// State-based engine; highlight rendering is left entirely to CSS.
    Modern,
    /// Older engine addressed through its imperative marking API.
    Legacy,
}

/// Capabilities observed on a view's editing handle.
///
/// Probed fresh on every copy event - handles change identity and
/// capability when the user switches views or the host swaps engines.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EngineProbe {
    /// The handle exposes a state-based styling API.
    pub has_state_api: bool,
    /// A legacy imperative handle is reachable.
    pub has_legacy_handle: bool,
}

impl EngineProbe {
    /// Classify the engine behind a probed handle.
    ///
    /// A view is modern only when the state-based API is present and no
    /// legacy handle is exposed; anything else is treated as legacy so
    /// the imperative path can decide capability-by-capability.
    pub fn classify(&self) -> EngineKind {
        if self.has_state_api && !self.has_legacy_handle {
            EngineKind::Modern
        } else {
            EngineKind::Legacy
        }
    }
}

/// A view's editing handle, tagged by engine generation.
#[derive(Debug)]
pub enum EditorHandle<L> {
    /// Modern engine: no per-event editor work, CSS covers the highlight.
    Modern,
    /// Legacy engine handle for imperative range marking.
    Legacy(L),
}

/// An active markdown view as seen by the copy handler.
#[derive(Debug)]
pub struct MarkdownView<L> {
    /// Current display mode.
    pub mode: ViewMode,
    /// Editing handle, classified by the platform layer.
    pub handle: EditorHandle<L>,
}
