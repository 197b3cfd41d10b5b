//! Document lifecycle as reported by `document.readyState`.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReadyState {
    /// Still parsing; `DOMContentLoaded` has not fired.
    Loading,
    /// Parsed, but subresources such as images are still arriving.
    Interactive,
    /// The window `load` event has already fired.
    Complete,
}

impl ReadyState {
    pub fn parse(value: &str) -> Self {
        match value {
            "loading" => Self::Loading,
            "complete" => Self::Complete,
            _ => Self::Interactive,
        }
    }

    /// Whether the markup is available to attach to.
    pub fn is_parsed(self) -> bool {
        self != Self::Loading
    }

    /// Whether handlers waiting for window `load` must run right away.
    pub fn is_loaded(self) -> bool {
        self == Self::Complete
    }
}
