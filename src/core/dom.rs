//! Document abstraction used by every controller.
//!
//! Controllers never touch `web-sys` directly. They compute [`Patch`] lists
//! from their state and hand them to a [`Dom`], which is either the browser
//! adapter ([`crate::utils::WebDom`]) or an in-memory fake in tests.

use super::error::InitError;

/// An element addressed through the document contract.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Target {
    /// Element with the given id.
    Id(&'static str),
    /// The `index`-th element (document order) carrying `class`.
    Nth { class: &'static str, index: usize },
    /// The `index`-th `span` bar inside the navigation toggle.
    ToggleBar(usize),
}

impl Target {
    pub fn nth(class: &'static str, index: usize) -> Self {
        Self::Nth { class, index }
    }
}

/// A single DOM mutation.
#[derive(Clone, Debug, PartialEq)]
pub enum Op {
    AddClass(&'static str),
    RemoveClass(&'static str),
    SetAttr(&'static str, String),
    SetStyle(&'static str, String),
    SetText(String),
}

/// A mutation bound to its target element.
#[derive(Clone, Debug, PartialEq)]
pub struct Patch {
    pub target: Target,
    pub op: Op,
}

impl Patch {
    pub fn add_class(target: Target, class: &'static str) -> Self {
        Self {
            target,
            op: Op::AddClass(class),
        }
    }

    pub fn remove_class(target: Target, class: &'static str) -> Self {
        Self {
            target,
            op: Op::RemoveClass(class),
        }
    }

    /// Add or remove `class` depending on `on`.
    pub fn toggle_class(target: Target, class: &'static str, on: bool) -> Self {
        if on {
            Self::add_class(target, class)
        } else {
            Self::remove_class(target, class)
        }
    }

    pub fn attr(target: Target, name: &'static str, value: impl Into<String>) -> Self {
        Self {
            target,
            op: Op::SetAttr(name, value.into()),
        }
    }

    pub fn style(target: Target, property: &'static str, value: impl Into<String>) -> Self {
        Self {
            target,
            op: Op::SetStyle(property, value.into()),
        }
    }

    pub fn text(target: Target, value: impl Into<String>) -> Self {
        Self {
            target,
            op: Op::SetText(value.into()),
        }
    }
}

/// Viewport geometry and pointer capability at a point in time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    /// Inner width in CSS pixels.
    pub width: f64,
    /// Whether the primary pointer can hover.
    pub hover: bool,
}

impl Viewport {
    /// Navigation and reveal settings switch to mobile at or below the breakpoint.
    pub fn is_mobile(&self) -> bool {
        self.width <= crate::config::layout::MOBILE_BREAKPOINT
    }

    /// The custom cursor needs a wide viewport and a hovering pointer.
    pub fn supports_cursor(&self) -> bool {
        self.width >= crate::config::layout::MOBILE_BREAKPOINT && self.hover
    }
}

/// Read and write access to the document.
///
/// Patches addressed to absent elements are ignored, so render functions
/// can be applied without checking the document shape first.
pub trait Dom {
    /// Whether the target element is present.
    fn exists(&self, target: &Target) -> bool;

    /// The element with `id`, or the startup error naming it.
    fn require(&self, id: &'static str) -> Result<Target, InitError> {
        let target = Target::Id(id);
        if self.exists(&target) {
            Ok(target)
        } else {
            Err(InitError::MissingElement(id))
        }
    }

    /// Number of elements carrying `class`.
    fn count(&self, class: &'static str) -> usize;

    fn apply(&self, patch: &Patch);

    fn apply_all(&self, patches: &[Patch]) {
        for patch in patches {
            self.apply(patch);
        }
    }

    /// Document offset-top of the element with the given id.
    fn offset_top(&self, id: &str) -> Option<f64>;

    /// Current vertical scroll offset of the window.
    fn scroll_y(&self) -> f64;

    fn viewport(&self) -> Viewport;

    /// Smooth-scroll the window to a vertical offset.
    fn scroll_to(&self, top: f64);

    /// Smooth-scroll an element to the top of the viewport.
    fn scroll_into_view(&self, id: &'static str);

    /// Dispatch a synthetic click on the target.
    fn click(&self, target: &Target);
}
