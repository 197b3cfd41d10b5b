//! Scroll-driven effect parameters.

use crate::config::{layout, reveal};

/// Intersection observer settings for the fade-in reveal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealOptions {
    pub threshold: f64,
    pub root_margin: &'static str,
}

impl RevealOptions {
    /// Narrow viewports reveal earlier with a smaller margin.
    pub fn for_width(width: f64) -> Self {
        if width <= layout::MOBILE_BREAKPOINT {
            Self {
                threshold: reveal::MOBILE_THRESHOLD,
                root_margin: reveal::MOBILE_ROOT_MARGIN,
            }
        } else {
            Self {
                threshold: reveal::DESKTOP_THRESHOLD,
                root_margin: reveal::DESKTOP_ROOT_MARGIN,
            }
        }
    }
}

/// Parallax runs only on viewports wider than the breakpoint.
pub fn parallax_enabled(width: f64) -> bool {
    width > layout::MOBILE_BREAKPOINT
}

/// Speed multiplier of the floating shape at `index`.
pub fn parallax_speed(index: usize) -> f64 {
    layout::PARALLAX_BASE_SPEED + index as f64 * layout::PARALLAX_SPEED_STEP
}

/// CSS transform for the floating shape at `index` given the scroll offset.
pub fn parallax_transform(scroll_y: f64, index: usize) -> String {
    let offset = -(scroll_y * parallax_speed(index));
    // Avoid printing "-0" at the top of the page
    let offset = if offset == 0.0 { 0.0 } else { offset };
    format!("translateY({}px)", offset)
}
