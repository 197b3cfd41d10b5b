//! Application configuration.
//!
//! Centralizes the constants that define the site's behaviour: delays,
//! thresholds, breakpoints, labels and the names of the elements the
//! HTML document is expected to provide.

// =============================================================================
// Timing (milliseconds)
// =============================================================================

/// Timer delays used by the controllers.
pub mod timing {
    /// Delay before the loading overlay starts fading.
    pub const LOADING_FADE_DELAY: u32 = 2000;
    /// Duration of the loading overlay fade before it is removed from layout.
    pub const LOADING_FADE_DURATION: u32 = 500;
    /// Autoplay interval of the hero slideshow.
    pub const SLIDE_INTERVAL: u32 = 4000;
    /// Per-item delay of the staggered venue reveal.
    pub const VENUE_STAGGER: u32 = 100;
    /// Quiet period of the debounced resize handler.
    pub const RESIZE_DEBOUNCE: u32 = 250;
}

// =============================================================================
// Layout
// =============================================================================

/// Viewport breakpoints and offsets (CSS pixels).
pub mod layout {
    /// Width separating mobile from desktop layouts.
    pub const MOBILE_BREAKPOINT: f64 = 768.0;
    /// Scroll offset past which the navigation is in its scrolled state.
    pub const NAV_SCROLL_THRESHOLD: f64 = 100.0;
    /// Minimum scroll offset for a swipe-up to collapse the mobile bar early.
    pub const NAV_SWIPE_MIN_SCROLL: f64 = 50.0;
    /// Height of the fixed navigation, subtracted from anchor targets.
    pub const FIXED_NAV_HEIGHT: f64 = 80.0;
    /// Base parallax speed of the first floating shape.
    pub const PARALLAX_BASE_SPEED: f64 = 0.5;
    /// Parallax speed added per floating shape index.
    pub const PARALLAX_SPEED_STEP: f64 = 0.1;
}

/// Touch gesture configuration.
pub mod gesture {
    /// Minimum displacement (px) for a touch to count as a swipe.
    pub const SWIPE_THRESHOLD: f64 = 50.0;
}

/// Intersection observer settings for the fade-in reveal.
pub mod reveal {
    /// Visible fraction required on narrow viewports.
    pub const MOBILE_THRESHOLD: f64 = 0.05;
    /// Visible fraction required on wide viewports.
    pub const DESKTOP_THRESHOLD: f64 = 0.1;
    /// Root margin on narrow viewports.
    pub const MOBILE_ROOT_MARGIN: &str = "0px 0px -20px 0px";
    /// Root margin on wide viewports.
    pub const DESKTOP_ROOT_MARGIN: &str = "0px 0px -50px 0px";
}

// =============================================================================
// Labels
// =============================================================================

/// Venues toggle label while collapsed.
pub const LABEL_SHOW_ALL_VENUES: &str = "Show All Venues";

/// Venues toggle label while expanded.
pub const LABEL_SHOW_LESS_VENUES: &str = "Show Less Venues";

/// Suffix appended to the alt text of an image that failed to load.
pub const IMAGE_FAILED_ALT_SUFFIX: &str = " (Image failed to load)";

// =============================================================================
// DOM Contract
// =============================================================================

/// Element ids the document must provide.
pub mod ids {
    pub const LOADING_SCREEN: &str = "loading-screen";
    pub const CUSTOM_CURSOR: &str = "custom-cursor";
    pub const NAVIGATION: &str = "navigation";
    pub const MOBILE_NAV_BAR: &str = "mobile-nav-bar";
    pub const DESKTOP_NAV: &str = "desktop-nav";
    pub const NAV_TOGGLE: &str = "nav-toggle";
    pub const NAV_MENU: &str = "nav-menu";
    pub const EXPLORE_BTN: &str = "explore-btn";
    pub const VENUES_TOGGLE_BTN: &str = "venues-toggle-btn";
    pub const VENUES: &str = "venues";
}

/// Class names the document uses.
pub mod classes {
    pub const SLIDE: &str = "slide";
    pub const DOT: &str = "dot";
    pub const SLIDESHOW_CONTAINER: &str = "slideshow-container";
    pub const ADDITIONAL_VENUE: &str = "additional-venue";
    pub const FLOATING_SHAPE: &str = "floating-shape";
    pub const NAV_LINK: &str = "nav-link";

    /// State marker for the visible slide, dot and open menu.
    pub const ACTIVE: &str = "active";
    /// Marker for elements whose reveal animation ran.
    pub const FADE_IN: &str = "fade-in";
}

/// CSS selectors over the contract class names.
pub mod selectors {
    /// Elements that enlarge the custom cursor on hover.
    pub const INTERACTIVE: &str = "button, a, .venue-card, .slide";
    /// Elements revealed when they scroll into view.
    pub const REVEAL: &str = ".venue-card, .section-header, .theme-text, .citizenship-text";
    /// Media query for hover-capable pointing devices.
    pub const HOVER_MEDIA: &str = "(hover: hover)";
}

/// Inline style values painted by the controllers.
pub mod styles {
    pub const NAV_BG_SCROLLED: &str = "rgba(255, 255, 255, 0.98)";
    pub const NAV_BG_TOP: &str = "rgba(255, 255, 255, 0.95)";
    pub const NAV_BLUR: &str = "blur(10px)";

    pub const BAR_TOP_OPEN: &str = "rotate(45deg) translate(5px, 5px)";
    pub const BAR_BOTTOM_OPEN: &str = "rotate(-45deg) translate(7px, -6px)";

    pub const CURSOR_SCALE_HOVER: &str = "scale(1.5)";
    pub const CURSOR_SCALE_REST: &str = "scale(1)";
}

// =============================================================================
// Logging
// =============================================================================

/// Most verbose level forwarded to the browser console.
#[cfg(debug_assertions)]
pub const LOG_LEVEL: tracing::Level = tracing::Level::DEBUG;

/// Most verbose level forwarded to the browser console.
#[cfg(not(debug_assertions))]
pub const LOG_LEVEL: tracing::Level = tracing::Level::INFO;
