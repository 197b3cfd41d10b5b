//! Navigation presentation and menu state.

use crate::config::{classes, ids, layout, styles};
use crate::core::dom::{Patch, Target};

/// How the navigation is currently drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Presentation {
    /// Mobile viewport near the top of the page: compact bar.
    MobileBar,
    /// Mobile viewport scrolled down: dropdown-style bar.
    MobileDropdown,
    /// Desktop viewport: always the dropdown-style bar.
    Desktop,
}

/// Navigation flags owned by the navigation controller.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    scrolled: bool,
    mobile: bool,
    menu_open: bool,
}

impl NavState {
    /// State at the top of the page with a closed menu.
    pub fn new(width: f64) -> Self {
        Self {
            scrolled: false,
            mobile: is_mobile_width(width),
            menu_open: false,
        }
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn is_mobile(&self) -> bool {
        self.mobile
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn presentation(&self) -> Presentation {
        match (self.mobile, self.scrolled) {
            (false, _) => Presentation::Desktop,
            (true, false) => Presentation::MobileBar,
            (true, true) => Presentation::MobileDropdown,
        }
    }

    /// Update the scrolled flag from a scroll offset, returning whether it flipped.
    pub fn set_scroll(&mut self, scroll_y: f64) -> bool {
        let scrolled = scroll_y > layout::NAV_SCROLL_THRESHOLD;
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }

    /// Update the mobile flag from a viewport width, returning whether it flipped.
    pub fn set_width(&mut self, width: f64) -> bool {
        let mobile = is_mobile_width(width);
        let changed = mobile != self.mobile;
        self.mobile = mobile;
        changed
    }

    /// Flip the menu, returning whether it is now open.
    pub fn toggle_menu(&mut self) -> bool {
        self.menu_open = !self.menu_open;
        self.menu_open
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Patches drawing the current presentation.
    pub fn render_presentation(&self) -> Vec<Patch> {
        let bar = Target::Id(ids::MOBILE_NAV_BAR);
        let dropdown = Target::Id(ids::DESKTOP_NAV);
        let nav = Target::Id(ids::NAVIGATION);

        match self.presentation() {
            Presentation::MobileBar => vec![
                Patch::style(bar, "display", "flex"),
                Patch::style(dropdown, "display", "none"),
                Patch::style(nav, "background", styles::NAV_BG_TOP),
            ],
            Presentation::MobileDropdown => vec![
                Patch::style(bar, "display", "none"),
                Patch::style(dropdown, "display", "block"),
                Patch::style(nav.clone(), "background", styles::NAV_BG_SCROLLED),
                Patch::style(nav, "backdrop-filter", styles::NAV_BLUR),
            ],
            Presentation::Desktop => vec![
                Patch::style(bar, "display", "none"),
                Patch::style(dropdown, "display", "block"),
            ],
        }
    }

    /// Patches drawing the menu and its three-bar icon.
    pub fn render_menu(&self) -> Vec<Patch> {
        let open = self.menu_open;
        let (top, middle, bottom) = if open {
            (styles::BAR_TOP_OPEN, "0", styles::BAR_BOTTOM_OPEN)
        } else {
            ("none", "1", "none")
        };

        vec![
            Patch::toggle_class(Target::Id(ids::NAV_MENU), classes::ACTIVE, open),
            Patch::style(Target::ToggleBar(0), "transform", top),
            Patch::style(Target::ToggleBar(1), "opacity", middle),
            Patch::style(Target::ToggleBar(2), "transform", bottom),
        ]
    }
}

fn is_mobile_width(width: f64) -> bool {
    width <= layout::MOBILE_BREAKPOINT
}
