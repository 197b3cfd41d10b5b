//! Navigation controller.
//!
//! Switches between the mobile bar and the dropdown-style bar as the page
//! scrolls or the viewport crosses the mobile breakpoint, and drives the
//! menu toggle and its three-bar icon.

use std::rc::Rc;

use leptos::prelude::*;
use web_sys::{Event, MouseEvent, TouchEvent};

use crate::components::{Feature, accessibility};
use crate::config::{classes, ids, layout};
use crate::core::error::InitError;
use crate::core::{Dom, Page, Target};
use crate::models::{NavState, Swipe, TouchTrack};
use crate::utils::{Subscriptions, dom};

const REQUIRED: [&str; 5] = [
    ids::NAVIGATION,
    ids::MOBILE_NAV_BAR,
    ids::DESKTOP_NAV,
    ids::NAV_TOGGLE,
    ids::NAV_MENU,
];

#[derive(Clone)]
pub struct Navigation {
    dom: Rc<dyn Dom>,
    state: RwSignal<NavState>,
    touch: RwSignal<TouchTrack>,
}

impl Navigation {
    /// Paint the presentation for the current width and scroll offset.
    pub fn init(page: &Page) -> Result<Self, InitError> {
        for id in REQUIRED {
            page.dom.require(id)?;
        }

        let mut state = NavState::new(page.dom.viewport().width);
        state.set_scroll(page.dom.scroll_y());

        let nav = Self {
            dom: Rc::clone(&page.dom),
            state: RwSignal::new(state),
            touch: RwSignal::new(TouchTrack::default()),
        };
        nav.paint_presentation();
        Ok(nav)
    }

    pub fn state(&self) -> NavState {
        self.state.get_untracked()
    }

    pub fn on_scroll(&self) {
        let scroll_y = self.dom.scroll_y();
        let repaint = self
            .state
            .try_update(|state| state.set_scroll(scroll_y) && state.is_mobile())
            .unwrap_or(false);
        if repaint {
            self.paint_presentation();
        }
    }

    pub fn on_resize(&self) {
        let width = self.dom.viewport().width;
        let changed = self
            .state
            .try_update(|state| state.set_width(width))
            .unwrap_or(false);
        if changed {
            self.paint_presentation();
        }
    }

    pub fn on_toggle(&self) {
        self.state.update(|state| {
            state.toggle_menu();
        });
        self.paint_menu();
    }

    /// Any navigation link closes the menu.
    pub fn on_link(&self) {
        self.state.update(NavState::close_menu);
        self.paint_menu();
    }

    pub fn on_touch_start(&self, y: f64) {
        self.touch.update(|touch| touch.begin(y));
    }

    /// A swipe up near the top collapses the mobile bar without waiting for
    /// the scroll threshold.
    pub fn on_touch_end(&self, y: f64) {
        if self.touch.with_untracked(|touch| touch.finish(y)) != Swipe::Forward {
            return;
        }
        let state = self.state();
        if state.is_mobile()
            && !state.is_scrolled()
            && self.dom.scroll_y() > layout::NAV_SWIPE_MIN_SCROLL
        {
            self.on_scroll();
        }
    }

    fn paint_presentation(&self) {
        self.dom
            .apply_all(&self.state.with_untracked(NavState::render_presentation));
    }

    fn paint_menu(&self) {
        let state = self.state();
        let mut patches = state.render_menu();
        patches.push(accessibility::expanded(
            Target::Id(ids::NAV_TOGGLE),
            state.is_menu_open(),
        ));
        self.dom.apply_all(&patches);
    }
}

impl Feature for Navigation {
    fn name(&self) -> &'static str {
        "navigation"
    }

    fn bind(&self, subs: &mut Subscriptions) -> Result<(), InitError> {
        let window = dom::window().ok_or(InitError::NoDocument)?;
        let document = dom::document()?;

        let this = self.clone();
        subs.listen(&window, "scroll", move |_: Event| this.on_scroll())?;
        let this = self.clone();
        subs.listen(&window, "resize", move |_: Event| this.on_resize())?;

        let toggle = dom::element_by_id(&document, ids::NAV_TOGGLE)?;
        let this = self.clone();
        subs.listen(&toggle, "click", move |_: MouseEvent| this.on_toggle())?;

        for link in dom::elements_by_class(&document, classes::NAV_LINK) {
            let this = self.clone();
            subs.listen(&link, "click", move |_: MouseEvent| this.on_link())?;
        }

        let this = self.clone();
        subs.listen(&document, "touchstart", move |event: TouchEvent| {
            if let Some(touch) = event.changed_touches().item(0) {
                this.on_touch_start(f64::from(touch.screen_y()));
            }
        })?;
        let this = self.clone();
        subs.listen(&document, "touchend", move |event: TouchEvent| {
            if let Some(touch) = event.changed_touches().item(0) {
                this.on_touch_end(f64::from(touch.screen_y()));
            }
        })?;
        Ok(())
    }
}
