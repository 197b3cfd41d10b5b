//! Custom cursor follower (desktop with hover only).

use std::rc::Rc;

use web_sys::MouseEvent;

use crate::components::Feature;
use crate::config::{ids, selectors, styles};
use crate::core::error::InitError;
use crate::core::{Dom, Page, Patch, Target};
use crate::utils::{Subscriptions, dom};

#[derive(Clone)]
pub struct CursorFollower {
    dom: Rc<dyn Dom>,
    cursor: Target,
}

impl CursorFollower {
    /// Returns `None` on devices that cannot show the custom cursor.
    pub fn init(page: &Page) -> Result<Option<Self>, InitError> {
        if !page.dom.viewport().supports_cursor() {
            return Ok(None);
        }
        let cursor = page.dom.require(ids::CUSTOM_CURSOR)?;
        Ok(Some(Self {
            dom: Rc::clone(&page.dom),
            cursor,
        }))
    }

    pub fn on_move(&self, x: i32, y: i32) {
        self.dom.apply_all(&[
            Patch::style(self.cursor.clone(), "left", format!("{}px", x)),
            Patch::style(self.cursor.clone(), "top", format!("{}px", y)),
        ]);
    }

    /// Pointer left or re-entered the document.
    pub fn on_window_presence(&self, inside: bool) {
        let opacity = if inside { "1" } else { "0" };
        self.dom
            .apply(&Patch::style(self.cursor.clone(), "opacity", opacity));
    }

    /// Pointer entered or left an interactive element.
    pub fn on_interactive_hover(&self, hovering: bool) {
        let scale = if hovering {
            styles::CURSOR_SCALE_HOVER
        } else {
            styles::CURSOR_SCALE_REST
        };
        self.dom
            .apply(&Patch::style(self.cursor.clone(), "transform", scale));
    }
}

impl Feature for CursorFollower {
    fn name(&self) -> &'static str {
        "cursor"
    }

    fn bind(&self, subs: &mut Subscriptions) -> Result<(), InitError> {
        let document = dom::document()?;

        let this = self.clone();
        subs.listen(&document, "mousemove", move |event: MouseEvent| {
            this.on_move(event.client_x(), event.client_y());
        })?;
        let this = self.clone();
        subs.listen(&document, "mouseleave", move |_: MouseEvent| {
            this.on_window_presence(false);
        })?;
        let this = self.clone();
        subs.listen(&document, "mouseenter", move |_: MouseEvent| {
            this.on_window_presence(true);
        })?;

        let root = dom::root_element(&document)?;
        for element in dom::query_all(&root, selectors::INTERACTIVE) {
            let this = self.clone();
            subs.listen(&element, "mouseenter", move |_: MouseEvent| {
                this.on_interactive_hover(true);
            })?;
            let this = self.clone();
            subs.listen(&element, "mouseleave", move |_: MouseEvent| {
                this.on_interactive_hover(false);
            })?;
        }
        Ok(())
    }
}
