//! Smooth scrolling for in-page anchors and the hero call to action.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Element, MouseEvent};

use crate::components::Feature;
use crate::config::{classes, ids, layout};
use crate::core::error::InitError;
use crate::core::{Dom, Page};
use crate::utils::{Subscriptions, dom};

/// Target id of an in-page anchor href such as `#venues`.
pub fn anchor_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

#[derive(Clone)]
pub struct SmoothScroll {
    dom: Rc<dyn Dom>,
}

impl SmoothScroll {
    pub fn init(page: &Page) -> Result<Self, InitError> {
        page.dom.require(ids::EXPLORE_BTN)?;
        Ok(Self {
            dom: Rc::clone(&page.dom),
        })
    }

    pub fn on_explore(&self) {
        self.dom.scroll_into_view(ids::VENUES);
    }

    /// Scroll to the section an anchor points at, clearing the fixed nav.
    ///
    /// Returns `true` when the default navigation should be suppressed.
    pub fn on_link(&self, href: &str) -> bool {
        if !href.starts_with('#') {
            return false;
        }
        match anchor_id(href).and_then(|id| self.dom.offset_top(id)) {
            Some(top) => self.dom.scroll_to(top - layout::FIXED_NAV_HEIGHT),
            None => tracing::debug!(href, "anchor target not found"),
        }
        true
    }
}

impl Feature for SmoothScroll {
    fn name(&self) -> &'static str {
        "smooth scroll"
    }

    fn bind(&self, subs: &mut Subscriptions) -> Result<(), InitError> {
        let document = dom::document()?;

        let explore = dom::element_by_id(&document, ids::EXPLORE_BTN)?;
        let this = self.clone();
        subs.listen(&explore, "click", move |_: MouseEvent| this.on_explore())?;

        for link in dom::elements_by_class(&document, classes::NAV_LINK) {
            let this = self.clone();
            subs.listen(&link, "click", move |event: MouseEvent| {
                let href = event
                    .current_target()
                    .and_then(|target| target.dyn_into::<Element>().ok())
                    .and_then(|element| element.get_attribute("href"))
                    .unwrap_or_default();
                if this.on_link(&href) {
                    event.prevent_default();
                }
            })?;
        }
        Ok(())
    }
}
