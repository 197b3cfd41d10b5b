//! Scroll-driven effects: fade-in reveal and floating-shape parallax.

use std::rc::Rc;

use web_sys::Event;

use crate::components::Feature;
use crate::config::{classes, selectors};
use crate::core::error::InitError;
use crate::core::{Dom, Page, Patch, Target};
use crate::models::RevealOptions;
use crate::models::effects::{parallax_enabled, parallax_transform};
use crate::utils::{Subscriptions, dom};

/// Parallax transforms for `shapes` floating shapes at scroll offset `scroll_y`.
pub fn render_parallax(scroll_y: f64, shapes: usize) -> Vec<Patch> {
    (0..shapes)
        .map(|i| {
            Patch::style(
                Target::nth(classes::FLOATING_SHAPE, i),
                "transform",
                parallax_transform(scroll_y, i),
            )
        })
        .collect()
}

#[derive(Clone)]
pub struct ScrollEffects {
    dom: Rc<dyn Dom>,
    parallax: bool,
    options: RevealOptions,
}

impl ScrollEffects {
    /// Pick reveal settings and decide on parallax from the initial width.
    pub fn init(page: &Page) -> Self {
        let width = page.dom.viewport().width;
        Self {
            dom: Rc::clone(&page.dom),
            parallax: parallax_enabled(width),
            options: RevealOptions::for_width(width),
        }
    }

    pub fn options(&self) -> RevealOptions {
        self.options
    }

    pub fn parallax(&self) -> bool {
        self.parallax
    }

    pub fn on_scroll(&self) {
        if !self.parallax || !parallax_enabled(self.dom.viewport().width) {
            return;
        }
        let shapes = self.dom.count(classes::FLOATING_SHAPE);
        self.dom
            .apply_all(&render_parallax(self.dom.scroll_y(), shapes));
    }
}

impl Feature for ScrollEffects {
    fn name(&self) -> &'static str {
        "scroll effects"
    }

    fn bind(&self, subs: &mut Subscriptions) -> Result<(), InitError> {
        let document = dom::document()?;
        let root = dom::root_element(&document)?;
        let targets = dom::query_all(&root, selectors::REVEAL);
        tracing::debug!(count = targets.len(), "observing reveal targets");

        subs.observe_once(&targets, self.options, |element| {
            let _ = element.class_list().add_1(classes::FADE_IN);
        })?;

        if self.parallax {
            let window = dom::window().ok_or(InitError::NoDocument)?;
            let this = self.clone();
            subs.listen(&window, "scroll", move |_: Event| this.on_scroll())?;
        }
        Ok(())
    }
}
