//! ARIA synchronisation.
//!
//! The patch builders here are the only place ARIA attributes are produced;
//! the slideshow, navigation and venues controllers append them to their own
//! render output so visual and assistive state change together.

use std::rc::Rc;

use web_sys::KeyboardEvent;

use crate::components::Feature;
use crate::config::classes;
use crate::core::error::InitError;
use crate::core::{Dom, Page, Patch, Target};
use crate::utils::{Subscriptions, dom};

/// `aria-hidden` on every slide and `aria-selected` on every dot for `active`.
pub fn slide_states(active: usize, slides: usize, dots: usize) -> Vec<Patch> {
    let hidden = (0..slides).map(|i| {
        Patch::attr(
            Target::nth(classes::SLIDE, i),
            "aria-hidden",
            bool_attr(i != active),
        )
    });
    let selected = (0..dots).map(|i| {
        Patch::attr(
            Target::nth(classes::DOT, i),
            "aria-selected",
            bool_attr(i == active),
        )
    });
    hidden.chain(selected).collect()
}

/// `aria-expanded` on a disclosure control.
pub fn expanded(target: Target, value: bool) -> Patch {
    Patch::attr(target, "aria-expanded", bool_attr(value))
}

/// Keys that activate a focused dot like a pointer click.
pub fn activates(key: &str) -> bool {
    matches!(key, "Enter" | " ")
}

fn bool_attr(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

/// Keyboard activation for the slideshow dots and the initial ARIA state.
#[derive(Clone)]
pub struct Accessibility {
    dom: Rc<dyn Dom>,
}

impl Accessibility {
    /// Mark the first slide as the visible one.
    pub fn init(page: &Page) -> Self {
        let dom = Rc::clone(&page.dom);
        let slides = dom.count(classes::SLIDE);
        let dots = dom.count(classes::DOT);
        dom.apply_all(&slide_states(0, slides, dots));
        Self { dom }
    }

    /// Handle a key on dot `index`; returns whether it was consumed.
    pub fn on_dot_key(&self, index: usize, key: &str) -> bool {
        if !activates(key) {
            return false;
        }
        self.dom.click(&Target::nth(classes::DOT, index));
        true
    }
}

impl Feature for Accessibility {
    fn name(&self) -> &'static str {
        "accessibility"
    }

    fn bind(&self, subs: &mut Subscriptions) -> Result<(), InitError> {
        let document = dom::document()?;
        for (index, dot) in dom::elements_by_class(&document, classes::DOT)
            .into_iter()
            .enumerate()
        {
            let this = self.clone();
            subs.listen(&dot, "keydown", move |event: KeyboardEvent| {
                if this.on_dot_key(index, &event.key()) {
                    event.prevent_default();
                }
            })?;
        }
        Ok(())
    }
}
