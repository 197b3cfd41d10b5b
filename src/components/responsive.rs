//! Debounced layout refresh after the viewport settles.

use web_sys::Event;

use crate::components::Feature;
use crate::config::{classes, ids, layout, timing};
use crate::core::error::InitError;
use crate::core::{Debounce, Dom, Page, Patch, Target};
use crate::utils::{Subscriptions, dom};

/// Hide desktop-only decoration on narrow viewports and restore it otherwise.
pub fn refresh(dom: &dyn Dom) {
    let viewport = dom.viewport();
    let cursor = Target::Id(ids::CUSTOM_CURSOR);

    if viewport.width < layout::MOBILE_BREAKPOINT {
        let shapes = dom.count(classes::FLOATING_SHAPE);
        let mut patches = vec![Patch::style(cursor, "display", "none")];
        patches.extend(
            (0..shapes)
                .map(|i| Patch::style(Target::nth(classes::FLOATING_SHAPE, i), "transform", "none")),
        );
        dom.apply_all(&patches);
    } else if viewport.hover {
        dom.apply(&Patch::style(cursor, "display", "block"));
    }
}

/// Resize listener running [`refresh`] once the viewport settles.
pub struct ResizeRefresh {
    page: Page,
}

impl ResizeRefresh {
    pub fn new(page: &Page) -> Self {
        Self { page: page.clone() }
    }
}

impl Feature for ResizeRefresh {
    fn name(&self) -> &'static str {
        "responsive refresh"
    }

    fn bind(&self, subs: &mut Subscriptions) -> Result<(), InitError> {
        let window = dom::window().ok_or(InitError::NoDocument)?;
        let target = self.page.dom.clone();
        let debounce = Debounce::new(
            self.page.timers.clone(),
            timing::RESIZE_DEBOUNCE,
            move || refresh(target.as_ref()),
        );
        subs.listen(&window, "resize", move |_: Event| debounce.call())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::testing::{FakeDom, fake_page};

    fn page_dom() -> FakeDom {
        FakeDom::new()
            .with_ids(&[ids::CUSTOM_CURSOR])
            .with_class(classes::FLOATING_SHAPE, 2)
    }

    #[test]
    fn test_narrow_hides_cursor_and_resets_shapes() {
        let (page, dom, _) = fake_page(page_dom().with_viewport(500.0, true));
        refresh(page.dom.as_ref());

        assert_eq!(
            dom.style(&Target::Id(ids::CUSTOM_CURSOR), "display").as_deref(),
            Some("none")
        );
        for i in 0..2 {
            assert_eq!(
                dom.style(&Target::nth(classes::FLOATING_SHAPE, i), "transform")
                    .as_deref(),
                Some("none")
            );
        }
    }

    #[test]
    fn test_wide_restores_cursor_on_hover_devices() {
        let (page, dom, _) = fake_page(page_dom());
        refresh(page.dom.as_ref());
        let cursor = Target::Id(ids::CUSTOM_CURSOR);
        assert_eq!(dom.style(&cursor, "display").as_deref(), Some("block"));

        let (page, dom, _) = fake_page(page_dom().with_viewport(1024.0, false));
        refresh(page.dom.as_ref());
        assert_eq!(dom.style(&cursor, "display"), None);
    }

    #[test]
    fn test_breakpoint_width_counts_as_wide() {
        let (page, dom, _) = fake_page(page_dom().with_viewport(768.0, true));
        refresh(page.dom.as_ref());
        assert_eq!(
            dom.style(&Target::nth(classes::FLOATING_SHAPE, 0), "transform"),
            None
        );
    }
}
