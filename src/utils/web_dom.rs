//! [`Dom`] implementation over the live browser document.

use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
    ScrollToOptions, Window,
};

use super::dom::{media_matches, viewport_width};
use crate::config::{ids, selectors};
use crate::core::{Dom, Op, Patch, Target, Viewport};

/// The browser document behind the [`Dom`] seam.
///
/// Failed browser calls are ignored: a patch that cannot be applied leaves
/// the element as it was.
pub struct WebDom {
    window: Window,
    document: Document,
}

impl WebDom {
    pub fn new() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        Some(Self { window, document })
    }

    fn resolve(&self, target: &Target) -> Option<HtmlElement> {
        let element = match target {
            Target::Id(id) => self.document.get_element_by_id(id)?,
            Target::Nth { class, index } => self
                .document
                .get_elements_by_class_name(class)
                .item(u32::try_from(*index).ok()?)?,
            Target::ToggleBar(index) => self
                .document
                .get_element_by_id(ids::NAV_TOGGLE)?
                .query_selector_all("span")
                .ok()?
                .item(u32::try_from(*index).ok()?)?
                .dyn_into::<Element>()
                .ok()?,
        };
        element.dyn_into::<HtmlElement>().ok()
    }
}

impl Dom for WebDom {
    fn exists(&self, target: &Target) -> bool {
        self.resolve(target).is_some()
    }

    fn count(&self, class: &'static str) -> usize {
        self.document.get_elements_by_class_name(class).length() as usize
    }

    fn apply(&self, patch: &Patch) {
        let Some(element) = self.resolve(&patch.target) else {
            return;
        };
        let _ = match &patch.op {
            Op::AddClass(class) => element.class_list().add_1(class),
            Op::RemoveClass(class) => element.class_list().remove_1(class),
            Op::SetAttr(name, value) => element.set_attribute(name, value),
            Op::SetStyle(property, value) => element.style().set_property(property, value),
            Op::SetText(value) => {
                element.set_text_content(Some(value));
                Ok(())
            }
        };
    }

    fn offset_top(&self, id: &str) -> Option<f64> {
        self.document
            .get_element_by_id(id)?
            .dyn_into::<HtmlElement>()
            .ok()
            .map(|element| f64::from(element.offset_top()))
    }

    fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or_default()
    }

    fn viewport(&self) -> Viewport {
        Viewport {
            width: viewport_width(&self.window),
            hover: media_matches(&self.window, selectors::HOVER_MEDIA),
        }
    }

    fn scroll_to(&self, top: f64) {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }

    fn scroll_into_view(&self, id: &'static str) {
        if let Some(element) = self.document.get_element_by_id(id) {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Start);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
    }

    fn click(&self, target: &Target) {
        if let Some(element) = self.resolve(target) {
            element.click();
        }
    }
}
