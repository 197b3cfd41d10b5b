//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};

use crate::core::error::InitError;
use crate::models::ReadyState;

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get the document, failing startup when there is none.
pub fn document() -> Result<Document, InitError> {
    window()
        .and_then(|w| w.document())
        .ok_or(InitError::NoDocument)
}

/// Look up a required element by id.
pub fn element_by_id(document: &Document, id: &'static str) -> Result<HtmlElement, InitError> {
    document
        .get_element_by_id(id)
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
        .ok_or(InitError::MissingElement(id))
}

/// All elements carrying `class`, in document order.
pub fn elements_by_class(document: &Document, class: &str) -> Vec<HtmlElement> {
    let collection = document.get_elements_by_class_name(class);
    (0..collection.length())
        .filter_map(|i| collection.item(i))
        .filter_map(|element| element.dyn_into::<HtmlElement>().ok())
        .collect()
}

/// All elements under `root` matching a CSS selector.
pub fn query_all(root: &Element, selector: &str) -> Vec<Element> {
    let Ok(nodes) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// The document's root element, used as the base for selector queries.
pub fn root_element(document: &Document) -> Result<Element, InitError> {
    document.document_element().ok_or(InitError::NoDocument)
}

/// Current lifecycle phase of `document`.
pub fn ready_state(document: &Document) -> ReadyState {
    ReadyState::parse(&document.ready_state())
}

/// Whether the event target sits inside an element matching `selector`.
pub fn target_within(event: &web_sys::Event, selector: &str) -> bool {
    event
        .target()
        .and_then(|target| target.dyn_into::<Element>().ok())
        .and_then(|element| element.closest(selector).ok().flatten())
        .is_some()
}

/// Current inner width of the viewport in CSS pixels.
pub fn viewport_width(window: &Window) -> f64 {
    window
        .inner_width()
        .ok()
        .and_then(|w| w.as_f64())
        .unwrap_or_default()
}

/// Whether a media query currently matches.
pub fn media_matches(window: &Window, query: &str) -> bool {
    window
        .match_media(query)
        .ok()
        .flatten()
        .is_some_and(|list| list.matches())
}
