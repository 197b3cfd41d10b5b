//! Broken-image fallback.
//!
//! Once the window has loaded, images still pending get load/error listeners.
//! A failed image is hidden and its alt text marked; when every image has
//! settled a single summary line is logged.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlElement, HtmlImageElement};

use crate::components::Feature;
use crate::config::IMAGE_FAILED_ALT_SUFFIX;
use crate::core::error::InitError;
use crate::models::{ImageTally, ReadyState};
use crate::utils::{Subscriptions, dom};

/// Alt text marking an image that failed to load.
pub fn fallback_alt(alt: &str) -> String {
    format!("{}{}", alt, IMAGE_FAILED_ALT_SUFFIX)
}

/// Hide a broken image and mark its alt text.
pub fn mark_failed(image: &HtmlImageElement) {
    image.set_alt(&fallback_alt(&image.alt()));
    let _ = HtmlElement::style(image).set_property("display", "none");
}

#[derive(Clone)]
pub struct ImageFallback {
    tally: RwSignal<ImageTally>,
}

impl ImageFallback {
    pub fn new(total: usize) -> Self {
        Self {
            tally: RwSignal::new(ImageTally::new(total)),
        }
    }

    pub fn tally(&self) -> ImageTally {
        self.tally.get_untracked()
    }

    pub fn record_complete(&self) {
        self.tally.update(ImageTally::record_complete);
    }

    /// Returns `true` when this load settled the last image.
    pub fn settle_loaded(&self) -> bool {
        let settled = self
            .tally
            .try_update(ImageTally::record_loaded)
            .unwrap_or(false);
        self.report(settled);
        settled
    }

    /// Returns `true` when this failure settled the last image.
    pub fn settle_failed(&self, src: &str) -> bool {
        tracing::warn!(src, "image failed to load");
        let settled = self
            .tally
            .try_update(ImageTally::record_failed)
            .unwrap_or(false);
        self.report(settled);
        settled
    }

    fn report(&self, settled: bool) {
        if settled {
            let tally = self.tally();
            tracing::info!(
                loaded = tally.loaded(),
                failed = tally.failed(),
                "images settled"
            );
        }
    }

    /// Start tracking every image in the document.
    fn watch(subs: &mut Subscriptions) -> Result<(), InitError> {
        let document = dom::document()?;
        let collection = document.images();
        let images: Vec<HtmlImageElement> = (0..collection.length())
            .filter_map(|i| collection.item(i))
            .filter_map(|element| element.dyn_into::<HtmlImageElement>().ok())
            .collect();

        let fallback = Self::new(images.len());
        for image in images {
            if image.complete() {
                fallback.record_complete();
                continue;
            }

            let this = fallback.clone();
            subs.listen(&image, "load", move |_: Event| {
                this.settle_loaded();
            })?;

            let this = fallback.clone();
            let failed = image.clone();
            subs.listen(&image, "error", move |_: Event| {
                this.settle_failed(&failed.src());
                mark_failed(&failed);
            })?;
        }
        Ok(())
    }
}

/// Attaches [`ImageFallback`] once the window has loaded.
pub struct ImageWatch {
    loaded: bool,
}

impl ImageWatch {
    pub fn new(ready: ReadyState) -> Self {
        Self {
            loaded: ready.is_loaded(),
        }
    }

    /// Whether `load` already fired, so binding attaches immediately.
    pub fn runs_now(&self) -> bool {
        self.loaded
    }
}

impl Feature for ImageWatch {
    fn name(&self) -> &'static str {
        "image fallback"
    }

    fn bind(&self, subs: &mut Subscriptions) -> Result<(), InitError> {
        if self.runs_now() {
            return ImageFallback::watch(subs);
        }

        let window = dom::window().ok_or(InitError::NoDocument)?;
        let images = Rc::new(RefCell::new(Subscriptions::new()));
        subs.listen(&window, "load", move |_: Event| {
            if let Err(err) = ImageFallback::watch(&mut images.borrow_mut()) {
                tracing::warn!(%err, "image fallback unavailable");
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_alt() {
        assert_eq!(fallback_alt("Venue hall"), "Venue hall (Image failed to load)");
        assert_eq!(fallback_alt(""), " (Image failed to load)");
    }

    #[test]
    fn test_settles_once_with_mixed_outcomes() {
        let fallback = ImageFallback::new(4);
        fallback.record_complete();

        assert!(!fallback.settle_loaded());
        assert!(!fallback.settle_failed("a.jpg"));
        assert!(fallback.settle_failed("b.jpg"));

        let tally = fallback.tally();
        assert_eq!(tally.loaded(), 2);
        assert_eq!(tally.failed(), 2);
    }

    #[test]
    fn test_clones_share_the_tally() {
        let fallback = ImageFallback::new(2);
        let other = fallback.clone();
        assert!(!fallback.settle_loaded());
        assert!(other.settle_loaded());
    }

    #[test]
    fn test_watch_runs_now_after_load() {
        assert!(ImageWatch::new(ReadyState::Complete).runs_now());
        assert!(!ImageWatch::new(ReadyState::Interactive).runs_now());
        assert!(!ImageWatch::new(ReadyState::Loading).runs_now());
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod web_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn mount_image(html: &str) -> HtmlImageElement {
        let document = dom::document().unwrap();
        document.body().unwrap().set_inner_html(html);
        document
            .images()
            .item(0)
            .unwrap()
            .dyn_into::<HtmlImageElement>()
            .unwrap()
    }

    #[wasm_bindgen_test]
    fn test_mark_failed_hides_and_relabels() {
        let image = mount_image(r#"<img alt="Main hall" src="/no-such-image.png">"#);
        mark_failed(&image);

        assert_eq!(image.alt(), "Main hall (Image failed to load)");
        assert_eq!(
            HtmlElement::style(&image)
                .get_property_value("display")
                .unwrap(),
            "none"
        );
    }

    #[wasm_bindgen_test]
    fn test_error_event_reaches_fallback() {
        let image = mount_image(r#"<img alt="Gallery" src="/no-such-image.png">"#);
        let mut subs = Subscriptions::new();
        ImageWatch::new(ReadyState::Complete).bind(&mut subs).unwrap();

        let error = Event::new("error").unwrap();
        image.dispatch_event(&error).unwrap();

        assert_eq!(image.alt(), "Gallery (Image failed to load)");
        assert_eq!(
            HtmlElement::style(&image)
                .get_property_value("display")
                .unwrap(),
            "none"
        );
    }
}
