//! Startup sequence.
//!
//! Initializes every controller in page order and hands each one to an
//! `attach` step. In the browser that step binds the controller's listeners
//! into a single [`Subscriptions`] registry, kept alive for the page's life.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;
use web_sys::Event;

use crate::components::{
    Accessibility, CursorFollower, Feature, ImageWatch, LoadTiming, Navigation, ResizeRefresh,
    ScrollEffects, Slideshow, SmoothScroll, Venues, loading,
};
use crate::core::Page;
use crate::core::error::InitError;
use crate::models::ReadyState;
use crate::utils::{Subscriptions, dom};

/// Initialize the page controllers in order, attaching each as it is ready.
/// Stops at the first failure.
pub fn init_features(
    page: &Page,
    attach: &mut impl FnMut(&dyn Feature) -> Result<(), InitError>,
) -> Result<(), InitError> {
    loading::init(page)?;

    match CursorFollower::init(page)? {
        Some(cursor) => attach(&cursor)?,
        None => tracing::debug!("custom cursor disabled"),
    }

    attach(&Navigation::init(page)?)?;
    attach(&Slideshow::init(page))?;
    attach(&Venues::init(page)?)?;
    attach(&ScrollEffects::init(page))?;
    attach(&SmoothScroll::init(page)?)?;
    attach(&Accessibility::init(page))?;
    Ok(())
}

/// Handlers bound whether or not the controllers started.
fn page_wide(page: &Page, ready: ReadyState) -> Vec<Box<dyn Feature>> {
    vec![
        Box::new(ResizeRefresh::new(page)),
        Box::new(ImageWatch::new(ready)),
        Box::new(LoadTiming::new(ready)),
    ]
}

/// Run the startup sequence, falling back to a hidden overlay on failure,
/// then attach the page-wide handlers.
pub fn start_with(
    page: &Page,
    ready: ReadyState,
    mut attach: impl FnMut(&dyn Feature) -> Result<(), InitError>,
) -> Result<(), InitError> {
    let result = init_features(page, &mut attach);
    if let Err(err) = &result {
        tracing::error!(%err, "error initializing features");
        loading::force_hide(page.dom.as_ref());
    }

    for feature in page_wide(page, ready) {
        if let Err(err) = attach(feature.as_ref()) {
            tracing::warn!(feature = feature.name(), %err, "page-wide handler unavailable");
        }
    }
    result
}

/// Start against the live document, binding every listener.
pub fn start(page: &Page, ready: ReadyState) -> Subscriptions {
    let mut subs = Subscriptions::new();
    let result = start_with(page, ready, |feature| {
        feature.bind(&mut subs)?;
        tracing::debug!(feature = feature.name(), "bound");
        Ok(())
    });
    if result.is_ok() {
        tracing::info!(listeners = subs.len(), "exhibition site initialized");
    }
    subs
}

fn boot() {
    let Some(page) = Page::web() else {
        tracing::error!("no document to attach to");
        return;
    };
    let ready = dom::document()
        .map(|document| dom::ready_state(&document))
        .unwrap_or(ReadyState::Interactive);
    start(&page, ready).keep_alive();
}

/// Start once the document has been parsed.
pub fn run_when_ready() -> Result<(), InitError> {
    let document = dom::document()?;
    if dom::ready_state(&document).is_parsed() {
        boot();
        return Ok(());
    }

    let ready = Closure::once_into_js(move |_: Event| boot());
    document
        .add_event_listener_with_callback("DOMContentLoaded", ready.unchecked_ref())
        .map_err(|_| InitError::BindFailed("DOMContentLoaded"))
}
