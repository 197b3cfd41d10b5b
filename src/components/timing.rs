//! Page-load timing report.

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsValue;
use web_sys::Event;

use crate::components::Feature;
use crate::core::error::InitError;
use crate::models::ReadyState;
use crate::utils::{Subscriptions, dom};

/// Milliseconds from fetch start to the end of the load event.
pub fn load_time(fetch_start: f64, load_event_end: f64) -> Option<f64> {
    let elapsed = load_event_end - fetch_start;
    (elapsed.is_finite() && elapsed >= 0.0).then_some(elapsed)
}

fn number(entry: &JsValue, key: &str) -> Option<f64> {
    js_sys::Reflect::get(entry, &JsValue::from_str(key))
        .ok()?
        .as_f64()
}

/// Read the navigation entry. `loadEventEnd` is only final after the load
/// handlers have returned, hence the deferral to the next macrotask.
async fn report() {
    TimeoutFuture::new(0).await;

    let Some(performance) = dom::window().and_then(|window| window.performance()) else {
        return;
    };
    let entries = performance.get_entries_by_type("navigation");
    let entry = entries.get(0);
    if entry.is_undefined() {
        return;
    }

    match (number(&entry, "fetchStart"), number(&entry, "loadEventEnd")) {
        (Some(start), Some(end)) => {
            if let Some(ms) = load_time(start, end) {
                tracing::info!(ms, "page load time");
            }
        }
        _ => tracing::debug!("navigation timing unavailable"),
    }
}

/// Logs the page load time once the window has loaded.
pub struct LoadTiming {
    loaded: bool,
}

impl LoadTiming {
    pub fn new(ready: ReadyState) -> Self {
        Self {
            loaded: ready.is_loaded(),
        }
    }

    /// Whether `load` already fired, so the report is spawned immediately.
    pub fn runs_now(&self) -> bool {
        self.loaded
    }
}

impl Feature for LoadTiming {
    fn name(&self) -> &'static str {
        "load timing"
    }

    fn bind(&self, subs: &mut Subscriptions) -> Result<(), InitError> {
        if self.runs_now() {
            wasm_bindgen_futures::spawn_local(report());
            return Ok(());
        }

        let window = dom::window().ok_or(InitError::NoDocument)?;
        subs.listen(&window, "load", |_: Event| {
            wasm_bindgen_futures::spawn_local(report());
        })
    }
}
