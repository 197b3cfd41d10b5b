//! Event listener registration with a single teardown path.
//!
//! Every listener a controller binds goes through [`Subscriptions`]. Dropping
//! the registry removes every listener and disconnects every observer.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;
use web_sys::{
    Event, EventTarget, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};

use crate::core::error::InitError;
use crate::models::RevealOptions;

/// A bound DOM event listener, removed on drop.
struct Listener {
    target: EventTarget,
    kind: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.callback.as_ref().unchecked_ref());
    }
}

/// A live intersection observer, disconnected on drop.
struct Observation {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl Drop for Observation {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Registry owning every listener bound by the site.
#[derive(Default)]
pub struct Subscriptions {
    listeners: Vec<Listener>,
    observers: Vec<Observation>,
}

impl Subscriptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Listen for `kind` events on `target`, downcasting each event to `E`.
    pub fn listen<E>(
        &mut self,
        target: &EventTarget,
        kind: &'static str,
        mut handler: impl FnMut(E) + 'static,
    ) -> Result<(), InitError>
    where
        E: JsCast + 'static,
    {
        let callback = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            handler(event.unchecked_into::<E>());
        });
        target
            .add_event_listener_with_callback(kind, callback.as_ref().unchecked_ref())
            .map_err(|_| InitError::BindFailed(kind))?;
        self.listeners.push(Listener {
            target: target.clone(),
            kind,
            callback,
        });
        Ok(())
    }

    /// Observe `targets`, calling `on_visible` once per element as it
    /// intersects the viewport; the element is unobserved afterwards.
    pub fn observe_once(
        &mut self,
        targets: &[web_sys::Element],
        options: RevealOptions,
        mut on_visible: impl FnMut(&web_sys::Element) + 'static,
    ) -> Result<(), InitError> {
        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry = entry.unchecked_into::<IntersectionObserverEntry>();
                    if entry.is_intersecting() {
                        let element = entry.target();
                        on_visible(&element);
                        observer.unobserve(&element);
                    }
                }
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_threshold(&options.threshold.into());
        init.set_root_margin(options.root_margin);
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
                .map_err(|_| InitError::BindFailed("IntersectionObserver"))?;

        for target in targets {
            observer.observe(target);
        }
        self.observers.push(Observation {
            observer,
            _callback: callback,
        });
        Ok(())
    }

    /// Number of bound listeners and observers.
    pub fn len(&self) -> usize {
        self.listeners.len() + self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Keep every subscription alive for the rest of the page's life.
    pub fn keep_alive(self) {
        std::mem::forget(self);
    }
}
