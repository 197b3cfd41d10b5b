//! Timer scheduling abstraction.
//!
//! Provides the [`Scheduler`] seam over `setTimeout`/`setInterval` and a
//! trailing-edge [`Debounce`] built on top of it.

use std::cell::Cell;
use std::rc::Rc;

/// Handle of a scheduled timeout or interval.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(pub u32);

/// Deferred execution on the event loop.
pub trait Scheduler {
    /// Run `callback` once after `ms` milliseconds.
    fn set_timeout(&self, ms: u32, callback: Box<dyn FnOnce()>) -> TimerId;

    /// Run `callback` every `ms` milliseconds until cleared.
    fn set_interval(&self, ms: u32, callback: Box<dyn FnMut()>) -> TimerId;

    /// Cancel a pending timeout or interval. Unknown ids are ignored.
    fn clear(&self, id: TimerId);
}

/// Trailing-edge debounce: `callback` runs once `wait` ms after the last call.
pub struct Debounce {
    timers: Rc<dyn Scheduler>,
    wait: u32,
    pending: Rc<Cell<Option<TimerId>>>,
    callback: Rc<dyn Fn()>,
}

impl Debounce {
    pub fn new(timers: Rc<dyn Scheduler>, wait: u32, callback: impl Fn() + 'static) -> Self {
        Self {
            timers,
            wait,
            pending: Rc::new(Cell::new(None)),
            callback: Rc::new(callback),
        }
    }

    /// Record a trigger, restarting the quiet period.
    pub fn call(&self) {
        if let Some(id) = self.pending.take() {
            self.timers.clear(id);
        }

        let pending = Rc::clone(&self.pending);
        let callback = Rc::clone(&self.callback);
        let id = self.timers.set_timeout(
            self.wait,
            Box::new(move || {
                pending.set(None);
                callback();
            }),
        );
        self.pending.set(Some(id));
    }
}
