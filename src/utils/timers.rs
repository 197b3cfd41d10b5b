//! [`Scheduler`] implementation over `gloo-timers` callbacks.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};

use crate::core::{Scheduler, TimerId};

/// Held only for its `Drop`, which cancels the browser timer.
#[allow(dead_code)]
enum Handle {
    Timeout(Timeout),
    Interval(Interval),
}

/// Browser timers keyed by [`TimerId`].
///
/// Dropping a handle cancels the browser timer, so handles stay in the map
/// until cleared. One-shot handles that already fired are pruned on the next
/// scheduling call, never from inside their own callback.
#[derive(Default)]
pub struct WebScheduler {
    next_id: Cell<u32>,
    handles: RefCell<HashMap<TimerId, Handle>>,
    fired: Rc<RefCell<Vec<TimerId>>>,
}

impl WebScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    fn allocate(&self) -> TimerId {
        self.prune();
        let id = TimerId(self.next_id.get());
        self.next_id.set(id.0.wrapping_add(1));
        id
    }

    fn prune(&self) {
        let fired = std::mem::take(&mut *self.fired.borrow_mut());
        if fired.is_empty() {
            return;
        }
        let mut handles = self.handles.borrow_mut();
        for id in fired {
            handles.remove(&id);
        }
    }
}

impl Scheduler for WebScheduler {
    fn set_timeout(&self, ms: u32, callback: Box<dyn FnOnce()>) -> TimerId {
        let id = self.allocate();
        let fired = Rc::clone(&self.fired);
        let timeout = Timeout::new(ms, move || {
            callback();
            fired.borrow_mut().push(id);
        });
        self.handles
            .borrow_mut()
            .insert(id, Handle::Timeout(timeout));
        id
    }

    fn set_interval(&self, ms: u32, mut callback: Box<dyn FnMut()>) -> TimerId {
        let id = self.allocate();
        let interval = Interval::new(ms, move || callback());
        self.handles
            .borrow_mut()
            .insert(id, Handle::Interval(interval));
        id
    }

    fn clear(&self, id: TimerId) {
        // Dropping the handle outside the borrow cancels the browser timer
        let handle = self.handles.borrow_mut().remove(&id);
        drop(handle);
    }
}
