//! The page surface shared by all controllers.

use std::rc::Rc;

use super::dom::Dom;
use super::timer::Scheduler;

/// Document and timers injected into each controller.
///
/// Cloning is cheap; all clones address the same document.
#[derive(Clone)]
pub struct Page {
    pub dom: Rc<dyn Dom>,
    pub timers: Rc<dyn Scheduler>,
}

impl Page {
    pub fn new(dom: Rc<dyn Dom>, timers: Rc<dyn Scheduler>) -> Self {
        Self { dom, timers }
    }

    /// Page backed by the browser document and `gloo-timers`.
    pub fn web() -> Option<Self> {
        let dom = crate::utils::WebDom::new()?;
        Some(Self::new(
            Rc::new(dom),
            Rc::new(crate::utils::WebScheduler::new()),
        ))
    }
}
