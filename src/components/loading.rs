//! Loading splash screen.
//!
//! Fades the overlay out after a fixed delay, then removes it from layout.

use std::rc::Rc;

use crate::config::{ids, timing};
use crate::core::error::InitError;
use crate::core::{Dom, Page, Patch, Target};

/// Schedule the overlay fade-out and removal.
pub fn init(page: &Page) -> Result<(), InitError> {
    let screen = page.dom.require(ids::LOADING_SCREEN)?;
    let dom = Rc::clone(&page.dom);
    let timers = Rc::clone(&page.timers);

    page.timers.set_timeout(
        timing::LOADING_FADE_DELAY,
        Box::new(move || {
            dom.apply(&Patch::style(screen.clone(), "opacity", "0"));
            timers.set_timeout(
                timing::LOADING_FADE_DURATION,
                Box::new(move || dom.apply(&Patch::style(screen, "display", "none"))),
            );
        }),
    );
    Ok(())
}

/// Remove the overlay immediately. Used when startup fails.
pub fn force_hide(dom: &dyn Dom) {
    dom.apply(&Patch::style(
        Target::Id(ids::LOADING_SCREEN),
        "display",
        "none",
    ));
}
