//! Expandable venue list.

use leptos::prelude::*;
use web_sys::MouseEvent;

use crate::components::{Feature, accessibility};
use crate::config::{LABEL_SHOW_ALL_VENUES, LABEL_SHOW_LESS_VENUES, classes, ids, timing};
use crate::core::error::InitError;
use crate::core::{Page, Patch, Target, TimerId};
use crate::utils::{Subscriptions, dom};

/// Patches revealing the additional venue at `index`.
fn reveal(index: usize) -> [Patch; 2] {
    let venue = Target::nth(classes::ADDITIONAL_VENUE, index);
    [
        Patch::style(venue.clone(), "display", "block"),
        Patch::add_class(venue, classes::FADE_IN),
    ]
}

#[derive(Clone)]
pub struct Venues {
    page: Page,
    toggle: Target,
    showing_all: RwSignal<bool>,
    pending: RwSignal<Vec<TimerId>>,
}

impl Venues {
    pub fn init(page: &Page) -> Result<Self, InitError> {
        let toggle = page.dom.require(ids::VENUES_TOGGLE_BTN)?;
        Ok(Self {
            page: page.clone(),
            toggle,
            showing_all: RwSignal::new(false),
            pending: RwSignal::new(Vec::new()),
        })
    }

    pub fn is_showing_all(&self) -> bool {
        self.showing_all.get_untracked()
    }

    pub fn toggle(&self) {
        let showing_all = self
            .showing_all
            .try_update(|showing| {
                *showing = !*showing;
                *showing
            })
            .unwrap_or(false);

        if showing_all {
            self.expand();
        } else {
            self.collapse();
        }
    }

    /// Reveal each additional venue in turn.
    fn expand(&self) {
        let count = self.page.dom.count(classes::ADDITIONAL_VENUE);
        let timers: Vec<TimerId> = (0..count)
            .map(|index| {
                let dom = self.page.dom.clone();
                let delay = timing::VENUE_STAGGER.saturating_mul(index as u32);
                self.page
                    .timers
                    .set_timeout(delay, Box::new(move || dom.apply_all(&reveal(index))))
            })
            .collect();
        self.pending.set(timers);

        self.page.dom.apply_all(&[
            Patch::text(self.toggle.clone(), LABEL_SHOW_LESS_VENUES),
            accessibility::expanded(self.toggle.clone(), true),
        ]);
    }

    /// Hide every additional venue at once and return to the section top.
    fn collapse(&self) {
        let pending = self.pending.try_update(std::mem::take).unwrap_or_default();
        for id in pending {
            self.page.timers.clear(id);
        }

        let count = self.page.dom.count(classes::ADDITIONAL_VENUE);
        let mut patches: Vec<Patch> = (0..count)
            .flat_map(|index| {
                let venue = Target::nth(classes::ADDITIONAL_VENUE, index);
                [
                    Patch::style(venue.clone(), "display", "none"),
                    Patch::remove_class(venue, classes::FADE_IN),
                ]
            })
            .collect();
        patches.push(Patch::text(self.toggle.clone(), LABEL_SHOW_ALL_VENUES));
        patches.push(accessibility::expanded(self.toggle.clone(), false));
        self.page.dom.apply_all(&patches);

        self.page.dom.scroll_into_view(ids::VENUES);
    }
}

impl Feature for Venues {
    fn name(&self) -> &'static str {
        "venues"
    }

    fn bind(&self, subs: &mut Subscriptions) -> Result<(), InitError> {
        let document = dom::document()?;
        let button = dom::element_by_id(&document, ids::VENUES_TOGGLE_BTN)?;
        let this = self.clone();
        subs.listen(&button, "click", move |_: MouseEvent| this.toggle())
    }
}
