//! Hero slideshow controller.
//!
//! Owns the [`Carousel`] state and the single autoplay interval. Every input
//! (timer tick, dot click, arrow keys, swipe) funnels into [`Slideshow::show`].

use leptos::prelude::*;
use web_sys::{FocusEvent, KeyboardEvent, MouseEvent, TouchEvent};

use crate::components::{Feature, accessibility};
use crate::config::{classes, timing};
use crate::core::error::InitError;
use crate::core::{Page, Patch, Target, TimerId};
use crate::models::{Carousel, Swipe, TouchTrack};
use crate::utils::{Subscriptions, dom};

/// Patches showing slide `active` and its dot, hiding all others.
pub fn render(active: usize, slides: usize, dots: usize) -> Vec<Patch> {
    let slide_classes = (0..slides).map(|i| {
        Patch::toggle_class(Target::nth(classes::SLIDE, i), classes::ACTIVE, i == active)
    });
    let dot_classes = (0..dots)
        .map(|i| Patch::toggle_class(Target::nth(classes::DOT, i), classes::ACTIVE, i == active));

    slide_classes
        .chain(dot_classes)
        .chain(accessibility::slide_states(active, slides, dots))
        .collect()
}

#[derive(Clone)]
pub struct Slideshow {
    page: Page,
    carousel: RwSignal<Carousel>,
    dots: usize,
    timer: RwSignal<Option<TimerId>>,
    touch: RwSignal<TouchTrack>,
}

impl Slideshow {
    /// Create the controller over the document's slides and start autoplay.
    pub fn init(page: &Page) -> Self {
        let slides = page.dom.count(classes::SLIDE);
        let dots = page.dom.count(classes::DOT);
        if slides != dots {
            tracing::debug!(slides, dots, "slide and dot counts differ");
        }

        let slideshow = Self {
            page: page.clone(),
            carousel: RwSignal::new(Carousel::new(slides)),
            dots,
            timer: RwSignal::new(None),
            touch: RwSignal::new(TouchTrack::default()),
        };
        slideshow.start();
        slideshow
    }

    pub fn current(&self) -> usize {
        self.carousel.with_untracked(Carousel::current)
    }

    pub fn is_playing(&self) -> bool {
        self.carousel.with_untracked(Carousel::is_playing)
    }

    /// Whether an autoplay interval is scheduled.
    pub fn is_running(&self) -> bool {
        self.timer.with_untracked(Option::is_some)
    }

    /// Show slide `index`. Invalid indices are logged and ignored.
    pub fn show(&self, index: usize) {
        match self.carousel.try_update(|carousel| carousel.select(index)) {
            Some(Ok(active)) => {
                let slides = self.carousel.with_untracked(Carousel::len);
                self.page.dom.apply_all(&render(active, slides, self.dots));
            }
            Some(Err(err)) => tracing::warn!(%err, "error showing slide"),
            None => {}
        }
    }

    pub fn next(&self) {
        self.show(self.carousel.with_untracked(Carousel::next_index));
    }

    pub fn prev(&self) {
        self.show(self.carousel.with_untracked(Carousel::prev_index));
    }

    /// Start autoplay if the user has not paused it.
    pub fn start(&self) {
        if self.is_playing() {
            self.schedule();
        }
    }

    pub fn stop(&self) {
        if let Some(id) = self.timer.try_update(Option::take).flatten() {
            self.page.timers.clear(id);
        }
    }

    /// Hover or focus entered the container.
    pub fn pause(&self) {
        self.stop();
    }

    /// Hover or focus left the container. Resumes even after a Space pause.
    pub fn resume(&self) {
        self.schedule();
    }

    pub fn on_dot_click(&self, index: usize) {
        self.show(index);
        self.restart();
    }

    /// Handle a key pressed inside the container; returns whether it was consumed.
    pub fn on_key(&self, key: &str) -> bool {
        match key {
            "ArrowLeft" => {
                self.prev();
                self.restart();
            }
            "ArrowRight" => {
                self.next();
                self.restart();
            }
            " " => {
                let playing = self
                    .carousel
                    .try_update(Carousel::toggle_playing)
                    .unwrap_or(false);
                if playing {
                    self.start();
                } else {
                    self.stop();
                }
            }
            _ => return false,
        }
        true
    }

    pub fn on_touch_start(&self, x: f64) {
        self.touch.update(|touch| touch.begin(x));
        self.stop();
    }

    pub fn on_touch_end(&self, x: f64) {
        match self.touch.with_untracked(|touch| touch.finish(x)) {
            Swipe::Forward => self.next(),
            Swipe::Backward => self.prev(),
            Swipe::None => {}
        }
        self.start();
    }

    fn restart(&self) {
        self.stop();
        self.start();
    }

    /// Replace any running interval with a fresh one.
    fn schedule(&self) {
        self.stop();
        let this = self.clone();
        let id = self
            .page
            .timers
            .set_interval(timing::SLIDE_INTERVAL, Box::new(move || this.next()));
        self.timer.set(Some(id));
    }
}

impl Feature for Slideshow {
    fn name(&self) -> &'static str {
        "slideshow"
    }

    fn bind(&self, subs: &mut Subscriptions) -> Result<(), InitError> {
        let document = dom::document()?;
        let container_selector = format!(".{}", classes::SLIDESHOW_CONTAINER);

        if let Some(container) = dom::elements_by_class(&document, classes::SLIDESHOW_CONTAINER)
            .into_iter()
            .next()
        {
            let this = self.clone();
            subs.listen(&container, "touchstart", move |event: TouchEvent| {
                if let Some(touch) = event.changed_touches().item(0) {
                    this.on_touch_start(f64::from(touch.screen_x()));
                }
            })?;
            let this = self.clone();
            subs.listen(&container, "touchend", move |event: TouchEvent| {
                if let Some(touch) = event.changed_touches().item(0) {
                    this.on_touch_end(f64::from(touch.screen_x()));
                }
            })?;

            let this = self.clone();
            subs.listen(&container, "mouseenter", move |_: MouseEvent| this.pause())?;
            let this = self.clone();
            subs.listen(&container, "mouseleave", move |_: MouseEvent| this.resume())?;
            let this = self.clone();
            subs.listen(&container, "focusin", move |_: FocusEvent| this.pause())?;
            let this = self.clone();
            subs.listen(&container, "focusout", move |_: FocusEvent| this.resume())?;
        }

        let this = self.clone();
        subs.listen(&document, "keydown", move |event: KeyboardEvent| {
            if dom::target_within(&event, &container_selector) && this.on_key(&event.key()) {
                event.prevent_default();
            }
        })?;

        for (index, dot) in dom::elements_by_class(&document, classes::DOT)
            .into_iter()
            .enumerate()
        {
            let this = self.clone();
            subs.listen(&dot, "click", move |_: MouseEvent| this.on_dot_click(index))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::testing::{FakeDom, ManualClock, capture_logs, fake_page};
    use std::rc::Rc;

    fn slideshow(count: usize) -> (Slideshow, Rc<FakeDom>, Rc<ManualClock>) {
        let (page, dom, clock) = fake_page(
            FakeDom::new()
                .with_class(classes::SLIDE, count)
                .with_class(classes::DOT, count),
        );
        (Slideshow::init(&page), dom, clock)
    }

    fn assert_only_active(dom: &FakeDom, count: usize, active: usize) {
        assert_eq!(dom.marked(classes::SLIDE, classes::ACTIVE), vec![active]);
        assert_eq!(dom.marked(classes::DOT, classes::ACTIVE), vec![active]);
        for i in 0..count {
            let hidden = dom.attr(&Target::nth(classes::SLIDE, i), "aria-hidden");
            let selected = dom.attr(&Target::nth(classes::DOT, i), "aria-selected");
            let expected = if i == active { "false" } else { "true" };
            assert_eq!(hidden.as_deref(), Some(expected));
            let expected = if i == active { "true" } else { "false" };
            assert_eq!(selected.as_deref(), Some(expected));
        }
    }

    #[test]
    fn test_show_marks_exactly_one() {
        let (show, dom, _) = slideshow(4);
        for i in [2, 0, 3, 1] {
            show.show(i);
            assert_eq!(show.current(), i);
            assert_only_active(&dom, 4, i);
        }
    }

    #[test]
    fn test_show_out_of_range_changes_nothing() {
        let (show, dom, _) = slideshow(3);
        show.show(1);
        show.show(7);
        assert_eq!(show.current(), 1);
        assert_only_active(&dom, 3, 1);
    }

    #[test]
    fn test_empty_slideshow_fails_soft() {
        let (show, _, clock) = slideshow(0);
        let logs = capture_logs(|| {
            show.show(0);
            show.next();
            show.prev();
            clock.advance(12_000);
        });
        assert_eq!(show.current(), 0);
        assert!(logs.contains("WARN"));
        assert!(logs.contains("error showing slide"));
        assert!(logs.contains("slideshow has no slides"));
    }

    #[test]
    fn test_out_of_range_is_logged() {
        let (show, _, _) = slideshow(3);
        let logs = capture_logs(|| show.show(7));
        assert!(logs.contains("error showing slide"));
        assert!(logs.contains("slide index 7 out of range (len 3)"));
    }

    #[test]
    fn test_autoplay_advances_per_interval() {
        let (show, dom, clock) = slideshow(3);
        clock.advance(3999);
        assert_eq!(show.current(), 0);
        clock.advance(1);
        assert_eq!(show.current(), 1);
        clock.advance(8000);
        assert_eq!(show.current(), 0);
        assert_only_active(&dom, 3, 0);
    }

    #[test]
    fn test_space_toggles_playback_without_moving() {
        let (show, _, clock) = slideshow(3);
        clock.advance(4000);
        assert!(show.on_key(" "));
        assert!(!show.is_playing());
        assert_eq!(show.current(), 1);

        clock.advance(20_000);
        assert_eq!(show.current(), 1);

        assert!(show.on_key(" "));
        assert_eq!(show.current(), 1);
        clock.advance(4000);
        assert_eq!(show.current(), 2);
    }

    #[test]
    fn test_manual_navigation_restarts_interval() {
        let (show, _, clock) = slideshow(5);
        clock.advance(3000);
        show.on_dot_click(3);
        assert_eq!(show.current(), 3);

        // The old interval would have fired at 4000
        clock.advance(3999);
        assert_eq!(show.current(), 3);
        clock.advance(1);
        assert_eq!(show.current(), 4);

        assert!(show.on_key("ArrowLeft"));
        assert_eq!(show.current(), 3);
        assert!(show.on_key("ArrowRight"));
        assert_eq!(show.current(), 4);
        assert!(!show.on_key("Enter"));
        assert_eq!(clock.intervals(), 1);
    }

    #[test]
    fn test_arrow_wraps_around() {
        let (show, _, _) = slideshow(3);
        show.on_key("ArrowLeft");
        assert_eq!(show.current(), 2);
        show.on_key("ArrowRight");
        assert_eq!(show.current(), 0);
    }

    #[test]
    fn test_swipe_directions() {
        let (show, _, clock) = slideshow(3);

        show.on_touch_start(300.0);
        assert!(!show.is_running());
        show.on_touch_end(200.0);
        assert_eq!(show.current(), 1);
        assert!(show.is_running());

        show.on_touch_start(200.0);
        show.on_touch_end(320.0);
        assert_eq!(show.current(), 0);

        show.on_touch_start(200.0);
        show.on_touch_end(250.0);
        assert_eq!(show.current(), 0);
        assert_eq!(clock.intervals(), 1);
    }

    #[test]
    fn test_hover_pauses_and_resumes() {
        let (show, _, clock) = slideshow(3);
        show.pause();
        clock.advance(10_000);
        assert_eq!(show.current(), 0);

        show.resume();
        show.resume();
        assert_eq!(clock.intervals(), 1);
        clock.advance(4000);
        assert_eq!(show.current(), 1);
    }

    #[test]
    fn test_resume_ignores_space_pause() {
        let (show, _, clock) = slideshow(3);
        show.on_key(" ");
        show.pause();
        show.resume();
        assert!(!show.is_playing());
        clock.advance(4000);
        assert_eq!(show.current(), 1);
    }

    #[test]
    fn test_swipe_respects_space_pause() {
        let (show, _, _) = slideshow(3);
        show.on_key(" ");
        show.on_touch_start(300.0);
        show.on_touch_end(100.0);
        assert_eq!(show.current(), 1);
        assert!(!show.is_running());
    }
}
