//! In-memory [`Dom`] and [`Scheduler`] for controller tests.

use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::io;
use std::rc::Rc;
use std::sync::{Arc, Mutex};

use super::dom::{Dom, Op, Patch, Target, Viewport};
use super::page::Page;
use super::timer::{Scheduler, TimerId};

/// Recorded state of one fake element.
#[derive(Clone, Debug, Default)]
pub struct FakeElement {
    pub classes: BTreeSet<&'static str>,
    pub attrs: BTreeMap<&'static str, String>,
    pub styles: BTreeMap<&'static str, String>,
    pub text: String,
    pub offset_top: f64,
}

/// Document fake that records every patch and side effect.
pub struct FakeDom {
    elements: RefCell<BTreeMap<Target, FakeElement>>,
    counts: RefCell<BTreeMap<&'static str, usize>>,
    scroll_y: Cell<f64>,
    viewport: Cell<Viewport>,
    pub scrolled_to: RefCell<Vec<f64>>,
    pub scrolled_into_view: RefCell<Vec<&'static str>>,
    pub clicks: RefCell<Vec<Target>>,
}

impl FakeDom {
    /// Empty document with a wide, hover-capable viewport.
    pub fn new() -> Self {
        Self {
            elements: RefCell::new(BTreeMap::new()),
            counts: RefCell::new(BTreeMap::new()),
            scroll_y: Cell::new(0.0),
            viewport: Cell::new(Viewport {
                width: 1280.0,
                hover: true,
            }),
            scrolled_to: RefCell::new(Vec::new()),
            scrolled_into_view: RefCell::new(Vec::new()),
            clicks: RefCell::new(Vec::new()),
        }
    }

    pub fn with_ids(self, ids: &[&'static str]) -> Self {
        for id in ids {
            self.elements
                .borrow_mut()
                .insert(Target::Id(*id), FakeElement::default());
        }
        self
    }

    pub fn with_class(self, class: &'static str, count: usize) -> Self {
        for index in 0..count {
            self.elements
                .borrow_mut()
                .insert(Target::nth(class, index), FakeElement::default());
        }
        self.counts.borrow_mut().insert(class, count);
        self
    }

    pub fn with_toggle_bars(self) -> Self {
        for index in 0..3 {
            self.elements
                .borrow_mut()
                .insert(Target::ToggleBar(index), FakeElement::default());
        }
        self
    }

    pub fn with_offset(self, id: &'static str, top: f64) -> Self {
        self.elements
            .borrow_mut()
            .entry(Target::Id(id))
            .or_default()
            .offset_top = top;
        self
    }

    pub fn with_viewport(self, width: f64, hover: bool) -> Self {
        self.viewport.set(Viewport { width, hover });
        self
    }

    pub fn set_scroll_y(&self, y: f64) {
        self.scroll_y.set(y);
    }

    pub fn set_viewport(&self, width: f64, hover: bool) {
        self.viewport.set(Viewport { width, hover });
    }

    /// Snapshot of an element; panics if it was never registered.
    pub fn element(&self, target: &Target) -> FakeElement {
        self.elements
            .borrow()
            .get(target)
            .cloned()
            .unwrap_or_else(|| panic!("no fake element for {:?}", target))
    }

    pub fn has_class(&self, target: &Target, class: &str) -> bool {
        self.element(target).classes.contains(class)
    }

    pub fn attr(&self, target: &Target, name: &str) -> Option<String> {
        self.element(target).attrs.get(name).cloned()
    }

    pub fn style(&self, target: &Target, property: &str) -> Option<String> {
        self.element(target).styles.get(property).cloned()
    }

    pub fn text(&self, target: &Target) -> String {
        self.element(target).text
    }

    /// Indices of the elements of `class` currently carrying `marker`.
    pub fn marked(&self, class: &'static str, marker: &str) -> Vec<usize> {
        (0..self.count(class))
            .filter(|&i| self.has_class(&Target::nth(class, i), marker))
            .collect()
    }
}

impl Default for FakeDom {
    fn default() -> Self {
        Self::new()
    }
}

impl Dom for FakeDom {
    fn exists(&self, target: &Target) -> bool {
        self.elements.borrow().contains_key(target)
    }

    fn count(&self, class: &'static str) -> usize {
        self.counts.borrow().get(class).copied().unwrap_or(0)
    }

    fn apply(&self, patch: &Patch) {
        let mut elements = self.elements.borrow_mut();
        let Some(element) = elements.get_mut(&patch.target) else {
            return;
        };
        match &patch.op {
            Op::AddClass(class) => {
                element.classes.insert(*class);
            }
            Op::RemoveClass(class) => {
                element.classes.remove(class);
            }
            Op::SetAttr(name, value) => {
                element.attrs.insert(*name, value.clone());
            }
            Op::SetStyle(property, value) => {
                element.styles.insert(*property, value.clone());
            }
            Op::SetText(value) => element.text = value.clone(),
        }
    }

    fn offset_top(&self, id: &str) -> Option<f64> {
        self.elements
            .borrow()
            .iter()
            .find(|(target, _)| matches!(target, Target::Id(known) if *known == id))
            .map(|(_, element)| element.offset_top)
    }

    fn scroll_y(&self) -> f64 {
        self.scroll_y.get()
    }

    fn viewport(&self) -> Viewport {
        self.viewport.get()
    }

    fn scroll_to(&self, top: f64) {
        self.scrolled_to.borrow_mut().push(top);
    }

    fn scroll_into_view(&self, id: &'static str) {
        self.scrolled_into_view.borrow_mut().push(id);
    }

    fn click(&self, target: &Target) {
        self.clicks.borrow_mut().push(target.clone());
    }
}

enum Task {
    Once(Box<dyn FnOnce()>),
    Repeat(Box<dyn FnMut()>, u32),
}

struct Entry {
    id: TimerId,
    due: u64,
    task: Task,
}

/// Scheduler driven by explicit [`ManualClock::advance`] calls.
pub struct ManualClock {
    now: Cell<u64>,
    next_id: Cell<u32>,
    entries: RefCell<Vec<Entry>>,
    cancelled: RefCell<HashSet<TimerId>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            now: Cell::new(0),
            next_id: Cell::new(1),
            entries: RefCell::new(Vec::new()),
            cancelled: RefCell::new(HashSet::new()),
        }
    }

    pub fn now(&self) -> u64 {
        self.now.get()
    }

    /// Number of timers still scheduled.
    pub fn pending(&self) -> usize {
        self.entries.borrow().len()
    }

    /// Number of scheduled intervals.
    pub fn intervals(&self) -> usize {
        self.entries
            .borrow()
            .iter()
            .filter(|entry| matches!(entry.task, Task::Repeat(..)))
            .count()
    }

    /// Move time forward, running every timer that falls due in order.
    pub fn advance(&self, ms: u64) {
        let until = self.now.get() + ms;
        loop {
            let next = {
                let mut entries = self.entries.borrow_mut();
                let position = entries
                    .iter()
                    .enumerate()
                    .filter(|(_, entry)| entry.due <= until)
                    .min_by_key(|(_, entry)| (entry.due, entry.id))
                    .map(|(position, _)| position);
                position.map(|position| entries.remove(position))
            };
            let Some(entry) = next else {
                break;
            };

            self.now.set(entry.due);
            match entry.task {
                Task::Once(callback) => callback(),
                Task::Repeat(mut callback, period) => {
                    callback();
                    if !self.cancelled.borrow_mut().remove(&entry.id) {
                        self.entries.borrow_mut().push(Entry {
                            id: entry.id,
                            due: entry.due + u64::from(period.max(1)),
                            task: Task::Repeat(callback, period),
                        });
                    }
                }
            }
        }
        self.now.set(until);
    }

    fn schedule(&self, ms: u32, task: Task) -> TimerId {
        let id = TimerId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.entries.borrow_mut().push(Entry {
            id,
            due: self.now.get() + u64::from(ms),
            task,
        });
        id
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler for ManualClock {
    fn set_timeout(&self, ms: u32, callback: Box<dyn FnOnce()>) -> TimerId {
        self.schedule(ms, Task::Once(callback))
    }

    fn set_interval(&self, ms: u32, callback: Box<dyn FnMut()>) -> TimerId {
        self.schedule(ms, Task::Repeat(callback, ms))
    }

    fn clear(&self, id: TimerId) {
        let mut entries = self.entries.borrow_mut();
        let before = entries.len();
        entries.retain(|entry| entry.id != id);
        if entries.len() == before {
            // Possibly an interval currently running; stop it from rescheduling
            self.cancelled.borrow_mut().insert(id);
        }
    }
}

/// A page over a fake document and a manual clock.
pub fn fake_page(dom: FakeDom) -> (Page, Rc<FakeDom>, Rc<ManualClock>) {
    let dom = Rc::new(dom);
    let clock = Rc::new(ManualClock::new());
    let page = Page::new(dom.clone(), clock.clone());
    (page, dom, clock)
}

/// Shared buffer collecting formatted log lines.
#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl io::Write for LogBuffer {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Run `f` under a plain-text subscriber and return everything it logged.
pub fn capture_logs(f: impl FnOnce()) -> String {
    let buffer = LogBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .without_time()
        .with_max_level(tracing::Level::DEBUG)
        .finish();
    tracing::subscriber::with_default(subscriber, f);

    let bytes = buffer.0.lock().unwrap();
    String::from_utf8_lossy(&bytes).into_owned()
}
