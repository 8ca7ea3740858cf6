use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Window};

#[cfg(test)]
#[path = "counter_tests.rs"]
mod counter_tests;

/// How long one count-up sweep takes.
pub const COUNT_UP_MS: f64 = 2000.0;

/// One animation run: which element to write and the value range to sweep.
/// Immutable once the run starts.
#[derive(Debug, Clone, PartialEq)]
pub struct CounterSpec {
    pub element_id: String,
    pub start: u64,
    pub end: u64,
    pub duration_ms: f64,
}

impl CounterSpec {
    pub fn count_up(element_id: impl Into<String>, end: u64) -> Self {
        Self {
            element_id: element_id.into(),
            start: 0,
            end,
            duration_ms: COUNT_UP_MS,
        }
    }
}

/// Per-run interpolation state, fed the host scheduler's frame timestamps.
///
/// The first timestamp seen becomes the run's zero point. Progress is clamped
/// to [0, 1] and never decreases, so frame-time jitter can neither push the
/// displayed value outside `start..=end` nor run it backwards, and the write
/// at progress 1 lands exactly on `end`.
#[derive(Debug)]
pub struct CounterRun {
    spec: CounterSpec,
    zero: Option<f64>,
    last_progress: f64,
}

impl CounterRun {
    pub fn new(spec: CounterSpec) -> Self {
        Self {
            spec,
            zero: None,
            last_progress: 0.0,
        }
    }

    /// Advance to `timestamp_ms`. Returns the text to display and whether
    /// this was the terminal step.
    pub fn step(&mut self, timestamp_ms: f64) -> (String, bool) {
        let zero = *self.zero.get_or_insert(timestamp_ms);
        let progress = ((timestamp_ms - zero) / self.spec.duration_ms)
            .clamp(0.0, 1.0)
            .max(self.last_progress);
        self.last_progress = progress;
        let span = self.spec.end as f64 - self.spec.start as f64;
        let value = (progress * span + self.spec.start as f64).floor() as u64;
        (format_count(value), progress >= 1.0)
    }
}

/// Thousands-separated display form with the site's `+` suffix.
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out.push('+');
    out
}

/// Drives counter runs off the host animation-frame scheduler.
///
/// Holds the window and document it was constructed with; the frame loop
/// never reaches for globals. Every `animate` call owns its own `CounterRun`,
/// so concurrent counters cannot interfere.
#[derive(Clone)]
pub struct CounterAnimator {
    window: Window,
    document: Document,
}

impl CounterAnimator {
    pub fn new(window: Window, document: Document) -> Self {
        Self { window, document }
    }

    /// Start one run. An id that resolves to no element is a silent no-op;
    /// an element removed mid-run stops the loop at its next frame without
    /// further writes.
    pub fn animate(&self, spec: CounterSpec) {
        if self.document.get_element_by_id(&spec.element_id).is_none() {
            return;
        }

        let window = self.window.clone();
        let document = self.document.clone();
        let id = spec.element_id.clone();
        let mut run = CounterRun::new(spec);

        // Self-referential frame loop: the closure reschedules itself until
        // the run terminates, then drops itself out of the cell.
        let frame: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
        let kickoff = frame.clone();

        *kickoff.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp: f64| {
            let (text, done) = run.step(timestamp);
            let element = match document.get_element_by_id(&id) {
                Some(element) => element,
                None => {
                    frame.borrow_mut().take();
                    return;
                }
            };
            element.set_text_content(Some(&text));
            if done {
                frame.borrow_mut().take();
                return;
            }
            if let Some(step) = frame.borrow().as_ref() {
                let _ = window.request_animation_frame(step.as_ref().unchecked_ref());
            }
        }) as Box<dyn FnMut(f64)>));

        {
            let borrowed = kickoff.borrow();
            if let Some(step) = borrowed.as_ref() {
                let _ = self
                    .window
                    .request_animation_frame(step.as_ref().unchecked_ref());
            }
        }
    }
}
