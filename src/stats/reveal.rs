use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

#[cfg(test)]
#[path = "reveal_tests.rs"]
mod reveal_tests;

/// Fraction of a watched element that must be inside the viewport before its
/// callback fires.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Remembers which targets already fired.
///
/// One observer batch can carry several records for the same element (one per
/// threshold crossing), so unobserving alone does not make the callback
/// exactly-once.
#[derive(Debug)]
pub struct FiredSet<T: PartialEq> {
    fired: Vec<T>,
}

impl<T: PartialEq> FiredSet<T> {
    pub fn new() -> Self {
        Self { fired: Vec::new() }
    }

    /// Returns true the first time `target` is seen, false ever after.
    pub fn first_fire(&mut self, target: T) -> bool {
        if self.fired.contains(&target) {
            return false;
        }
        self.fired.push(target);
        true
    }

    pub fn len(&self) -> usize {
        self.fired.len()
    }
}

impl<T: PartialEq> Default for FiredSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Watches elements and invokes a callback the first time each one becomes
/// visible, then stops watching it. An element that is already on screen at
/// registration fires on the observer's first evaluation pass.
pub struct VisibilityTrigger {
    observer: IntersectionObserver,
    _on_intersect: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl VisibilityTrigger {
    pub fn new(mut on_first_visible: impl FnMut(Element) + 'static) -> Result<Self, JsValue> {
        let mut fired = FiredSet::new();
        let on_intersect = Closure::wrap(Box::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    if !entry.is_intersecting() {
                        continue;
                    }
                    let target = entry.target();
                    observer.unobserve(&target);
                    if fired.first_fire(target.clone()) {
                        on_first_visible(target);
                    }
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let mut options = IntersectionObserverInit::new();
        options.threshold(&JsValue::from(REVEAL_THRESHOLD));
        let observer = IntersectionObserver::new_with_options(
            on_intersect.as_ref().unchecked_ref(),
            &options,
        )?;

        Ok(Self {
            observer,
            _on_intersect: on_intersect,
        })
    }

    pub fn observe(&self, element: &Element) {
        self.observer.observe(element);
    }

    /// Stop watching everything. Called from effect teardown so the browser
    /// observer does not outlive the component that created it.
    pub fn disconnect(&self) {
        self.observer.disconnect();
    }
}
