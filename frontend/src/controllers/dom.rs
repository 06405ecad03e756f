//! Browser bindings for the controller primitives: `IntersectionObserver`
//! behind [`ViewportObserver`] and `gloo_timers` intervals behind
//! [`Scheduler`].

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Array, Reflect};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::carousel::Scheduler;
use super::reveal::{IntersectionSample, ObservationHandle, SubjectId, ViewportObserver};

type Sink = Rc<dyn Fn(SubjectId, IntersectionSample)>;
type Targets = Rc<RefCell<Vec<(Element, SubjectId)>>>;

struct BrowserObservation {
    observer: IntersectionObserver,
    targets: Targets,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

/// One `IntersectionObserver` per attached observation. Entries are mapped
/// back to their subject and forwarded to `sink`.
pub struct DomViewport {
    sink: Sink,
    observations: HashMap<ObservationHandle, BrowserObservation>,
}

impl DomViewport {
    pub fn new(sink: impl Fn(SubjectId, IntersectionSample) + 'static) -> Self {
        Self {
            sink: Rc::new(sink),
            observations: HashMap::new(),
        }
    }

    fn observation_for(&mut self, handle: ObservationHandle, threshold: f64) -> Option<&BrowserObservation> {
        if !self.observations.contains_key(&handle) {
            let targets: Targets = Rc::new(RefCell::new(Vec::new()));
            let lookup = targets.clone();
            let sink = self.sink.clone();

            let callback = Closure::wrap(Box::new(move |entries: Array, _observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    let target = entry.target();
                    let subject = lookup
                        .borrow()
                        .iter()
                        .find(|(element, _)| *element == target)
                        .map(|(_, subject)| *subject);
                    if let Some(subject) = subject {
                        sink(subject, IntersectionSample::new(entry.intersection_ratio(), entry.is_intersecting()));
                    }
                }
            }) as Box<dyn FnMut(Array, IntersectionObserver)>);

            let options = IntersectionObserverInit::new();
            options.set_threshold(&JsValue::from_f64(threshold));
            let observer = match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
                Ok(observer) => observer,
                Err(err) => {
                    warn!("Failed to create IntersectionObserver: {:?}", err);
                    return None;
                }
            };

            self.observations.insert(
                handle,
                BrowserObservation {
                    observer,
                    targets,
                    _callback: callback,
                },
            );
        }
        self.observations.get(&handle)
    }
}

impl ViewportObserver for DomViewport {
    type Element = Element;

    fn supported(&self) -> bool {
        web_sys::window()
            .and_then(|window| Reflect::has(&window, &JsValue::from_str("IntersectionObserver")).ok())
            .unwrap_or(false)
    }

    fn observe(&mut self, subject: SubjectId, element: &Element, threshold: f64) {
        if let Some(observation) = self.observation_for(subject.observation, threshold) {
            observation.targets.borrow_mut().push((element.clone(), subject));
            observation.observer.observe(element);
        }
    }

    fn unobserve(&mut self, subject: SubjectId, element: &Element) {
        if let Some(observation) = self.observations.get(&subject.observation) {
            observation.observer.unobserve(element);
            observation.targets.borrow_mut().retain(|(_, s)| *s != subject);
        }
    }

    fn release(&mut self, handle: ObservationHandle) {
        if let Some(observation) = self.observations.remove(&handle) {
            observation.observer.disconnect();
        }
    }
}

/// Auto-advance timer backed by `setInterval`.
#[derive(Default)]
pub struct IntervalScheduler;

impl Scheduler for IntervalScheduler {
    type Handle = Interval;

    fn every(&mut self, interval_ms: u32, mut tick: Box<dyn FnMut()>) -> Interval {
        Interval::new(interval_ms, move || tick())
    }

    fn cancel(&mut self, handle: Interval) {
        drop(handle); // dropping clears the interval
    }
}
