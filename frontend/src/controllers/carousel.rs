//! Current-slide bookkeeping for a fixed, cyclic sequence of slides.
//!
//! [`CarouselState`] is the bare index state machine. [`Carousel`] wraps it
//! with an optional auto-advance timer obtained from a [`Scheduler`], so the
//! browser can plug in a real interval and tests a manual clock.
//!
//! Manual navigation never pauses or re-arms the timer: a `next()` right
//! before a tick is followed by that tick at its original time.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::debug;

use crate::error::ControllerError;

/// Timer primitive supplied by the host environment.
pub trait Scheduler {
    type Handle;

    /// Runs `tick` every `interval_ms` until the returned handle is cancelled.
    fn every(&mut self, interval_ms: u32, tick: Box<dyn FnMut()>) -> Self::Handle;
    fn cancel(&mut self, handle: Self::Handle);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselState {
    slide_count: usize,
    current: usize,
    auto_advance: bool,
}

impl CarouselState {
    /// Out-of-range start indices wrap around instead of failing, so a
    /// transient prop value never prevents the carousel from mounting.
    pub fn new(slide_count: usize, start_index: usize, auto_advance: bool) -> Result<Self, ControllerError> {
        if slide_count == 0 {
            return Err(ControllerError::InvalidConfiguration(
                "a carousel needs at least one slide".to_string(),
            ));
        }
        Ok(Self {
            slide_count,
            current: start_index % slide_count,
            auto_advance,
        })
    }

    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn auto_advance(&self) -> bool {
        self.auto_advance
    }

    pub fn next(&mut self) -> usize {
        self.current = (self.current + 1) % self.slide_count;
        self.current
    }

    pub fn prev(&mut self) -> usize {
        self.current = (self.current + self.slide_count - 1) % self.slide_count;
        self.current
    }

    /// Strict: unlike construction, a bad target is reported and ignored.
    pub fn go_to(&mut self, index: usize) -> Result<usize, ControllerError> {
        if index >= self.slide_count {
            return Err(ControllerError::IndexOutOfRange {
                index,
                slide_count: self.slide_count,
            });
        }
        self.current = index;
        Ok(self.current)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CarouselOptions {
    /// `None` or `Some(0)` disables auto-advance.
    pub auto_advance_interval_ms: Option<u32>,
    pub start_index: Option<usize>,
}

type Listener = Rc<RefCell<Option<Box<dyn Fn(usize)>>>>;

pub struct Carousel<S: Scheduler> {
    state: Rc<RefCell<CarouselState>>,
    listener: Listener,
    alive: Rc<Cell<bool>>,
    scheduler: S,
    timer: Option<S::Handle>,
}

impl<S: Scheduler> Carousel<S> {
    pub fn create(slide_count: usize, options: CarouselOptions, mut scheduler: S) -> Result<Self, ControllerError> {
        let interval = options.auto_advance_interval_ms.filter(|ms| *ms > 0);
        let state = Rc::new(RefCell::new(CarouselState::new(
            slide_count,
            options.start_index.unwrap_or(0),
            interval.is_some(),
        )?));
        let listener: Listener = Rc::new(RefCell::new(None));
        let alive = Rc::new(Cell::new(true));

        let timer = interval.map(|ms| {
            let state = state.clone();
            let listener = listener.clone();
            let alive = alive.clone();
            debug!("Carousel auto-advancing every {}ms over {} slides", ms, slide_count);
            scheduler.every(
                ms,
                Box::new(move || {
                    if !alive.get() {
                        return;
                    }
                    let index = state.borrow_mut().next();
                    notify(&listener, index);
                }),
            )
        });

        Ok(Self {
            state,
            listener,
            alive,
            scheduler,
            timer,
        })
    }

    /// Called with the new index after every transition, ticks included.
    pub fn set_listener(&self, listener: impl Fn(usize) + 'static) {
        *self.listener.borrow_mut() = Some(Box::new(listener));
    }

    pub fn state(&self) -> CarouselState {
        *self.state.borrow()
    }

    pub fn current(&self) -> usize {
        self.state.borrow().current()
    }

    pub fn next(&mut self) -> usize {
        let index = self.state.borrow_mut().next();
        notify(&self.listener, index);
        index
    }

    pub fn prev(&mut self) -> usize {
        let index = self.state.borrow_mut().prev();
        notify(&self.listener, index);
        index
    }

    pub fn go_to(&mut self, index: usize) -> Result<usize, ControllerError> {
        let index = self.state.borrow_mut().go_to(index)?;
        notify(&self.listener, index);
        Ok(index)
    }

    pub fn is_running(&self) -> bool {
        self.timer.is_some()
    }

    /// Cancels the auto-advance timer. Safe to call more than once; once it
    /// returns no pending tick can move the index.
    pub fn destroy(&mut self) {
        self.alive.set(false);
        if let Some(timer) = self.timer.take() {
            self.scheduler.cancel(timer);
            debug!("Carousel timer cancelled");
        }
    }
}

impl<S: Scheduler> Drop for Carousel<S> {
    fn drop(&mut self) {
        self.destroy();
    }
}

fn notify(listener: &Listener, index: usize) {
    if let Some(listener) = listener.borrow().as_ref() {
        listener(index);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Timer {
        id: usize,
        interval: u64,
        due: u64,
        tick: Rc<RefCell<Box<dyn FnMut()>>>,
    }

    #[derive(Default)]
    struct ClockInner {
        now: u64,
        next_id: usize,
        timers: Vec<Timer>,
        cancels: usize,
        ignore_cancel: bool,
    }

    /// Deterministic stand-in for the browser interval.
    #[derive(Clone, Default)]
    struct ManualClock(Rc<RefCell<ClockInner>>);

    impl ManualClock {
        fn ignoring_cancel() -> Self {
            let clock = Self::default();
            clock.0.borrow_mut().ignore_cancel = true;
            clock
        }

        fn advance(&self, ms: u64) {
            let target = self.0.borrow().now + ms;
            loop {
                let tick = {
                    let mut inner = self.0.borrow_mut();
                    let Some(timer) = inner
                        .timers
                        .iter_mut()
                        .filter(|t| t.due <= target)
                        .min_by_key(|t| (t.due, t.id))
                    else {
                        break;
                    };
                    let due = timer.due;
                    timer.due += timer.interval;
                    let tick = timer.tick.clone();
                    inner.now = due;
                    tick
                };
                (tick.borrow_mut().as_mut())();
            }
            self.0.borrow_mut().now = target;
        }

        fn active_timers(&self) -> usize {
            self.0.borrow().timers.len()
        }

        fn cancels(&self) -> usize {
            self.0.borrow().cancels
        }
    }

    impl Scheduler for ManualClock {
        type Handle = usize;

        fn every(&mut self, interval_ms: u32, tick: Box<dyn FnMut()>) -> usize {
            let mut inner = self.0.borrow_mut();
            let id = inner.next_id;
            inner.next_id += 1;
            let due = inner.now + u64::from(interval_ms);
            inner.timers.push(Timer {
                id,
                interval: u64::from(interval_ms),
                due,
                tick: Rc::new(RefCell::new(tick)),
            });
            id
        }

        fn cancel(&mut self, handle: usize) {
            let mut inner = self.0.borrow_mut();
            inner.cancels += 1;
            if !inner.ignore_cancel {
                inner.timers.retain(|t| t.id != handle);
            }
        }
    }

    fn autoplay(ms: u32) -> CarouselOptions {
        CarouselOptions {
            auto_advance_interval_ms: Some(ms),
            ..Default::default()
        }
    }

    #[test]
    fn zero_slides_is_invalid() {
        let err = Carousel::create(0, CarouselOptions::default(), ManualClock::default())
            .err()
            .unwrap();
        assert!(matches!(err, ControllerError::InvalidConfiguration(_)));
    }

    #[test]
    fn start_index_wraps_modulo_slide_count() {
        let options = CarouselOptions {
            start_index: Some(10),
            ..Default::default()
        };
        let carousel = Carousel::create(7, options, ManualClock::default()).unwrap();
        assert_eq!(carousel.current(), 3);
        assert!(!carousel.state().auto_advance());
    }

    #[test]
    fn next_wraps_after_last_slide() {
        let mut carousel = Carousel::create(3, CarouselOptions::default(), ManualClock::default()).unwrap();
        let seen: Vec<usize> = (0..3).map(|_| carousel.next()).collect();
        assert_eq!(seen, vec![1, 2, 0]);
    }

    #[test]
    fn prev_wraps_before_first_slide() {
        let mut state = CarouselState::new(4, 0, false).unwrap();
        assert_eq!(state.prev(), 3);
        assert_eq!(state.prev(), 2);
    }

    #[test]
    fn index_never_escapes_range() {
        for slide_count in 1..=9 {
            let mut state = CarouselState::new(slide_count, 0, false).unwrap();
            // mixed walk: the step pattern depends on the position in the walk
            for step in 0..200usize {
                let index = if (step * 7 + slide_count) % 3 == 0 {
                    state.prev()
                } else {
                    state.next()
                };
                assert!(index < slide_count, "{index} escaped {slide_count}");
                assert_eq!(index, state.current());
            }
        }
    }

    #[test]
    fn full_cycle_returns_to_start() {
        for slide_count in 1..=8 {
            for start in 0..slide_count {
                let mut state = CarouselState::new(slide_count, start, false).unwrap();
                for _ in 0..slide_count {
                    state.next();
                }
                assert_eq!(state.current(), start);
                for _ in 0..slide_count {
                    state.prev();
                }
                assert_eq!(state.current(), start);
            }
        }
    }

    #[test]
    fn go_to_is_strict() {
        let mut carousel = Carousel::create(5, CarouselOptions::default(), ManualClock::default()).unwrap();

        assert_eq!(carousel.go_to(4), Ok(4));
        assert_eq!(carousel.current(), 4);

        let err = carousel.go_to(5).unwrap_err();
        assert_eq!(err, ControllerError::IndexOutOfRange { index: 5, slide_count: 5 });
        assert_eq!(carousel.current(), 4);
    }

    #[test]
    fn listener_sees_manual_transitions() {
        let mut carousel = Carousel::create(3, CarouselOptions::default(), ManualClock::default()).unwrap();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        carousel.set_listener(move |index| sink.borrow_mut().push(index));

        carousel.next();
        carousel.prev();
        carousel.prev();
        let _ = carousel.go_to(7);
        carousel.go_to(1).unwrap();

        assert_eq!(*seen.borrow(), vec![1, 0, 2, 1]);
    }

    #[test]
    fn auto_advance_ticks_every_interval() {
        let clock = ManualClock::default();
        let carousel = Carousel::create(3, autoplay(1000), clock.clone()).unwrap();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        carousel.set_listener(move |index| sink.borrow_mut().push(index));

        assert!(carousel.is_running());
        clock.advance(999);
        assert_eq!(carousel.current(), 0);
        clock.advance(1);
        assert_eq!(carousel.current(), 1);
        clock.advance(2000);
        assert_eq!(*seen.borrow(), vec![1, 2, 0]);
    }

    #[test]
    fn manual_navigation_keeps_the_tick_schedule() {
        let clock = ManualClock::default();
        let mut carousel = Carousel::create(4, autoplay(1000), clock.clone()).unwrap();

        clock.advance(400);
        carousel.next();
        assert_eq!(carousel.current(), 1);

        clock.advance(599);
        assert_eq!(carousel.current(), 1);
        clock.advance(1);
        assert_eq!(carousel.current(), 2);

        carousel.go_to(0).unwrap();
        clock.advance(1000);
        assert_eq!(carousel.current(), 1);
    }

    #[test]
    fn zero_interval_disables_auto_advance() {
        let clock = ManualClock::default();
        let carousel = Carousel::create(3, autoplay(0), clock.clone()).unwrap();

        assert!(!carousel.is_running());
        assert!(!carousel.state().auto_advance());
        assert_eq!(clock.active_timers(), 0);
    }

    #[test]
    fn destroy_stops_ticks_and_is_idempotent() {
        let clock = ManualClock::default();
        let mut carousel = Carousel::create(3, autoplay(500), clock.clone()).unwrap();
        clock.advance(500);
        assert_eq!(carousel.current(), 1);

        carousel.destroy();
        carousel.destroy();
        clock.advance(5000);

        assert_eq!(carousel.current(), 1);
        assert_eq!(clock.cancels(), 1);
        assert_eq!(clock.active_timers(), 0);
    }

    #[test]
    fn late_tick_after_destroy_is_ignored() {
        let clock = ManualClock::ignoring_cancel();
        let mut carousel = Carousel::create(3, autoplay(100), clock.clone()).unwrap();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        carousel.set_listener(move |index| sink.borrow_mut().push(index));

        carousel.destroy();
        clock.advance(1000);

        assert_eq!(clock.active_timers(), 1);
        assert_eq!(carousel.current(), 0);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn dropping_cancels_the_timer() {
        let clock = ManualClock::default();
        let carousel = Carousel::create(2, autoplay(250), clock.clone()).unwrap();
        drop(carousel);

        assert_eq!(clock.cancels(), 1);
        assert_eq!(clock.active_timers(), 0);
    }
}
