//! One-way "fade in when scrolled into view" state.
//!
//! A section hands its fade-in elements to [`RevealController::attach`] and
//! gets back an [`ObservationHandle`]. The host viewport primitive reports
//! intersection samples through [`RevealController::report`]; the first
//! sample at or above the threshold flips the subject's flag to visible and
//! the element is no longer tracked. Flags never go back to hidden.

use log::debug;

use crate::error::ControllerError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObservationHandle {
    slot: usize,
    generation: u32,
}

/// A single element registered through [`RevealController::attach`].
/// `index` is the element's position in the attached sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubjectId {
    pub observation: ObservationHandle,
    pub index: usize,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionSample {
    pub ratio: f64,
    pub intersecting: bool,
}

impl IntersectionSample {
    pub fn new(ratio: f64, intersecting: bool) -> Self {
        Self { ratio, intersecting }
    }
}

/// Viewport-intersection primitive supplied by the host environment.
#[cfg_attr(test, mockall::automock(type Element = u32;))]
pub trait ViewportObserver {
    type Element;

    fn supported(&self) -> bool;
    fn observe(&mut self, subject: SubjectId, element: &Self::Element, threshold: f64);
    fn unobserve(&mut self, subject: SubjectId, element: &Self::Element);
    /// Drops everything still observed for `handle`.
    fn release(&mut self, handle: ObservationHandle);
}

struct Subject<E> {
    element: E,
    visible: bool,
}

struct Observation<E> {
    threshold: f64,
    subjects: Vec<Subject<E>>,
}

struct Slot<E> {
    generation: u32,
    observation: Option<Observation<E>>,
}

pub struct RevealController<O: ViewportObserver> {
    viewport: O,
    slots: Vec<Slot<O::Element>>,
    free: Vec<usize>,
}

impl<O: ViewportObserver> RevealController<O> {
    pub fn new(viewport: O) -> Self {
        Self {
            viewport,
            slots: Vec::new(),
            free: Vec::new(),
        }
    }

    pub fn attach<I>(&mut self, elements: I, threshold: f64) -> Result<ObservationHandle, ControllerError>
    where
        I: IntoIterator<Item = O::Element>,
    {
        if !threshold.is_finite() || !(0.0..=1.0).contains(&threshold) {
            return Err(ControllerError::InvalidConfiguration(format!(
                "reveal threshold must be within [0, 1], got {}",
                threshold
            )));
        }
        if !self.viewport.supported() {
            return Err(ControllerError::UnsupportedEnvironment("IntersectionObserver"));
        }

        let subjects: Vec<Subject<O::Element>> = elements
            .into_iter()
            .map(|element| Subject { element, visible: false })
            .collect();

        let slot = match self.free.pop() {
            Some(slot) => slot,
            None => {
                self.slots.push(Slot { generation: 0, observation: None });
                self.slots.len() - 1
            }
        };
        let handle = ObservationHandle {
            slot,
            generation: self.slots[slot].generation,
        };

        for (index, subject) in subjects.iter().enumerate() {
            self.viewport.observe(SubjectId { observation: handle, index }, &subject.element, threshold);
        }
        debug!("Observing {} reveal subjects (threshold {})", subjects.len(), threshold);
        self.slots[slot].observation = Some(Observation { threshold, subjects });

        Ok(handle)
    }

    /// Feeds one sample from the viewport primitive. Returns `true` only when
    /// this sample revealed the subject.
    pub fn report(&mut self, subject: SubjectId, sample: IntersectionSample) -> bool {
        let handle = subject.observation;
        let Some(observation) = self
            .slots
            .get_mut(handle.slot)
            .filter(|slot| slot.generation == handle.generation)
            .and_then(|slot| slot.observation.as_mut())
        else {
            return false;
        };
        let threshold = observation.threshold;
        let Some(entry) = observation.subjects.get_mut(subject.index) else {
            return false;
        };
        if entry.visible || !sample.intersecting || !(sample.ratio >= threshold) {
            return false;
        }

        entry.visible = true;
        self.viewport.unobserve(subject, &entry.element);
        true
    }

    pub fn is_visible(&self, subject: SubjectId) -> Option<bool> {
        self.observation(subject.observation)?
            .subjects
            .get(subject.index)
            .map(|s| s.visible)
    }

    /// Number of subjects under `handle` that are still hidden.
    pub fn pending(&self, handle: ObservationHandle) -> Option<usize> {
        self.observation(handle)
            .map(|o| o.subjects.iter().filter(|s| !s.visible).count())
    }

    /// Stops observing everything under `handle`. Calling it again, or with a
    /// handle whose slot has been reused, does nothing.
    pub fn detach(&mut self, handle: ObservationHandle) {
        let Some(slot) = self.slots.get_mut(handle.slot) else {
            return;
        };
        if slot.generation != handle.generation || slot.observation.is_none() {
            return;
        }

        slot.observation = None;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(handle.slot);
        self.viewport.release(handle);
        debug!("Detached reveal observation {}", handle.slot);
    }

    fn observation(&self, handle: ObservationHandle) -> Option<&Observation<O::Element>> {
        self.slots
            .get(handle.slot)
            .filter(|slot| slot.generation == handle.generation)?
            .observation
            .as_ref()
    }
}

impl<O: ViewportObserver> Drop for RevealController<O> {
    fn drop(&mut self) {
        let live: Vec<ObservationHandle> = self
            .slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.observation.is_some())
            .map(|(slot, s)| ObservationHandle { slot, generation: s.generation })
            .collect();
        for handle in live {
            self.detach(handle);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn permissive_viewport() -> MockViewportObserver {
        let mut viewport = MockViewportObserver::new();
        viewport.expect_supported().return_const(true);
        viewport.expect_observe().return_const(());
        viewport.expect_unobserve().return_const(());
        viewport.expect_release().return_const(());
        viewport
    }

    fn subject(observation: ObservationHandle, index: usize) -> SubjectId {
        SubjectId { observation, index }
    }

    #[test]
    fn threshold_outside_unit_range_is_rejected() {
        let mut viewport = MockViewportObserver::new();
        viewport.expect_supported().return_const(true);
        viewport.expect_observe().never();
        let mut controller = RevealController::new(viewport);

        for bad in [1.5, -0.1, f64::NAN, f64::INFINITY] {
            let err = controller.attach(vec![1, 2], bad).unwrap_err();
            assert!(matches!(err, ControllerError::InvalidConfiguration(_)), "{bad}");
        }
    }

    #[test]
    fn half_threshold_observes_every_element() {
        let mut viewport = MockViewportObserver::new();
        viewport.expect_supported().return_const(true);
        viewport
            .expect_observe()
            .times(3)
            .withf(|_, _, threshold| *threshold == 0.5)
            .return_const(());
        viewport.expect_release().times(1).return_const(());
        let mut controller = RevealController::new(viewport);

        let handle = controller.attach(vec![10, 11, 12], 0.5).unwrap();
        assert_eq!(controller.pending(handle), Some(3));
        assert_eq!(controller.is_visible(subject(handle, 1)), Some(false));
    }

    #[test]
    fn missing_intersection_primitive_is_unsupported() {
        let mut viewport = MockViewportObserver::new();
        viewport.expect_supported().return_const(false);
        viewport.expect_observe().never();
        let mut controller = RevealController::new(viewport);

        let err = controller.attach(vec![1], 0.1).unwrap_err();
        assert_eq!(err, ControllerError::UnsupportedEnvironment("IntersectionObserver"));
        assert!(err.shows_content_anyway());
    }

    #[test]
    fn subject_is_revealed_once_and_stops_being_tracked() {
        let mut viewport = MockViewportObserver::new();
        viewport.expect_supported().return_const(true);
        viewport.expect_observe().return_const(());
        viewport.expect_unobserve().times(1).return_const(());
        viewport.expect_release().return_const(());
        let mut controller = RevealController::new(viewport);
        let handle = controller.attach(vec![7, 8], 0.25).unwrap();
        let first = subject(handle, 0);

        assert!(controller.report(first, IntersectionSample::new(0.3, true)));
        assert!(!controller.report(first, IntersectionSample::new(0.9, true)));
        // leaving the viewport afterwards never hides it again
        assert!(!controller.report(first, IntersectionSample::new(0.0, false)));
        assert_eq!(controller.is_visible(first), Some(true));
        assert_eq!(controller.is_visible(subject(handle, 1)), Some(false));
        assert_eq!(controller.pending(handle), Some(1));
    }

    #[test]
    fn samples_below_threshold_or_not_intersecting_do_not_reveal() {
        let mut controller = RevealController::new(permissive_viewport());
        let handle = controller.attach(vec![1], 0.5).unwrap();
        let only = subject(handle, 0);

        assert!(!controller.report(only, IntersectionSample::new(0.49, true)));
        assert!(!controller.report(only, IntersectionSample::new(0.8, false)));
        assert!(!controller.report(only, IntersectionSample::new(f64::NAN, true)));
        assert_eq!(controller.is_visible(only), Some(false));

        assert!(controller.report(only, IntersectionSample::new(0.5, true)));
    }

    #[test]
    fn zero_threshold_still_requires_intersection() {
        let mut controller = RevealController::new(permissive_viewport());
        let handle = controller.attach(vec![1], 0.0).unwrap();

        assert!(!controller.report(subject(handle, 0), IntersectionSample::new(0.0, false)));
        assert!(controller.report(subject(handle, 0), IntersectionSample::new(0.0, true)));
    }

    #[test]
    fn detach_is_idempotent_and_silences_reports() {
        let mut viewport = MockViewportObserver::new();
        viewport.expect_supported().return_const(true);
        viewport.expect_observe().return_const(());
        viewport.expect_unobserve().never();
        viewport.expect_release().times(1).return_const(());
        let mut controller = RevealController::new(viewport);
        let handle = controller.attach(vec![1, 2], 0.1).unwrap();

        controller.detach(handle);
        controller.detach(handle);

        assert!(!controller.report(subject(handle, 0), IntersectionSample::new(1.0, true)));
        assert_eq!(controller.is_visible(subject(handle, 0)), None);
        assert_eq!(controller.pending(handle), None);
    }

    #[test]
    fn stale_handle_cannot_touch_a_reused_slot() {
        let mut controller = RevealController::new(permissive_viewport());
        let old = controller.attach(vec![1], 0.1).unwrap();
        controller.detach(old);
        let new = controller.attach(vec![2], 0.1).unwrap();
        assert_ne!(old, new);

        assert!(!controller.report(subject(old, 0), IntersectionSample::new(1.0, true)));
        assert_eq!(controller.is_visible(subject(new, 0)), Some(false));

        controller.detach(old);
        assert_eq!(controller.pending(new), Some(1));
    }

    #[test]
    fn unknown_subject_index_is_ignored() {
        let mut controller = RevealController::new(permissive_viewport());
        let handle = controller.attach(vec![1], 0.1).unwrap();

        assert!(!controller.report(subject(handle, 5), IntersectionSample::new(1.0, true)));
        assert_eq!(controller.is_visible(subject(handle, 5)), None);
    }

    #[test]
    fn dropping_the_controller_releases_live_observations() {
        let mut viewport = MockViewportObserver::new();
        viewport.expect_supported().return_const(true);
        viewport.expect_observe().return_const(());
        viewport.expect_release().times(3).return_const(());
        let mut controller = RevealController::new(viewport);

        let detached = controller.attach(vec![1], 0.1).unwrap();
        controller.attach(vec![2], 0.1).unwrap();
        controller.detach(detached);
        controller.attach(vec![3], 0.1).unwrap();

        drop(controller);
    }
}
