use std::cell::RefCell;
use std::rc::{Rc, Weak};

use log::{debug, warn};
use web_sys::Element;
use yew::prelude::*;

use crate::controllers::carousel::{Carousel, CarouselOptions};
use crate::controllers::dom::{DomViewport, IntervalScheduler};
use crate::controllers::reveal::{IntersectionSample, RevealController, SubjectId};

#[derive(Clone, Debug, PartialEq)]
pub struct RevealFlags {
    visible: Vec<bool>,
}

impl RevealFlags {
    pub fn hidden(count: usize) -> Self {
        Self { visible: vec![false; count] }
    }

    pub fn is_visible(&self, index: usize) -> bool {
        self.visible.get(index).copied().unwrap_or(false)
    }
}

pub enum RevealAction {
    Reveal(usize),
    /// Fallback when the browser can't observe intersections.
    RevealAll,
}

impl Reducible for RevealFlags {
    type Action = RevealAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            RevealAction::Reveal(index) => {
                if index >= self.visible.len() || self.visible[index] {
                    return self;
                }
                let mut next = (*self).clone();
                next.visible[index] = true;
                next.into()
            }
            RevealAction::RevealAll => {
                if self.visible.iter().all(|v| *v) {
                    return self;
                }
                Self { visible: vec![true; self.visible.len()] }.into()
            }
        }
    }
}

/// Node refs and fade-in state for one section.
#[derive(Clone)]
pub struct RevealHandle {
    refs: Rc<Vec<NodeRef>>,
    flags: UseReducerHandle<RevealFlags>,
}

impl RevealHandle {
    pub fn node(&self, index: usize) -> NodeRef {
        self.refs.get(index).cloned().unwrap_or_default()
    }

    pub fn is_visible(&self, index: usize) -> bool {
        self.flags.is_visible(index)
    }

    /// `fade-in-section` plus `is-visible` once the element has been revealed.
    pub fn class(&self, index: usize) -> Classes {
        classes!("fade-in-section", self.is_visible(index).then_some("is-visible"))
    }
}

type SharedController = Rc<RefCell<RevealController<DomViewport>>>;

/// Observes `count` elements of a section; bind each with `handle.node(i)`.
#[hook]
pub fn use_reveal(count: usize, threshold: f64) -> RevealHandle {
    let refs = use_memo(|count| (0..*count).map(|_| NodeRef::default()).collect::<Vec<_>>(), count);
    let flags = use_reducer(|| RevealFlags::hidden(count));

    {
        let refs = refs.clone();
        let dispatcher = flags.dispatcher();
        use_effect_with_deps(
            move |(_, threshold)| {
                // subject index -> position in `refs`, skipping refs that never mounted
                let mut positions = Vec::new();
                let mut elements = Vec::new();
                for (position, node) in refs.iter().enumerate() {
                    if let Some(element) = node.cast::<Element>() {
                        positions.push(position);
                        elements.push(element);
                    }
                }
                let positions = Rc::new(positions);

                let controller: SharedController = Rc::new_cyclic(|weak: &Weak<RefCell<RevealController<DomViewport>>>| {
                    let weak = weak.clone();
                    let dispatcher = dispatcher.clone();
                    let positions = positions.clone();
                    RefCell::new(RevealController::new(DomViewport::new(
                        move |subject: SubjectId, sample: IntersectionSample| {
                            let Some(shared) = weak.upgrade() else {
                                return;
                            };
                            let Ok(mut controller) = shared.try_borrow_mut() else {
                                return;
                            };
                            if controller.report(subject, sample) {
                                if let Some(position) = positions.get(subject.index) {
                                    dispatcher.dispatch(RevealAction::Reveal(*position));
                                }
                                if controller.pending(subject.observation) == Some(0) {
                                    debug!("Every element of the section is revealed");
                                }
                            }
                        },
                    )))
                });

                let attached = controller.borrow_mut().attach(elements, *threshold);
                if let Err(err) = &attached {
                    if err.shows_content_anyway() {
                        debug!("Showing section without fade-in: {}", err);
                    } else {
                        warn!("Reveal failed: {}", err);
                    }
                    dispatcher.dispatch(RevealAction::RevealAll);
                }

                move || {
                    if let Ok(handle) = attached {
                        controller.borrow_mut().detach(handle);
                    }
                }
            },
            (count, threshold),
        );
    }

    RevealHandle { refs, flags }
}

/// Current slide plus the navigation actions of a mounted carousel.
#[derive(Clone)]
pub struct CarouselHandle {
    index: usize,
    slide_count: usize,
    auto_advance: bool,
    controller: Rc<RefCell<Option<Carousel<IntervalScheduler>>>>,
}

impl CarouselHandle {
    pub fn current(&self) -> usize {
        self.index
    }

    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    pub fn auto_advance(&self) -> bool {
        self.auto_advance
    }

    pub fn next(&self) {
        if let Some(carousel) = self.controller.borrow_mut().as_mut() {
            carousel.next();
        }
    }

    pub fn prev(&self) {
        if let Some(carousel) = self.controller.borrow_mut().as_mut() {
            carousel.prev();
        }
    }

    pub fn go_to(&self, index: usize) {
        if let Some(carousel) = self.controller.borrow_mut().as_mut() {
            if let Err(err) = carousel.go_to(index) {
                warn!("Ignoring carousel jump: {}", err);
            }
        }
    }
}

#[hook]
pub fn use_carousel(slide_count: usize, options: CarouselOptions) -> CarouselHandle {
    let controller = use_mut_ref(|| None::<Carousel<IntervalScheduler>>);
    let index = use_state_eq(|| 0usize);

    {
        let controller = controller.clone();
        let setter = index.setter();
        use_effect_with_deps(
            move |(slide_count, options)| {
                match Carousel::create(*slide_count, *options, IntervalScheduler) {
                    Ok(carousel) => {
                        setter.set(carousel.current());
                        let on_change = setter.clone();
                        carousel.set_listener(move |index| on_change.set(index));
                        debug!(
                            "Carousel mounted with {} slides (auto-advance: {})",
                            slide_count,
                            carousel.is_running()
                        );
                        *controller.borrow_mut() = Some(carousel);
                    }
                    Err(err) => warn!("Carousel disabled: {}", err),
                }

                move || {
                    let carousel = controller.borrow_mut().take();
                    if let Some(mut carousel) = carousel {
                        carousel.destroy();
                    }
                }
            },
            (slide_count, options),
        );
    }

    let auto_advance = options.auto_advance_interval_ms.map_or(false, |ms| ms > 0);

    CarouselHandle {
        index: *index,
        slide_count,
        auto_advance,
        controller,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce(flags: RevealFlags, action: RevealAction) -> Rc<RevealFlags> {
        Rc::new(flags).reduce(action)
    }

    #[test]
    fn reveal_flips_only_the_target() {
        let flags = reduce(RevealFlags::hidden(3), RevealAction::Reveal(1));
        assert!(!flags.is_visible(0));
        assert!(flags.is_visible(1));
        assert!(!flags.is_visible(2));
    }

    #[test]
    fn revealing_twice_keeps_the_same_state() {
        let once = reduce(RevealFlags::hidden(2), RevealAction::Reveal(0));
        let twice = once.clone().reduce(RevealAction::Reveal(0));
        assert!(Rc::ptr_eq(&once, &twice));
    }

    #[test]
    fn out_of_range_reveal_is_ignored() {
        let flags = reduce(RevealFlags::hidden(2), RevealAction::Reveal(9));
        assert_eq!(*flags, RevealFlags::hidden(2));
        assert!(!flags.is_visible(9));
    }

    #[test]
    fn reveal_all_shows_everything() {
        let flags = reduce(RevealFlags::hidden(4), RevealAction::Reveal(2));
        let flags = flags.reduce(RevealAction::RevealAll);
        assert!((0..4).all(|i| flags.is_visible(i)));
    }
}
