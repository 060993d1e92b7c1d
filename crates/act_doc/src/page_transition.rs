//! Page transitions
//!
//! Navigating between doc pages slides the old page out and the new page in.
//! [`PageTransitions`] tracks the slots (keyed by page path) and
//! [`PageTransitionDriver`] turns a slot's animation into element styles:
//!
//! ```text
//!  x = -1        x = 0          x = 1
//!  entering  ->  shown     ->   exited
//!  opacity 0     opacity 1      opacity 0
//!  +100px        0px            -100px
//! ```

use serde_json::Value;
use std::cell::Cell;
use std::rc::Rc;

use act_core::{h, PointerEvents, Props, Style, UiNode};
use act_curve::{
    Animation, FrameScheduler, SlideTransition, SlideTransitionConfig, SlotId, Subscription,
    Transition, TransitionSlot, Vector1D,
};

/// A navigable documentation page
#[derive(Clone, Debug, PartialEq)]
pub struct DocPage {
    /// Route of the page, also its transition key
    pub path: String,
    pub title: String,
    pub element: UiNode,
}

impl DocPage {
    pub fn new(path: impl Into<String>, title: impl Into<String>, element: UiNode) -> Self {
        Self {
            path: path.into(),
            title: title.into(),
            element,
        }
    }
}

/// Transition state of one page
pub type PageSlot = TransitionSlot<String, DocPage>;

type PagePath = fn(&DocPage) -> String;

fn page_path(page: &DocPage) -> String {
    page.path.clone()
}

/// Slide transitions between the current page and the pages leaving
pub struct PageTransitions {
    transition: Transition<SlideTransition<DocPage, String, PagePath>>,
}

impl PageTransitions {
    pub fn new() -> Self {
        Self::with_config(SlideTransitionConfig::default())
    }

    pub fn with_config(config: SlideTransitionConfig) -> Self {
        let hooks = SlideTransition::new(page_path as PagePath).with_config(config);
        Self {
            transition: Transition::start(hooks),
        }
    }

    /// Make `page` the current page at `now`
    ///
    /// Returns every slot to render, leaving pages included, in order.
    pub fn show(&mut self, page: DocPage, now: f64) -> Vec<&PageSlot> {
        tracing::debug!(path = page.path.as_str(), now, "showing page");
        self.transition.update([page], now);
        self.transition.get()
    }

    /// Drop pages that finished leaving by `now`
    pub fn prune(&mut self, now: f64) {
        self.transition.prune(now);
    }

    pub fn slots(&self) -> Vec<&PageSlot> {
        self.transition.get()
    }

    /// Slot of the page that is not leaving
    pub fn current(&self) -> Option<&PageSlot> {
        self.transition
            .get()
            .into_iter()
            .find(|slot| !self.transition.is_exiting(&slot.key))
    }

    pub fn is_leaving(&self, path: &str) -> bool {
        self.transition.is_exiting(&path.to_string())
    }

    pub fn len(&self) -> usize {
        self.transition.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transition.is_empty()
    }

    pub fn config(&self) -> &SlideTransitionConfig {
        self.transition.hooks().config()
    }
}

impl Default for PageTransitions {
    fn default() -> Self {
        Self::new()
    }
}

/// Visual state of a page at one animation position
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DriverStyle {
    pub opacity: f64,
    /// Horizontal offset in px
    pub translate_x: f64,
    /// Only a fully shown page takes input
    pub pointer_events: PointerEvents,
}

impl DriverStyle {
    /// Style for position `x`: 0 is shown, -1 and 1 are hidden
    pub fn at(x: f64) -> Self {
        Self {
            opacity: 1.0 - x.abs(),
            translate_x: if x == 0.0 { 0.0 } else { -x * 100.0 },
            pointer_events: if x == 0.0 {
                PointerEvents::All
            } else {
                PointerEvents::None
            },
        }
    }

    pub fn to_style(&self) -> Style {
        let mut style = Style::new();
        style.insert("opacity".to_string(), Value::from(self.opacity));
        style.insert(
            "transform".to_string(),
            Value::from(format!("translate({}px, 0px)", self.translate_x)),
        );
        style.insert(
            "pointerEvents".to_string(),
            Value::from(self.pointer_events.as_css()),
        );
        style
    }
}

/// Drives the style of one page element from its slot's animation
pub struct PageTransitionDriver {
    id: SlotId,
    page: DocPage,
    animation: Animation<Vector1D>,
    /// Written by the frame subscription while mounted
    style: Rc<Cell<DriverStyle>>,
}

impl PageTransitionDriver {
    /// Driver for `slot`, with its style sampled at `now`
    pub fn new(slot: &PageSlot, now: f64) -> Self {
        let start = DriverStyle::at(slot.animation.sample_at(now).point.x());
        Self {
            id: slot.id,
            page: slot.value.clone(),
            animation: slot.animation,
            style: Rc::new(Cell::new(start)),
        }
    }

    pub fn id(&self) -> SlotId {
        self.id
    }

    pub fn page(&self) -> &DocPage {
        &self.page
    }

    pub fn style_at(&self, now: f64) -> DriverStyle {
        DriverStyle::at(self.animation.sample_at(now).point.x())
    }

    /// Latest style written by the frame subscription
    pub fn style(&self) -> DriverStyle {
        self.style.get()
    }

    /// Update the style every frame until the subscription is dropped
    pub fn mount(&self, scheduler: &FrameScheduler) -> Subscription {
        let style = Rc::clone(&self.style);
        self.animation.subscribe(scheduler, move |sample| {
            style.set(DriverStyle::at(sample.point.x()));
        })
    }

    /// Wrapper element holding the page content with the current style
    pub fn render(&self) -> UiNode {
        h(
            "div",
            Props::new()
                .class_name("page-transition-driver")
                .attr("data-slot", self.id.to_string())
                .style(self.style().to_style()),
            vec![self.page.element.clone()],
        )
    }
}
