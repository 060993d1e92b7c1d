//! End-to-end lifecycle of slide transitions over a simulated clock

use act_curve::{
    FrameScheduler, SlideTransition, Transition, TransitionSlot, Vector1D, VectorApi,
};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Clone, Debug, PartialEq)]
struct Page {
    path: String,
}

fn page(path: &str) -> Page {
    Page {
        path: path.to_string(),
    }
}

type PageKey = fn(&Page) -> String;

fn page_key(page: &Page) -> String {
    page.path.trim_start_matches('/').to_string()
}

fn transition() -> Transition<SlideTransition<Page, String, PageKey>> {
    Transition::start(SlideTransition::new(page_key as PageKey))
}

fn keys(slots: &[&TransitionSlot<String, Page>]) -> Vec<String> {
    slots.iter().map(|slot| slot.key.clone()).collect()
}

#[test]
fn test_enter_then_exit_until_hidden() {
    let mut state = transition();
    state.update(vec![page("/a")], 0.0);

    let slots = state.get();
    assert_eq!(keys(&slots), ["a"]);
    let entry = slots[0].animation;
    assert_eq!(entry.span.start, 0.0);

    state.update(vec![], 0.0);
    assert!(state.is_exiting(&"a".to_string()));
    let exit = state.get()[0].animation;
    assert_eq!(exit.curve.points[0], entry.sample_at(0.0).point);

    let mut last = f64::NEG_INFINITY;
    let mut now = 0.0;
    while !state.is_empty() {
        let x = state.get()[0].animation.sample_at(now).point.x();
        assert!(x >= last, "x went backwards at {now}: {x} < {last}");
        assert!(x < 1.0);
        last = x;

        now += 16.0;
        state.prune(now);
        assert!(now <= 600.0, "slot never expired");
    }
    assert!(now >= 500.0);
}

#[test]
fn test_reorder_keeps_ids_and_animations() {
    let mut state = transition();
    state.update(vec![page("/a"), page("/b")], 0.0);
    let before: Vec<_> = state.get().into_iter().cloned().collect();

    state.update(vec![page("/b"), page("/a")], 120.0);
    let after = state.get();

    assert_eq!(keys(&after), ["b", "a"]);
    assert_eq!(after[0].id, before[1].id);
    assert_eq!(after[0].animation, before[1].animation);
    assert_eq!(after[1].id, before[0].id);
    assert_eq!(after[1].animation, before[0].animation);
}

#[test]
fn test_resurrection_is_a_single_slot() {
    let mut state = transition();
    state.update(vec![page("/a")], 0.0);
    let id = state.get()[0].id;

    state.update(vec![], 600.0);
    let exit = state.get()[0].animation;

    state.update(vec![page("/a")], 800.0);
    let slots = state.get();
    assert_eq!(slots.len(), 1);
    assert_eq!(slots[0].id, id);
    assert!(!state.is_exiting(&"a".to_string()));

    let sample = exit.sample_at(800.0);
    let restored = slots[0].animation;
    assert_eq!(restored.curve.points[0], sample.point);
    assert_eq!(restored.curve.points[1], sample.point.add(sample.velocity));
    assert_eq!(restored.curve.points[3], Vector1D::new(0.0));
    assert_eq!(restored.sample_at(1300.0).point.x(), 0.0);
}

#[test]
fn test_navigation_keeps_leaving_page_in_place() {
    let mut state = transition();
    state.update(vec![page("/a")], 0.0);
    state.update(vec![page("/b")], 600.0);
    assert_eq!(keys(&state.get()), ["a", "b"]);

    state.update(vec![page("/c")], 700.0);
    assert_eq!(keys(&state.get()), ["a", "b", "c"]);

    state.update(vec![page("/c")], 1101.0);
    assert_eq!(keys(&state.get()), ["b", "c"]);

    state.update(vec![page("/c")], 1200.0);
    assert_eq!(keys(&state.get()), ["c"]);
}

#[test]
fn test_driving_slots_from_the_frame_scheduler() {
    let scheduler = FrameScheduler::new();
    let mut state = transition();
    state.update(vec![page("/a")], 0.0);

    let positions = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&positions);
    let subscription = state.get()[0]
        .animation
        .subscribe(&scheduler, move |sample| sink.borrow_mut().push(sample.point.x()));

    for frame in 0..=4 {
        scheduler.tick(frame as f64 * 125.0);
    }
    subscription.unsubscribe();
    scheduler.tick(1000.0);

    let positions = positions.borrow();
    assert_eq!(positions.len(), 5);
    assert_eq!(positions[0], -1.0);
    assert_eq!(positions[4], 0.0);
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}
