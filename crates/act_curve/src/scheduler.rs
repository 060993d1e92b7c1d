//! Frame scheduler
//!
//! Drives per-frame callbacks from the host's rendering loop. The host calls
//! [`FrameScheduler::tick`] once per frame with its clock; every live
//! subscription is invoked once with that timestamp.
//!
//! Subscriptions are scoped resources: a [`Subscription`] releases its
//! callback when it is unsubscribed or dropped, so a torn-down element can
//! never leak a per-frame callback. Everything here is single-threaded.

use slotmap::{new_key_type, SlotMap};
use std::cell::RefCell;
use std::rc::{Rc, Weak};

new_key_type! {
    /// Handle to a registered frame callback
    pub struct SubscriptionId;
}

type FrameCallback = Box<dyn FnMut(f64)>;

/// Internal state of the frame scheduler
struct SchedulerInner {
    /// `None` while the callback is running
    callbacks: SlotMap<SubscriptionId, Option<FrameCallback>>,
    frame_count: u64,
    last_frame: Option<f64>,
}

/// Per-frame callback registry
///
/// Cloning yields another owner of the same registry.
#[derive(Clone)]
pub struct FrameScheduler {
    inner: Rc<RefCell<SchedulerInner>>,
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(SchedulerInner {
                callbacks: SlotMap::with_key(),
                frame_count: 0,
                last_frame: None,
            })),
        }
    }

    /// Get a weak handle for passing to components
    pub fn handle(&self) -> SchedulerHandle {
        SchedulerHandle {
            inner: Rc::downgrade(&self.inner),
        }
    }

    /// Register a callback that runs once per frame
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: FnMut(f64) + 'static,
    {
        register(&self.inner, Box::new(callback))
    }

    /// Run one frame at `now`
    ///
    /// Callbacks registered during the frame first run on the next frame.
    /// Callbacks may unsubscribe themselves or others while running.
    /// Returns the number of callbacks invoked.
    pub fn tick(&self, now: f64) -> usize {
        let ids: Vec<SubscriptionId> = {
            let mut inner = self.inner.borrow_mut();
            inner.frame_count += 1;
            inner.last_frame = Some(now);
            inner.callbacks.keys().collect()
        };

        let mut invoked = 0;
        for id in ids {
            let callback = self
                .inner
                .borrow_mut()
                .callbacks
                .get_mut(id)
                .and_then(Option::take);
            let Some(mut callback) = callback else {
                continue;
            };

            callback(now);
            invoked += 1;

            // Put it back unless it was unsubscribed while running
            if let Some(slot) = self.inner.borrow_mut().callbacks.get_mut(id) {
                *slot = Some(callback);
                continue;
            }
            drop(callback);
        }
        invoked
    }

    /// Number of live subscriptions
    pub fn subscription_count(&self) -> usize {
        self.inner.borrow().callbacks.len()
    }

    pub fn has_subscriptions(&self) -> bool {
        self.subscription_count() > 0
    }

    /// Number of frames run so far
    pub fn frame_count(&self) -> u64 {
        self.inner.borrow().frame_count
    }

    /// Timestamp of the most recent frame
    pub fn last_frame(&self) -> Option<f64> {
        self.inner.borrow().last_frame
    }
}

impl Default for FrameScheduler {
    fn default() -> Self {
        Self::new()
    }
}

fn register(inner: &Rc<RefCell<SchedulerInner>>, callback: FrameCallback) -> Subscription {
    let id = inner.borrow_mut().callbacks.insert(Some(callback));
    tracing::trace!(?id, "frame subscription registered");
    Subscription {
        id: Some(id),
        inner: Rc::downgrade(inner),
    }
}

/// Weak handle to a [`FrameScheduler`]
///
/// Does not keep the scheduler alive; operations on a dead handle no-op.
#[derive(Clone)]
pub struct SchedulerHandle {
    inner: Weak<RefCell<SchedulerInner>>,
}

impl SchedulerHandle {
    /// Register a frame callback, or `None` if the scheduler is gone
    pub fn subscribe<F>(&self, callback: F) -> Option<Subscription>
    where
        F: FnMut(f64) + 'static,
    {
        let inner = self.inner.upgrade()?;
        Some(register(&inner, Box::new(callback)))
    }

    /// Check if the scheduler is still alive
    pub fn is_alive(&self) -> bool {
        self.inner.strong_count() > 0
    }
}

/// A registered frame callback
///
/// The callback is removed by [`Subscription::unsubscribe`] or on drop.
#[must_use = "dropping a Subscription unsubscribes it immediately"]
pub struct Subscription {
    id: Option<SubscriptionId>,
    inner: Weak<RefCell<SchedulerInner>>,
}

impl Subscription {
    pub fn id(&self) -> Option<SubscriptionId> {
        self.id
    }

    /// True while the callback is still registered with a live scheduler
    pub fn is_active(&self) -> bool {
        match (self.id, self.inner.upgrade()) {
            (Some(id), Some(inner)) => inner.borrow().callbacks.contains_key(id),
            _ => false,
        }
    }

    /// Stop receiving frames
    pub fn unsubscribe(mut self) {
        self.release();
    }

    fn release(&mut self) {
        let Some(id) = self.id.take() else {
            return;
        };
        let Some(inner) = self.inner.upgrade() else {
            return;
        };
        // Drop the callback after the borrow ends: it may own subscriptions too
        let removed = inner.borrow_mut().callbacks.remove(id);
        tracing::trace!(?id, "frame subscription released");
        drop(removed);
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("active", &self.is_active())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_tick_invokes_each_callback_once() {
        let scheduler = FrameScheduler::new();
        let count = Rc::new(Cell::new(0));

        let c1 = Rc::clone(&count);
        let _a = scheduler.subscribe(move |_| c1.set(c1.get() + 1));
        let c2 = Rc::clone(&count);
        let _b = scheduler.subscribe(move |_| c2.set(c2.get() + 10));

        assert_eq!(scheduler.tick(16.0), 2);
        assert_eq!(count.get(), 11);
        assert_eq!(scheduler.frame_count(), 1);
        assert_eq!(scheduler.last_frame(), Some(16.0));
    }

    #[test]
    fn test_unsubscribe_stops_frames() {
        let scheduler = FrameScheduler::new();
        let count = Rc::new(Cell::new(0));

        let c = Rc::clone(&count);
        let subscription = scheduler.subscribe(move |_| c.set(c.get() + 1));
        assert!(subscription.is_active());

        scheduler.tick(0.0);
        subscription.unsubscribe();
        scheduler.tick(16.0);

        assert_eq!(count.get(), 1);
        assert!(!scheduler.has_subscriptions());
    }

    #[test]
    fn test_callback_can_unsubscribe_itself() {
        let scheduler = FrameScheduler::new();
        let slot: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));
        let count = Rc::new(Cell::new(0));

        let own = Rc::clone(&slot);
        let c = Rc::clone(&count);
        let subscription = scheduler.subscribe(move |_| {
            c.set(c.get() + 1);
            own.borrow_mut().take();
        });
        *slot.borrow_mut() = Some(subscription);

        scheduler.tick(0.0);
        scheduler.tick(16.0);

        assert_eq!(count.get(), 1);
        assert_eq!(scheduler.subscription_count(), 0);
    }

    #[test]
    fn test_subscribe_during_frame_runs_next_frame() {
        let scheduler = FrameScheduler::new();
        let late_calls = Rc::new(Cell::new(0));
        let held: Rc<RefCell<Vec<Subscription>>> = Rc::new(RefCell::new(Vec::new()));

        let handle = scheduler.handle();
        let late = Rc::clone(&late_calls);
        let store = Rc::clone(&held);
        let _outer = scheduler.subscribe(move |_| {
            if store.borrow().is_empty() {
                let late = Rc::clone(&late);
                if let Some(sub) = handle.subscribe(move |_| late.set(late.get() + 1)) {
                    store.borrow_mut().push(sub);
                }
            }
        });

        assert_eq!(scheduler.tick(0.0), 1);
        assert_eq!(late_calls.get(), 0);
        assert_eq!(scheduler.tick(16.0), 2);
        assert_eq!(late_calls.get(), 1);
    }

    #[test]
    fn test_handle_weak_reference() {
        let handle = {
            let scheduler = FrameScheduler::new();
            scheduler.handle()
        };

        assert!(!handle.is_alive());
        assert!(handle.subscribe(|_| {}).is_none());
    }

    #[test]
    fn test_subscription_outliving_scheduler_is_inert() {
        let scheduler = FrameScheduler::new();
        let subscription = scheduler.subscribe(|_| {});
        drop(scheduler);
        assert!(!subscription.is_active());
        drop(subscription);
    }
}
