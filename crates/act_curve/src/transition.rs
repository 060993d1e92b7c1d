//! Keyed transition state machine
//!
//! Reconciles an ordered list of items against a set of per-key states so
//! that items can animate in, update in place and animate out before they
//! are dropped. What a state looks like and how it animates is supplied by
//! [`TransitionHooks`]; [`Transition`] only tracks keys, phases and order.
//!
//! Lifecycle of a key:
//!
//! - **created** the first time it appears (`create`)
//! - **updated** on every later appearance (`update`, no re-animation)
//! - **exiting** once it disappears (`remove`, called once per exit)
//! - **restored** if it reappears while exiting (`restore`, same slot)
//! - **destroyed** when `is_visible` reports an exiting state as hidden
//!
//! Exposed order follows the latest item list. Exiting slots keep the index
//! they had in the exposed list when they were removed; that index is frozen
//! and never recomputed.
//!
//! Everything is a function of `(state, items, now)`: no clock is read here.

use indexmap::IndexMap;
use rustc_hash::{FxBuildHasher, FxHashMap, FxHashSet};
use std::fmt;
use std::hash::Hash;

/// Opaque identity of a slot, stable for the lifetime of its key
///
/// Assigned once when a key is created. A key that fully exits and later
/// comes back gets a new id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SlotId(u64);

impl SlotId {
    pub fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "slot-{}", self.0)
    }
}

/// Generates slot ids, never reusing one
#[derive(Debug)]
struct SlotIdGenerator {
    next: u64,
}

impl SlotIdGenerator {
    fn new() -> Self {
        Self { next: 1 }
    }

    fn next(&mut self) -> SlotId {
        let id = SlotId(self.next);
        self.next += 1;
        id
    }
}

/// Behavior of a [`Transition`]
pub trait TransitionHooks {
    /// Caller's item type
    type Value;
    /// Identity derived from an item
    type Key: Clone + Eq + Hash;
    /// Per-key state exposed to the caller
    type State;

    fn key(&self, value: &Self::Value) -> Self::Key;

    /// State for a key seen for the first time
    fn create(&self, id: SlotId, value: Self::Value, index: usize, now: f64) -> Self::State;

    /// State for a key that is still present; must not restart its animation
    fn update(&self, prev: Self::State, value: Self::Value, index: usize, now: f64)
        -> Self::State;

    /// State for a key that just disappeared
    fn remove(&self, prev: Self::State, now: f64) -> Self::State;

    /// State for an exiting key that reappeared
    fn restore(&self, prev: Self::State, value: Self::Value, index: usize, now: f64)
        -> Self::State;

    /// Whether an exiting state should still be kept around at `now`
    fn is_visible(&self, state: &Self::State, now: f64) -> bool;

    /// Called when a present key moves to a new index; state is unaffected
    fn reorder(&self, prev: Self::State, _next_index: usize) -> Self::State {
        prev
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Present,
    /// Frozen exposed index at the time of removal
    Exiting { index: usize },
}

#[derive(Debug)]
struct Entry<S> {
    state: S,
    phase: Phase,
}

/// Keyed transition state
///
/// # Example
///
/// ```rust
/// use act_curve::{SlideTransition, Transition};
///
/// let mut pages = Transition::start(SlideTransition::new(|path: &String| path.clone()));
/// pages.update(vec!["/a".to_string()], 0.0);
/// pages.update(vec!["/b".to_string()], 100.0);
///
/// // "/a" is exiting but still rendered until its animation finishes
/// let keys: Vec<_> = pages.get().iter().map(|slot| slot.key.clone()).collect();
/// assert_eq!(keys, ["/a", "/b"]);
///
/// pages.prune(700.0);
/// assert_eq!(pages.len(), 1);
/// ```
pub struct Transition<H: TransitionHooks> {
    hooks: H,
    entries: FxHashMap<H::Key, Entry<H::State>>,
    /// Exposed order of every tracked key
    order: Vec<H::Key>,
    ids: SlotIdGenerator,
}

impl<H: TransitionHooks> Transition<H> {
    /// Empty state: no slots
    pub fn start(hooks: H) -> Self {
        Self {
            hooks,
            entries: FxHashMap::default(),
            order: Vec::new(),
            ids: SlotIdGenerator::new(),
        }
    }

    pub fn hooks(&self) -> &H {
        &self.hooks
    }

    /// Reconcile with the current item list at `now`
    ///
    /// Duplicate keys within one call: the last item's value wins and the
    /// slot takes the position of the first occurrence.
    pub fn update<I>(&mut self, items: I, now: f64)
    where
        I: IntoIterator<Item = H::Value>,
    {
        let mut incoming: IndexMap<H::Key, H::Value, FxBuildHasher> = IndexMap::default();
        let mut item_count = 0;
        for value in items {
            item_count += 1;
            incoming.insert(self.hooks.key(&value), value);
        }
        if incoming.len() < item_count {
            tracing::debug!(
                items = item_count,
                keys = incoming.len(),
                "duplicate transition keys, last value wins"
            );
        }

        let previous_index: FxHashMap<H::Key, usize> = self
            .order
            .iter()
            .enumerate()
            .map(|(index, key)| (key.clone(), index))
            .collect();

        // Created, updated and restored keys, in input order
        let mut present = Vec::with_capacity(incoming.len());
        for (index, (key, value)) in incoming.into_iter().enumerate() {
            let state = match self.entries.remove(&key) {
                None => {
                    let id = self.ids.next();
                    tracing::trace!(%id, index, "transition slot created");
                    self.hooks.create(id, value, index, now)
                }
                Some(Entry {
                    state,
                    phase: Phase::Present,
                }) => {
                    let state = self.hooks.update(state, value, index, now);
                    if previous_index.get(&key) != Some(&index) {
                        self.hooks.reorder(state, index)
                    } else {
                        state
                    }
                }
                Some(Entry {
                    state,
                    phase: Phase::Exiting { .. },
                }) => {
                    tracing::trace!(index, "exiting transition slot restored");
                    self.hooks.restore(state, value, index, now)
                }
            };
            self.entries.insert(
                key.clone(),
                Entry {
                    state,
                    phase: Phase::Present,
                },
            );
            present.push(key);
        }

        // Keys that are gone from the list start (or keep) exiting
        let present_keys: FxHashSet<&H::Key> = present.iter().collect();
        let mut exiting = Vec::new();
        for (index, key) in self.order.iter().enumerate() {
            if present_keys.contains(key) {
                continue;
            }
            let Some(entry) = self.entries.remove(key) else {
                continue;
            };
            let entry = match entry.phase {
                Phase::Present => {
                    tracing::trace!(index, "transition slot exiting");
                    Entry {
                        state: self.hooks.remove(entry.state, now),
                        phase: Phase::Exiting { index },
                    }
                }
                Phase::Exiting { .. } => entry,
            };
            if let Phase::Exiting { index } = entry.phase {
                exiting.push((index, key.clone()));
            }
            self.entries.insert(key.clone(), entry);
        }

        self.order = merge_order(present, exiting);
        self.prune(now);
    }

    /// Drop exiting slots that are no longer visible at `now`
    pub fn prune(&mut self, now: f64) {
        let hooks = &self.hooks;
        let entries = &mut self.entries;
        self.order.retain(|key| {
            let keep = match entries.get(key) {
                Some(entry) => match entry.phase {
                    Phase::Present => true,
                    Phase::Exiting { .. } => hooks.is_visible(&entry.state, now),
                },
                None => false,
            };
            if !keep {
                entries.remove(key);
                tracing::trace!("transition slot destroyed");
            }
            keep
        });
    }

    /// Current slots in exposed order, including exiting ones
    ///
    /// Pure read: does not advance time or prune.
    pub fn get(&self) -> Vec<&H::State> {
        self.order
            .iter()
            .filter_map(|key| self.entries.get(key).map(|entry| &entry.state))
            .collect()
    }

    /// Like [`get`](Self::get), skipping exiting slots already hidden at `now`
    pub fn visible_at(&self, now: f64) -> Vec<&H::State> {
        self.order
            .iter()
            .filter_map(|key| self.entries.get(key))
            .filter(|entry| match entry.phase {
                Phase::Present => true,
                Phase::Exiting { .. } => self.hooks.is_visible(&entry.state, now),
            })
            .map(|entry| &entry.state)
            .collect()
    }

    /// Whether `key` is currently animating out
    pub fn is_exiting(&self, key: &H::Key) -> bool {
        matches!(
            self.entries.get(key).map(|entry| entry.phase),
            Some(Phase::Exiting { .. })
        )
    }

    pub fn contains(&self, key: &H::Key) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of tracked slots, exiting ones included
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// Present keys in input order, with exiting keys re-inserted at their
/// frozen index (clamped to the list length), lowest index first
fn merge_order<K>(present: Vec<K>, mut exiting: Vec<(usize, K)>) -> Vec<K> {
    exiting.sort_by_key(|(index, _)| *index);
    let mut order = present;
    order.reserve(exiting.len());
    for (index, key) in exiting {
        let at = index.min(order.len());
        order.insert(at, key);
    }
    order
}

impl<H> fmt::Debug for Transition<H>
where
    H: TransitionHooks,
    H::Key: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let slots: Vec<_> = self
            .order
            .iter()
            .map(|key| (key, self.entries.get(key).map(|entry| entry.phase)))
            .collect();
        f.debug_struct("Transition").field("slots", &slots).finish()
    }
}
