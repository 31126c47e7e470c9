//! Logical-time event queue.
//!
//! Entries are keyed by `(due, sequence)`, so entries due at the same
//! millisecond fire in the order they were scheduled. Both maps are `im`
//! persistent structures; cloning a timeline is O(1).

use im::{HashMap as ImHashMap, OrdMap};
use serde::{Deserialize, Serialize};

/// Handle for cancelling a scheduled entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ScheduleToken(pub u64);

impl ScheduleToken {
    /// Get the raw token value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for ScheduleToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Schedule({})", self.0)
    }
}

/// An entry that has come due.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fired<E> {
    /// Token the entry was scheduled under.
    pub token: ScheduleToken,
    /// Logical time (ms) the entry was due at.
    pub due: u64,
    /// The scheduled payload.
    pub event: E,
}

/// Logical clock plus a queue of pending entries.
///
/// ## Behavior
///
/// - `schedule()`: Enqueue an entry `delay` ms after `now()`
/// - `pop_due()`: Remove the earliest entry due at or before a deadline,
///   moving `now()` to its due time
/// - `cancel()`: Drop an entry; cancelled entries never fire
/// - `advance_to()`: Move the clock forward without firing anything
#[derive(Clone, Debug)]
pub struct Timeline<E: Clone> {
    now: u64,
    next_seq: u64,
    entries: OrdMap<(u64, u64), E>,
    due_by_token: ImHashMap<ScheduleToken, u64>,
}

impl<E: Clone> Default for Timeline<E> {
    fn default() -> Self {
        Self {
            now: 0,
            next_seq: 0,
            entries: OrdMap::new(),
            due_by_token: ImHashMap::new(),
        }
    }
}

impl<E: Clone> Timeline<E> {
    /// Create an empty timeline at time zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current logical time in milliseconds.
    #[must_use]
    pub fn now(&self) -> u64 {
        self.now
    }

    /// Number of pending entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Schedule `event` to fire `delay_ms` after now.
    pub fn schedule(&mut self, delay_ms: u64, event: E) -> ScheduleToken {
        let seq = self.next_seq;
        self.next_seq += 1;

        let due = self.now.saturating_add(delay_ms);
        let token = ScheduleToken(seq);
        self.entries.insert((due, seq), event);
        self.due_by_token.insert(token, due);
        token
    }

    /// Cancel a pending entry.
    ///
    /// Returns false if the entry already fired or was cancelled.
    pub fn cancel(&mut self, token: ScheduleToken) -> bool {
        match self.due_by_token.remove(&token) {
            Some(due) => self.entries.remove(&(due, token.0)).is_some(),
            None => false,
        }
    }

    /// Cancel every pending entry matching `predicate`.
    ///
    /// Returns the number of entries cancelled.
    pub fn cancel_where<F>(&mut self, mut predicate: F) -> usize
    where
        F: FnMut(&E) -> bool,
    {
        let doomed: Vec<(u64, u64)> = self
            .entries
            .keys()
            .copied()
            .filter(|key| self.entries.get(key).is_some_and(|event| predicate(event)))
            .collect();

        for key in &doomed {
            self.entries.remove(key);
            self.due_by_token.remove(&ScheduleToken(key.1));
        }

        doomed.len()
    }

    /// Cancel everything. The clock keeps its current time.
    pub fn clear(&mut self) {
        self.entries = OrdMap::new();
        self.due_by_token = ImHashMap::new();
    }

    /// Is this entry still pending?
    #[must_use]
    pub fn is_scheduled(&self, token: ScheduleToken) -> bool {
        self.due_by_token.contains_key(&token)
    }

    /// Due time of the earliest pending entry.
    #[must_use]
    pub fn next_due(&self) -> Option<u64> {
        self.entries.keys().next().map(|(due, _)| *due)
    }

    /// Iterate pending entries in firing order.
    pub fn pending(&self) -> impl Iterator<Item = (u64, &E)> + '_ {
        self.entries
            .keys()
            .filter_map(|key| self.entries.get(key).map(|event| (key.0, event)))
    }

    /// Remove the earliest entry due at or before `deadline`.
    ///
    /// Moves the clock to the entry's due time, so anything the caller
    /// schedules in response is relative to when the entry fired.
    pub fn pop_due(&mut self, deadline: u64) -> Option<Fired<E>> {
        let (due, seq) = match self.entries.keys().next() {
            Some(&key) if key.0 <= deadline => key,
            _ => return None,
        };

        let event = self.entries.remove(&(due, seq))?;
        let token = ScheduleToken(seq);
        self.due_by_token.remove(&token);
        self.now = self.now.max(due);

        Some(Fired { token, due, event })
    }

    /// Move the clock forward. Never moves it backwards.
    pub fn advance_to(&mut self, time: u64) {
        self.now = self.now.max(time);
    }
}
