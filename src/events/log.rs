//! The append-only event log.
//!
//! Two views over one stream:
//! - a **queue** of everything not yet consumed, unbounded, drained by
//!   whoever drives the game (UI, test harness, replay writer)
//! - a **recent ring** of the last N events for diagnostics, bounded
//!   and overwritten silently
//!
//! Recording is synchronous and allocation-light; there is no
//! subscription machinery here. Fan-out to interested parties happens
//! in the orchestrator through [`EventObserver`].

use std::collections::VecDeque;

use crate::events::Event;

/// Default size of the recent-events ring.
pub const DEFAULT_RECENT_CAPACITY: usize = 64;

/// Receives every event as it is recorded, in order.
///
/// Observers run synchronously on the game loop; a slow observer slows
/// the game. They see events after the state change they describe.
pub trait EventObserver {
    fn on_event(&mut self, event: &Event);
}

/// Ordered history of everything the engine did.
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    queue: VecDeque<Event>,
    recent: VecDeque<Event>,
    recent_capacity: usize,
    next_seq: u64,
}

impl EventLog {
    /// An empty log with the default recent-ring size.
    #[must_use]
    pub fn new() -> Self {
        Self::with_recent_capacity(DEFAULT_RECENT_CAPACITY)
    }

    /// An empty log keeping the last `capacity` events for diagnostics.
    #[must_use]
    pub fn with_recent_capacity(capacity: usize) -> Self {
        Self {
            queue: VecDeque::new(),
            recent: VecDeque::with_capacity(capacity),
            recent_capacity: capacity,
            next_seq: 0,
        }
    }

    /// Stamp an event with the next sequence number and append it.
    ///
    /// Returns the stamped copy for fan-out.
    pub fn record(&mut self, event: Event) -> Event {
        let mut event = event;
        event.seq = self.next_seq;
        self.next_seq += 1;

        if self.recent_capacity > 0 {
            if self.recent.len() == self.recent_capacity {
                self.recent.pop_front();
            }
            self.recent.push_back(event.clone());
        }
        self.queue.push_back(event.clone());
        event
    }

    /// Next unconsumed event, if any.
    #[must_use]
    pub fn peek(&self) -> Option<&Event> {
        self.queue.front()
    }

    /// Consume the next event.
    pub fn pop(&mut self) -> Option<Event> {
        self.queue.pop_front()
    }

    /// Consume everything queued, oldest first.
    pub fn drain(&mut self) -> Vec<Event> {
        self.queue.drain(..).collect()
    }

    /// Number of unconsumed events.
    #[must_use]
    pub fn queued(&self) -> usize {
        self.queue.len()
    }

    /// Whether anything is waiting to be consumed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Total events ever recorded.
    #[must_use]
    pub fn recorded(&self) -> u64 {
        self.next_seq
    }

    /// The most recent events, oldest first, up to the ring capacity.
    pub fn recent(&self) -> impl Iterator<Item = &Event> {
        self.recent.iter()
    }
}
