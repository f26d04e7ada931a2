// SPDX-License-Identifier: MIT OR Apache-2.0
//! Single-shot resettable debounce timer.

use std::time::{Duration, Instant};

/// A classic debounce: arming replaces any pending deadline, it never
/// stacks. The host loop polls with the current time; the deadline
/// fires exactly once.
#[derive(Debug, Clone)]
pub struct Debouncer {
    /// Delay between arming and firing
    delay: Duration,
    /// Pending deadline, if armed
    deadline: Option<Instant>,
}

impl Debouncer {
    /// Create a debouncer with the given delay
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// Arm (or re-arm) the timer relative to `now`
    pub fn arm(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    /// Cancel any pending deadline
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Whether a deadline is pending
    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Fire if the deadline has passed; returns `true` at most once per arm
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
