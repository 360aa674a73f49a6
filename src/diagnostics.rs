// SPDX-License-Identifier: MPL-2.0
//! Diagnostics module for capturing notification lifecycle events.
//!
//! Events are stored in a memory-bounded circular buffer behind a cloneable
//! [`DiagnosticsHandle`], so UI code can log without blocking and without
//! caring whether anyone is listening.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Instant;

/// Default number of retained diagnostic events.
pub const DEFAULT_BUFFER_CAPACITY: usize = 1000;

/// A generic circular buffer with fixed capacity.
///
/// When the buffer is full, pushing a new element evicts the oldest one.
/// Elements are stored in chronological order (oldest first).
#[derive(Debug, Clone)]
pub struct CircularBuffer<T> {
    data: VecDeque<T>,
    capacity: usize,
}

impl<T> CircularBuffer<T> {
    /// Creates a new circular buffer with the specified capacity.
    ///
    /// A capacity of zero is bumped to one.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            data: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Pushes an element to the buffer, evicting the oldest if at capacity.
    pub fn push(&mut self, item: T) {
        if self.data.len() >= self.capacity {
            self.data.pop_front();
        }
        self.data.push_back(item);
    }

    /// Returns an iterator over the elements in chronological order (oldest first).
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    /// Returns the number of elements in the buffer.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the buffer is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the maximum capacity of the buffer.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

/// Kinds of events captured from the notification subsystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticEventKind {
    /// A notification was inserted into the area.
    NotificationDisplayed {
        /// Icon style class of the notification (may be empty).
        icon_class: &'static str,
    },
    /// A notification began its dismissal fade.
    NotificationDismissed {
        /// Which trigger won: `"timer"`, `"close-button"`, `"body"`, or `"handle"`.
        trigger: &'static str,
    },
}

/// A single captured event with its (monotonic) timestamp.
#[derive(Debug, Clone)]
pub struct DiagnosticEvent {
    pub at: Instant,
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self {
            at: Instant::now(),
            kind,
        }
    }
}

/// Cloneable handle for recording diagnostic events.
///
/// Recording never blocks UI work for long: the lock is held only for the
/// duration of a buffer push, and a poisoned lock drops the event instead
/// of propagating the panic.
#[derive(Debug, Clone)]
pub struct DiagnosticsHandle {
    buffer: Arc<Mutex<CircularBuffer<DiagnosticEvent>>>,
}

impl DiagnosticsHandle {
    /// Creates a handle with the default buffer capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_BUFFER_CAPACITY)
    }

    /// Creates a handle retaining at most `capacity` events.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: Arc::new(Mutex::new(CircularBuffer::new(capacity))),
        }
    }

    /// Records an event, stamping it with the current instant.
    pub fn record(&self, kind: DiagnosticEventKind) {
        if let Ok(mut buffer) = self.buffer.lock() {
            buffer.push(DiagnosticEvent::new(kind));
        }
    }

    /// Returns a copy of the retained events, oldest first.
    #[must_use]
    pub fn snapshot(&self) -> Vec<DiagnosticEvent> {
        self.buffer
            .lock()
            .map(|buffer| buffer.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Returns the number of retained events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.lock().map(|buffer| buffer.len()).unwrap_or(0)
    }

    /// Returns true if no events have been retained.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for DiagnosticsHandle {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_evicts_oldest_at_capacity() {
        let mut buffer = CircularBuffer::new(3);
        for i in 0..5 {
            buffer.push(i);
        }

        let items: Vec<_> = buffer.iter().copied().collect();
        assert_eq!(items, vec![2, 3, 4]);
        assert_eq!(buffer.len(), 3);
    }

    #[test]
    fn zero_capacity_is_bumped_to_one() {
        let mut buffer = CircularBuffer::new(0);
        buffer.push("a");
        buffer.push("b");
        assert_eq!(buffer.len(), 1);
        assert_eq!(buffer.capacity(), 1);
    }

    #[test]
    fn handle_records_and_snapshots_in_order() {
        let handle = DiagnosticsHandle::with_capacity(10);
        handle.record(DiagnosticEventKind::NotificationDisplayed {
            icon_class: "bi-patch-check",
        });
        handle.record(DiagnosticEventKind::NotificationDismissed { trigger: "timer" });

        let events = handle.snapshot();
        assert_eq!(events.len(), 2);
        assert_eq!(
            events[0].kind,
            DiagnosticEventKind::NotificationDisplayed {
                icon_class: "bi-patch-check"
            }
        );
        assert_eq!(
            events[1].kind,
            DiagnosticEventKind::NotificationDismissed { trigger: "timer" }
        );
    }

    #[test]
    fn cloned_handles_share_the_buffer() {
        let handle = DiagnosticsHandle::with_capacity(10);
        let clone = handle.clone();
        clone.record(DiagnosticEventKind::NotificationDismissed { trigger: "body" });
        assert_eq!(handle.len(), 1);
    }
}
