//! Bounded event queue between the touch producer and the UI loop
//!
//! The producer runs in interrupt context and must never block, so a full
//! queue overwrites its oldest entry. Every operation holds the lock only
//! long enough to touch the ring buffer.

use core::cell::RefCell;

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::blocking_mutex::Mutex;
use heapless::Deque;

use super::{Event, EventKind};

struct Inner<const N: usize> {
    events: Deque<Event, N>,
    dropped: u32,
}

/// Single-producer single-consumer event FIFO
///
/// Use `CriticalSectionRawMutex` when the producer is an interrupt handler,
/// `NoopRawMutex` when both ends live on one thread.
pub struct EventQueue<M: RawMutex, const N: usize> {
    inner: Mutex<M, RefCell<Inner<N>>>,
}

impl<M: RawMutex, const N: usize> EventQueue<M, N> {
    /// Create an empty queue
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Inner {
                events: Deque::new(),
                dropped: 0,
            })),
        }
    }

    /// Enqueue an event built from its parts
    pub fn push(&self, kind: EventKind, x: i32, y: i32) -> bool {
        self.push_event(Event::new(kind, x, y))
    }

    /// Enqueue an event
    ///
    /// Returns `true` if the queue was full and its oldest event was
    /// overwritten.
    pub fn push_event(&self, event: Event) -> bool {
        let overwrote = self.inner.lock(|cell| {
            let mut inner = cell.borrow_mut();
            let overwrote = if inner.events.is_full() {
                inner.events.pop_front();
                inner.dropped = inner.dropped.wrapping_add(1);
                true
            } else {
                false
            };
            // Room was made above
            let _ = inner.events.push_back(event);
            overwrote
        });

        #[cfg(feature = "defmt")]
        if overwrote {
            defmt::warn!("event queue full, oldest event dropped");
        }

        overwrote
    }

    /// Dequeue the oldest event, if any
    pub fn try_pop(&self) -> Option<Event> {
        self.inner.lock(|cell| cell.borrow_mut().events.pop_front())
    }

    /// Dequeue the oldest event, or [`Event::NONE`] when empty
    pub fn pop(&self) -> Event {
        self.try_pop().unwrap_or(Event::NONE)
    }

    /// Discard every queued event, returning how many were dropped
    pub fn flush(&self) -> usize {
        self.inner.lock(|cell| {
            let mut inner = cell.borrow_mut();
            let count = inner.events.len();
            inner.events.clear();
            count
        })
    }

    pub fn len(&self) -> usize {
        self.inner.lock(|cell| cell.borrow().events.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Events lost to overwrite since creation
    pub fn dropped(&self) -> u32 {
        self.inner.lock(|cell| cell.borrow().dropped)
    }
}

impl<M: RawMutex, const N: usize> Default for EventQueue<M, N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Consumer-side view of the input stream
pub trait EventSource {
    /// Next queued event, or [`Event::NONE`]
    fn poll(&mut self) -> Event;

    /// Discard pending input
    fn flush(&mut self);

    /// Called between empty polls
    fn idle(&mut self) {
        core::hint::spin_loop();
    }
}

impl<M: RawMutex, const N: usize> EventSource for &EventQueue<M, N> {
    fn poll(&mut self) -> Event {
        EventQueue::pop(*self)
    }

    fn flush(&mut self) {
        let _discarded = EventQueue::flush(*self);
        #[cfg(feature = "defmt")]
        if _discarded > 0 {
            defmt::debug!("flushed {} stale events", _discarded);
        }
    }
}
