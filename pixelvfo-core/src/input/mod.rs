//! Input path from touch samples to UI events
//!
//! The producer side ([`TouchTracker`]) runs in the touch interrupt or a
//! polling timer and pushes into an [`EventQueue`]. The consumer side reads
//! through the [`EventSource`] trait so tests can script input.

mod event;
mod queue;
mod touch;

pub use event::{Event, EventKind};
pub use queue::{EventQueue, EventSource};
pub use touch::TouchTracker;
