//! Board-agnostic touch navigation engine for the PixelVFO
//!
//! This crate contains all UI logic that does not depend on a specific
//! touch controller, display, or storage part:
//!
//! - Input events, the interrupt-safe event queue, and the touch tracker
//! - Rectangular hotspot hit testing and dispatch
//! - Menu definitions and the menu navigation state machine
//! - Synchronous alert/confirm dialogs
//! - The frequency preset slot store
//! - The renderer trait the drawing collaborator implements
//!
//! # Flow
//!
//! ```text
//! touch IRQ ──► TouchTracker ──► EventQueue ──► Navigator ──► Renderer
//!                                                   │
//!                                                   ├──► item actions
//!                                                   └──► SlotStore ──► NvStorage
//! ```

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod hotspot;
pub mod input;
pub mod layout;
pub mod menu;
pub mod nav;
pub mod slots;
pub mod traits;
pub mod ui;

#[cfg(test)]
mod testing;

pub use config::{TouchConfig, UiConfig};
pub use error::ConfigError;
pub use hotspot::{HotSpot, Region};
pub use input::{Event, EventKind, EventQueue, EventSource, TouchTracker};
pub use layout::Layout;
pub use menu::{ItemTitle, Menu, MenuId, MenuItem, MenuTree, Target};
pub use nav::{Dispatch, NavState, Navigator};
pub use slots::{slot_title, SlotRecord, SlotStore};
pub use traits::{DialogButtons, Renderer};
pub use ui::{ActionContext, Button, Dialogs, Ui};
