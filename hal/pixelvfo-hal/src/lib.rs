//! PixelVFO Hardware Abstraction Layer
//!
//! This crate defines the collaborator traits the UI core talks to. Board
//! bring-up code implements them for the concrete touch controller and
//! non-volatile memory; the core never touches hardware directly.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  pixelvfo-app / pixelvfo-core           │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  pixelvfo-hal (this crate - traits)     │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ touch driver  │       │ EEPROM/flash  │
//! │  (XPT2046)    │       │   backend     │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`storage::NvStorage`] - Byte-addressed persistent storage
//! - [`touch::TouchPanel`] - Raw resistive touch samples

#![no_std]
#![deny(unsafe_code)]

pub mod storage;
pub mod touch;

// Re-export key traits at crate root for convenience
pub use storage::{NvStorage, RamStorage, StorageError};
pub use touch::{RawSample, TouchError, TouchPanel};
