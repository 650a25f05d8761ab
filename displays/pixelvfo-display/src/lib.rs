//! Character-cell rendering for the PixelVFO
//!
//! This crate provides:
//! - [`Screen`], a text buffer that implements the core `Renderer` trait
//! - [`DisplayBackend`], the trait a concrete panel driver implements
//!
//! # Architecture
//!
//! The navigation engine draws into a `Screen`. The board loop calls
//! [`Screen::present`] when the buffer is dirty, which pushes the lines and
//! highlights to whatever backend drives the panel (an ILI9341 with a
//! fixed-width font, a serial terminal, a test recorder).

#![no_std]
#![deny(unsafe_code)]

pub mod backend;
pub mod screen;

// Re-export key types
pub use backend::{DisplayBackend, DisplayError};
pub use screen::{Screen, SCREEN_COLS, SCREEN_ROWS};
