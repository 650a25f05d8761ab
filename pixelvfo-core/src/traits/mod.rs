//! Collaborator traits
//!
//! The navigation engine draws through [`Renderer`]; storage and touch
//! traits live in `pixelvfo-hal`.

pub mod render;

pub use render::{DialogButtons, Renderer};
