//! Touch controller implementations

pub mod xpt2046;

pub use xpt2046::{Xpt2046, Xpt2046Error};
