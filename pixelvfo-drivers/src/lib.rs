//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in pixelvfo-hal:
//!
//! - Touch controllers (XPT2046 resistive, SPI)

#![no_std]
#![deny(unsafe_code)]

pub mod touch;
