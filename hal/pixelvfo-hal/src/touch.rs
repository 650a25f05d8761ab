//! Resistive touch panel abstractions

/// One raw ADC reading from the touch controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RawSample {
    /// Raw X conversion (12-bit)
    pub x: u16,
    /// Raw Y conversion (12-bit)
    pub y: u16,
}

impl RawSample {
    /// Create a raw sample
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

/// Errors from touch panel access
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TouchError {
    /// SPI transfer failed
    Bus,
    /// Pen-detect pin could not be read
    Pin,
}

/// Touch panel trait
///
/// Implementations return `Ok(None)` while the pen is up, and one raw
/// reading per call while it is down. Calibration to screen coordinates
/// happens in the core's touch tracker.
pub trait TouchPanel {
    /// Sample the panel once
    fn sample(&mut self) -> Result<Option<RawSample>, TouchError>;
}
