//! XPT2046 resistive touch controller (SPI)
//!
//! The XPT2046 is a 12-bit ADC with the touch-screen switch matrix built in.
//! The PENIRQ output goes low while the panel is pressed.
//!
//! # Read sequence
//!
//! One SPI transaction of seven 16-bit words. Each word clocks out the
//! next control byte while the previous conversion shifts in:
//!
//! ```text
//! TX: 0091 00D1 0091 00D1 0091 00D0 0000
//! ```
//!
//! The repeated conversions let the panel settle; only the last pair is
//! used. A conversion result sits in bits 14..3 of its response word.

use embedded_hal::digital::InputPin;
use embedded_hal::spi::SpiDevice;
use pixelvfo_hal::{RawSample, TouchError, TouchPanel};

/// Control bytes
pub mod cmd {
    /// Measure Y plate, reference on, PENIRQ disabled
    pub const MEASURE_Y: u8 = 0x91;
    /// Measure X plate, reference on, PENIRQ disabled
    pub const MEASURE_X: u8 = 0xD1;
    /// Measure X plate and power down (re-enables PENIRQ)
    pub const MEASURE_X_POWER_DOWN: u8 = 0xD0;
}

/// Big-endian words sent in one read
const READ_SEQUENCE: [u8; 14] = [
    0,
    cmd::MEASURE_Y,
    0,
    cmd::MEASURE_X,
    0,
    cmd::MEASURE_Y,
    0,
    cmd::MEASURE_X,
    0,
    cmd::MEASURE_Y,
    0,
    cmd::MEASURE_X_POWER_DOWN,
    0,
    0,
];

/// Offsets of the last conversion pair in the response, reported as X then Y
const X_RESULT: usize = 10;
const Y_RESULT: usize = 12;

/// Errors from the XPT2046
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Xpt2046Error {
    /// SPI transaction failed
    Spi,
    /// PENIRQ pin could not be read
    Irq,
}

impl From<Xpt2046Error> for TouchError {
    fn from(err: Xpt2046Error) -> Self {
        match err {
            Xpt2046Error::Spi => TouchError::Bus,
            Xpt2046Error::Irq => TouchError::Pin,
        }
    }
}

/// XPT2046 driver
pub struct Xpt2046<SPI, IRQ> {
    spi: SPI,
    irq: IRQ,
}

impl<SPI: SpiDevice, IRQ: InputPin> Xpt2046<SPI, IRQ> {
    /// Create a driver from an SPI device and the PENIRQ input
    pub fn new(spi: SPI, irq: IRQ) -> Self {
        Self { spi, irq }
    }

    /// Release the bus device and pin
    pub fn release(self) -> (SPI, IRQ) {
        (self.spi, self.irq)
    }

    /// Check the PENIRQ line (active low)
    pub fn is_pressed(&mut self) -> Result<bool, Xpt2046Error> {
        self.irq.is_low().map_err(|_| Xpt2046Error::Irq)
    }

    /// Run the read sequence and return the raw 12-bit conversions
    pub fn read_raw(&mut self) -> Result<RawSample, Xpt2046Error> {
        let mut rx = [0u8; READ_SEQUENCE.len()];
        self.spi
            .transfer(&mut rx, &READ_SEQUENCE)
            .map_err(|_| Xpt2046Error::Spi)?;

        let x = conversion(rx[X_RESULT], rx[X_RESULT + 1]);
        let y = conversion(rx[Y_RESULT], rx[Y_RESULT + 1]);
        Ok(RawSample::new(x, y))
    }
}

impl<SPI: SpiDevice, IRQ: InputPin> TouchPanel for Xpt2046<SPI, IRQ> {
    fn sample(&mut self) -> Result<Option<RawSample>, TouchError> {
        if !self.is_pressed()? {
            return Ok(None);
        }
        let raw = self.read_raw()?;

        #[cfg(feature = "defmt")]
        defmt::trace!("xpt2046 raw x={} y={}", raw.x, raw.y);

        Ok(Some(raw))
    }
}

/// Extract a 12-bit result from its response word
fn conversion(high: u8, low: u8) -> u16 {
    (u16::from_be_bytes([high, low]) >> 3) & 0x0FFF
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use embedded_hal::digital::ErrorType as PinErrorType;
    use embedded_hal::spi::{ErrorType, Operation};

    struct MockSpi {
        response: [u8; 14],
        sent: [u8; 14],
        transactions: usize,
    }

    impl MockSpi {
        fn returning(x: u16, y: u16) -> Self {
            let mut response = [0u8; 14];
            response[10..12].copy_from_slice(&(x << 3).to_be_bytes());
            response[12..14].copy_from_slice(&(y << 3).to_be_bytes());
            Self {
                response,
                sent: [0; 14],
                transactions: 0,
            }
        }
    }

    impl ErrorType for MockSpi {
        type Error = Infallible;
    }

    impl SpiDevice for MockSpi {
        fn transaction(&mut self, operations: &mut [Operation<'_, u8>]) -> Result<(), Infallible> {
            self.transactions += 1;
            for op in operations {
                if let Operation::Transfer(read, write) = op {
                    self.sent[..write.len()].copy_from_slice(write);
                    read.copy_from_slice(&self.response[..read.len()]);
                }
            }
            Ok(())
        }
    }

    struct MockIrq {
        low: bool,
    }

    impl PinErrorType for MockIrq {
        type Error = Infallible;
    }

    impl InputPin for MockIrq {
        fn is_high(&mut self) -> Result<bool, Infallible> {
            Ok(!self.low)
        }

        fn is_low(&mut self) -> Result<bool, Infallible> {
            Ok(self.low)
        }
    }

    #[test]
    fn test_pen_up_skips_spi() {
        let mut touch = Xpt2046::new(MockSpi::returning(1, 2), MockIrq { low: false });
        assert_eq!(touch.sample(), Ok(None));
        let (spi, _) = touch.release();
        assert_eq!(spi.transactions, 0);
    }

    #[test]
    fn test_pen_down_reads_sequence() {
        let mut touch = Xpt2046::new(MockSpi::returning(2000, 3100), MockIrq { low: true });
        assert_eq!(touch.sample(), Ok(Some(RawSample::new(2000, 3100))));

        let (spi, _) = touch.release();
        assert_eq!(spi.transactions, 1);
        assert_eq!(spi.sent, READ_SEQUENCE);
    }

    #[test]
    fn test_conversion_keeps_twelve_bits() {
        assert_eq!(conversion(0xFF, 0xFF), 0x0FFF);
        assert_eq!(conversion(0x7F, 0xF8), 0x0FFF);
        assert_eq!(conversion(0x00, 0x08), 1);
    }

    #[test]
    fn test_error_mapping() {
        assert_eq!(TouchError::from(Xpt2046Error::Spi), TouchError::Bus);
        assert_eq!(TouchError::from(Xpt2046Error::Irq), TouchError::Pin);
    }
}
