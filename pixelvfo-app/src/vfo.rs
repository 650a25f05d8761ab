//! VFO state
//!
//! Frequency, selected digit, backlight level, oscillator calibration and
//! the preset slot table. Item actions and main-screen hotspots operate on
//! this type; the navigation engine treats it as opaque.

use pixelvfo_core::{SlotRecord, SlotStore};
use pixelvfo_hal::{NvStorage, StorageError};

use crate::config::{ConfigParseError, TuningConfig, VfoConfig, MAX_DIGIT};

/// Step size for `digit` (10^digit Hz)
pub const fn digit_step(digit: u8) -> i32 {
    let mut step = 1i32;
    let mut i = 0;
    while i < digit && i < MAX_DIGIT {
        step *= 10;
        i += 1;
    }
    step
}

/// Live VFO state
pub struct Vfo<S> {
    frequency: i32,
    digit: u8,
    brightness: u8,
    clock_offset: i32,
    tuning: TuningConfig,
    slots: SlotStore<S>,
    menu_requested: bool,
}

impl<S: NvStorage> Vfo<S> {
    /// Create the power-on state over `storage`
    ///
    /// The configuration is validated first, so a band or calibration range
    /// that would break clamping is rejected here.
    pub fn new(config: &VfoConfig, storage: S) -> Result<Self, ConfigParseError> {
        config.validate()?;
        let slots = SlotStore::new(
            storage,
            config.slots.base_address,
            usize::from(config.slots.count),
        );
        if !slots.fits() {
            return Err(ConfigParseError::Slots);
        }
        let tuning = config.tuning;
        Ok(Self {
            frequency: tuning.default_frequency,
            digit: tuning.default_digit,
            brightness: tuning.default_brightness,
            clock_offset: 0,
            tuning,
            slots,
            menu_requested: false,
        })
    }

    pub fn frequency(&self) -> i32 {
        self.frequency
    }

    /// Selected digit, 0 = units
    pub fn digit(&self) -> u8 {
        self.digit
    }

    pub fn brightness(&self) -> u8 {
        self.brightness
    }

    /// Oscillator calibration offset (Hz)
    pub fn clock_offset(&self) -> i32 {
        self.clock_offset
    }

    pub fn tuning(&self) -> &TuningConfig {
        &self.tuning
    }

    /// Tune to `frequency`, clamped to the configured band
    ///
    /// Returns `true` if the frequency changed.
    pub fn set_frequency(&mut self, frequency: i32) -> bool {
        let clamped = frequency.clamp(self.tuning.min_frequency, self.tuning.max_frequency);
        let changed = clamped != self.frequency;
        self.frequency = clamped;
        changed
    }

    /// Select the digit stepped by +/-
    pub fn select_digit(&mut self, digit: u8) -> bool {
        let digit = digit.min(MAX_DIGIT);
        let changed = digit != self.digit;
        self.digit = digit;
        changed
    }

    /// Step the frequency by one unit of the selected digit
    pub fn step(&mut self, up: bool) -> bool {
        let step = digit_step(self.digit);
        let target = if up {
            self.frequency.saturating_add(step)
        } else {
            self.frequency.saturating_sub(step)
        };
        self.set_frequency(target)
    }

    /// Change the backlight level by `delta`, within `0..=max`
    pub fn adjust_brightness(&mut self, delta: i32) -> bool {
        let max = i32::from(self.tuning.max_brightness);
        let level = (i32::from(self.brightness) + delta).clamp(0, max) as u8;
        let changed = level != self.brightness;
        self.brightness = level;
        changed
    }

    /// Change the oscillator calibration by `delta` Hz, within the configured range
    pub fn adjust_clock_offset(&mut self, delta: i32) -> bool {
        let max = self.tuning.max_clock_offset;
        let offset = self.clock_offset.saturating_add(delta).clamp(-max, max);
        let changed = offset != self.clock_offset;
        self.clock_offset = offset;
        changed
    }

    /// Store the current frequency and digit in `slot`
    pub fn save_slot(&mut self, slot: usize) -> Result<(), StorageError> {
        self.slots.put(slot, self.frequency, self.digit)
    }

    /// Tune to the preset in `slot`
    ///
    /// Returns `Ok(false)` and leaves the VFO alone if the slot is empty.
    pub fn restore_slot(&mut self, slot: usize) -> Result<bool, StorageError> {
        let record = self.slots.get(slot)?;
        if record.is_empty() {
            return Ok(false);
        }
        self.set_frequency(record.frequency);
        self.select_digit(record.digit_offset);
        Ok(true)
    }

    pub fn slot(&mut self, slot: usize) -> Result<SlotRecord, StorageError> {
        self.slots.get(slot)
    }

    pub fn delete_slot(&mut self, slot: usize) -> Result<(), StorageError> {
        self.slots.clear(slot)
    }

    /// Back to power-on state with every slot cleared
    pub fn reset(&mut self) -> Result<(), StorageError> {
        self.frequency = self.tuning.default_frequency;
        self.digit = self.tuning.default_digit;
        self.brightness = self.tuning.default_brightness;
        self.clock_offset = 0;
        self.slots.clear_all()
    }

    pub fn slot_count(&self) -> usize {
        self.slots.count()
    }

    pub fn slots(&self) -> &SlotStore<S> {
        &self.slots
    }

    /// Ask the application loop to open the menu
    pub fn request_menu(&mut self) {
        self.menu_requested = true;
    }

    /// Take a pending menu request
    pub fn take_menu_request(&mut self) -> bool {
        core::mem::take(&mut self.menu_requested)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixelvfo_hal::RamStorage;

    fn vfo() -> Vfo<RamStorage<256>> {
        Vfo::new(&VfoConfig::default(), RamStorage::erased()).unwrap()
    }

    #[test]
    fn test_digit_step() {
        assert_eq!(digit_step(0), 1);
        assert_eq!(digit_step(3), 1_000);
        assert_eq!(digit_step(7), 10_000_000);
        assert_eq!(digit_step(200), 10_000_000);
    }

    #[test]
    fn test_step_and_clamp() {
        let mut vfo = vfo();
        assert!(vfo.step(true));
        assert_eq!(vfo.frequency(), 14_026_000);

        vfo.select_digit(7);
        assert!(vfo.step(true));
        assert!(vfo.step(true));
        assert!(vfo.step(true));
        assert!(vfo.step(true));
        assert_eq!(vfo.frequency(), 54_026_000);
        assert!(vfo.step(true));
        assert_eq!(vfo.frequency(), 60_000_000);
        assert!(!vfo.step(true));

        assert!(vfo.set_frequency(0));
        assert_eq!(vfo.frequency(), 1_000);
    }

    #[test]
    fn test_slots() {
        let mut vfo = vfo();
        assert_eq!(vfo.restore_slot(2), Ok(false));

        vfo.save_slot(2).unwrap();
        vfo.select_digit(0);
        vfo.set_frequency(7_000_000);
        assert_eq!(vfo.restore_slot(2), Ok(true));
        assert_eq!(vfo.frequency(), 14_025_000);
        assert_eq!(vfo.digit(), 3);

        vfo.delete_slot(2).unwrap();
        assert!(vfo.slot(2).unwrap().is_empty());
    }

    #[test]
    fn test_reset() {
        let mut vfo = vfo();
        vfo.save_slot(0).unwrap();
        vfo.adjust_brightness(-3);
        vfo.adjust_clock_offset(25);
        vfo.set_frequency(3_500_000);

        vfo.reset().unwrap();
        assert_eq!(vfo.frequency(), 14_025_000);
        assert_eq!(vfo.brightness(), 8);
        assert_eq!(vfo.clock_offset(), 0);
        assert!(vfo.slot(0).unwrap().is_empty());
    }

    #[test]
    fn test_limits() {
        let mut vfo = vfo();
        assert!(vfo.adjust_brightness(5));
        assert_eq!(vfo.brightness(), 10);
        assert!(!vfo.adjust_brightness(1));

        assert!(vfo.adjust_clock_offset(-20_000));
        assert_eq!(vfo.clock_offset(), -10_000);
    }

    #[test]
    fn test_slots_must_fit_storage() {
        let result = Vfo::new(&VfoConfig::default(), RamStorage::<16>::erased());
        assert_eq!(result.err(), Some(ConfigParseError::Slots));
    }

    #[test]
    fn test_rejects_unvalidated_tuning() {
        let inverted = VfoConfig {
            tuning: TuningConfig {
                min_frequency: 60_000_000,
                max_frequency: 1_000,
                ..TuningConfig::default()
            },
            ..VfoConfig::default()
        };
        let result = Vfo::new(&inverted, RamStorage::<256>::erased());
        assert_eq!(result.err(), Some(ConfigParseError::Tuning));

        let negative = VfoConfig {
            tuning: TuningConfig {
                max_clock_offset: -1,
                ..TuningConfig::default()
            },
            ..VfoConfig::default()
        };
        let result = Vfo::new(&negative, RamStorage::<256>::erased());
        assert_eq!(result.err(), Some(ConfigParseError::Tuning));
    }

    #[test]
    fn test_menu_request_is_taken_once() {
        let mut vfo = vfo();
        assert!(!vfo.take_menu_request());
        vfo.request_menu();
        assert!(vfo.take_menu_request());
        assert!(!vfo.take_menu_request());
    }
}
