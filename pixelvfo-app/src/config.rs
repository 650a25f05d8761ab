//! Application configuration
//!
//! Loaded from TOML. The default file (`vfo.toml`) is embedded in the
//! binary; boards with a config partition pass its text to
//! [`load_config`] instead. Omitted keys keep their defaults, unknown keys
//! are an error.

use pixelvfo_core::menu::MAX_ITEMS;
use pixelvfo_core::{ConfigError, Layout, TouchConfig, UiConfig};
use serde::Deserialize;

/// The embedded default configuration
pub const DEFAULT_CONFIG: &str = include_str!("../vfo.toml");

/// Highest selectable digit (tens of MHz)
pub const MAX_DIGIT: u8 = 7;

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigParseError {
    /// TOML syntax error, wrong type or unknown key
    Toml,
    /// Screen geometry cannot host the menus
    Ui(ConfigError),
    /// Slot count is zero, too large for one menu, or overruns storage
    Slots,
    /// Frequency, digit or brightness limits are inconsistent
    Tuning,
}

impl From<ConfigError> for ConfigParseError {
    fn from(err: ConfigError) -> Self {
        ConfigParseError::Ui(err)
    }
}

/// Slot table placement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(default, deny_unknown_fields)]
pub struct SlotConfig {
    /// Number of preset slots
    pub count: u8,
    /// Storage address of slot 0
    pub base_address: u32,
}

impl Default for SlotConfig {
    fn default() -> Self {
        Self {
            count: 10,
            base_address: 0,
        }
    }
}

/// Tuning limits and power-on state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(default, deny_unknown_fields)]
pub struct TuningConfig {
    /// Power-on frequency (Hz)
    pub default_frequency: i32,
    /// Lowest tunable frequency (Hz)
    pub min_frequency: i32,
    /// Highest tunable frequency (Hz)
    pub max_frequency: i32,
    /// Power-on selected digit (0 = units)
    pub default_digit: u8,
    /// Power-on backlight level
    pub default_brightness: u8,
    /// Highest backlight level
    pub max_brightness: u8,
    /// Oscillator calibration range (+/- Hz)
    pub max_clock_offset: i32,
}

impl Default for TuningConfig {
    fn default() -> Self {
        Self {
            default_frequency: 14_025_000,
            min_frequency: 1_000,
            max_frequency: 60_000_000,
            default_digit: 3,
            default_brightness: 8,
            max_brightness: 10,
            max_clock_offset: 10_000,
        }
    }
}

/// Complete application configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(default, deny_unknown_fields)]
pub struct VfoConfig {
    pub ui: UiConfig,
    pub touch: TouchConfig,
    pub slots: SlotConfig,
    pub tuning: TuningConfig,
}

impl VfoConfig {
    /// Check value ranges
    pub fn validate(&self) -> Result<(), ConfigParseError> {
        Layout::new(&self.ui)?;

        let count = usize::from(self.slots.count);
        if count == 0 || count > MAX_ITEMS {
            return Err(ConfigParseError::Slots);
        }

        let t = &self.tuning;
        let frequency_ok = t.min_frequency > 0
            && t.min_frequency < t.max_frequency
            && (t.min_frequency..=t.max_frequency).contains(&t.default_frequency);
        let levels_ok = t.max_brightness > 0 && t.default_brightness <= t.max_brightness;
        if !frequency_ok || !levels_ok || t.default_digit > MAX_DIGIT || t.max_clock_offset < 0 {
            return Err(ConfigParseError::Tuning);
        }
        Ok(())
    }

    /// Resolved screen layout
    pub fn layout(&self) -> Result<Layout, ConfigParseError> {
        Ok(Layout::new(&self.ui)?)
    }
}

/// Parse TOML text without validating values
pub fn parse_config(text: &str) -> Result<VfoConfig, ConfigParseError> {
    toml::from_str(text).map_err(|_e| {
        #[cfg(feature = "defmt")]
        defmt::warn!("config TOML rejected: {}", defmt::Display2Format(&_e));
        ConfigParseError::Toml
    })
}

/// Parse and validate a configuration
///
/// `None` loads the embedded default.
pub fn load_config(text: Option<&str>) -> Result<VfoConfig, ConfigParseError> {
    let config = parse_config(text.unwrap_or(DEFAULT_CONFIG))?;
    config.validate()?;

    #[cfg(feature = "defmt")]
    defmt::info!(
        "config: {} slots, {} Hz",
        config.slots.count,
        config.tuning.default_frequency
    );

    Ok(config)
}
