//! UI configuration types
//!
//! Screen geometry and touch calibration. Defaults describe the 320x240
//! ILI9341 panel with an XPT2046 resistive overlay; every field can be
//! overridden from the application's TOML file.

use serde::{Deserialize, Serialize};

/// Screen geometry for menus and dialogs (pixels unless noted)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(default, deny_unknown_fields)]
pub struct UiConfig {
    /// Panel width
    pub screen_width: u16,
    /// Panel height
    pub screen_height: u16,
    /// Height of the title bar (also the frequency bar on the main screen)
    pub header_height: u16,
    /// Height of one menu item row
    pub row_height: u16,
    /// Item rows visible without scrolling
    pub page_size: u8,
    /// Rows moved per scroll-arrow press
    pub scroll_step: u8,
    /// Width of the scroll arrow column at the right edge
    pub scroll_width: u16,
    /// Back button width
    pub back_width: u16,
    /// Back button height
    pub back_height: u16,
    /// Dialog box left edge
    pub dialog_x: u16,
    /// Dialog box top edge
    pub dialog_y: u16,
    /// Dialog box width
    pub dialog_width: u16,
    /// Dialog box height
    pub dialog_height: u16,
    /// Dialog button width
    pub button_width: u16,
    /// Dialog button height
    pub button_height: u16,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            screen_width: 320,
            screen_height: 240,
            header_height: 50,
            row_height: 35,
            page_size: 5,
            scroll_step: 1,
            scroll_width: 40,
            back_width: 80,
            back_height: 35,
            dialog_x: 30,
            dialog_y: 20,
            dialog_width: 260,
            dialog_height: 200,
            button_width: 90,
            button_height: 35,
        }
    }
}

/// Touch calibration and drag filtering
///
/// Raw bounds are the ADC readings at the screen edges; anything outside
/// them is clamped onto the nearest edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(default, deny_unknown_fields)]
pub struct TouchConfig {
    /// Raw X reading at the left edge
    pub raw_min_x: u16,
    /// Raw X reading at the right edge
    pub raw_max_x: u16,
    /// Raw Y reading at the top edge
    pub raw_min_y: u16,
    /// Raw Y reading at the bottom edge
    pub raw_max_y: u16,
    /// Movement (pixels, either axis) needed before a drag event is emitted
    pub move_delta: u16,
}

impl Default for TouchConfig {
    fn default() -> Self {
        Self {
            raw_min_x: 220,
            raw_max_x: 3780,
            raw_min_y: 340,
            raw_max_y: 3850,
            move_delta: 20,
        }
    }
}
