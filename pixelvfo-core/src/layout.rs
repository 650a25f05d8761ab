//! Screen geometry for menus and dialogs
//!
//! Turns [`UiConfig`] into the hotspot regions the navigator and dialogs
//! hit-test against. Renderers get logical row indices only; the pixel
//! layout here is what touch input is matched to.

use crate::config::UiConfig;
use crate::error::{ConfigError, LayoutFault};
use crate::hotspot::Region;

/// Largest supported page size
pub const MAX_PAGE_SIZE: usize = 8;

/// Resolved menu and dialog geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Layout {
    pub width: i32,
    pub height: i32,
    pub header_height: i32,
    pub row_height: i32,
    pub page_size: usize,
    pub scroll_step: usize,
    pub scroll_width: i32,
    pub back_width: i32,
    pub back_height: i32,
    pub dialog: Region,
    pub button_width: i32,
    pub button_height: i32,
}

impl Default for Layout {
    fn default() -> Self {
        Self::from_config(&UiConfig::default())
    }
}

impl Layout {
    /// Build a layout without checking it
    pub fn from_config(config: &UiConfig) -> Self {
        Self {
            width: i32::from(config.screen_width),
            height: i32::from(config.screen_height),
            header_height: i32::from(config.header_height),
            row_height: i32::from(config.row_height),
            page_size: usize::from(config.page_size),
            scroll_step: usize::from(config.scroll_step),
            scroll_width: i32::from(config.scroll_width),
            back_width: i32::from(config.back_width),
            back_height: i32::from(config.back_height),
            dialog: Region::new(
                i32::from(config.dialog_x),
                i32::from(config.dialog_y),
                i32::from(config.dialog_width),
                i32::from(config.dialog_height),
            ),
            button_width: i32::from(config.button_width),
            button_height: i32::from(config.button_height),
        }
    }

    /// Build and validate a layout
    pub fn new(config: &UiConfig) -> Result<Self, ConfigError> {
        let layout = Self::from_config(config);
        layout.validate()?;
        Ok(layout)
    }

    pub fn screen(&self) -> Region {
        Region::new(0, 0, self.width, self.height)
    }

    pub fn validate(&self) -> Result<(), LayoutFault> {
        if self.page_size == 0 || self.page_size > MAX_PAGE_SIZE {
            return Err(LayoutFault::PageSize);
        }
        if self.scroll_step == 0 {
            return Err(LayoutFault::ScrollStep);
        }
        if self.row_height <= 0 || self.rows_bottom() > self.height {
            return Err(LayoutFault::RowsOverflow);
        }
        if self.scroll_width <= 0 || self.scroll_width >= self.width {
            return Err(LayoutFault::ScrollColumn);
        }

        let screen = self.screen();
        let back = self.back_region();
        if back.w <= 0 || back.h <= 0 || back.x < 0 || back.h > self.header_height {
            return Err(LayoutFault::BackButton);
        }

        let ok = self.ok_region();
        let cancel = self.cancel_region();
        let buttons_fit = self.dialog.encloses(&ok) && self.dialog.encloses(&cancel);
        if !screen.encloses(&self.dialog) || !buttons_fit || ok.contains(cancel.x, cancel.y) {
            return Err(LayoutFault::Dialog);
        }
        Ok(())
    }

    fn rows_bottom(&self) -> i32 {
        self.header_height + self.row_height * self.page_size as i32
    }

    /// Touch region of visible item row `row`
    pub fn item_region(&self, row: usize) -> Region {
        Region::new(
            0,
            self.header_height + self.row_height * row as i32,
            self.width - self.scroll_width,
            self.row_height,
        )
    }

    /// Upper half of the scroll column
    pub fn scroll_up_region(&self) -> Region {
        let span = self.rows_bottom() - self.header_height;
        Region::new(
            self.width - self.scroll_width,
            self.header_height,
            self.scroll_width,
            span / 2,
        )
    }

    /// Lower half of the scroll column
    pub fn scroll_down_region(&self) -> Region {
        let up = self.scroll_up_region();
        Region::new(up.x, up.bottom(), up.w, self.rows_bottom() - up.bottom())
    }

    /// Back button, vertically centred in the title bar
    pub fn back_region(&self) -> Region {
        Region::new(
            self.width - self.back_width - 1,
            (self.header_height - self.back_height) / 2,
            self.back_width,
            self.back_height,
        )
    }

    /// OK button in the dialog's bottom-right corner
    pub fn ok_region(&self) -> Region {
        Region::new(
            self.dialog.right() - self.button_width - 4,
            self.dialog.bottom() - self.button_height - 4,
            self.button_width,
            self.button_height,
        )
    }

    /// Cancel button in the dialog's bottom-left corner
    pub fn cancel_region(&self) -> Region {
        Region::new(
            self.dialog.x + 4,
            self.dialog.bottom() - self.button_height - 4,
            self.button_width,
            self.button_height,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_geometry() {
        let layout = Layout::new(&UiConfig::default()).unwrap();
        assert_eq!(layout.item_region(0), Region::new(0, 50, 280, 35));
        assert_eq!(layout.item_region(4), Region::new(0, 190, 280, 35));
        assert_eq!(layout.back_region(), Region::new(239, 7, 80, 35));
        assert_eq!(layout.ok_region(), Region::new(196, 181, 90, 35));
        assert_eq!(layout.cancel_region(), Region::new(34, 181, 90, 35));
    }

    #[test]
    fn test_scroll_column_halves() {
        let layout = Layout::default();
        let up = layout.scroll_up_region();
        let down = layout.scroll_down_region();
        assert_eq!(up, Region::new(280, 50, 40, 87));
        assert_eq!(down.y, up.bottom());
        assert_eq!(down.bottom(), 225);
    }

    #[test]
    fn test_rows_do_not_touch_scroll_column() {
        let layout = Layout::default();
        for row in 0..layout.page_size {
            let item = layout.item_region(row);
            assert_eq!(item.right(), layout.scroll_up_region().x);
        }
    }

    #[test]
    fn test_rejects_bad_geometry() {
        let too_many_rows = UiConfig {
            page_size: 6,
            ..UiConfig::default()
        };
        assert_eq!(
            Layout::new(&too_many_rows),
            Err(ConfigError::InvalidLayout(LayoutFault::RowsOverflow))
        );

        let no_step = UiConfig {
            scroll_step: 0,
            ..UiConfig::default()
        };
        assert_eq!(
            Layout::new(&no_step),
            Err(ConfigError::InvalidLayout(LayoutFault::ScrollStep))
        );

        let tall_back = UiConfig {
            back_height: 60,
            ..UiConfig::default()
        };
        assert_eq!(
            Layout::new(&tall_back),
            Err(ConfigError::InvalidLayout(LayoutFault::BackButton))
        );

        let wide_dialog = UiConfig {
            dialog_width: 300,
            ..UiConfig::default()
        };
        assert_eq!(
            Layout::new(&wide_dialog),
            Err(ConfigError::InvalidLayout(LayoutFault::Dialog))
        );
    }
}
