//! Drawing collaborator for menus and dialogs

/// Buttons shown on a dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DialogButtons {
    /// Alert: single OK button
    Ok,
    /// Confirm: OK and Cancel
    OkCancel,
}

/// Trait for the screen renderer
///
/// Calls carry logical positions only (visible row numbers, item indices).
/// Pixel geometry, fonts and colours are the implementation's business.
/// Drawing cannot fail from the engine's point of view; implementations
/// that talk to a bus buffer the frame and report link errors themselves.
pub trait Renderer {
    /// Clear the screen and draw a menu's title bar
    fn draw_menu_frame(&mut self, title: &str);

    /// Draw one visible item
    ///
    /// - `row`: visible row (0..page size)
    /// - `index`: item index inside the menu
    /// - `indexed`: prefix the text with the item number
    fn draw_item_row(&mut self, row: usize, index: usize, text: &str, indexed: bool);

    /// Show which scroll directions are available
    fn draw_scroll_indicator(&mut self, can_scroll_up: bool, can_scroll_down: bool);

    /// Draw the back button in the title bar
    fn draw_back_button(&mut self);

    /// Draw a modal dialog over the current screen
    fn draw_dialog(&mut self, message: &str, buttons: DialogButtons);

    /// Draw the main frequency screen
    ///
    /// `digit` is the selected decimal digit, 0 = units.
    fn draw_frequency(&mut self, frequency: i32, digit: u8);
}

impl<T: Renderer + ?Sized> Renderer for &mut T {
    fn draw_menu_frame(&mut self, title: &str) {
        (**self).draw_menu_frame(title)
    }

    fn draw_item_row(&mut self, row: usize, index: usize, text: &str, indexed: bool) {
        (**self).draw_item_row(row, index, text, indexed)
    }

    fn draw_scroll_indicator(&mut self, can_scroll_up: bool, can_scroll_down: bool) {
        (**self).draw_scroll_indicator(can_scroll_up, can_scroll_down)
    }

    fn draw_back_button(&mut self) {
        (**self).draw_back_button()
    }

    fn draw_dialog(&mut self, message: &str, buttons: DialogButtons) {
        (**self).draw_dialog(message, buttons)
    }

    fn draw_frequency(&mut self, frequency: i32, digit: u8) {
        (**self).draw_frequency(frequency, digit)
    }
}
