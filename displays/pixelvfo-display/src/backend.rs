//! Display backend trait
//!
//! Defines the interface for character displays.

use crate::screen::Screen;

/// Display backend errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Communication error with display
    Communication,
    /// Invalid coordinates or dimensions
    InvalidCoordinates,
    /// Display not initialized
    NotInitialized,
}

/// Display backend trait
///
/// Provides a hardware-agnostic interface for rendering text cells.
/// Implementations handle fonts, colours and the bus.
pub trait DisplayBackend {
    /// Clear the entire display
    fn clear(&mut self) -> Result<(), DisplayError>;

    /// Draw text at the specified row and column
    ///
    /// - `row`: Row number (0-based)
    /// - `col`: Column number in characters (0-based)
    /// - `text`: Text to display
    fn draw_text(&mut self, row: u8, col: u8, text: &str) -> Result<(), DisplayError>;

    /// Invert a region on the specified row (for selection highlighting)
    ///
    /// - `row`: Row number
    /// - `start_col`: Starting column
    /// - `end_col`: Ending column (exclusive)
    fn invert_region(&mut self, row: u8, start_col: u8, end_col: u8) -> Result<(), DisplayError>;

    /// Flush buffered content to the display
    fn flush(&mut self) -> Result<(), DisplayError>;

    /// Get the display dimensions
    ///
    /// Returns (columns, rows) in character units
    fn dimensions(&self) -> (u8, u8);
}

impl Screen {
    /// Push the buffer to `backend` if anything changed since the last call
    ///
    /// Returns `Ok(false)` when the screen was already clean.
    pub fn present<B: DisplayBackend>(&mut self, backend: &mut B) -> Result<bool, DisplayError> {
        if !self.is_dirty() {
            return Ok(false);
        }

        let (cols, rows) = backend.dimensions();
        if usize::from(cols) < self.cols() || usize::from(rows) < self.rows() {
            return Err(DisplayError::InvalidCoordinates);
        }

        backend.clear()?;
        for (row, line) in self.lines().enumerate() {
            let line = line.trim_end();
            if !line.is_empty() {
                backend.draw_text(row as u8, 0, line)?;
            }
            if let Some((start, end)) = self.get_highlight(row) {
                backend.invert_region(row as u8, start, end)?;
            }
        }
        backend.flush()?;

        self.mark_clean();
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use heapless::{String, Vec};
    use pixelvfo_core::Renderer;

    #[derive(Debug, PartialEq)]
    enum Call {
        Clear,
        Text(u8, String<32>),
        Invert(u8, u8, u8),
        Flush,
    }

    struct Recording {
        calls: Vec<Call, 32>,
        size: (u8, u8),
    }

    impl Recording {
        fn new() -> Self {
            Self {
                calls: Vec::new(),
                size: (26, 8),
            }
        }
    }

    impl DisplayBackend for Recording {
        fn clear(&mut self) -> Result<(), DisplayError> {
            let _ = self.calls.push(Call::Clear);
            Ok(())
        }

        fn draw_text(&mut self, row: u8, _col: u8, text: &str) -> Result<(), DisplayError> {
            let mut line = String::new();
            let _ = line.push_str(text);
            let _ = self.calls.push(Call::Text(row, line));
            Ok(())
        }

        fn invert_region(&mut self, row: u8, start: u8, end: u8) -> Result<(), DisplayError> {
            let _ = self.calls.push(Call::Invert(row, start, end));
            Ok(())
        }

        fn flush(&mut self) -> Result<(), DisplayError> {
            let _ = self.calls.push(Call::Flush);
            Ok(())
        }

        fn dimensions(&self) -> (u8, u8) {
            self.size
        }
    }

    #[test]
    fn test_present_frequency_screen() {
        let mut screen = Screen::new();
        screen.draw_frequency(7_074_000, 3);

        let mut backend = Recording::new();
        assert_eq!(screen.present(&mut backend), Ok(true));

        assert_eq!(backend.calls[0], Call::Clear);
        assert!(backend
            .calls
            .iter()
            .any(|c| matches!(c, Call::Text(0, text) if text.as_str() == " 7074000 Hz")));
        assert!(backend.calls.contains(&Call::Invert(0, 4, 5)));
        assert_eq!(backend.calls.last(), Some(&Call::Flush));

        // Nothing changed: no second transfer
        assert_eq!(screen.present(&mut backend), Ok(false));
    }

    #[test]
    fn test_present_rejects_small_display() {
        let mut screen = Screen::new();
        let mut backend = Recording::new();
        backend.size = (20, 4);
        assert_eq!(
            screen.present(&mut backend),
            Err(DisplayError::InvalidCoordinates)
        );
        assert!(screen.is_dirty());
    }
}
