//! Screen buffer types
//!
//! A character-cell screen buffer that the navigation engine draws into.
//! Menus use row 0 for the title bar and the rows below it for items;
//! dialogs overlay the middle of the screen.

use core::fmt::Write;

use heapless::String;
use pixelvfo_core::{DialogButtons, Renderer};

/// Number of character rows (240 px / 30 px cells)
pub const SCREEN_ROWS: usize = 8;

/// Number of character columns (320 px / 12 px cells)
pub const SCREEN_COLS: usize = 26;

/// Maximum characters per line
pub const LINE_LEN: usize = SCREEN_COLS;

/// Item rows shown below the title bar unless configured otherwise
pub const DEFAULT_PAGE_ROWS: usize = 5;

const BACK_LABEL: &str = "[Back]";
const MENU_LABEL: &str = "[Menu]";

/// Dialog box placement
const DIALOG_TOP: usize = 2;
const DIALOG_LEFT: usize = 2;
const DIALOG_INNER: usize = 20;
const DIALOG_TEXT_ROWS: usize = 2;

/// Column of the scroll marks
const SCROLL_COL: usize = SCREEN_COLS - 1;

/// Screen buffer for text-mode displays
///
/// Rendered to hardware through `Screen::present`.
#[derive(Clone)]
pub struct Screen {
    /// Current display content
    lines: [String<LINE_LEN>; SCREEN_ROWS],
    /// Highlight per row (start_col, end_col exclusive)
    highlights: [Option<(u8, u8)>; SCREEN_ROWS],
    /// Item rows below the title bar
    page_rows: usize,
    /// Whether the screen needs to be redrawn
    dirty: bool,
}

impl Default for Screen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen {
    /// Create a new empty screen
    pub fn new() -> Self {
        Self::with_page_rows(DEFAULT_PAGE_ROWS)
    }

    /// Create a screen showing `page_rows` menu items per page
    pub fn with_page_rows(page_rows: usize) -> Self {
        Self {
            lines: core::array::from_fn(|_| String::new()),
            highlights: [None; SCREEN_ROWS],
            page_rows: page_rows.clamp(1, SCREEN_ROWS - 1),
            dirty: true,
        }
    }

    /// Clear the entire screen
    pub fn clear(&mut self) {
        for line in &mut self.lines {
            line.clear();
        }
        self.clear_all_highlights();
    }

    /// Set the content of a specific row
    pub fn set_line(&mut self, row: usize, text: &str) {
        if row < SCREEN_ROWS {
            self.lines[row].clear();
            self.write_at(row, 0, text);
        }
    }

    /// Overwrite part of a row starting at `col`
    ///
    /// The line is padded with spaces up to `col`. Text past the last column
    /// is cut and non-ASCII characters show as `?`.
    pub fn write_at(&mut self, row: usize, col: usize, text: &str) {
        if row >= SCREEN_ROWS || col >= SCREEN_COLS {
            return;
        }

        let mut cells = [b' '; SCREEN_COLS];
        let current = self.lines[row].len();
        cells[..current].copy_from_slice(self.lines[row].as_bytes());

        let mut end = col;
        for (cell, ch) in cells[col..].iter_mut().zip(text.chars()) {
            *cell = if ch.is_ascii() { ch as u8 } else { b'?' };
            end += 1;
        }

        let line = &mut self.lines[row];
        line.clear();
        for &byte in &cells[..end.max(current)] {
            let _ = line.push(char::from(byte));
        }
        self.dirty = true;
    }

    /// Get the content of a specific row
    pub fn get_line(&self, row: usize) -> Option<&str> {
        self.lines.get(row).map(|s| s.as_str())
    }

    /// Set highlight (invert) region for a row
    pub fn set_highlight(&mut self, row: usize, start_col: u8, end_col: u8) {
        if row < SCREEN_ROWS {
            self.highlights[row] = Some((start_col, end_col));
            self.dirty = true;
        }
    }

    /// Clear all highlights
    pub fn clear_all_highlights(&mut self) {
        for highlight in &mut self.highlights {
            *highlight = None;
        }
        self.dirty = true;
    }

    /// Get highlight region for a row
    pub fn get_highlight(&self, row: usize) -> Option<(u8, u8)> {
        self.highlights.get(row).copied().flatten()
    }

    /// Check if screen needs redrawing
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Mark screen as clean (after rendering)
    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }

    /// Get all lines as an iterator
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(|s| s.as_str())
    }

    /// Find the first row containing `needle`
    pub fn find(&self, needle: &str) -> Option<usize> {
        self.lines().position(|line| line.contains(needle))
    }

    /// Get number of rows
    pub const fn rows(&self) -> usize {
        SCREEN_ROWS
    }

    /// Get number of columns
    pub const fn cols(&self) -> usize {
        SCREEN_COLS
    }

    /// Item rows per menu page
    pub fn page_rows(&self) -> usize {
        self.page_rows
    }
}

impl Renderer for Screen {
    fn draw_menu_frame(&mut self, title: &str) {
        self.clear();
        self.write_at(0, 0, title);
    }

    fn draw_item_row(&mut self, row: usize, index: usize, text: &str, indexed: bool) {
        if row >= self.page_rows {
            return;
        }
        // Leave a gap and the scroll column free
        let mut line: String<{ SCREEN_COLS - 2 }> = String::new();
        if indexed {
            let _ = write!(line, "{}. ", index + 1);
        }
        for ch in text.chars() {
            if line.push(ch).is_err() {
                break;
            }
        }
        self.write_at(row + 1, 0, &line);
    }

    fn draw_scroll_indicator(&mut self, can_scroll_up: bool, can_scroll_down: bool) {
        self.write_at(1, SCROLL_COL, if can_scroll_up { "^" } else { " " });
        let last = self.page_rows;
        self.write_at(last, SCROLL_COL, if can_scroll_down { "v" } else { " " });
    }

    fn draw_back_button(&mut self) {
        self.write_at(0, SCREEN_COLS - BACK_LABEL.len(), BACK_LABEL);
    }

    fn draw_dialog(&mut self, message: &str, buttons: DialogButtons) {
        let mut border: String<{ DIALOG_INNER + 2 }> = String::new();
        let _ = border.push('+');
        for _ in 0..DIALOG_INNER {
            let _ = border.push('-');
        }
        let _ = border.push('+');

        let bottom = DIALOG_TOP + DIALOG_TEXT_ROWS + 2;
        self.write_at(DIALOG_TOP, DIALOG_LEFT, &border);
        self.write_at(bottom, DIALOG_LEFT, &border);

        let mut chars = message.chars();
        for offset in 0..DIALOG_TEXT_ROWS {
            let mut text: String<DIALOG_INNER> = String::new();
            for ch in chars.by_ref().take(DIALOG_INNER) {
                let _ = text.push(ch);
            }
            let mut row: String<{ DIALOG_INNER + 2 }> = String::new();
            let _ = write!(row, "|{:<width$}|", text.as_str(), width = DIALOG_INNER);
            self.write_at(DIALOG_TOP + 1 + offset, DIALOG_LEFT, &row);
        }

        let mut row: String<{ DIALOG_INNER + 2 }> = String::new();
        let _ = match buttons {
            DialogButtons::Ok => write!(row, "|{:>width$}|", "[OK]", width = DIALOG_INNER),
            DialogButtons::OkCancel => write!(
                row,
                "|{:<8}{:>width$}|",
                "[Cancel]",
                "[OK]",
                width = DIALOG_INNER - 8
            ),
        };
        self.write_at(bottom - 1, DIALOG_LEFT, &row);
    }

    fn draw_frequency(&mut self, frequency: i32, digit: u8) {
        self.clear();

        let mut line: String<LINE_LEN> = String::new();
        let _ = write!(line, "{:>8} Hz", frequency);
        self.write_at(0, 0, &line);

        let col = 7u8.saturating_sub(digit.min(7));
        self.set_highlight(0, col, col + 1);

        self.write_at(3, 1, "[ + ]");
        self.write_at(3, 15, "[ - ]");
        self.write_at(SCREEN_ROWS - 1, SCREEN_COLS - MENU_LABEL.len(), MENU_LABEL);
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Screen {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Screen[");
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                defmt::write!(f, ", ");
            }
            defmt::write!(f, "{}", line.as_str());
        }
        defmt::write!(f, "]");
    }
}
