//! Main frequency screen hotspots
//!
//! ```text
//! ┌──┬──┬──┬──┬──┬──┬──┬──┐
//! │d7│d6│d5│d4│d3│d2│d1│d0│  frequency bar, one column per digit
//! ├──┴──┴──┴──┼──┴──┴──┴──┤
//! │     +     │     -     │
//! │           │           │
//! ├───────────┴─────┬─────┤
//! │                 │Menu │
//! └─────────────────┴─────┘
//! ```

use heapless::Vec;
use pixelvfo_core::{HotSpot, Layout, Region};
use pixelvfo_hal::NvStorage;

use crate::config::MAX_DIGIT;
use crate::vfo::Vfo;

/// Digit columns, plus, minus, menu
pub const MAIN_HOTSPOTS: usize = MAX_DIGIT as usize + 4;

/// Height of the bottom bar holding the menu button
const MENU_BAR_HEIGHT: i32 = 50;
const MENU_BUTTON_WIDTH: i32 = 100;

fn on_digit<S: NvStorage>(hotspot: &HotSpot<Vfo<S>>, vfo: &mut Vfo<S>) -> bool {
    vfo.select_digit(hotspot.arg as u8)
}

fn on_step<S: NvStorage>(hotspot: &HotSpot<Vfo<S>>, vfo: &mut Vfo<S>) -> bool {
    vfo.step(hotspot.arg > 0)
}

fn on_menu<S: NvStorage>(_: &HotSpot<Vfo<S>>, vfo: &mut Vfo<S>) -> bool {
    vfo.request_menu();
    false
}

/// Region of the column that selects `digit`
pub fn digit_region(layout: &Layout, digit: u8) -> Region {
    let columns = i32::from(MAX_DIGIT) + 1;
    let width = layout.width / columns;
    let column = i32::from(MAX_DIGIT - digit.min(MAX_DIGIT));
    Region::new(column * width, 0, width, layout.header_height)
}

/// Region of the "+" (`up`) or "-" button
pub fn step_region(layout: &Layout, up: bool) -> Region {
    let half = layout.width / 2;
    let height = layout.height - layout.header_height - MENU_BAR_HEIGHT;
    let x = if up { 0 } else { half };
    Region::new(x, layout.header_height, half, height)
}

pub fn menu_region(layout: &Layout) -> Region {
    Region::new(
        layout.width - MENU_BUTTON_WIDTH,
        layout.height - MENU_BAR_HEIGHT,
        MENU_BUTTON_WIDTH,
        MENU_BAR_HEIGHT,
    )
}

/// Hotspots of the main screen
pub fn main_hotspots<S: NvStorage>(layout: &Layout) -> Vec<HotSpot<Vfo<S>>, MAIN_HOTSPOTS> {
    let mut hotspots = Vec::new();
    for digit in (0..=MAX_DIGIT).rev() {
        let _ = hotspots.push(HotSpot::new(
            digit_region(layout, digit),
            on_digit,
            i32::from(digit),
        ));
    }
    let _ = hotspots.push(HotSpot::new(step_region(layout, true), on_step, 1));
    let _ = hotspots.push(HotSpot::new(step_region(layout, false), on_step, -1));
    let _ = hotspots.push(HotSpot::new(menu_region(layout), on_menu, 0));
    hotspots
}
