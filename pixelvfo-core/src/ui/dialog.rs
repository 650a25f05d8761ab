//! Synchronous alert and confirm dialogs
//!
//! A dialog draws over the current screen, registers its own button
//! hotspots and blocks in a private event loop until a button is pressed.
//! Touches outside the buttons are ignored.

use heapless::Vec;

use super::Ui;
use crate::hotspot::{handle_touch, HotSpot};
use crate::input::EventSource;
use crate::traits::{DialogButtons, Renderer};

/// Dialog button that closed a dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    Ok,
    Cancel,
}

impl Button {
    const fn arg(self) -> i32 {
        match self {
            Button::Ok => 0,
            Button::Cancel => 1,
        }
    }

    const fn from_arg(arg: i32) -> Option<Self> {
        match arg {
            0 => Some(Button::Ok),
            1 => Some(Button::Cancel),
            _ => None,
        }
    }
}

/// Modal dialogs
pub trait Dialogs {
    /// Show `message` with an OK button and wait for it
    fn alert(&mut self, message: &str);

    /// Show `message` with OK and Cancel; `true` on OK
    fn confirm(&mut self, message: &str) -> bool;
}

fn press(hotspot: &HotSpot<Option<Button>>, pressed: &mut Option<Button>) -> bool {
    *pressed = Button::from_arg(hotspot.arg);
    false
}

impl<R: Renderer, S: EventSource> Ui<R, S> {
    /// Run a dialog until one of its buttons is pressed
    pub fn dialog(&mut self, message: &str, buttons: DialogButtons) -> Button {
        #[cfg(feature = "defmt")]
        defmt::debug!("dialog {}: {}", buttons, message);

        let layout = *self.layout();
        let mut hotspots: Vec<HotSpot<Option<Button>>, 2> = Vec::new();
        let _ = hotspots.push(HotSpot::new(layout.ok_region(), press, Button::Ok.arg()));
        if buttons == DialogButtons::OkCancel {
            let _ = hotspots.push(HotSpot::new(
                layout.cancel_region(),
                press,
                Button::Cancel.arg(),
            ));
        }

        self.renderer.draw_dialog(message, buttons);
        self.flush();

        loop {
            let event = self.next_event();
            if !event.is_down() {
                continue;
            }
            let mut pressed = None;
            handle_touch(event.x, event.y, &hotspots, &mut pressed);
            if let Some(button) = pressed {
                self.flush();
                return button;
            }
        }
    }
}

impl<R: Renderer, S: EventSource> Dialogs for Ui<R, S> {
    fn alert(&mut self, message: &str) {
        self.dialog(message, DialogButtons::Ok);
    }

    fn confirm(&mut self, message: &str) -> bool {
        self.dialog(message, DialogButtons::OkCancel) == Button::Ok
    }
}
