//! Test doubles for the renderer and the event source

use heapless::{Deque, Vec};

use crate::input::{Event, EventSource};
use crate::menu::ItemTitle;
use crate::traits::{DialogButtons, Renderer};

fn clip(s: &str) -> ItemTitle {
    let mut out = ItemTitle::new();
    for ch in s.chars() {
        if out.push(ch).is_err() {
            break;
        }
    }
    out
}

/// Renderer that remembers what the last menu frame looked like
#[derive(Debug, Default)]
pub struct Recorder {
    pub frames: usize,
    pub title: ItemTitle,
    /// `(index, text, indexed)` for every row drawn since the last frame
    pub rows: Vec<(usize, ItemTitle, bool), 8>,
    pub scroll: (bool, bool),
    pub back_buttons: usize,
    pub dialogs: Vec<(ItemTitle, DialogButtons), 8>,
    pub frequency: Option<(i32, u8)>,
}

impl Recorder {
    /// Item indices currently on screen
    pub fn visible(&self) -> Vec<usize, 8> {
        self.rows.iter().map(|(index, _, _)| *index).collect()
    }
}

impl Renderer for Recorder {
    fn draw_menu_frame(&mut self, title: &str) {
        self.frames += 1;
        self.title = clip(title);
        self.rows.clear();
    }

    fn draw_item_row(&mut self, _row: usize, index: usize, text: &str, indexed: bool) {
        let _ = self.rows.push((index, clip(text), indexed));
    }

    fn draw_scroll_indicator(&mut self, can_scroll_up: bool, can_scroll_down: bool) {
        self.scroll = (can_scroll_up, can_scroll_down);
    }

    fn draw_back_button(&mut self) {
        self.back_buttons += 1;
    }

    fn draw_dialog(&mut self, message: &str, buttons: DialogButtons) {
        let _ = self.dialogs.push((clip(message), buttons));
    }

    fn draw_frequency(&mut self, frequency: i32, digit: u8) {
        self.frequency = Some((frequency, digit));
    }
}

/// Scripted touches; panics when a loop asks for more than were scripted
///
/// `flush` is counted but does not discard: scripted events model touches
/// that arrive after the screen changed.
pub struct Script {
    events: Deque<Event, 32>,
    pub flushes: usize,
}

impl Script {
    pub fn new(events: &[Event]) -> Self {
        let mut queue = Deque::new();
        for event in events {
            let _ = queue.push_back(*event);
        }
        Self {
            events: queue,
            flushes: 0,
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.events.is_empty()
    }
}

impl EventSource for Script {
    fn poll(&mut self) -> Event {
        match self.events.pop_front() {
            Some(event) => event,
            None => panic!("input script exhausted"),
        }
    }

    fn flush(&mut self) {
        self.flushes += 1;
    }
}
