//! UI input events

/// Kind of touch event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EventKind {
    /// No input available
    #[default]
    None,
    /// Pen touched the screen
    Down,
    /// Pen moved while touching
    Drag,
    /// Pen lifted
    Up,
}

/// A calibrated touch event in screen coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Event {
    pub kind: EventKind,
    pub x: i32,
    pub y: i32,
}

impl Event {
    /// The empty event returned when nothing is queued
    pub const NONE: Event = Event {
        kind: EventKind::None,
        x: 0,
        y: 0,
    };

    pub const fn new(kind: EventKind, x: i32, y: i32) -> Self {
        Self { kind, x, y }
    }

    pub const fn down(x: i32, y: i32) -> Self {
        Self::new(EventKind::Down, x, y)
    }

    pub const fn drag(x: i32, y: i32) -> Self {
        Self::new(EventKind::Drag, x, y)
    }

    pub const fn up(x: i32, y: i32) -> Self {
        Self::new(EventKind::Up, x, y)
    }

    /// Check if this is a real event
    pub fn is_some(&self) -> bool {
        self.kind != EventKind::None
    }

    /// Check if this is a pen-down event
    pub fn is_down(&self) -> bool {
        self.kind == EventKind::Down
    }
}
