//! Menu navigation state machine
//!
//! Open menus form an explicit stack of [`Frame`]s processed by one
//! iterative loop. Entering a submenu pushes a frame and its back button
//! pops it; the parent's scroll position survives underneath.

mod navigator;
mod window;

pub use navigator::Navigator;
pub use window::Window;

use crate::menu::MenuId;

/// Deepest supported menu nesting
pub const MAX_DEPTH: usize = 4;

/// One open menu and its scroll offset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Frame {
    pub menu: MenuId,
    /// Index of the first visible item
    pub top: usize,
}

/// Navigator state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum NavState {
    /// No menu open; the application screen owns input
    Idle,
    /// `menu` is on top of a stack `depth` frames deep
    ShowingMenu { menu: MenuId, depth: usize },
}

/// Outcome of one handled event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Dispatch {
    /// Event ignored or nothing was hit
    None,
    /// Scroll offset changed and the menu was redrawn
    Scrolled,
    /// A submenu was entered
    Entered(MenuId),
    /// An item action ran
    Action { redraw: bool },
    /// Returned to the parent menu
    Back,
    /// Left the outermost menu
    Idle,
}
