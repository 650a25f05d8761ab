//! Configuration errors
//!
//! Everything here is a programmer or build-time mistake: a malformed menu
//! tree or impossible screen geometry. Start-up code treats these as fatal.

use crate::menu::MenuId;

/// Errors detected while building or validating the UI configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Menu item has neither a submenu nor an action
    EmptyItem,
    /// Menu item has both a submenu and an action
    AmbiguousItem,
    /// Submenu reference does not name a menu in the tree
    UnknownMenu(MenuId),
    /// Menu tree already holds the maximum number of menus
    TooManyMenus,
    /// Menu already holds the maximum number of items
    TooManyItems,
    /// Menu nesting exceeds the navigation stack (or loops back on itself)
    MenuTooDeep,
    /// Screen geometry cannot host the requested layout
    InvalidLayout(LayoutFault),
}

/// Which part of the layout is impossible
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LayoutFault {
    /// Page size is zero or above the supported maximum
    PageSize,
    /// Scroll step is zero
    ScrollStep,
    /// Item rows run past the bottom of the screen
    RowsOverflow,
    /// Scroll column leaves no room for item rows
    ScrollColumn,
    /// Back button does not fit in the title bar
    BackButton,
    /// Dialog does not fit on the screen
    Dialog,
}

impl From<LayoutFault> for ConfigError {
    fn from(fault: LayoutFault) -> Self {
        ConfigError::InvalidLayout(fault)
    }
}
