//! Menu definitions
//!
//! Menus are built once at start-up into a [`MenuTree`] and referenced by
//! [`MenuId`]. They carry no navigation state; the scroll offset lives in
//! the navigator's frame for the menu while it is open.

mod item;
mod tree;

pub use item::{ItemAction, MenuItem, Target};
pub use tree::{ItemTitle, Menu, MenuTree, TitleFn, MAX_ITEMS, MAX_MENUS};

/// Index of a menu inside its [`MenuTree`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MenuId(pub u8);
