//! Menu items

use core::fmt;

use super::MenuId;
use crate::error::ConfigError;
use crate::ui::ActionContext;

/// Item action: returns `true` when the current menu must be redrawn
pub type ItemAction<C> = fn(&MenuItem<C>, &mut ActionContext<'_, C>) -> bool;

/// What activating an item does
pub enum Target<C> {
    /// Open a child menu
    Submenu(MenuId),
    /// Run an application callback
    Action(ItemAction<C>),
}

impl<C> Clone for Target<C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C> Copy for Target<C> {}

impl<C> fmt::Debug for Target<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Submenu(id) => f.debug_tuple("Submenu").field(id).finish(),
            Target::Action(_) => f.write_str("Action"),
        }
    }
}

/// One selectable menu row
pub struct MenuItem<C> {
    pub title: &'static str,
    pub target: Target<C>,
    /// Opaque argument handed to the action (slot index, step size, ...)
    pub arg: i32,
}

impl<C> MenuItem<C> {
    pub const fn submenu(title: &'static str, menu: MenuId) -> Self {
        Self {
            title,
            target: Target::Submenu(menu),
            arg: 0,
        }
    }

    pub const fn action(title: &'static str, action: ItemAction<C>, arg: i32) -> Self {
        Self {
            title,
            target: Target::Action(action),
            arg,
        }
    }

    /// Build an item from optional parts
    ///
    /// Exactly one of `submenu` and `action` must be given.
    pub fn from_parts(
        title: &'static str,
        submenu: Option<MenuId>,
        action: Option<ItemAction<C>>,
        arg: i32,
    ) -> Result<Self, ConfigError> {
        let target = match (submenu, action) {
            (Some(menu), None) => Target::Submenu(menu),
            (None, Some(action)) => Target::Action(action),
            (None, None) => return Err(ConfigError::EmptyItem),
            (Some(_), Some(_)) => return Err(ConfigError::AmbiguousItem),
        };
        Ok(Self { title, target, arg })
    }

    /// Child menu, if this item opens one
    pub fn submenu_id(&self) -> Option<MenuId> {
        match self.target {
            Target::Submenu(id) => Some(id),
            Target::Action(_) => None,
        }
    }
}

impl<C> Clone for MenuItem<C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C> Copy for MenuItem<C> {}

impl<C> fmt::Debug for MenuItem<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MenuItem")
            .field("title", &self.title)
            .field("target", &self.target)
            .field("arg", &self.arg)
            .finish()
    }
}
