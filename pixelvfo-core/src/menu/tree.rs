//! Menus and the menu tree arena

use core::fmt;

use heapless::Vec;
use pixelvfo_hal::StorageError;

use super::{MenuId, MenuItem};
use crate::error::ConfigError;
use crate::nav::MAX_DEPTH;

/// Most items a single menu can hold
pub const MAX_ITEMS: usize = 16;

/// Most menus a tree can hold
pub const MAX_MENUS: usize = 16;

/// Rendered item title
pub type ItemTitle = heapless::String<24>;

/// Dynamic title provider, called for every item right before drawing
pub type TitleFn<C> = fn(&MenuItem<C>, &mut C) -> Result<ItemTitle, StorageError>;

/// A titled list of items
pub struct Menu<C> {
    pub title: &'static str,
    /// Items show a numeric prefix
    pub indexed: bool,
    titles: Option<TitleFn<C>>,
    items: Vec<MenuItem<C>, MAX_ITEMS>,
}

impl<C> Menu<C> {
    pub const fn new(title: &'static str) -> Self {
        Self {
            title,
            indexed: false,
            titles: None,
            items: Vec::new(),
        }
    }

    /// Show a numeric prefix before each item
    pub fn indexed(mut self) -> Self {
        self.indexed = true;
        self
    }

    /// Regenerate item titles through `titles` every time the menu is drawn
    pub fn with_titles(mut self, titles: TitleFn<C>) -> Self {
        self.titles = Some(titles);
        self
    }

    /// Append an item (builder style)
    pub fn item(mut self, item: MenuItem<C>) -> Result<Self, ConfigError> {
        self.push(item)?;
        Ok(self)
    }

    pub fn push(&mut self, item: MenuItem<C>) -> Result<(), ConfigError> {
        self.items.push(item).map_err(|_| ConfigError::TooManyItems)
    }

    pub fn items(&self) -> &[MenuItem<C>] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn has_dynamic_titles(&self) -> bool {
        self.titles.is_some()
    }

    /// Title for the item at `index`
    ///
    /// Dynamic menus go through their provider; static items return their
    /// declared title.
    pub fn title_of(&self, index: usize, app: &mut C) -> Result<ItemTitle, StorageError> {
        let Some(item) = self.items.get(index) else {
            return Ok(ItemTitle::new());
        };
        match self.titles {
            Some(provider) => provider(item, app),
            None => {
                let mut title = ItemTitle::new();
                // Over-long static titles are cut at the first char that does not fit
                for ch in item.title.chars() {
                    if title.push(ch).is_err() {
                        break;
                    }
                }
                Ok(title)
            }
        }
    }
}

impl<C> fmt::Debug for Menu<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Menu")
            .field("title", &self.title)
            .field("indexed", &self.indexed)
            .field("items", &self.items.len())
            .finish()
    }
}

/// Arena holding every menu of the application
pub struct MenuTree<C> {
    menus: Vec<Menu<C>, MAX_MENUS>,
}

impl<C> Default for MenuTree<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> MenuTree<C> {
    pub const fn new() -> Self {
        Self { menus: Vec::new() }
    }

    /// Add a menu and return its id
    ///
    /// Build leaves first so parents can reference their ids.
    pub fn add(&mut self, menu: Menu<C>) -> Result<MenuId, ConfigError> {
        let id = MenuId(self.menus.len() as u8);
        self.menus
            .push(menu)
            .map_err(|_| ConfigError::TooManyMenus)?;
        Ok(id)
    }

    pub fn get(&self, id: MenuId) -> Option<&Menu<C>> {
        self.menus.get(usize::from(id.0))
    }

    pub fn menu(&self, id: MenuId) -> Result<&Menu<C>, ConfigError> {
        self.get(id).ok_or(ConfigError::UnknownMenu(id))
    }

    pub fn len(&self) -> usize {
        self.menus.len()
    }

    pub fn is_empty(&self) -> bool {
        self.menus.is_empty()
    }

    /// Check every menu reachable from `root`
    ///
    /// Rejects references to missing menus and any path deeper than the
    /// navigation stack. A cycle is an infinitely deep path and is reported
    /// as [`ConfigError::MenuTooDeep`].
    pub fn validate(&self, root: MenuId) -> Result<(), ConfigError> {
        self.menu(root)?;

        // At most MAX_ITEMS pending siblings per level
        let mut pending: Vec<(MenuId, usize), { MAX_ITEMS * MAX_DEPTH }> = Vec::new();
        pending
            .push((root, 1))
            .map_err(|_| ConfigError::MenuTooDeep)?;

        while let Some((id, depth)) = pending.pop() {
            let menu = self.menu(id)?;
            for child in menu.items.iter().filter_map(MenuItem::submenu_id) {
                self.menu(child)?;
                if depth + 1 > MAX_DEPTH {
                    return Err(ConfigError::MenuTooDeep);
                }
                pending
                    .push((child, depth + 1))
                    .map_err(|_| ConfigError::MenuTooDeep)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::ActionContext;

    fn noop(_: &MenuItem<u32>, _: &mut ActionContext<'_, u32>) -> bool {
        false
    }

    fn counted(item: &MenuItem<u32>, calls: &mut u32) -> Result<ItemTitle, StorageError> {
        *calls += 1;
        let mut title = ItemTitle::new();
        let _ = core::fmt::Write::write_fmt(&mut title, format_args!("#{}", item.arg));
        Ok(title)
    }

    fn chain(tree: &mut MenuTree<u32>, levels: usize) -> MenuId {
        let mut id = tree
            .add(Menu::new("leaf").item(MenuItem::action("a", noop, 0)).unwrap())
            .unwrap();
        for _ in 1..levels {
            let menu = Menu::new("level").item(MenuItem::submenu("down", id)).unwrap();
            id = tree.add(menu).unwrap();
        }
        id
    }

    #[test]
    fn test_depth_limit() {
        let mut tree = MenuTree::new();
        let root = chain(&mut tree, MAX_DEPTH);
        assert_eq!(tree.validate(root), Ok(()));

        let mut tree = MenuTree::new();
        let root = chain(&mut tree, MAX_DEPTH + 1);
        assert_eq!(tree.validate(root), Err(ConfigError::MenuTooDeep));
    }

    #[test]
    fn test_cycle_rejected() {
        let mut tree: MenuTree<u32> = MenuTree::new();
        // Menu 0 points at itself
        let root = tree
            .add(Menu::new("loop").item(MenuItem::submenu("again", MenuId(0))).unwrap())
            .unwrap();
        assert_eq!(tree.validate(root), Err(ConfigError::MenuTooDeep));
    }

    #[test]
    fn test_unknown_submenu() {
        let mut tree: MenuTree<u32> = MenuTree::new();
        let root = tree
            .add(Menu::new("root").item(MenuItem::submenu("gone", MenuId(9))).unwrap())
            .unwrap();
        assert_eq!(tree.validate(root), Err(ConfigError::UnknownMenu(MenuId(9))));
        assert_eq!(
            tree.validate(MenuId(3)),
            Err(ConfigError::UnknownMenu(MenuId(3)))
        );
    }

    #[test]
    fn test_capacity_limits() {
        let mut menu: Menu<u32> = Menu::new("full");
        for i in 0..MAX_ITEMS {
            menu.push(MenuItem::action("a", noop, i as i32)).unwrap();
        }
        assert_eq!(
            menu.push(MenuItem::action("a", noop, 0)),
            Err(ConfigError::TooManyItems)
        );

        let mut tree: MenuTree<u32> = MenuTree::new();
        for _ in 0..MAX_MENUS {
            tree.add(Menu::new("m")).unwrap();
        }
        assert_eq!(tree.add(Menu::new("m")), Err(ConfigError::TooManyMenus));
    }

    #[test]
    fn test_dynamic_titles() {
        let menu: Menu<u32> = Menu::new("slots")
            .with_titles(counted)
            .item(MenuItem::action("unused", noop, 4))
            .unwrap();
        let mut calls = 0;
        assert_eq!(menu.title_of(0, &mut calls).unwrap().as_str(), "#4");
        assert_eq!(menu.title_of(0, &mut calls).unwrap().as_str(), "#4");
        assert_eq!(calls, 2);
    }

    #[test]
    fn test_static_title_truncated() {
        let menu: Menu<u32> = Menu::new("m")
            .item(MenuItem::action("a title much longer than the row", noop, 0))
            .unwrap();
        let title = menu.title_of(0, &mut 0).unwrap();
        assert_eq!(title.len(), 24);
        assert!(title.starts_with("a title much"));
    }
}
