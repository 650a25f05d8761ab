//! The PixelVFO menu tree
//!
//! ```text
//! Menu
//! ├── Slots
//! │   ├── Save     (one item per slot)
//! │   ├── Restore  (one item per slot)
//! │   └── Delete   (one item per slot)
//! ├── Settings
//! │   ├── Brightness
//! │   └── Calibrate
//! └── Reset
//! ```

use pixelvfo_core::menu::{ItemAction, TitleFn};
use pixelvfo_core::{ConfigError, Menu, MenuId, MenuItem, MenuTree};
use pixelvfo_hal::NvStorage;

use crate::actions;
use crate::vfo::Vfo;

/// Calibration steps in Hz, in menu order
const CALIBRATION_STEPS: [i32; 6] = [1, -1, 10, -10, 100, -100];

/// The built tree and its entry point
pub struct VfoMenus<S> {
    pub tree: MenuTree<Vfo<S>>,
    pub root: MenuId,
}

fn slot_menu<S: NvStorage>(
    title: &'static str,
    action: ItemAction<Vfo<S>>,
    slots: usize,
) -> Result<Menu<Vfo<S>>, ConfigError> {
    let titles: TitleFn<Vfo<S>> = actions::slot_item_title;
    let mut menu = Menu::new(title).with_titles(titles);
    for slot in 0..slots {
        menu.push(MenuItem::action(title, action, slot as i32))?;
    }
    Ok(menu)
}

/// Build and validate the menu tree for `slots` preset slots
pub fn build_menus<S: NvStorage>(slots: usize) -> Result<VfoMenus<S>, ConfigError> {
    let mut tree = MenuTree::new();

    let save = tree.add(slot_menu("Save", actions::save_slot, slots)?)?;
    let restore = tree.add(slot_menu("Restore", actions::restore_slot, slots)?)?;
    let delete = tree.add(slot_menu("Delete", actions::delete_slot, slots)?)?;
    let slots_menu = tree.add(
        Menu::new("Slots")
            .indexed()
            .item(MenuItem::submenu("Save", save))?
            .item(MenuItem::submenu("Restore", restore))?
            .item(MenuItem::submenu("Delete", delete))?,
    )?;

    let brightness_titles: TitleFn<Vfo<S>> = actions::brightness_item_title;
    let brightness = tree.add(
        Menu::new("Brightness")
            .with_titles(brightness_titles)
            .item(MenuItem::action("Brighter", actions::adjust_brightness, 1))?
            .item(MenuItem::action("Dimmer", actions::adjust_brightness, -1))?,
    )?;

    let calibration_titles: TitleFn<Vfo<S>> = actions::calibration_item_title;
    let mut calibrate = Menu::new("Calibrate").with_titles(calibration_titles);
    for step in CALIBRATION_STEPS {
        calibrate.push(MenuItem::action("Step", actions::calibrate_oscillator, step))?;
    }
    let calibrate = tree.add(calibrate)?;

    let settings = tree.add(
        Menu::new("Settings")
            .indexed()
            .item(MenuItem::submenu("Brightness", brightness))?
            .item(MenuItem::submenu("Calibrate", calibrate))?,
    )?;

    let root = tree.add(
        Menu::new("Menu")
            .indexed()
            .item(MenuItem::submenu("Slots", slots_menu))?
            .item(MenuItem::submenu("Settings", settings))?
            .item(MenuItem::action("Reset", actions::reset_device, 0))?,
    )?;

    tree.validate(root)?;
    Ok(VfoMenus { tree, root })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixelvfo_hal::RamStorage;

    type Storage = RamStorage<256>;

    #[test]
    fn test_tree_shape() {
        let menus = build_menus::<Storage>(10).unwrap();
        let root = menus.tree.menu(menus.root).unwrap();
        assert_eq!(root.title, "Menu");
        assert_eq!(root.len(), 3);
        assert!(root.indexed);

        let slots = root.items()[0].submenu_id().unwrap();
        let slots = menus.tree.menu(slots).unwrap();
        for item in slots.items() {
            let id = item.submenu_id().unwrap();
            let menu = menus.tree.menu(id).unwrap();
            assert_eq!(menu.len(), 10);
            assert!(menu.has_dynamic_titles());
            assert_eq!(menu.items()[7].arg, 7);
        }
        assert!(root.items()[2].submenu_id().is_none());
    }

    #[test]
    fn test_slot_count_limited_by_menu_capacity() {
        assert_eq!(
            build_menus::<Storage>(17).err(),
            Some(ConfigError::TooManyItems)
        );
    }
}
