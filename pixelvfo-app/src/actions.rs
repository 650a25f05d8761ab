//! Menu item actions and title providers
//!
//! Slot items carry the slot index in `arg`; adjustment items carry the
//! signed step.

use core::fmt::Write;

use heapless::String;
use pixelvfo_core::{slot_title, ActionContext, ItemTitle, MenuItem};
use pixelvfo_hal::{NvStorage, StorageError};

use crate::vfo::Vfo;

const WRITE_FAILED: &str = "Storage write failed";
const READ_FAILED: &str = "Storage read failed";

/// Dialog message buffer
type Message = String<32>;

/// Slot index carried by a slot item
///
/// A negative index is a menu construction bug and panics here; indices past
/// the slot table panic in [`SlotStore::address`](pixelvfo_core::SlotStore::address).
fn slot_of<S>(item: &MenuItem<Vfo<S>>) -> usize {
    match usize::try_from(item.arg) {
        Ok(slot) => slot,
        Err(_) => panic!("negative slot index {}", item.arg),
    }
}

/// Report a failed slot write
fn write_failed<S>(ctx: &mut ActionContext<'_, Vfo<S>>, _slot: usize, _err: StorageError) {
    #[cfg(feature = "defmt")]
    defmt::warn!("slot {} write failed: {}", _slot, _err);
    ctx.alert(WRITE_FAILED);
}

fn message(args: core::fmt::Arguments<'_>) -> Message {
    let mut text = Message::new();
    let _ = text.write_fmt(args);
    text
}

/// Store the current frequency in the item's slot
pub fn save_slot<S: NvStorage>(
    item: &MenuItem<Vfo<S>>,
    ctx: &mut ActionContext<'_, Vfo<S>>,
) -> bool {
    let slot = slot_of(item);
    if let Err(err) = ctx.app.save_slot(slot) {
        write_failed(ctx, slot, err);
    }
    true
}

/// Tune to the item's slot
pub fn restore_slot<S: NvStorage>(
    item: &MenuItem<Vfo<S>>,
    ctx: &mut ActionContext<'_, Vfo<S>>,
) -> bool {
    let slot = slot_of(item);
    match ctx.app.restore_slot(slot) {
        Ok(true) => {}
        Ok(false) => ctx.alert(&message(format_args!("Slot {} is empty", slot))),
        Err(_err) => {
            #[cfg(feature = "defmt")]
            defmt::warn!("slot {} read failed: {}", slot, _err);
            ctx.alert(READ_FAILED);
        }
    }
    true
}

/// Clear the item's slot after confirmation
pub fn delete_slot<S: NvStorage>(
    item: &MenuItem<Vfo<S>>,
    ctx: &mut ActionContext<'_, Vfo<S>>,
) -> bool {
    let slot = slot_of(item);
    if !ctx.confirm(&message(format_args!("Delete slot {}?", slot))) {
        return true;
    }
    if let Err(err) = ctx.app.delete_slot(slot) {
        write_failed(ctx, slot, err);
    }
    true
}

/// Step the backlight by `arg` levels
pub fn adjust_brightness<S: NvStorage>(
    item: &MenuItem<Vfo<S>>,
    ctx: &mut ActionContext<'_, Vfo<S>>,
) -> bool {
    ctx.app.adjust_brightness(item.arg)
}

/// Shift the oscillator calibration by `arg` Hz
pub fn calibrate_oscillator<S: NvStorage>(
    item: &MenuItem<Vfo<S>>,
    ctx: &mut ActionContext<'_, Vfo<S>>,
) -> bool {
    ctx.app.adjust_clock_offset(item.arg)
}

/// Factory reset after confirmation
pub fn reset_device<S: NvStorage>(
    _: &MenuItem<Vfo<S>>,
    ctx: &mut ActionContext<'_, Vfo<S>>,
) -> bool {
    if !ctx.confirm("Reset all settings?") {
        return true;
    }

    #[cfg(feature = "defmt")]
    defmt::info!("factory reset");

    if ctx.app.reset().is_err() {
        ctx.alert(WRITE_FAILED);
    }
    true
}

/// `"<slot>: <frequency>Hz"` for slot menus
pub fn slot_item_title<S: NvStorage>(
    item: &MenuItem<Vfo<S>>,
    vfo: &mut Vfo<S>,
) -> Result<ItemTitle, StorageError> {
    let slot = slot_of(item);
    let record = vfo.slot(slot)?;
    Ok(slot_title(slot, &record))
}

/// Static title followed by the current brightness level
pub fn brightness_item_title<S: NvStorage>(
    item: &MenuItem<Vfo<S>>,
    vfo: &mut Vfo<S>,
) -> Result<ItemTitle, StorageError> {
    let mut title = ItemTitle::new();
    let _ = write!(title, "{} ({})", item.title, vfo.brightness());
    Ok(title)
}

/// Signed step followed by the current calibration offset
pub fn calibration_item_title<S: NvStorage>(
    item: &MenuItem<Vfo<S>>,
    vfo: &mut Vfo<S>,
) -> Result<ItemTitle, StorageError> {
    let mut title = ItemTitle::new();
    let _ = write!(title, "{:+} Hz ({:+})", item.arg, vfo.clock_offset());
    Ok(title)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::VfoConfig;
    use pixelvfo_core::Dialogs;
    use pixelvfo_hal::RamStorage;

    type TestVfo = Vfo<RamStorage<256>>;

    /// Answers every confirm with a fixed reply and records messages
    struct Canned {
        reply: bool,
        messages: heapless::Vec<Message, 4>,
    }

    impl Canned {
        fn new(reply: bool) -> Self {
            Self {
                reply,
                messages: heapless::Vec::new(),
            }
        }
    }

    impl Dialogs for Canned {
        fn alert(&mut self, message: &str) {
            let _ = self.messages.push(Message::try_from(message).unwrap());
        }

        fn confirm(&mut self, message: &str) -> bool {
            let _ = self.messages.push(Message::try_from(message).unwrap());
            self.reply
        }
    }

    fn vfo() -> TestVfo {
        Vfo::new(&VfoConfig::default(), RamStorage::erased()).unwrap()
    }

    fn run(
        action: fn(&MenuItem<TestVfo>, &mut ActionContext<'_, TestVfo>) -> bool,
        arg: i32,
        vfo: &mut TestVfo,
        dialogs: &mut Canned,
    ) -> bool {
        let item = MenuItem::action("test", action, arg);
        action(&item, &mut ActionContext::new(vfo, dialogs))
    }

    #[test]
    fn test_restore_empty_slot_alerts() {
        let mut vfo = vfo();
        let mut dialogs = Canned::new(true);
        assert!(run(restore_slot, 6, &mut vfo, &mut dialogs));
        assert_eq!(dialogs.messages[0].as_str(), "Slot 6 is empty");
        assert_eq!(vfo.frequency(), 14_025_000);
    }

    #[test]
    fn test_delete_asks_first() {
        let mut vfo = vfo();
        vfo.save_slot(1).unwrap();

        let mut declined = Canned::new(false);
        run(delete_slot, 1, &mut vfo, &mut declined);
        assert_eq!(declined.messages[0].as_str(), "Delete slot 1?");
        assert!(!vfo.slot(1).unwrap().is_empty());

        let mut accepted = Canned::new(true);
        run(delete_slot, 1, &mut vfo, &mut accepted);
        assert!(vfo.slot(1).unwrap().is_empty());
    }

    #[test]
    fn test_reset_declined_keeps_state() {
        let mut vfo = vfo();
        vfo.set_frequency(7_000_000);
        let mut dialogs = Canned::new(false);
        run(reset_device, 0, &mut vfo, &mut dialogs);
        assert_eq!(dialogs.messages[0].as_str(), "Reset all settings?");
        assert_eq!(vfo.frequency(), 7_000_000);
    }

    #[test]
    fn test_adjustments_report_change() {
        let mut vfo = vfo();
        let mut dialogs = Canned::new(true);
        assert!(run(adjust_brightness, 1, &mut vfo, &mut dialogs));
        assert!(run(adjust_brightness, 1, &mut vfo, &mut dialogs));
        assert!(!run(adjust_brightness, 1, &mut vfo, &mut dialogs));
        assert!(run(calibrate_oscillator, -100, &mut vfo, &mut dialogs));
        assert_eq!(vfo.clock_offset(), -100);
        assert!(dialogs.messages.is_empty());
    }

    #[test]
    #[should_panic(expected = "negative slot index")]
    fn test_negative_slot_panics() {
        let mut vfo = vfo();
        let mut dialogs = Canned::new(true);
        run(save_slot, -1, &mut vfo, &mut dialogs);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_slot_past_table_panics() {
        let mut vfo = vfo();
        let mut dialogs = Canned::new(true);
        run(restore_slot, 10, &mut vfo, &mut dialogs);
    }

    #[test]
    fn test_titles() {
        let mut vfo = vfo();
        vfo.save_slot(4).unwrap();

        let slot: MenuItem<TestVfo> = MenuItem::action("Save", save_slot, 4);
        assert_eq!(
            slot_item_title(&slot, &mut vfo).unwrap().as_str(),
            "4: 14025000Hz"
        );

        let level: MenuItem<TestVfo> = MenuItem::action("Brighter", adjust_brightness, 1);
        assert_eq!(
            brightness_item_title(&level, &mut vfo).unwrap().as_str(),
            "Brighter (8)"
        );

        let step: MenuItem<TestVfo> = MenuItem::action("", calibrate_oscillator, -10);
        assert_eq!(
            calibration_item_title(&step, &mut vfo).unwrap().as_str(),
            "-10 Hz (+0)"
        );
    }
}
