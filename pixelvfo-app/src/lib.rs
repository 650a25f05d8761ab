//! PixelVFO application
//!
//! Ties the navigation engine to the VFO: tuning state, preset slots, the
//! menu tree and the main frequency screen. Board code supplies the
//! renderer, the event source and the storage device, then calls
//! [`App::run`].
//!
//! ```ignore
//! let config = load_config(None)?;
//! let layout = config.layout()?;
//! let menus = build_menus(usize::from(config.slots.count))?;
//! let mut ui = Ui::new(display, &EVENTS, layout);
//! let mut app = App::new(&menus, Vfo::new(&config, eeprom)?, &ui);
//! app.run(&mut ui)?;
//! ```

#![no_std]
#![deny(unsafe_code)]

pub mod actions;
pub mod app;
pub mod config;
pub mod menus;
pub mod screen;
pub mod vfo;

pub use app::App;
pub use config::{load_config, parse_config, ConfigParseError, SlotConfig, TuningConfig, VfoConfig};
pub use menus::{build_menus, VfoMenus};
pub use vfo::Vfo;
