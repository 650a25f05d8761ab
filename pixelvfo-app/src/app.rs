//! Application main loop
//!
//! The main frequency screen is the navigator's `Idle` state. Touches go to
//! the main-screen hotspots until the menu button is pressed, then to the
//! navigator until the root menu is closed again.

use core::convert::Infallible;

use heapless::Vec;
use pixelvfo_core::hotspot::handle_touch;
use pixelvfo_core::{
    ConfigError, Dispatch, Event, EventSource, HotSpot, MenuId, Navigator, Renderer, Ui,
};
use pixelvfo_hal::NvStorage;

use crate::menus::VfoMenus;
use crate::screen::{main_hotspots, MAIN_HOTSPOTS};
use crate::vfo::Vfo;

/// VFO state, menus and main screen
pub struct App<'t, S> {
    pub vfo: Vfo<S>,
    nav: Navigator<'t, Vfo<S>>,
    root: MenuId,
    hotspots: Vec<HotSpot<Vfo<S>>, MAIN_HOTSPOTS>,
}

impl<'t, S: NvStorage> App<'t, S> {
    pub fn new<R, E>(menus: &'t VfoMenus<S>, vfo: Vfo<S>, ui: &Ui<R, E>) -> Self
    where
        R: Renderer,
        E: EventSource,
    {
        Self {
            vfo,
            nav: Navigator::new(&menus.tree),
            root: menus.root,
            hotspots: main_hotspots(ui.layout()),
        }
    }

    /// Check if a menu is on screen
    pub fn in_menu(&self) -> bool {
        !self.nav.is_idle()
    }

    pub fn navigator(&self) -> &Navigator<'t, Vfo<S>> {
        &self.nav
    }

    /// Paint the main screen
    pub fn draw<R, E>(&self, ui: &mut Ui<R, E>)
    where
        R: Renderer,
        E: EventSource,
    {
        ui.renderer
            .draw_frequency(self.vfo.frequency(), self.vfo.digit());
    }

    /// Route one event to the navigator or the main screen
    pub fn handle_event<R, E>(&mut self, event: Event, ui: &mut Ui<R, E>) -> Result<(), ConfigError>
    where
        R: Renderer,
        E: EventSource,
    {
        if self.in_menu() {
            if self.nav.handle_event(event, ui, &mut self.vfo)? == Dispatch::Idle {
                #[cfg(feature = "defmt")]
                defmt::debug!("menu closed");
                self.draw(ui);
            }
            return Ok(());
        }

        if !event.is_down() {
            return Ok(());
        }
        if handle_touch(event.x, event.y, &self.hotspots, &mut self.vfo) == Some(true) {
            self.draw(ui);
        }
        if self.vfo.take_menu_request() {
            self.nav.enter(self.root, ui, &mut self.vfo)?;
        }
        Ok(())
    }

    /// Device main loop
    ///
    /// Only returns on a menu configuration error.
    pub fn run<R, E>(&mut self, ui: &mut Ui<R, E>) -> Result<Infallible, ConfigError>
    where
        R: Renderer,
        E: EventSource,
    {
        self.draw(ui);
        ui.flush();
        loop {
            let event = ui.next_event();
            self.handle_event(event, ui)?;
        }
    }
}
