//! The menu navigator

use heapless::Vec;

use super::{Dispatch, Frame, NavState, Window, MAX_DEPTH};
use crate::error::ConfigError;
use crate::hotspot::{handle_touch, HotSpot};
use crate::input::{Event, EventSource};
use crate::layout::{Layout, MAX_PAGE_SIZE};
use crate::menu::{ItemTitle, Menu, MenuId, MenuTree, Target, MAX_ITEMS};
use crate::traits::Renderer;
use crate::ui::{ActionContext, Dialogs, Ui};

/// Shown when a dynamic title provider fails to read storage
const STORAGE_ALERT: &str = "Storage read failed";

/// Back button, two scroll arrows, one row per visible item
const MAX_HOTSPOTS: usize = 3 + MAX_PAGE_SIZE;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Hit {
    Back,
    ScrollUp,
    ScrollDown,
    Row(usize),
}

/// Hotspot context: records which control was touched
#[derive(Default)]
struct Cursor {
    hit: Option<Hit>,
}

fn on_back(_: &HotSpot<Cursor>, cursor: &mut Cursor) -> bool {
    cursor.hit = Some(Hit::Back);
    false
}

fn on_scroll_up(_: &HotSpot<Cursor>, cursor: &mut Cursor) -> bool {
    cursor.hit = Some(Hit::ScrollUp);
    false
}

fn on_scroll_down(_: &HotSpot<Cursor>, cursor: &mut Cursor) -> bool {
    cursor.hit = Some(Hit::ScrollDown);
    false
}

fn on_row(hotspot: &HotSpot<Cursor>, cursor: &mut Cursor) -> bool {
    cursor.hit = usize::try_from(hotspot.arg).ok().map(Hit::Row);
    false
}

/// Hotspots for one menu page in priority order
///
/// Scroll arrows and the back button come before the item rows, so they
/// win wherever a custom layout makes them overlap a row.
fn page_hotspots(layout: &Layout, visible: usize) -> Vec<HotSpot<Cursor>, MAX_HOTSPOTS> {
    let mut hotspots = Vec::new();
    let system = [
        HotSpot::new(layout.scroll_up_region(), on_scroll_up, 0),
        HotSpot::new(layout.scroll_down_region(), on_scroll_down, 0),
        HotSpot::new(layout.back_region(), on_back, 0),
    ];
    for hotspot in system {
        let _ = hotspots.push(hotspot);
    }
    for row in 0..visible.min(MAX_PAGE_SIZE) {
        let _ = hotspots.push(HotSpot::new(layout.item_region(row), on_row, row as i32));
    }
    hotspots
}

/// Menu state machine over a [`MenuTree`]
///
/// `C` is the application state handed to item actions and title
/// providers.
pub struct Navigator<'t, C> {
    tree: &'t MenuTree<C>,
    stack: Vec<Frame, MAX_DEPTH>,
}

impl<'t, C> Navigator<'t, C> {
    pub fn new(tree: &'t MenuTree<C>) -> Self {
        Self {
            tree,
            stack: Vec::new(),
        }
    }

    pub fn tree(&self) -> &'t MenuTree<C> {
        self.tree
    }

    pub fn state(&self) -> NavState {
        match self.stack.last() {
            Some(frame) => NavState::ShowingMenu {
                menu: frame.menu,
                depth: self.stack.len(),
            },
            None => NavState::Idle,
        }
    }

    pub fn is_idle(&self) -> bool {
        self.stack.is_empty()
    }

    /// Number of open menus
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Menu on top of the stack
    pub fn current(&self) -> Option<MenuId> {
        self.stack.last().map(|frame| frame.menu)
    }

    /// Scroll offset of the menu on top of the stack
    pub fn top(&self) -> Option<usize> {
        self.stack.last().map(|frame| frame.top)
    }

    /// Open `menu` over the current one
    ///
    /// The new frame starts scrolled to the top. Input queued before the
    /// transition is discarded.
    pub fn enter<R, S>(
        &mut self,
        menu: MenuId,
        ui: &mut Ui<R, S>,
        app: &mut C,
    ) -> Result<(), ConfigError>
    where
        R: Renderer,
        S: EventSource,
    {
        self.tree.menu(menu)?;
        self.stack
            .push(Frame { menu, top: 0 })
            .map_err(|_| ConfigError::MenuTooDeep)?;

        #[cfg(feature = "defmt")]
        defmt::debug!("enter menu {} (depth {})", menu.0, self.stack.len());

        self.draw(ui, app);
        ui.flush();
        Ok(())
    }

    /// Close the current menu
    ///
    /// Redraws the parent, or reports [`Dispatch::Idle`] when the outermost
    /// menu was closed.
    pub fn back<R, S>(&mut self, ui: &mut Ui<R, S>, app: &mut C) -> Dispatch
    where
        R: Renderer,
        S: EventSource,
    {
        let _closed = self.stack.pop();
        ui.flush();

        #[cfg(feature = "defmt")]
        if let Some(frame) = _closed {
            defmt::debug!("leave menu {}", frame.menu.0);
        }

        if self.stack.is_empty() {
            Dispatch::Idle
        } else {
            self.draw(ui, app);
            Dispatch::Back
        }
    }

    /// Handle one input event against the current menu
    ///
    /// Only pen-down events do anything. Drag and up are dropped, as is
    /// anything arriving while idle.
    pub fn handle_event<R, S>(
        &mut self,
        event: Event,
        ui: &mut Ui<R, S>,
        app: &mut C,
    ) -> Result<Dispatch, ConfigError>
    where
        R: Renderer,
        S: EventSource,
    {
        if !event.is_down() {
            return Ok(Dispatch::None);
        }
        let Some(frame) = self.stack.last().copied() else {
            return Ok(Dispatch::None);
        };
        let menu = self.tree.menu(frame.menu)?;
        let layout = *ui.layout();
        let window = Window::new(menu.len(), layout.page_size);

        let hotspots = page_hotspots(&layout, window.visible(frame.top));
        let mut cursor = Cursor::default();
        handle_touch(event.x, event.y, &hotspots, &mut cursor);

        let dispatch = match cursor.hit {
            None => Dispatch::None,
            Some(Hit::Back) => self.back(ui, app),
            Some(Hit::ScrollUp) => {
                let top = window.scroll_up(frame.top, layout.scroll_step);
                self.scroll_to(top, ui, app)
            }
            Some(Hit::ScrollDown) => {
                let top = window.scroll_down(frame.top, layout.scroll_step);
                self.scroll_to(top, ui, app)
            }
            Some(Hit::Row(row)) => self.activate(frame.top + row, ui, app)?,
        };
        Ok(dispatch)
    }

    /// Activate item `index` of the current menu
    ///
    /// Submenus are entered. Actions run with the application state and a
    /// dialog handle; their result decides whether this menu is redrawn.
    /// The scroll offset is left alone either way.
    pub fn activate<R, S>(
        &mut self,
        index: usize,
        ui: &mut Ui<R, S>,
        app: &mut C,
    ) -> Result<Dispatch, ConfigError>
    where
        R: Renderer,
        S: EventSource,
    {
        let tree = self.tree;
        let Some(frame) = self.stack.last() else {
            return Ok(Dispatch::None);
        };
        let Some(item) = tree.menu(frame.menu)?.items().get(index) else {
            return Ok(Dispatch::None);
        };

        match item.target {
            Target::Submenu(child) => {
                self.enter(child, ui, app)?;
                Ok(Dispatch::Entered(child))
            }
            Target::Action(action) => {
                #[cfg(feature = "defmt")]
                defmt::debug!("action '{}' arg {}", item.title, item.arg);

                let redraw = action(item, &mut ActionContext::new(app, ui));
                if redraw {
                    self.draw(ui, app);
                }
                Ok(Dispatch::Action { redraw })
            }
        }
    }

    /// Show `root` and process events until it is closed
    ///
    /// Returns once the stack is back at the depth it had on entry.
    pub fn run<R, S>(
        &mut self,
        root: MenuId,
        ui: &mut Ui<R, S>,
        app: &mut C,
    ) -> Result<(), ConfigError>
    where
        R: Renderer,
        S: EventSource,
    {
        let base = self.depth();
        self.enter(root, ui, app)?;
        while self.depth() > base {
            let event = ui.next_event();
            self.handle_event(event, ui, app)?;
        }
        Ok(())
    }

    /// Repaint the current menu
    pub fn redraw<R, S>(&self, ui: &mut Ui<R, S>, app: &mut C)
    where
        R: Renderer,
        S: EventSource,
    {
        self.draw(ui, app);
    }

    fn scroll_to<R, S>(&mut self, top: usize, ui: &mut Ui<R, S>, app: &mut C) -> Dispatch
    where
        R: Renderer,
        S: EventSource,
    {
        let Some(frame) = self.stack.last_mut() else {
            return Dispatch::None;
        };
        if frame.top == top {
            return Dispatch::None;
        }
        frame.top = top;
        self.draw(ui, app);
        Dispatch::Scrolled
    }

    fn draw<R, S>(&self, ui: &mut Ui<R, S>, app: &mut C)
    where
        R: Renderer,
        S: EventSource,
    {
        let Some(frame) = self.stack.last() else {
            return;
        };
        let Some(menu) = self.tree.get(frame.menu) else {
            return;
        };

        let (titles, failed) = populate(menu, app);
        if failed {
            #[cfg(feature = "defmt")]
            defmt::warn!("title provider failed for menu {}", frame.menu.0);
            ui.alert(STORAGE_ALERT);
        }

        let window = Window::new(menu.len(), ui.layout().page_size);
        let renderer = &mut ui.renderer;
        renderer.draw_menu_frame(menu.title);
        renderer.draw_back_button();
        for row in 0..window.visible(frame.top) {
            let index = frame.top + row;
            let text = titles.get(index).map_or("", |title| title.as_str());
            renderer.draw_item_row(row, index, text, menu.indexed);
        }
        renderer.draw_scroll_indicator(
            window.can_scroll_up(frame.top),
            window.can_scroll_down(frame.top),
        );
    }
}

/// Fresh titles for every item of `menu`
///
/// Items whose provider fails get a blank title; the flag reports whether
/// that happened.
fn populate<C>(menu: &Menu<C>, app: &mut C) -> (Vec<ItemTitle, MAX_ITEMS>, bool) {
    let mut titles = Vec::new();
    let mut failed = false;
    for index in 0..menu.len() {
        let title = match menu.title_of(index, app) {
            Ok(title) => title,
            Err(_) => {
                failed = true;
                ItemTitle::new()
            }
        };
        let _ = titles.push(title);
    }
    (titles, failed)
}
