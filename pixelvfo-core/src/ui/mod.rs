//! UI context shared by the navigator and dialogs
//!
//! [`Ui`] bundles the renderer, the event source and the resolved layout.
//! Item actions never see it directly; they get an [`ActionContext`] with
//! the application state and a dialog handle.

mod dialog;

pub use dialog::{Button, Dialogs};

use crate::input::{Event, EventSource};
use crate::layout::Layout;
use crate::traits::Renderer;

/// Renderer, input and geometry for one screen
pub struct Ui<R, S> {
    pub renderer: R,
    pub source: S,
    layout: Layout,
}

impl<R: Renderer, S: EventSource> Ui<R, S> {
    pub fn new(renderer: R, source: S, layout: Layout) -> Self {
        Self {
            renderer,
            source,
            layout,
        }
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Wait for the next real event
    ///
    /// Polls the source, idling between empty polls. There is no timeout.
    pub fn next_event(&mut self) -> Event {
        loop {
            let event = self.source.poll();
            if event.is_some() {
                return event;
            }
            self.source.idle();
        }
    }

    /// Drop input queued for the previous screen
    pub fn flush(&mut self) {
        self.source.flush();
    }

    pub fn into_parts(self) -> (R, S) {
        (self.renderer, self.source)
    }
}

/// What an item action gets to work with
pub struct ActionContext<'a, C> {
    /// Application state
    pub app: &'a mut C,
    /// Modal dialogs on the current screen
    pub dialogs: &'a mut dyn Dialogs,
}

impl<'a, C> ActionContext<'a, C> {
    pub fn new(app: &'a mut C, dialogs: &'a mut dyn Dialogs) -> Self {
        Self { app, dialogs }
    }

    /// Show a message and wait for OK
    pub fn alert(&mut self, message: &str) {
        self.dialogs.alert(message);
    }

    /// Ask a yes/no question
    pub fn confirm(&mut self, message: &str) -> bool {
        self.dialogs.confirm(message)
    }
}
