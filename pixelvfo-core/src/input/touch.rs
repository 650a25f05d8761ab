//! Raw touch samples to UI events
//!
//! Runs on the producer side: one call per sensor sample, at most one event
//! out. Pure arithmetic, no blocking, safe for interrupt context.

use embassy_sync::blocking_mutex::raw::RawMutex;
use pixelvfo_hal::{RawSample, TouchError, TouchPanel};

use super::{Event, EventQueue};
use crate::config::TouchConfig;

/// Pen state tracker with calibration and drag filtering
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TouchTracker {
    config: TouchConfig,
    width: i32,
    height: i32,
    /// Last reported position while the pen is down
    last: Option<(i32, i32)>,
}

impl TouchTracker {
    pub fn new(config: &TouchConfig, width: u16, height: u16) -> Self {
        Self {
            config: *config,
            width: i32::from(width.max(1)),
            height: i32::from(height.max(1)),
            last: None,
        }
    }

    /// Check if the pen is currently considered down
    pub fn is_pressed(&self) -> bool {
        self.last.is_some()
    }

    /// Map a raw ADC sample onto screen coordinates, clamped to the panel
    pub fn calibrate(&self, raw: RawSample) -> (i32, i32) {
        let x = scale(
            raw.x,
            self.config.raw_min_x,
            self.config.raw_max_x,
            self.width,
        );
        let y = scale(
            raw.y,
            self.config.raw_min_y,
            self.config.raw_max_y,
            self.height,
        );
        (x, y)
    }

    /// Feed one sample (`None` = pen up) and get the resulting event
    pub fn sample(&mut self, raw: Option<RawSample>) -> Option<Event> {
        match (raw, self.last) {
            (Some(raw), None) => {
                let (x, y) = self.calibrate(raw);
                self.last = Some((x, y));
                Some(Event::down(x, y))
            }
            (Some(raw), Some((lx, ly))) => {
                let (x, y) = self.calibrate(raw);
                let delta = i32::from(self.config.move_delta);
                if (x - lx).abs() > delta || (y - ly).abs() > delta {
                    self.last = Some((x, y));
                    Some(Event::drag(x, y))
                } else {
                    None
                }
            }
            (None, Some((lx, ly))) => {
                self.last = None;
                Some(Event::up(lx, ly))
            }
            (None, None) => None,
        }
    }

    /// Sample `panel` once and enqueue the resulting event, if any
    ///
    /// This is the whole producer side: call it from the touch interrupt or
    /// a periodic timer.
    pub fn poll<P, M, const N: usize>(
        &mut self,
        panel: &mut P,
        queue: &EventQueue<M, N>,
    ) -> Result<Option<Event>, TouchError>
    where
        P: TouchPanel,
        M: RawMutex,
    {
        let event = self.sample(panel.sample()?);
        if let Some(event) = event {
            queue.push_event(event);
        }
        Ok(event)
    }
}

/// Linear map of `raw` from `[min, max]` onto `[0, span - 1]`
fn scale(raw: u16, min: u16, max: u16, span: i32) -> i32 {
    let range = i64::from(max) - i64::from(min);
    if range <= 0 {
        return 0;
    }
    // Two full 16-bit factors overflow i32
    let offset = i64::from(raw) - i64::from(min);
    let scaled = (offset * i64::from(span) / range).clamp(0, i64::from(span) - 1);
    scaled as i32
}
