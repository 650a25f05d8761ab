//! Rectangular touch regions and dispatch
//!
//! A screen declares its hotspots as a slice. Hit testing scans in
//! declaration order and the first match wins, so overlapping regions must
//! be listed highest priority first.

use core::fmt;

/// Axis-aligned rectangle in screen pixels
///
/// Containment is half-open: the right and bottom edges belong to the
/// neighbouring region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Region {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Region {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// First column past the region
    pub const fn right(&self) -> i32 {
        self.x + self.w
    }

    /// First row past the region
    pub const fn bottom(&self) -> i32 {
        self.y + self.h
    }

    pub const fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Check if `other` lies completely inside this region
    pub const fn encloses(&self, other: &Region) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }
}

/// Hotspot handler: returns `true` when the screen must be redrawn
pub type Handler<C> = fn(&HotSpot<C>, &mut C) -> bool;

/// A region bound to a handler and an opaque argument
pub struct HotSpot<C> {
    pub region: Region,
    pub handler: Handler<C>,
    pub arg: i32,
}

impl<C> HotSpot<C> {
    pub const fn new(region: Region, handler: Handler<C>, arg: i32) -> Self {
        Self {
            region,
            handler,
            arg,
        }
    }

    /// Invoke the bound handler
    pub fn fire(&self, ctx: &mut C) -> bool {
        (self.handler)(self, ctx)
    }
}

// Manual impls: derives would wrongly require `C: Clone`/`C: Debug`
impl<C> Clone for HotSpot<C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C> Copy for HotSpot<C> {}

impl<C> fmt::Debug for HotSpot<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HotSpot")
            .field("region", &self.region)
            .field("arg", &self.arg)
            .finish()
    }
}

/// Index of the first hotspot containing `(x, y)`
pub fn hit_test<C>(x: i32, y: i32, hotspots: &[HotSpot<C>]) -> Option<usize> {
    hotspots.iter().position(|h| h.region.contains(x, y))
}

/// Hit test and invoke the matched handler
///
/// Returns the handler's redraw flag, or `None` when nothing was hit.
pub fn handle_touch<C>(x: i32, y: i32, hotspots: &[HotSpot<C>], ctx: &mut C) -> Option<bool> {
    let index = hit_test(x, y, hotspots)?;
    Some(hotspots[index].fire(ctx))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn record(hotspot: &HotSpot<i32>, ctx: &mut i32) -> bool {
        *ctx = hotspot.arg;
        hotspot.arg % 2 == 0
    }

    fn row(arg: i32, x: i32) -> HotSpot<i32> {
        HotSpot::new(Region::new(x, 0, 10, 10), record, arg)
    }

    #[test]
    fn test_first_match_wins() {
        let spots = [
            HotSpot::new(Region::new(0, 0, 20, 20), record, 1),
            HotSpot::new(Region::new(5, 5, 5, 5), record, 2),
        ];
        assert_eq!(hit_test(6, 6, &spots), Some(0));
    }

    #[test]
    fn test_shared_edge_goes_right() {
        let spots = [row(1, 0), row(2, 10)];
        assert_eq!(hit_test(9, 0, &spots), Some(0));
        assert_eq!(hit_test(10, 0, &spots), Some(1));
        assert_eq!(hit_test(20, 0, &spots), None);
        assert_eq!(hit_test(0, 10, &spots), None);
    }

    #[test]
    fn test_handle_touch_returns_redraw() {
        let spots = [row(3, 0), row(4, 10)];
        let mut ctx = 0;
        assert_eq!(handle_touch(1, 1, &spots, &mut ctx), Some(false));
        assert_eq!(ctx, 3);
        assert_eq!(handle_touch(11, 1, &spots, &mut ctx), Some(true));
        assert_eq!(ctx, 4);
        assert_eq!(handle_touch(50, 50, &spots, &mut ctx), None);
        assert_eq!(ctx, 4);
    }

    #[test]
    fn test_empty_region_never_hit() {
        let r = Region::new(5, 5, 0, 10);
        assert!(!r.contains(5, 5));
    }

    #[test]
    fn test_encloses() {
        let screen = Region::new(0, 0, 320, 240);
        assert!(screen.encloses(&Region::new(240, 0, 80, 50)));
        assert!(!screen.encloses(&Region::new(241, 0, 80, 50)));
    }

    proptest! {
        #[test]
        fn prop_right_edge_is_exclusive(
            x in -500i32..500,
            y in -500i32..500,
            w in 1i32..200,
            h in 1i32..200,
        ) {
            let left = HotSpot::new(Region::new(x, y, w, h), record, 0);
            let right = HotSpot::new(Region::new(x + w, y, w, h), record, 1);
            prop_assert!(!left.region.contains(x + w, y));
            prop_assert_eq!(hit_test(x + w, y, &[left, right]), Some(1));
            prop_assert_eq!(hit_test(x, y + h, &[left]), None);
        }

        #[test]
        fn prop_hit_test_idempotent(
            px in 0i32..320,
            py in 0i32..240,
            rects in proptest::collection::vec((0i32..320, 0i32..240, 0i32..100, 0i32..100), 0..8),
        ) {
            let spots: heapless::Vec<HotSpot<i32>, 8> = rects
                .iter()
                .enumerate()
                .map(|(i, &(x, y, w, h))| HotSpot::new(Region::new(x, y, w, h), record, i as i32))
                .collect();
            let first = hit_test(px, py, &spots);
            prop_assert_eq!(first, hit_test(px, py, &spots));
            if let Some(i) = first {
                prop_assert!(spots[i].region.contains(px, py));
                prop_assert!(spots[..i].iter().all(|s| !s.region.contains(px, py)));
            }
        }
    }
}
