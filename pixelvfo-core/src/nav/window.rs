//! Scroll window arithmetic

/// Visible page over a list of `len` items
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Window {
    pub len: usize,
    pub page: usize,
}

impl Window {
    pub const fn new(len: usize, page: usize) -> Self {
        Self { len, page }
    }

    /// Largest valid `top`
    pub const fn max_top(&self) -> usize {
        self.len.saturating_sub(self.page)
    }

    /// Rows shown when the page starts at `top`
    pub fn visible(&self, top: usize) -> usize {
        self.page.min(self.len.saturating_sub(top))
    }

    pub fn scroll_up(&self, top: usize, step: usize) -> usize {
        top.saturating_sub(step)
    }

    pub fn scroll_down(&self, top: usize, step: usize) -> usize {
        top.saturating_add(step).min(self.max_top())
    }

    pub const fn can_scroll_up(&self, top: usize) -> bool {
        top > 0
    }

    pub const fn can_scroll_down(&self, top: usize) -> bool {
        top < self.max_top()
    }
}
