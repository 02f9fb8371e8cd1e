//! Viewport management for scrolling.
//!
//! The [`Viewport`] tracks which rows and render columns are on screen.
//! Offsets only ever move as far as needed to keep the cursor visible.

/// Visible window over the text area.
///
/// # Example
///
/// ```
/// use kiln::ui::viewport::Viewport;
///
/// let mut vp = Viewport::new(80, 22);
/// vp.scroll_to(100, 0);
/// assert_eq!(vp.row_offset(), 79);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    width: usize,
    height: usize,
    row_offset: usize,
    col_offset: usize,
}

/// Terminal lines taken by the status and message bars.
pub const RESERVED_ROWS: u16 = 2;

impl Viewport {
    /// Create a viewport over a text area of `width` x `height` cells.
    pub const fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            row_offset: 0,
            col_offset: 0,
        }
    }

    /// Create a viewport for a whole terminal, leaving room for the bars.
    pub const fn for_terminal(cols: u16, rows: u16) -> Self {
        Self::new(cols as usize, rows.saturating_sub(RESERVED_ROWS) as usize)
    }

    /// First visible buffer row.
    pub const fn row_offset(&self) -> usize {
        self.row_offset
    }

    /// First visible render column.
    pub const fn col_offset(&self) -> usize {
        self.col_offset
    }

    /// Text area width in cells.
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Text area height in rows.
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Move the offsets the minimum needed to show `(row, render_col)`.
    pub const fn scroll_to(&mut self, row: usize, render_col: usize) {
        if row < self.row_offset {
            self.row_offset = row;
        }
        if row >= self.row_offset + self.height {
            self.row_offset = (row + 1).saturating_sub(self.height);
        }
        if render_col < self.col_offset {
            self.col_offset = render_col;
        }
        if render_col >= self.col_offset + self.width {
            self.col_offset = (render_col + 1).saturating_sub(self.width);
        }
    }

    /// Put `row` at the top of the screen.
    pub const fn pin_top(&mut self, row: usize) {
        self.row_offset = row;
    }

    /// Restore both offsets, e.g. after a cancelled search.
    pub const fn restore(&mut self, row_offset: usize, col_offset: usize) {
        self.row_offset = row_offset;
        self.col_offset = col_offset;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_viewport_starts_at_origin() {
        let vp = Viewport::new(80, 22);
        assert_eq!(vp.row_offset(), 0);
        assert_eq!(vp.col_offset(), 0);
    }

    #[test]
    fn test_for_terminal_reserves_bar_rows() {
        let vp = Viewport::for_terminal(80, 24);
        assert_eq!(vp.height(), 22);
        assert_eq!(vp.width(), 80);
    }

    #[test]
    fn test_cursor_inside_window_does_not_scroll() {
        let mut vp = Viewport::new(80, 24);
        vp.scroll_to(10, 5);
        assert_eq!(vp.row_offset(), 0);
        assert_eq!(vp.col_offset(), 0);
    }

    #[test]
    fn test_cursor_below_window_scrolls_minimum() {
        let mut vp = Viewport::new(80, 24);
        vp.scroll_to(100, 0);
        assert_eq!(vp.row_offset(), 77);
        assert_eq!(100 - vp.row_offset(), 23);
    }

    #[test]
    fn test_cursor_above_window_scrolls_to_cursor() {
        let mut vp = Viewport::new(80, 24);
        vp.pin_top(50);
        vp.scroll_to(40, 0);
        assert_eq!(vp.row_offset(), 40);
    }

    #[test]
    fn test_horizontal_scroll_right_and_back() {
        let mut vp = Viewport::new(80, 24);
        vp.scroll_to(0, 100);
        assert_eq!(vp.col_offset(), 21);
        vp.scroll_to(0, 3);
        assert_eq!(vp.col_offset(), 3);
    }

    #[test]
    fn test_last_visible_row_does_not_scroll() {
        let mut vp = Viewport::new(80, 24);
        vp.scroll_to(23, 79);
        assert_eq!(vp.row_offset(), 0);
        assert_eq!(vp.col_offset(), 0);
        vp.scroll_to(24, 80);
        assert_eq!(vp.row_offset(), 1);
        assert_eq!(vp.col_offset(), 1);
    }

    #[test]
    fn test_pin_top_then_scroll_keeps_match_at_top() {
        let mut vp = Viewport::new(80, 10);
        vp.pin_top(42);
        vp.scroll_to(42, 0);
        assert_eq!(vp.row_offset(), 42);
    }

    #[test]
    fn test_restore_offsets() {
        let mut vp = Viewport::new(80, 10);
        vp.scroll_to(300, 200);
        vp.restore(5, 0);
        assert_eq!((vp.row_offset(), vp.col_offset()), (5, 0));
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn cursor_always_visible_after_scroll(
                width in 1..200usize,
                height in 1..100usize,
                start_row in 0..10000usize,
                start_col in 0..1000usize,
                row in 0..10000usize,
                col in 0..1000usize,
            ) {
                let mut vp = Viewport::new(width, height);
                vp.restore(start_row, start_col);
                vp.scroll_to(row, col);
                prop_assert!(vp.row_offset() <= row && row < vp.row_offset() + height);
                prop_assert!(vp.col_offset() <= col && col < vp.col_offset() + width);
            }

            #[test]
            fn scroll_is_idempotent(
                height in 1..100usize,
                row in 0..10000usize,
                col in 0..1000usize,
            ) {
                let mut vp = Viewport::new(80, height);
                vp.scroll_to(row, col);
                let once = vp;
                vp.scroll_to(row, col);
                prop_assert_eq!(once, vp);
            }
        }
    }
}
