// src/window.rs
use std::ops::Range;

/// 1-based, inclusive window over the sheet's patient rows.
/// `end == None` means "up to the last row".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RowWindow {
    start: usize,
    end: Option<usize>,
}

impl Default for RowWindow {
    fn default() -> Self {
        Self { start: 1, end: None }
    }
}

impl RowWindow {
    /// `start <= 0` clamps to the first row; `end <= 0` is open-ended.
    pub fn new(start: i64, end: i64) -> Self {
        let start = if start < 1 { 1 } else { usize::try_from(start).unwrap_or(usize::MAX) };
        let end = if end < 1 { None } else { Some(usize::try_from(end).unwrap_or(usize::MAX)) };
        Self { start, end }
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> Option<usize> {
        self.end
    }

    /// 0-based slice range for a table of `total` rows. Never out of bounds;
    /// an inverted or past-the-end window yields an empty range.
    pub fn range(&self, total: usize) -> Range<usize> {
        let end = self.end.unwrap_or(total).min(total);
        let start = (self.start - 1).min(end);
        start..end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_and_negative_are_open() {
        assert_eq!(RowWindow::new(0, 0), RowWindow::default());
        assert_eq!(RowWindow::new(-4, -1), RowWindow::default());
        assert_eq!(RowWindow::default().range(10), 0..10);
    }

    #[test]
    fn inclusive_one_based_bounds() {
        assert_eq!(RowWindow::new(3, 5).range(10), 2..5);
        assert_eq!(RowWindow::new(1, 1).range(10), 0..1);
        assert_eq!(RowWindow::new(10, 0).range(10), 9..10);
    }

    #[test]
    fn clamps_past_the_end() {
        assert_eq!(RowWindow::new(3, 50).range(10), 2..10);
        assert_eq!(RowWindow::new(20, 0).range(10), 10..10);
        assert!(RowWindow::new(6, 2).range(10).is_empty());
        assert!(RowWindow::default().range(0).is_empty());
    }

    #[test]
    fn huge_bounds_saturate() {
        let w = RowWindow::new(i64::MAX, i64::MAX);
        assert!(w.start() >= 1);
        assert!(w.range(10).is_empty());
        assert_eq!(RowWindow::new(1, i64::MAX).range(10), 0..10);
    }
}
