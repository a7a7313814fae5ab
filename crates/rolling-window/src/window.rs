//! Rolling Window Implementation

use crate::WindowError;
use ndarray::{s, ArrayView1};

/// Number of windows of `width` that fit in a series of `len` timesteps
pub fn window_count(len: usize, width: usize) -> usize {
    if width == 0 || width > len {
        0
    } else {
        len - width + 1
    }
}

/// Lazy sequence of all contiguous windows of a fixed width.
///
/// Windows are borrowed views into the underlying series and are yielded in
/// offset order. Cloning the iterator (or calling [`RollingWindows::reset`])
/// restarts the sequence.
#[derive(Debug, Clone)]
pub struct RollingWindows<'a> {
    /// Series being windowed
    series: ArrayView1<'a, f64>,
    /// Window width
    width: usize,
    /// Offset of the next window to yield
    offset: usize,
}

impl<'a> RollingWindows<'a> {
    /// Create a rolling view; `width` must be in `1..=series.len()`
    pub fn new(series: ArrayView1<'a, f64>, width: usize) -> Result<Self, WindowError> {
        if width == 0 || width > series.len() {
            return Err(WindowError::InvalidLength {
                width,
                len: series.len(),
            });
        }
        Ok(Self {
            series,
            width,
            offset: 0,
        })
    }

    /// Window width
    pub fn width(&self) -> usize {
        self.width
    }

    /// Total number of windows, independent of iteration progress
    pub fn total(&self) -> usize {
        window_count(self.series.len(), self.width)
    }

    /// Window at a given offset, if it exists
    pub fn get(&self, offset: usize) -> Option<ArrayView1<'a, f64>> {
        if offset < self.total() {
            Some(self.series.slice_move(s![offset..offset + self.width]))
        } else {
            None
        }
    }

    /// Restart from the first window
    pub fn reset(&mut self) {
        self.offset = 0;
    }
}

impl<'a> Iterator for RollingWindows<'a> {
    type Item = ArrayView1<'a, f64>;

    fn next(&mut self) -> Option<Self::Item> {
        let window = self.get(self.offset)?;
        self.offset += 1;
        Some(window)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.total().saturating_sub(self.offset);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for RollingWindows<'_> {}
