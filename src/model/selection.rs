//! Span selection - a contiguous range of keyframe indices.

/// An inclusive, contiguous range of keyframe indices selected for group
/// editing.
///
/// Constructed from any two endpoints (in either order), so a `Span` can
/// only ever describe a contiguous run. Scattered selections do not exist
/// in the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    start: usize,
    end: usize,
}

impl Span {
    /// Create a span from two endpoints, inclusive. Order does not matter.
    pub fn new(a: usize, b: usize) -> Self {
        Self {
            start: a.min(b),
            end: a.max(b),
        }
    }

    /// First selected index.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Last selected index.
    pub fn end(&self) -> usize {
        self.end
    }

    /// Number of selected keyframes.
    pub fn len(&self) -> usize {
        self.end - self.start + 1
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn contains(&self, index: usize) -> bool {
        index >= self.start && index <= self.end
    }

    /// Iterate the selected indices in ascending order.
    pub fn indices(&self) -> impl Iterator<Item = usize> + use<> {
        self.start..=self.end
    }
}
