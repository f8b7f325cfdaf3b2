//! Core types: selection ranges and the edit record produced by injection.
//!
//! These types are framework-agnostic and work with any `TextSurface`.

use std::ops::Range;

/// Selection range within a text surface, in character offsets.
///
/// Unlike a DOM selection this is always ordered: `start <= end`. Use
/// `clamp()` before slicing to also enforce `end <= len`.
#[derive(Clone, Debug, Copy, PartialEq, Eq, Default)]
pub struct SelectionRange {
    pub start: usize,
    pub end: usize,
}

impl SelectionRange {
    /// Create a selection, normalizing so that start <= end.
    pub fn new(start: usize, end: usize) -> Self {
        if start <= end {
            Self { start, end }
        } else {
            Self {
                start: end,
                end: start,
            }
        }
    }

    /// Create a collapsed selection (cursor position).
    pub fn caret(offset: usize) -> Self {
        Self {
            start: offset,
            end: offset,
        }
    }

    /// Check if the selection is collapsed (cursor only).
    pub fn is_caret(&self) -> bool {
        self.start == self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.is_caret()
    }

    /// Restrict both bounds to a buffer of `len` characters.
    pub fn clamp(self, len: usize) -> Self {
        Self::new(self.start.min(len), self.end.min(len))
    }

    pub fn to_range(&self) -> Range<usize> {
        self.start..self.end
    }
}

impl From<Range<usize>> for SelectionRange {
    fn from(r: Range<usize>) -> Self {
        Self::new(r.start, r.end)
    }
}

/// What an injection did to the surface.
#[derive(Clone, Debug, Copy, PartialEq, Eq)]
pub struct Injection {
    /// Char offset where the markup was written.
    pub at: usize,
    /// Number of chars that were replaced (0 for an append or collapsed cursor).
    pub replaced_len: usize,
    /// Number of chars inserted, trailing newline included.
    pub inserted_len: usize,
    /// Cursor offset after the edit.
    pub cursor: usize,
    /// True when the surface had no selection and the markup was appended.
    pub appended: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_normalizes() {
        let sel = SelectionRange::new(10, 5);
        assert_eq!(sel.start, 5);
        assert_eq!(sel.end, 10);
        assert_eq!(sel.len(), 5);
        assert_eq!(sel.to_range(), 5..10);
    }

    #[test]
    fn test_caret_at_zero_is_a_real_position() {
        let sel = SelectionRange::caret(0);
        assert!(sel.is_caret());
        assert_eq!(sel.to_range(), 0..0);
    }

    #[test]
    fn test_clamp_past_end() {
        let sel = SelectionRange::new(3, 40).clamp(8);
        assert_eq!(sel, SelectionRange::new(3, 8));

        let sel = SelectionRange::new(20, 40).clamp(8);
        assert_eq!(sel, SelectionRange::caret(8));
    }
}
