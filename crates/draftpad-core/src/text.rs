//! Text surface abstraction for the editable body field.
//!
//! The `TextSurface` trait is the seam between the upload logic and whatever
//! holds the text: a `<textarea>` in the browser, or the rope-backed
//! `DraftBuffer` for tests and non-browser hosts.

use std::cell::RefCell;
use std::ops::Range;
use std::rc::Rc;

use crate::types::SelectionRange;

/// An editable text surface with an optional selection API.
///
/// All offsets are in Unicode scalar values (chars), not bytes or UTF-16.
/// Methods take `&self` because surfaces are handles onto shared UI state,
/// the same way a DOM element reference is.
pub trait TextSurface {
    /// Current content.
    fn value(&self) -> String;

    /// Replace the whole content.
    fn set_value(&self, value: &str);

    /// Length in chars.
    fn len_chars(&self) -> usize {
        self.value().chars().count()
    }

    /// Current selection, or `None` if the surface has no usable selection API.
    ///
    /// A caret at offset 0 is `Some(SelectionRange::caret(0))`, never `None`.
    fn selection(&self) -> Option<SelectionRange>;

    /// Move the selection. Surfaces without a selection API ignore this.
    fn set_selection(&self, selection: SelectionRange);

    fn set_disabled(&self, disabled: bool);

    fn is_disabled(&self) -> bool;

    /// Replace a char range with text.
    ///
    /// Default implementation rebuilds the value through `set_value`. Override
    /// if the underlying storage can splice in place.
    fn replace(&self, char_range: Range<usize>, text: &str) {
        let value = self.value();
        let start = char_to_byte(&value, char_range.start);
        let end = char_to_byte(&value, char_range.end);
        let mut out = String::with_capacity(value.len() + text.len());
        out.push_str(&value[..start]);
        out.push_str(text);
        out.push_str(&value[end..]);
        self.set_value(&out);
    }

    /// Append text at the end of the content.
    fn push(&self, text: &str) {
        let len = self.len_chars();
        self.replace(len..len, text);
    }
}

/// Byte index of a char offset, saturating at the end of the string.
pub fn char_to_byte(s: &str, char_offset: usize) -> usize {
    s.char_indices()
        .nth(char_offset)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}

#[derive(Clone, Default)]
struct BufferState {
    rope: ropey::Rope,
    selection: Option<SelectionRange>,
    disabled: bool,
}

/// Ropey-backed text surface.
///
/// Cloning gives another handle onto the same buffer, so a test can keep one
/// handle while the controller owns another.
#[derive(Clone)]
pub struct DraftBuffer {
    state: Rc<RefCell<BufferState>>,
}

impl Default for DraftBuffer {
    fn default() -> Self {
        Self::from_str("")
    }
}

impl DraftBuffer {
    /// Create an empty buffer with the cursor at 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create from string, cursor at the end (where a textarea puts it).
    pub fn from_str(s: &str) -> Self {
        let rope = ropey::Rope::from_str(s);
        let end = rope.len_chars();
        Self {
            state: Rc::new(RefCell::new(BufferState {
                rope,
                selection: Some(SelectionRange::caret(end)),
                disabled: false,
            })),
        }
    }

    /// Create a buffer that reports no selection API, like a non-interactive target.
    pub fn without_selection(s: &str) -> Self {
        let buf = Self::from_str(s);
        buf.state.borrow_mut().selection = None;
        buf
    }

    /// Builder-style selection setter.
    pub fn with_selection(self, selection: SelectionRange) -> Self {
        self.set_selection(selection);
        self
    }
}

impl TextSurface for DraftBuffer {
    fn value(&self) -> String {
        self.state.borrow().rope.to_string()
    }

    fn set_value(&self, value: &str) {
        let mut state = self.state.borrow_mut();
        state.rope = ropey::Rope::from_str(value);
        if state.selection.is_some() {
            state.selection = Some(SelectionRange::caret(state.rope.len_chars()));
        }
    }

    fn len_chars(&self) -> usize {
        self.state.borrow().rope.len_chars()
    }

    fn selection(&self) -> Option<SelectionRange> {
        self.state.borrow().selection
    }

    fn set_selection(&self, selection: SelectionRange) {
        let mut state = self.state.borrow_mut();
        if state.selection.is_some() {
            let len = state.rope.len_chars();
            state.selection = Some(selection.clamp(len));
        }
    }

    fn set_disabled(&self, disabled: bool) {
        self.state.borrow_mut().disabled = disabled;
    }

    fn is_disabled(&self) -> bool {
        self.state.borrow().disabled
    }

    fn replace(&self, char_range: Range<usize>, text: &str) {
        let mut state = self.state.borrow_mut();
        let len = state.rope.len_chars();
        let start = char_range.start.min(len);
        let end = char_range.end.clamp(start, len);
        state.rope.remove(start..end);
        state.rope.insert(start, text);
        // Splicing the value resets the caret to the end, as a textarea does.
        if state.selection.is_some() {
            state.selection = Some(SelectionRange::caret(state.rope.len_chars()));
        }
    }
}

impl From<&str> for DraftBuffer {
    fn from(s: &str) -> Self {
        Self::from_str(s)
    }
}
