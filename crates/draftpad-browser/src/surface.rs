//! `<textarea>` implementation of `TextSurface`.
//!
//! The DOM reports `selectionStart`/`selectionEnd` in UTF-16 code units;
//! the core works in chars. Conversion happens here, at the boundary.

use draftpad_core::{SelectionRange, TextSurface};
use web_sys::HtmlTextAreaElement;

/// Text surface backed by a textarea element.
#[derive(Clone, Debug)]
pub struct TextAreaSurface {
    element: HtmlTextAreaElement,
}

impl TextAreaSurface {
    pub fn new(element: HtmlTextAreaElement) -> Self {
        Self { element }
    }

    pub fn element(&self) -> &HtmlTextAreaElement {
        &self.element
    }
}

impl TextSurface for TextAreaSurface {
    fn value(&self) -> String {
        self.element.value()
    }

    fn set_value(&self, value: &str) {
        self.element.set_value(value);
    }

    fn selection(&self) -> Option<SelectionRange> {
        // Both getters throw or return null when the element has no selection API.
        let start = self.element.selection_start().ok()??;
        let end = self.element.selection_end().ok()??;
        let value = self.element.value();
        Some(SelectionRange::new(
            utf16_to_char_offset(&value, start as usize),
            utf16_to_char_offset(&value, end as usize),
        ))
    }

    fn set_selection(&self, selection: SelectionRange) {
        let value = self.element.value();
        let start = char_to_utf16_offset(&value, selection.start) as u32;
        let end = char_to_utf16_offset(&value, selection.end) as u32;
        if let Err(e) = self.element.set_selection_range(start, end) {
            tracing::debug!("textarea rejected selection: {:?}", e);
        }
    }

    fn set_disabled(&self, disabled: bool) {
        self.element.set_disabled(disabled);
    }

    fn is_disabled(&self) -> bool {
        self.element.disabled()
    }
}

/// Convert a UTF-16 code unit offset to a char offset.
///
/// An offset inside a surrogate pair rounds up to the next char.
pub fn utf16_to_char_offset(s: &str, utf16_offset: usize) -> usize {
    let mut units = 0;
    for (chars, c) in s.chars().enumerate() {
        if units >= utf16_offset {
            return chars;
        }
        units += c.len_utf16();
    }
    s.chars().count()
}

/// Convert a char offset to a UTF-16 code unit offset.
pub fn char_to_utf16_offset(s: &str, char_offset: usize) -> usize {
    s.chars().take(char_offset).map(char::len_utf16).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_offsets_identical() {
        assert_eq!(utf16_to_char_offset("hello", 3), 3);
        assert_eq!(char_to_utf16_offset("hello", 3), 3);
        assert_eq!(utf16_to_char_offset("hello", 99), 5);
    }

    #[test]
    fn test_astral_chars_take_two_units() {
        // 🌍 is one char, two UTF-16 units.
        let s = "a🌍b";
        assert_eq!(char_to_utf16_offset(s, 2), 3);
        assert_eq!(utf16_to_char_offset(s, 3), 2);
        assert_eq!(utf16_to_char_offset(s, 2), 2);
    }
}
