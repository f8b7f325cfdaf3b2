//! Markdown image injection at the cursor.

use std::fmt;

use crate::text::TextSurface;
use crate::types::{Injection, SelectionRange};

/// A `![alt](url)` reference. Built on demand, never stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MarkdownImageRef<'a> {
    pub alt: &'a str,
    pub url: &'a str,
}

impl<'a> MarkdownImageRef<'a> {
    pub fn new(alt: &'a str, url: &'a str) -> Self {
        Self { alt, url }
    }

    /// The block written into the buffer: the reference plus a trailing newline.
    pub fn to_block(&self) -> String {
        format!("{self}\n")
    }
}

impl fmt::Display for MarkdownImageRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "![{}]({})", self.alt, self.url)
    }
}

/// Insert a markdown image block at the surface's selection.
///
/// The selected range `[start, end)` is replaced and the caret is placed at
/// `end + len(block)`. Surfaces without a selection API get the block
/// appended at the end instead.
pub fn inject_image_markdown<S>(surface: &S, alt: &str, url: &str) -> Injection
where
    S: TextSurface + ?Sized,
{
    let block = MarkdownImageRef::new(alt, url).to_block();
    let inserted_len = block.chars().count();

    let Some(selection) = surface.selection() else {
        let at = surface.len_chars();
        surface.push(&block);
        tracing::debug!(at, "no selection on surface, appended image markdown");
        return Injection {
            at,
            replaced_len: 0,
            inserted_len,
            cursor: at + inserted_len,
            appended: true,
        };
    };

    let selection = selection.clamp(surface.len_chars());
    surface.replace(selection.to_range(), &block);

    let cursor = (selection.end + inserted_len).min(surface.len_chars());
    surface.set_selection(SelectionRange::caret(cursor));

    Injection {
        at: selection.start,
        replaced_len: selection.len(),
        inserted_len,
        cursor,
        appended: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::DraftBuffer;

    #[test]
    fn test_reference_format() {
        let reference = MarkdownImageRef::new("cat.png", "/media/cat.png");
        insta::assert_snapshot!(reference.to_string(), @"![cat.png](/media/cat.png)");
        assert_eq!(reference.to_block(), "![cat.png](/media/cat.png)\n");
    }

    #[test]
    fn test_inject_at_end_of_text() {
        let buf = DraftBuffer::from_str("Hello ").with_selection(SelectionRange::caret(6));
        let injection = inject_image_markdown(&buf, "cat.png", "/media/cat.png");

        assert_eq!(buf.value(), "Hello ![cat.png](/media/cat.png)\n");
        assert_eq!(injection.cursor, 33);
        assert_eq!(buf.selection(), Some(SelectionRange::caret(33)));
        assert!(!injection.appended);
    }

    #[test]
    fn test_inject_at_offset_zero() {
        // Offset 0 is a real cursor, not "no cursor".
        let buf = DraftBuffer::from_str("body text").with_selection(SelectionRange::caret(0));
        let injection = inject_image_markdown(&buf, "a", "/b");

        assert_eq!(buf.value(), "![a](/b)\nbody text");
        assert_eq!(injection.at, 0);
        assert_eq!(injection.cursor, 9);
        assert!(!injection.appended);
    }

    #[test]
    fn test_inject_replaces_selection() {
        let before = "one two three";
        let buf = DraftBuffer::from_str(before).with_selection(SelectionRange::new(4, 7));
        let injection = inject_image_markdown(&buf, "x.png", "/x.png");

        let block = "![x.png](/x.png)\n";
        assert_eq!(buf.value(), format!("{}{}{}", &before[..4], block, &before[7..]));
        assert_eq!(injection.replaced_len, 3);
        assert_eq!(injection.cursor, 7 + block.len());
    }

    #[test]
    fn test_inject_in_middle() {
        let buf = DraftBuffer::from_str("ab").with_selection(SelectionRange::caret(1));
        inject_image_markdown(&buf, "i", "u");
        assert_eq!(buf.value(), "a![i](u)\nb");
        assert_eq!(buf.selection(), Some(SelectionRange::caret(9)));
    }

    #[test]
    fn test_no_selection_appends() {
        let buf = DraftBuffer::without_selection("text");
        let injection = inject_image_markdown(&buf, "cat.png", "/media/cat.png");

        assert_eq!(buf.value(), "text![cat.png](/media/cat.png)\n");
        assert!(injection.appended);
        assert_eq!(injection.at, 4);
        assert_eq!(buf.selection(), None);
    }

    #[test]
    fn test_repeated_injections_advance() {
        let buf = DraftBuffer::from_str("").with_selection(SelectionRange::caret(0));
        inject_image_markdown(&buf, "1", "/1");
        inject_image_markdown(&buf, "2", "/2");
        assert_eq!(buf.value(), "![1](/1)\n![2](/2)\n");
    }

    #[test]
    fn test_non_ascii_offsets_are_chars() {
        let buf = DraftBuffer::from_str("héllo").with_selection(SelectionRange::caret(2));
        let injection = inject_image_markdown(&buf, "ü", "/ü");
        assert_eq!(buf.value(), "hé![ü](/ü)\nllo");
        assert_eq!(injection.cursor, 2 + 9);
    }
}
