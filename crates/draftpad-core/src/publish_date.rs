//! Publication date shortcuts.
//!
//! Next to the publication date field the page offers at most one link:
//! "set to today" when the field is empty, or "set as draft" (clear the
//! field) when a new post already carries a date.

/// The shortcut offered for the publication date field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PublishDateAction {
    /// Fill in today's date.
    SetToday,
    /// Clear the date, leaving the post as a draft.
    SetDraft,
}

impl PublishDateAction {
    /// Pick the shortcut for the field's current value.
    pub fn for_field(current_value: &str, is_create_op: bool) -> Option<Self> {
        if current_value.is_empty() {
            Some(PublishDateAction::SetToday)
        } else if is_create_op {
            Some(PublishDateAction::SetDraft)
        } else {
            None
        }
    }

    /// New field value given an ISO-8601 timestamp for "now".
    pub fn apply(&self, now_iso: &str) -> String {
        match self {
            PublishDateAction::SetToday => iso_date(now_iso).to_string(),
            PublishDateAction::SetDraft => String::new(),
        }
    }
}

/// The `YYYY-MM-DD` prefix of an ISO-8601 timestamp.
pub fn iso_date(timestamp: &str) -> &str {
    timestamp.get(..10).unwrap_or(timestamp)
}
