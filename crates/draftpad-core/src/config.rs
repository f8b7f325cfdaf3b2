//! Page configuration.
//!
//! Every field has a default matching the admin page's markup and the
//! backend's routes, so hosts only pass what differs. JS callers hand over a
//! plain object which is deserialized with camelCase keys.

use serde::Deserialize;
use url::Url;

use crate::error::ConfigError;

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DraftpadConfig {
    pub upload: UploadConfig,
    pub autosave: AutosaveConfig,
    pub publish_date: PublishDateConfig,
}

impl DraftpadConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.upload.validate()?;
        self.autosave.validate()?;
        self.publish_date.validate()
    }
}

/// Drag-and-drop image upload.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UploadConfig {
    /// Upload route, absolute or relative to the page origin.
    pub endpoint: String,
    /// Multipart field name the file is sent under.
    pub file_field: String,
    /// Selector for the body textarea that accepts drops.
    pub body_selector: String,
    /// Id of the status text element.
    pub status_id: String,
    /// Id of the element revealed once drag-and-drop is wired up.
    pub toggle_id: String,
    pub busy_message: String,
    pub status_color: String,
    /// Prefix of the failure alert; the server's response text follows it.
    pub failure_prefix: String,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            endpoint: "/images/?raw=true".to_string(),
            file_field: "file".to_string(),
            body_selector: r#"textarea[name="body"]"#.to_string(),
            status_id: "js-status".to_string(),
            toggle_id: "js-show".to_string(),
            busy_message: "UPLOADING...".to_string(),
            status_color: "#f00".to_string(),
            failure_prefix: "Image could not be uploaded. ".to_string(),
        }
    }
}

impl UploadConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        non_empty("upload.endpoint", &self.endpoint)?;
        non_empty("upload.fileField", &self.file_field)?;
        non_empty("upload.bodySelector", &self.body_selector)
    }

    /// Upload url resolved against the page origin.
    pub fn endpoint_url(&self, base: Option<&Url>) -> Result<Url, ConfigError> {
        resolve_endpoint("upload.endpoint", &self.endpoint, base)
    }

    /// Alert text for a failed upload.
    pub fn failure_message(&self, server_text: &str) -> String {
        format!("{}{}", self.failure_prefix, server_text)
    }
}

/// Debounced snapshot saving of the post being written.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AutosaveConfig {
    pub endpoint: String,
    pub title_id: String,
    pub body_id: String,
    /// Quiet period after the last keystroke before saving.
    pub delay_ms: u32,
    /// Title sent when the title field is empty.
    pub untitled: String,
}

impl Default for AutosaveConfig {
    fn default() -> Self {
        Self {
            endpoint: "/post-backups/create/".to_string(),
            title_id: "id_title".to_string(),
            body_id: "id_body".to_string(),
            delay_ms: 2500,
            untitled: "Untitled".to_string(),
        }
    }
}

impl AutosaveConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        non_empty("autosave.endpoint", &self.endpoint)?;
        non_empty("autosave.bodyId", &self.body_id)
    }

    pub fn endpoint_url(&self, base: Option<&Url>) -> Result<Url, ConfigError> {
        resolve_endpoint("autosave.endpoint", &self.endpoint, base)
    }
}

/// "set to today" / "set as draft" links next to the publication date.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PublishDateConfig {
    pub input_selector: String,
    pub today_id: String,
    pub draft_id: String,
    pub today_label: String,
    pub draft_label: String,
    pub separator: String,
    /// Whether the form creates a new post rather than editing one.
    pub is_create_op: bool,
}

impl Default for PublishDateConfig {
    fn default() -> Self {
        Self {
            input_selector: r#"input[name="published_at"]"#.to_string(),
            today_id: "set-today".to_string(),
            draft_id: "set-empty".to_string(),
            today_label: "set to today".to_string(),
            draft_label: "set as draft".to_string(),
            separator: " — ".to_string(),
            is_create_op: false,
        }
    }
}

impl PublishDateConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        non_empty("publishDate.inputSelector", &self.input_selector)
    }
}

fn non_empty(field: &'static str, value: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Empty(field));
    }
    Ok(())
}

/// Parse `endpoint` as an absolute url, or join it onto `base`.
pub fn resolve_endpoint(
    field: &'static str,
    endpoint: &str,
    base: Option<&Url>,
) -> Result<Url, ConfigError> {
    match (Url::parse(endpoint), base) {
        (Ok(url), _) => Ok(url),
        (Err(url::ParseError::RelativeUrlWithoutBase), Some(base)) => base
            .join(endpoint)
            .map_err(|source| ConfigError::InvalidUrl { field, source }),
        (Err(source), _) => Err(ConfigError::InvalidUrl { field, source }),
    }
}
