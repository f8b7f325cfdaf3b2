//! Error types for draftpad.
//!
//! Rejected drops are not errors: they are silent no-ops and never show up
//! here.

use miette::Diagnostic;

/// Terminal failure of an upload or autosave request.
#[derive(thiserror::Error, Debug, Diagnostic)]
pub enum UploadError {
    /// The backend answered with something other than 200.
    #[error("server responded with status {status}")]
    #[diagnostic(code(draftpad::upload::http))]
    Http { status: u16, body: String },

    /// No response reached us (connection refused, aborted, CORS, ...).
    #[error("request failed: {0}")]
    #[diagnostic(code(draftpad::upload::transport))]
    Transport(String),

    /// The dropped file's contents could not be read.
    #[error("could not read dropped file: {0}")]
    #[diagnostic(code(draftpad::upload::read))]
    Read(String),

    /// Endpoint could not be resolved from the configuration.
    #[error(transparent)]
    #[diagnostic_source]
    Config(#[from] ConfigError),
}

impl UploadError {
    /// Text to show the user: the server's body when there is one.
    pub fn user_message(&self) -> &str {
        match self {
            UploadError::Http { body, .. } => body,
            UploadError::Transport(_) | UploadError::Read(_) | UploadError::Config(_) => "",
        }
    }
}

impl From<reqwest::Error> for UploadError {
    fn from(err: reqwest::Error) -> Self {
        UploadError::Transport(err.to_string())
    }
}

/// Invalid configuration.
#[derive(thiserror::Error, Debug, Diagnostic, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("config field `{0}` must not be empty")]
    #[diagnostic(code(draftpad::config::empty))]
    Empty(&'static str),

    #[error("config field `{field}` is not a valid url: {source}")]
    #[diagnostic(
        code(draftpad::config::url),
        help("use an absolute url or a path resolved against the page origin")
    )]
    InvalidUrl {
        field: &'static str,
        #[source]
        source: url::ParseError,
    },
}
