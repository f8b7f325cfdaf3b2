//! HTTP transport for uploads and autosave snapshots.
//!
//! Backed by `reqwest`, which uses `fetch` on wasm32 and hyper natively, so
//! the same code path serves the browser and native hosts. Relative
//! endpoints must be resolved against the page origin first (see
//! `config::resolve_endpoint`); `fetch` through reqwest needs absolute urls.

use std::future::Future;

use reqwest::StatusCode;
use reqwest::multipart::{Form, Part};
use url::Url;

use crate::autosave::{Snapshot, SnapshotTransport};
use crate::config::DraftpadConfig;
use crate::csrf::CSRF_HEADER;
use crate::error::{ConfigError, UploadError};
use crate::upload::DroppedFile;

/// A completed upload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Uploaded {
    /// Final address of the stored image, after any redirects.
    pub url: String,
}

/// Sends one file to the upload endpoint.
///
/// Resolves to exactly one terminal outcome. There is no retry and no
/// cancellation: once sent, a request runs until it completes or fails.
pub trait UploadTransport {
    fn upload(
        &self,
        file: &DroppedFile,
        csrf_token: &str,
    ) -> impl Future<Output = Result<Uploaded, UploadError>>;
}

impl<T: UploadTransport + ?Sized> UploadTransport for &T {
    fn upload(
        &self,
        file: &DroppedFile,
        csrf_token: &str,
    ) -> impl Future<Output = Result<Uploaded, UploadError>> {
        (**self).upload(file, csrf_token)
    }
}

/// `reqwest`-backed transport for the blog backend.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    client: reqwest::Client,
    upload_url: Url,
    file_field: String,
    snapshot_url: Option<Url>,
}

impl HttpTransport {
    /// Transport posting files under the `file` field to `upload_url`.
    pub fn new(upload_url: Url) -> Self {
        Self {
            client: reqwest::Client::new(),
            upload_url,
            file_field: "file".to_string(),
            snapshot_url: None,
        }
    }

    /// Build from config, resolving relative endpoints against `base`.
    pub fn from_config(config: &DraftpadConfig, base: Option<&Url>) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            client: reqwest::Client::new(),
            upload_url: config.upload.endpoint_url(base)?,
            file_field: config.upload.file_field.clone(),
            snapshot_url: Some(config.autosave.endpoint_url(base)?),
        })
    }

    pub fn with_file_field(mut self, field: impl Into<String>) -> Self {
        self.file_field = field.into();
        self
    }

    pub fn with_snapshot_url(mut self, url: Url) -> Self {
        self.snapshot_url = Some(url);
        self
    }

    pub fn upload_url(&self) -> &Url {
        &self.upload_url
    }

    async fn post_form(&self, url: &Url, form: Form, csrf_token: &str) -> Result<reqwest::Response, UploadError> {
        let response = self
            .client
            .post(url.clone())
            .header(CSRF_HEADER, csrf_token)
            .multipart(form)
            .send()
            .await?;
        Ok(response)
    }
}

/// Multipart part for a dropped file. A mime type that does not parse is
/// left off; the server decides what the file is.
fn file_part(file: &DroppedFile) -> Part {
    let part = || Part::bytes(file.data.to_vec()).file_name(file.name.clone());
    let Some(mime) = file.mime_type.as_deref().filter(|m| !m.is_empty()) else {
        return part();
    };
    part().mime_str(mime).unwrap_or_else(|err| {
        tracing::warn!(name = %file.name, mime, error = %err, "sending file without its mime type");
        part()
    })
}

/// Turn a non-200 response into `UploadError::Http` carrying its body.
async fn reject(response: reqwest::Response) -> UploadError {
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    UploadError::Http { status, body }
}

impl UploadTransport for HttpTransport {
    async fn upload(&self, file: &DroppedFile, csrf_token: &str) -> Result<Uploaded, UploadError> {
        let form = Form::new().part(self.file_field.clone(), file_part(file));

        tracing::debug!(
            name = %file.name,
            size = file.data.len(),
            url = %self.upload_url,
            "sending image upload"
        );
        let response = self.post_form(&self.upload_url, form, csrf_token).await?;

        if response.status() != StatusCode::OK {
            return Err(reject(response).await);
        }
        Ok(Uploaded {
            url: response.url().to_string(),
        })
    }
}

impl SnapshotTransport for HttpTransport {
    async fn save_snapshot(&self, snapshot: &Snapshot, csrf_token: &str) -> Result<(), UploadError> {
        let Some(url) = &self.snapshot_url else {
            return Err(UploadError::Config(ConfigError::Empty("autosave.endpoint")));
        };
        let form = Form::new()
            .text("title", snapshot.title.clone())
            .text("body", snapshot.body.clone());

        let response = self.post_form(url, form, csrf_token).await?;
        if response.status() != StatusCode::OK {
            return Err(reject(response).await);
        }
        Ok(())
    }
}
