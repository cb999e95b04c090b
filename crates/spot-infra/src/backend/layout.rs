//! Per-service URL layouts for object uploads.
//!
//! Only the target URL and the required settings differ between services.
//! Authentication is a bearer token when one is configured.

use reqwest::Url;
use spot_core::backend::BackendKind;
use spot_core::ports::{BackendError, UploadError};

use super::object_store::ObjectStoreConfig;
use super::transport::ObjectMethod;

const FIREBASE_ENDPOINT: &str = "https://firebasestorage.googleapis.com";
const GOOGLE_ENDPOINT: &str = "https://storage.googleapis.com";

pub trait ObjectLayout: Send + Sync {
    const KIND: BackendKind;

    /// Check the settings this service needs. Called from `configure()`.
    fn validate(&self, config: &ObjectStoreConfig) -> Result<(), BackendError>;

    /// Method and URL that store `key`.
    fn target(
        &self,
        config: &ObjectStoreConfig,
        key: &str,
    ) -> Result<(ObjectMethod, Url), UploadError>;
}

fn require_bucket(config: &ObjectStoreConfig) -> Result<(), BackendError> {
    if config.bucket.trim().is_empty() {
        return Err(BackendError::MissingConfiguration("bucket"));
    }
    Ok(())
}

fn parse_base(raw: &str) -> Result<Url, String> {
    let url = Url::parse(raw).map_err(|e| format!("endpoint {raw:?}: {e}"))?;
    if url.cannot_be_a_base() {
        return Err(format!("endpoint {raw:?} cannot carry a path"));
    }
    Ok(url)
}

fn base_or(config: &ObjectStoreConfig, default: impl FnOnce() -> String) -> Result<Url, String> {
    match config.endpoint.as_deref() {
        Some(endpoint) => parse_base(endpoint),
        None => parse_base(&default()),
    }
}

fn with_segments<'a>(
    mut url: Url,
    segments: impl IntoIterator<Item = &'a str>,
) -> Result<Url, UploadError> {
    url.path_segments_mut()
        .map_err(|_| UploadError::Transport("endpoint cannot carry a path".to_string()))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

/// Append `key` to the path, one segment per `/`. Segments are encoded
/// up front because URL parsing drops raw tabs and newlines.
fn append_encoded_key(url: &mut Url, key: &str) {
    let segments = key
        .split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/");
    let path = format!("{}/{}", url.path().trim_end_matches('/'), segments);
    url.set_path(&path);
}

/// `POST {endpoint}/v0/b/{bucket}/o?name={key}`
#[derive(Debug, Default, Clone, Copy)]
pub struct FirebaseLayout;

impl ObjectLayout for FirebaseLayout {
    const KIND: BackendKind = BackendKind::Firebase;

    fn validate(&self, config: &ObjectStoreConfig) -> Result<(), BackendError> {
        require_bucket(config)?;
        base_or(config, || FIREBASE_ENDPOINT.to_string())
            .map(|_| ())
            .map_err(BackendError::InvalidConfiguration)
    }

    fn target(
        &self,
        config: &ObjectStoreConfig,
        key: &str,
    ) -> Result<(ObjectMethod, Url), UploadError> {
        let base =
            base_or(config, || FIREBASE_ENDPOINT.to_string()).map_err(UploadError::Transport)?;
        let mut url = with_segments(base, ["v0", "b", config.bucket.as_str(), "o"])?;
        url.query_pairs_mut().append_pair("name", key);
        Ok((ObjectMethod::Post, url))
    }
}

/// `PUT {endpoint}/{key}`, endpoint defaulting to the regional
/// virtual-hosted bucket address.
#[derive(Debug, Default, Clone, Copy)]
pub struct AwsLayout;

fn aws_default_endpoint(config: &ObjectStoreConfig) -> String {
    format!(
        "https://{}.s3.{}.amazonaws.com",
        config.bucket.trim(),
        config.region.trim()
    )
}

impl ObjectLayout for AwsLayout {
    const KIND: BackendKind = BackendKind::Aws;

    fn validate(&self, config: &ObjectStoreConfig) -> Result<(), BackendError> {
        require_bucket(config)?;
        if config.endpoint.is_none() && config.region.trim().is_empty() {
            return Err(BackendError::MissingConfiguration("region"));
        }
        base_or(config, || aws_default_endpoint(config))
            .map(|_| ())
            .map_err(BackendError::InvalidConfiguration)
    }

    fn target(
        &self,
        config: &ObjectStoreConfig,
        key: &str,
    ) -> Result<(ObjectMethod, Url), UploadError> {
        let mut url = base_or(config, || aws_default_endpoint(config))
            .map_err(UploadError::Transport)?;
        append_encoded_key(&mut url, key);
        Ok((ObjectMethod::Put, url))
    }
}

/// `POST {endpoint}/upload/storage/v1/b/{bucket}/o?uploadType=media&name={key}`
#[derive(Debug, Default, Clone, Copy)]
pub struct GoogleLayout;

impl ObjectLayout for GoogleLayout {
    const KIND: BackendKind = BackendKind::Google;

    fn validate(&self, config: &ObjectStoreConfig) -> Result<(), BackendError> {
        require_bucket(config)?;
        base_or(config, || GOOGLE_ENDPOINT.to_string())
            .map(|_| ())
            .map_err(BackendError::InvalidConfiguration)
    }

    fn target(
        &self,
        config: &ObjectStoreConfig,
        key: &str,
    ) -> Result<(ObjectMethod, Url), UploadError> {
        let base =
            base_or(config, || GOOGLE_ENDPOINT.to_string()).map_err(UploadError::Transport)?;
        let mut url = with_segments(
            base,
            ["upload", "storage", "v1", "b", config.bucket.as_str(), "o"],
        )?;
        url.query_pairs_mut()
            .append_pair("uploadType", "media")
            .append_pair("name", key);
        Ok((ObjectMethod::Post, url))
    }
}
