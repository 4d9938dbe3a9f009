//! Request descriptors for the translation service
//!
//! Turns discovery results and configuration into fully resolved request
//! descriptions: method, URL with query parameters, and the local file
//! involved. Sending them is left to the caller.

use std::path::PathBuf;

use serde::Serialize;
use url::Url;

use crate::config::ProjectConfig;
use crate::discovery::ExtractionResult;
use crate::template::{LANGUAGE_PLACEHOLDER, NAMESPACE_PLACEHOLDER};
use crate::TransyncError;

const UPLOAD_ENDPOINT: &str = "/cli/v1/upload";
const DOWNLOAD_ENDPOINT: &str = "/cli/v1/download";

/// Header carrying `api_key` on every request
pub const TOKEN_HEADER: &str = "X-SimpleLocalize-Token";

/// One file to upload
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadRequest {
    pub path: PathBuf,
    pub language_key: Option<String>,
    pub namespace: Option<String>,
    pub upload_format: String,
    pub options: Vec<String>,
}

impl UploadRequest {
    /// Build from a discovered file. Values extracted from the path win over
    /// the configured `language_key` and `namespace`.
    #[must_use]
    pub fn from_extraction(found: &ExtractionResult, upload_format: &str, config: &ProjectConfig) -> Self {
        Self {
            path: found.path.clone(),
            language_key: found
                .get(LANGUAGE_PLACEHOLDER)
                .map(str::to_string)
                .or_else(|| config.language_key.clone()),
            namespace: found
                .get(NAMESPACE_PLACEHOLDER)
                .map(str::to_string)
                .or_else(|| config.namespace.clone()),
            upload_format: upload_format.to_string(),
            options: config.options.clone(),
        }
    }

    /// Endpoint URL. Unbound language or namespace is left out, meaning all values.
    ///
    /// # Errors
    /// Returns `url::ParseError` if `base_url` is not a valid URL.
    pub fn url(&self, base_url: &str) -> Result<Url, url::ParseError> {
        let mut url = Url::parse(base_url)?.join(UPLOAD_ENDPOINT)?;
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("uploadFormat", &self.upload_format);
            if let Some(language) = &self.language_key {
                query.append_pair("languageKey", language);
            }
            if let Some(namespace) = &self.namespace {
                query.append_pair("namespace", namespace);
            }
            if !self.options.is_empty() {
                query.append_pair("uploadOptions", &self.options.join(","));
            }
        }
        Ok(url)
    }
}

/// Export of translations from the service
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadRequest {
    pub download_format: String,
    pub language_key: Option<String>,
    pub namespace: Option<String>,
    pub options: Vec<String>,
}

impl DownloadRequest {
    /// Build from configuration
    ///
    /// # Errors
    /// Returns `TransyncError::ConfigError` if the download keys are missing.
    pub fn from_config(config: &ProjectConfig) -> Result<Self, TransyncError> {
        config.validate_for_download()?;
        Ok(Self {
            download_format: config.download_format.clone().unwrap_or_default(),
            language_key: config.language_key.clone(),
            namespace: config.namespace.clone(),
            options: config.options.clone(),
        })
    }

    /// Endpoint URL
    ///
    /// # Errors
    /// Returns `url::ParseError` if `base_url` is not a valid URL.
    pub fn url(&self, base_url: &str) -> Result<Url, url::ParseError> {
        let mut url = Url::parse(base_url)?.join(DOWNLOAD_ENDPOINT)?;
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("downloadFormat", &self.download_format);
            if let Some(language) = &self.language_key {
                query.append_pair("languageKey", language);
            }
            if let Some(namespace) = &self.namespace {
                query.append_pair("namespace", namespace);
            }
            if !self.options.is_empty() {
                query.append_pair("downloadOptions", &self.options.join(","));
            }
        }
        Ok(url)
    }
}

/// A request ready to be sent
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedRequest {
    pub method: &'static str,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    /// Authentication header attached when sent, `None` without an `api_key`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_header: Option<&'static str>,
}

fn token_header(config: &ProjectConfig) -> Option<&'static str> {
    config
        .api_key
        .as_deref()
        .filter(|key| !key.trim().is_empty())
        .map(|_| TOKEN_HEADER)
}

/// Plan one upload per discovered file
///
/// # Errors
/// Returns `TransyncError` if the upload keys are missing or the base URL is invalid.
pub fn plan_uploads(
    found: &[ExtractionResult],
    config: &ProjectConfig,
) -> Result<Vec<PlannedRequest>, TransyncError> {
    config.validate_for_upload()?;
    let format = config.upload_format.as_deref().unwrap_or_default();
    found
        .iter()
        .map(|f| -> Result<PlannedRequest, TransyncError> {
            let request = UploadRequest::from_extraction(f, format, config);
            Ok(PlannedRequest {
                method: "POST",
                url: request.url(&config.base_url)?.to_string(),
                file: Some(request.path),
                token_header: token_header(config),
            })
        })
        .collect()
}

/// Plan the export request for a download
///
/// # Errors
/// Returns `TransyncError` if the download keys are missing or the base URL is invalid.
pub fn plan_download(config: &ProjectConfig) -> Result<PlannedRequest, TransyncError> {
    let request = DownloadRequest::from_config(config)?;
    Ok(PlannedRequest {
        method: "GET",
        url: request.url(&config.base_url)?.to_string(),
        file: None,
        token_header: token_header(config),
    })
}
