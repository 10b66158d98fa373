//! Catalog loading from a file or an HTTP endpoint.
//!
//! Every page view loads the catalog afresh. When the source cannot be read
//! or parsed, [`CatalogLoader::load_or_fallback`] logs the failure and
//! serves the embedded catalog instead.

use std::path::PathBuf;
use std::time::Duration;

use atelier_core::catalog::{fallback_catalog, Catalog};
use atelier_core::error::CoreError;

/// HTTP request timeout for a remote catalog fetch.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The catalog file could not be read.
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    /// The remote request failed (network, DNS, timeout, non-2xx status).
    #[error("Catalog request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The document was read but is not a valid catalog.
    #[error(transparent)]
    Invalid(#[from] CoreError),
}

// ---------------------------------------------------------------------------
// Source
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    File(PathBuf),
    Http(String),
}

impl CatalogSource {
    /// Interpret a configured value: `http://` and `https://` values are
    /// URLs, anything else is a filesystem path.
    pub fn parse(value: &str) -> Self {
        if value.starts_with("http://") || value.starts_with("https://") {
            Self::Http(value.to_string())
        } else {
            Self::File(PathBuf::from(value))
        }
    }
}

impl std::fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogSource::File(path) => write!(f, "{}", path.display()),
            CatalogSource::Http(url) => f.write_str(url),
        }
    }
}

// ---------------------------------------------------------------------------
// Loader
// ---------------------------------------------------------------------------

pub struct CatalogLoader {
    source: CatalogSource,
    client: reqwest::Client,
}

impl CatalogLoader {
    pub fn new(source: CatalogSource) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to build reqwest HTTP client");
        Self { source, client }
    }

    pub fn source(&self) -> &CatalogSource {
        &self.source
    }

    /// Load and parse the catalog from the configured source.
    pub async fn load(&self) -> Result<Catalog, LoadError> {
        let raw = match &self.source {
            CatalogSource::File(path) => tokio::fs::read_to_string(path).await?,
            CatalogSource::Http(url) => {
                self.client
                    .get(url)
                    .send()
                    .await?
                    .error_for_status()?
                    .text()
                    .await?
            }
        };

        let catalog = Catalog::from_json(&raw)?;
        for issue in catalog.integrity_issues() {
            tracing::warn!(source = %self.source, %issue, "Catalog integrity issue");
        }
        Ok(catalog)
    }

    /// Load the catalog, substituting the embedded fallback on failure.
    pub async fn load_or_fallback(&self) -> Catalog {
        match self.load().await {
            Ok(catalog) => {
                tracing::debug!(
                    source = %self.source,
                    categories = catalog.categories.len(),
                    projects = catalog.projects.len(),
                    "Catalog loaded"
                );
                catalog
            }
            Err(e) => {
                tracing::warn!(
                    source = %self.source,
                    error = %e,
                    "Catalog load failed, using fallback data"
                );
                fallback_catalog()
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn parse_distinguishes_urls_from_paths() {
        assert_eq!(
            CatalogSource::parse("https://cdn.example.com/projects.json"),
            CatalogSource::Http("https://cdn.example.com/projects.json".into())
        );
        assert_eq!(
            CatalogSource::parse("data/projects.json"),
            CatalogSource::File(PathBuf::from("data/projects.json"))
        );
    }

    #[tokio::test]
    async fn missing_file_is_io_error() {
        let loader = CatalogLoader::new(CatalogSource::parse("/nonexistent/projects.json"));
        let err = loader.load().await.unwrap_err();
        assert_matches!(err, LoadError::Io(_));
    }

    #[tokio::test]
    async fn malformed_file_is_invalid_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("projects.json");
        tokio::fs::write(&path, "{ not json").await.unwrap();

        let loader = CatalogLoader::new(CatalogSource::File(path));
        let err = loader.load().await.unwrap_err();
        assert_matches!(err, LoadError::Invalid(CoreError::Validation(_)));
    }

    #[tokio::test]
    async fn missing_file_falls_back() {
        let loader = CatalogLoader::new(CatalogSource::parse("/nonexistent/projects.json"));
        assert_eq!(loader.load_or_fallback().await, fallback_catalog());
    }
}
