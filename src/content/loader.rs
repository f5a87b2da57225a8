//! Startup loading of the content documents
//!
//! The four documents are fetched concurrently. Any failure aborts the
//! load; there is no partial snapshot.

use std::path::PathBuf;
use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::{debug, info};

use super::models::{BlogDocument, CompanyData, ServicesDocument, TestimonialsDocument};
use super::SiteContent;

pub const COMPANY_DOCUMENT: &str = "company.json";
pub const SERVICES_DOCUMENT: &str = "services.json";
pub const TESTIMONIALS_DOCUMENT: &str = "testimonials.json";
pub const BLOG_DOCUMENT: &str = "blog.json";

const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("Failed to read {document}: {source}")]
    Io {
        document: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to fetch {document}: {source}")]
    Http {
        document: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to fetch {document}: HTTP {status}")]
    HttpStatus { document: &'static str, status: u16 },

    #[error("Failed to parse {document}: {source}")]
    Parse {
        document: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Where the documents live
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentSource {
    /// Local directory holding the four files
    Directory(PathBuf),
    /// Base URL the four files are served under
    Remote(String),
}

impl ContentSource {
    /// `http://` and `https://` values are remote, anything else is a path.
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value.starts_with("http://") || value.starts_with("https://") {
            ContentSource::Remote(value.trim_end_matches('/').to_string())
        } else {
            ContentSource::Directory(PathBuf::from(value))
        }
    }
}

impl std::fmt::Display for ContentSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContentSource::Directory(path) => write!(f, "{}", path.display()),
            ContentSource::Remote(base) => write!(f, "{}", base),
        }
    }
}

/// Load all four documents and build the snapshot.
pub async fn load(source: &ContentSource) -> Result<SiteContent, ContentError> {
    info!("Loading site content from {}", source);

    let client = reqwest::Client::builder()
        .timeout(FETCH_TIMEOUT)
        .build()
        .map_err(|e| ContentError::Http {
            document: COMPANY_DOCUMENT,
            source: e,
        })?;
    let client = &client;

    let (company, services, testimonials, blog) = tokio::try_join!(
        fetch_document::<CompanyData>(source, client, COMPANY_DOCUMENT),
        fetch_document::<ServicesDocument>(source, client, SERVICES_DOCUMENT),
        fetch_document::<TestimonialsDocument>(source, client, TESTIMONIALS_DOCUMENT),
        fetch_document::<BlogDocument>(source, client, BLOG_DOCUMENT),
    )?;

    let content = SiteContent::new(
        company,
        services.services,
        testimonials.testimonials,
        blog.articles,
    );

    info!(
        services = content.services.len(),
        testimonials = content.testimonials.len(),
        articles = content.articles.len(),
        "Site content loaded"
    );

    Ok(content)
}

async fn fetch_document<T: DeserializeOwned>(
    source: &ContentSource,
    client: &reqwest::Client,
    document: &'static str,
) -> Result<T, ContentError> {
    let bytes = match source {
        ContentSource::Remote(base) => {
            let url = format!("{}/{}", base, document);
            debug!("Fetching {}", url);
            let response = client
                .get(&url)
                .send()
                .await
                .map_err(|e| ContentError::Http { document, source: e })?;
            if !response.status().is_success() {
                return Err(ContentError::HttpStatus {
                    document,
                    status: response.status().as_u16(),
                });
            }
            response
                .bytes()
                .await
                .map_err(|e| ContentError::Http { document, source: e })?
                .to_vec()
        }
        ContentSource::Directory(dir) => {
            let path = dir.join(document);
            debug!("Reading {}", path.display());
            tokio::fs::read(&path)
                .await
                .map_err(|e| ContentError::Io { document, source: e })?
        }
    };

    serde_json::from_slice(&bytes).map_err(|e| ContentError::Parse { document, source: e })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn bundled_content() -> ContentSource {
        ContentSource::Directory(Path::new(env!("CARGO_MANIFEST_DIR")).join("content"))
    }

    #[test]
    fn test_content_source_parse() {
        assert_eq!(
            ContentSource::parse("https://example.com/data/"),
            ContentSource::Remote("https://example.com/data".to_string())
        );
        assert_eq!(
            ContentSource::parse("content"),
            ContentSource::Directory(PathBuf::from("content"))
        );
    }

    #[tokio::test]
    async fn test_load_bundled_content() {
        let content = load(&bundled_content()).await.unwrap();
        assert!(!content.services.is_empty());
        assert!(!content.testimonials.is_empty());
        assert!(!content.articles.is_empty());
        assert!(!content.primary_phone().is_empty());
    }

    #[tokio::test]
    async fn test_load_missing_directory_fails() {
        let source = ContentSource::Directory(PathBuf::from("/nonexistent/content"));
        let err = load(&source).await.unwrap_err();
        assert!(matches!(err, ContentError::Io { .. }));
    }
}
