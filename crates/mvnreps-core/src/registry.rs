//! Maven Central search client.

use crate::error::{Result, SearchError};
use crate::query::SearchConfig;
use crate::types::Document;
use async_trait::async_trait;
use serde::Deserialize;

pub const MAVEN_SEARCH_BASE: &str = "https://search.maven.org/solrsearch/select";

const USER_AGENT: &str = concat!("mvnreps/", env!("CARGO_PKG_VERSION"));

/// Source of search results.
///
/// Implementations issue exactly one request per call and return documents
/// in the order the index produced them.
#[async_trait]
pub trait Registry: Send + Sync {
    /// Runs the search described by `config`.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The request cannot be sent
    /// - The server answers with a status other than 200
    /// - The body cannot be read or is not valid JSON
    async fn search(&self, config: &SearchConfig) -> Result<Vec<Document>>;
}

#[derive(Clone)]
pub struct MavenCentralRegistry {
    client: reqwest::Client,
    base_url: String,
}

impl MavenCentralRegistry {
    pub fn new() -> Result<Self> {
        Self::with_base_url(MAVEN_SEARCH_BASE)
    }

    /// Creates a client for a Solr `select` endpoint other than Maven Central.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(SearchError::Transport)?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl Registry for MavenCentralRegistry {
    async fn search(&self, config: &SearchConfig) -> Result<Vec<Document>> {
        let url = search_url(&self.base_url, config);
        tracing::debug!("Querying Maven Central: {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(SearchError::Transport)?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            tracing::warn!("Maven Central returned HTTP {} for {}", status, url);
            return Err(SearchError::HttpStatus {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(SearchError::BodyRead)?;
        tracing::trace!("Response size: {} bytes", body.len());

        let docs = parse_search_response(&body)?;
        tracing::debug!("Maven Central returned {} documents", docs.len());
        Ok(docs)
    }
}

/// Builds the full request URL for `config` against `base`.
///
/// Precise lookups switch to the `gav` core and sort by timestamp, newest first.
pub fn search_url(base: &str, config: &SearchConfig) -> String {
    let mut url = format!(
        "{base}?q={q}&rows={rows}&wt=json",
        q = urlencoding::encode(&config.query),
        rows = config.rows,
    );
    if config.is_precise() {
        url.push_str("&core=gav&sort=");
        url.push_str(&urlencoding::encode("timestamp desc"));
    }
    url
}

#[derive(Deserialize)]
struct SolrSearchResponse {
    response: SolrSearchBody,
}

#[derive(Deserialize)]
struct SolrSearchBody {
    #[serde(default)]
    docs: Vec<Document>,
}

fn parse_search_response(data: &[u8]) -> Result<Vec<Document>> {
    let response: SolrSearchResponse = serde_json::from_slice(data)?;
    Ok(response.response.docs)
}
