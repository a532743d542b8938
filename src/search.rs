// Content search collaborator
// Seam to an external video-understanding API that can search an index
// by text query. The engine only ever consumes match confidences; the
// indexing side of the service is not our concern.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;

use crate::constants::{SEARCH_PAGE_LIMIT, SEARCH_QUERIES};
use crate::error::{MilkMobError, Result};

/// One search hit for a query.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchMatch {
    pub video_id: String,
    #[serde(default)]
    pub confidence: f64,
}

#[async_trait]
pub trait ContentSearchService: Send + Sync {
    /// Search an index by text query, best matches first.
    async fn search(&self, index: &str, query: &str) -> Result<Vec<SearchMatch>>;
}

/// Average of the best per-query confidence for one video across the
/// fixed campaign query set. Queries with no hit for the video count as
/// zero, so a single lucky match cannot carry the score.
pub async fn campaign_content_score(
    service: &dyn ContentSearchService,
    index: &str,
    video_id: &str,
) -> Result<f64> {
    let mut total = 0.0;
    for query in SEARCH_QUERIES {
        let matches = service.search(index, query).await?;
        let best = matches
            .iter()
            .filter(|m| m.video_id == video_id)
            .map(|m| m.confidence)
            .fold(0.0, f64::max);
        total += best;
    }
    Ok(total / SEARCH_QUERIES.len() as f64)
}

/// HTTP-backed search client.
pub struct HttpSearchClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl HttpSearchClient {
    pub fn new(base_url: &str, api_key: &str, timeout_secs: u64) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| MilkMobError::Search(format!("failed to build http client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        })
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    data: Vec<SearchMatch>,
}

#[async_trait]
impl ContentSearchService for HttpSearchClient {
    async fn search(&self, index: &str, query: &str) -> Result<Vec<SearchMatch>> {
        let response = self
            .client
            .post(format!("{}/search", self.base_url))
            .header("x-api-key", &self.api_key)
            .json(&json!({
                "query": query,
                "index_id": index,
                "search_options": ["visual", "conversation", "text_in_video"],
                "page_limit": SEARCH_PAGE_LIMIT,
            }))
            .send()
            .await
            .map_err(|e| MilkMobError::Search(format!("search request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(MilkMobError::Search(format!(
                "search service returned {}",
                response.status()
            )));
        }

        let parsed: SearchResponse = response
            .json()
            .await
            .map_err(|e| MilkMobError::Search(format!("bad search response: {}", e)))?;

        Ok(parsed.data)
    }
}
