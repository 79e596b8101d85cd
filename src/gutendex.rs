use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::domain::DomainError;
use crate::services::query::SearchQuery;

const USER_AGENT: &str = "BiblioCatalog/1.0";

/// A book as the lookup service describes it, before normalization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub authors: Vec<RawAuthor>,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub download_count: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawAuthor {
    pub name: String,
    #[serde(default)]
    pub birth_year: Option<i32>,
    #[serde(default)]
    pub death_year: Option<i32>,
}

#[derive(Debug, Deserialize)]
struct GutendexResponse {
    #[serde(default)]
    results: Vec<RawRecord>,
}

/// Source of raw search payloads.
#[async_trait]
pub trait BookSource: Send + Sync {
    /// Run the search and return the undecoded JSON body
    async fn search(&self, query: &SearchQuery) -> Result<String, DomainError>;
}

/// Parse a search payload into raw records.
pub fn decode(payload: &str) -> Result<Vec<RawRecord>, DomainError> {
    if payload.trim().is_empty() {
        return Err(DomainError::ExternalService("empty JSON payload".to_string()));
    }

    let parsed: GutendexResponse = serde_json::from_str(payload).map_err(|e| {
        tracing::error!("Failed to decode Gutendex payload: {}", e);
        DomainError::from(e)
    })?;

    Ok(parsed.results)
}

pub struct GutendexClient {
    client: reqwest::Client,
    base_url: String,
}

impl GutendexClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .connect_timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| DomainError::ExternalService(format!("Failed to build client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.to_string(),
        })
    }

    fn url_for(&self, query: &SearchQuery) -> String {
        format!("{}?{}", self.base_url, query.to_query_string())
    }
}

#[async_trait]
impl BookSource for GutendexClient {
    async fn search(&self, query: &SearchQuery) -> Result<String, DomainError> {
        let url = self.url_for(query);
        tracing::info!("Requesting {}", url);

        let resp = self
            .client
            .get(&url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| DomainError::ExternalService(format!("Failed to send request: {}", e)))?;

        let status = resp.status();
        tracing::info!("Gutendex responded with {}", status);

        let body = resp
            .text()
            .await
            .map_err(|e| DomainError::ExternalService(format!("Failed to read response body: {}", e)))?;

        if !status.is_success() {
            tracing::error!("Gutendex error {}: {}", status, body);
            return Err(DomainError::ExternalService(format!(
                "HTTP {}: {}",
                status.as_u16(),
                body
            )));
        }

        tracing::debug!("Received {} bytes", body.len());
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_defaults_missing_fields() {
        let payload = r#"{
            "count": 2,
            "next": null,
            "results": [
                {
                    "id": 84,
                    "title": "Frankenstein",
                    "authors": [{"name": "Shelley, Mary", "birth_year": 1797, "death_year": 1851}],
                    "languages": ["en"],
                    "download_count": 71000
                },
                {"id": 1, "title": "Anonymous Pamphlet"}
            ]
        }"#;

        let records = decode(payload).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].authors[0].birth_year, Some(1797));
        assert_eq!(records[0].download_count, Some(71000));
        assert!(records[1].authors.is_empty());
        assert!(records[1].languages.is_empty());
        assert_eq!(records[1].download_count, None);
    }

    #[test]
    fn test_decode_rejects_empty_and_malformed_payloads() {
        assert!(matches!(decode("  "), Err(DomainError::ExternalService(_))));
        assert!(matches!(
            decode("{\"results\": 3}"),
            Err(DomainError::ExternalService(_))
        ));
    }

    #[test]
    fn test_url_carries_query_parameters() {
        let client =
            GutendexClient::new("https://gutendex.com/books/", Duration::from_secs(5)).unwrap();
        let url = client.url_for(&SearchQuery::by_topic("science fiction").unwrap());
        assert_eq!(url, "https://gutendex.com/books/?topic=science%20fiction");
    }
}
