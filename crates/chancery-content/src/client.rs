//! Content Store query client.

use std::time::Duration;

use serde::Deserialize;
use serde::de::DeserializeOwned;

use chancery_config::ContentConfig;

use crate::documents::{AboutPage, Service, ServiceSummary, SiteSettings, Testimonial};
use crate::error::ContentError;
use crate::queries;

/// Response envelope returned by the query API.
#[derive(Deserialize)]
#[serde(bound(deserialize = "T: DeserializeOwned"))]
struct QueryResponse<T> {
    #[serde(default)]
    result: Option<T>,
}

/// Read-only client for the Content Store query API.
///
/// Every fetch is fallible (network, status, decode); an absent document is
/// the normal `Ok(None)` outcome, not an error. Requests carry an explicit
/// timeout and are never retried; page handlers degrade to the
/// content-missing state instead of waiting on a slow upstream.
pub struct ContentClient {
    http: reqwest::Client,
    query_url: String,
}

impl ContentClient {
    /// Create a client from content configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::Request`] if the underlying HTTP client
    /// cannot be constructed.
    pub fn from_config(config: &ContentConfig) -> Result<Self, ContentError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            query_url: format!(
                "{}/v{}/data/query/{}",
                config.api_base().trim_end_matches('/'),
                config.api_version,
                config.dataset
            ),
        })
    }

    /// Fetch the singleton site settings document.
    pub async fn site_settings(&self) -> Result<Option<SiteSettings>, ContentError> {
        self.fetch(queries::SITE_SETTINGS, &[]).await
    }

    /// Fetch all services in display order.
    pub async fn services(&self) -> Result<Vec<ServiceSummary>, ContentError> {
        Ok(self.fetch(queries::SERVICES, &[]).await?.unwrap_or_default())
    }

    /// Fetch one service by slug. `Ok(None)` when no such service exists.
    pub async fn service_by_slug(&self, slug: &str) -> Result<Option<Service>, ContentError> {
        self.fetch(queries::SERVICE_BY_SLUG, &[("slug", slug)]).await
    }

    /// Fetch the about page document.
    pub async fn about_page(&self) -> Result<Option<AboutPage>, ContentError> {
        self.fetch(queries::ABOUT_PAGE, &[]).await
    }

    /// Fetch all testimonials in display order.
    pub async fn testimonials(&self) -> Result<Vec<Testimonial>, ContentError> {
        Ok(self
            .fetch(queries::TESTIMONIALS, &[])
            .await?
            .unwrap_or_default())
    }

    /// Execute a query with bound parameters.
    ///
    /// Parameters are passed as `$name` query-string arguments with
    /// JSON-encoded values, which is how the query API expects bound values;
    /// they are never spliced into the query text.
    async fn fetch<T: DeserializeOwned>(
        &self,
        query: &str,
        params: &[(&str, &str)],
    ) -> Result<Option<T>, ContentError> {
        let mut request = self.http.get(&self.query_url).query(&[("query", query)]);
        for (name, value) in params {
            let encoded = serde_json::to_string(value).unwrap_or_default();
            request = request.query(&[(format!("${name}"), encoded)]);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "(unable to read error body)".to_owned());
            tracing::warn!(status = status.as_u16(), "content query failed");
            return Err(ContentError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let envelope: QueryResponse<T> = response.json().await?;
        Ok(envelope.result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_query_url_from_config() {
        let config = ContentConfig {
            project_id: "79kq4upu".to_owned(),
            ..Default::default()
        };
        let client = ContentClient::from_config(&config).unwrap();
        assert_eq!(
            client.query_url,
            "https://79kq4upu.api.sanity.io/v2025-08-05/data/query/production"
        );
    }

    #[test]
    fn test_query_url_honors_api_override() {
        let config = ContentConfig {
            project_id: "p".to_owned(),
            api_url: Some("http://localhost:3333/".to_owned()),
            dataset: "staging".to_owned(),
            ..Default::default()
        };
        let client = ContentClient::from_config(&config).unwrap();
        assert_eq!(
            client.query_url,
            "http://localhost:3333/v2025-08-05/data/query/staging"
        );
    }

    #[test]
    fn test_envelope_absent_result_is_none() {
        let envelope: QueryResponse<SiteSettings> = serde_json::from_str(r#"{"ms": 3}"#).unwrap();
        assert!(envelope.result.is_none());

        let envelope: QueryResponse<SiteSettings> =
            serde_json::from_str(r#"{"result": null}"#).unwrap();
        assert!(envelope.result.is_none());
    }

    #[test]
    fn test_envelope_list_result() {
        let envelope: QueryResponse<Vec<ServiceSummary>> = serde_json::from_str(
            r#"{"result": [{"_id": "a", "title": "A", "slug": {"current": "a"}}]}"#,
        )
        .unwrap();
        assert_eq!(envelope.result.unwrap().len(), 1);
    }
}
