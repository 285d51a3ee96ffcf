use async_trait::async_trait;
use reqwest::header::USER_AGENT;
use reqwest::{Client, Request};
use tracing::debug;

use crate::config::ServiceConfig;
use crate::error::{Result, SubgrabError};
use crate::fingerprint::Fingerprint;
use super::SubtitleFetcher;

/// SubDB operation selector for downloads
const DOWNLOAD_ACTION: &str = "download";

/// HTTP client for the SubDB download API
pub struct SubDbClient {
    client: Client,
    config: ServiceConfig,
}

impl SubDbClient {
    pub fn new(config: ServiceConfig) -> Result<Self> {
        let client = Client::builder().build()?;

        Ok(Self { client, config })
    }

    /// Build the lookup request for a fingerprint
    pub fn build_request(&self, fingerprint: &Fingerprint) -> Result<Request> {
        let request = self.client
            .get(&self.config.endpoint)
            .header(USER_AGENT, self.config.user_agent.as_str())
            .query(&[
                ("action", DOWNLOAD_ACTION),
                ("hash", fingerprint.as_str()),
                ("language", self.config.language.as_str()),
            ])
            .build()?;

        Ok(request)
    }
}

#[async_trait]
impl SubtitleFetcher for SubDbClient {
    async fn fetch(&self, fingerprint: &Fingerprint) -> Result<Vec<u8>> {
        let request = self.build_request(fingerprint)?;
        debug!("Requesting {}", request.url());

        let response = self.client.execute(request).await?;

        if !response.status().is_success() {
            return Err(SubgrabError::Fetch(format!(
                "SubDB returned HTTP {} for hash {}",
                response.status(), fingerprint
            )));
        }

        let bytes = response.bytes().await?;
        if bytes.is_empty() {
            return Err(SubgrabError::Fetch(format!(
                "SubDB returned an empty body for hash {}",
                fingerprint
            )));
        }

        debug!("Received {} subtitle bytes", bytes.len());
        Ok(bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fingerprint::digest;

    fn client_with(endpoint: &str) -> SubDbClient {
        let config = ServiceConfig {
            endpoint: endpoint.to_string(),
            ..ServiceConfig::default()
        };
        SubDbClient::new(config).unwrap()
    }

    #[test]
    fn test_request_carries_query_in_order() {
        let client = client_with("http://api.thesubdb.com/");
        let fingerprint = digest(b"abc");

        let request = client.build_request(&fingerprint).unwrap();
        assert_eq!(request.method(), reqwest::Method::GET);
        assert_eq!(request.url().host_str(), Some("api.thesubdb.com"));
        assert_eq!(
            request.url().query(),
            Some("action=download&hash=900150983cd24fb0d6963f7d28e17f72&language=en")
        );
    }

    #[test]
    fn test_request_uses_configured_language() {
        let config = ServiceConfig {
            language: "pt".to_string(),
            ..ServiceConfig::default()
        };
        let client = SubDbClient::new(config).unwrap();

        let request = client.build_request(&digest(b"")).unwrap();
        assert!(request.url().query().unwrap().ends_with("&language=pt"));
    }

    #[test]
    fn test_invalid_endpoint_fails_to_build() {
        let client = client_with("not a url");
        let err = client.build_request(&digest(b"")).unwrap_err();
        assert!(matches!(err, SubgrabError::Http(_)));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_an_error() {
        // Port 9 (discard) on localhost is not expected to accept HTTP
        let client = client_with("http://127.0.0.1:9/");
        let result = client.fetch(&digest(b"")).await;
        assert!(result.is_err());
    }

    #[test]
    fn test_user_agent_header_is_sent() {
        let client = client_with("http://api.thesubdb.com/");
        let request = client.build_request(&digest(b"")).unwrap();
        let agent = request.headers().get(USER_AGENT).unwrap().to_str().unwrap();
        assert!(agent.starts_with("SubDB/1.0 (subgrab/"));
    }
}
