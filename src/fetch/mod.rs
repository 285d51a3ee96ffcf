// Subtitle lookup abstraction
//
// The workflow only depends on SubtitleFetcher; SubDbClient is the
// production implementation talking to the SubDB HTTP API.

pub mod subdb;

use async_trait::async_trait;

pub use subdb::*;

use crate::config::ServiceConfig;
use crate::error::Result;
use crate::fingerprint::Fingerprint;

/// Looks up subtitle content for a fingerprinted video
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubtitleFetcher: Send + Sync {
    /// Fetch raw subtitle bytes; any failure means no subtitle for this file
    async fn fetch(&self, fingerprint: &Fingerprint) -> Result<Vec<u8>>;
}

/// Factory for creating fetcher instances
pub struct SubtitleFetcherFactory;

impl SubtitleFetcherFactory {
    /// Create the default fetcher (SubDB over HTTP)
    pub fn create_fetcher(config: ServiceConfig) -> Result<Box<dyn SubtitleFetcher>> {
        Ok(Box::new(SubDbClient::new(config)?))
    }
}
