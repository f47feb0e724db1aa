use crate::domain::model::RawPlanet;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Retrieves the decoded JSON body behind a URL.
///
/// One call performs at most one request; implementations never retry or cache.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<RawPlanet>;
}

pub trait ConfigProvider: Send + Sync {
    fn api_endpoint(&self) -> &str;
    fn timeout_seconds(&self) -> Option<u64>;
    fn user_agent(&self) -> &str;
}

#[async_trait]
impl<F: Fetcher + ?Sized> Fetcher for std::sync::Arc<F> {
    async fn fetch(&self, url: &str) -> Result<RawPlanet> {
        (**self).fetch(url).await
    }
}
