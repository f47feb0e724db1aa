use crate::domain::model::RawPlanet;
use crate::domain::ports::Fetcher;
use crate::utils::error::{PlanetError, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

/// In-memory [`Fetcher`] that answers with canned bodies keyed by exact URL.
///
/// Used in tests and for offline runs; an unknown URL fails like an
/// unreachable host.
#[derive(Debug, Default)]
pub struct StubFetcher {
    responses: HashMap<String, RawPlanet>,
    calls: Mutex<Vec<String>>,
}

impl StubFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_response(mut self, url: impl Into<String>, body: RawPlanet) -> Self {
        self.insert(url, body);
        self
    }

    pub fn insert(&mut self, url: impl Into<String>, body: RawPlanet) {
        self.responses.insert(url.into(), body);
    }

    /// 依呼叫順序回傳收到的 URL
    pub fn calls(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

#[async_trait]
impl Fetcher for StubFetcher {
    async fn fetch(&self, url: &str) -> Result<RawPlanet> {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(url.to_string());

        self.responses
            .get(url)
            .cloned()
            .ok_or_else(|| PlanetError::TransportError {
                url: url.to_string(),
                reason: "no stubbed response for this URL".to_string(),
            })
    }
}
