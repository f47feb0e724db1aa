use crate::domain::model::RawPlanet;
use crate::domain::ports::{ConfigProvider, Fetcher};
use crate::utils::error::{PlanetError, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// 依配置建立 client（可選的 timeout 與 User-Agent）
    pub fn from_config(config: &dyn ConfigProvider) -> Result<Self> {
        let mut builder = Client::builder().user_agent(config.user_agent().to_string());

        if let Some(seconds) = config.timeout_seconds() {
            builder = builder.timeout(Duration::from_secs(seconds));
        }

        let client = builder
            .build()
            .map_err(|e| PlanetError::ConfigValidationError {
                field: "http_client".to_string(),
                message: format!("Failed to create HTTP client: {}", e),
            })?;

        Ok(Self { client })
    }

    fn transport_error(url: &str, reason: impl ToString) -> PlanetError {
        PlanetError::TransportError {
            url: url.to_string(),
            reason: reason.to_string(),
        }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<RawPlanet> {
        tracing::debug!("Making API request to: {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| Self::transport_error(url, e))?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);

        // 非 2xx 一律視為傳輸失敗，不把錯誤頁交給 mapper
        if !status.is_success() {
            return Err(Self::transport_error(
                url,
                format!("HTTP status {}", status),
            ));
        }

        // 用原始位元組解析，非 UTF-8 的內容要回報 DecodeError
        let body = response
            .bytes()
            .await
            .map_err(|e| Self::transport_error(url, e))?;

        serde_json::from_slice(&body).map_err(|e| PlanetError::DecodeError {
            url: url.to_string(),
            reason: e.to_string(),
        })
    }
}
