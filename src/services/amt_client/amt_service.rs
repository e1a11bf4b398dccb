use async_trait::async_trait;
use serde::de::DeserializeOwned;
use urlencoding::encode;

use super::types::{
    amt_line_response::LineResponse, amt_service_error::AmtServiceError,
    amt_stop_response::StopResponse,
};

/// Where the board gets its departures and timetables from.
#[async_trait]
pub trait StopSource: Send + Sync {
    async fn fetch_stop(&self, code: &str) -> Result<StopResponse, AmtServiceError>;

    async fn fetch_line(&self, line: &str) -> Result<LineResponse, AmtServiceError>;
}

#[derive(Clone)]
pub struct AmtServiceConfig {
    pub host: String,
}

#[derive(Clone)]
pub struct AmtService {
    config: AmtServiceConfig,
    client: reqwest::Client,
}

impl AmtService {
    pub fn new(config: AmtServiceConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    fn url(&self, resource: &str, id: &str) -> String {
        format!(
            "{}/api/v1/{}/{}",
            self.config.host.trim_end_matches('/'),
            resource,
            encode(id)
        )
    }

    async fn get_json<T: DeserializeOwned>(&self, url: String) -> Result<T, AmtServiceError> {
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| AmtServiceError::Request {
                url: url.clone(),
                source,
            })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(AmtServiceError::Status { url, status });
        }

        let body = resp.text().await.map_err(|source| AmtServiceError::Request {
            url: url.clone(),
            source,
        })?;

        serde_json::from_str::<T>(&body).map_err(|source| AmtServiceError::Decode { url, source })
    }
}

#[async_trait]
impl StopSource for AmtService {
    async fn fetch_stop(&self, code: &str) -> Result<StopResponse, AmtServiceError> {
        self.get_json(self.url("stop", code)).await
    }

    async fn fetch_line(&self, line: &str) -> Result<LineResponse, AmtServiceError> {
        self.get_json(self.url("line", line)).await
    }
}
