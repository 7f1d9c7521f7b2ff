//! HTTP client for the build catalog API.

use async_trait::async_trait;
use reqwest::Response;
use uuid::Uuid;

use crate::api::BuildsApi;
use crate::error::{AppError, AppResult};
use crate::schema::{BuildOrder, CreateBuildSchema, MatchUpQuery};

#[derive(Clone)]
pub struct HttpBuildsClient {
    base_url: String,
    client: reqwest::Client,
}

impl HttpBuildsClient {
    pub fn new(server_addr: &str) -> Self {
        let base_url = if server_addr.starts_with("http") {
            server_addr.trim_end_matches('/').to_string()
        } else {
            format!("http://{}", server_addr)
        };

        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn read<T: serde::de::DeserializeOwned>(response: Response) -> AppResult<T> {
        let status = response.status();
        if status.is_success() {
            return Ok(response.json().await?);
        }

        let message = response
            .json::<serde_json::Value>()
            .await
            .ok()
            .and_then(|body| body["error"].as_str().map(str::to_string))
            .unwrap_or_else(|| status.to_string());

        Err(match status.as_u16() {
            404 => AppError::NotFound(message),
            400 | 422 => AppError::Validation(message),
            code => AppError::Remote {
                status: code,
                message,
            },
        })
    }
}

#[async_trait]
impl BuildsApi for HttpBuildsClient {
    async fn create_build(&self, input: CreateBuildSchema) -> AppResult<BuildOrder> {
        let url = format!("{}/api/builds", self.base_url);
        let response = self.client.post(&url).json(&input).send().await?;
        Self::read(response).await
    }

    async fn get_builds_by_match_up(&self, match_up: &str) -> AppResult<Vec<BuildOrder>> {
        let url = format!("{}/api/builds", self.base_url);
        let query = MatchUpQuery {
            match_up: match_up.to_string(),
        };
        let response = self.client.get(&url).query(&query).send().await?;
        Self::read(response).await
    }

    async fn get_build(&self, id: Uuid) -> AppResult<BuildOrder> {
        let url = format!("{}/api/builds/{}", self.base_url, id);
        let response = self.client.get(&url).send().await?;
        Self::read(response).await
    }
}
