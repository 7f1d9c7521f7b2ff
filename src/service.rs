use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::api::BuildsApi;
use crate::error::{AppError, AppResult};
use crate::schema::{BuildOrder, CreateBuildSchema};
use crate::store::BuildStore;

/// In-process query service over a record store.
#[derive(Clone)]
pub struct BuildService {
    store: Arc<dyn BuildStore>,
}

impl BuildService {
    pub fn new(store: Arc<dyn BuildStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl BuildsApi for BuildService {
    async fn create_build(&self, input: CreateBuildSchema) -> AppResult<BuildOrder> {
        let new_build = input.into_new_build()?;
        let build = self.store.insert(new_build).await?;
        tracing::info!(id = %build.id, match_up = %build.match_up, "created build");
        Ok(build)
    }

    async fn get_builds_by_match_up(&self, match_up: &str) -> AppResult<Vec<BuildOrder>> {
        if match_up.is_empty() {
            return Ok(Vec::new());
        }
        let builds = self.store.find_by_match_up(match_up).await?;
        tracing::debug!(match_up, count = builds.len(), "fetched builds");
        Ok(builds)
    }

    async fn get_build(&self, id: Uuid) -> AppResult<BuildOrder> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("build {}", id)))
    }
}
