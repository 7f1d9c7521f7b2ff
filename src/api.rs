//! Remote procedure surface shared by the server and its clients.

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::AppResult;
use crate::schema::{BuildOrder, CreateBuildSchema};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BuildsApi: Send + Sync {
    /// Persist a new build. Duplicates are allowed.
    async fn create_build(&self, input: CreateBuildSchema) -> AppResult<BuildOrder>;

    /// Every build whose matchup equals `match_up` exactly. No match is an
    /// empty list, never an error.
    async fn get_builds_by_match_up(&self, match_up: &str) -> AppResult<Vec<BuildOrder>>;

    async fn get_build(&self, id: Uuid) -> AppResult<BuildOrder>;
}
