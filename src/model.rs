use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// For sqlx
#[derive(Debug, Clone, Deserialize, Serialize, sqlx::FromRow)]
pub struct BuildOrderModel {
    pub id: Uuid,
    pub match_up: String,
    pub style: String,
    pub title: String,
    pub description: Option<String>,
    pub author: String,
    pub created_at: DateTime<Utc>,
}
