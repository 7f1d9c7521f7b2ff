//! Record store for build orders.
//!
//! The Postgres store is what the server runs against in production; the
//! in-memory store stands in when no database is configured and in tests.

use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use sqlx::postgres::PgPool;
use uuid::Uuid;

use crate::crud::{crud_create_build, crud_get_build, crud_get_builds_by_match_up};
use crate::schema::{BuildOrder, NewBuildOrder};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BuildStore: Send + Sync {
    /// Persist a new record and return it with its generated id.
    async fn insert(&self, build: NewBuildOrder) -> Result<BuildOrder>;

    /// All records whose matchup equals `match_up` exactly, in insertion order.
    async fn find_by_match_up(&self, match_up: &str) -> Result<Vec<BuildOrder>>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<BuildOrder>>;
}

pub struct PgBuildStore {
    db: PgPool,
}

impl PgBuildStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    pub async fn migrate(&self) -> Result<()> {
        sqlx::migrate!("./migrations").run(&self.db).await?;
        Ok(())
    }
}

#[async_trait]
impl BuildStore for PgBuildStore {
    async fn insert(&self, build: NewBuildOrder) -> Result<BuildOrder> {
        Ok(crud_create_build(&self.db, build).await?.into())
    }

    async fn find_by_match_up(&self, match_up: &str) -> Result<Vec<BuildOrder>> {
        let builds = crud_get_builds_by_match_up(&self.db, match_up).await?;
        Ok(builds.into_iter().map(BuildOrder::from).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<BuildOrder>> {
        Ok(crud_get_build(&self.db, id).await?.map(BuildOrder::from))
    }
}

#[derive(Default)]
pub struct MemoryBuildStore {
    by_id: DashMap<Uuid, BuildOrder>,
    by_match_up: DashMap<String, Vec<BuildOrder>>,
}

impl MemoryBuildStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

#[async_trait]
impl BuildStore for MemoryBuildStore {
    async fn insert(&self, build: NewBuildOrder) -> Result<BuildOrder> {
        let record = BuildOrder {
            id: Uuid::new_v4(),
            match_up: build.match_up,
            style: build.style,
            title: build.title,
            description: build.description,
            author: build.author,
            created_at: Utc::now(),
        };

        self.by_id.insert(record.id, record.clone());
        self.by_match_up
            .entry(record.match_up.clone())
            .or_default()
            .push(record.clone());

        Ok(record)
    }

    async fn find_by_match_up(&self, match_up: &str) -> Result<Vec<BuildOrder>> {
        Ok(self
            .by_match_up
            .get(match_up)
            .map(|builds| builds.clone())
            .unwrap_or_default())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<BuildOrder>> {
        Ok(self.by_id.get(&id).map(|b| b.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_build(match_up: &str, title: &str) -> NewBuildOrder {
        NewBuildOrder {
            match_up: match_up.to_string(),
            style: "macro".to_string(),
            title: title.to_string(),
            description: None,
            author: "tester".to_string(),
        }
    }

    #[tokio::test]
    async fn insert_assigns_unique_ids() {
        let store = MemoryBuildStore::new();
        let a = store.insert(new_build("TvZ", "same")).await.unwrap();
        let b = store.insert(new_build("TvZ", "same")).await.unwrap();

        assert_ne!(a.id, b.id);
        assert_eq!(store.len(), 2);
    }

    #[tokio::test]
    async fn find_by_match_up_is_exact_and_ordered() {
        let store = MemoryBuildStore::new();
        store.insert(new_build("TvZ", "first")).await.unwrap();
        store.insert(new_build("TvP", "other")).await.unwrap();
        store.insert(new_build("TvZ", "second")).await.unwrap();

        let titles: Vec<String> = store
            .find_by_match_up("TvZ")
            .await
            .unwrap()
            .into_iter()
            .map(|b| b.title)
            .collect();
        assert_eq!(titles, vec!["first", "second"]);

        assert!(store.find_by_match_up("tvz").await.unwrap().is_empty());
        assert!(store.find_by_match_up("").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn find_by_id_returns_inserted_record() {
        let store = MemoryBuildStore::new();
        let created = store.insert(new_build("ZvZ", "ling bane")).await.unwrap();

        assert_eq!(store.find_by_id(created.id).await.unwrap(), Some(created));
        assert_eq!(store.find_by_id(Uuid::new_v4()).await.unwrap(), None);
    }
}
