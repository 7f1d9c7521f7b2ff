use anyhow::{anyhow, Result};
use sqlx::{query_as, Pool, Postgres};
use uuid::Uuid;

use crate::{model::BuildOrderModel, schema::NewBuildOrder};

pub async fn crud_get_builds_by_match_up(
    db: &Pool<Postgres>,
    match_up: &str,
) -> Result<Vec<BuildOrderModel>, anyhow::Error> {
    let builds: Vec<BuildOrderModel> = sqlx::query_as(
        r#"
        SELECT id, match_up, style, title, description, author, created_at
        FROM build_orders
        WHERE match_up = $1
        ORDER BY seq
        "#,
    )
    .bind(match_up)
    .fetch_all(db)
    .await
    .map_err(|e| anyhow!("Unable to query builds from db: {}", e))?;

    Ok(builds)
}

pub async fn crud_get_build(
    db: &Pool<Postgres>,
    id: Uuid,
) -> Result<Option<BuildOrderModel>, anyhow::Error> {
    let build: Option<BuildOrderModel> = sqlx::query_as(
        r#"
        SELECT id, match_up, style, title, description, author, created_at
        FROM build_orders
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(db)
    .await
    .map_err(|e| anyhow!("Unable to query build from db: {}", e))?;

    Ok(build)
}

pub async fn crud_create_build(
    db: &Pool<Postgres>,
    build: NewBuildOrder,
) -> Result<BuildOrderModel> {
    let id = Uuid::new_v4();

    let m: BuildOrderModel = query_as(
        r#"
        INSERT INTO build_orders (id, match_up, style, title, description, author)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id, match_up, style, title, description, author, created_at
        "#,
    )
    .bind(id)
    .bind(build.match_up)
    .bind(build.style)
    .bind(build.title)
    .bind(build.description)
    .bind(build.author)
    .fetch_one(db)
    .await
    .map_err(|e| anyhow!("Unable to insert build into db: {}", e))?;

    Ok(m)
}
