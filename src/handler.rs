use std::sync::Arc;

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::response::{Html, IntoResponse};
use axum::Json;
use uuid::Uuid;

use crate::api::BuildsApi;
use crate::components::{escape_html, Badge};
use crate::error::AppError;
use crate::listing::{ListingPage, RouteParams};
use crate::schema::{CreateBuildSchema, ListingParams, MatchUpQuery, Style};
use crate::AppState;

pub async fn health_handler() -> &'static str {
    "ok"
}

pub async fn get_builds_by_match_up_handler(
    query: Result<Query<MatchUpQuery>, QueryRejection>,
    State(data): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let Query(query) = query?;
    let builds = data.builds.get_builds_by_match_up(&query.match_up).await?;
    Ok(Json(builds))
}

pub async fn create_build_handler(
    State(data): State<Arc<AppState>>,
    payload: Result<Json<CreateBuildSchema>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(input) = payload?;
    Ok(Json(data.builds.create_build(input).await?))
}

pub async fn get_build_by_id_handler(
    id: Result<Path<Uuid>, PathRejection>,
    State(data): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id?;
    Ok(Json(data.builds.get_build(id).await?))
}

/// Server-rendered listing. Every request is a fresh page view, so each
/// style or search submit runs the matchup fetch again; the fetch-once
/// guard in [`ListingPage`] only holds within one page instance.
pub async fn listing_page_handler(
    Path(params): Path<RouteParams>,
    opts: Option<Query<ListingParams>>,
    State(data): State<Arc<AppState>>,
) -> Html<String> {
    let Query(opts) = opts.unwrap_or_default();

    let mut page = ListingPage::new(params);
    if let Some(style) = opts.style.as_deref().and_then(|s| Style::try_from(s).ok()) {
        page.select_style(style);
    }
    if let Some(search) = opts.search {
        page.set_search(search);
    }

    // Path parameters are resolved by the time the handler runs.
    if let Some(request) = page.set_router_ready(true) {
        page.query_mut().run(&data.builds, request).await;
    }

    Html(page.render())
}

pub async fn build_detail_page_handler(
    id: Result<Path<Uuid>, PathRejection>,
    State(data): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id?;
    let build = data.builds.get_build(id).await?;

    let html = format!(
        concat!(
            "<!DOCTYPE html><html><head><title>{title}</title></head><body>",
            r#"<main class="container m-auto flex flex-col gap-8 pt-12">"#,
            r#"<h1 class="text-4xl text-white">{title}</h1>"#,
            "<p>{match_up} &middot; {badge}</p>",
            r#"<pre class="whitespace-pre-wrap">{description}</pre>"#,
            "<p>Created by {author}</p>",
            "</main></body></html>"
        ),
        title = escape_html(&build.title),
        match_up = escape_html(&build.match_up),
        badge = Badge::for_style(&build.style).render(),
        description = escape_html(build.description.as_deref().unwrap_or_default()),
        author = escape_html(&build.author),
    );

    Ok(Html(html))
}
