//! Manually triggered, fetch-once data hook for the listing page.
//!
//! The query never refreshes on its own: a fetch is only requested when the
//! readiness flag goes from false to true, and whatever response comes back
//! is cached until the next such transition. In-flight requests are not
//! cancelled, so a response for an earlier matchup can land after the route
//! has moved on and will be shown.

use crate::api::BuildsApi;
use crate::error::AppResult;
use crate::schema::BuildOrder;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FetchStatus {
    Idle,
    Loading,
    Ready,
    Failed,
}

/// A fetch the caller has to issue against the remote surface.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchRequest {
    pub match_up: String,
}

impl FetchRequest {
    pub async fn send<A: BuildsApi + ?Sized>(&self, api: &A) -> AppResult<Vec<BuildOrder>> {
        api.get_builds_by_match_up(&self.match_up).await
    }
}

#[derive(Debug)]
pub struct BuildQuery {
    match_up: String,
    ready: bool,
    status: FetchStatus,
    data: Option<Vec<BuildOrder>>,
}

impl BuildQuery {
    pub fn new(match_up: impl Into<String>) -> Self {
        Self {
            match_up: match_up.into(),
            ready: false,
            status: FetchStatus::Idle,
            data: None,
        }
    }

    pub fn match_up(&self) -> &str {
        &self.match_up
    }

    pub fn status(&self) -> FetchStatus {
        self.status
    }

    /// Cached builds from the last successful fetch, or nothing.
    pub fn data(&self) -> &[BuildOrder] {
        self.data.as_deref().unwrap_or_default()
    }

    /// Swap the key used by the next fetch. Cached data stays until a new
    /// response replaces it.
    pub fn set_match_up(&mut self, match_up: impl Into<String>) {
        self.match_up = match_up.into();
    }

    /// Feed the readiness signal. Returns the request to issue when the
    /// signal rises; repeated `true` values do nothing.
    pub fn set_ready(&mut self, ready: bool) -> Option<FetchRequest> {
        let rising = ready && !self.ready;
        self.ready = ready;
        if !rising {
            return None;
        }

        self.status = FetchStatus::Loading;
        tracing::debug!(match_up = %self.match_up, "fetching builds");
        Some(FetchRequest {
            match_up: self.match_up.clone(),
        })
    }

    /// Apply the outcome of a request. Failures keep the previous cache.
    pub fn settle(&mut self, request: &FetchRequest, result: AppResult<Vec<BuildOrder>>) {
        if request.match_up != self.match_up {
            tracing::debug!(
                requested = %request.match_up,
                current = %self.match_up,
                "applying response for a previous matchup"
            );
        }

        match result {
            Ok(builds) => {
                self.data = Some(builds);
                self.status = FetchStatus::Ready;
            }
            Err(e) => {
                tracing::warn!(match_up = %request.match_up, "fetching builds failed: {}", e);
                self.status = FetchStatus::Failed;
            }
        }
    }

    /// Issue `request` against `api` and settle with the result.
    pub async fn run<A: BuildsApi + ?Sized>(&mut self, api: &A, request: FetchRequest) {
        let result = request.send(api).await;
        self.settle(&request, result);
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use uuid::Uuid;

    use super::*;
    use crate::api::MockBuildsApi;
    use crate::error::AppError;

    fn build(match_up: &str) -> BuildOrder {
        BuildOrder {
            id: Uuid::new_v4(),
            match_up: match_up.into(),
            style: "macro".into(),
            title: "t".into(),
            description: None,
            author: "a".into(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn starts_idle_and_empty() {
        let query = BuildQuery::new("TvZ");
        assert_eq!(query.status(), FetchStatus::Idle);
        assert!(query.data().is_empty());
    }

    #[test]
    fn fetch_requested_once_per_rising_edge() {
        let mut query = BuildQuery::new("TvZ");

        assert_eq!(query.set_ready(false), None);
        let request = query.set_ready(true).unwrap();
        assert_eq!(request.match_up, "TvZ");
        assert_eq!(query.status(), FetchStatus::Loading);

        assert_eq!(query.set_ready(true), None);
        assert_eq!(query.set_ready(false), None);
        assert!(query.set_ready(true).is_some());
    }

    #[test]
    fn failure_keeps_cached_data() {
        let mut query = BuildQuery::new("TvZ");
        let request = query.set_ready(true).unwrap();
        query.settle(&request, Ok(vec![build("TvZ")]));
        assert_eq!(query.status(), FetchStatus::Ready);

        query.set_ready(false);
        let request = query.set_ready(true).unwrap();
        assert_eq!(query.data().len(), 1);

        query.settle(&request, Err(AppError::Store(anyhow::anyhow!("down"))));
        assert_eq!(query.status(), FetchStatus::Failed);
        assert_eq!(query.data().len(), 1);
    }

    #[test]
    fn stale_response_is_still_applied() {
        let mut query = BuildQuery::new("TvZ");
        let stale = query.set_ready(true).unwrap();

        query.set_ready(false);
        query.set_match_up("TvP");
        let fresh = query.set_ready(true).unwrap();

        query.settle(&fresh, Ok(vec![build("TvP")]));
        query.settle(&stale, Ok(vec![build("TvZ")]));

        assert_eq!(query.data()[0].match_up, "TvZ");
    }

    #[tokio::test]
    async fn run_calls_the_api_with_the_request_key() {
        let mut api = MockBuildsApi::new();
        api.expect_get_builds_by_match_up()
            .times(1)
            .returning(|match_up| {
                assert_eq!(match_up, "ZvT");
                Ok(vec![build("ZvT")])
            });

        let mut query = BuildQuery::new("ZvT");
        let request = query.set_ready(true).unwrap();
        query.run(&api, request).await;

        assert_eq!(query.status(), FetchStatus::Ready);
        assert_eq!(query.data().len(), 1);
    }
}
