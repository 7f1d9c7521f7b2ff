use std::sync::Arc;

use axum::Router;
use build_catalog::route::create_router;
use build_catalog::store::MemoryBuildStore;
use build_catalog::AppState;
use tokio::net::TcpListener;

pub fn test_router() -> Router {
    create_router(Arc::new(AppState::new(Arc::new(MemoryBuildStore::new()))))
}

/// Serve a fresh in-memory catalog on an ephemeral port and return its address.
#[allow(dead_code)]
pub async fn spawn_server() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, test_router()).await.unwrap();
    });
    addr.to_string()
}
