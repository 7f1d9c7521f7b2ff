pub mod api;
pub mod client;
pub mod components;
pub mod config;
pub mod crud;
pub mod error;
pub mod handler;
pub mod listing;
pub mod model;
pub mod route;
pub mod schema;
pub mod service;
pub mod store;

use std::sync::Arc;

use service::BuildService;
use store::BuildStore;

pub struct AppState {
    pub builds: BuildService,
}

impl AppState {
    pub fn new(store: Arc<dyn BuildStore>) -> Self {
        Self {
            builds: BuildService::new(store),
        }
    }
}
