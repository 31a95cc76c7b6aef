pub mod config;
pub mod db;
pub mod models;
pub mod routes;
pub mod store;

use std::sync::Arc;

use store::MessageStore;

pub struct AppState {
    pub store: Arc<dyn MessageStore>,
}
