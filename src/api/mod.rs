mod handlers;

pub mod error;
pub mod validation;

pub use error::ApiError;
pub use validation::ValidationConfig;

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::store::Directory;

/// Shared handler state: the directory plus the id validation rule.
#[derive(Clone)]
pub struct AppState {
    pub directory: Directory,
    pub validation: ValidationConfig,
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        // Snacks
        .route("/snacks", get(handlers::list_snacks))
        .route("/snack/{id}", get(handlers::get_snack))
        .route("/snack/{id}", post(handlers::create_snack))
        .route("/snack/{id}", put(handlers::upsert_snack))
        .route("/snack/{id}", delete(handlers::delete_snack))
        // Extras
        .route("/secret", get(handlers::secret))
        .route("/throwerror", get(handlers::throw_error))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
