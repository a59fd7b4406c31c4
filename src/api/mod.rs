//! HTTP surface: axum routes mapping requests onto the services.

mod error;
mod product_handlers;
mod user_handlers;

pub use error::ApiError;

use axum::body::Bytes;
use axum::Router;
use serde::de::DeserializeOwned;
use tower_http::trace::TraceLayer;
use tracing::debug;

use crate::services::{ProductService, UserService};

/// Shared handler state. Services are cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub products: ProductService,
    pub users: UserService,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(product_handlers::routes())
        .merge(user_handlers::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Parses a request body that carries an entity.
///
/// `Ok(None)` means there is no payload at all: an empty body or a literal
/// `null`. A body that is present but unreadable is a validation error.
fn parse_payload<T: DeserializeOwned>(body: &Bytes) -> Result<Option<T>, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }
    serde_json::from_slice::<Option<T>>(body).map_err(|e| {
        debug!(error = %e, "Unreadable payload");
        ApiError::Validation(e.to_string())
    })
}
