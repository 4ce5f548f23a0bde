//! Closeout Report API module

mod handler;

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/closeout-reports", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list))
        .route("/", post(handler::create))
        .route("/{id}", get(handler::get_by_id))
        .route("/{id}", put(handler::update))
        .route("/{id}", delete(handler::delete))
}
