use axum::middleware;
use axum::routing::{delete, get, post};
use axum::Router;

use crate::context::Context;
use crate::util::timer::request_timer;

pub mod comments;
pub mod entries;
pub mod prelude;
pub mod tags;

/// Builds the full routing table; every request is timed.
pub fn router(ctx: Context) -> Router {
    Router::new()
        .route("/entries", get(entries::index).post(entries::create))
        .route("/entries/{id}", get(entries::show).put(entries::update).delete(entries::delete))
        .route("/entries/{id}/complete", post(entries::complete))
        .route("/entries/{id}/comments", post(comments::create))
        .route("/entries/{id}/comments/{cid}", delete(comments::delete))
        .route("/entries/{id}/tag", post(tags::tag))
        .route("/entries/{id}/tags/{name}", delete(tags::untag))
        .route("/tags", get(tags::index))
        .route("/tags/{name}", get(tags::show))
        .layer(middleware::from_fn(request_timer))
        .with_state(ctx)
}
