pub use axum::extract::{Path, State};
pub use axum::http::StatusCode;
pub use axum::Json;

pub use docket_web::mw::{param, JsonBody};
pub use docket_web::Result;

pub use crate::context::Context;
pub use crate::models::queries;
