use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;

use crate::result::ApiError;

/// Reads the request body and decodes it as JSON into `T`.
///
/// Unlike `axum::Json` this does not insist on a `content-type` header, and
/// every failure (unreadable body, malformed JSON, wrong shape) is reported
/// as `400 {"error": "<decoder message>"}` before the handler runs.
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where T: DeserializeOwned,
      S: Send + Sync {
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = Bytes::from_request(req, state).await
            .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

        serde_json::from_slice::<T>(&body)
            .map(JsonBody)
            .map_err(|err| {
                debug!("rejecting request body: {}", err);
                ApiError::BadRequest(err.to_string())
            })
    }
}
