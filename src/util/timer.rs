use std::time::Instant;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;

/// Logs method, path, status and wall time for every request.
pub async fn request_timer(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path   = req.uri().path().to_owned();
    let start  = Instant::now();

    let resp = next.run(req).await;

    let delta = start.elapsed();
    info!("{} {} -> {} in {:.3}ms",
          method, path, resp.status().as_u16(), delta.as_secs_f64() * 1000.0);

    resp
}
