use crate::session::tracker::RequestId;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use std::time::Instant;

pub async fn log_requests(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let uri = req.uri().clone();
    let request_id = req
        .extensions()
        .get::<RequestId>()
        .map(|id| id.0.clone())
        .unwrap_or_default();
    let started = Instant::now();

    let response = next.run(req).await;

    tracing::info!(
        "[{}] \"{} {}\" {} in {:?}",
        request_id,
        method,
        uri,
        response.status().as_u16(),
        started.elapsed()
    );

    response
}
