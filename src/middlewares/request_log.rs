use axum::{extract::Request, middleware::Next, response::Response};
use tracing::info;

pub async fn request_log_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let response = next.run(request).await;
    info!("{} {} -> {}", method, uri, response.status());

    response
}
