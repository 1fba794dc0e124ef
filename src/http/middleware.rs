use crate::logging::consts::{DEFAULT_CLIENT_IP, FORWARDED_FOR_HEADER};
use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;

pub async fn tracing(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let client_ip = request
        .headers()
        .get(FORWARDED_FOR_HEADER)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .map(str::trim)
        .unwrap_or(DEFAULT_CLIENT_IP)
        .to_string();

    let start_time = Instant::now();
    let response = next.run(request).await;
    let processing_time_us = start_time.elapsed().as_micros() as u64;

    tracing::info!(
        task = "http_request",
        http_method = %method,
        endpoint = %path,
        client_ip = %client_ip,
        status = response.status().as_u16(),
        processing_time_us,
    );

    response
}
