use crate::cli::Args;
use http::header::{ACCEPT, CONTENT_TYPE, ORIGIN, REFERER, USER_AGENT};
use http::{HeaderName, Method};
use tower_http::cors::CorsLayer;

pub fn layer(args: &Args) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(args.allowed_origins.clone())
        .allow_headers([
            ACCEPT,
            CONTENT_TYPE,
            ORIGIN,
            REFERER,
            USER_AGENT,
            HeaderName::from_static("sec-fetch-mode"),
            HeaderName::from_static("passcode"),
        ])
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
}
