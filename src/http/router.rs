use crate::app_context::AppContext;
use crate::cli::Args;
use crate::http::cors;
use crate::samples::consts::IMAGES_ROUTE;
use crate::storage::sessions::HashMapSessionStorage;
use crate::{auth, health, rounds, samples};
use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::services::ServeDir;

pub fn new(args: &Args, app_context: AppContext<HashMapSessionStorage>) -> Router {
    let cors_policy = cors::layer(args);
    tracing::info!("Initialized HTTP configuration.");

    let health_routes = Router::new().route("/check", get(health::handlers::healthcheck));
    let auth_routes = Router::new()
        .route("/passcode", post(auth::handlers::issue_passcode))
        .route("/passcode/decode", get(auth::handlers::decode_passcode));
    let rounds_routes = Router::new()
        .route("/current", get(rounds::handlers::current))
        .route("/next", post(rounds::handlers::next))
        .route("/previous", post(rounds::handlers::previous))
        .route("/marker", post(rounds::handlers::move_marker))
        .route("/submit", post(rounds::handlers::submit))
        .route("/session", delete(rounds::handlers::end_session));

    Router::new()
        .nest("/health", health_routes)
        .nest("/auth", auth_routes)
        .nest("/rounds", rounds_routes)
        .route("/samples", get(samples::handlers::info))
        .nest_service(IMAGES_ROUTE, ServeDir::new(&args.images_dir))
        .with_state(app_context)
        .layer(cors_policy)
        .layer(axum::middleware::from_fn(crate::http::middleware::tracing))
}
