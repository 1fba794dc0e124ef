use crate::app_context::{AppContext, RequestContext};
use crate::auth::extractors::Player;
use crate::map::models::LatLng;
use crate::rounds::responses::{EndSessionResponse, RoundResponse};
use crate::rounds::services::RoundsHttpHandler;
use crate::storage::sessions::HashMapSessionStorage;
use axum::extract::State;
use axum::response::Json;

fn request_context(player: Player) -> RequestContext {
    RequestContext {
        public_id: player.public_id,
        private_id: player.private_id,
    }
}

#[axum::debug_handler]
pub async fn current(
    player: Player,
    State(app_context): State<AppContext<HashMapSessionStorage>>,
) -> Json<RoundResponse> {
    let request_context = request_context(player);
    let response = RoundsHttpHandler::new(app_context, &request_context)
        .current()
        .await;
    Json(response)
}

#[axum::debug_handler]
pub async fn next(
    player: Player,
    State(app_context): State<AppContext<HashMapSessionStorage>>,
) -> Json<RoundResponse> {
    let request_context = request_context(player);
    let response = RoundsHttpHandler::new(app_context, &request_context)
        .next()
        .await;
    Json(response)
}

#[axum::debug_handler]
pub async fn previous(
    player: Player,
    State(app_context): State<AppContext<HashMapSessionStorage>>,
) -> Json<RoundResponse> {
    let request_context = request_context(player);
    let response = RoundsHttpHandler::new(app_context, &request_context)
        .previous()
        .await;
    Json(response)
}

#[axum::debug_handler]
pub async fn move_marker(
    player: Player,
    State(app_context): State<AppContext<HashMapSessionStorage>>,
    Json(position): Json<LatLng>,
) -> Json<RoundResponse> {
    let request_context = request_context(player);
    let response = RoundsHttpHandler::new(app_context, &request_context)
        .move_marker(position)
        .await;
    Json(response)
}

#[axum::debug_handler]
pub async fn submit(
    player: Player,
    State(app_context): State<AppContext<HashMapSessionStorage>>,
) -> Json<RoundResponse> {
    let request_context = request_context(player);
    let response = RoundsHttpHandler::new(app_context, &request_context)
        .submit()
        .await;
    Json(response)
}

#[axum::debug_handler]
pub async fn end_session(
    player: Player,
    State(app_context): State<AppContext<HashMapSessionStorage>>,
) -> Json<EndSessionResponse> {
    let request_context = request_context(player);
    let response = RoundsHttpHandler::new(app_context, &request_context)
        .end()
        .await;
    Json(response)
}
