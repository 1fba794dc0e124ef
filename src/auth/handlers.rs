use crate::auth::extractors::Player;
use crate::auth::passcode::{self, JwtPayload};
use crate::auth::responses::{DecodePasscodeResponse, IssuePasscodeError, IssuePasscodeResponse};
use axum::http::StatusCode;
use axum::response::Json;

pub async fn issue_passcode(
) -> Result<Json<IssuePasscodeResponse>, (StatusCode, Json<IssuePasscodeError>)> {
    let payload = JwtPayload::random();
    match passcode::issue(&payload) {
        Ok(passcode) => Ok(Json(IssuePasscodeResponse {
            error: false,
            passcode,
            public_id: payload.public_id,
        })),
        Err(err) => {
            tracing::error!("Failed to sign a passcode: {err}");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(IssuePasscodeError { error: true }),
            ))
        }
    }
}

pub async fn decode_passcode(player: Player) -> Json<DecodePasscodeResponse> {
    Json(DecodePasscodeResponse {
        error: false,
        public_id: player.public_id,
    })
}
