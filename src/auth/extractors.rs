use crate::auth::passcode;
use crate::auth::responses::{PasscodeExtractionError, PasscodeExtractionReason};
use async_trait::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::StatusCode;
use axum::response::Json;

pub struct Player {
    pub public_id: String,
    pub private_id: String,
}

#[async_trait]
impl<S> FromRequestParts<S> for Player
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, Json<PasscodeExtractionError>);

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Some(passcode) = parts.headers.get("Passcode") else {
            return Err(rejection(PasscodeExtractionReason::NoPasscodeHeaderProvided));
        };
        let jwt_payload = passcode
            .to_str()
            .ok()
            .and_then(|passcode| passcode::decode(passcode).ok())
            .ok_or_else(|| rejection(PasscodeExtractionReason::InvalidPasscode))?;
        Ok(Player {
            public_id: jwt_payload.public_id,
            private_id: jwt_payload.private_id,
        })
    }
}

fn rejection(reason: PasscodeExtractionReason) -> (StatusCode, Json<PasscodeExtractionError>) {
    (
        StatusCode::UNAUTHORIZED,
        Json(PasscodeExtractionError {
            error: true,
            reason,
        }),
    )
}
