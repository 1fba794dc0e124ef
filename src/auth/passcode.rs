use crate::auth::JWT_SIGNING_KEY;
use hmac::Hmac;
use jwt::{SignWithKey, VerifyWithKey};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use uuid::Uuid;

/// Claims of a player's passcode. `private_id` keys the player's session and is never shown
/// to anyone; `public_id` is what appears in logs.
#[derive(Debug, Serialize, Deserialize)]
pub struct JwtPayload {
    pub public_id: String,
    pub private_id: String,
}

impl JwtPayload {
    pub fn random() -> Self {
        Self {
            public_id: Uuid::new_v4().to_string(),
            private_id: Uuid::new_v4().to_string(),
        }
    }
}

pub fn issue(payload: &JwtPayload) -> Result<String, jwt::Error> {
    payload.sign_with_key(signing_key())
}

pub fn decode(passcode: &str) -> Result<JwtPayload, jwt::Error> {
    passcode.verify_with_key(signing_key())
}

fn signing_key() -> &'static Hmac<Sha256> {
    JWT_SIGNING_KEY
        .get()
        .expect("`JWT_SIGNING_KEY` was not initialized.")
}
