use crate::rounds::effects::CameraCommand;
use crate::rounds::view::RoundView;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundResponse {
    pub error: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_code: Option<RoundEventError>,
    pub round: RoundView,
    /// Present only when the event moved the map camera.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub camera: Option<CameraCommand>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RoundEventError {
    MarkerLocked,
    InvalidCoordinates,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndSessionResponse {
    pub error: bool,
    pub ended: bool,
}
