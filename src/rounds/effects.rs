use crate::map::models::LatLng;
use crate::rounds::consts::{DEFAULT_MARKER, OVERVIEW_ZOOM, REVEAL_ZOOM};
use serde::{Deserialize, Serialize};

/// An instruction for the map widget, applied by the client and never awaited.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum CameraCommand {
    FlyTo { center: LatLng, zoom: f64 },
}

impl CameraCommand {
    pub fn overview() -> Self {
        Self::FlyTo {
            center: DEFAULT_MARKER,
            zoom: OVERVIEW_ZOOM,
        }
    }

    pub fn reveal(target: LatLng) -> Self {
        Self::FlyTo {
            center: target,
            zoom: REVEAL_ZOOM,
        }
    }
}
