use crate::map::consts::{MAX_LATITUDE, MAX_LONGITUDE};
use serde::{Deserialize, Serialize};

/// A point on the globe, in degrees.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && self.lat.abs() <= MAX_LATITUDE
            && self.lng.abs() <= MAX_LONGITUDE
    }

    /// `"lat, lng"` with the given number of decimals.
    pub fn lat_lng_label(&self, decimals: usize) -> String {
        format!("{:.*}, {:.*}", decimals, self.lat, decimals, self.lng)
    }

    /// `"lng, lat"` with the given number of decimals.
    pub fn lng_lat_label(&self, decimals: usize) -> String {
        format!("{:.*}, {:.*}", decimals, self.lng, decimals, self.lat)
    }
}
