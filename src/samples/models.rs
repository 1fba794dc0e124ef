use crate::map::models::LatLng;
use crate::samples::consts::IMAGES_ROUTE;
use serde::{Deserialize, Serialize};
use url::Url;

/// One street-view photograph together with the model's precomputed verdict on it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sample {
    /// Path relative to the images directory, or an absolute URL.
    pub image_ref: String,
    pub ground_truth: LatLng,
    pub model_prediction: LatLng,
    pub model_error_km: f64,
    pub locality: Locality,
}

impl Sample {
    pub fn image_url(&self) -> String {
        let is_web_url = Url::parse(&self.image_ref)
            .is_ok_and(|url| matches!(url.scheme(), "http" | "https"));
        if is_web_url || self.image_ref.starts_with('/') {
            return self.image_ref.clone();
        }
        format!("{IMAGES_ROUTE}/{}", self.image_ref)
    }

    pub fn validate(&self) -> Result<(), &'static str> {
        if self.image_ref.trim().is_empty() {
            return Err("empty image reference");
        }
        if !self.ground_truth.is_valid() {
            return Err("ground truth coordinates out of range");
        }
        if !self.model_prediction.is_valid() {
            return Err("model prediction coordinates out of range");
        }
        if !self.model_error_km.is_finite() || self.model_error_km < 0.0 {
            return Err("model error must be a non-negative number");
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Locality {
    pub city: String,
    pub region: String,
    pub country: String,
}

impl Locality {
    pub fn label(&self) -> String {
        format!("{}, {}, {}", self.city, self.region, self.country)
    }
}
