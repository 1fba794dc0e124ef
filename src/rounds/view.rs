use crate::map::models::LatLng;
use crate::rounds::consts::{
    GROUND_TRUTH_MARKER_LABEL, PLAYER_LABEL, PLAYER_MARKER_LABEL, POPUP_COORDINATES_DECIMALS,
    TABLE_COORDINATES_DECIMALS,
};
use crate::rounds::models::{PhaseKind, RoundState};
use crate::samples::deck::SampleDeck;
use serde::{Deserialize, Serialize};

/// Everything the client needs to draw the current round.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundView {
    pub round_index: usize,
    pub round_count: usize,
    pub image_url: String,
    pub phase: PhaseKind,
    pub submit_enabled: bool,
    pub markers: Vec<MarkerView>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub results: Option<ResultsPanel>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerView {
    pub kind: MarkerKind,
    pub position: LatLng,
    pub draggable: bool,
    pub popup: MarkerPopup,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MarkerKind {
    PlayerGuess,
    GroundTruth,
    ModelPrediction,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerPopup {
    pub label: String,
    pub coordinates: String,
}

/// The reveal table. Coordinates are formatted as `"lng, lat"`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultsPanel {
    pub locality: String,
    pub actual: String,
    pub player_guess: String,
    pub model_prediction: String,
    pub player_error_km: f64,
    pub model_error_km: f64,
    pub player_error_label: String,
    pub model_error_label: String,
    pub winner: Winner,
    pub winner_label: String,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Winner {
    Player,
    Model,
}

impl Winner {
    /// The closest guess wins; an exact tie goes to the player.
    pub fn decide(player_error_km: f64, model_error_km: f64) -> Self {
        if player_error_km <= model_error_km {
            Winner::Player
        } else {
            Winner::Model
        }
    }
}

pub fn render(state: &RoundState, deck: &SampleDeck) -> RoundView {
    let sample = deck.get(state.current_index());
    let player_marker = state.player_marker();
    let submitted = state.is_submitted();

    let mut markers = vec![marker(
        MarkerKind::PlayerGuess,
        player_marker,
        !submitted,
        PLAYER_MARKER_LABEL,
    )];
    let results = state.player_error_km().map(|player_error_km| {
        markers.push(marker(
            MarkerKind::GroundTruth,
            sample.ground_truth,
            false,
            GROUND_TRUTH_MARKER_LABEL,
        ));
        markers.push(marker(
            MarkerKind::ModelPrediction,
            sample.model_prediction,
            false,
            deck.model_name(),
        ));
        let winner = Winner::decide(player_error_km, sample.model_error_km);
        ResultsPanel {
            locality: sample.locality.label(),
            actual: sample.ground_truth.lng_lat_label(TABLE_COORDINATES_DECIMALS),
            player_guess: player_marker.lng_lat_label(TABLE_COORDINATES_DECIMALS),
            model_prediction: sample
                .model_prediction
                .lng_lat_label(TABLE_COORDINATES_DECIMALS),
            player_error_km,
            model_error_km: sample.model_error_km,
            player_error_label: format!("{player_error_km:.2} km"),
            model_error_label: format!("{:.2} km", sample.model_error_km),
            winner,
            winner_label: match winner {
                Winner::Player => PLAYER_LABEL.to_string(),
                Winner::Model => deck.model_name().to_string(),
            },
        }
    });

    RoundView {
        round_index: state.current_index(),
        round_count: deck.count().get(),
        image_url: sample.image_url(),
        phase: state.phase().kind(),
        submit_enabled: !submitted,
        markers,
        results,
    }
}

fn marker(kind: MarkerKind, position: LatLng, draggable: bool, label: &str) -> MarkerView {
    MarkerView {
        kind,
        position,
        draggable,
        popup: MarkerPopup {
            label: label.to_string(),
            coordinates: position.lat_lng_label(POPUP_COORDINATES_DECIMALS),
        },
    }
}
