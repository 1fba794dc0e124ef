use crate::map::{self, models::LatLng};
use crate::rounds::consts::DEFAULT_MARKER;
use crate::rounds::effects::CameraCommand;
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Phase {
    Guessing,
    /// The player's error only exists once the guess has been submitted.
    Submitted { player_error_km: f64 },
}

impl Phase {
    pub fn kind(&self) -> PhaseKind {
        match self {
            Phase::Guessing => PhaseKind::Guessing,
            Phase::Submitted { .. } => PhaseKind::Submitted,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PhaseKind {
    Guessing,
    Submitted,
}

/// Progress of a single player through the sample deck.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RoundState {
    current_index: usize,
    phase: Phase,
    player_marker: LatLng,
}

impl Default for RoundState {
    fn default() -> Self {
        Self::new()
    }
}

impl RoundState {
    pub fn new() -> Self {
        Self {
            current_index: 0,
            phase: Phase::Guessing,
            player_marker: DEFAULT_MARKER,
        }
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn player_marker(&self) -> LatLng {
        self.player_marker
    }

    pub fn player_error_km(&self) -> Option<f64> {
        match self.phase {
            Phase::Guessing => None,
            Phase::Submitted { player_error_km } => Some(player_error_km),
        }
    }

    pub fn is_submitted(&self) -> bool {
        matches!(self.phase, Phase::Submitted { .. })
    }

    pub fn advance_round(&mut self, sample_count: NonZeroUsize) -> CameraCommand {
        let next_index = (self.current_index + 1) % sample_count.get();
        self.enter_round(next_index)
    }

    pub fn retreat_round(&mut self, sample_count: NonZeroUsize) -> CameraCommand {
        let count = sample_count.get();
        let previous_index = (self.current_index % count + count - 1) % count;
        self.enter_round(previous_index)
    }

    /// Returns `false` and leaves the marker in place once the guess is submitted.
    pub fn move_marker(&mut self, position: LatLng) -> bool {
        if self.is_submitted() {
            return false;
        }
        self.player_marker = position;
        true
    }

    /// Scores the marker against `ground_truth`. Does nothing if already submitted.
    pub fn submit_guess(&mut self, ground_truth: LatLng) -> Option<CameraCommand> {
        if self.is_submitted() {
            return None;
        }
        let player_error_km = map::distance_km(self.player_marker, ground_truth);
        self.phase = Phase::Submitted { player_error_km };
        Some(CameraCommand::reveal(ground_truth))
    }

    fn enter_round(&mut self, index: usize) -> CameraCommand {
        *self = Self {
            current_index: index,
            ..Self::new()
        };
        CameraCommand::overview()
    }
}
