use crate::app_context::{AppContext, RequestContext};
use crate::map::models::LatLng;
use crate::rounds::effects::CameraCommand;
use crate::rounds::models::RoundState;
use crate::rounds::responses::{EndSessionResponse, RoundEventError, RoundResponse};
use crate::rounds::view;
use crate::storage::interface::ISessionStorage;

pub struct RoundsHttpHandler<'a, SS: ISessionStorage> {
    app_context: AppContext<SS>,
    request_context: &'a RequestContext,
}

impl<'a, SS> RoundsHttpHandler<'a, SS>
where
    SS: ISessionStorage,
{
    pub fn new(app_context: AppContext<SS>, request_context: &'a RequestContext) -> Self {
        Self {
            app_context,
            request_context,
        }
    }

    pub async fn current(&self) -> RoundResponse {
        let state = self
            .app_context
            .sessions
            .round_state(&self.request_context.private_id)
            .await;
        self.respond(&state, None, None)
    }

    pub async fn next(&self) -> RoundResponse {
        let sample_count = self.app_context.samples.count();
        let (state, camera) = self
            .app_context
            .sessions
            .apply(&self.request_context.private_id, |state| {
                state.advance_round(sample_count)
            })
            .await;
        self.log_event("advance_round", &state);
        self.respond(&state, Some(camera), None)
    }

    pub async fn previous(&self) -> RoundResponse {
        let sample_count = self.app_context.samples.count();
        let (state, camera) = self
            .app_context
            .sessions
            .apply(&self.request_context.private_id, |state| {
                state.retreat_round(sample_count)
            })
            .await;
        self.log_event("retreat_round", &state);
        self.respond(&state, Some(camera), None)
    }

    pub async fn move_marker(&self, position: LatLng) -> RoundResponse {
        if !position.is_valid() {
            let state = self
                .app_context
                .sessions
                .round_state(&self.request_context.private_id)
                .await;
            return self.respond(&state, None, Some(RoundEventError::InvalidCoordinates));
        }
        let (state, moved) = self
            .app_context
            .sessions
            .apply(&self.request_context.private_id, |state| {
                state.move_marker(position)
            })
            .await;
        let error_code = (!moved).then_some(RoundEventError::MarkerLocked);
        self.respond(&state, None, error_code)
    }

    pub async fn submit(&self) -> RoundResponse {
        let samples = &self.app_context.samples;
        let (state, camera) = self
            .app_context
            .sessions
            .apply(&self.request_context.private_id, |state| {
                let ground_truth = samples.get(state.current_index()).ground_truth;
                state.submit_guess(ground_truth)
            })
            .await;
        if camera.is_some() {
            self.log_event("submit_guess", &state);
        }
        self.respond(&state, camera, None)
    }

    pub async fn end(&self) -> EndSessionResponse {
        let ended = self
            .app_context
            .sessions
            .end(&self.request_context.private_id)
            .await;
        let sessions_count = self.app_context.sessions.count().await;
        tracing::info!(
            public_id = %self.request_context.public_id,
            sessions_count,
            "Session ended."
        );
        EndSessionResponse {
            error: false,
            ended,
        }
    }

    fn respond(
        &self,
        state: &RoundState,
        camera: Option<CameraCommand>,
        error_code: Option<RoundEventError>,
    ) -> RoundResponse {
        RoundResponse {
            error: error_code.is_some(),
            error_code,
            round: view::render(state, &self.app_context.samples),
            camera,
        }
    }

    fn log_event(&self, event: &'static str, state: &RoundState) {
        tracing::info!(
            task = "round_event",
            event,
            public_id = %self.request_context.public_id,
            round_index = state.current_index() as u64,
            player_error_km = state.player_error_km(),
        );
    }
}
