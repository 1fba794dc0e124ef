use crate::app_context::AppContext;
use crate::samples::responses::SamplesInfoResponse;
use crate::storage::sessions::HashMapSessionStorage;
use axum::extract::State;
use axum::response::Json;

#[axum::debug_handler]
pub async fn info(
    State(app_context): State<AppContext<HashMapSessionStorage>>,
) -> Json<SamplesInfoResponse> {
    Json(SamplesInfoResponse {
        count: app_context.samples.count().get(),
        model_name: app_context.samples.model_name().to_string(),
    })
}
