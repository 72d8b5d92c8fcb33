//! Reactive update channel used by the calculator sliders.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use radrisk_common::error::ApiError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::callbacks::Inputs;
use crate::state::SharedState;

#[derive(Debug, Deserialize)]
pub struct UpdateRequest {
    pub output: String,
    #[serde(default)]
    pub inputs: Inputs,
}

#[derive(Debug, Serialize)]
pub struct UpdateResponse {
    pub output: String,
    pub value: Value,
}

/// POST /api/update
pub async fn update(
    State(state): State<SharedState>,
    req: Result<Json<UpdateRequest>, JsonRejection>,
) -> Result<Json<UpdateResponse>, ApiError> {
    let Json(req) = req?;
    let value = state.callbacks.dispatch(&req.output, &req.inputs)?;
    Ok(Json(UpdateResponse { output: req.output, value }))
}
