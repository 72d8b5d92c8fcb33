//! JSON API over the curve generator, source table and calculator.

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use radrisk_common::error::ApiError;
use radrisk_common::{
    generate_curves, CalculatorInput, CurveSet, HormesisVariant, RadiationSource, RiskModel,
    RADIATION_SOURCES,
};
use serde::{Deserialize, Serialize};

use crate::state::SharedState;

#[derive(Debug, Deserialize, Default)]
pub struct CurveQuery {
    /// Comma-separated model ids, e.g. `lnt,threshold`. Empty means none.
    pub models: Option<String>,
    pub hormesis: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
pub struct EstimateQuery {
    pub flights: Option<i64>,
    pub xrays: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct EstimateResponse {
    pub flights: u32,
    pub xrays: u32,
    pub dose_msv: f64,
    pub message: String,
}

/// GET /api/sources
pub async fn api_sources() -> Json<&'static [RadiationSource]> {
    Json(&RADIATION_SOURCES[..])
}

/// GET /api/curves - sampled risk curves, defaulting to the configured models
pub async fn api_curves(
    State(state): State<SharedState>,
    query: Result<Query<CurveQuery>, QueryRejection>,
) -> Result<Json<CurveSet>, ApiError> {
    let Query(query) = query?;
    let site = &state.config.site;

    let models: Vec<RiskModel> = match query.models.as_deref() {
        Some(list) => parse_models(list)?,
        None => site.models.clone(),
    };
    let hormesis: HormesisVariant = match query.hormesis.as_deref() {
        Some(name) => name.parse()?,
        None => site.hormesis,
    };

    Ok(Json(generate_curves(&models, hormesis)))
}

fn parse_models(list: &str) -> Result<Vec<RiskModel>, ApiError> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<RiskModel>().map_err(ApiError::from))
        .collect()
}

/// GET /api/estimate?flights=&xrays= - missing values count as zero
pub async fn api_estimate(
    query: Result<Query<EstimateQuery>, QueryRejection>,
) -> Result<Json<EstimateResponse>, ApiError> {
    let Query(query) = query?;
    let input = CalculatorInput::new(query.flights.unwrap_or(0), query.xrays.unwrap_or(0))?;
    Ok(Json(EstimateResponse {
        flights: input.flights,
        xrays: input.xrays,
        dose_msv: input.estimate(),
        message: input.message(),
    }))
}
