//! The single page: intro, source chart, risk curves, calculator, FAQ.

use axum::{
    extract::State,
    http::header,
    response::{Html, IntoResponse},
};
use minijinja::context;
use radrisk_common::error::ApiError;

use crate::state::{SharedState, INDEX_TEMPLATE};
use crate::view::render_page;

pub const MAIN_CSS: &str = include_str!("../../static/css/main.css");

pub async fn index(State(state): State<SharedState>) -> Result<Html<String>, ApiError> {
    let page = render_page(&state.config.site);

    let html = state
        .templates
        .get_template(INDEX_TEMPLATE)
        .and_then(|tmpl| tmpl.render(context! { page => page }))
        .map_err(|e| ApiError::Internal(format!("Template rendering failed: {e}")))?;

    Ok(Html(html))
}

pub async fn stylesheet() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], MAIN_CSS)
}
