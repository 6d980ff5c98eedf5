//! Axum route handlers for the CV page.

use axum::{
    extract::{Query, State},
    response::Html,
    Json,
};
use chrono::Utc;
use serde::Deserialize;
use tracing::debug;

use crate::errors::AppError;
use crate::models::cv::Cv;
use crate::state::AppState;
use crate::view::{render_page, Media, RenderContext};

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    pub media: Option<String>,
}

fn parse_media(raw: Option<&str>) -> Result<Media, AppError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(Media::Screen),
        Some(m) if m.eq_ignore_ascii_case("screen") => Ok(Media::Screen),
        Some(m) if m.eq_ignore_ascii_case("print") => Ok(Media::Print),
        Some(other) => Err(AppError::Validation(format!(
            "media must be 'screen' or 'print', got '{other}'"
        ))),
    }
}

fn render_for(cv: &Cv, media: Media) -> Html<String> {
    let ctx = RenderContext {
        hide: &cv.profile.hide,
        media: &media,
        today: Utc::now().date_naive(),
    };
    debug!("Rendering page for {} media", media.as_str());
    Html(render_page(cv, &ctx))
}

/// GET /?media=screen|print
pub async fn handle_page(
    State(state): State<AppState>,
    Query(params): Query<PageQuery>,
) -> Result<Html<String>, AppError> {
    let media = parse_media(params.media.as_deref())?;
    Ok(render_for(&state.cv, media))
}

/// GET /print
pub async fn handle_print_page(State(state): State<AppState>) -> Html<String> {
    render_for(&state.cv, Media::Print)
}

/// GET /api/v1/cv
pub async fn handle_get_cv(State(state): State<AppState>) -> Json<Cv> {
    Json(state.cv.as_ref().clone())
}
