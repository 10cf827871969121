// HTTP request handlers
use crate::domain::release::Release;
use crate::infrastructure::html_page::render_page;
use crate::presentation::app_state::AppState;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse},
};
use serde::Serialize;
use std::sync::Arc;

#[derive(Serialize)]
pub struct ReleaseDto {
    pub object_id: u64,
    pub name: String,
    pub date_range: String,
}

impl From<Release> for ReleaseDto {
    fn from(release: Release) -> Self {
        let date_range = release.date_range();
        Self {
            object_id: release.object_id,
            name: release.name,
            date_range,
        }
    }
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// List all releases
pub async fn list_releases(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match state.release_service.list_releases().await {
        Ok(releases) => {
            let dtos: Vec<ReleaseDto> = releases.into_iter().map(ReleaseDto::from).collect();
            Json(dtos)
        }
        Err(e) => {
            tracing::error!("Error fetching releases: {}", e);
            // Return empty list on error
            Json(Vec::new())
        }
    }
}

/// Render the dashboard for one release
pub async fn show_dashboard(
    Path(id): Path<u64>,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    let dashboard = match state.dashboard_service.get_dashboard(id).await {
        Ok(dashboard) => dashboard,
        Err(e) => {
            tracing::error!("Error building dashboard for release {}: {}", id, e);
            return (StatusCode::BAD_GATEWAY, "upstream query failed").into_response();
        }
    };

    match render_page(&dashboard, state.ring) {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            tracing::error!("Error rendering dashboard for release {}: {}", id, e);
            (StatusCode::INTERNAL_SERVER_ERROR, "render failed").into_response()
        }
    }
}
