// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc};

use axum::{Router, routing::get};
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use crate::application::dashboard_service::DashboardService;
use crate::application::release_service::ReleaseService;
use crate::infrastructure::config::{load_rally_config, load_widgets_config};
use crate::infrastructure::rally_repository::RallyRepository;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{health_check, list_releases, show_dashboard};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration
    let rally_config = load_rally_config()?;
    let widgets_config = load_widgets_config()?;
    let ring = widgets_config.ring;

    // Create repository (infrastructure layer)
    let repository = Arc::new(RallyRepository::new(rally_config.rally));

    // Create services (application layer)
    let release_service = ReleaseService::new(repository.clone());
    let dashboard_service = DashboardService::new(repository, widgets_config);

    // Create application state
    let state = Arc::new(AppState {
        release_service,
        dashboard_service,
        ring,
    });

    // Build router (presentation layer)
    let router = Router::new()
        .route("/healthz", get(health_check))
        .route("/releases", get(list_releases))
        .route("/dashboards/:id", get(show_dashboard))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr: SocketAddr = "0.0.0.0:8080".parse()?;
    println!("Starting release-progress service on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
