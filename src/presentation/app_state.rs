// Application state for HTTP handlers
use crate::application::dashboard_service::DashboardService;
use crate::application::release_service::ReleaseService;
use crate::infrastructure::config::RingConfig;

#[derive(Clone)]
pub struct AppState {
    pub release_service: ReleaseService,
    pub dashboard_service: DashboardService,
    pub ring: RingConfig,
}
