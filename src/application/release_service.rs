// Release service - Use case for listing releases
use crate::application::work_item_repository::WorkItemRepository;
use crate::domain::release::Release;
use std::sync::Arc;

#[derive(Clone)]
pub struct ReleaseService {
    repository: Arc<dyn WorkItemRepository>,
}

impl ReleaseService {
    pub fn new(repository: Arc<dyn WorkItemRepository>) -> Self {
        Self { repository }
    }

    pub async fn list_releases(&self) -> anyhow::Result<Vec<Release>> {
        self.repository.list_releases().await
    }
}
