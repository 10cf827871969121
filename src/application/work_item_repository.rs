// Repository trait for work tracking data access
use crate::domain::release::Release;
use crate::domain::work_item::WorkItem;
use async_trait::async_trait;

#[async_trait]
pub trait WorkItemRepository: Send + Sync {
    /// List all releases visible to the configured credentials
    async fn list_releases(&self) -> anyhow::Result<Vec<Release>>;

    /// Look up a single release by its object id
    async fn get_release(&self, object_id: u64) -> anyhow::Result<Release>;

    /// Fetch every work item of `model` scoped to a release, with the given
    /// fields populated
    async fn fetch_work_items(
        &self,
        model: &str,
        fetch: &[String],
        release_id: u64,
    ) -> anyhow::Result<Vec<WorkItem>>;
}
