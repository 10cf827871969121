// Dashboard service - Use case for building release dashboards
use crate::application::work_item_repository::WorkItemRepository;
use crate::domain::dashboard::{Dashboard, MeterData, TaskTotals};
use crate::domain::summary::{Summary, summarize};
use crate::infrastructure::config::{CategoryConfig, WidgetsConfig};
use futures::future::join_all;
use std::sync::Arc;

#[derive(Clone)]
pub struct DashboardService {
    repository: Arc<dyn WorkItemRepository>,
    widgets_config: WidgetsConfig,
}

impl DashboardService {
    pub fn new(repository: Arc<dyn WorkItemRepository>, widgets_config: WidgetsConfig) -> Self {
        Self {
            repository,
            widgets_config,
        }
    }

    pub async fn get_dashboard(&self, release_id: u64) -> anyhow::Result<Dashboard> {
        let release = self.repository.get_release(release_id).await?;

        // Load every configured category concurrently; each list is fully
        // fetched before its summary fold starts
        let loads = self
            .widgets_config
            .categories
            .iter()
            .map(|category| self.load_category(category, release_id));

        let mut combined = Summary::default();
        for (category, result) in self.widgets_config.categories.iter().zip(join_all(loads).await) {
            match result {
                Ok(summary) => {
                    tracing::debug!(
                        "Category {}: {}/{} items finished, {}/{} points",
                        category.id,
                        summary.count,
                        summary.total_count,
                        summary.points,
                        summary.total_points
                    );
                    combined = combined + summary;
                }
                Err(e) => {
                    tracing::error!("Error loading category {}: {}", category.id, e);
                }
            }
        }

        let meters = vec![
            MeterData::new("points", "Points", combined.points, combined.total_points),
            MeterData::new(
                "count",
                "Count",
                combined.count as f64,
                combined.total_count as f64,
            ),
        ];

        Ok(Dashboard::new(release, meters, TaskTotals::from(&combined)))
    }

    async fn load_category(
        &self,
        category: &CategoryConfig,
        release_id: u64,
    ) -> anyhow::Result<Summary> {
        let items = self
            .repository
            .fetch_work_items(&category.model, &category.fetch, release_id)
            .await?;

        Ok(summarize(&items, &category.status_field, &category.done_statuses))
    }
}
