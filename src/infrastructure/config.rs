use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct RallyConfig {
    pub rally: RallySettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RallySettings {
    pub host: String,
    pub api_key: String,
    pub workspace: Option<String>,
    #[serde(default = "default_pagesize")]
    pub pagesize: usize,
}

fn default_pagesize() -> usize {
    200
}

#[derive(Debug, Deserialize, Clone)]
pub struct WidgetsConfig {
    #[serde(default)]
    pub ring: RingConfig,
    #[serde(default)]
    pub categories: Vec<CategoryConfig>,
}

/// Canvas geometry shared by every rendered ring.
#[derive(Debug, Deserialize, Clone, Copy)]
pub struct RingConfig {
    #[serde(default = "default_ring_size")]
    pub size: f64,
    #[serde(default = "default_ring_offset")]
    pub offset: f64,
}

fn default_ring_size() -> f64 {
    80.0
}

fn default_ring_offset() -> f64 {
    10.0
}

impl Default for RingConfig {
    fn default() -> Self {
        Self {
            size: default_ring_size(),
            offset: default_ring_offset(),
        }
    }
}

/// One work item type shown on the dashboard: which API model to query,
/// which field carries its workflow status, and which statuses mean finished.
#[derive(Debug, Deserialize, Clone)]
pub struct CategoryConfig {
    pub id: String,
    pub model: String,
    pub status_field: String,
    pub done_statuses: Vec<String>,
    #[serde(default)]
    pub fetch: Vec<String>,
}

pub fn load_rally_config() -> anyhow::Result<RallyConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/rally"))
        .build()?;

    Ok(settings.try_deserialize()?)
}

pub fn load_widgets_config() -> anyhow::Result<WidgetsConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/widgets"))
        .build()?;

    Ok(settings.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ring_defaults() {
        let ring = RingConfig::default();
        assert_eq!(ring.size, 80.0);
        assert_eq!(ring.offset, 10.0);
    }

    #[test]
    fn test_widgets_config_deserializes_with_defaults() {
        let widgets: WidgetsConfig = serde_json::from_value(serde_json::json!({
            "categories": [{
                "id": "defects",
                "model": "Defect",
                "status_field": "State",
                "done_statuses": ["Closed"]
            }]
        }))
        .expect("valid widgets config");

        assert_eq!(widgets.ring.size, 80.0);
        assert_eq!(widgets.categories.len(), 1);
        assert!(widgets.categories[0].fetch.is_empty());
    }
}
