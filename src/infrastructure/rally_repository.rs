// Rally WSAPI repository implementation
use crate::application::work_item_repository::WorkItemRepository;
use crate::domain::release::Release;
use crate::domain::work_item::WorkItem;
use crate::infrastructure::config::RallySettings;
use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::{Map, Value};

const RELEASE_FETCH: &str = "ObjectID,Name,ReleaseStartDate,ReleaseDate";

#[derive(Debug, Clone)]
pub struct RallyRepository {
    host: String,
    api_key: String,
    workspace: Option<String>,
    pagesize: usize,
    client: reqwest::Client,
}

#[derive(Debug, Deserialize)]
struct WsapiResponse {
    #[serde(rename = "QueryResult")]
    query_result: QueryResult,
}

#[derive(Debug, Deserialize)]
struct QueryResult {
    #[serde(rename = "Errors", default)]
    errors: Vec<String>,
    #[serde(rename = "Warnings", default)]
    warnings: Vec<String>,
    #[serde(rename = "TotalResultCount", default)]
    total_result_count: u64,
    #[serde(rename = "Results", default)]
    results: Vec<Map<String, Value>>,
}

impl RallyRepository {
    pub fn new(settings: RallySettings) -> Self {
        Self {
            host: settings.host.trim_end_matches('/').to_string(),
            api_key: settings.api_key,
            workspace: settings.workspace,
            pagesize: settings.pagesize,
            client: reqwest::Client::new(),
        }
    }

    fn build_query_url(&self, object_type: &str, query: &str, fetch: &str, start: usize) -> String {
        let mut url = format!(
            "{}/slm/webservice/v2.0/{}?query={}&fetch={}&start={}&pagesize={}",
            self.host,
            object_type,
            urlencoding::encode(query),
            urlencoding::encode(fetch),
            start,
            self.pagesize
        );
        if let Some(workspace) = &self.workspace {
            url.push_str("&workspace=");
            url.push_str(&urlencoding::encode(workspace));
        }
        url
    }

    async fn execute_query(&self, url: &str) -> Result<QueryResult> {
        let response = self
            .client
            .get(url)
            .header("ZSESSIONID", &self.api_key)
            .header("Accept", "application/json")
            .send()
            .await
            .context("Failed to send request to Rally")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Rally query failed with status {}: {}", status, body);
        }

        let data = response
            .json::<WsapiResponse>()
            .await
            .context("Failed to parse Rally response")?;

        let result = data.query_result;
        if !result.errors.is_empty() {
            anyhow::bail!("Rally query errors: {}", result.errors.join("; "));
        }
        for warning in &result.warnings {
            tracing::warn!("Rally query warning: {}", warning);
        }

        Ok(result)
    }

    /// Fetch every page of a query. The widget wants the whole result set, so
    /// this keeps requesting until `TotalResultCount` rows have arrived.
    async fn fetch_all(
        &self,
        object_type: &str,
        query: &str,
        fetch: &str,
    ) -> Result<Vec<Map<String, Value>>> {
        let mut rows = Vec::new();
        let mut start = 1;

        loop {
            let url = self.build_query_url(object_type, query, fetch, start);
            tracing::debug!("Executing Rally query: {}", url);
            let result = self.execute_query(&url).await?;

            let page_len = result.results.len();
            rows.extend(result.results);

            if page_len == 0 || rows.len() as u64 >= result.total_result_count {
                break;
            }
            start += page_len;
        }

        Ok(rows)
    }
}

#[async_trait]
impl WorkItemRepository for RallyRepository {
    async fn list_releases(&self) -> Result<Vec<Release>> {
        let rows = self.fetch_all("release", "", RELEASE_FETCH).await?;
        Ok(rows.iter().filter_map(parse_release).collect())
    }

    async fn get_release(&self, object_id: u64) -> Result<Release> {
        let query = object_id_filter(object_id);
        let rows = self.fetch_all("release", &query, RELEASE_FETCH).await?;

        rows.first()
            .and_then(parse_release)
            .with_context(|| format!("Release {} not found", object_id))
    }

    async fn fetch_work_items(
        &self,
        model: &str,
        fetch: &[String],
        release_id: u64,
    ) -> Result<Vec<WorkItem>> {
        let query = release_filter(release_id);
        let rows = self.fetch_all(model, &query, &fetch.join(",")).await?;

        Ok(rows.into_iter().map(WorkItem::new).collect())
    }
}

/// WSAPI filter expression scoping a query to one release.
fn release_filter(release_id: u64) -> String {
    format!("(Release.ObjectID = {release_id})")
}

fn object_id_filter(object_id: u64) -> String {
    format!("(ObjectID = {object_id})")
}

fn parse_release(fields: &Map<String, Value>) -> Option<Release> {
    let object_id = fields.get("ObjectID")?.as_u64()?;
    let name = fields.get("Name")?.as_str()?.to_string();
    let start_date = fields
        .get("ReleaseStartDate")
        .and_then(Value::as_str)
        .and_then(parse_wsapi_date);
    let end_date = fields
        .get("ReleaseDate")
        .and_then(Value::as_str)
        .and_then(parse_wsapi_date);

    Some(Release::new(object_id, name, start_date, end_date))
}

fn parse_wsapi_date(value: &str) -> Option<NaiveDate> {
    chrono::DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|dt| dt.date_naive())
}
