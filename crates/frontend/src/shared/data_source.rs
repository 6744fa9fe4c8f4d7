//! Table access on the hosted backend (PostgREST-style REST API).
use crate::shared::api_utils::{api_base, api_key, join_url};
use async_trait::async_trait;
use contracts::enums::export_table::ExportTable;
use contracts::shared::table_data::{ErrorInfo, Record, TableResponse};
use gloo_net::http::{Request, RequestBuilder, Response};

/// Read access to the club tables
#[async_trait(?Send)]
pub trait ClubDataSource {
    /// All rows of a backend table
    async fn select_all(&self, table: &str) -> TableResponse;

    /// Rows of one export table. Uses [`select_all`](Self::select_all)
    /// unless the implementation has a dedicated endpoint for the table.
    async fn fetch(&self, table: ExportTable) -> TableResponse {
        self.select_all(table.table_name()).await
    }
}

/// Backend client over `fetch`
#[derive(Debug, Clone)]
pub struct RestDataSource {
    base_url: String,
    api_key: Option<String>,
}

impl RestDataSource {
    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key,
        }
    }

    /// Client for the configured backend
    pub fn from_config() -> Self {
        Self::new(api_base(), api_key())
    }

    fn table_url(&self, table: &str) -> String {
        join_url(&self.base_url, &format!("/rest/v1/{}?select=*", table))
    }

    fn rpc_url(&self, function: &str) -> String {
        join_url(&self.base_url, &format!("/rest/v1/rpc/{}", function))
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        let builder = builder.header("Accept", "application/json");
        match &self.api_key {
            Some(key) => builder
                .header("apikey", key)
                .header("Authorization", &format!("Bearer {}", key)),
            None => builder,
        }
    }

    /// Call a database function that returns rows
    async fn call_rpc(&self, function: &str) -> TableResponse {
        let request = match self
            .authorized(Request::post(&self.rpc_url(function)))
            .json(&serde_json::json!({}))
        {
            Ok(request) => request,
            Err(e) => {
                return TableResponse::err(ErrorInfo::new(format!(
                    "Failed to serialize request: {}",
                    e
                )))
            }
        };
        read_rows(request.send().await).await
    }
}

#[async_trait(?Send)]
impl ClubDataSource for RestDataSource {
    async fn select_all(&self, table: &str) -> TableResponse {
        let response = self
            .authorized(Request::get(&self.table_url(table)))
            .send()
            .await;
        read_rows(response).await
    }

    async fn fetch(&self, table: ExportTable) -> TableResponse {
        match table {
            // aggregated view is only exposed as a function
            ExportTable::Resumen => self.call_rpc(table.table_name()).await,
            other => self.select_all(other.table_name()).await,
        }
    }
}

async fn read_rows(response: Result<Response, gloo_net::Error>) -> TableResponse {
    let response = match response {
        Ok(response) => response,
        Err(e) => return TableResponse::err(ErrorInfo::new(format!("Request failed: {}", e))),
    };

    let status = response.status();
    let ok = response.ok();
    match response.text().await {
        Ok(body) if ok => rows_from_body(&body),
        Ok(body) => TableResponse::err(error_from_body(status, &body)),
        Err(e) => TableResponse::err(ErrorInfo::new(format!("Failed to read response: {}", e))),
    }
}

/// Decode a successful body: a JSON array of rows
fn rows_from_body(body: &str) -> TableResponse {
    match serde_json::from_str::<Vec<Record>>(body) {
        Ok(rows) => TableResponse::ok(rows),
        Err(e) => TableResponse::err(ErrorInfo::new(format!("Failed to parse response: {}", e))),
    }
}

/// Decode a failed body; falls back to the HTTP status
fn error_from_body(status: u16, body: &str) -> ErrorInfo {
    serde_json::from_str::<ErrorInfo>(body)
        .unwrap_or_else(|_| ErrorInfo::new(format!("HTTP error: {}", status)))
}
