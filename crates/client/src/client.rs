// crates/client/src/client.rs
//! The service client: one method per remote operation.

use std::time::Duration;

use docdeck_core::{DocumentRecord, JobId};
use reqwest::multipart::{Form, Part};
use reqwest::{Response, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::debug;

use crate::config::ServiceConfig;
use crate::envelope::ReportEnvelope;
use crate::error::ClientError;
use crate::submit::DocumentSubmission;

/// Document parsing can take a while on large uploads; match the service's
/// own worker timeout rather than reqwest's 30s default.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Page size used when walking the remote listing in full.
const FETCH_PAGE_SIZE: usize = 50;

/// Build the HTTP client the service calls go through. Shared by the admin
/// server so config updates reuse the same connection pool.
pub fn build_http_client() -> Result<reqwest::Client, ClientError> {
    Ok(reqwest::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()?)
}

/// Reference to a single document within a job, as the delete endpoint
/// expects it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentRef {
    pub job_id: String,
    pub doc_id: String,
}

/// One page of the remote document listing.
#[derive(Debug, Clone, Deserialize)]
pub struct DocumentListing {
    #[serde(default)]
    pub items: Vec<DocumentRecord>,
    #[serde(default = "default_page")]
    pub page: usize,
    #[serde(default = "default_page")]
    pub total_pages: usize,
    #[serde(default)]
    pub has_previous: bool,
    #[serde(default)]
    pub has_next: bool,
}

fn default_page() -> usize {
    1
}

/// Client for the remote document-processing action endpoints.
pub struct DeepDocClient {
    http: reqwest::Client,
    config: ServiceConfig,
}

impl DeepDocClient {
    /// Build a client with its own connection pool.
    pub fn new(config: ServiceConfig) -> Result<Self, ClientError> {
        Self::with_http(build_http_client()?, config)
    }

    /// Build a client over a shared `reqwest::Client`. The server uses this
    /// so each request cycle gets a client view of the current config
    /// snapshot without re-creating connection pools.
    pub fn with_http(http: reqwest::Client, config: ServiceConfig) -> Result<Self, ClientError> {
        config
            .require_connection()
            .map_err(ClientError::NotConfigured)?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Submit documents for processing. Returns the job id the service
    /// assigned to the batch.
    pub async fn add_documents(&self, submission: DocumentSubmission) -> Result<JobId, ClientError> {
        submission.validate()?;
        let file_count = submission.files.len();
        let url_count = submission.urls.len();

        let body = submission.body_json(&self.config.agent_id);
        let body_bytes =
            serde_json::to_vec(&body).map_err(|e| ClientError::decode(e.to_string()))?;
        let body_part = Part::bytes(body_bytes)
            .file_name("body.json")
            .mime_str("application/json")?;

        let mut form = Form::new().part("body", body_part);
        for file in submission.files {
            let mime = file.content_type_or_default().to_string();
            let part = Part::bytes(file.bytes)
                .file_name(file.name)
                .mime_str(&mime)?;
            form = form.part("files", part);
        }

        debug!(files = file_count, urls = url_count, "submitting documents");

        let response = self
            .request(reqwest::Method::POST, "add_documents")
            .multipart(form)
            .send()
            .await?;
        let envelope = Self::check(response).await?;

        match envelope.into_first_value()? {
            Value::String(job_id) => Ok(job_id),
            other => Err(ClientError::decode(format!(
                "expected a job id string, got {other}"
            ))),
        }
    }

    /// One page of the document listing, as the remote paginates it.
    pub async fn list_documents(
        &self,
        page: usize,
        per_page: usize,
    ) -> Result<DocumentListing, ClientError> {
        let envelope = self
            .post_json(
                "list_documents",
                &json!({
                    "agent_id": self.config.agent_id,
                    "page": page,
                    "per_page": per_page,
                    "reporting": true,
                }),
            )
            .await?;
        envelope.into_first_report()
    }

    /// The full document listing, walked page by page.
    ///
    /// A job's documents can span remote pages, so the panel re-groups and
    /// re-paginates locally from this complete snapshot.
    pub async fn fetch_all_documents(&self) -> Result<Vec<DocumentRecord>, ClientError> {
        let mut documents = Vec::new();
        let mut page = 1;

        loop {
            let listing = self.list_documents(page, FETCH_PAGE_SIZE).await?;
            let empty = listing.items.is_empty();
            documents.extend(listing.items);

            // The empty-page check guards against a service that reports
            // has_next forever.
            if !listing.has_next || empty || page >= listing.total_pages {
                break;
            }
            page += 1;
        }

        debug!(documents = documents.len(), pages = page, "fetched listing");
        Ok(documents)
    }

    /// Cancel a job that is still processing.
    pub async fn cancel_job(&self, job_id: &str) -> Result<(), ClientError> {
        self.post_json(
            "cancel_job",
            &json!({"agent_id": self.config.agent_id, "job_id": job_id}),
        )
        .await?;
        Ok(())
    }

    /// Delete a job and all of its documents.
    pub async fn delete_job(&self, job_id: &str) -> Result<(), ClientError> {
        self.post_json(
            "delete_job",
            &json!({"agent_id": self.config.agent_id, "job_id": job_id}),
        )
        .await?;
        Ok(())
    }

    /// Delete individual documents.
    pub async fn delete_documents(&self, documents: &[DocumentRef]) -> Result<(), ClientError> {
        self.post_json(
            "delete_documents",
            &json!({"agent_id": self.config.agent_id, "documents": documents}),
        )
        .await?;
        Ok(())
    }

    fn request(&self, method: reqwest::Method, operation: &str) -> reqwest::RequestBuilder {
        let mut builder = self.http.request(method, self.config.walker_url(operation));
        if !self.config.api_key.is_empty() {
            builder = builder.bearer_auth(&self.config.api_key);
        }
        builder
    }

    async fn post_json(&self, operation: &str, body: &Value) -> Result<ReportEnvelope, ClientError> {
        let response = self
            .request(reqwest::Method::POST, operation)
            .json(body)
            .send()
            .await?;
        Self::check(response).await
    }

    /// Map non-success statuses to errors; decode the envelope otherwise.
    async fn check(response: Response) -> Result<ReportEnvelope, ClientError> {
        let status = response.status();

        if status == StatusCode::UNPROCESSABLE_ENTITY {
            let detail = response
                .json::<Value>()
                .await
                .ok()
                .and_then(|v| v.get("detail").cloned())
                .map(|d| match d {
                    Value::String(s) => s,
                    other => other.to_string(),
                })
                .unwrap_or_else(|| "unknown validation error".to_string());
            return Err(ClientError::Validation { detail });
        }

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json::<ReportEnvelope>().await?)
    }
}
