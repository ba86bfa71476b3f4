// crates/server/src/view.rs
//! The job panel, as data: one parameterized view builder shared by the
//! listing route and the auto-refresh stream.
//!
//! `build_job_list` is a pure function from a listing snapshot plus the
//! request's pagination parameters to the rendered page. All per-request
//! state arrives in `PanelQuery`; nothing is kept between calls, and the
//! paginator is rebuilt from the fresh snapshot every cycle.

use docdeck_core::{
    format_timestamp, processing_time, DocumentRecord, DocumentStatus, JobEntry, JobManifest,
    JobPaginator, PageInfo, PaginateError, DEFAULT_PER_PAGE,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use ts_rs::TS;

/// Seconds between refreshes while any document is still processing.
pub const POLL_INTERVAL_SECS: u64 = 5;

/// Upper bound the API accepts for `per_page`.
pub const MAX_PER_PAGE: usize = 100;

/// Pagination parameters for one render cycle.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct PanelQuery {
    pub page: i64,
    pub per_page: usize,
}

impl Default for PanelQuery {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

/// One document row in the panel.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export, export_to = "../../../src/types/generated/")]
pub struct DocumentView {
    pub id: String,
    pub name: String,
    pub status: DocumentStatus,
    pub badge_color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mimetype: Option<String>,
    /// Link target for documents submitted by URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
    /// `HH:MM:SS` spent processing; only for completed documents, and the
    /// panel hides zero durations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processing_time: Option<String>,
    /// Individual delete is only offered once processing has finished.
    pub deletable: bool,
}

/// One job group in the panel.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export, export_to = "../../../src/types/generated/")]
pub struct JobView {
    pub job_id: String,
    /// Job-level status, taken from the first document of the batch.
    pub status: DocumentStatus,
    pub badge_color: String,
    pub created: String,
    /// Completion display time; present once the job is completed or
    /// cancelled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<String>,
    pub processing: bool,
    /// Cancel applies while work is in flight, delete once it is not.
    pub can_cancel: bool,
    pub can_delete: bool,
    pub documents: Vec<DocumentView>,
}

/// One rendered page of the panel.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export, export_to = "../../../src/types/generated/")]
pub struct JobListView {
    pub jobs: Vec<JobView>,
    pub pagination: PageInfo,
    /// Whether any document in the whole listing is still processing.
    pub any_processing: bool,
    /// Hint for the frontend: poll again after this many seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_after_secs: Option<u64>,
}

/// Render one page of the job panel from a full listing snapshot.
pub fn build_job_list(
    documents: Vec<DocumentRecord>,
    query: PanelQuery,
) -> Result<JobListView, PaginateError> {
    let any_processing = documents.iter().any(|d| d.status.is_active());

    let manifest = JobManifest::from_documents(documents);
    let paginator = JobPaginator::new(manifest);
    let page = paginator.get_page(query.page, query.per_page)?;

    Ok(JobListView {
        jobs: page.items.into_iter().map(job_view).collect(),
        pagination: page.pagination,
        any_processing,
        refresh_after_secs: any_processing.then_some(POLL_INTERVAL_SECS),
    })
}

fn job_view(entry: JobEntry<DocumentRecord>) -> JobView {
    let JobEntry { job_id, documents } = entry;

    let processing = documents.iter().any(|d| d.status.is_active());
    let first = documents.first();
    let status = first.map(|d| d.status).unwrap_or_default();

    let created = format_timestamp(first.and_then(|d| d.created_on.as_deref()));
    let completed = matches!(status, DocumentStatus::Completed | DocumentStatus::Cancelled)
        .then(|| format_timestamp(first.and_then(|d| d.completed_on.as_deref())));

    JobView {
        job_id,
        status,
        badge_color: status.badge_color().to_string(),
        created,
        completed,
        processing,
        can_cancel: processing,
        can_delete: !processing,
        documents: documents.into_iter().map(document_view).collect(),
    }
}

fn document_view(doc: DocumentRecord) -> DocumentView {
    let elapsed = (doc.status == DocumentStatus::Completed)
        .then(|| processing_time(doc.created_on.as_deref(), doc.completed_on.as_deref()))
        .flatten()
        .filter(|t| t != "00:00:00");

    DocumentView {
        id: doc.id,
        name: doc.name,
        status: doc.status,
        badge_color: doc.status.badge_color().to_string(),
        mimetype: doc.mimetype,
        source: doc.source,
        metadata: doc.metadata,
        processing_time: elapsed,
        deletable: doc.status.is_terminal(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn doc(id: &str, job: &str, status: DocumentStatus) -> DocumentRecord {
        DocumentRecord::new(id, job, format!("{id}.pdf")).with_status(status)
    }

    #[test]
    fn test_groups_and_orders_newest_job_first() {
        let view = build_job_list(
            vec![
                doc("d1", "job-a", DocumentStatus::Completed),
                doc("d2", "job-b", DocumentStatus::Completed),
                doc("d3", "job-a", DocumentStatus::Completed),
            ],
            PanelQuery::default(),
        )
        .unwrap();

        let order: Vec<&str> = view.jobs.iter().map(|j| j.job_id.as_str()).collect();
        assert_eq!(order, ["job-b", "job-a"]);
        assert_eq!(view.jobs[1].documents.len(), 2);
    }

    #[test]
    fn test_processing_job_offers_cancel_not_delete() {
        let view = build_job_list(
            vec![
                doc("d1", "job-a", DocumentStatus::Completed),
                doc("d2", "job-a", DocumentStatus::Ingesting),
            ],
            PanelQuery::default(),
        )
        .unwrap();

        let job = &view.jobs[0];
        assert!(job.processing);
        assert!(job.can_cancel);
        assert!(!job.can_delete);
    }

    #[test]
    fn test_finished_job_offers_delete_not_cancel() {
        let view = build_job_list(
            vec![doc("d1", "job-a", DocumentStatus::Failed)],
            PanelQuery::default(),
        )
        .unwrap();

        let job = &view.jobs[0];
        assert!(!job.processing);
        assert!(!job.can_cancel);
        assert!(job.can_delete);
    }

    #[test]
    fn test_refresh_hint_only_while_processing() {
        let active = build_job_list(
            vec![doc("d1", "job-a", DocumentStatus::Processing)],
            PanelQuery::default(),
        )
        .unwrap();
        assert!(active.any_processing);
        assert_eq!(active.refresh_after_secs, Some(POLL_INTERVAL_SECS));

        let quiet = build_job_list(
            vec![doc("d1", "job-a", DocumentStatus::Completed)],
            PanelQuery::default(),
        )
        .unwrap();
        assert!(!quiet.any_processing);
        assert_eq!(quiet.refresh_after_secs, None);
    }

    #[test]
    fn test_any_processing_covers_documents_off_page() {
        // Twelve completed jobs fill page 1; the oldest job is still
        // processing and must still drive the refresh hint.
        let mut documents = vec![doc("d0", "job-old", DocumentStatus::Processing)];
        for i in 1..=12 {
            documents.push(doc(
                &format!("d{i}"),
                &format!("job-{i}"),
                DocumentStatus::Completed,
            ));
        }

        let view = build_job_list(documents, PanelQuery::default()).unwrap();
        assert_eq!(view.jobs.len(), DEFAULT_PER_PAGE);
        assert!(view.jobs.iter().all(|j| !j.processing));
        assert!(view.any_processing);
    }

    #[test]
    fn test_completed_document_shows_elapsed_time() {
        let mut record = doc("d1", "job-a", DocumentStatus::Completed);
        record.created_on = Some("2026-03-01T10:00:00Z".to_string());
        record.completed_on = Some("2026-03-01T10:02:30Z".to_string());

        let view = build_job_list(vec![record], PanelQuery::default()).unwrap();
        let document = &view.jobs[0].documents[0];
        assert_eq!(document.processing_time.as_deref(), Some("00:02:30"));
        assert!(document.deletable);
    }

    #[test]
    fn test_zero_duration_is_hidden() {
        let mut record = doc("d1", "job-a", DocumentStatus::Completed);
        record.created_on = Some("2026-03-01T10:00:00Z".to_string());
        record.completed_on = Some("2026-03-01T10:00:00Z".to_string());

        let view = build_job_list(vec![record], PanelQuery::default()).unwrap();
        assert_eq!(view.jobs[0].documents[0].processing_time, None);
    }

    #[test]
    fn test_cancelled_job_shows_completed_timestamp() {
        let mut record = doc("d1", "job-a", DocumentStatus::Cancelled);
        record.completed_on = Some("2026-03-01T10:05:00Z".to_string());

        let view = build_job_list(vec![record], PanelQuery::default()).unwrap();
        assert_eq!(
            view.jobs[0].completed.as_deref(),
            Some("2026-03-01 10:05:00")
        );
    }

    #[test]
    fn test_empty_listing_renders_single_empty_page() {
        let view = build_job_list(Vec::new(), PanelQuery::default()).unwrap();
        assert!(view.jobs.is_empty());
        assert_eq!(view.pagination.total_jobs, 0);
        assert_eq!(view.pagination.total_pages, 1);
        assert!(!view.any_processing);
    }

    #[test]
    fn test_pagination_flows_through() {
        let documents: Vec<DocumentRecord> = (1..=5)
            .map(|i| doc(&format!("d{i}"), &format!("job-{i}"), DocumentStatus::Completed))
            .collect();

        let view = build_job_list(
            documents,
            PanelQuery {
                page: 2,
                per_page: 2,
            },
        )
        .unwrap();

        assert_eq!(view.pagination.current_page, 2);
        assert_eq!(view.pagination.total_pages, 3);
        let order: Vec<&str> = view.jobs.iter().map(|j| j.job_id.as_str()).collect();
        assert_eq!(order, ["job-3", "job-2"]);
    }

    #[test]
    fn test_zero_per_page_is_rejected() {
        let result = build_job_list(
            Vec::new(),
            PanelQuery {
                page: 1,
                per_page: 0,
            },
        );
        assert!(result.is_err());
    }
}
