// crates/core/src/paginator.rs
//! Newest-first pagination over a job manifest.
//!
//! A `JobPaginator` is built from a snapshot of the manifest and never
//! mutates after construction; callers rebuild it whenever the underlying
//! job set may have changed. Page numbers are sanitized by clamping, so the
//! only rejected input is a zero page size.

use serde::Serialize;
use ts_rs::TS;

use crate::document::JobId;
use crate::error::PaginateError;

/// Page size used when the caller does not specify one.
pub const DEFAULT_PER_PAGE: usize = 10;

/// One job on a page: its id and the documents submitted under it.
#[derive(Debug, Clone, PartialEq)]
pub struct JobEntry<D> {
    pub job_id: JobId,
    pub documents: Vec<D>,
}

/// Pagination metadata for a returned page.
///
/// `previous_page`/`next_page` are present exactly when the corresponding
/// flag is true, each offset by one from `current_page`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export, export_to = "../../../src/types/generated/")]
pub struct PageInfo {
    pub current_page: usize,
    pub per_page: usize,
    pub total_jobs: usize,
    pub total_pages: usize,
    pub has_previous: bool,
    pub has_next: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_page: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page: Option<usize>,
}

/// One page of jobs plus its pagination metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct JobPage<D> {
    pub items: Vec<JobEntry<D>>,
    pub pagination: PageInfo,
}

/// Pages through jobs newest-first.
///
/// Document values are opaque: the paginator only slices the job list and
/// hands document vectors back untouched. Construction reverses the
/// manifest's insertion order once; every page is a slice of that reversed
/// list, so repeated calls with the same arguments return identical results.
#[derive(Debug, Clone)]
pub struct JobPaginator<D> {
    jobs: Vec<(JobId, Vec<D>)>,
    total_jobs: usize,
}

impl<D: Clone> JobPaginator<D> {
    /// Build a paginator from a manifest snapshot.
    ///
    /// The manifest iterates oldest job first (insertion order); the
    /// paginator stores the reverse so page 1 starts with the most recently
    /// submitted job. An empty manifest is valid.
    pub fn new(manifest: impl IntoIterator<Item = (JobId, Vec<D>)>) -> Self {
        let mut jobs: Vec<(JobId, Vec<D>)> = manifest.into_iter().collect();
        jobs.reverse();
        let total_jobs = jobs.len();
        Self { jobs, total_jobs }
    }

    pub fn total_jobs(&self) -> usize {
        self.total_jobs
    }

    /// Total number of pages for a given page size. At least 1, even for an
    /// empty manifest.
    pub fn total_pages(&self, per_page: usize) -> Result<usize, PaginateError> {
        if per_page == 0 {
            return Err(PaginateError::InvalidPerPage { per_page });
        }
        Ok(std::cmp::max(1, self.total_jobs.div_ceil(per_page)))
    }

    /// Retrieve one page of jobs with pagination metadata.
    ///
    /// `page` may be any integer; values below 1 clamp to the first page and
    /// values past the end clamp to the last. `per_page == 0` is the one
    /// error case.
    pub fn get_page(&self, page: i64, per_page: usize) -> Result<JobPage<D>, PaginateError> {
        let total_pages = self.total_pages(per_page)?;
        let current_page = clamp_page(page, total_pages);

        // After clamping, start never exceeds total_jobs (start == 0 when
        // the manifest is empty).
        let start = (current_page - 1) * per_page;
        let end = std::cmp::min(start + per_page, self.total_jobs);
        let items = self.jobs[start..end]
            .iter()
            .map(|(job_id, documents)| JobEntry {
                job_id: job_id.clone(),
                documents: documents.clone(),
            })
            .collect();

        let has_previous = current_page > 1;
        let has_next = current_page < total_pages;
        Ok(JobPage {
            items,
            pagination: PageInfo {
                current_page,
                per_page,
                total_jobs: self.total_jobs,
                total_pages,
                has_previous,
                has_next,
                previous_page: has_previous.then(|| current_page - 1),
                next_page: has_next.then(|| current_page + 1),
            },
        })
    }

    /// First page with the default page size.
    pub fn first_page(&self) -> JobPage<D> {
        // DEFAULT_PER_PAGE is non-zero, so this cannot fail.
        self.get_page(1, DEFAULT_PER_PAGE)
            .expect("default per_page is valid")
    }
}

/// Clamp a requested page into `[1, total_pages]`.
fn clamp_page(page: i64, total_pages: usize) -> usize {
    // total_pages is at least 1 and in practice far below i64::MAX.
    page.clamp(1, total_pages as i64) as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Manifest of n jobs named job-1..job-n (oldest first), one marker
    /// document each.
    fn manifest(n: usize) -> Vec<(JobId, Vec<String>)> {
        (1..=n)
            .map(|i| (format!("job-{i}"), vec![format!("doc-{i}")]))
            .collect()
    }

    fn job_ids(page: &JobPage<String>) -> Vec<&str> {
        page.items.iter().map(|e| e.job_id.as_str()).collect()
    }

    #[test]
    fn test_jobs_come_back_newest_first() {
        let paginator = JobPaginator::new(manifest(3));
        let page = paginator.get_page(1, 10).unwrap();
        assert_eq!(job_ids(&page), ["job-3", "job-2", "job-1"]);
    }

    #[test]
    fn test_documents_pass_through_untouched() {
        let paginator = JobPaginator::new(vec![(
            "job-1".to_string(),
            vec!["a".to_string(), "b".to_string(), "c".to_string()],
        )]);
        let page = paginator.get_page(1, 10).unwrap();
        assert_eq!(page.items[0].documents, ["a", "b", "c"]);
    }

    #[test]
    fn test_total_pages_is_ceiling_division() {
        let paginator = JobPaginator::new(manifest(21));
        assert_eq!(paginator.total_pages(10).unwrap(), 3);
        assert_eq!(paginator.total_pages(21).unwrap(), 1);
        assert_eq!(paginator.total_pages(20).unwrap(), 2);
        assert_eq!(paginator.total_pages(1).unwrap(), 21);
    }

    #[test]
    fn test_empty_manifest_reports_one_page() {
        let paginator: JobPaginator<String> = JobPaginator::new(vec![]);
        let page = paginator.get_page(1, 10).unwrap();

        assert!(page.items.is_empty());
        assert_eq!(
            page.pagination,
            PageInfo {
                current_page: 1,
                per_page: 10,
                total_jobs: 0,
                total_pages: 1,
                has_previous: false,
                has_next: false,
                previous_page: None,
                next_page: None,
            }
        );
    }

    #[test]
    fn test_page_clamps_below_one() {
        let paginator = JobPaginator::new(manifest(5));
        for page in [0, -1, i64::MIN] {
            let result = paginator.get_page(page, 2).unwrap();
            assert_eq!(result.pagination.current_page, 1, "page {page}");
            assert_eq!(job_ids(&result), ["job-5", "job-4"]);
        }
    }

    #[test]
    fn test_page_clamps_above_total_pages() {
        let paginator = JobPaginator::new(manifest(5));
        for page in [4, 100, i64::MAX] {
            let result = paginator.get_page(page, 2).unwrap();
            assert_eq!(result.pagination.current_page, 3, "page {page}");
            // Last page holds the single oldest job.
            assert_eq!(job_ids(&result), ["job-1"]);
        }
    }

    #[test]
    fn test_zero_per_page_is_an_error() {
        let paginator = JobPaginator::new(manifest(3));
        assert_eq!(
            paginator.get_page(1, 0),
            Err(PaginateError::InvalidPerPage { per_page: 0 })
        );
    }

    #[test]
    fn test_metadata_consistency_on_middle_page() {
        let paginator = JobPaginator::new(manifest(25));
        let page = paginator.get_page(2, 10).unwrap();

        let info = &page.pagination;
        assert_eq!(info.current_page, 2);
        assert_eq!(info.total_jobs, 25);
        assert_eq!(info.total_pages, 3);
        assert!(info.has_previous);
        assert!(info.has_next);
        assert_eq!(info.previous_page, Some(1));
        assert_eq!(info.next_page, Some(3));
    }

    #[test]
    fn test_pages_tile_the_reversed_job_list() {
        let paginator = JobPaginator::new(manifest(13));
        let per_page = 4;
        let total_pages = paginator.total_pages(per_page).unwrap();

        let mut seen: Vec<String> = Vec::new();
        for page in 1..=total_pages {
            let result = paginator.get_page(page as i64, per_page).unwrap();
            seen.extend(result.items.into_iter().map(|e| e.job_id));
        }

        let expected: Vec<String> = (1..=13).rev().map(|i| format!("job-{i}")).collect();
        assert_eq!(seen, expected);
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let paginator = JobPaginator::new(manifest(7));
        let first = paginator.get_page(2, 3).unwrap();
        let second = paginator.get_page(2, 3).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_worked_example_from_listing_contract() {
        // Insertion order J1, J2, J3; J2 has two documents.
        let paginator = JobPaginator::new(vec![
            ("J1".to_string(), vec!["d1".to_string()]),
            ("J2".to_string(), vec!["d2".to_string(), "d3".to_string()]),
            ("J3".to_string(), vec!["d4".to_string()]),
        ]);

        let page1 = paginator.get_page(1, 2).unwrap();
        assert_eq!(job_ids(&page1), ["J3", "J2"]);
        assert_eq!(page1.items[1].documents, ["d2", "d3"]);
        assert_eq!(page1.pagination.total_pages, 2);
        assert!(page1.pagination.has_next);
        assert!(!page1.pagination.has_previous);

        let page2 = paginator.get_page(2, 2).unwrap();
        assert_eq!(job_ids(&page2), ["J1"]);
        assert!(page2.pagination.has_previous);
        assert!(!page2.pagination.has_next);
    }

    #[test]
    fn test_first_page_uses_default_page_size() {
        let paginator = JobPaginator::new(manifest(12));
        let page = paginator.first_page();
        assert_eq!(page.items.len(), DEFAULT_PER_PAGE);
        assert_eq!(page.pagination.per_page, DEFAULT_PER_PAGE);
        assert_eq!(page.pagination.total_pages, 2);
    }

    #[test]
    fn test_page_info_serializes_without_absent_neighbors() {
        let paginator = JobPaginator::new(manifest(2));
        let page = paginator.get_page(1, 10).unwrap();
        let json = serde_json::to_string(&page.pagination).unwrap();
        assert!(json.contains("\"current_page\":1"));
        assert!(!json.contains("previous_page"));
        assert!(!json.contains("next_page"));
    }
}
