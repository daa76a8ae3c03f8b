//! Bounded incremental pagination over upstream association tables.
//!
//! Association tables are fetched in fixed-size pages and accumulated until
//! the caller's requested row count is satisfied, the upstream-reported
//! total is exhausted, or a short page signals the end of the table. The
//! score filter runs over the full accumulation afterwards, never per page.

use std::future::Future;
use std::pin::Pin;

use ot_api::models::{AssociationRow, EntityRef};
use serde::Serialize;

use crate::client::ClientError;

/// Rows fetched per upstream call, independent of the caller's requested
/// result size.
pub const DEFAULT_PAGE_SIZE: usize = 100;

pub type PageFuture =
    Pin<Box<dyn Future<Output = Result<PagedBatch, ClientError>> + Send + 'static>>;

/// One fetched page: the anchoring entity, the upstream-reported grand
/// total for the whole table, and the page's rows.
#[derive(Debug, Clone, PartialEq)]
pub struct PagedBatch {
    pub entity: EntityRef,
    pub total: u64,
    pub rows: Vec<AssociationRow>,
}

impl PagedBatch {
    /// Batch stood in for an identifier the upstream does not know.
    #[must_use]
    pub fn empty(id: &str) -> Self {
        Self {
            entity: EntityRef {
                id: id.to_owned(),
                name: None,
            },
            total: 0,
            rows: Vec::new(),
        }
    }
}

/// Source of association pages for one anchoring entity.
pub trait PageSource: Send + Sync {
    fn fetch_page(&self, page_index: usize, page_size: usize) -> PageFuture;
}

/// Drives the page loop for the association lookups.
#[derive(Debug, Clone, Copy)]
pub struct PageAggregator {
    page_size: usize,
}

impl Default for PageAggregator {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageAggregator {
    #[must_use]
    pub const fn new(page_size: usize) -> Self {
        Self { page_size }
    }

    /// Fetches pages in increasing index order until any stop condition
    /// holds: the accumulator covers `requested` rows, it covers the total
    /// reported by the first page, or the last page came back short.
    ///
    /// The entity header and total from the first page are authoritative
    /// for the whole aggregation; later pages only contribute rows.
    ///
    /// # Errors
    /// Returns `ClientError` if any page fetch fails. Rows accumulated
    /// from earlier pages are discarded, never returned partially.
    pub async fn collect(
        &self,
        source: &dyn PageSource,
        requested: usize,
    ) -> Result<Aggregation, ClientError> {
        let first = source.fetch_page(0, self.page_size).await?;
        let entity = first.entity;
        let total = first.total;
        let mut short_page = first.rows.len() < self.page_size;
        let mut rows = first.rows;
        let mut page_index = 0usize;

        while rows.len() < requested && row_count(&rows) < total && !short_page {
            page_index += 1;
            let batch = source.fetch_page(page_index, self.page_size).await?;
            short_page = batch.rows.len() < self.page_size;
            rows.extend(batch.rows);
        }

        Ok(Aggregation {
            entity,
            total,
            rows,
            requested,
        })
    }
}

/// Accumulated rows plus the page-one header, before score filtering and
/// truncation.
#[derive(Debug, Clone)]
pub struct Aggregation {
    pub entity: EntityRef,
    pub total: u64,
    pub rows: Vec<AssociationRow>,
    pub requested: usize,
}

impl Aggregation {
    /// Applies the optional score floor across every accumulated row, then
    /// truncates to the requested count. Upstream row order is preserved.
    #[must_use]
    pub fn into_report(self, min_score: Option<f64>) -> AssociationReport {
        let Self {
            entity,
            total,
            mut rows,
            requested,
        } = self;

        let filtered_total = min_score.map(|floor| {
            rows.retain(|row| row.score >= floor);
            row_count(&rows)
        });
        rows.truncate(requested);

        AssociationReport {
            entity,
            summary: PageSummary {
                requested: as_u64(requested),
                returned: row_count(&rows),
                total,
                filtered_total,
            },
            rows,
        }
    }
}

/// Pagination accounting attached to every aggregated result.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PageSummary {
    pub requested: u64,
    pub returned: u64,
    pub total: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filtered_total: Option<u64>,
}

/// Final aggregated association listing for one entity.
#[derive(Debug, Clone, Serialize)]
pub struct AssociationReport {
    pub entity: EntityRef,
    pub summary: PageSummary,
    pub rows: Vec<AssociationRow>,
}

fn row_count(rows: &[AssociationRow]) -> u64 {
    as_u64(rows.len())
}

fn as_u64(value: usize) -> u64 {
    u64::try_from(value).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    fn braf() -> EntityRef {
        EntityRef {
            id: "ENSG00000157764".to_owned(),
            name: Some("BRAF".to_owned()),
        }
    }

    fn scored_rows(start: usize, count: usize, score: f64) -> Vec<AssociationRow> {
        (start..start + count)
            .map(|index| AssociationRow {
                id: format!("EFO_{index:07}"),
                name: Some(format!("disease {index}")),
                score,
            })
            .collect()
    }

    struct ScriptedSource {
        pages: Vec<PagedBatch>,
        calls: Arc<AtomicUsize>,
    }

    impl PageSource for ScriptedSource {
        fn fetch_page(&self, page_index: usize, _page_size: usize) -> PageFuture {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let batch = self
                .pages
                .get(page_index)
                .cloned()
                .unwrap_or_else(|| PagedBatch::empty("script-exhausted"));
            Box::pin(async move { Ok(batch) })
        }
    }

    struct FailingSource {
        fail_from: usize,
        total: u64,
        calls: Arc<AtomicUsize>,
    }

    impl PageSource for FailingSource {
        fn fetch_page(&self, page_index: usize, page_size: usize) -> PageFuture {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if page_index >= self.fail_from {
                return Box::pin(async { Err(ClientError::GraphQl("page exploded".to_owned())) });
            }
            let batch = PagedBatch {
                entity: braf(),
                total: self.total,
                rows: scored_rows(page_index * page_size, page_size, 0.9),
            };
            Box::pin(async move { Ok(batch) })
        }
    }

    fn page(total: u64, start: usize, count: usize) -> PagedBatch {
        PagedBatch {
            entity: braf(),
            total,
            rows: scored_rows(start, count, 0.9),
        }
    }

    #[tokio::test]
    async fn small_request_fetches_exactly_one_page() {
        let calls = Arc::new(AtomicUsize::new(0));
        let source = ScriptedSource {
            pages: vec![page(1000, 0, 100), page(1000, 100, 100)],
            calls: calls.clone(),
        };

        let aggregation = PageAggregator::default()
            .collect(&source, 10)
            .await
            .expect("scripted pages should aggregate");

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(aggregation.rows.len(), 100);
        assert_eq!(aggregation.total, 1000);
        assert_eq!(aggregation.entity, braf());
    }

    #[tokio::test]
    async fn accumulates_pages_until_requested_count_is_covered() {
        let calls = Arc::new(AtomicUsize::new(0));
        let source = ScriptedSource {
            pages: vec![
                page(1000, 0, 100),
                page(1000, 100, 100),
                page(1000, 200, 100),
                page(1000, 300, 100),
            ],
            calls: calls.clone(),
        };

        let aggregation = PageAggregator::default()
            .collect(&source, 250)
            .await
            .expect("scripted pages should aggregate");

        assert_eq!(calls.load(Ordering::SeqCst), 3);
        assert_eq!(aggregation.rows.len(), 300);
    }

    #[tokio::test]
    async fn stops_once_first_page_total_is_covered() {
        let calls = Arc::new(AtomicUsize::new(0));
        let source = ScriptedSource {
            pages: vec![page(200, 0, 100), page(200, 100, 100), page(200, 200, 100)],
            calls: calls.clone(),
        };

        let aggregation = PageAggregator::default()
            .collect(&source, 500)
            .await
            .expect("scripted pages should aggregate");

        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert_eq!(aggregation.rows.len(), 200);
    }

    #[tokio::test]
    async fn short_page_halts_even_when_reported_total_lies() {
        let calls = Arc::new(AtomicUsize::new(0));
        let source = ScriptedSource {
            pages: vec![page(5000, 0, 100), page(5000, 100, 40)],
            calls: calls.clone(),
        };

        let aggregation = PageAggregator::default()
            .collect(&source, 500)
            .await
            .expect("scripted pages should aggregate");

        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert_eq!(aggregation.rows.len(), 140);
        assert_eq!(aggregation.total, 5000);
    }

    #[tokio::test]
    async fn empty_table_resolves_in_one_call() {
        let calls = Arc::new(AtomicUsize::new(0));
        let source = ScriptedSource {
            pages: vec![PagedBatch::empty("EFO_0000000")],
            calls: calls.clone(),
        };

        let aggregation = PageAggregator::default()
            .collect(&source, 50)
            .await
            .expect("empty table should aggregate");

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(aggregation.rows.is_empty());
        assert_eq!(aggregation.total, 0);
    }

    #[tokio::test]
    async fn first_page_header_is_authoritative() {
        let calls = Arc::new(AtomicUsize::new(0));
        let mut second = page(9999, 100, 100);
        second.entity = EntityRef {
            id: "ENSG00000157764".to_owned(),
            name: Some("renamed mid-flight".to_owned()),
        };
        let source = ScriptedSource {
            pages: vec![page(250, 0, 100), second, page(9999, 200, 100)],
            calls: calls.clone(),
        };

        let aggregation = PageAggregator::default()
            .collect(&source, 300)
            .await
            .expect("scripted pages should aggregate");

        assert_eq!(aggregation.total, 250);
        assert_eq!(aggregation.entity.name.as_deref(), Some("BRAF"));
    }

    #[tokio::test]
    async fn failure_on_a_later_page_discards_the_accumulation() {
        let calls = Arc::new(AtomicUsize::new(0));
        let source = FailingSource {
            fail_from: 1,
            total: 1000,
            calls: calls.clone(),
        };

        let result = PageAggregator::default().collect(&source, 500).await;

        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert!(matches!(result, Err(ClientError::GraphQl(_))));
    }

    #[tokio::test]
    async fn custom_page_size_changes_the_stride() {
        let calls = Arc::new(AtomicUsize::new(0));
        let source = ScriptedSource {
            pages: vec![
                PagedBatch {
                    entity: braf(),
                    total: 20,
                    rows: scored_rows(0, 10, 0.9),
                },
                PagedBatch {
                    entity: braf(),
                    total: 20,
                    rows: scored_rows(10, 10, 0.9),
                },
            ],
            calls: calls.clone(),
        };

        let aggregation = PageAggregator::new(10)
            .collect(&source, 20)
            .await
            .expect("scripted pages should aggregate");

        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert_eq!(aggregation.rows.len(), 20);
    }
}
