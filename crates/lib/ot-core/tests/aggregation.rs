use ot_api::models::{AssociationRow, EntityRef};
use ot_core::paging::{PageAggregator, PageFuture, PageSource, PagedBatch};

fn melanoma() -> EntityRef {
    EntityRef {
        id: "EFO_0000756".to_owned(),
        name: Some("melanoma".to_owned()),
    }
}

fn row(index: usize, score: f64) -> AssociationRow {
    AssociationRow {
        id: format!("ENSG{index:011}"),
        name: Some(format!("GENE{index}")),
        score,
    }
}

fn rows_with_scores(start: usize, scores: &[f64]) -> Vec<AssociationRow> {
    scores
        .iter()
        .enumerate()
        .map(|(offset, score)| row(start + offset, *score))
        .collect()
}

fn uniform_rows(start: usize, count: usize, score: f64) -> Vec<AssociationRow> {
    (start..start + count).map(|index| row(index, score)).collect()
}

struct ScriptedSource {
    pages: Vec<PagedBatch>,
}

impl ScriptedSource {
    fn new(pages: Vec<PagedBatch>) -> Self {
        Self { pages }
    }
}

impl PageSource for ScriptedSource {
    fn fetch_page(&self, page_index: usize, _page_size: usize) -> PageFuture {
        let batch = self
            .pages
            .get(page_index)
            .cloned()
            .unwrap_or_else(|| PagedBatch::empty("script-exhausted"));
        Box::pin(async move { Ok(batch) })
    }
}

fn page(total: u64, rows: Vec<AssociationRow>) -> PagedBatch {
    PagedBatch {
        entity: melanoma(),
        total,
        rows,
    }
}

#[tokio::test]
async fn score_floor_and_cap_report_both_totals() {
    // 250 rows upstream, 40 of which clear the floor; a request for 10
    // stops at the first page because it already covers the request.
    let mut first_page = uniform_rows(0, 40, 0.9);
    first_page.extend(uniform_rows(40, 60, 0.1));
    let source = ScriptedSource::new(vec![
        page(250, first_page),
        page(250, uniform_rows(100, 100, 0.1)),
        page(250, uniform_rows(200, 50, 0.1)),
    ]);

    let report = PageAggregator::default()
        .collect(&source, 10)
        .await
        .expect("scripted aggregation should succeed")
        .into_report(Some(0.5));

    assert_eq!(report.rows.len(), 10);
    assert!(report.rows.iter().all(|row| row.score >= 0.5));
    assert_eq!(report.summary.requested, 10);
    assert_eq!(report.summary.returned, 10);
    assert_eq!(report.summary.total, 250);
    assert_eq!(report.summary.filtered_total, Some(40));
}

#[tokio::test]
async fn score_floor_runs_over_every_fetched_page() {
    // Passing rows are spread across all three pages; a per-page filter
    // would under-count them.
    let mut page0 = rows_with_scores(0, &[0.9, 0.8, 0.7, 0.6, 0.55]);
    page0.extend(uniform_rows(5, 95, 0.1));
    let mut page1 = uniform_rows(100, 80, 0.1);
    page1.extend(uniform_rows(180, 20, 0.75));
    let mut page2 = uniform_rows(200, 85, 0.1);
    page2.extend(uniform_rows(285, 15, 0.65));

    let source = ScriptedSource::new(vec![
        page(1000, page0),
        page(1000, page1),
        page(1000, page2),
        page(1000, uniform_rows(300, 100, 0.1)),
    ]);

    let report = PageAggregator::default()
        .collect(&source, 250)
        .await
        .expect("scripted aggregation should succeed")
        .into_report(Some(0.5));

    assert_eq!(report.summary.filtered_total, Some(40));
    assert_eq!(report.rows.len(), 40);
    assert!(report.rows.iter().all(|row| row.score >= 0.5));
}

#[tokio::test]
async fn returns_min_of_requested_and_available() {
    let source = ScriptedSource::new(vec![
        page(150, uniform_rows(0, 100, 0.9)),
        page(150, uniform_rows(100, 50, 0.9)),
    ]);

    let report = PageAggregator::default()
        .collect(&source, 500)
        .await
        .expect("scripted aggregation should succeed")
        .into_report(None);

    assert_eq!(report.summary.returned, 150);
    assert_eq!(report.summary.total, 150);
    assert_eq!(report.summary.filtered_total, None);
    assert_eq!(report.rows.len(), 150);
}

#[tokio::test]
async fn repeated_runs_return_identical_sequences() {
    let pages = vec![
        page(220, uniform_rows(0, 100, 0.9)),
        page(220, uniform_rows(100, 100, 0.8)),
        page(220, uniform_rows(200, 20, 0.7)),
    ];
    let source = ScriptedSource::new(pages);
    let aggregator = PageAggregator::default();

    let first = aggregator
        .collect(&source, 220)
        .await
        .expect("scripted aggregation should succeed")
        .into_report(None);
    let second = aggregator
        .collect(&source, 220)
        .await
        .expect("scripted aggregation should succeed")
        .into_report(None);

    assert_eq!(first.rows, second.rows);
    assert_eq!(first.summary, second.summary);
}

#[tokio::test]
async fn disease_with_no_associations_reports_empty_not_error() {
    let source = ScriptedSource::new(vec![PagedBatch::empty("EFO_0009999")]);

    let report = PageAggregator::default()
        .collect(&source, 50)
        .await
        .expect("empty table should aggregate")
        .into_report(None);

    assert!(report.rows.is_empty());
    assert_eq!(report.summary.returned, 0);
    assert_eq!(report.summary.total, 0);
    assert_eq!(report.entity.id, "EFO_0009999");
    assert_eq!(report.entity.name, None);
}

#[tokio::test]
async fn truncation_keeps_upstream_order() {
    let source = ScriptedSource::new(vec![page(100, uniform_rows(0, 100, 0.9))]);

    let report = PageAggregator::default()
        .collect(&source, 10)
        .await
        .expect("scripted aggregation should succeed")
        .into_report(None);

    let ids: Vec<&str> = report.rows.iter().map(|row| row.id.as_str()).collect();
    let expected: Vec<String> = (0..10).map(|index| format!("ENSG{index:011}")).collect();
    assert_eq!(ids, expected.iter().map(String::as_str).collect::<Vec<_>>());
}
