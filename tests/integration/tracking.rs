use crate::{config_for, serp_page};
use chrono::{NaiveDate, TimeZone, Utc};
use serp_velocity::history::HistoryEntry;
use serp_velocity::store::{JsonFileStore, KeywordStore};
use serp_velocity::{BatchOrchestrator, HttpFetcher, KeywordRecord, RankHistory};
use std::time::Duration;
use tempfile::tempdir;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_page(server: &MockServer, query: &str, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", query))
        .respond_with(response)
        .mount(server)
        .await;
}

fn page(links: &[&str]) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_string(serp_page(links))
}

fn snapshot() -> Vec<KeywordRecord> {
    let mut records: Vec<KeywordRecord> = (1..=5)
        .map(|i| KeywordRecord::new(format!("id{}", i), format!("kw{}", i), "example.com"))
        .collect();

    records[1].history = RankHistory::from_entries([HistoryEntry {
        date: NaiveDate::from_ymd_opt(2024, 5, 9).unwrap(),
        rank: 5,
    }]);
    records[3].target = "https://www.example.com/old-page".to_string();

    records
}

#[tokio::test]
async fn test_batch_isolates_timed_out_keyword() {
    let mock_server = MockServer::start().await;

    mount_page(&mock_server, "kw1", page(&["https://other.test/", "https://example.com/a"])).await;
    mount_page(&mock_server, "kw2", page(&["https://other.test/"])).await;
    mount_page(
        &mock_server,
        "kw3",
        page(&["https://example.com/"]).set_delay(Duration::from_secs(2)),
    )
    .await;
    mount_page(&mock_server, "kw4", page(&["https://example.com/new-page"])).await;
    mount_page(&mock_server, "kw5", page(&["https://other.test/", "https://other2.test/", "https://example.com/c"])).await;

    let config = config_for(&mock_server);
    let fetcher = HttpFetcher::new(&config.http).unwrap();
    let orchestrator = BatchOrchestrator::from_config(fetcher, &config).unwrap();

    let dir = tempdir().unwrap();
    let snapshot_path = dir.path().join("keywords.json");
    std::fs::write(&snapshot_path, serde_json::to_string(&snapshot()).unwrap()).unwrap();

    let mut store = JsonFileStore::new(&snapshot_path);
    let records = store.load().unwrap();
    let now = Utc.with_ymd_and_hms(2024, 5, 10, 6, 0, 0).unwrap();

    let report = orchestrator.run(&records, now).await;

    assert_eq!(report.processed, 5);
    assert_eq!(report.updated, 4);
    assert_eq!(report.skipped(), 1);
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].keyword, "kw3");

    let ranks: Vec<(&str, usize)> = report
        .updates
        .iter()
        .map(|u| (u.keyword.as_str(), u.rank))
        .collect();
    assert_eq!(ranks, vec![("kw1", 2), ("kw2", 0), ("kw4", 1), ("kw5", 3)]);

    // Dropped out from 5 against a depth of 10
    assert_eq!(report.updates[1].velocity, -6);

    assert_eq!(store.write_back(&report.updates).unwrap(), 4);

    let stored = store.load().unwrap();
    assert_eq!(stored[0].current_rank, 2);
    assert_eq!(stored[0].updated_at, Some(now));
    assert_eq!(stored[1].previous_rank, 5);
    assert_eq!(stored[1].history.len(), 2);
    assert_eq!(stored[2].current_rank, 0);
    assert!(stored[2].updated_at.is_none());
    assert_eq!(stored[3].target, "https://example.com/new-page");
    assert_eq!(stored[4].target, "example.com");
}

#[tokio::test]
async fn test_rerun_same_day_keeps_one_entry() {
    let mock_server = MockServer::start().await;
    mount_page(&mock_server, "kw1", page(&["https://example.com/"])).await;

    let config = config_for(&mock_server);
    let orchestrator =
        BatchOrchestrator::from_config(HttpFetcher::new(&config.http).unwrap(), &config).unwrap();

    let morning = Utc.with_ymd_and_hms(2024, 5, 10, 6, 0, 0).unwrap();
    let evening = Utc.with_ymd_and_hms(2024, 5, 10, 18, 0, 0).unwrap();

    let mut record = KeywordRecord::new("id1", "kw1", "example.com");
    let first = orchestrator.run(std::slice::from_ref(&record), morning).await;
    record.history = first.updates[0].history.clone();

    let second = orchestrator.run(std::slice::from_ref(&record), evening).await;

    assert_eq!(second.updates[0].history.len(), 1);
    assert_eq!(second.updates[0].rank, 1);
    assert_eq!(second.updates[0].velocity, 0);
}
