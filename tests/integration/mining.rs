use crate::config_for;
use serp_velocity::{AutocompleteMiner, HttpFetcher, SuggestionSource};
use std::time::Duration;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_suggestions(server: &MockServer, query: &str, suggestions: &[&str]) {
    let body = serde_json::json!([query, suggestions, [], {}]);
    Mock::given(method("GET"))
        .and(path("/complete/search"))
        .and(query_param("client", "chrome"))
        .and(query_param("q", query))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_mining_merges_fan_out_over_http() {
    let mock_server = MockServer::start().await;

    mount_suggestions(&mock_server, "ai tool", &["ai tool free", "best ai tool"]).await;
    mount_suggestions(&mock_server, "ai tool a", &["ai tool free", "ai tool api"]).await;
    mount_suggestions(&mock_server, "ai tool v", &["ai tool vs chatgpt"]).await;

    // Slower than the autocomplete timeout: contributes nothing
    Mock::given(method("GET"))
        .and(path("/complete/search"))
        .and(query_param("q", "ai tool p"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!(["ai tool p", ["ai tool pdf"]]))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&mock_server)
        .await;

    let config = config_for(&mock_server);
    let miner = AutocompleteMiner::from_config(HttpFetcher::new(&config.http).unwrap(), &config)
        .unwrap();

    let suggestions = miner.mine("ai tool").await;
    let keywords: Vec<&str> = suggestions.iter().map(|s| s.keyword.as_str()).collect();

    assert_eq!(
        keywords,
        vec!["ai tool free", "best ai tool", "ai tool api", "ai tool vs chatgpt"]
    );
    assert_eq!(suggestions[0].source, SuggestionSource::Root);
    assert_eq!(suggestions[2].source, SuggestionSource::Letter('a'));
    assert_eq!(suggestions[3].source, SuggestionSource::Letter('v'));

    let report = miner.mine_report("ai tool").await;
    assert_eq!(report.count, 4);
    assert_eq!(report.suggestions[0].keyword, "best ai tool");
    assert_eq!(report.suggestions[0].score, 70);
    assert_eq!(report.suggestions[1].keyword, "ai tool vs chatgpt");
    assert_eq!(report.suggestions[3].keyword, "ai tool free");
}
