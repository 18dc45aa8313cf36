use crate::{config_for, serp_page};
use serp_velocity::analysis::{analyze_brand_mentions, Sentiment};
use serp_velocity::fetch::SearchEndpoints;
use serp_velocity::scrape::scrape_results;
use serp_velocity::{find_rank, normalize_domain, HttpFetcher};
use std::time::Duration;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn ten_results() -> Vec<String> {
    (1..=10)
        .map(|i| {
            if i == 4 {
                "https://www.example.com/page".to_string()
            } else {
                format!("https://site{}.test/article", i)
            }
        })
        .collect()
}

#[tokio::test]
async fn test_domain_found_at_fourth_position() {
    let mock_server = MockServer::start().await;
    let links = ten_results();
    let link_refs: Vec<&str> = links.iter().map(String::as_str).collect();

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "widgets"))
        .respond_with(ResponseTemplate::new(200).set_body_string(serp_page(&link_refs)))
        .mount(&mock_server)
        .await;

    let config = config_for(&mock_server);
    let fetcher = HttpFetcher::new(&config.http).unwrap();
    let endpoints = SearchEndpoints::new(&config.search).unwrap();

    let results = scrape_results(&fetcher, &endpoints, "widgets", 10, Duration::from_secs(5))
        .await
        .unwrap();
    assert_eq!(results.len(), 10);

    let domain = normalize_domain("https://Example.com/").unwrap();
    let found = find_rank(&results, &domain);

    assert_eq!(found.rank, 4);
    assert_eq!(
        found.matched_result.unwrap().link,
        "https://www.example.com/page"
    );
}

#[tokio::test]
async fn test_brand_visibility_over_http() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"<html><body>
            <div class="g"><a href="https://a.test/"><h3>Acme: best widgets</h3></a></div>
            <div class="g"><a href="https://b.test/"><h3>Widget guide</h3></a></div>
            <div class="g"><a href="https://c.test/"><h3>Other stuff</h3></a></div>
            <div class="g"><a href="https://d.test/"><h3>More stuff</h3></a></div>
            </body></html>"#,
        ))
        .mount(&mock_server)
        .await;

    let config = config_for(&mock_server);
    let fetcher = HttpFetcher::new(&config.http).unwrap();
    let endpoints = SearchEndpoints::new(&config.search).unwrap();

    let results = scrape_results(&fetcher, &endpoints, "widgets", 10, Duration::from_secs(5))
        .await
        .unwrap();
    let summary = analyze_brand_mentions(&results, "Acme");

    assert_eq!(summary.total_results, 4);
    assert_eq!(summary.visibility_percent, 25);
    assert_eq!(summary.sentiment, Sentiment::Positive);
}
