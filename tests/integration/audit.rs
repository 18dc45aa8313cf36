use crate::config_for;
use serp_velocity::analysis::run_audit;
use serp_velocity::{AuditError, FetchError, HttpFetcher};
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const USER_PAGE: &str = r#"<html>
<head><title>Widget Guide</title><script>var tracking = 1;</script></head>
<body>
  <nav><h2>Menu</h2></nav>
  <h1>Widget Guide</h1>
  <h2>Choosing widgets</h2>
  <p>Widgets come in many sizes.</p>
  <footer>Copyright</footer>
</body>
</html>"#;

const COMPETITOR_PAGE: &str = r#"<html>
<head><title>Competitor</title></head>
<body>
  <h2>Choosing widgets</h2>
  <h2>Maintenance schedule</h2>
  <h3>Warranty terms</h3>
</body>
</html>"#;

async fn mount(server: &MockServer, route: &str, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(response)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_audit_against_competitor() {
    let mock_server = MockServer::start().await;
    mount(&mock_server, "/mine", ResponseTemplate::new(200).set_body_string(USER_PAGE)).await;
    mount(&mock_server, "/theirs", ResponseTemplate::new(200).set_body_string(COMPETITOR_PAGE)).await;

    let config = config_for(&mock_server);
    let fetcher = HttpFetcher::new(&config.http).unwrap();

    let report = run_audit(
        &fetcher,
        &format!("{}/mine", mock_server.uri()),
        Some(&format!("{}/theirs", mock_server.uri())),
        "widgets",
        Duration::from_secs(5),
    )
    .await
    .unwrap();

    assert_eq!(report.user_title, "Widget Guide");
    assert_eq!(report.user_structure, vec!["Choosing widgets"]);
    assert_eq!(
        report.missing_entities,
        vec!["Maintenance schedule", "Warranty terms"]
    );
    assert_eq!(report.score, 60);
}

#[tokio::test]
async fn test_audit_user_page_unavailable() {
    let mock_server = MockServer::start().await;
    mount(&mock_server, "/mine", ResponseTemplate::new(500)).await;

    let config = config_for(&mock_server);
    let fetcher = HttpFetcher::new(&config.http).unwrap();

    let err = run_audit(
        &fetcher,
        &format!("{}/mine", mock_server.uri()),
        None,
        "widgets",
        Duration::from_secs(5),
    )
    .await
    .unwrap_err();

    assert!(matches!(
        err,
        AuditError::PageUnavailable {
            source: FetchError::Status { status: 500, .. },
            ..
        }
    ));
}
