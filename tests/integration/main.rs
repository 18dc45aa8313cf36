//! Integration tests for Serp-Velocity
//!
//! These tests use wiremock to stand in for the results page, autocomplete
//! and content endpoints, and drive the public API over real HTTP.

mod audit;
mod mining;
mod serp;
mod tracking;

use serp_velocity::config::{Config, HttpConfig, MiningConfig, SearchConfig, TrackingConfig};
use wiremock::MockServer;

/// Configuration pointing every endpoint at the mock server
pub fn config_for(server: &MockServer) -> Config {
    Config {
        search: SearchConfig {
            serp_base_url: format!("{}/search", server.uri()),
            autocomplete_base_url: format!("{}/complete/search", server.uri()),
            language: "en".to_string(),
        },
        http: HttpConfig {
            request_timeout_ms: 300,
            autocomplete_timeout_ms: 300,
            ..HttpConfig::default()
        },
        tracking: TrackingConfig {
            fetch_depth: 10,
            min_inter_request_delay_ms: 100,
        },
        mining: MiningConfig::default(),
    }
}

/// Results page markup with one organic container per link
pub fn serp_page(links: &[&str]) -> String {
    let entries: String = links
        .iter()
        .enumerate()
        .map(|(i, link)| {
            format!(
                r#"<div class="g"><a href="{link}"><h3>Result {n}</h3></a><div class="VwiC3b">Snippet {n}</div></div>"#,
                link = link,
                n = i + 1
            )
        })
        .collect();

    format!("<html><body><div id=\"search\">{}</div></body></html>", entries)
}
