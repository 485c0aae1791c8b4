//! Collection cycle tests
//!
//! Drives the full authenticate → fetch → project → publish cycle against a
//! wiremock device API and checks what a scrape would see.

mod common;

use bbox_exporter::bbox::WirelessBand;
use bbox_exporter::config::Config;
use bbox_exporter::error::ExporterError;
use bbox_exporter::exporter::Exporter;
use common::*;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn exporter_for(server: &MockServer) -> Exporter {
    Exporter::with_client(
        client_for(server),
        password(),
        vec![WirelessBand::Ghz24, WirelessBand::Ghz5],
    )
    .expect("Failed to create exporter")
}

/// Sample lines of a rendered exposition, comments stripped
fn sample_lines(rendered: &str) -> Vec<&str> {
    rendered
        .lines()
        .filter(|line| !line.starts_with('#') && !line.is_empty())
        .collect()
}

/// Login plus every resource except `broken`, which answers with an HTML error
/// page. Resources after `broken` must never be requested.
async fn mount_bbox_failing_at(server: &MockServer, broken: &str) {
    mount_login(server).await;
    let mut after_broken = false;
    for (resource, body) in resource_fixtures() {
        if resource == broken {
            Mock::given(method("GET"))
                .and(path(format!("/api/v1{}", resource)))
                .respond_with(ResponseTemplate::new(500).set_body_string("<html>error</html>"))
                .expect(1)
                .mount(server)
                .await;
            after_broken = true;
        } else if after_broken {
            Mock::given(method("GET"))
                .and(path(format!("/api/v1{}", resource)))
                .respond_with(ResponseTemplate::new(200).set_body_json(body))
                .expect(0)
                .mount(server)
                .await;
        } else {
            mount_resource(server, resource, body).await;
        }
    }
}

#[tokio::test]
async fn test_successful_cycle_publishes_full_snapshot() {
    // Given: A healthy device
    let server = MockServer::start().await;
    mount_bbox(&server).await;
    let exporter = exporter_for(&server);

    // When: Scraping once
    let rendered = exporter.scrape().await.expect("Failed to render");

    // Then: Availability is 1 and every group contributed samples
    assert!(rendered.contains("bbox_up 1"));
    assert!(rendered.contains("bbox_device_number_of_boots 12"));
    assert!(rendered.contains("bbox_service_enabled{service=\"upnp\"} 1"));
    assert!(rendered.contains("bbox_wan_received_bytes 2000000"));
    assert!(rendered.contains("bbox_wan_ftth_state 1"));
    assert!(rendered.contains("bbox_wan_diagnostics_min{mode=\"dns\"} 1"));
    assert!(rendered.contains("bbox_lan_connected_devices{link=\"wifi\"} 2"));
    assert!(rendered.contains("bbox_wireless_transmitted_bytes{frequency=\"5ghz\"} 400"));
    assert!(rendered.contains("bbox_dns_number_of_queries 42"));
    assert!(rendered.contains("bbox_iptv_channels 2"));
}

#[tokio::test]
async fn test_cycle_logs_in_then_fetches_in_fixed_order() {
    // Given: A healthy device
    let server = MockServer::start().await;
    mount_bbox(&server).await;
    let exporter = exporter_for(&server);

    // When: Running one cycle
    exporter.run_cycle().await.expect("cycle should succeed");

    // Then: Login comes first, then every resource in group order
    let requests = server.received_requests().await.expect("recording enabled");
    let paths: Vec<String> = requests.iter().map(|r| r.url.path().to_string()).collect();
    let mut expected = vec!["/api/v1/login".to_string()];
    expected.extend(
        resource_fixtures()
            .into_iter()
            .map(|(resource, _)| format!("/api/v1{}", resource)),
    );
    assert_eq!(paths, expected);
}

#[tokio::test]
async fn test_auth_failure_publishes_only_up_zero() {
    // Given: A device that answers the login without a session cookie
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/login"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(0)
        .mount(&server)
        .await;
    let exporter = exporter_for(&server);

    // When: Running one cycle
    let err = exporter.run_cycle().await.unwrap_err();
    let rendered = exporter.metrics().render().expect("Failed to render");

    // Then: No resource was fetched and only bbox_up 0 is published
    assert!(err.is_auth());
    assert_eq!(sample_lines(&rendered), vec!["bbox_up 0"]);
}

#[tokio::test]
async fn test_fetch_failure_aborts_remaining_groups() {
    // Given: A device whose LAN statistics endpoint is broken
    let server = MockServer::start().await;
    mount_bbox_failing_at(&server, "/lan/stats").await;
    let exporter = exporter_for(&server);

    // When: Running one cycle
    let err = exporter.run_cycle().await.unwrap_err();
    let rendered = exporter.metrics().render().expect("Failed to render");

    // Then: The error names the group and sub-resource, and nothing partial is published
    let message = err.to_string();
    assert!(message.starts_with("lan metrics:"), "{}", message);
    assert!(message.contains("/lan/stats"), "{}", message);
    assert!(!err.is_auth());
    assert_eq!(sample_lines(&rendered), vec!["bbox_up 0"]);
}

#[tokio::test]
async fn test_failed_cycle_clears_previous_samples() {
    // Given: An exporter that completed one good cycle
    let server = MockServer::start().await;
    mount_bbox(&server).await;
    let exporter = exporter_for(&server);
    exporter.run_cycle().await.expect("first cycle should succeed");
    assert!(exporter
        .metrics()
        .render()
        .unwrap()
        .contains("bbox_dns_number_of_queries 42"));

    // When: The device becomes unreachable for the next cycle
    server.reset().await;
    let result = exporter.run_cycle().await;

    // Then: The stale samples are gone
    assert!(result.is_err());
    let rendered = exporter.metrics().render().expect("Failed to render");
    assert_eq!(sample_lines(&rendered), vec!["bbox_up 0"]);
}

#[tokio::test]
async fn test_empty_resource_fails_cycle() {
    // Given: A device answering an empty array for the WAN statistics
    let server = MockServer::start().await;
    mount_login(&server).await;
    for (resource, body) in resource_fixtures() {
        let body = if resource == "/wan/ip/stats" {
            serde_json::json!([])
        } else {
            body
        };
        mount_resource(&server, resource, body).await;
    }
    let exporter = exporter_for(&server);

    // When: Running one cycle
    let err = exporter.run_cycle().await.unwrap_err();

    // Then: The cycle fails on the empty response instead of panicking
    match err {
        ExporterError::Group { source, .. } => assert!(matches!(
            *source,
            ExporterError::EmptyResponse {
                resource: "/wan/ip/stats"
            }
        )),
        other => panic!("unexpected error: {}", other),
    }
    assert!(exporter.metrics().render().unwrap().contains("bbox_up 0"));
}

#[tokio::test]
async fn test_identical_responses_give_identical_scrapes() {
    // Given: A device whose responses do not change
    let server = MockServer::start().await;
    mount_bbox(&server).await;
    let exporter = exporter_for(&server);

    // When: Scraping twice
    let first = exporter.scrape().await.expect("first scrape");
    let second = exporter.scrape().await.expect("second scrape");

    // Then: Both scrapes are identical
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_each_cycle_logs_in_again() {
    // Given: A healthy device
    let server = MockServer::start().await;
    mount_bbox(&server).await;
    let exporter = exporter_for(&server);

    // When: Running three cycles
    for _ in 0..3 {
        exporter.run_cycle().await.expect("cycle should succeed");
    }

    // Then: Every cycle posted to /login
    let logins = server
        .received_requests()
        .await
        .expect("recording enabled")
        .iter()
        .filter(|r| r.url.path() == "/api/v1/login")
        .count();
    assert_eq!(logins, 3);
}

#[test]
fn test_config_load() {
    // Given: The shipped default configuration file
    // When: Loading it
    let config = Config::load("config/Default.toml").expect("Failed to load default config");

    // Then: It carries the documented defaults
    assert_eq!(config.bbox.endpoint, "https://mabbox.bytel.fr");
    assert_eq!(config.server.port, 9311);
    assert_eq!(config.server.metrics_path, "/metrics");
    assert_eq!(
        config.bbox.wireless_bands,
        vec![WirelessBand::Ghz24, WirelessBand::Ghz5]
    );
}
