//! End-to-end pipeline tests: GitHub client → cache → aggregation → grid.

use std::sync::Arc;
use std::time::Duration;

use chrono::{NaiveDate, TimeZone, Utc};
use commitgrid_common::time::MockClock;
use commitgrid_core::ContributionService;
use commitgrid_domain::{
    Config, FetchError, Grid, HeatmapLayout, SourceConfig, WindowConfig,
};
use commitgrid_infra::GithubClient;
use once_cell::sync::Lazy;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

static TRACING: Lazy<()> = Lazy::new(|| {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .init();
});

fn test_config(window_days: u32) -> Config {
    Config {
        source: SourceConfig { login: "octocat".into(), ..SourceConfig::default() },
        window: WindowConfig { length_days: window_days, ..WindowConfig::default() },
        ..Config::default()
    }
}

fn test_clock() -> MockClock {
    MockClock::at(Utc.with_ymd_and_hms(2026, 3, 14, 12, 0, 0).unwrap())
}

fn service_for(
    server: &MockServer,
    window_days: u32,
    clock: MockClock,
) -> ContributionService<MockClock> {
    Lazy::force(&TRACING);
    let config = test_config(window_days);
    let client = GithubClient::new(&config.source)
        .expect("http client")
        .with_base_url(server.uri());
    ContributionService::with_clock(Arc::new(client), config, clock)
}

fn events_body() -> serde_json::Value {
    json!([
        {
            "type": "PushEvent",
            "repo": { "name": "octocat/hello-world" },
            "created_at": "2026-03-10T09:00:00Z",
            "payload": { "size": 5, "commits": [{}, {}, {}, {}, {}] }
        },
        {
            "type": "WatchEvent",
            "repo": { "name": "octocat/spoon-knife" },
            "created_at": "2026-03-12T18:30:00Z",
            "payload": {}
        }
    ])
}

#[tokio::test]
async fn report_flows_from_wire_to_heatmap() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/octocat/events"))
        .respond_with(ResponseTemplate::new(200).set_body_json(events_body()))
        .expect(1)
        .mount(&server)
        .await;

    let service = service_for(&server, 7, test_clock());
    let report = service.contributions().await.expect("report");

    assert_eq!(report.days.len(), 7);
    assert_eq!(report.days[0].date, NaiveDate::from_ymd_opt(2026, 3, 8).unwrap());
    assert_eq!(report.days[2].count, 5);
    assert_eq!(report.days[2].level, 2);
    assert_eq!(report.summary.total_contributions, 5);
    assert_eq!(report.summary.active_days, 1);
    assert_eq!(report.summary.estimated_lines, 210);
    assert_eq!(report.event_stats.repos, 2);
    assert_eq!(report.event_stats.stars, 1);
    assert_eq!(report.feed.len(), 2);
    assert!(!report.stale);

    let Grid::Weekly(grid) = service.heatmap(&report.days, HeatmapLayout::WeeklyGrid) else {
        panic!("expected weekly grid");
    };
    let real_days = grid.weeks.iter().flatten().filter(|c| !c.is_empty()).count();
    assert_eq!(real_days, 7);
    assert!(grid.cell_count() >= 7);
}

#[tokio::test]
async fn rate_limited_refresh_serves_the_stale_snapshot() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/octocat/events"))
        .respond_with(ResponseTemplate::new(200).set_body_json(events_body()))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/users/octocat/events"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;

    let clock = test_clock();
    let service = service_for(&server, 7, clock.clone());

    let fresh = service.contributions().await.expect("first report");
    assert!(!fresh.stale);

    // Past the TTL the refresh hits 429; the expired snapshot must still
    // be served, flagged as stale.
    clock.advance(Duration::from_secs(900));
    let fallback = service.contributions().await.expect("stale report");

    assert!(fallback.stale);
    assert_eq!(fallback.fetched_at, fresh.fetched_at);
    assert_eq!(fallback.summary.total_contributions, 5);
    assert_eq!(server.received_requests().await.unwrap().len(), 2);
}

#[tokio::test]
async fn rate_limited_fetch_with_empty_cache_is_no_data() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;

    let service = service_for(&server, 7, test_clock());

    let err = service.contributions().await.unwrap_err();
    assert_eq!(err, FetchError::RateLimited);

    // Nothing was cached by the failed fetch: a retry is still "no data".
    let err = service.contributions().await.unwrap_err();
    assert_eq!(err, FetchError::RateLimited);
}

#[tokio::test]
async fn simultaneous_triggers_share_one_upstream_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/octocat/events"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(events_body())
                .set_delay(Duration::from_millis(100)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let service = Arc::new(service_for(&server, 7, test_clock()));

    let (a, b) = tokio::join!(service.contributions(), service.contributions());

    assert_eq!(a.expect("first caller"), b.expect("second caller"));
    assert_eq!(server.received_requests().await.unwrap().len(), 1);
}
