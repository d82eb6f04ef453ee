//! Full scrape flow over a static snapshot, and offline extraction

use kodegen_tools_listingscrape::config::ScrapeConfig;
use kodegen_tools_listingscrape::driver::{Interaction, SnapshotPage};
use kodegen_tools_listingscrape::listing::{CardErrorPolicy, SENTINEL};
use kodegen_tools_listingscrape::output::{OutputFormat, read_csv};
use kodegen_tools_listingscrape::{ScrapeError, run_offline, scrape};

mod common;
use common::{CardFixture, create_test_dir, listing_page};

fn fast_config() -> ScrapeConfig {
    ScrapeConfig::builder()
        .url("https://food.grab.com/sg/en")
        .location("Choa Chu Kang North 6")
        .input_settle_delay_ms(0)
        .scroll_settle_delay_ms(0)
        .content_wait_timeout_secs(1)
        .content_poll_interval_ms(10)
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_scrape_runs_every_step_in_order() {
    let cards = [
        CardFixture::complete("Alpha", "/sg/en/restaurant/alpha/a1"),
        CardFixture::complete("Beta", "/sg/en/restaurant/beta/b2"),
    ];
    let page = SnapshotPage::with_scroll_heights(&listing_page(&cards), [1200, 2400, 2400]);
    let config = fast_config();

    let report = scrape(&page, &config).await.unwrap();

    assert_eq!(page.visited(), vec!["https://food.grab.com/sg/en".to_string()]);
    assert!(matches!(
        page.interactions().last(),
        Some(Interaction::Click { target }) if target.contains("submitBtn___2roqB")
    ));
    assert_eq!(page.scroll_count(), 2);
    assert_eq!(report.records.len(), 2);
    assert_eq!(report.records[1].id, "b2");
}

#[tokio::test(start_paused = true)]
async fn test_scrape_fails_when_listings_never_load() {
    let page = SnapshotPage::parse(&listing_page(&[]));
    let config = fast_config();

    let err = scrape(&page, &config).await.unwrap_err();

    assert!(matches!(err, ScrapeError::ContentTimeout { .. }));
    assert_eq!(page.scroll_count(), 0);
}

#[tokio::test]
async fn test_scrape_stops_before_waiting_when_form_is_missing() {
    let page = SnapshotPage::parse("<html><body><p>Maintenance</p></body></html>");
    let config = fast_config();

    let err = scrape(&page, &config).await.unwrap_err();

    assert!(matches!(err, ScrapeError::LocationInputMissing(_)));
}

#[tokio::test]
async fn test_offline_run_writes_csv() {
    let dir = create_test_dir();
    let html_path = dir.path().join("saved.html");
    let output = dir.path().join("restaurant_data.csv");
    let mut second = CardFixture::complete("Beta", "/sg/en/restaurant/beta/b2");
    second.rating = None;
    let cards = [
        CardFixture::complete("Alpha", "/sg/en/restaurant/alpha/a1"),
        second,
        CardFixture::complete("Gamma", "/sg/en/restaurant/gamma/g3"),
    ];
    std::fs::write(&html_path, listing_page(&cards)).unwrap();

    let config = ScrapeConfig::builder()
        .url("https://food.grab.com/sg/en")
        .location("Offline")
        .output_path(output.clone())
        .card_error_policy(CardErrorPolicy::Abort)
        .build()
        .unwrap();

    let summary = run_offline(&html_path, &config).await.unwrap();

    assert_eq!(summary.output_path, output);
    assert_eq!(summary.records_written, 3);
    assert_eq!(summary.cards_found, 3);
    assert!(!summary.aborted);

    let records = read_csv(&output).unwrap();
    let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Alpha", "Beta", "Gamma"]);
    assert_eq!(records[1].rating, SENTINEL);
}

#[tokio::test]
async fn test_offline_run_writes_json() {
    let dir = create_test_dir();
    let html_path = dir.path().join("saved.html");
    let output = dir.path().join("listings.json");
    std::fs::write(
        &html_path,
        listing_page(&[CardFixture::complete("Solo", "/sg/en/restaurant/solo/s1")]),
    )
    .unwrap();

    let config = ScrapeConfig::builder()
        .url("https://food.grab.com/sg/en")
        .location("Offline")
        .output_path(output.clone())
        .output_format(OutputFormat::Json)
        .build()
        .unwrap();

    run_offline(&html_path, &config).await.unwrap();

    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(value[0]["id"], "s1");
}

#[tokio::test]
async fn test_offline_run_with_missing_file_writes_nothing() {
    let dir = create_test_dir();
    let output = dir.path().join("never.csv");
    let config = ScrapeConfig::builder()
        .url("https://food.grab.com/sg/en")
        .location("Offline")
        .output_path(output.clone())
        .build()
        .unwrap();

    let err = run_offline(&dir.path().join("missing.html"), &config)
        .await
        .unwrap_err();

    assert!(matches!(err, ScrapeError::Io(_)));
    assert!(!output.exists());
}

#[tokio::test]
#[ignore] // Requires browser installation and network access
async fn test_live_run_against_listing_site() {
    let dir = create_test_dir();
    let config = ScrapeConfig::builder()
        .url("https://food.grab.com/sg/en")
        .location("PT Singapore - Choa Chu Kang North 6, Singapore, 689577")
        .output_path(dir.path().join("restaurant_data.csv"))
        .navigation_timeout_secs(60)
        .build()
        .unwrap();

    let summary = kodegen_tools_listingscrape::run(&config).await.unwrap();

    assert!(summary.output_path.exists());
}
