//! Listing card extraction against static HTML snapshots

use anyhow::{Result, anyhow};
use kodegen_tools_listingscrape::driver::{ElementHandle, PageDriver, SnapshotElement, SnapshotPage};
use kodegen_tools_listingscrape::listing::{
    CardErrorPolicy, CoordinateRule, ListingRecord, ListingSelectors, SENTINEL, extract_card,
    extract_listings,
};

mod common;
use common::{CardFixture, listing_page};

#[tokio::test]
async fn test_complete_card_has_all_fields() {
    let page = SnapshotPage::parse(&listing_page(&[CardFixture::complete(
        "Ah Hock Noodles",
        "/sg/en/restaurant/ah-hock-noodles-delivery/4-C2X1",
    )]));

    let report = extract_listings(&page, &ListingSelectors::default(), CardErrorPolicy::Skip)
        .await
        .unwrap();

    assert_eq!(report.cards_found, 1);
    assert_eq!(
        report.records,
        vec![ListingRecord {
            name: "Ah Hock Noodles".into(),
            cuisine: "Chinese, Noodles".into(),
            rating: "4.5".into(),
            delivery_time: "25 min".into(),
            distance: "3.2 km".into(),
            latitude: "1.3800".into(),
            longitude: "103.7500".into(),
            id: "4-C2X1".into(),
        }]
    );
}

#[tokio::test]
async fn test_empty_card_has_every_key_as_sentinel() {
    let empty = CardFixture {
        name: None,
        cuisine: None,
        rating: None,
        delivery: None,
        lat_lng: None,
        href: None,
    };
    let page = SnapshotPage::parse(&listing_page(&[empty]));

    let report = extract_listings(&page, &ListingSelectors::default(), CardErrorPolicy::Skip)
        .await
        .unwrap();

    assert_eq!(report.records.len(), 1);
    let record = &report.records[0];
    assert_eq!(record.fields().len(), ListingRecord::COLUMNS.len());
    for (key, value) in record.fields() {
        assert_eq!(value, SENTINEL, "field {key} should be the sentinel");
    }
}

#[tokio::test]
async fn test_missing_rating_only_affects_rating() {
    let mut card = CardFixture::complete("Nasi Lemak House", "/sg/en/restaurant/nasi/abc123");
    card.rating = None;
    let page = SnapshotPage::parse(&listing_page(&[card]));

    let report = extract_listings(&page, &ListingSelectors::default(), CardErrorPolicy::Skip)
        .await
        .unwrap();
    let record = &report.records[0];

    assert_eq!(record.rating, SENTINEL);
    assert_eq!(record.name, "Nasi Lemak House");
    assert_eq!(record.delivery_time, "25 min");
    assert_eq!(record.id, "abc123");
    assert_eq!(record.missing_fields(), 1);
}

#[tokio::test]
async fn test_empty_text_is_treated_as_missing() {
    let mut card = CardFixture::complete("Kopi Corner", "/sg/en/restaurant/kopi/k1");
    card.cuisine = Some("   ");
    let page = SnapshotPage::parse(&listing_page(&[card]));

    let report = extract_listings(&page, &ListingSelectors::default(), CardErrorPolicy::Skip)
        .await
        .unwrap();

    assert_eq!(report.records[0].cuisine, SENTINEL);
}

#[tokio::test]
async fn test_delivery_blob_without_separator() {
    let mut card = CardFixture::complete("Roti Prata", "/sg/en/restaurant/prata/p9");
    card.delivery = Some("Closed");
    let page = SnapshotPage::parse(&listing_page(&[card]));

    let report = extract_listings(&page, &ListingSelectors::default(), CardErrorPolicy::Skip)
        .await
        .unwrap();
    let record = &report.records[0];

    assert_eq!(record.delivery_time, SENTINEL);
    assert_eq!(record.distance, SENTINEL);
    assert_eq!(record.rating, "4.5");
}

#[tokio::test]
async fn test_three_cards_in_document_order() {
    let mut second = CardFixture::complete("Second", "/sg/en/restaurant/second/id-2");
    second.rating = None;
    let cards = [
        CardFixture::complete("First", "/sg/en/restaurant/first/id-1"),
        second,
        CardFixture::complete("Third", "https://food.grab.com/sg/en/restaurant/third/id-3"),
    ];
    let page = SnapshotPage::parse(&listing_page(&cards));

    let report = extract_listings(&page, &ListingSelectors::default(), CardErrorPolicy::Skip)
        .await
        .unwrap();

    let names: Vec<&str> = report.records.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["First", "Second", "Third"]);
    let ids: Vec<&str> = report.records.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["id-1", "id-2", "id-3"]);
    assert_eq!(report.records[0].rating, "4.5");
    assert_eq!(report.records[1].rating, SENTINEL);
    assert_eq!(report.records[2].rating, "4.5");
    assert!(report.skipped.is_empty());
    assert!(!report.aborted);
}

#[tokio::test]
async fn test_no_cards_yields_empty_report() {
    let page = SnapshotPage::parse(&listing_page(&[]));

    let report = extract_listings(&page, &ListingSelectors::default(), CardErrorPolicy::Skip)
        .await
        .unwrap();

    assert_eq!(report.cards_found, 0);
    assert!(report.records.is_empty());
}

#[tokio::test]
async fn test_fields_do_not_leak_between_cards() {
    let mut first = CardFixture::complete("Lonely", "/sg/en/restaurant/lonely/l1");
    first.rating = None;
    first.href = None;
    let cards = [first, CardFixture::complete("Busy", "/sg/en/restaurant/busy/b2")];
    let page = SnapshotPage::parse(&listing_page(&cards));

    let report = extract_listings(&page, &ListingSelectors::default(), CardErrorPolicy::Skip)
        .await
        .unwrap();

    assert_eq!(report.records[0].rating, SENTINEL);
    assert_eq!(report.records[0].id, SENTINEL);
    assert_eq!(report.records[1].id, "b2");
}

#[tokio::test]
async fn test_coordinates_from_separate_elements() {
    let html = r#"<html><body>
        <div class="card">
          <span class="latitude___1B8CS">1.3521</span>
          <span class="longitude___1EplB">103.8198</span>
        </div>
        <div class="card">
          <span class="latitude___1B8CS">1.3000</span>
        </div>
    </body></html>"#;
    let selectors = ListingSelectors {
        card: ".card".into(),
        coordinates: CoordinateRule::separate_elements(),
        ..ListingSelectors::default()
    };
    let page = SnapshotPage::parse(html);
    let cards = page.find_all(".card").await.unwrap();

    let first = extract_card(&cards[0], &selectors).await.unwrap();
    assert_eq!(first.latitude, "1.3521");
    assert_eq!(first.longitude, "103.8198");

    // Half a coordinate pair is a mismatch for both halves
    let second = extract_card(&cards[1], &selectors).await.unwrap();
    assert_eq!(second.latitude, SENTINEL);
    assert_eq!(second.longitude, SENTINEL);
}

#[tokio::test]
async fn test_missing_coordinate_attribute_is_per_field() {
    let html = r#"<div class="card"><span class="merchant-latlng" data-lat="1.35"></span></div>"#;
    let selectors = ListingSelectors {
        card: ".card".into(),
        ..ListingSelectors::default()
    };
    let page = SnapshotPage::parse(html);
    let card = page.find_first(".card").await.unwrap().unwrap();

    let record = extract_card(&card, &selectors).await.unwrap();
    assert_eq!(record.latitude, "1.35");
    assert_eq!(record.longitude, SENTINEL);
}

/// Page whose Nth card fails every lookup with a backend error
struct FlakyPage {
    inner: SnapshotPage,
    failing_card: usize,
}

struct FlakyElement {
    inner: SnapshotElement,
    broken: bool,
}

impl ElementHandle for FlakyElement {
    async fn find_first(&self, selector: &str) -> Result<Option<Self>> {
        if self.broken {
            return Err(anyhow!("node detached"));
        }
        Ok(self.inner.find_first(selector).await?.map(|inner| FlakyElement {
            inner,
            broken: false,
        }))
    }

    async fn find_all(&self, selector: &str) -> Result<Vec<Self>> {
        if self.broken {
            return Err(anyhow!("node detached"));
        }
        Ok(self
            .inner
            .find_all(selector)
            .await?
            .into_iter()
            .map(|inner| FlakyElement {
                inner,
                broken: false,
            })
            .collect())
    }

    async fn text(&self) -> Result<Option<String>> {
        self.inner.text().await
    }

    async fn attribute(&self, name: &str) -> Result<Option<String>> {
        self.inner.attribute(name).await
    }

    async fn click(&self) -> Result<()> {
        self.inner.click().await
    }

    async fn clear(&self) -> Result<()> {
        self.inner.clear().await
    }

    async fn type_text(&self, text: &str) -> Result<()> {
        self.inner.type_text(text).await
    }
}

impl PageDriver for FlakyPage {
    type Element = FlakyElement;

    async fn navigate(&self, url: &str) -> Result<()> {
        self.inner.navigate(url).await
    }

    async fn find_first(&self, selector: &str) -> Result<Option<Self::Element>> {
        Ok(self.find_all(selector).await?.into_iter().next())
    }

    async fn find_all(&self, selector: &str) -> Result<Vec<Self::Element>> {
        Ok(self
            .inner
            .find_all(selector)
            .await?
            .into_iter()
            .enumerate()
            .map(|(index, inner)| FlakyElement {
                inner,
                broken: index == self.failing_card,
            })
            .collect())
    }

    async fn document_height(&self) -> Result<u64> {
        self.inner.document_height().await
    }

    async fn scroll_to_bottom(&self) -> Result<()> {
        self.inner.scroll_to_bottom().await
    }
}

fn flaky_three_cards() -> FlakyPage {
    let cards = [
        CardFixture::complete("One", "/sg/en/restaurant/one/1"),
        CardFixture::complete("Two", "/sg/en/restaurant/two/2"),
        CardFixture::complete("Three", "/sg/en/restaurant/three/3"),
    ];
    FlakyPage {
        inner: SnapshotPage::parse(&listing_page(&cards)),
        failing_card: 1,
    }
}

#[tokio::test]
async fn test_skip_policy_isolates_failing_card() {
    let page = flaky_three_cards();

    let report = extract_listings(&page, &ListingSelectors::default(), CardErrorPolicy::Skip)
        .await
        .unwrap();

    let names: Vec<&str> = report.records.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["One", "Three"]);
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.skipped[0].index, 1);
    assert!(report.skipped[0].error.contains("node detached"));
    assert!(!report.aborted);
}

#[tokio::test]
async fn test_abort_policy_returns_records_so_far() {
    let page = flaky_three_cards();

    let report = extract_listings(&page, &ListingSelectors::default(), CardErrorPolicy::Abort)
        .await
        .unwrap();

    let names: Vec<&str> = report.records.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["One"]);
    assert_eq!(report.cards_found, 3);
    assert!(report.aborted);
}

#[tokio::test]
async fn test_invalid_card_selector_is_an_error() {
    let page = SnapshotPage::parse(&listing_page(&[]));
    let selectors = ListingSelectors {
        card: "div[".into(),
        ..ListingSelectors::default()
    };

    assert!(
        extract_listings(&page, &selectors, CardErrorPolicy::Skip)
            .await
            .is_err()
    );
}
