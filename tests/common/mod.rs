//! Shared fixtures for the listingscrape test suite

#![allow(dead_code)]

use tempfile::TempDir;

/// One listing card as it appears in the rendered listing markup
#[derive(Debug, Clone)]
pub struct CardFixture {
    pub name: Option<&'static str>,
    pub cuisine: Option<&'static str>,
    pub rating: Option<&'static str>,
    pub delivery: Option<&'static str>,
    pub lat_lng: Option<(&'static str, &'static str)>,
    pub href: Option<&'static str>,
}

impl CardFixture {
    pub fn complete(name: &'static str, id_path: &'static str) -> Self {
        Self {
            name: Some(name),
            cuisine: Some("Chinese, Noodles"),
            rating: Some("4.5"),
            delivery: Some("25 min \u{2022} 3.2 km"),
            lat_lng: Some(("1.3800", "103.7500")),
            href: Some(id_path),
        }
    }

    pub fn render(&self) -> String {
        let mut html = String::from(r#"<div class="ant-col-24 RestaurantListCol___1FZ8V">"#);
        if let Some(name) = self.name {
            html.push_str(&format!(r#"<p class="name___2epcT">{name}</p>"#));
        }
        if let Some(cuisine) = self.cuisine {
            html.push_str(&format!(r#"<div class="cuisine___T2tCh">{cuisine}</div>"#));
        }
        if let Some(rating) = self.rating {
            html.push_str(&format!(r#"<div class="ant-rate-text">{rating}</div>"#));
        }
        if let Some(delivery) = self.delivery {
            html.push_str(&format!(
                r#"<div class="numbers___2xZGn"><div class="numbersChild___2qKMV">Promo</div><div class="numbersChild___2qKMV">{delivery}</div></div>"#
            ));
        }
        if let Some((lat, lng)) = self.lat_lng {
            html.push_str(&format!(
                r#"<span class="merchant-latlng" data-lat="{lat}" data-lng="{lng}"></span>"#
            ));
        }
        if let Some(href) = self.href {
            html.push_str(&format!(r#"<a href="{href}">Open</a>"#));
        }
        html.push_str("</div>");
        html
    }
}

/// Full listing page containing the location form and `cards`
pub fn listing_page(cards: &[CardFixture]) -> String {
    let body: String = cards.iter().map(CardFixture::render).collect();
    format!(
        r#"<!DOCTYPE html>
<html>
<head><title>Food delivery</title></head>
<body>
  <input id="location-input" placeholder="Enter your location">
  <button class="ant-btn submitBtn___2roqB ant-btn-primary">Search</button>
  <div class="RestaurantList">{body}</div>
</body>
</html>"#
    )
}

/// Creates a temporary directory for test output
pub fn create_test_dir() -> TempDir {
    TempDir::new().expect("create temp dir")
}
