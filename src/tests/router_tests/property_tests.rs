// src/tests/router_tests/property_tests.rs

use crate::router::handle;
use crate::tests::utils::{
    body_string, make_scraper, request, StubFetcher, StubRates, FULL_LISTING,
};
use serde_json::{json, Value};

const LISTING_URL: &str = "https://www.zillow.com/homedetails/742-Evergreen-Terrace/29710887_zpid/";

fn encoded(url: &str) -> String {
    url::form_urlencoded::byte_serialize(url.as_bytes()).collect()
}

#[test]
fn property_lookup_returns_the_full_record() {
    let rates = StubRates::returning(87);
    let scraper = make_scraper(
        StubFetcher::with_page(LISTING_URL, FULL_LISTING),
        rates.clone(),
    );

    let uri = format!("/api/property?url={}", encoded(LISTING_URL));
    let mut resp = handle(request("GET", &uri), &scraper).unwrap();

    assert_eq!(resp.status(), 200);
    assert_eq!(resp.headers()["Content-Type"], "application/json");

    let body: Value = serde_json::from_str(&body_string(&mut resp)).unwrap();
    assert_eq!(
        body,
        json!({
            "address": "742 Evergreen Terrace, Springfield, OR 97477",
            "price": 389900.0,
            "monthlyRent": 1850.0,
            "monthlyHoa": 45.0,
            "monthlyTax": 400.0,
            "monthlyInsurance": 87,
            "yearlyAppreciationRate": 5.2,
            "yearBuilt": 1987
        })
    );
    assert_eq!(rates.calls().len(), 1);
}

#[test]
fn sparse_listing_defaults_missing_fields() {
    let page = r#"<html><body>
        <div class="zsg-content-header addr"><h1>123 Main St</h1></div>
        <div class="main-row home-summary-row">$500,000</div>
        <section id="hdp-neighborhood"><div>
            <h4 class="zsg-content_collapsed">Neighborhood</h4>
            <p>values have risen 4.5% this year</p>
        </div></section>
    </body></html>"#;
    let scraper = make_scraper(
        StubFetcher::with_page("https://listing.test/123", page),
        StubRates::failing(),
    );

    let mut resp = handle(
        request("GET", "/api/property?url=https%3A%2F%2Flisting.test%2F123"),
        &scraper,
    )
    .unwrap();
    assert_eq!(resp.status(), 200);

    let body: Value = serde_json::from_str(&body_string(&mut resp)).unwrap();
    assert_eq!(body["address"], "123 Main St");
    assert_eq!(body["price"], 500000.0);
    assert_eq!(body["monthlyRent"], 0.0);
    assert_eq!(body["monthlyHoa"], 0.0);
    assert_eq!(body["monthlyTax"], 0.0);
    assert_eq!(body["monthlyInsurance"], 0);
    assert_eq!(body["yearlyAppreciationRate"], 4.5);
    assert_eq!(body["yearBuilt"], 0);
}

#[test]
fn off_market_listing_reports_sentinel_and_skips_insurance() {
    let page = r#"<div class="main-row home-summary-row">Off Market</div>"#;
    let rates = StubRates::returning(87);
    let scraper = make_scraper(
        StubFetcher::with_page("https://listing.test/off", page),
        rates.clone(),
    );

    let mut resp = handle(
        request("GET", "/api/property?url=https://listing.test/off"),
        &scraper,
    )
    .unwrap();

    let body: Value = serde_json::from_str(&body_string(&mut resp)).unwrap();
    assert_eq!(body["price"], -1.0);
    assert_eq!(body["monthlyInsurance"], 0);
    assert!(rates.calls().is_empty());
}

#[test]
fn fetch_failure_is_an_upstream_error() {
    let scraper = make_scraper(StubFetcher::default(), StubRates::returning(87));

    let err = handle(
        request("GET", "/api/property?url=https://unreachable.test/"),
        &scraper,
    )
    .err()
    .unwrap();

    assert_eq!(err.status(), 502);
}

#[test]
fn one_bad_page_does_not_affect_the_next_request() {
    let scraper = make_scraper(
        StubFetcher::with_page("https://listing.test/ok", FULL_LISTING)
            .page("https://listing.test/garbled", "<<<<not really html"),
        StubRates::returning(87),
    );

    let garbled = handle(
        request("GET", "/api/property?url=https://listing.test/garbled"),
        &scraper,
    );
    assert_eq!(garbled.unwrap().status(), 200);

    let missing = handle(
        request("GET", "/api/property?url=https://listing.test/missing"),
        &scraper,
    );
    assert!(missing.is_err());

    let mut ok = handle(
        request("GET", "/api/property?url=https://listing.test/ok"),
        &scraper,
    )
    .unwrap();
    let body: Value = serde_json::from_str(&body_string(&mut ok)).unwrap();
    assert_eq!(body["monthlyInsurance"], 87);
}

#[test]
fn missing_url_is_a_bad_request() {
    let scraper = make_scraper(StubFetcher::default(), StubRates::returning(87));

    for uri in ["/api/property", "/api/property?url=", "/api/property?link=x"] {
        let err = handle(request("GET", uri), &scraper).err().unwrap();
        assert_eq!(err.status(), 400, "{uri}");
    }
}

#[test]
fn unknown_routes_and_methods() {
    let scraper = make_scraper(StubFetcher::default(), StubRates::returning(87));

    let err = handle(request("GET", "/api/nothing"), &scraper).err().unwrap();
    assert_eq!(err.status(), 404);

    let err = handle(request("DELETE", "/api/property?url=x"), &scraper).err().unwrap();
    assert_eq!(err.status(), 405);
}
