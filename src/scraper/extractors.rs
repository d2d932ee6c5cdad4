//! Field extractors for a listing page.
//!
//! Each function reads the document tree and returns at most one value. None of
//! them fail: a missing node or an unparseable fragment is just `None`, and the
//! orchestrator falls back to the field's zero value.

use crate::domain::{normalize_price, OFF_MARKET};
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

fn selector(css: &str) -> Selector {
    Selector::parse(css).unwrap()
}

static ADDRESS: LazyLock<Selector> = LazyLock::new(|| selector(".zsg-content-header.addr h1"));
static PRICE_ROW: LazyLock<Selector> = LazyLock::new(|| selector(".main-row.home-summary-row"));
static ESTIMATES: LazyLock<Selector> = LazyLock::new(|| selector(".estimates"));
static SPAN: LazyLock<Selector> = LazyLock::new(|| selector("span"));
static ZEST_TITLE: LazyLock<Selector> = LazyLock::new(|| selector(".zest-title"));
static ZEST_VALUE: LazyLock<Selector> = LazyLock::new(|| selector(".zest-value"));
static TOP_FACTS: LazyLock<Selector> =
    LazyLock::new(|| selector(".fact-group-container.zsg-content-component.top-facts"));
static COST_LABEL: LazyLock<Selector> = LazyLock::new(|| selector(".description.zsg-h4"));
static VENDOR_COST: LazyLock<Selector> = LazyLock::new(|| selector(".vendor-cost"));
static FACTS_LIST: LazyLock<Selector> =
    LazyLock::new(|| selector("div.hdp-facts .fact-group-container ul"));
static BEDS_BATHS: LazyLock<Selector> = LazyLock::new(|| selector("span.addr_bbs"));
static PROPERTY_ID: LazyLock<Selector> = LazyLock::new(|| selector("#zpidParam"));
static LOAN_CALCULATOR: LazyLock<Selector> =
    LazyLock::new(|| selector("#loan-calculator-container"));
static NEIGHBORHOOD_HEADING: LazyLock<Selector> =
    LazyLock::new(|| selector("#hdp-neighborhood h4.zsg-content_collapsed"));

static CURRENCY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$[0-9]+(,[0-9]+)?").unwrap());
static HOA_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)hoa fee: \$[0-9]*/mo").unwrap());
static YEAR_BUILT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)built in (\d{4})").unwrap());
static SQFT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[-+] ?)?([0-9]+(?:,[0-9]+)?) (?:sqft|square)$").unwrap());

const TAX_LABEL: &str = "Property tax";

fn text_of(el: ElementRef) -> String {
    el.text().collect()
}

fn parent_element(el: ElementRef) -> Option<ElementRef> {
    el.parent().and_then(ElementRef::wrap)
}

/// First "$1,234"-shaped substring, normalized.
fn first_currency(text: &str) -> Option<f64> {
    CURRENCY_RE.find(text).map(|m| normalize_price(m.as_str()))
}

pub fn address(doc: &Html) -> Option<String> {
    doc.select(&ADDRESS)
        .next()
        .map(|el| text_of(el).trim().to_string())
}

/// The sale-price row. A positive amount wins; otherwise an "Off Market" row
/// is reported as [`OFF_MARKET`].
pub fn listed_price(doc: &Html) -> Option<f64> {
    let mut off_market = false;

    for row in doc.select(&PRICE_ROW) {
        let price = normalize_price(&text_of(row));
        if price > 0.0 {
            return Some(price);
        }
        off_market |= price == OFF_MARKET;
    }

    off_market.then_some(OFF_MARKET)
}

/// The estimate widget: second child block of `.estimates`, second span inside
/// it. Those positions are the only place that layout reliably exposes the
/// number; keep them here so a markup change touches one function.
///
/// Only the first `.estimates` block is looked at; children of later blocks
/// never count toward the position.
pub fn estimate_price(doc: &Html) -> Option<f64> {
    let block = doc.select(&ESTIMATES).next()?;
    let widget = block.children().filter_map(ElementRef::wrap).nth(1)?;
    let span = widget.select(&SPAN).nth(1)?;

    Some(normalize_price(&text_of(span)))
}

/// Listed price, falling back to the estimate widget when the row is missing,
/// off market, or garbled. An off-market row with no usable estimate stays
/// [`OFF_MARKET`]; nothing at all is `0.0`.
pub fn price(doc: &Html) -> f64 {
    let listed = listed_price(doc);
    if let Some(price) = listed.filter(|p| *p > 0.0) {
        return price;
    }

    // An unreadable estimate never overwrites an off-market row with 0;
    // the sentinel has to reach the caller.
    match estimate_price(doc) {
        Some(estimate) if estimate != 0.0 => estimate,
        _ => listed.unwrap_or(0.0),
    }
}

pub fn monthly_rent(doc: &Html) -> Option<f64> {
    doc.select(&ZEST_TITLE)
        .filter(|title| text_of(*title).to_lowercase().contains("rent"))
        .find_map(|title| {
            let block = parent_element(title)?;
            let value: String = block.select(&ZEST_VALUE).map(text_of).collect();
            first_currency(&value)
        })
}

pub fn monthly_hoa(doc: &Html) -> Option<f64> {
    doc.select(&TOP_FACTS).find_map(|facts| {
        let text = text_of(facts);
        let fee = HOA_RE.find(&text)?;
        first_currency(fee.as_str())
    })
}

/// Listing pages show the annual figure; this returns a twelfth of it.
pub fn monthly_tax(doc: &Html) -> Option<f64> {
    doc.select(&COST_LABEL)
        .filter(|label| text_of(*label).trim() == TAX_LABEL)
        .find_map(|label| {
            let row = parent_element(label)?;
            let cost: String = row.select(&VENDOR_COST).map(text_of).collect();
            first_currency(&cost).map(|annual| annual / 12.0)
        })
}

pub fn year_built(doc: &Html) -> Option<u32> {
    doc.select(&FACTS_LIST).find_map(|list| {
        let text = text_of(list);
        let caps = YEAR_BUILT_RE.captures(&text)?;
        caps[1].parse().ok()
    })
}

/// Living area as a bare integer string ("2,100 sqft" -> "2100").
pub fn square_feet(doc: &Html) -> Option<String> {
    doc.select(&BEDS_BATHS).find_map(|span| {
        let text = text_of(span);
        let caps = SQFT_RE.captures(text.trim())?;
        Some(caps[1].replace(',', ""))
    })
}

pub fn property_id(doc: &Html) -> Option<String> {
    doc.select(&PROPERTY_ID)
        .next()?
        .value()
        .attr("value")
        .map(str::to_string)
}

pub fn zip_code(doc: &Html) -> Option<String> {
    doc.select(&LOAN_CALCULATOR)
        .next()?
        .value()
        .attr("data-property-zipcode")
        .map(str::to_string)
}

/// Full text of the block holding the neighborhood heading.
pub fn neighborhood_text(doc: &Html) -> Option<String> {
    let heading = doc.select(&NEIGHBORHOOD_HEADING).next()?;
    parent_element(heading).map(text_of)
}
