//! Normalization tests: raw API JSON → typed records.
//!
//! Each test: hand-craft raw JSON → into_dealer()/into_review() → assert.
//! No I/O, no network.

use dealer_client::types::{parse_items, parse_review_date, RawDealer, RawReview};
use lotview_common::SentimentLabel;

fn dealer(json: &str) -> RawDealer {
    serde_json::from_str(json).expect("invalid test JSON")
}

fn review(json: &str) -> RawReview {
    serde_json::from_str(json).expect("invalid test JSON")
}

// ---------------------------------------------------------------------------
// Dealer: required fields
// ---------------------------------------------------------------------------

#[test]
fn complete_dealer_converts() {
    let raw = dealer(
        r#"{
        "id": 1,
        "full_name": "Bob's Cars",
        "short_name": "Bobs",
        "address": "1 Main",
        "city": "Springfield",
        "st": "IL",
        "zip": "62704",
        "lat": 0,
        "long": 0
    }"#,
    );

    let d = raw.into_dealer().expect("complete record should convert");
    assert_eq!(d.id, 1);
    assert_eq!(d.full_name, "Bob's Cars");
    assert_eq!(d.st, "IL");
}

#[test]
fn dealer_missing_any_required_field_is_dropped() {
    let missing_name = dealer(
        r#"{"id": 2, "short_name": "X", "address": "2 Oak", "city": "Ames",
            "st": "IA", "zip": "50010", "lat": 41.0, "long": -93.0}"#,
    );
    assert!(missing_name.into_dealer().is_none());

    let missing_id = dealer(
        r#"{"full_name": "X Motors", "short_name": "X", "address": "2 Oak",
            "city": "Ames", "st": "IA", "zip": "50010", "lat": 41.0, "long": -93.0}"#,
    );
    assert!(missing_id.into_dealer().is_none());

    let missing_geo = dealer(
        r#"{"id": 3, "full_name": "X Motors", "short_name": "X", "address": "2 Oak",
            "city": "Ames", "st": "IA", "zip": "50010"}"#,
    );
    assert!(missing_geo.into_dealer().is_none());
}

#[test]
fn partial_records_shrink_the_result_and_keep_known_ids() {
    let items: Vec<serde_json::Value> = serde_json::from_str(
        r#"[
        {"id": 1, "full_name": "A", "short_name": "a", "address": "1", "city": "c",
         "st": "IL", "zip": "1", "lat": 0, "long": 0},
        {"id": 2, "full_name": "B", "short_name": "b", "city": "c",
         "st": "IL", "zip": "2", "lat": 0, "long": 0},
        {"id": 3, "full_name": "C", "short_name": "c", "address": "3", "city": "c",
         "st": "IL", "zip": "3", "lat": 0, "long": 0}
    ]"#,
    )
    .unwrap();

    let input_len = items.len();
    let raw: Vec<RawDealer> = parse_items(items, "dealer");
    let dealers: Vec<_> = raw.into_iter().filter_map(RawDealer::into_dealer).collect();

    assert!(dealers.len() <= input_len);
    assert_eq!(dealers.len(), 2, "record missing address should be dropped");
    let ids: Vec<i64> = dealers.iter().map(|d| d.id).collect();
    assert_eq!(ids, vec![1, 3], "order of surviving records is preserved");
}

#[test]
fn malformed_array_items_are_skipped() {
    let items: Vec<serde_json::Value> = serde_json::from_str(
        r#"[
        {"id": 1, "full_name": "A", "short_name": "a", "address": "1", "city": "c",
         "st": "IL", "zip": "1", "lat": 0, "long": 0},
        42,
        {"id": "not-a-number", "full_name": "B", "short_name": "b", "address": "2",
         "city": "c", "st": "IL", "zip": "2", "lat": 0, "long": 0}
    ]"#,
    )
    .unwrap();

    let raw: Vec<RawDealer> = parse_items(items, "dealer");
    assert_eq!(raw.len(), 1, "non-object and wrong-typed items are skipped");
    assert_eq!(raw[0].id, Some(1));
}

// ---------------------------------------------------------------------------
// Review: required vs optional split
// ---------------------------------------------------------------------------

#[test]
fn review_with_all_fields_converts() {
    let raw = review(
        r#"{
        "name": "Kim",
        "dealership": 42,
        "review": "Great service, would buy again",
        "purchase": true,
        "purchase_date": "02/16/2021",
        "car_make": "Honda",
        "car_model": "Civic",
        "car_year": 2019
    }"#,
    );

    let r = raw.into_review().expect("complete record should convert");
    assert_eq!(r.dealership, 42);
    assert!(r.purchase);
    assert_eq!(r.car_make.as_deref(), Some("Honda"));
    assert_eq!(r.car_year, Some(2019));
    let date = r.purchase_date.expect("date should parse");
    assert_eq!(date.format("%Y-%m-%d").to_string(), "2021-02-16");
}

#[test]
fn review_missing_optionals_defaults_them_to_none() {
    let raw = review(
        r#"{
        "name": "Kim",
        "dealership": 42,
        "review": "Fine experience overall",
        "purchase": false
    }"#,
    );

    let r = raw.into_review().expect("optionals are not required");
    assert!(r.purchase_date.is_none());
    assert!(r.car_make.is_none());
    assert!(r.car_model.is_none());
    assert!(r.car_year.is_none());
    assert_eq!(
        r.sentiment,
        SentimentLabel::Neutral,
        "sentiment starts at the neutral default"
    );
}

#[test]
fn review_missing_required_field_is_dropped() {
    let no_name = review(r#"{"dealership": 42, "review": "ok", "purchase": false}"#);
    assert!(no_name.into_review().is_none());

    let no_body = review(r#"{"name": "Kim", "dealership": 42, "purchase": false}"#);
    assert!(no_body.into_review().is_none());

    let no_purchase_flag = review(r#"{"name": "Kim", "dealership": 42, "review": "ok"}"#);
    assert!(no_purchase_flag.into_review().is_none());
}

#[test]
fn unknown_review_fields_are_ignored() {
    // Cloudant documents carry _id/_rev bookkeeping fields.
    let raw = review(
        r#"{
        "_id": "a1b2", "_rev": "1-x",
        "name": "Kim", "dealership": 42, "review": "ok", "purchase": false
    }"#,
    );

    assert!(raw.into_review().is_some());
}

// ---------------------------------------------------------------------------
// Date parsing
// ---------------------------------------------------------------------------

#[test]
fn purchase_date_accepts_both_wire_formats() {
    assert_eq!(
        parse_review_date("02/16/2021").unwrap().to_string(),
        "2021-02-16"
    );
    assert_eq!(
        parse_review_date("2021-02-16").unwrap().to_string(),
        "2021-02-16"
    );
}

#[test]
fn invalid_purchase_date_becomes_none() {
    assert!(parse_review_date("not-a-date").is_none());
    assert!(parse_review_date("13/45/2021").is_none());
    assert!(parse_review_date("").is_none());

    let raw = review(
        r#"{"name": "Kim", "dealership": 42, "review": "ok", "purchase": true,
            "purchase_date": "sometime last spring"}"#,
    );
    let r = raw.into_review().unwrap();
    assert!(
        r.purchase_date.is_none(),
        "unparseable date normalizes to None, record survives"
    );
}
