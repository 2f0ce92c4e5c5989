// src/tests/router_tests/listings_tests.rs

use crate::domain::listing::Status;
use crate::errors::ServerError;
use crate::tests::utils::{
    body_json, body_string, get, listing, make_db, seed_listing, seed_raw_status,
};
use serde_json::Value;

fn feature_ids(collection: &Value) -> Vec<String> {
    collection["features"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["properties"]["id"].as_str().unwrap().to_string())
        .collect()
}

#[test]
fn no_filters_returns_every_listing_without_pagination_keys() {
    let db = make_db("listings_all");
    seed_listing(&db, &listing(1, 100000, 2, 1, Status::Active));
    seed_listing(&db, &listing(2, 200000, 3, 2, Status::Pending));
    seed_listing(&db, &listing(3, 300000, 4, 3, Status::Sold));

    let resp = get(&db, "/listings").unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap(),
        "application/json"
    );

    let collection = body_json(resp);
    assert_eq!(collection["type"], "FeatureCollection");
    assert_eq!(feature_ids(&collection), vec!["1", "2", "3"]);

    // absence, not null
    assert!(collection.get("page").is_none());
    assert!(collection.get("links").is_none());
}

#[test]
fn min_equals_max_filters_to_exact_price() {
    let db = make_db("listings_eq");
    seed_listing(&db, &listing(1, 100000, 2, 1, Status::Active));
    seed_listing(&db, &listing(2, 100001, 2, 1, Status::Active));
    seed_listing(&db, &listing(3, 99999, 2, 1, Status::Active));

    let resp = get(&db, "/listings?min_price=100000&max_price=100000").unwrap();
    let collection = body_json(resp);

    assert_eq!(feature_ids(&collection), vec!["1"]);
}

#[test]
fn range_bounds_are_inclusive() {
    let db = make_db("listings_range");
    seed_listing(&db, &listing(1, 99999, 2, 1, Status::Active));
    seed_listing(&db, &listing(2, 100000, 2, 1, Status::Active));
    seed_listing(&db, &listing(3, 150000, 2, 1, Status::Active));
    seed_listing(&db, &listing(4, 200000, 2, 1, Status::Active));
    seed_listing(&db, &listing(5, 200001, 2, 1, Status::Active));

    let resp = get(&db, "/listings?min_price=100000&max_price=200000").unwrap();
    let collection = body_json(resp);

    assert_eq!(feature_ids(&collection), vec!["2", "3", "4"]);
}

#[test]
fn filters_combine_conjunctively() {
    let db = make_db("listings_and");
    // matches everything below
    seed_listing(&db, &listing(1, 150000, 3, 2, Status::Pending));
    // wrong price
    seed_listing(&db, &listing(2, 500000, 3, 2, Status::Pending));
    // too few bedrooms
    seed_listing(&db, &listing(3, 150000, 2, 2, Status::Pending));
    // wrong status
    seed_listing(&db, &listing(4, 150000, 3, 2, Status::Active));

    let resp = get(&db, "/listings?max_price=300000&min_bed=3&min_bath=2&status=pending").unwrap();
    let collection = body_json(resp);

    assert_eq!(feature_ids(&collection), vec!["1"]);
}

#[test]
fn unknown_status_filter_matches_nothing() {
    let db = make_db("listings_status_miss");
    seed_listing(&db, &listing(1, 150000, 3, 2, Status::Active));

    // filtering is plain equality against the column; no rows match, no error
    let resp = get(&db, "/listings?status=condemned").unwrap();
    let collection = body_json(resp);

    assert_eq!(collection["features"].as_array().unwrap().len(), 0);
}

#[test]
fn active_listing_carries_green_marker() {
    let db = make_db("listings_marker");
    seed_listing(&db, &listing(7, 150000, 3, 2, Status::Active));

    let resp = get(&db, "/listings").unwrap();
    let collection = body_json(resp);
    let props = &collection["features"][0]["properties"];

    assert_eq!(props["id"], "7");
    assert_eq!(props["status"], "active");
    assert_eq!(props["marker-color"], "009900");
}

#[test]
fn identical_queries_give_identical_collections() {
    let db = make_db("listings_idempotent");
    for id in 1..=5 {
        seed_listing(&db, &listing(id, 100000 * id, 2, 1, Status::Active));
    }

    let first = body_string(get(&db, "/listings?min_price=200000").unwrap());
    let second = body_string(get(&db, "/listings?min_price=200000").unwrap());

    assert_eq!(first, second);
}

#[test]
fn malformed_numeric_parameter_fails_the_request() {
    let db = make_db("listings_bad_int");

    let err = get(&db, "/listings?min_price=cheap").unwrap_err();
    assert!(matches!(err, ServerError::BadRequest(_)));

    let err = get(&db, "/listings?page=two").unwrap_err();
    assert!(matches!(err, ServerError::BadRequest(_)));
}

#[test]
fn broken_status_row_in_store_surfaces_as_db_error() {
    let db = make_db("listings_bad_status");
    seed_raw_status(&db, 1, "flooded");

    let err = get(&db, "/listings").unwrap_err();
    assert!(matches!(err, ServerError::DbError(_)));
}

#[test]
fn per_page_max_slices_the_first_page_by_default() {
    let db = make_db("listings_page_default");
    for id in 1..=45 {
        seed_listing(&db, &listing(id, 100000, 2, 1, Status::Active));
    }

    let resp = get(&db, "/listings?min_bed=2&max_bed=3&per_page_max=40").unwrap();
    let collection = body_json(resp);

    assert_eq!(collection["features"].as_array().unwrap().len(), 40);
    assert_eq!(collection["page"], 1);
    // 45 rows at 40/page = 2 pages
    assert_eq!(
        collection["links"]["last"],
        "/listings?min_bed=2&max_bed=3&per_page_max=40&page=2"
    );
    assert_eq!(
        collection["links"]["first"],
        "/listings?min_bed=2&max_bed=3&per_page_max=40&page=1"
    );
    assert!(collection["links"].get("prev").is_none());
    assert_eq!(
        collection["links"]["next"],
        "/listings?min_bed=2&max_bed=3&per_page_max=40&page=2"
    );
}

#[test]
fn middle_page_carries_all_four_links() {
    let db = make_db("listings_page_middle");
    for id in 1..=25 {
        seed_listing(&db, &listing(id, 100000, 2, 1, Status::Active));
    }

    let resp = get(&db, "/listings?page=2&per_page_max=10").unwrap();
    let collection = body_json(resp);

    // rows 11..=20 in id order
    assert_eq!(collection["features"].as_array().unwrap().len(), 10);
    assert_eq!(feature_ids(&collection)[0], "11");
    assert_eq!(collection["page"], 2);
    assert_eq!(collection["links"]["first"], "/listings?page=1&per_page_max=10");
    assert_eq!(collection["links"]["prev"], "/listings?page=1&per_page_max=10");
    assert_eq!(collection["links"]["next"], "/listings?page=3&per_page_max=10");
    assert_eq!(collection["links"]["last"], "/listings?page=3&per_page_max=10");
}

#[test]
fn page_past_the_end_is_empty_not_an_error() {
    let db = make_db("listings_page_past");
    for id in 1..=5 {
        seed_listing(&db, &listing(id, 100000, 2, 1, Status::Active));
    }

    let resp = get(&db, "/listings?page=9&per_page_max=10").unwrap();
    assert_eq!(resp.status(), 200);

    let collection = body_json(resp);
    assert_eq!(collection["features"].as_array().unwrap().len(), 0);
    assert_eq!(collection["page"], 9);
}

#[test]
fn single_page_result_has_only_a_first_link() {
    let db = make_db("listings_page_single");
    for id in 1..=5 {
        seed_listing(&db, &listing(id, 100000, 2, 1, Status::Active));
    }

    let resp = get(&db, "/listings?per_page_max=100").unwrap();
    let collection = body_json(resp);

    assert_eq!(collection["features"].as_array().unwrap().len(), 5);
    assert_eq!(collection["page"], 1);
    assert_eq!(
        collection["links"]["first"],
        "/listings?per_page_max=100&page=1"
    );
    assert!(collection["links"].get("last").is_none());
    assert!(collection["links"].get("prev").is_none());
    assert!(collection["links"].get("next").is_none());
}
