//! Integration tests for storefront-router
//!
//! Covers the public surface end to end:
//! - Resolution in registration order (first match wins)
//! - Parameter capture (verbatim, no coercion)
//! - Not-found reporting
//! - Named routes and URL generation
//! - Base path mounting
//! - Path normalization on input

use pretty_assertions::assert_eq;
use rstest::rstest;
use storefront_router::{RouteTable, RouterError};

/// A handler stand-in; the table treats it as opaque.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Page {
    Home,
    Item,
    PayIntent,
    Order,
    Success,
    Cancel,
}

fn storefront_table() -> RouteTable<Page> {
    RouteTable::builder()
        .route("/", "home", Page::Home)
        .route("/item/:id", "item", Page::Item)
        .route("/pay/:id", "pay-intent", Page::PayIntent)
        .route("/order/:id", "order", Page::Order)
        .route("/success", "success", Page::Success)
        .route("/cancel", "cancel", Page::Cancel)
        .build()
        .expect("route table builds")
}

#[rstest]
#[case("/", "home", Page::Home)]
#[case("/item/42", "item", Page::Item)]
#[case("/pay/abc-123", "pay-intent", Page::PayIntent)]
#[case("/order/7", "order", Page::Order)]
#[case("/success", "success", Page::Success)]
#[case("/cancel", "cancel", Page::Cancel)]
fn resolves_registered_paths(#[case] path: &str, #[case] name: &str, #[case] page: Page) {
    let table = storefront_table();
    let resolved = table.resolve(path).unwrap();

    assert_eq!(resolved.name(), name);
    assert_eq!(*resolved.handler(), page);
}

#[test]
fn captures_id_verbatim() {
    let table = storefront_table();

    let resolved = table.resolve("/item/42").unwrap();
    assert_eq!(resolved.param("id"), Some("42"));

    let resolved = table.resolve("/pay/abc-123").unwrap();
    assert_eq!(resolved.param("id"), Some("abc-123"));
    assert_eq!(*resolved.handler(), Page::PayIntent);
}

#[test]
fn unmatched_path_is_not_found() {
    let table = storefront_table();

    let err = table.resolve("/does-not-exist").unwrap_err();
    assert_eq!(
        err,
        RouterError::NotFound {
            path: "/does-not-exist".to_string()
        }
    );
}

#[test]
fn partial_and_over_long_paths_do_not_match() {
    let table = storefront_table();

    assert!(table.resolve("/item").is_err());
    assert!(table.resolve("/item/42/reviews").is_err());
}

#[test]
fn route_names_are_pairwise_distinct() {
    let table = storefront_table();
    let mut names: Vec<&str> = table.routes().iter().map(|r| r.name()).collect();
    let total = names.len();

    names.sort_unstable();
    names.dedup();

    assert_eq!(names.len(), total);
}

#[test]
fn resolution_is_idempotent() {
    let table = storefront_table();

    let first = table.resolve("/order/7").unwrap();
    let second = table.resolve("/order/7").unwrap();

    assert_eq!(first.name(), second.name());
    assert_eq!(first.params(), second.params());
    assert_eq!(first.handler(), second.handler());
}

#[rstest]
#[case("/item/42/", "item")]
#[case("/pay//abc-123", "pay-intent")]
#[case("item/42", "item")] // input paths are lenient, patterns are not
#[case("", "home")]
fn input_paths_are_normalized(#[case] path: &str, #[case] name: &str) {
    let table = storefront_table();
    assert_eq!(table.resolve(path).unwrap().name(), name);
}

#[test]
fn relative_patterns_are_rejected_at_build() {
    let result = RouteTable::builder().route("item/:id", "item", Page::Item).build();
    assert!(matches!(result, Err(RouterError::InvalidPattern { .. })));
}

#[test]
fn url_for_generates_paths() {
    let table = storefront_table();

    assert_eq!(table.url_for("home", &[]).unwrap(), "/");
    assert_eq!(table.url_for("item", &[("id", "42")]).unwrap(), "/item/42");
    assert_eq!(
        table.url_for("pay-intent", &[("id", "abc-123")]).unwrap(),
        "/pay/abc-123"
    );
}

#[test]
fn url_for_requires_params() {
    let table = storefront_table();

    assert_eq!(
        table.url_for("item", &[]),
        Err(RouterError::MissingParam {
            param: "id".to_string()
        })
    );
}

#[test]
fn base_path_mounts_all_routes() {
    let table = RouteTable::builder()
        .route("/", "home", Page::Home)
        .route("/item/:id", "item", Page::Item)
        .base_path("/shop")
        .build()
        .unwrap();

    assert_eq!(table.resolve("/shop").unwrap().name(), "home");
    assert_eq!(
        table.resolve("/shop/item/42").unwrap().param("id"),
        Some("42")
    );

    // Unmounted paths do not resolve.
    assert!(table.resolve("/item/42").is_err());

    // Generated URLs carry the prefix back and resolve again.
    let url = table.url_for("item", &[("id", "42")]).unwrap();
    assert_eq!(url, "/shop/item/42");
    assert_eq!(table.resolve(&url).unwrap().name(), "item");
}
