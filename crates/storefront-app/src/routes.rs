//! The storefront route registry.
//!
//! Six fixed entries, registered once at startup. Registration order is
//! match order; the patterns here do not overlap for any concrete path,
//! so ordering is not load-bearing, but the parameterized routes are
//! kept between the static ones the way the navigation flows: browse,
//! pay, review, finish.

use storefront_router::{RouteTable, RouterError};

use crate::views::PageView;

/// Builds the storefront route table, optionally mounted under a base
/// path prefix.
pub fn route_table(base_path: Option<&str>) -> Result<RouteTable<PageView>, RouterError> {
    let mut builder = RouteTable::builder()
        .route("/", "home", PageView::Home)
        .route("/item/:id", "item", PageView::Item)
        .route("/pay/:id", "pay-intent", PageView::PaymentIntent)
        .route("/order/:id", "order", PageView::Order)
        .route("/success", "success", PageView::Success)
        .route("/cancel", "cancel", PageView::Cancel);

    if let Some(base) = base_path {
        builder = builder.base_path(base);
    }

    builder.build()
}
