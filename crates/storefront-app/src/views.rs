//! Page views of the storefront.
//!
//! Views are opaque collaborators from the router's point of view: the
//! route table only selects one, it never looks inside. The shell keeps
//! them as a closed enum since the set of pages is fixed at startup.

use std::fmt;

/// The six pages of the storefront checkout flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageView {
    Home,
    Item,
    PaymentIntent,
    Order,
    Success,
    Cancel,
}

impl PageView {
    /// Human-readable page title, used for logging and the CLI driver.
    pub fn title(&self) -> &'static str {
        match self {
            PageView::Home => "Home",
            PageView::Item => "Item detail",
            PageView::PaymentIntent => "Payment intent",
            PageView::Order => "Order",
            PageView::Success => "Checkout success",
            PageView::Cancel => "Checkout cancelled",
        }
    }
}

impl fmt::Display for PageView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}
