//! # Storefront Router
//!
//! A small client-side route table: a fixed set of (path pattern, name,
//! handler) entries built once at application start and immutable
//! afterwards.
//!
//! - Static segments (`/success`) and named parameters (`/item/:id`)
//! - First-match-wins resolution in registration order
//! - Named routes with URL generation (`url_for`)
//! - Optional base path prefix under which all routes are mounted
//!
//! The table is generic over the handler type, so pages stay opaque
//! collaborators from the router's perspective. Resolution is a pure
//! lookup: no I/O, no shared mutable state, the same path always yields
//! the same result.
//!
//! ## Example
//!
//! ```
//! use storefront_router::RouteTable;
//!
//! let table = RouteTable::builder()
//!     .route("/", "home", "home page")
//!     .route("/item/:id", "item", "item page")
//!     .build()?;
//!
//! let resolved = table.resolve("/item/42")?;
//! assert_eq!(*resolved.handler(), "item page");
//! assert_eq!(resolved.param("id"), Some("42"));
//!
//! assert!(table.resolve("/does-not-exist").is_err());
//! # Ok::<(), storefront_router::RouterError>(())
//! ```

use std::collections::{HashMap, HashSet};

use tracing::debug;

mod error;
pub mod path;
mod pattern;

pub use error::RouterError;
pub use pattern::Pattern;

use path::normalize_path;

/// A single registered route: pattern, unique name, and the handler
/// selected when the pattern matches.
#[derive(Debug, Clone)]
pub struct Route<H> {
    pattern: Pattern,
    name: String,
    handler: H,
}

impl<H> Route<H> {
    /// The normalized path pattern, e.g. `/item/:id`.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// The route's unique name, e.g. `pay-intent`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The handler this route selects.
    pub fn handler(&self) -> &H {
        &self.handler
    }
}

/// Result of resolving a path: the matched route plus the parameters
/// captured from the path.
#[derive(Debug, Clone)]
pub struct RouteMatch<'a, H> {
    route: &'a Route<H>,
    params: HashMap<String, String>,
}

impl<'a, H> RouteMatch<'a, H> {
    /// The matched route.
    pub fn route(&self) -> &'a Route<H> {
        self.route
    }

    /// The matched route's name.
    pub fn name(&self) -> &str {
        self.route.name()
    }

    /// The handler selected by this match.
    pub fn handler(&self) -> &'a H {
        self.route.handler()
    }

    /// A captured path parameter, verbatim as it appeared in the path.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    /// All captured path parameters.
    pub fn params(&self) -> &HashMap<String, String> {
        &self.params
    }
}

/// Immutable route table.
///
/// Built once via [`RouteTable::builder`]; afterwards only read. Routes
/// are tried in registration order and the first structural match wins,
/// so more specific patterns must be registered before overlapping
/// parameterized ones.
#[derive(Debug, Clone)]
pub struct RouteTable<H> {
    routes: Vec<Route<H>>,
    name_index: HashMap<String, usize>,
    base_path: Option<String>,
}

impl<H> RouteTable<H> {
    /// Starts building a route table.
    pub fn builder() -> RouteTableBuilder<H> {
        RouteTableBuilder::new()
    }

    /// Resolves a path to its matching route and captured parameters.
    ///
    /// The path is normalized first (trailing and duplicate slashes are
    /// dropped, a missing leading slash is added), then checked against
    /// the mounted base path, then matched against the registered
    /// patterns in registration order. Patterns themselves must be
    /// absolute at registration; input paths are deliberately more
    /// lenient since they arrive from outside the application.
    ///
    /// # Errors
    ///
    /// [`RouterError::NotFound`] when no pattern matches. The table
    /// itself performs no recovery; fallback policy belongs to the
    /// caller.
    ///
    /// # Examples
    ///
    /// ```
    /// use storefront_router::RouteTable;
    ///
    /// let table = RouteTable::builder()
    ///     .route("/pay/:id", "pay-intent", ())
    ///     .build()?;
    ///
    /// let resolved = table.resolve("/pay/abc-123")?;
    /// assert_eq!(resolved.name(), "pay-intent");
    /// assert_eq!(resolved.param("id"), Some("abc-123"));
    /// # Ok::<(), storefront_router::RouterError>(())
    /// ```
    pub fn resolve(&self, path: &str) -> Result<RouteMatch<'_, H>, RouterError> {
        let normalized = normalize_path(path);

        let not_found = || RouterError::NotFound {
            path: normalized.to_string(),
        };

        let local = match &self.base_path {
            None => normalized.as_ref(),
            Some(base) if normalized.as_ref() == base => "/",
            Some(base) => normalized
                .strip_prefix(base.as_str())
                .filter(|rest| rest.starts_with('/'))
                .ok_or_else(not_found)?,
        };

        let resolved = self
            .routes
            .iter()
            .find_map(|route| {
                route.pattern.match_path(local).map(|params| RouteMatch {
                    route,
                    params,
                })
            })
            .ok_or_else(not_found)?;

        debug!(path = %normalized, route = resolved.name(), "resolved route");
        Ok(resolved)
    }

    /// Generates the URL for a named route by substituting parameters.
    ///
    /// The mounted base path, if any, is prepended.
    ///
    /// # Examples
    ///
    /// ```
    /// use storefront_router::RouteTable;
    ///
    /// let table = RouteTable::builder()
    ///     .route("/order/:id", "order", ())
    ///     .base_path("/shop")
    ///     .build()?;
    ///
    /// let url = table.url_for("order", &[("id", "7")])?;
    /// assert_eq!(url, "/shop/order/7");
    /// # Ok::<(), storefront_router::RouterError>(())
    /// ```
    pub fn url_for(&self, name: &str, params: &[(&str, &str)]) -> Result<String, RouterError> {
        let route = self
            .route_named(name)
            .ok_or_else(|| RouterError::UnknownName {
                name: name.to_string(),
            })?;

        let params: HashMap<&str, &str> = params.iter().copied().collect();
        let local = route.pattern.expand(&params)?;

        Ok(match &self.base_path {
            None => local,
            Some(base) if local == "/" => base.clone(),
            Some(base) => format!("{base}{local}"),
        })
    }

    /// Looks up a route by its name.
    pub fn route_named(&self, name: &str) -> Option<&Route<H>> {
        self.name_index.get(name).map(|&i| &self.routes[i])
    }

    /// All registered routes, in registration (match) order.
    pub fn routes(&self) -> &[Route<H>] {
        &self.routes
    }

    /// The base path prefix all routes are mounted under, if any.
    pub fn base_path(&self) -> Option<&str> {
        self.base_path.as_deref()
    }
}

/// Builder for [`RouteTable`].
///
/// Collects entries, then validates them all at once in [`build`]:
/// every pattern must parse and every name must be unique.
///
/// [`build`]: RouteTableBuilder::build
#[derive(Debug)]
pub struct RouteTableBuilder<H> {
    entries: Vec<(String, String, H)>,
    base_path: Option<String>,
}

impl<H> RouteTableBuilder<H> {
    fn new() -> Self {
        Self {
            entries: Vec::new(),
            base_path: None,
        }
    }

    /// Registers a route. Registration order is match order.
    pub fn route(
        mut self,
        pattern: impl Into<String>,
        name: impl Into<String>,
        handler: H,
    ) -> Self {
        self.entries.push((pattern.into(), name.into(), handler));
        self
    }

    /// Mounts all routes under a base path prefix, e.g. `/shop`.
    ///
    /// A root or empty base path is equivalent to no base path.
    pub fn base_path(mut self, base: impl Into<String>) -> Self {
        let normalized = normalize_path(&base.into()).into_owned();
        self.base_path = (normalized != "/").then_some(normalized);
        self
    }

    /// Validates the collected entries and produces the immutable table.
    ///
    /// # Errors
    ///
    /// [`RouterError::InvalidPattern`] if any pattern fails to parse,
    /// [`RouterError::DuplicateName`] if two routes share a name.
    pub fn build(self) -> Result<RouteTable<H>, RouterError> {
        let mut routes = Vec::with_capacity(self.entries.len());
        let mut name_index = HashMap::with_capacity(self.entries.len());
        let mut seen = HashSet::new();

        for (raw_pattern, name, handler) in self.entries {
            if !seen.insert(name.clone()) {
                return Err(RouterError::DuplicateName { name });
            }

            let pattern = Pattern::parse(&raw_pattern)?;
            name_index.insert(name.clone(), routes.len());
            routes.push(Route {
                pattern,
                name,
                handler,
            });
        }

        Ok(RouteTable {
            routes,
            name_index,
            base_path: self.base_path,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_rejects_duplicate_name() {
        let result = RouteTable::builder()
            .route("/success", "done", ())
            .route("/cancel", "done", ())
            .build();

        assert_eq!(
            result.err(),
            Some(RouterError::DuplicateName {
                name: "done".to_string()
            })
        );
    }

    #[test]
    fn test_builder_rejects_invalid_pattern() {
        let result = RouteTable::builder().route("item/:id", "item", ()).build();
        assert!(matches!(
            result,
            Err(RouterError::InvalidPattern { .. })
        ));
    }

    #[test]
    fn test_first_match_wins() {
        // Registration order decides overlapping matches.
        let table = RouteTable::builder()
            .route("/item/:id", "item", "dynamic")
            .route("/item/new", "item-new", "static")
            .build()
            .unwrap();

        let resolved = table.resolve("/item/new").unwrap();
        assert_eq!(resolved.name(), "item");
        assert_eq!(resolved.param("id"), Some("new"));
    }

    #[test]
    fn test_base_path_round_trip() {
        let table = RouteTable::builder()
            .route("/", "home", ())
            .route("/item/:id", "item", ())
            .base_path("/shop")
            .build()
            .unwrap();

        assert_eq!(table.resolve("/shop").unwrap().name(), "home");
        assert_eq!(table.resolve("/shop/item/42").unwrap().name(), "item");
        assert!(table.resolve("/item/42").is_err());
        assert!(table.resolve("/shopping/item/42").is_err());

        assert_eq!(table.url_for("home", &[]).unwrap(), "/shop");
        assert_eq!(
            table.url_for("item", &[("id", "42")]).unwrap(),
            "/shop/item/42"
        );
    }

    #[test]
    fn test_root_base_path_is_none() {
        let table = RouteTable::builder()
            .route("/", "home", ())
            .base_path("/")
            .build()
            .unwrap();

        assert_eq!(table.base_path(), None);
        assert_eq!(table.resolve("/").unwrap().name(), "home");
    }

    #[test]
    fn test_url_for_unknown_name() {
        let table = RouteTable::builder()
            .route("/", "home", ())
            .build()
            .unwrap();

        assert_eq!(
            table.url_for("missing", &[]),
            Err(RouterError::UnknownName {
                name: "missing".to_string()
            })
        );
    }
}
