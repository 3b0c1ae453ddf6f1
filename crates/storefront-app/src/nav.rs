//! History-aware navigation over the route table.
//!
//! The table itself is a pure lookup; this layer adds what the shell
//! needs around it: a session history with a movable cursor
//! (push/replace/back/forward, the web-history contract) and the
//! explicit policy for paths that resolve to nothing.

use std::collections::HashMap;

use serde::Deserialize;
use storefront_router::{RouteTable, RouterError};
use tracing::{info, warn};

use crate::views::PageView;

/// What to do when a navigation target matches no route.
///
/// The route table never falls back on its own; the shell decides.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FallbackPolicy {
    /// Report the not-found error to the caller.
    #[default]
    Surface,
    /// Navigate to the `home` route instead.
    RedirectHome,
}

/// One visited entry in the session history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    /// The full path as resolved (base path included).
    pub path: String,
    /// Name of the matched route.
    pub route_name: String,
    /// Parameters captured from the path.
    pub params: HashMap<String, String>,
    /// The page selected for rendering.
    pub view: PageView,
}

/// Session navigator: route table plus history.
///
/// Single-threaded by design; every mutation goes through `&mut self`.
#[derive(Debug)]
pub struct Navigator {
    table: RouteTable<PageView>,
    fallback: FallbackPolicy,
    entries: Vec<HistoryEntry>,
    // Index into `entries`; None until the first navigation.
    cursor: Option<usize>,
}

impl Navigator {
    pub fn new(table: RouteTable<PageView>, fallback: FallbackPolicy) -> Self {
        Self {
            table,
            fallback,
            entries: Vec::new(),
            cursor: None,
        }
    }

    /// The route table this navigator dispatches into.
    pub fn table(&self) -> &RouteTable<PageView> {
        &self.table
    }

    /// The entry currently shown, if any navigation happened yet.
    pub fn current(&self) -> Option<&HistoryEntry> {
        self.cursor.map(|i| &self.entries[i])
    }

    /// All history entries, oldest first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Navigates to a path, pushing a new history entry.
    ///
    /// Any forward branch beyond the current entry is discarded, the
    /// same way a browser history behaves after going back and
    /// navigating somewhere new.
    pub fn push(&mut self, path: &str) -> Result<&HistoryEntry, RouterError> {
        let entry = self.resolve_entry(path)?;
        info!(path = %entry.path, route = %entry.route_name, "navigate");

        let insert_at = self.cursor.map_or(0, |i| i + 1);
        self.entries.truncate(insert_at);
        self.entries.push(entry);
        self.cursor = Some(insert_at);

        Ok(&self.entries[insert_at])
    }

    /// Navigates to a path, replacing the current entry instead of
    /// pushing. Falls back to a push when the history is empty.
    pub fn replace(&mut self, path: &str) -> Result<&HistoryEntry, RouterError> {
        let Some(current) = self.cursor else {
            return self.push(path);
        };

        let entry = self.resolve_entry(path)?;
        info!(path = %entry.path, route = %entry.route_name, "navigate (replace)");

        self.entries[current] = entry;
        Ok(&self.entries[current])
    }

    /// Navigates to a named route, generating its URL from parameters.
    pub fn push_named(
        &mut self,
        name: &str,
        params: &[(&str, &str)],
    ) -> Result<&HistoryEntry, RouterError> {
        let url = self.table.url_for(name, params)?;
        self.push(&url)
    }

    /// Moves one entry back in history, if there is one.
    pub fn back(&mut self) -> Option<&HistoryEntry> {
        let i = self.cursor?.checked_sub(1)?;
        self.cursor = Some(i);
        Some(&self.entries[i])
    }

    /// Moves one entry forward in history, if there is one.
    pub fn forward(&mut self) -> Option<&HistoryEntry> {
        let i = self.cursor? + 1;
        if i >= self.entries.len() {
            return None;
        }
        self.cursor = Some(i);
        Some(&self.entries[i])
    }

    /// Resolves a path into a history entry, applying the fallback
    /// policy on a miss.
    fn resolve_entry(&self, path: &str) -> Result<HistoryEntry, RouterError> {
        match self.table.resolve(path) {
            Ok(resolved) => Ok(HistoryEntry {
                path: self
                    .table
                    .url_for(resolved.name(), &param_pairs(resolved.params()))
                    .unwrap_or_else(|_| path.to_string()),
                route_name: resolved.name().to_string(),
                params: resolved.params().clone(),
                view: *resolved.handler(),
            }),
            Err(err @ RouterError::NotFound { .. }) => match self.fallback {
                FallbackPolicy::Surface => Err(err),
                FallbackPolicy::RedirectHome => {
                    let home = self.table.url_for("home", &[]).map_err(|_| err)?;
                    warn!(path, redirect = %home, "unresolved path, falling back to home");
                    let resolved = self.table.resolve(&home)?;
                    Ok(HistoryEntry {
                        path: home,
                        route_name: resolved.name().to_string(),
                        params: resolved.params().clone(),
                        view: *resolved.handler(),
                    })
                }
            },
            Err(err) => Err(err),
        }
    }
}

fn param_pairs(params: &HashMap<String, String>) -> Vec<(&str, &str)> {
    params
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect()
}
