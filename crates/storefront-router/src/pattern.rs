//! Route pattern parsing and matching.
//!
//! A pattern is an absolute URL path whose segments are either static
//! (`item`) or named parameters (`:id`). Patterns are parsed once at
//! table construction; matching afterwards is a pure segment walk with
//! no allocation beyond the captured parameter values.

use std::collections::HashMap;
use std::fmt;

use crate::error::RouterError;
use crate::path::normalize_path;

/// One parsed segment of a route pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Static(String),
    Param(String),
}

/// A parsed, validated route pattern.
///
/// # Examples
///
/// ```
/// use storefront_router::Pattern;
///
/// let pattern = Pattern::parse("/item/:id").unwrap();
/// assert_eq!(pattern.as_str(), "/item/:id");
/// assert_eq!(pattern.param_names().collect::<Vec<_>>(), vec!["id"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    raw: String,
    segments: Vec<Segment>,
}

impl Pattern {
    /// Parses a pattern string.
    ///
    /// The pattern is normalized first, so `/item/:id/` parses like
    /// `/item/:id`. Parameter segments must carry a non-empty name and
    /// names must be unique within one pattern.
    pub fn parse(raw: &str) -> Result<Self, RouterError> {
        let invalid = |reason: &str| RouterError::InvalidPattern {
            pattern: raw.to_string(),
            reason: reason.to_string(),
        };

        if raw.is_empty() {
            return Err(invalid("pattern must not be empty"));
        }
        if !raw.starts_with('/') {
            return Err(invalid("pattern must start with `/`"));
        }

        let normalized = normalize_path(raw).into_owned();

        let mut segments = Vec::new();
        for part in normalized.split('/').filter(|s| !s.is_empty()) {
            match part.strip_prefix(':') {
                Some("") => return Err(invalid("parameter segment has no name")),
                Some(name) => {
                    if segments
                        .iter()
                        .any(|s| matches!(s, Segment::Param(n) if n == name))
                    {
                        return Err(invalid("duplicate parameter name"));
                    }
                    segments.push(Segment::Param(name.to_string()));
                }
                None => segments.push(Segment::Static(part.to_string())),
            }
        }

        Ok(Self {
            raw: normalized,
            segments,
        })
    }

    /// The normalized pattern string, e.g. `/item/:id`.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Names of the parameters this pattern binds, in path order.
    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|s| match s {
            Segment::Param(name) => Some(name.as_str()),
            Segment::Static(_) => None,
        })
    }

    /// Matches a canonical path against this pattern.
    ///
    /// Returns the captured parameters on a structural match, `None`
    /// otherwise. Parameter values are taken verbatim from the path; no
    /// coercion or format validation happens here.
    pub(crate) fn match_path(&self, path: &str) -> Option<HashMap<String, String>> {
        let path_segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        if path_segments.len() != self.segments.len() {
            return None;
        }

        let mut params = HashMap::new();
        for (segment, actual) in self.segments.iter().zip(path_segments) {
            match segment {
                Segment::Static(expected) => {
                    if expected != actual {
                        return None;
                    }
                }
                Segment::Param(name) => {
                    params.insert(name.clone(), actual.to_string());
                }
            }
        }

        Some(params)
    }

    /// Expands this pattern into a concrete path by substituting
    /// parameter values.
    pub(crate) fn expand(&self, params: &HashMap<&str, &str>) -> Result<String, RouterError> {
        if self.segments.is_empty() {
            return Ok("/".to_string());
        }

        let mut path = String::new();
        for segment in &self.segments {
            path.push('/');
            match segment {
                Segment::Static(s) => path.push_str(s),
                Segment::Param(name) => {
                    let value =
                        params
                            .get(name.as_str())
                            .ok_or_else(|| RouterError::MissingParam {
                                param: name.clone(),
                            })?;
                    path.push_str(value);
                }
            }
        }

        Ok(path)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
