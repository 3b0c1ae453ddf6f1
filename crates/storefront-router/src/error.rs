use thiserror::Error;

/// Errors produced while building a route table or resolving against it.
///
/// Construction errors (`InvalidPattern`, `DuplicateName`) surface once at
/// startup; the only runtime error a well-formed table produces is
/// [`RouterError::NotFound`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RouterError {
    /// The route pattern could not be parsed.
    #[error("invalid route pattern `{pattern}`: {reason}")]
    InvalidPattern { pattern: String, reason: String },

    /// Two routes were registered under the same name.
    #[error("duplicate route name `{name}`")]
    DuplicateName { name: String },

    /// No registered pattern matches the given path.
    #[error("no route matches path `{path}`")]
    NotFound { path: String },

    /// `url_for` was called with a name no route carries.
    #[error("no route named `{name}`")]
    UnknownName { name: String },

    /// URL generation is missing a value for a required parameter.
    #[error("missing value for route parameter `{param}`")]
    MissingParam { param: String },
}
