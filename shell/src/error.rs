//! Error types for registry construction and routing.

use thiserror::Error;

/// Rejected section configuration. Raised once, at registry construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// No sections were supplied.
    #[error("section registry is empty")]
    Empty,

    /// A section id was empty or whitespace.
    #[error("section id must not be blank")]
    BlankId,

    /// Two sections share the same id.
    #[error("duplicate section id: {0}")]
    Duplicate(String),

    /// The default section id is not one of the registered sections.
    #[error("default section `{0}` is not registered")]
    UnknownDefault(String),
}

/// Routing request that the router declined to act on.
///
/// Interactive callers (nav clicks, history pops) drop these after the router
/// has logged them. Programmatic callers can match on them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// The target id is not in the registry.
    #[error("unknown section: {0}")]
    UnknownSection(String),

    /// `start` was called more than once.
    #[error("router already started")]
    AlreadyStarted,
}
