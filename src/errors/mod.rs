//! Error handling for the Literature engine.

pub mod domain;

pub use domain::{DomainError, NotFoundKind, RuleViolation};
