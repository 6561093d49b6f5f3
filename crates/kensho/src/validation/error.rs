use serde::Serialize;
use strum_macros::{Display, EnumString};
use thiserror::Error;

/// Location used for errors that concern the whole input
pub const ROOT: &str = "__root__";

/// Constraint that rejected an input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ValidationRule {
    /// Input is not parseable JSON
    Json,
    /// Value has the wrong JSON type
    Type,
    /// Required field is absent
    Missing,
    /// Text contains a non-alphabetic character
    AlphaOnly,
    /// Undeclared field on a strict record
    ExtraForbidden,
    /// Sequence shorter than its minimum length
    MinLength,
    /// Number outside its inclusive bounds
    Range,
}

/// Uniform rejection for every field constraint.
///
/// `loc` is a dotted path to the failing value (`name`, `1.name`,
/// `name.0`) or [`ROOT`].
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[error("validation failed at `{loc}` ({rule}): {message}")]
pub struct ValidationError {
    pub loc: String,
    pub rule: ValidationRule,
    pub message: String,
}

impl ValidationError {
    pub fn new(loc: impl Into<String>, rule: ValidationRule, message: impl Into<String>) -> Self {
        Self {
            loc: loc.into(),
            rule,
            message: message.into(),
        }
    }
}

/// Result type for validation
pub type Result<T> = std::result::Result<T, ValidationError>;

/// Path of `segment` below `parent`
pub fn child_loc(parent: &str, segment: impl std::fmt::Display) -> String {
    if parent == ROOT {
        segment.to_string()
    } else {
        format!("{}.{}", parent, segment)
    }
}
