//! Declarative field validation for flat user records.
//!
//! Every record type implements [`Model`]: an explicit function from raw
//! JSON to either the typed record or a single [`ValidationError`]. A
//! rejected input is never partially applied.

pub mod error;
pub mod field;
pub mod user;

use serde::Serialize;
use serde_json::Value;
use strum_macros::{Display, EnumIter, EnumString};

pub use error::{Result, ROOT, ValidationError, ValidationRule, child_loc};
pub use field::{FieldValue, Fields};
pub use user::{AlphaUser, OptionalUser, StrictUser, UserField, UserGeneric, Users};

/// A record type with its own validation function
pub trait Model: Sized {
    /// Validate `value` located at `loc` inside a larger input
    fn from_value_at(value: &Value, loc: &str) -> Result<Self>;

    fn from_value(value: &Value) -> Result<Self> {
        Self::from_value_at(value, ROOT)
    }

    fn from_json(input: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(input).map_err(|e| {
            ValidationError::new(ROOT, ValidationRule::Json, format!("Invalid JSON: {}", e))
        })?;
        Self::from_value(&value)
    }
}

/// The user schemas selectable by name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumIter)]
#[strum(serialize_all = "kebab-case")]
pub enum UserSchema {
    /// [`AlphaUser`]
    Alpha,
    /// [`OptionalUser`]
    Optional,
    /// [`StrictUser`]
    Strict,
    /// [`UserField`]
    MinLength,
    /// [`UserGeneric<String>`]
    Generic,
    /// [`Users`]
    Root,
}

impl UserSchema {
    /// Validate `input` and return the accepted record re-serialized
    pub fn validate_json(self, input: &str) -> Result<Value> {
        match self {
            UserSchema::Alpha => accepted(AlphaUser::from_json(input)?),
            UserSchema::Optional => accepted(OptionalUser::from_json(input)?),
            UserSchema::Strict => accepted(StrictUser::from_json(input)?),
            UserSchema::MinLength => accepted(UserField::from_json(input)?),
            UserSchema::Generic => accepted(UserGeneric::<String>::from_json(input)?),
            UserSchema::Root => accepted(Users::from_json(input)?),
        }
    }
}

fn accepted(record: impl Serialize) -> Result<Value> {
    serde_json::to_value(record)
        .map_err(|e| ValidationError::new(ROOT, ValidationRule::Type, e.to_string()))
}
