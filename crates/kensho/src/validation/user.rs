//! User record models, one per validation rule

use serde::Serialize;
use serde_json::Value;

use super::field::{FieldValue, Fields, check_alpha, check_min_length};
use super::{Model, Result, ValidationError, ValidationRule, child_loc};

/// `name` must consist solely of alphabetic characters
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlphaUser {
    pub name: String,
}

impl Model for AlphaUser {
    fn from_value_at(value: &Value, loc: &str) -> Result<Self> {
        let fields = Fields::of(value, loc)?;
        let name: String = fields.required("name")?;
        check_alpha(&name, &fields.loc("name"))?;
        Ok(Self { name })
    }
}

/// `name` may be absent or null
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OptionalUser {
    pub name: Option<String>,
}

impl Model for OptionalUser {
    fn from_value_at(value: &Value, loc: &str) -> Result<Self> {
        let fields = Fields::of(value, loc)?;
        Ok(Self {
            name: fields.optional("name")?,
        })
    }
}

/// Exactly one declared field; anything else rejects the input
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StrictUser {
    pub name: String,
}

impl StrictUser {
    const FIELDS: &'static [&'static str] = &["name"];
}

impl Model for StrictUser {
    fn from_value_at(value: &Value, loc: &str) -> Result<Self> {
        let fields = Fields::of(value, loc)?;
        let name = fields.required("name")?;
        fields.forbid_extra(Self::FIELDS)?;
        Ok(Self { name })
    }
}

/// Non-empty list of names
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserField {
    pub name: Vec<String>,
}

impl UserField {
    pub const MIN_LENGTH: usize = 1;
}

impl Model for UserField {
    fn from_value_at(value: &Value, loc: &str) -> Result<Self> {
        let fields = Fields::of(value, loc)?;
        let name: Vec<String> = fields.required("name")?;
        check_min_length(&name, Self::MIN_LENGTH, &fields.loc("name"))?;
        Ok(Self { name })
    }
}

/// Single `name` field whose type the caller picks
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserGeneric<T> {
    pub name: T,
}

impl<T: FieldValue> Model for UserGeneric<T> {
    fn from_value_at(value: &Value, loc: &str) -> Result<Self> {
        let fields = Fields::of(value, loc)?;
        Ok(Self {
            name: fields.required("name")?,
        })
    }
}

/// Root container: an ordered list of strict users and nothing else
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Users(pub Vec<StrictUser>);

impl Users {
    pub fn iter(&self) -> std::slice::Iter<'_, StrictUser> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> Vec<StrictUser> {
        self.0
    }
}

impl Model for Users {
    fn from_value_at(value: &Value, loc: &str) -> Result<Self> {
        let items = value.as_array().ok_or_else(|| {
            ValidationError::new(loc, ValidationRule::Type, "Input should be a valid list")
        })?;
        items
            .iter()
            .enumerate()
            .map(|(index, item)| StrictUser::from_value_at(item, &child_loc(loc, index)))
            .collect::<Result<Vec<_>>>()
            .map(Self)
    }
}

