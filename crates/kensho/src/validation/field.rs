//! Field extraction and constraint checks shared by every model

use serde_json::{Map, Value};
use unicode_properties::{GeneralCategoryGroup, UnicodeGeneralCategory};

use super::error::{Result, ValidationError, ValidationRule, child_loc};

/// A type that can be read out of a single JSON field
pub trait FieldValue: Sized {
    /// Type name used in mismatch messages
    const EXPECTED: &'static str;

    fn from_field(value: &Value, loc: &str) -> Result<Self>;
}

fn type_error(loc: &str, expected: &str) -> ValidationError {
    ValidationError::new(
        loc,
        ValidationRule::Type,
        format!("Input should be a valid {}", expected),
    )
}

impl FieldValue for String {
    const EXPECTED: &'static str = "string";

    fn from_field(value: &Value, loc: &str) -> Result<Self> {
        value
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| type_error(loc, Self::EXPECTED))
    }
}

impl FieldValue for bool {
    const EXPECTED: &'static str = "boolean";

    fn from_field(value: &Value, loc: &str) -> Result<Self> {
        value.as_bool().ok_or_else(|| type_error(loc, Self::EXPECTED))
    }
}

impl FieldValue for i64 {
    const EXPECTED: &'static str = "integer";

    /// Whole-valued floats such as `3.0` are accepted.
    fn from_field(value: &Value, loc: &str) -> Result<Self> {
        if let Some(int) = value.as_i64() {
            return Ok(int);
        }
        match value.as_f64() {
            Some(float)
                if float.fract() == 0.0 && float >= i64::MIN as f64 && float < i64::MAX as f64 =>
            {
                Ok(float as i64)
            }
            Some(_) => Err(ValidationError::new(
                loc,
                ValidationRule::Type,
                "Input should be a valid integer, got a number with a fractional part",
            )),
            None => Err(type_error(loc, Self::EXPECTED)),
        }
    }
}

impl FieldValue for f64 {
    const EXPECTED: &'static str = "number";

    fn from_field(value: &Value, loc: &str) -> Result<Self> {
        value.as_f64().ok_or_else(|| type_error(loc, Self::EXPECTED))
    }
}

impl<T: FieldValue> FieldValue for Vec<T> {
    const EXPECTED: &'static str = "list";

    fn from_field(value: &Value, loc: &str) -> Result<Self> {
        let items = value
            .as_array()
            .ok_or_else(|| type_error(loc, Self::EXPECTED))?;
        items
            .iter()
            .enumerate()
            .map(|(index, item)| T::from_field(item, &child_loc(loc, index)))
            .collect()
    }
}

impl<T: FieldValue> FieldValue for Option<T> {
    const EXPECTED: &'static str = T::EXPECTED;

    fn from_field(value: &Value, loc: &str) -> Result<Self> {
        if value.is_null() {
            Ok(None)
        } else {
            T::from_field(value, loc).map(Some)
        }
    }
}

/// Borrowed view over a JSON object being validated
pub struct Fields<'a> {
    map: &'a Map<String, Value>,
    loc: String,
}

impl<'a> Fields<'a> {
    /// Require `value` to be an object
    pub fn of(value: &'a Value, loc: &str) -> Result<Self> {
        let map = value.as_object().ok_or_else(|| {
            ValidationError::new(
                loc,
                ValidationRule::Type,
                "Input should be a valid object",
            )
        })?;
        Ok(Self {
            map,
            loc: loc.to_string(),
        })
    }

    /// Location of a field of this object
    pub fn loc(&self, name: &str) -> String {
        child_loc(&self.loc, name)
    }

    /// Field that must be present
    pub fn required<T: FieldValue>(&self, name: &str) -> Result<T> {
        let loc = self.loc(name);
        match self.map.get(name) {
            Some(value) => T::from_field(value, &loc),
            None => Err(ValidationError::new(
                loc,
                ValidationRule::Missing,
                "Field required",
            )),
        }
    }

    /// Field that may be absent or null
    pub fn optional<T: FieldValue>(&self, name: &str) -> Result<Option<T>> {
        match self.map.get(name) {
            Some(value) => Option::<T>::from_field(value, &self.loc(name)),
            None => Ok(None),
        }
    }

    /// Reject any key not in `declared`
    pub fn forbid_extra(&self, declared: &[&str]) -> Result<()> {
        match self.map.keys().find(|key| !declared.contains(&key.as_str())) {
            Some(extra) => Err(ValidationError::new(
                self.loc(extra),
                ValidationRule::ExtraForbidden,
                "Extra inputs are not permitted",
            )),
            None => Ok(()),
        }
    }
}

/// Letter in the Unicode sense of the `L` general categories
/// (Lu, Ll, Lt, Lm, Lo). Letter numbers such as `Ⅷ` and combining marks
/// are not letters.
pub fn is_letter(c: char) -> bool {
    c.general_category_group() == GeneralCategoryGroup::Letter
}

/// Every character must be a letter. The empty string passes.
pub fn check_alpha(value: &str, loc: &str) -> Result<()> {
    if value.chars().all(is_letter) {
        Ok(())
    } else {
        Err(ValidationError::new(
            loc,
            ValidationRule::AlphaOnly,
            "Name must only contain letters",
        ))
    }
}

pub fn check_min_length<T>(items: &[T], min: usize, loc: &str) -> Result<()> {
    if items.len() >= min {
        Ok(())
    } else {
        Err(ValidationError::new(
            loc,
            ValidationRule::MinLength,
            format!(
                "List should have at least {} item(s) after validation, not {}",
                min,
                items.len()
            ),
        ))
    }
}

/// Inclusive bounds check
pub fn check_range(value: i64, min: i64, max: i64, loc: &str) -> Result<()> {
    if (min..=max).contains(&value) {
        Ok(())
    } else if value < min {
        Err(ValidationError::new(
            loc,
            ValidationRule::Range,
            format!("Input should be greater than or equal to {}", min),
        ))
    } else {
        Err(ValidationError::new(
            loc,
            ValidationRule::Range,
            format!("Input should be less than or equal to {}", max),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_alpha_accepts_non_ascii_letters() {
        assert!(check_alpha("ジョン", "name").is_ok());
        assert!(check_alpha("Zoë", "name").is_ok());
        assert!(check_alpha("Jo hn", "name").is_err());
    }

    #[test]
    fn test_alpha_rejects_letter_numbers_and_marks() {
        // Roman numeral eight is a letter number (Nl)
        assert!(check_alpha("Ⅷ", "name").is_err());
        // Devanagari vowel signs are combining marks (Mc/Mn)
        assert!(check_alpha("हिंदी", "name").is_err());
        // Decomposed e + combining diaeresis
        assert!(check_alpha("Zoe\u{308}", "name").is_err());
        // Katakana prolonged sound mark is a modifier letter (Lm)
        assert!(check_alpha("ジョーン", "name").is_ok());
        assert!(check_alpha("Ǆ", "name").is_ok());
    }

    #[test]
    fn test_integer_accepts_whole_floats() {
        assert_eq!(i64::from_field(&json!(3.0), "risk").unwrap(), 3);
        assert_eq!(i64::from_field(&json!(-2), "risk").unwrap(), -2);

        let err = i64::from_field(&json!(3.5), "risk").unwrap_err();
        assert_eq!(err.rule, ValidationRule::Type);
        assert!(err.message.contains("fractional part"));

        let err = i64::from_field(&json!("3"), "risk").unwrap_err();
        assert_eq!(err.rule, ValidationRule::Type);
    }

    #[test]
    fn test_nested_list_location() {
        let err = Vec::<String>::from_field(&json!(["a", 1]), "name").unwrap_err();
        assert_eq!(err.loc, "name.1");
        assert_eq!(err.rule, ValidationRule::Type);
    }

    #[test]
    fn test_range_bounds_are_inclusive() {
        assert!(check_range(0, 0, 10, "risk").is_ok());
        assert!(check_range(10, 0, 10, "risk").is_ok());

        let err = check_range(11, 0, 10, "risk").unwrap_err();
        assert_eq!(err.rule, ValidationRule::Range);
        assert!(err.message.contains("less than or equal to 10"));
        assert!(check_range(-1, 0, 10, "risk").is_err());
    }

    #[test]
    fn test_optional_field_accepts_null_and_absent() {
        let value = json!({"a": null});
        let fields = Fields::of(&value, crate::validation::ROOT).unwrap();
        assert_eq!(fields.optional::<String>("a").unwrap(), None);
        assert_eq!(fields.optional::<String>("b").unwrap(), None);
    }

    #[test]
    fn test_non_object_input() {
        let err = Fields::of(&json!("Sam"), crate::validation::ROOT).err().unwrap();
        assert_eq!(err.loc, "__root__");
        assert_eq!(err.rule, ValidationRule::Type);
    }
}
