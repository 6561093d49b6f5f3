//! Validate command handler

use kensho::validation::UserSchema;
use strum::IntoEnumIterator;

use crate::error::CliError;

/// Comma-separated schema names for help and error text
pub fn schema_names() -> String {
    UserSchema::iter()
        .map(|schema| schema.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Prints the accepted record or the rejection. Returns whether the input
/// was accepted.
pub fn run_validate(schema: &str, input: &str) -> Result<bool, CliError> {
    let schema: UserSchema = schema.parse().map_err(|_| {
        CliError::InvalidInput(format!(
            "Unknown schema '{}'. Available: {}",
            schema,
            schema_names()
        ))
    })?;

    match schema.validate_json(input) {
        Ok(record) => {
            let pretty = serde_json::to_string_pretty(&record)
                .map_err(|e| CliError::InvalidInput(e.to_string()))?;
            println!("✅ {}", pretty);
            Ok(true)
        }
        Err(err) => {
            println!("❌ {}", err);
            Ok(false)
        }
    }
}
