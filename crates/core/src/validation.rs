//! Write-side validation shared by the server and the view-models.
//!
//! Validation always runs before a request is issued; the server repeats it
//! so a misbehaving client cannot store a blank name or action.

use validator::{Validate, ValidationError};

use crate::error::CoreError;

/// Reject empty and whitespace-only strings.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

/// Run `validator` rules and collapse failures into a [`CoreError::Validation`]
/// naming the offending fields in alphabetical order.
pub fn validate_payload<T: Validate>(payload: &T) -> Result<(), CoreError> {
    payload.validate().map_err(|errors| {
        let mut fields: Vec<String> = errors
            .field_errors()
            .into_keys()
            .map(|field| field.to_string())
            .collect();
        fields.sort();
        CoreError::Validation(format!("Missing or blank fields: {}", fields.join(", ")))
    })
}
