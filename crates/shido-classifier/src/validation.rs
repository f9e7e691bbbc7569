//! Input validation
//!
//! The classifier never clamps or corrects: a reading that breaks the
//! contract is reported with the field it came from.

use crate::{ClassifierError, Result};
use shido_domain::{AssessmentInput, Gender};

/// Check every numeric field of an input
///
/// Fields are checked in form order and the first violation is returned.
pub fn validate_input(input: &AssessmentInput) -> Result<()> {
    for (field, value) in input.numeric_fields() {
        if let Some(value) = value {
            validate_reading(field, value)?;
        }
    }
    Ok(())
}

/// Parse gender text from a form or record
pub fn parse_gender(text: &str) -> Result<Gender> {
    Gender::parse(text).ok_or_else(|| {
        ClassifierError::invalid_input(
            "gender",
            format!("must be male/female or 1/2 (got '{}')", text),
        )
    })
}

/// Check an age in whole years from a form or record
pub fn parse_age(years: i64) -> Result<u32> {
    if years < 0 {
        return Err(ClassifierError::invalid_input(
            "age",
            format!("must not be negative (got {})", years),
        ));
    }
    u32::try_from(years).map_err(|_| {
        ClassifierError::invalid_input("age", format!("is out of range (got {})", years))
    })
}

fn validate_reading(field: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(ClassifierError::invalid_input(
            field,
            format!("must be a finite number (got {})", value),
        ));
    }

    if value < 0.0 {
        return Err(ClassifierError::invalid_input(
            field,
            format!("must not be negative (got {})", value),
        ));
    }

    Ok(())
}
