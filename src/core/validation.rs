//! Field-level validation results shared by the API and the HTML forms.

use serde::{Deserialize, Serialize};

use crate::core::{AppError, Result};

/// A single failed rule on a named field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Accumulates field errors while binding or validating input.
///
/// Errors are collected, not short-circuited, so a re-rendered form can
/// show every problem at once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModelState {
    errors: Vec<FieldError>,
}

impl ModelState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(FieldError::new(field, message));
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// First error message recorded for `field`
    pub fn error_for(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    /// Ok when valid, otherwise `AppError::InvalidFields`
    pub fn into_result(self) -> Result<()> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(AppError::InvalidFields(self.errors))
        }
    }
}
