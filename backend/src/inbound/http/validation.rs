//! Shared validation helpers for inbound HTTP adapters.
//!
//! Validators collect every failing field into [`FieldErrors`] before
//! answering, so a client sees all problems with one request. The resulting
//! error carries `details.errors`, a list of `{field, code, message}`
//! objects.

use std::str::FromStr;

use serde_json::{Value, json};

use crate::domain::Error;

/// Top-level message for any request that fails field validation.
pub const VALIDATION_ERROR_MESSAGE: &str = "Validation error";

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    Required,
    InvalidType,
    UnknownValue,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::Required => "required",
            ErrorCode::InvalidType => "invalid_type",
            ErrorCode::UnknownValue => "unknown_value",
        }
    }
}

/// Newtype wrapper for HTTP field names to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(&self) -> &'static str {
        self.0
    }
}

struct FieldError {
    field: FieldName,
    code: ErrorCode,
    message: String,
}

impl FieldError {
    fn to_json(&self) -> Value {
        json!({
            "field": self.field.as_str(),
            "code": self.code.as_str(),
            "message": self.message,
        })
    }
}

/// A raw JSON field after its type check.
enum Typed<T> {
    Absent,
    Present(T),
    Mismatched,
}

/// Accumulator for per-field failures.
#[derive(Default)]
pub(crate) struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, field: FieldName, code: ErrorCode, message: impl Into<String>) {
        self.0.push(FieldError {
            field,
            code,
            message: message.into(),
        });
    }

    /// Yield `value` when nothing failed, otherwise the aggregated error.
    pub(crate) fn finish<T>(self, value: T) -> Result<T, Error> {
        if self.0.is_empty() {
            return Ok(value);
        }
        Err(self.into_error())
    }

    /// Aggregate the collected failures into one `invalid_request` error.
    pub(crate) fn into_error(self) -> Error {
        let errors: Vec<Value> = self.0.iter().map(FieldError::to_json).collect();
        Error::invalid_request(VALIDATION_ERROR_MESSAGE).with_details(json!({ "errors": errors }))
    }

    fn typed_text(&mut self, field: FieldName, raw: Option<Value>) -> Typed<String> {
        match raw {
            None | Some(Value::Null) => Typed::Absent,
            Some(Value::String(text)) => Typed::Present(text),
            Some(_) => {
                self.push(
                    field,
                    ErrorCode::InvalidType,
                    format!("{} must be a string", field.as_str()),
                );
                Typed::Mismatched
            }
        }
    }

    /// Text that must be present and non-blank.
    pub(crate) fn required_text(
        &mut self,
        field: FieldName,
        raw: Option<Value>,
        message: &str,
    ) -> Option<String> {
        match self.typed_text(field, raw) {
            Typed::Present(text) if !text.trim().is_empty() => Some(text),
            Typed::Mismatched => None,
            Typed::Present(_) | Typed::Absent => {
                self.push(field, ErrorCode::Required, message);
                None
            }
        }
    }

    /// Text that may be absent but, when sent, must not be blank.
    pub(crate) fn optional_non_blank_text(
        &mut self,
        field: FieldName,
        raw: Option<Value>,
        message: &str,
    ) -> Option<String> {
        match self.typed_text(field, raw) {
            Typed::Present(text) if text.trim().is_empty() => {
                self.push(field, ErrorCode::Required, message);
                None
            }
            Typed::Present(text) => Some(text),
            Typed::Absent | Typed::Mismatched => None,
        }
    }

    /// Free text that may be absent, empty or null.
    pub(crate) fn optional_text(&mut self, field: FieldName, raw: Option<Value>) -> Option<String> {
        match self.typed_text(field, raw) {
            Typed::Present(text) => Some(text),
            Typed::Absent | Typed::Mismatched => None,
        }
    }

    /// An optional array whose entries must all be strings.
    pub(crate) fn optional_text_list(
        &mut self,
        field: FieldName,
        raw: Option<Value>,
    ) -> Option<Vec<String>> {
        let texts = match raw {
            None | Some(Value::Null) => return None,
            Some(Value::Array(entries)) => entries
                .into_iter()
                .map(|entry| match entry {
                    Value::String(text) => Some(text),
                    _ => None,
                })
                .collect::<Option<Vec<_>>>(),
            Some(_) => None,
        };
        if texts.is_none() {
            self.push(
                field,
                ErrorCode::InvalidType,
                format!("{} must be an array of strings", field.as_str()),
            );
        }
        texts
    }

    /// Parse a member of a closed vocabulary such as a category.
    pub(crate) fn vocabulary<T>(&mut self, field: FieldName, raw: &str, allowed: &[T]) -> Option<T>
    where
        T: FromStr + std::fmt::Display,
    {
        match raw.parse::<T>() {
            Ok(value) => Some(value),
            Err(_) => {
                let allowed = allowed
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", ");
                self.push(
                    field,
                    ErrorCode::UnknownValue,
                    format!("{} must be one of: {allowed}", field.as_str()),
                );
                None
            }
        }
    }
}
