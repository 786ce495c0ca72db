use crate::form::FieldName;
use thiserror::Error;

/// Errors from editing a form. Validation failures are not errors; they are
/// reported as [`ValidationErrors`](crate::form::ValidationErrors).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("unknown field '{0}'")]
    UnknownField(String),

    #[error("field '{field}' does not apply to the {form} form")]
    NotApplicable { field: FieldName, form: &'static str },

    #[error("invalid value '{value}' for field '{field}'")]
    InvalidValue { field: FieldName, value: String },

    #[error("form has been submitted; reset it before editing")]
    Locked,

    #[error("form has not been submitted")]
    NotSubmitted,
}
