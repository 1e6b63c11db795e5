//! Errors that can occur during reflective field access.
use crate::FieldType;

#[derive(Debug, thiserror::Error)]
#[error("There is no field with index {index} on `{type_name}`.")]
/// The field index is out of range for the payload type.
pub struct UnknownFieldError {
    /// The index that was requested.
    pub index: usize,
    /// The name of the payload type.
    pub type_name: &'static str,
}

#[derive(Debug, thiserror::Error)]
#[error("Expected a `{expected}` value for the `{field}` field.")]
/// The value handed to a setter does not have the field's type.
pub struct TypeMismatchError {
    /// The name of the field being set.
    pub field: &'static str,
    /// The type the field expects.
    pub expected: FieldType,
}

#[derive(Debug, thiserror::Error)]
#[error("`{value}` is not a valid value for the `{field}` field.")]
/// The value had the right type but was rejected by the field's own
/// validation.
pub struct InvalidFieldValueError {
    /// The name of the field being set.
    pub field: &'static str,
    /// The offending input, verbatim.
    pub value: String,
    #[source]
    /// The underlying validation failure.
    pub source: Box<dyn std::error::Error + Send + Sync>,
}

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
/// The error returned by [`Fields::set_field`][crate::Fields::set_field].
pub enum SetFieldError {
    #[error(transparent)]
    /// See [`UnknownFieldError`] for details.
    UnknownField(#[from] UnknownFieldError),
    #[error(transparent)]
    /// See [`TypeMismatchError`] for details.
    TypeMismatch(#[from] TypeMismatchError),
    #[error(transparent)]
    /// See [`InvalidFieldValueError`] for details.
    InvalidValue(#[from] InvalidFieldValueError),
}
