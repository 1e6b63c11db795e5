use bitframe_reflection::errors::{
    InvalidFieldValueError, SetFieldError, TypeMismatchError, UnknownFieldError,
};
use bitframe_reflection::{FieldType, Fields};
use serde_json::Value;

use crate::Uuid;

const UUID_FIELD: &str = "UUID";

/// An identifier exposes a single string-typed field holding its canonical
/// text form. Setting the field parses the text with the strict grammar and
/// leaves the identifier untouched when the input is rejected.
impl Fields for Uuid {
    fn field_count(&self) -> usize {
        1
    }

    fn field_name(&self, index: usize) -> Result<&'static str, UnknownFieldError> {
        match index {
            0 => Ok(UUID_FIELD),
            _ => Err(unknown(index)),
        }
    }

    fn field_type(&self, index: usize) -> Result<FieldType, UnknownFieldError> {
        match index {
            0 => Ok(FieldType::String),
            _ => Err(unknown(index)),
        }
    }

    fn field(&self, index: usize) -> Result<Value, UnknownFieldError> {
        match index {
            0 => Ok(Value::String(self.to_string())),
            _ => Err(unknown(index)),
        }
    }

    fn set_field(&mut self, index: usize, value: Value) -> Result<(), SetFieldError> {
        if index != 0 {
            return Err(unknown(index).into());
        }
        let Value::String(text) = value else {
            return Err(TypeMismatchError {
                field: UUID_FIELD,
                expected: FieldType::String,
            }
            .into());
        };
        match self.set_text(&text) {
            Ok(()) => Ok(()),
            Err(source) => Err(InvalidFieldValueError {
                field: UUID_FIELD,
                value: text,
                source: source.into(),
            }
            .into()),
        }
    }
}

fn unknown(index: usize) -> UnknownFieldError {
    UnknownFieldError {
        index,
        type_name: "Uuid",
    }
}
