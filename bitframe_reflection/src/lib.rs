//! Reflective field access for bitframe packet payloads.
//!
//! Packet payloads are strongly typed, but the surrounding framework often
//! needs to manipulate them generically: listing field names in a tool,
//! applying values read from a configuration file, or diffing two payloads
//! without knowing their concrete types. [`Fields`] is the capability a
//! payload type implements to opt into that protocol.
//!
//! Fields are addressed by a stable, zero-based index. Values travel as
//! [`serde_json::Value`], the same representation the framework uses on its
//! serialized surfaces.

use std::fmt;

use serde_json::Value;

use crate::errors::{SetFieldError, UnknownFieldError};

pub mod errors;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
/// The type of a reflected field.
pub enum FieldType {
    Bool,
    Int8,
    Int16,
    Int32,
    Int64,
    Float,
    Double,
    String,
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FieldType::Bool => "bool",
            FieldType::Int8 => "int8",
            FieldType::Int16 => "int16",
            FieldType::Int32 => "int32",
            FieldType::Int64 => "int64",
            FieldType::Float => "float",
            FieldType::Double => "double",
            FieldType::String => "string",
        };
        f.write_str(name)
    }
}

/// Reflective access to the named fields of a packet payload type.
///
/// Implementors expose a fixed set of fields, addressed by a zero-based
/// index that is stable for the lifetime of the type. The trait is
/// object-safe: framework code that enumerates or edits payloads works
/// against `&dyn Fields` without knowing the concrete payload type.
pub trait Fields {
    /// The number of reflected fields.
    fn field_count(&self) -> usize;

    /// The name of the field at `index`.
    fn field_name(&self, index: usize) -> Result<&'static str, UnknownFieldError>;

    /// The type of the field at `index`.
    fn field_type(&self, index: usize) -> Result<FieldType, UnknownFieldError>;

    /// The current value of the field at `index`.
    fn field(&self, index: usize) -> Result<Value, UnknownFieldError>;

    /// Overwrite the field at `index` with `value`.
    ///
    /// Implementations validate `value` against the field's type and must
    /// leave the payload untouched when they reject it.
    fn set_field(&mut self, index: usize, value: Value) -> Result<(), SetFieldError>;

    /// The index of the field named `name`, if there is one.
    fn field_index(&self, name: &str) -> Option<usize> {
        (0..self.field_count())
            .find(|&index| self.field_name(index).is_ok_and(|candidate| candidate == name))
    }
}
