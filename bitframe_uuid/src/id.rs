use std::fmt;
use std::str::FromStr;

use crate::codec;
use crate::errors::{ParseUuidError, RandomSourceError};

#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// A 128-bit universally unique identifier, stored as 16 raw bytes.
///
/// `Uuid` is a plain value: cheap to copy, comparable, hashable, and owned
/// outright by its holder. Equality and ordering compare the 16 bytes as
/// unsigned values, most significant first.
///
/// The [`Default`] value is the [null sentinel](Uuid::NULL). Fresh
/// identifiers come from [`Uuid::random`]; identifiers received from
/// elsewhere are rebuilt with [`Uuid::from_bytes`] or parsed from the
/// canonical text form:
///
/// ```rust
/// use bitframe_uuid::Uuid;
///
/// let id = Uuid::from_bytes([
///     0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08,
///     0x09, 0x0a, 0x0b, 0x0c, 0x0d, 0x0e, 0x0f, 0x10,
/// ]);
/// assert_eq!(id.to_string(), "01020304-0506-0708-090a-0b0c0d0e0f10");
/// ```
pub struct Uuid([u8; 16]);

impl Uuid {
    /// The width of the wire representation, in bytes.
    pub const LEN: usize = codec::WIDTH;

    /// The null identifier: all 16 bytes zero.
    ///
    /// The all-zero pattern is reserved to mean "no identifier present". It
    /// is never produced by [`Uuid::random`].
    pub const NULL: Uuid = Uuid([0; 16]);

    /// Build an identifier from its 16-byte wire representation.
    ///
    /// The bytes are copied verbatim and not validated: the null sentinel
    /// and identifiers generated by other UUID versions are accepted as-is.
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    /// Generate a new random identifier using the cryptographically secure
    /// random number generator provided by the operating system.
    ///
    /// The result follows the RFC 4122 version-4 layout: the high nibble of
    /// byte 6 is `0x4` and the top two bits of byte 8 are `10`; the other
    /// 122 bits are random.
    ///
    /// # Failure
    ///
    /// Fails only if the operating system's random source fails, which
    /// indicates a broken execution environment. The failure is surfaced
    /// as-is and never retried.
    pub fn random() -> Result<Self, RandomSourceError> {
        codec::generate().map(Self)
    }

    /// `true` iff all 16 bytes are zero.
    pub fn is_null(&self) -> bool {
        *self == Self::NULL
    }

    /// Get a reference to the 16-byte wire representation.
    pub const fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// Consume the identifier, returning its 16-byte wire representation.
    pub const fn into_bytes(self) -> [u8; 16] {
        self.0
    }

    /// Overwrite all 16 bytes with the given wire representation.
    ///
    /// Same contract as [`Uuid::from_bytes`]: no validation.
    pub fn set_bytes(&mut self, bytes: [u8; 16]) {
        self.0 = bytes;
    }

    /// Overwrite the identifier with the value parsed from the canonical
    /// text form.
    ///
    /// The update is atomic: on failure the identifier is left untouched.
    pub fn set_text(&mut self, text: &str) -> Result<(), ParseUuidError> {
        self.0 = codec::parse(text)?;
        Ok(())
    }

    /// The version number encoded in the high nibble of byte 6.
    ///
    /// [`Uuid::random`] always produces version 4. Identifiers built from
    /// raw bytes may carry any value here.
    pub const fn version(&self) -> u8 {
        self.0[6] >> 4
    }

    /// The variant encoded in the top two bits of byte 8.
    ///
    /// `0b10` is the RFC 4122 variant, the only one [`Uuid::random`]
    /// produces.
    pub const fn variant(&self) -> u8 {
        self.0[8] >> 6
    }
}

impl fmt::Display for Uuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        codec::unparse(&self.0, f)
    }
}

impl fmt::Debug for Uuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        <Self as fmt::Display>::fmt(self, f)
    }
}

impl FromStr for Uuid {
    type Err = ParseUuidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        codec::parse(s).map(Self)
    }
}

impl From<[u8; 16]> for Uuid {
    fn from(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }
}

impl From<Uuid> for [u8; 16] {
    fn from(id: Uuid) -> Self {
        id.0
    }
}

impl serde::Serialize for Uuid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for Uuid {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct TextVisitor;

        impl serde::de::Visitor<'_> for TextVisitor {
            type Value = Uuid;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a hyphenated UUID string")
            }

            fn visit_str<E>(self, v: &str) -> Result<Uuid, E>
            where
                E: serde::de::Error,
            {
                v.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_str(TextVisitor)
    }
}
