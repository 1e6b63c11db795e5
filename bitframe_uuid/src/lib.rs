//! RFC 4122 identifiers for bitframe packet descriptions.
//!
//! Packet descriptions regularly need to name a stream, an event, or a piece
//! of equipment in a way that stays unique without central coordination.
//! [`Uuid`] is that field type: an opaque 128-bit value with a fixed 16-byte
//! wire form and a canonical 36-character text form.
//!
//! ```rust
//! use bitframe_uuid::Uuid;
//!
//! let id = Uuid::random()?;
//! assert!(!id.is_null());
//! assert_eq!(id.to_string().len(), 36);
//! # Ok::<(), bitframe_uuid::errors::RandomSourceError>(())
//! ```
//!
//! # Wire form
//!
//! On the wire an identifier is an opaque 16-byte blob. The only internal
//! structure is the RFC 4122 version-4 convention stamped by
//! [`Uuid::random`]: the high nibble of byte 6 holds the version number and
//! the top two bits of byte 8 hold the variant. Raw-byte construction does
//! not enforce that convention: identifiers produced by other systems,
//! other UUID versions included, pass through unchanged. Use the [`wire`]
//! module to copy identifiers to and from packet buffers.
//!
//! # Text form
//!
//! The canonical text form is 32 lowercase hexadecimal digits in 8-4-4-4-12
//! grouping, hyphens at positions 8, 13, 18 and 23:
//!
//! ```rust
//! use bitframe_uuid::Uuid;
//!
//! let id: Uuid = "67e55044-10b1-426f-9247-bb680e5fe0c8".parse()?;
//! assert_eq!(id.to_string(), "67e55044-10b1-426f-9247-bb680e5fe0c8");
//! # Ok::<(), bitframe_uuid::errors::ParseUuidError>(())
//! ```
//!
//! Parsing is strict (exact length, exact hyphen positions, hex digits
//! everywhere else) and accepts both digit cases; rendering always produces
//! lowercase.
//!
//! # The null sentinel
//!
//! The all-zero byte pattern is reserved to mean "no identifier present".
//! It is the [`Default`] value, is detectable with [`Uuid::is_null`], and is
//! never produced by [`Uuid::random`].

mod codec;
mod fields;
mod id;

pub mod errors;
pub mod wire;

pub use id::Uuid;
