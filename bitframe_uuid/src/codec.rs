//! The byte layout and text grammar of RFC 4122 identifiers.
//!
//! Everything that knows where the version and variant bits live, or what
//! the canonical text form looks like, sits in this module. The rest of the
//! crate treats an identifier as an opaque 16-byte value.

use std::fmt;

use crate::errors::{
    InvalidCharacter, InvalidLength, MissingHyphen, ParseUuidError, RandomSourceError,
};

/// Bytes in the wire representation.
pub(crate) const WIDTH: usize = 16;

/// Characters in the canonical text representation.
pub(crate) const TEXT_WIDTH: usize = 36;

/// Produce 16 bytes from the operating system's CSPRNG, stamped with the
/// version-4 markers.
pub(crate) fn generate() -> Result<[u8; WIDTH], RandomSourceError> {
    let mut bytes = [0u8; WIDTH];
    if let Err(source) = getrandom::fill(&mut bytes) {
        tracing::error!(
            error = %source,
            "The operating system failed to provide random bytes for UUID generation."
        );
        return Err(RandomSourceError { source });
    }
    // Version 4 (random) in the high nibble of byte 6; RFC 4122 variant in
    // the top two bits of byte 8.
    bytes[6] = (bytes[6] & 0x0f) | 0x40;
    bytes[8] = (bytes[8] & 0x3f) | 0x80;
    Ok(bytes)
}

/// Parse the canonical 36-character hyphenated form.
///
/// Both digit cases are accepted. The whole input is validated before any
/// bytes are returned, so a failure never leaves a partial result behind.
pub(crate) fn parse(input: &str) -> Result<[u8; WIDTH], ParseUuidError> {
    if input.len() != TEXT_WIDTH {
        return Err(InvalidLength {
            actual: input.len(),
        }
        .into());
    }
    let mut bytes = [0u8; WIDTH];
    let mut nibble = 0;
    for (position, &byte) in input.as_bytes().iter().enumerate() {
        if matches!(position, 8 | 13 | 18 | 23) {
            if byte != b'-' {
                return Err(MissingHyphen {
                    position,
                    actual: char_at(input, position),
                }
                .into());
            }
            continue;
        }
        let Some(digit) = hex_digit(byte) else {
            return Err(InvalidCharacter {
                position,
                actual: char_at(input, position),
            }
            .into());
        };
        bytes[nibble / 2] = (bytes[nibble / 2] << 4) | digit;
        nibble += 1;
    }
    Ok(bytes)
}

/// Render the canonical lowercase hyphenated form.
pub(crate) fn unparse(bytes: &[u8; WIDTH], f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
        f,
        "{:02x}{:02x}{:02x}{:02x}-{:02x}{:02x}-{:02x}{:02x}-{:02x}{:02x}-{:02x}{:02x}{:02x}{:02x}{:02x}{:02x}",
        bytes[0],
        bytes[1],
        bytes[2],
        bytes[3],
        bytes[4],
        bytes[5],
        bytes[6],
        bytes[7],
        bytes[8],
        bytes[9],
        bytes[10],
        bytes[11],
        bytes[12],
        bytes[13],
        bytes[14],
        bytes[15]
    )
}

const fn hex_digit(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

/// The character starting at byte `position`, for error reporting.
///
/// `position` may point into the middle of a multi-byte character; fall back
/// to the replacement character rather than slicing across the boundary.
fn char_at(input: &str, position: usize) -> char {
    input
        .get(position..)
        .and_then(|rest| rest.chars().next())
        .unwrap_or(char::REPLACEMENT_CHARACTER)
}
