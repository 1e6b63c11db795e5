//! Errors that can occur when working with packet identifiers.

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
/// The error returned when parsing the canonical text form of an identifier
/// fails.
///
/// Parsing is atomic: when any of these errors is returned, no identifier
/// has been produced or modified.
pub enum ParseUuidError {
    #[error(transparent)]
    /// See [`InvalidLength`] for details.
    InvalidLength(#[from] InvalidLength),
    #[error(transparent)]
    /// See [`MissingHyphen`] for details.
    MissingHyphen(#[from] MissingHyphen),
    #[error(transparent)]
    /// See [`InvalidCharacter`] for details.
    InvalidCharacter(#[from] InvalidCharacter),
}

#[derive(Debug, thiserror::Error)]
#[error("The canonical UUID representation is 36 characters long, but the input is {actual} characters long.")]
#[non_exhaustive]
/// The input does not have the canonical 36-character length.
pub struct InvalidLength {
    /// The length of the input, in bytes.
    pub actual: usize,
}

#[derive(Debug, thiserror::Error)]
#[error("Expected a hyphen at position {position} of the UUID representation, found `{actual}`.")]
#[non_exhaustive]
/// One of the four mandated separator positions (8, 13, 18, 23) does not
/// hold a hyphen.
pub struct MissingHyphen {
    /// The byte position of the offending character.
    pub position: usize,
    /// The character found at that position.
    pub actual: char,
}

#[derive(Debug, thiserror::Error)]
#[error("Expected a hexadecimal digit at position {position} of the UUID representation, found `{actual}`.")]
#[non_exhaustive]
/// A digit position holds something other than a hexadecimal digit.
pub struct InvalidCharacter {
    /// The byte position of the offending character.
    pub position: usize,
    /// The character found at that position.
    pub actual: char,
}

#[derive(Debug, thiserror::Error)]
#[error("A UUID field occupies 16 bytes: offset {offset} is out of bounds for a buffer of {buffer_len} bytes.")]
#[non_exhaustive]
/// The error returned by [`wire::pack`][crate::wire::pack] and
/// [`wire::unpack`][crate::wire::unpack] when the 16-byte field does not fit
/// in the buffer at the requested offset.
pub struct OutOfBoundsError {
    /// The requested offset.
    pub offset: usize,
    /// The length of the buffer.
    pub buffer_len: usize,
}

#[derive(Debug, thiserror::Error)]
#[error("The operating system failed to provide cryptographically secure random bytes.")]
#[non_exhaustive]
/// The error returned by [`Uuid::random`][crate::Uuid::random] when the
/// operating system's random source fails.
///
/// This indicates a broken execution environment. It is not worth retrying:
/// surface it and let the process owner fix the environment.
pub struct RandomSourceError {
    #[source]
    pub(crate) source: getrandom::Error,
}
