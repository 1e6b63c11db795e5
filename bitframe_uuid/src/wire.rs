//! Copy identifiers to and from caller-provided packet buffers.
//!
//! A packed identifier is its 16 raw bytes, verbatim, at a caller-chosen
//! offset. Both directions check bounds explicitly and never touch the
//! buffer on failure.

use crate::Uuid;
use crate::errors::OutOfBoundsError;

/// Write the 16 raw bytes of `id` into `buf`, starting at `offset`.
///
/// ```rust
/// use bitframe_uuid::{Uuid, wire};
///
/// let id = Uuid::random()?;
/// let mut packet = [0u8; 32];
/// wire::pack(&mut packet, 4, &id)?;
/// assert_eq!(wire::unpack(&packet, 4)?, id);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
///
/// Fails with [`OutOfBoundsError`] when `offset + 16` exceeds the buffer
/// length; the buffer is left untouched.
pub fn pack(buf: &mut [u8], offset: usize, id: &Uuid) -> Result<(), OutOfBoundsError> {
    let buffer_len = buf.len();
    let field = offset
        .checked_add(Uuid::LEN)
        .and_then(|end| buf.get_mut(offset..end))
        .ok_or(OutOfBoundsError { offset, buffer_len })?;
    field.copy_from_slice(id.as_bytes());
    Ok(())
}

/// Read 16 bytes from `buf`, starting at `offset`, into a fresh identifier.
///
/// The bytes are not validated, matching [`Uuid::from_bytes`].
///
/// Fails with [`OutOfBoundsError`] when `offset + 16` exceeds the buffer
/// length.
pub fn unpack(buf: &[u8], offset: usize) -> Result<Uuid, OutOfBoundsError> {
    let field = offset
        .checked_add(Uuid::LEN)
        .and_then(|end| buf.get(offset..end))
        .ok_or(OutOfBoundsError {
            offset,
            buffer_len: buf.len(),
        })?;
    let mut bytes = [0u8; Uuid::LEN];
    bytes.copy_from_slice(field);
    Ok(Uuid::from_bytes(bytes))
}
