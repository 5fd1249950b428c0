use crate::bits::reader::{discard, read_u32_be, read_u64_be};
use crate::errors::{DurationError, DurationResult};
use std::fmt;
use std::io::Read;

/// Four-byte atom type tag. Tags are raw bytes and not necessarily valid text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AtomType(pub [u8; 4]);

impl AtomType {
    /// The top-level movie container atom.
    pub const MOOV: AtomType = AtomType(*b"moov");
    /// The movie header atom holding the global timescale and duration.
    pub const MVHD: AtomType = AtomType(*b"mvhd");
}

impl fmt::Display for AtomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.0))
    }
}

/// Payload extent of a matched atom, with the header bytes already accounted for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AtomPayload {
    /// Payload length in bytes. The stream is positioned at the first payload byte.
    Bounded(u64),
    /// The atom used the `size == 0` escape: its payload runs to end of stream.
    ToEndOfStream,
}

/// Scan forward through consecutive atoms until one matches `target`.
///
/// The stream must be positioned at an atom boundary. Non-matching atoms are
/// skipped whole; on success the stream is left at the first byte of the
/// matched atom's payload and the payload length is returned. The scan never
/// backtracks and never buffers skipped regions.
///
/// The structure of an atom is:
/// - 4 bytes: big-endian total length of the atom (including this header)
/// - 4 bytes: atom type tag in ascii encoding
/// - rest: atom data
///
/// A length of 0 means the atom runs to end of stream; a length of 1 means the
/// real length follows as a 64-bit big-endian value (atoms over 4 GiB).
pub fn scan_for_atom<R: Read>(r: &mut R, target: AtomType) -> DurationResult<AtomPayload> {
    loop {
        let size32 = read_u32_be(r)?;
        let mut tag = [0u8; 4];
        r.read_exact(&mut tag)?;
        let matched = tag == target.0;

        let (total, header_len) = match size32 {
            0 => {
                if matched {
                    return Ok(AtomPayload::ToEndOfStream);
                }
                // The atom continues until EOF but it's not the one we are
                // looking for, so there is no way to skip past it.
                return Err(DurationError::UnexpectedEndOfStream);
            }
            1 => (read_u64_be(r)?, 16u64), // extended (64 bit) size
            n => (n as u64, 8u64),
        };

        if total < header_len {
            return Err(DurationError::MalformedBox {
                message: format!(
                    "atom '{}' declares total size {} smaller than its {}-byte header",
                    AtomType(tag),
                    total,
                    header_len
                ),
            });
        }

        let payload = total - header_len;
        if matched {
            return Ok(AtomPayload::Bounded(payload));
        }
        discard(r, payload)?;
    }
}
