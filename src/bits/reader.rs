/*
# Bits Reader Module

 Provides utilities for reading big-endian binary data from forward-only streams.
 The atom structure of MP4/QuickTime files is built from fixed-width big-endian
 integers, so everything here is byte-aligned.

 Key components:
 - Byte-aligned readers: `read_u32_be()`, `read_u64_be()`
 - `discard()`: skip bytes from a non-seekable stream without buffering them
*/

use std::io::{self, Read};

/// Read a 32-bit big endian value from `r`.
pub fn read_u32_be<R: Read>(r: &mut R) -> io::Result<u32> {
    let mut buf = [0u8; 4];
    r.read_exact(&mut buf)?;
    Ok(u32::from_be_bytes(buf))
}

/// Read a 64-bit big endian value from `r`.
pub fn read_u64_be<R: Read>(r: &mut R) -> io::Result<u64> {
    let mut buf = [0u8; 8];
    r.read_exact(&mut buf)?;
    Ok(u64::from_be_bytes(buf))
}

/// Discard exactly `n` bytes from `r`.
///
/// The bytes are copied into `io::sink`, so memory use stays bounded no matter
/// how large the skipped region is. Returns `UnexpectedEof` if the stream ends
/// before `n` bytes were consumed.
pub fn discard<R: Read>(r: &mut R, n: u64) -> io::Result<()> {
    let copied = io::copy(&mut r.by_ref().take(n), &mut io::sink())?;
    if copied < n {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "stream ended while skipping",
        ));
    }
    Ok(())
}
