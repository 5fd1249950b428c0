use crate::bits::reader::{discard, read_u32_be};
use crate::errors::{DurationError, DurationResult};
use crate::mp4::atom::AtomPayload;
use serde::Serialize;
use std::fmt;
use std::io::Read;

/// Timescale substituted when the stored value is zero. QuickTime treats a
/// zero timescale as invalid and falls back to this historical default.
const DEFAULT_TIMESCALE: u32 = 600;

/// Fixed fields preceding the timescale in a version-0 mvhd payload:
/// version, flags, creation time, and modification time.
const MVHD_LEADING_FIELDS: u64 = 20;

/// Movie duration as the exact rational stored in the movie header:
/// `units / timescale` seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MediaDuration {
    /// Raw duration in timescale units.
    pub units: u32,
    /// Number of units per second. Never zero.
    pub timescale: u32,
}

impl MediaDuration {
    /// The duration in seconds, with the precision loss of float division.
    /// Use `units` and `timescale` directly where exactness matters.
    pub fn seconds(&self) -> f64 {
        self.units as f64 / self.timescale as f64
    }
}

impl fmt::Display for MediaDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = (self.units / self.timescale) as u64;
        write!(
            f,
            "{}:{:02}:{:02}",
            total / 3600,
            (total % 3600) / 60,
            total % 60
        )
    }
}

/// Decode the movie duration from an mvhd payload.
///
/// The stream must be positioned at the first byte of the payload; `payload`
/// is the extent reported by the atom scanner. Only the version-0 layout is
/// decoded: the timescale is bytes 20-23 of the payload and the duration is
/// bytes 24-27, both big-endian.
pub fn read_mvhd_duration<R: Read>(
    r: &mut R,
    payload: AtomPayload,
) -> DurationResult<MediaDuration> {
    if let AtomPayload::Bounded(len) = payload {
        if len < MVHD_LEADING_FIELDS + 8 {
            return Err(DurationError::MalformedBox {
                message: format!(
                    "mvhd payload of {} bytes cannot hold the timescale and duration fields",
                    len
                ),
            });
        }
    }

    discard(r, MVHD_LEADING_FIELDS)?;

    let mut timescale = read_u32_be(r)?;
    if timescale == 0 {
        timescale = DEFAULT_TIMESCALE;
    }
    let units = read_u32_be(r)?;

    Ok(MediaDuration { units, timescale })
}
