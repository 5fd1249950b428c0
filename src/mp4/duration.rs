use crate::errors::{DurationError, DurationResult};
use crate::mp4::atom::{scan_for_atom, AtomPayload, AtomType};
use crate::mp4::mvhd::{read_mvhd_duration, MediaDuration};
use std::io::Read;

/// Read the movie duration from an MP4/QuickTime box stream.
///
/// Walks the top-level atoms to the moov container, then its children to the
/// mvhd movie header, and decodes the timescale and duration fields. The
/// stream is consumed forward exactly once: nothing is buffered, nothing is
/// seeked, and no atom payloads other than the mvhd fields are interpreted.
/// The caller keeps ownership of the stream; it is never closed here.
pub fn duration_from_stream<R: Read>(r: &mut R) -> DurationResult<MediaDuration> {
    // A moov using the to-end-of-stream size escape has no known extent, so
    // its children cannot be scanned within any bound.
    if scan_for_atom(r, AtomType::MOOV)? == AtomPayload::ToEndOfStream {
        return Err(DurationError::MalformedContainer {
            message: "moov container uses the to-end-of-stream size escape".to_string(),
        });
    }

    // The first child atom of moov starts immediately after the moov header,
    // which the scanner has already consumed.
    let mvhd_payload = scan_for_atom(r, AtomType::MVHD)?;
    read_mvhd_duration(r, mvhd_payload)
}
