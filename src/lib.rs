pub mod bits;
pub use bits::reader::{discard, read_u32_be, read_u64_be};

pub mod mp4;
pub use mp4::{
    duration_from_stream, read_mvhd_duration, scan_for_atom, AtomPayload, AtomType, MediaDuration,
};

pub mod streams;
pub use streams::{HttpByteStream, LocalByteStream};

pub mod errors;
pub use errors::{DurationError, DurationResult, StreamError};

macro_rules! with_byte_stream {
    ($source:expr, $body:expr) => {
        if $source.starts_with("http://") || $source.starts_with("https://") {
            let stream = HttpByteStream::open($source)?;
            $body(stream)
        } else {
            let stream = LocalByteStream::open($source)?;
            $body(stream)
        }
    };
}

/// Duration of the MP4/QuickTime resource at `source`, which is either a
/// local file path or an http(s) URL.
pub fn media_duration(source: &str) -> DurationResult<MediaDuration> {
    with_byte_stream!(source, |mut stream| duration_from_stream(&mut stream))
}
