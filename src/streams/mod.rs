pub mod http_stream;
pub use http_stream::HttpByteStream;


use std::io::{self, Read};
use std::path::Path;

/// Local file wrapper exposing a forward-only byte stream
pub struct LocalByteStream(std::fs::File);

impl LocalByteStream {
    pub fn open<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        Ok(LocalByteStream(std::fs::File::open(path)?))
    }
}

impl Read for LocalByteStream {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.0.read(buf)
    }
}
