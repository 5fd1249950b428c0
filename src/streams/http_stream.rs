use crate::errors::{DurationError, DurationResult, StreamError};
use log::info;
use reqwest::blocking::{Client, Response};
use std::io::{self, Read};

/// Forward-only HTTP byte stream over a single GET request.
///
/// The response body is read incrementally as the parser consumes it, so only
/// the bytes actually scanned are downloaded from a server that streams its
/// response. There is no seeking and no range-request machinery; the request
/// carries a timeout, which is the only cancellation mechanism the parser
/// relies on.
#[derive(Debug)]
pub struct HttpByteStream {
    response: Response,
    bytes_read: u64,
}

impl HttpByteStream {
    const REQUEST_TIMEOUT_SECS: u64 = 30;

    pub fn open(url: &str) -> DurationResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(Self::REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| StreamError::new(e.to_string()))?;

        let response = client
            .get(url)
            .send()
            .map_err(|e| StreamError::new(e.to_string()))?;

        if !response.status().is_success() {
            return Err(DurationError::Stream(StreamError::new(format!(
                "HTTP error: {}",
                response.status()
            ))));
        }

        info!("📥 Streaming {}", url);
        Ok(Self {
            response,
            bytes_read: 0,
        })
    }

    /// Bytes consumed from the response body so far.
    pub fn bytes_read(&self) -> u64 {
        self.bytes_read
    }

    /// Content length reported by the server, if any.
    pub fn content_length(&self) -> Option<u64> {
        self.response.content_length()
    }

    /// Print stats function.
    pub fn print_stats(&self) {
        info!("📊 Download Statistics:");
        info!(
            "   📥 Total Downloaded: {} bytes ({:.2} KB)",
            self.bytes_read,
            self.bytes_read as f64 / 1024.0
        );
        if let Some(length) = self.content_length() {
            let percentage = (self.bytes_read as f64 / length as f64) * 100.0;
            info!("   📊 Downloaded: {:.2}% of total file", percentage);
        }
    }
}

impl Read for HttpByteStream {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.response.read(buf)?;
        self.bytes_read += n as u64;
        Ok(n)
    }
}
