//! Inbound seed events from the capture backend, one JSON object per line

use std::io::BufRead;

use serde::{Deserialize, Serialize};

use crate::io::error::{LogoError, Result};
use crate::seed::hash::derive_seed_str;

/// Capture notification carrying the photo payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedEvent {
    /// Whether the capture condition fired; other events are ignored
    pub detected: bool,
    /// Encoded photo payload hashed into the seed
    #[serde(default)]
    pub image: String,
    /// Event kind reported by the backend
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event: Option<String>,
    /// Backend timestamp, kept verbatim
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

impl SeedEvent {
    /// A detected event for a payload
    pub fn detected(image: impl Into<String>) -> Self {
        Self {
            detected: true,
            image: image.into(),
            event: None,
            timestamp: None,
        }
    }

    /// Decode one JSON event
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a valid event object.
    pub fn from_json(text: &str, line: usize) -> Result<Self> {
        Self::from_slice(text.as_bytes(), line)
    }

    /// Decode one JSON event from raw line bytes
    ///
    /// Bytes that are not UTF-8 are a decode failure for this line only.
    ///
    /// # Errors
    ///
    /// Returns an error if the bytes are not a valid event object.
    pub fn from_slice(bytes: &[u8], line: usize) -> Result<Self> {
        serde_json::from_slice(bytes).map_err(|source| LogoError::EventDecode { line, source })
    }

    /// Seed derived from the payload
    pub fn seed(&self) -> u64 {
        derive_seed_str(&self.image)
    }
}

/// Iterator over newline-delimited JSON events
///
/// Blank lines are skipped. A decode failure yields an error for that line
/// and the stream continues.
pub struct EventReader<R> {
    reader: R,
    line: usize,
    buffer: Vec<u8>,
}

impl<R: BufRead> EventReader<R> {
    /// Wrap a buffered reader
    pub const fn new(reader: R) -> Self {
        Self {
            reader,
            line: 0,
            buffer: Vec::new(),
        }
    }

    /// Number of lines consumed so far
    pub const fn lines_read(&self) -> usize {
        self.line
    }
}

impl<R: BufRead> Iterator for EventReader<R> {
    type Item = Result<SeedEvent>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            self.buffer.clear();
            match self.reader.read_until(b'\n', &mut self.buffer) {
                Ok(0) => return None,
                Ok(_) => {
                    self.line += 1;
                    let bytes = self.buffer.trim_ascii();
                    if !bytes.is_empty() {
                        return Some(SeedEvent::from_slice(bytes, self.line));
                    }
                }
                Err(error) => return Some(Err(LogoError::from(error))),
            }
        }
    }
}
