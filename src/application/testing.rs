//! Test doubles shared by the application tests

use std::cell::Cell;

use crate::domain::ports::{EncodeError, EncodeOptions, Encoder};

/// Prefixes the source bytes with `WEBP:`; fails on sources starting with `BAD`.
#[derive(Debug, Default)]
pub(crate) struct FakeEncoder {
    pub(crate) calls: Cell<usize>,
}

impl Encoder for FakeEncoder {
    fn extension(&self) -> &str {
        "webp"
    }

    fn encode(&self, source: &[u8], options: &EncodeOptions) -> Result<Vec<u8>, EncodeError> {
        assert!(!options.lossless, "conversion must be lossy");
        self.calls.set(self.calls.get() + 1);
        if source.starts_with(b"BAD") {
            return Err(EncodeError::Decode("corrupt PNG".to_string()));
        }
        let mut out = b"WEBP:".to_vec();
        out.extend_from_slice(source);
        Ok(out)
    }
}
