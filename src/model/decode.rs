//! Binary Model Decoder
//!
//! Streaming reader for the word2vec binary layout:
//!
//! ```text
//! <vocab_size> <vector_size>\n
//! <word> <f32 LE x vector_size>[\n]
//! <word> <f32 LE x vector_size>[\n]
//! ...
//! ```
//!
//! The newline after each vector is optional; files written with and
//! without it decode identically.

use bytes::Buf;
use std::io::{BufRead, Read};

use crate::error::{ModelError, Result};

/// Byte terminating every word
pub const WORD_TERMINATOR: u8 = b' ';

/// Optional byte following every vector
pub const RECORD_SEPARATOR: u8 = b'\n';

/// Size of one encoded component
pub const COMPONENT_SIZE: usize = std::mem::size_of::<f32>();

/// Longest header line accepted, newline included
pub const MAX_HEADER_BYTES: usize = 256;

/// Longest word accepted, leading newlines and terminator included
pub const MAX_WORD_BYTES: usize = 64 * 1024;

/// Parsed header line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub vocab_size: usize,
    pub vector_size: usize,
}

impl Header {
    /// Parse `"<vocab_size> <vector_size>"`, surrounding whitespace allowed.
    pub fn parse(line: &[u8]) -> Result<Self> {
        let text = std::str::from_utf8(line)
            .map_err(|_| ModelError::malformed("header is not valid text"))?;
        let mut fields = text.split_whitespace();

        let vocab_size = parse_count(fields.next(), "vocab size")?;
        let vector_size = parse_count(fields.next(), "vector size")?;
        if let Some(extra) = fields.next() {
            return Err(ModelError::malformed(format!(
                "unexpected trailing header field: {:?}",
                extra
            )));
        }

        Ok(Self {
            vocab_size,
            vector_size,
        })
    }

    /// Number of floats in the full backing store
    pub fn total_components(&self) -> Result<usize> {
        self.vocab_size
            .checked_mul(self.vector_size)
            .ok_or_else(|| ModelError::malformed("vocab size * vector size overflows"))
    }
}

fn parse_count(field: Option<&str>, name: &str) -> Result<usize> {
    let field = field.ok_or_else(|| ModelError::malformed(format!("header is missing {}", name)))?;
    let value: i64 = field
        .parse()
        .map_err(|_| ModelError::malformed(format!("{} is not an integer: {:?}", name, field)))?;
    if value < 0 {
        return Err(ModelError::malformed(format!("{} is negative: {}", name, value)));
    }
    usize::try_from(value).map_err(|_| ModelError::malformed(format!("{} is too large", name)))
}

/// Sequential record reader over a buffered byte stream
pub struct RecordReader<R> {
    inner: R,
    scratch: Vec<u8>,
}

impl<R: BufRead> RecordReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            scratch: Vec::new(),
        }
    }

    /// Read and parse the header line.
    ///
    /// A header ending at EOF without a newline is accepted.
    pub fn read_header(&mut self) -> Result<Header> {
        let mut line = Vec::new();
        let n = (&mut self.inner)
            .take(MAX_HEADER_BYTES as u64)
            .read_until(b'\n', &mut line)
            .map_err(|e| ModelError::from_read(e, "header"))?;
        if n == 0 {
            return Err(ModelError::malformed("empty stream, no header"));
        }
        if n == MAX_HEADER_BYTES && line.last() != Some(&b'\n') {
            return Err(ModelError::malformed(format!(
                "header exceeds {} bytes",
                MAX_HEADER_BYTES
            )));
        }
        Header::parse(&line)
    }

    /// Read the next word up to its terminating space.
    ///
    /// Newlines left over from the previous record are skipped, and the
    /// returned bytes exclude the terminator.
    pub fn read_word(&mut self) -> Result<Vec<u8>> {
        let mut word = Vec::new();
        let n = (&mut self.inner)
            .take(MAX_WORD_BYTES as u64)
            .read_until(WORD_TERMINATOR, &mut word)
            .map_err(|e| ModelError::from_read(e, "word"))?;

        if word.last() != Some(&WORD_TERMINATOR) {
            if n == MAX_WORD_BYTES {
                return Err(ModelError::malformed(format!(
                    "word exceeds {} bytes without a terminator",
                    MAX_WORD_BYTES
                )));
            }
            return Err(ModelError::malformed(
                "word terminator not found before end of stream",
            ));
        }
        word.pop();

        let leading = word.iter().take_while(|&&b| b == RECORD_SEPARATOR).count();
        word.drain(..leading);
        Ok(word)
    }

    /// Read one little-endian vector into `row`.
    pub fn read_vector_into(&mut self, row: &mut [f32]) -> Result<()> {
        let len = row.len() * COMPONENT_SIZE;
        self.scratch.resize(len, 0);
        self.inner
            .read_exact(&mut self.scratch)
            .map_err(|e| ModelError::from_read(e, "vector"))?;

        let mut buf = &self.scratch[..];
        for slot in row.iter_mut() {
            *slot = buf.get_f32_le();
        }
        Ok(())
    }
}
