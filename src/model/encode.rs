//! Binary Model Encoder
//!
//! Writes the same layout [`RecordReader`](super::RecordReader) consumes.

use bytes::{BufMut, BytesMut};
use std::io::{self, Write};

use super::decode::{COMPONENT_SIZE, RECORD_SEPARATOR, WORD_TERMINATOR};

/// Write the `"<vocab_size> <vector_size>\n"` header line
pub fn write_header<W: Write>(w: &mut W, vocab_size: usize, vector_size: usize) -> io::Result<()> {
    writeln!(w, "{} {}", vocab_size, vector_size)
}

/// Append one record to `buf`
pub fn encode_record(buf: &mut BytesMut, word: &[u8], vector: &[f32], trailing_newline: bool) {
    buf.reserve(word.len() + 2 + vector.len() * COMPONENT_SIZE);
    buf.put_slice(word);
    buf.put_u8(WORD_TERMINATOR);
    for &x in vector {
        buf.put_f32_le(x);
    }
    if trailing_newline {
        buf.put_u8(RECORD_SEPARATOR);
    }
}

/// Encode one record straight to a writer
pub fn write_record<W: Write>(
    w: &mut W,
    word: &[u8],
    vector: &[f32],
    trailing_newline: bool,
) -> io::Result<()> {
    let mut buf = BytesMut::new();
    encode_record(&mut buf, word, vector, trailing_newline);
    w.write_all(&buf)
}
