//! Word Embedding Model
//!
//! Decodes a binary word2vec stream into a flat row-major store with a
//! word index and precomputed norms, then answers read-only queries.
//! A built [`Model`] is immutable and can be shared across threads.

mod decode;
mod encode;

pub use decode::{Header, RecordReader, COMPONENT_SIZE, RECORD_SEPARATOR, WORD_TERMINATOR};
pub use encode::{encode_record, write_header, write_record};

use hashbrown::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::{debug, info, warn};

use crate::error::{ModelError, Result};
use crate::vector::{magnitude, normalized, Vector};

/// Records between progress events while decoding
pub const PROGRESS_INTERVAL: usize = 100_000;

/// Upper bound on vocab slots reserved from an untrusted header
const MAX_VOCAB_PREALLOC: usize = 1 << 20;

/// An in-memory word embedding model
#[derive(Debug, Clone)]
pub struct Model {
    vocab_size: usize,
    vector_size: usize,
    /// `vocab_size * vector_size` floats, row `i` belongs to `vocab[i]`
    data: Vec<f32>,
    /// Display form of each word, lossily decoded from its raw bytes
    vocab: Vec<String>,
    /// Keyed on the raw word bytes as stored in the stream
    index: HashMap<Box<[u8]>, usize>,
    norms: Vec<f32>,
}

impl Model {
    /// Decode a model from a byte stream.
    ///
    /// Fails with [`ModelError::Io`] when the stream cannot be read and with
    /// [`ModelError::Malformed`] on any format violation, truncation
    /// included. No partial model is ever returned.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut records = RecordReader::new(BufReader::new(reader));
        let header = records.read_header()?;
        let total = header.total_components()?;
        let Header {
            vocab_size,
            vector_size,
        } = header;

        let mut data: Vec<f32> = Vec::new();
        data.try_reserve_exact(total).map_err(|_| {
            ModelError::malformed(format!(
                "cannot allocate {} x {} vectors",
                vocab_size, vector_size
            ))
        })?;
        let mut vocab = Vec::with_capacity(vocab_size.min(MAX_VOCAB_PREALLOC));
        let mut index = HashMap::with_capacity(vocab_size.min(MAX_VOCAB_PREALLOC));

        for i in 0..vocab_size {
            if i > 0 && i % PROGRESS_INTERVAL == 0 {
                debug!("Decoded {} of {} records", i, vocab_size);
            }

            let raw = records.read_word()?;
            let start = data.len();
            data.resize(start + vector_size, 0.0);
            records.read_vector_into(&mut data[start..])?;

            let word = String::from_utf8_lossy(&raw).into_owned();
            if let Some(prev) = index.insert(raw.into_boxed_slice(), i) {
                warn!("Duplicate word {:?} at row {} replaces row {}", word, i, prev);
            }
            vocab.push(word);
        }

        let norms = if vector_size == 0 {
            vec![0.0; vocab_size]
        } else {
            data.chunks_exact(vector_size).map(magnitude).collect()
        };

        info!(
            "Loaded model: vocab={} vector={} distinct={}",
            vocab_size,
            vector_size,
            index.len()
        );

        Ok(Self {
            vocab_size,
            vector_size,
            data,
            vocab,
            index,
            norms,
        })
    }

    /// Open and decode a model file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Opening model {}", path.display());
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    /// Number of records decoded
    pub fn vocab_size(&self) -> usize {
        self.vocab_size
    }

    /// Dimensionality shared by every vector
    pub fn vector_size(&self) -> usize {
        self.vector_size
    }

    /// Words in load order.
    ///
    /// Bytes that are not valid UTF-8 show up as U+FFFD here; look such
    /// words up with [`index_of_bytes`](Self::index_of_bytes).
    pub fn vocab(&self) -> &[String] {
        &self.vocab
    }

    /// Precomputed norms, indexed like [`vocab`](Self::vocab)
    pub fn norms(&self) -> &[f32] {
        &self.norms
    }

    /// The raw row-major backing store
    pub fn connected_vector(&self) -> &[f32] {
        &self.data
    }

    pub fn contains(&self, word: &str) -> bool {
        self.index.contains_key(word.as_bytes())
    }

    /// Row position of `word`
    pub fn index_of(&self, word: &str) -> Option<usize> {
        self.index_of_bytes(word.as_bytes())
    }

    /// Row position of a word given as raw bytes
    pub fn index_of_bytes(&self, word: &[u8]) -> Option<usize> {
        self.index.get(word).copied()
    }

    /// Word stored at row `i`
    pub fn word(&self, i: usize) -> Option<&str> {
        self.vocab.get(i).map(String::as_str)
    }

    /// Raw vector stored at row `i`
    pub fn row(&self, i: usize) -> Option<Vector<'_>> {
        if i >= self.vocab_size {
            return None;
        }
        let start = i * self.vector_size;
        Some(Vector::borrowed(&self.data[start..start + self.vector_size]))
    }

    /// Raw vector of `word` and its norm, or `(None, 0.0)` if absent.
    ///
    /// The vector borrows the model's backing store.
    pub fn vector(&self, word: &str) -> (Option<Vector<'_>>, f32) {
        match self.index_of(word) {
            Some(i) => (self.row(i), self.norms[i]),
            None => (None, 0.0),
        }
    }

    /// Norm of `word`, or `0.0` if absent
    pub fn norm(&self, word: &str) -> f32 {
        self.index_of(word).map(|i| self.norms[i]).unwrap_or(0.0)
    }

    /// Unit-length copy of `word`'s vector.
    ///
    /// A zero-norm row normalizes to an all-zero vector.
    pub fn normalized_vector(&self, word: &str) -> Option<Vector<'static>> {
        let i = self.index_of(word)?;
        let row = self.row(i)?;
        Some(Vector::owned(normalized(&row, self.norms[i])))
    }

    /// Cosine similarity of two words.
    ///
    /// Errors with [`ModelError::WordNotFound`] naming the first missing word.
    pub fn similarity(&self, a: &str, b: &str) -> Result<f32> {
        let va = self
            .normalized_vector(a)
            .ok_or_else(|| ModelError::WordNotFound(a.to_string()))?;
        let vb = self
            .normalized_vector(b)
            .ok_or_else(|| ModelError::WordNotFound(b.to_string()))?;
        Ok(va.dot(&vb))
    }
}
