//! Vocabulary Filter
//!
//! Streams a binary model and re-emits only the records whose word is in
//! a given list. Vectors are copied bit-for-bit; nothing is indexed or
//! normalized.

use bytes::BytesMut;
use hashbrown::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Read, Write};
use tracing::{debug, info};

use crate::config::ReduceConfig;
use crate::error::{ModelError, Result};
use crate::model::{encode_record, write_header, RecordReader};

/// Outcome of a filtering pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReduceStats {
    /// Records read from the source model
    pub scanned: usize,
    /// Records written to the output
    pub kept: usize,
    pub vector_size: usize,
}

/// Read a newline-delimited word list; blank lines are skipped.
pub fn read_word_list<R: BufRead>(reader: R) -> Result<HashSet<Vec<u8>>> {
    let mut words = HashSet::new();
    for line in reader.split(b'\n') {
        let mut line = line?;
        if line.last() == Some(&b'\r') {
            line.pop();
        }
        if !line.is_empty() {
            words.insert(line);
        }
    }
    Ok(words)
}

/// Filter `model` down to `words`, writing the result to `out`.
pub fn reduce<R: Read, W: Write>(
    model: R,
    words: &HashSet<Vec<u8>>,
    out: &mut W,
    progress_every: usize,
) -> Result<ReduceStats> {
    let mut records = RecordReader::new(BufReader::new(model));
    let header = records.read_header()?;
    info!(
        "Filtering {} records of dimension {} against {} words",
        header.vocab_size,
        header.vector_size,
        words.len()
    );

    let mut row = vec![0.0f32; header.vector_size];
    let mut kept_records = BytesMut::new();
    let mut kept = 0;

    for i in 0..header.vocab_size {
        if progress_every > 0 && i % progress_every == 0 {
            debug!("{} records scanned", i);
        }

        let word = records.read_word()?;
        records.read_vector_into(&mut row)?;

        if words.contains(&word) {
            encode_record(&mut kept_records, &word, &row, true);
            kept += 1;
        }
    }

    // The count is only known after the scan, so the header goes out last.
    write_header(out, kept, header.vector_size)?;
    out.write_all(&kept_records)?;
    out.flush()?;

    info!("Kept {} of {} records", kept, header.vocab_size);

    Ok(ReduceStats {
        scanned: header.vocab_size,
        kept,
        vector_size: header.vector_size,
    })
}

/// Run the filter over the files named in `config`
pub fn reduce_files(config: &ReduceConfig) -> Result<ReduceStats> {
    info!("Reading word list {}", config.word_list.display());
    let words = read_word_list(BufReader::new(File::open(&config.word_list)?))?;
    if words.is_empty() {
        return Err(ModelError::InvalidWordList(format!(
            "{} contains no words",
            config.word_list.display()
        )));
    }

    info!("Opening model {}", config.model.display());
    let model = File::open(&config.model)?;

    // The output file is only created once the whole source has been scanned.
    let mut reduced = Vec::new();
    let stats = reduce(model, &words, &mut reduced, config.progress_every)?;

    let mut out = BufWriter::new(File::create(&config.output)?);
    out.write_all(&reduced)?;
    out.flush()?;
    info!("Wrote {} ({} bytes)", config.output.display(), reduced.len());
    Ok(stats)
}
