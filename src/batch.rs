//! Batch Similarity
//!
//! Scores many word pairs against one shared model on scoped worker threads.

use std::panic;
use tracing::debug;

use crate::config::BatchConfig;
use crate::error::Result;
use crate::model::Model;

/// Cosine similarity for every pair, in input order.
///
/// Each entry fails independently with `WordNotFound`.
pub fn score_pairs<S>(model: &Model, pairs: &[(S, S)], config: &BatchConfig) -> Vec<Result<f32>>
where
    S: AsRef<str> + Sync,
{
    if pairs.is_empty() {
        return Vec::new();
    }

    let workers = config.effective_workers().min(pairs.len());
    let chunk_size = pairs.len().div_ceil(workers);
    debug!("Scoring {} pairs on {} workers", pairs.len(), workers);

    let scored = crossbeam::scope(|s| {
        let handles: Vec<_> = pairs
            .chunks(chunk_size)
            .map(|chunk| {
                s.spawn(move |_| {
                    chunk
                        .iter()
                        .map(|(a, b)| model.similarity(a.as_ref(), b.as_ref()))
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        handles
            .into_iter()
            .flat_map(|h| match h.join() {
                Ok(results) => results,
                Err(payload) => panic::resume_unwind(payload),
            })
            .collect::<Vec<_>>()
    });

    match scored {
        Ok(results) => results,
        Err(payload) => panic::resume_unwind(payload),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ModelError;
    use crate::model::{write_header, write_record};
    use std::io::Cursor;

    fn model() -> Model {
        let mut bytes = Vec::new();
        write_header(&mut bytes, 3, 2).unwrap();
        write_record(&mut bytes, b"x", &[1.0, 0.0], true).unwrap();
        write_record(&mut bytes, b"y", &[0.0, 1.0], true).unwrap();
        write_record(&mut bytes, b"xy", &[1.0, 1.0], true).unwrap();
        Model::from_reader(Cursor::new(bytes)).unwrap()
    }

    #[test]
    fn test_score_pairs_in_order() {
        let model = model();
        let pairs = vec![
            ("x", "x"),
            ("x", "y"),
            ("x", "nope"),
            ("xy", "y"),
            ("y", "y"),
        ];
        let results = score_pairs(&model, &pairs, &BatchConfig::default().with_workers(2));
        assert_eq!(results.len(), pairs.len());

        for ((a, b), result) in pairs.iter().zip(&results) {
            match model.similarity(a, b) {
                Ok(expected) => assert_eq!(*result.as_ref().unwrap(), expected),
                Err(_) => assert!(matches!(result, Err(ModelError::WordNotFound(_)))),
            }
        }
    }

    #[test]
    fn test_score_pairs_more_workers_than_pairs() {
        let model = model();
        let pairs = vec![("x".to_string(), "xy".to_string())];
        let results = score_pairs(&model, &pairs, &BatchConfig::default().with_workers(16));
        assert_eq!(results.len(), 1);
        assert!((results[0].as_ref().unwrap() - std::f32::consts::FRAC_1_SQRT_2).abs() < 1e-6);
    }

    #[test]
    fn test_score_pairs_empty() {
        let model = model();
        let pairs: Vec<(String, String)> = Vec::new();
        assert!(score_pairs(&model, &pairs, &BatchConfig::default()).is_empty());
    }
}
