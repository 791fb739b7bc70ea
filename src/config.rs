//! Tool Configuration

use std::path::PathBuf;

use crate::model::PROGRESS_INTERVAL;

/// Vocabulary filter configuration
#[derive(Debug, Clone)]
pub struct ReduceConfig {
    /// Newline-delimited list of words to keep
    pub word_list: PathBuf,

    /// Source model file
    pub model: PathBuf,

    /// Destination model file
    pub output: PathBuf,

    /// Records between progress events (0 = never)
    pub progress_every: usize,
}

impl Default for ReduceConfig {
    fn default() -> Self {
        Self {
            word_list: PathBuf::from("words.txt"),
            model: PathBuf::from("model.bin"),
            output: PathBuf::from("model.reduced.bin"),
            progress_every: PROGRESS_INTERVAL,
        }
    }
}

impl ReduceConfig {
    pub fn with_word_list<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.word_list = path.into();
        self
    }

    pub fn with_model<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.model = path.into();
        self
    }

    pub fn with_output<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.output = path.into();
        self
    }

    pub fn with_progress_every(mut self, records: usize) -> Self {
        self.progress_every = records;
        self
    }
}

/// Batch similarity configuration
#[derive(Debug, Clone, Default)]
pub struct BatchConfig {
    /// Number of worker threads (0 = auto-detect)
    pub num_workers: usize,
}

impl BatchConfig {
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.num_workers = workers;
        self
    }

    /// Worker count with auto-detection resolved
    pub fn effective_workers(&self) -> usize {
        if self.num_workers == 0 {
            num_cpus::get()
        } else {
            self.num_workers
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reduce_config_builders() {
        let config = ReduceConfig::default()
            .with_word_list("list.txt")
            .with_model("in.bin")
            .with_output("out.bin")
            .with_progress_every(0);
        assert_eq!(config.word_list, PathBuf::from("list.txt"));
        assert_eq!(config.model, PathBuf::from("in.bin"));
        assert_eq!(config.output, PathBuf::from("out.bin"));
        assert_eq!(config.progress_every, 0);
    }

    #[test]
    fn test_batch_workers_auto_detect() {
        assert!(BatchConfig::default().effective_workers() >= 1);
        assert_eq!(BatchConfig::default().with_workers(3).effective_workers(), 3);
    }
}
