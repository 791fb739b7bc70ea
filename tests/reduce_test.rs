//! Vocabulary filter tests over real files.

use std::fs::{self, File};
use std::io::BufWriter;

use tempfile::tempdir;
use word2vec::model::{write_header, write_record};
use word2vec::{reduce_files, Model, ModelError, ReduceConfig};

#[test]
fn test_reduce_files() {
    let dir = tempdir().unwrap();
    let model_path = dir.path().join("model.bin");
    let list_path = dir.path().join("words.txt");
    let out_path = dir.path().join("reduced.bin");

    {
        let mut out = BufWriter::new(File::create(&model_path).unwrap());
        write_header(&mut out, 3, 3).unwrap();
        write_record(&mut out, b"alpha", &[1.0, 2.0, 3.0], false).unwrap();
        write_record(&mut out, b"beta", &[-1.0, 0.5, 0.25], false).unwrap();
        write_record(&mut out, b"gamma", &[0.0, 0.0, 9.0], false).unwrap();
    }
    fs::write(&list_path, "gamma\nalpha\n").unwrap();

    let config = ReduceConfig::default()
        .with_word_list(&list_path)
        .with_model(&model_path)
        .with_output(&out_path);
    let stats = reduce_files(&config).unwrap();
    assert_eq!(stats.scanned, 3);
    assert_eq!(stats.kept, 2);
    assert_eq!(stats.vector_size, 3);

    let original = Model::from_path(&model_path).unwrap();
    let reduced = Model::from_path(&out_path).unwrap();
    assert_eq!(reduced.vocab(), &["alpha", "gamma"]);
    for word in reduced.vocab() {
        assert_eq!(reduced.vector(word).0, original.vector(word).0);
        assert_eq!(reduced.norm(word), original.norm(word));
    }
    assert!(!reduced.contains("beta"));
}

#[test]
fn test_reduce_files_empty_word_list() {
    let dir = tempdir().unwrap();
    let list_path = dir.path().join("words.txt");
    fs::write(&list_path, "\n\n").unwrap();

    let config = ReduceConfig::default()
        .with_word_list(&list_path)
        .with_model(dir.path().join("model.bin"))
        .with_output(dir.path().join("out.bin"));
    assert!(matches!(
        reduce_files(&config),
        Err(ModelError::InvalidWordList(_))
    ));
}

#[test]
fn test_reduce_files_missing_model() {
    let dir = tempdir().unwrap();
    let list_path = dir.path().join("words.txt");
    fs::write(&list_path, "word\n").unwrap();

    let config = ReduceConfig::default()
        .with_word_list(&list_path)
        .with_model(dir.path().join("missing.bin"))
        .with_output(dir.path().join("out.bin"));
    assert!(matches!(reduce_files(&config), Err(ModelError::Io(_))));
    assert!(!dir.path().join("out.bin").exists());
}

#[test]
fn test_reduce_files_truncated_model_leaves_no_output() {
    let dir = tempdir().unwrap();
    let model_path = dir.path().join("model.bin");
    let list_path = dir.path().join("words.txt");
    let out_path = dir.path().join("out.bin");

    {
        let mut out = BufWriter::new(File::create(&model_path).unwrap());
        write_header(&mut out, 3, 2).unwrap();
        write_record(&mut out, b"alpha", &[1.0, 2.0], true).unwrap();
    }
    fs::write(&list_path, "alpha\n").unwrap();

    let config = ReduceConfig::default()
        .with_word_list(&list_path)
        .with_model(&model_path)
        .with_output(&out_path);
    assert!(matches!(
        reduce_files(&config),
        Err(ModelError::Malformed(_))
    ));
    assert!(!out_path.exists());
}
