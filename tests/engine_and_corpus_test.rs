//! Integration tests for the completion engine over file-backed corpora.

use std::io::Write;

use stubcomplete::completion::CompletionEngine;
use stubcomplete::config::CompletionConfig;
use stubcomplete::corpus::Corpus;
use stubcomplete::error::Result;
use tempfile::NamedTempFile;

fn write_frequency_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "banana 10").unwrap();
    writeln!(file, "bandana 5").unwrap();
    writeln!(file, "band 3").unwrap();
    writeln!(file, "bank 7").unwrap();
    writeln!(file, "bath 2").unwrap();
    file
}

#[test]
fn test_engine_from_frequency_file() -> Result<()> {
    let file = write_frequency_file();
    let engine = CompletionEngine::new(Corpus::load(file.path())?);

    let suggestions = engine.suggest("bat")?;
    assert_eq!(suggestions[0].word, "bath");
    assert_eq!(suggestions[0].distance, 0);
    assert!(suggestions[1..].iter().all(|s| s.distance == 1));
    assert_eq!(suggestions.len(), 5);

    Ok(())
}

#[test]
fn test_config_file_drives_engine() -> Result<()> {
    let file = write_frequency_file();
    let mut config_file = NamedTempFile::new().unwrap();
    write!(config_file, r#"{{"num_suggestions": 2, "penalty": 0.5}}"#).unwrap();

    let config = CompletionConfig::load_from_file(config_file.path())?;
    let engine = CompletionEngine::with_config(Corpus::load(file.path())?, config)?;

    let suggestions = engine.suggest("bat")?;
    assert_eq!(suggestions.len(), 2);
    assert_eq!(suggestions[0].word, "bath");
    assert_eq!(suggestions[1].word, "banana");
    // 2 * 0.5^0 vs 10 * 0.5^1
    assert!((suggestions[0].probability - 2.0 / 7.0).abs() < 1e-9);
    assert!((suggestions[1].probability - 5.0 / 7.0).abs() < 1e-9);

    Ok(())
}

#[test]
fn test_suggest_is_case_insensitive() -> Result<()> {
    let file = write_frequency_file();
    let engine = CompletionEngine::new(Corpus::load(file.path())?);

    assert_eq!(engine.suggest("BAN")?, engine.suggest("ban")?);

    Ok(())
}

#[test]
fn test_no_matches_is_not_an_error() -> Result<()> {
    let corpus: Corpus = [("ox", 4)].into_iter().collect();
    let engine = CompletionEngine::new(corpus);

    assert!(engine.suggest("cat")?.is_empty());

    Ok(())
}
