//! End-to-end tests for the word frequency pipeline
//!
//! Tests cover:
//! - Counting and lemmatizing a small corpus
//! - Report ordering and count conservation
//! - Skip list and traversal depth
//! - Fail-fast behaviour on I/O errors

use std::fs;
use std::path::Path;

use wordfreq_corpus::{
    CorpusError, Pipeline, PipelineConfig, ReportFormat, ReportRow, SkipList,
};

fn write(path: &Path, contents: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, contents).unwrap();
}

/// Config pointing at scratch stop word and output files inside `dir`.
fn scratch_config(dir: &Path, stop_words: &str) -> PipelineConfig {
    let stopwords = dir.join("stopwords.txt");
    fs::write(&stopwords, stop_words).unwrap();
    PipelineConfig {
        stopwords,
        output: dir.join("a-results.txt"),
        ..PipelineConfig::default()
    }
}

/// Parse a fixed-width report back into (lemma, tag, count).
fn parse_report(text: &str) -> Vec<(String, String, usize)> {
    text.lines()
        .map(|line| {
            let fields: Vec<&str> = line.split_whitespace().collect();
            assert_eq!(fields.len(), 3, "unexpected report line: {:?}", line);
            (
                fields[0].to_string(),
                fields[1].to_string(),
                fields[2].parse().unwrap(),
            )
        })
        .collect()
}

// ============================================================================
// Counting
// ============================================================================

#[test]
fn test_two_file_corpus_counts_lemmas() {
    let work = tempfile::tempdir().unwrap();
    let corpus = tempfile::tempdir().unwrap();
    write(&corpus.path().join("one.txt"), "cats are running");
    write(&corpus.path().join("two.txt"), "a cat ran");

    let pipeline = Pipeline::new(scratch_config(work.path(), "")).unwrap();
    let summary = pipeline.run(corpus.path()).unwrap();
    assert_eq!(summary.files, 2);
    assert_eq!(summary.tokens, 6);

    let report = fs::read_to_string(work.path().join("a-results.txt")).unwrap();
    let rows = parse_report(&report);
    let count_of = |lemma: &str| {
        rows.iter()
            .find(|(l, _, _)| l == lemma)
            .map(|(_, _, c)| *c)
            .unwrap_or(0)
    };
    assert_eq!(count_of("cat"), 2);
    assert_eq!(count_of("run"), 2);
    assert_eq!(count_of("be"), 1);
    assert_eq!(count_of("a"), 1);
}

#[test]
fn test_report_counts_sum_to_surviving_tokens() {
    let work = tempfile::tempdir().unwrap();
    let corpus = tempfile::tempdir().unwrap();
    write(
        &corpus.path().join("notes.md"),
        "It's a test; don't panic!\nThe tests were passing yesterday.\n",
    );
    write(
        &corpus.path().join("guide/usage.txt"),
        "Run the tool. Running it twice overwrites the report.\n",
    );

    let pipeline = Pipeline::new(scratch_config(work.path(), "the\na\nit\n")).unwrap();
    let summary = pipeline.run(corpus.path()).unwrap();

    // it is a test do not panic / the tests were passing yesterday /
    // run the tool running it twice overwrites the report
    // minus "the" x3, "a" x1, "it" x2
    assert_eq!(summary.tokens, 21 - 6);

    let report = fs::read_to_string(work.path().join("a-results.txt")).unwrap();
    let rows = parse_report(&report);
    let total: usize = rows.iter().map(|(_, _, c)| c).sum();
    assert_eq!(total, summary.tokens);
    assert_eq!(rows.len(), summary.lemmas);
}

#[test]
fn test_report_is_sorted_by_descending_count() {
    let work = tempfile::tempdir().unwrap();
    let corpus = tempfile::tempdir().unwrap();
    write(
        &corpus.path().join("doc.txt"),
        "dog dog dog cat cat bird\nfish fish fish fish\n",
    );

    let pipeline = Pipeline::new(scratch_config(work.path(), "")).unwrap();
    pipeline.run(corpus.path()).unwrap();

    let report = fs::read_to_string(work.path().join("a-results.txt")).unwrap();
    let rows = parse_report(&report);
    for pair in rows.windows(2) {
        assert!(pair[0].2 >= pair[1].2, "rows out of order: {:?}", pair);
    }
    assert_eq!(rows[0].0, "fish");
}

#[test]
fn test_json_report() {
    let work = tempfile::tempdir().unwrap();
    let corpus = tempfile::tempdir().unwrap();
    write(&corpus.path().join("doc.txt"), "cats cats dogs");

    let config = PipelineConfig {
        format: ReportFormat::Json,
        ..scratch_config(work.path(), "")
    };
    Pipeline::new(config).unwrap().run(corpus.path()).unwrap();

    let report = fs::read_to_string(work.path().join("a-results.txt")).unwrap();
    let rows: Vec<ReportRow> = serde_json::from_str(&report).unwrap();
    assert_eq!(rows[0].lemma, "cat");
    assert_eq!(rows[0].count, 2);
    assert_eq!(rows[1].lemma, "dog");
}

#[test]
fn test_lexicon_changes_lemma_choice() {
    let work = tempfile::tempdir().unwrap();
    let corpus = tempfile::tempdir().unwrap();
    write(&corpus.path().join("doc.txt"), "axes");
    let lexicon = work.path().join("lexicon.txt");
    fs::write(&lexicon, "axe\n").unwrap();

    let config = PipelineConfig {
        lexicon: Some(lexicon),
        ..scratch_config(work.path(), "")
    };
    let pipeline = Pipeline::new(config).unwrap();
    let (table, _) = pipeline.count_corpus(corpus.path()).unwrap();
    assert_eq!(table.get("axe"), 1);
}

// ============================================================================
// Traversal
// ============================================================================

#[test]
fn test_skipped_names_are_never_read() {
    let work = tempfile::tempdir().unwrap();
    let corpus = tempfile::tempdir().unwrap();
    write(&corpus.path().join("LICENSE"), "licensed");
    write(&corpus.path().join(".git/config"), "gitted");
    write(&corpus.path().join("scripts/build.sh"), "scripted");
    write(&corpus.path().join("docs/page.md"), "paged");

    let pipeline = Pipeline::new(scratch_config(work.path(), "")).unwrap();
    let (table, files) = pipeline.count_corpus(corpus.path()).unwrap();
    assert_eq!(files, 1);
    assert_eq!(table.total(), 1);
}

#[test]
fn test_grandchildren_not_read_at_default_depth() {
    let work = tempfile::tempdir().unwrap();
    let corpus = tempfile::tempdir().unwrap();
    write(&corpus.path().join("docs/page.md"), "page");
    write(&corpus.path().join("docs/nested/deep.md"), "deep");

    let pipeline = Pipeline::new(scratch_config(work.path(), "")).unwrap();
    let files = pipeline.files(corpus.path()).unwrap();
    assert_eq!(files, vec![corpus.path().join("docs/page.md")]);

    let config = PipelineConfig {
        max_depth: 2,
        skip: SkipList::empty(),
        ..scratch_config(work.path(), "")
    };
    let files = Pipeline::new(config).unwrap().files(corpus.path()).unwrap();
    assert_eq!(files.len(), 2);
}

// ============================================================================
// Failures
// ============================================================================

#[test]
fn test_missing_corpus_root_fails() {
    let work = tempfile::tempdir().unwrap();
    let pipeline = Pipeline::new(scratch_config(work.path(), "")).unwrap();
    let err = pipeline.run(work.path().join("does-not-exist")).unwrap_err();
    assert!(matches!(err, CorpusError::NotADirectory(_)));
    assert!(!work.path().join("a-results.txt").exists());
}

#[test]
fn test_unreadable_document_aborts_run() {
    let work = tempfile::tempdir().unwrap();
    let corpus = tempfile::tempdir().unwrap();
    write(&corpus.path().join("good.txt"), "fine words");
    fs::write(corpus.path().join("bad.bin"), [0xff, 0xfe, 0xfd]).unwrap();

    let pipeline = Pipeline::new(scratch_config(work.path(), "")).unwrap();
    assert!(pipeline.run(corpus.path()).is_err());
    assert!(!work.path().join("a-results.txt").exists());
}
