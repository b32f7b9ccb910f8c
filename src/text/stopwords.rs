use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use super::TokenPipeline;

/// A set of canonical (normalized + stemmed) stopword strings.
///
/// Loaded once before ingestion and immutable afterwards; used as a filter,
/// never as a transform. Membership is tested against canonical forms, so
/// every line of the stopword file goes through the identical
/// [`TokenPipeline`] the corpus tokens do.
#[derive(Debug, Clone, Default)]
pub struct StopwordSet {
    terms: HashSet<String>,
}

impl StopwordSet {
    /// Empty set: nothing gets filtered.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a newline-delimited UTF-8 stopword file, canonicalizing each line.
    /// Lines that canonicalize to the empty string are discarded.
    pub fn load<P: AsRef<Path>>(path: P, pipeline: &TokenPipeline) -> std::io::Result<Self> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let mut set = StopwordSet::new();
        for line in reader.lines() {
            set.insert_raw(line?.trim(), pipeline);
        }
        Ok(set)
    }

    /// Canonicalize one surface form and insert it (empty results discarded).
    pub fn insert_raw(&mut self, raw: &str, pipeline: &TokenPipeline) {
        let canonical = pipeline.canonical(raw);
        if !canonical.is_empty() {
            self.terms.insert(canonical);
        }
    }

    #[inline]
    pub fn contains(&self, canonical: &str) -> bool {
        self.terms.contains(canonical)
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}
