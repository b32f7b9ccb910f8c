pub mod report;
pub mod snapshot;
pub mod stats;
pub mod term;
pub mod vocab;
pub mod weights;

use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexSet;
use tracing::{info, warn};

use crate::corpus::{self, Review, ReviewBatch};
use crate::error::{AnalyzeError, AnalyzeResult};
use crate::text::ngram::NgramBuilder;
use crate::text::stopwords::StopwordSet;
use crate::text::tokenizer::{UnicodeWordTokenizer, WordTokenizer};
use crate::text::TokenPipeline;

use self::stats::CorpusStats;

/// Counters for one `load_directory` run. The loader is a closed fault
/// domain: failures land here instead of propagating.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadSummary {
    /// Files parsed and ingested.
    pub files: usize,
    /// Reviews ingested across those files.
    pub reviews: usize,
    /// Reviews skipped for missing content.
    pub skipped_reviews: usize,
    /// Files or directory entries that failed to read or parse.
    pub failures: usize,
}

/// Document analyzer: one ingestion session for one n-gram order.
///
/// Owns the token pipeline, the stopword set, the ingested review
/// collection, and the accumulated [`CorpusStats`]. Because every piece of
/// mutable state lives on the instance, independent sessions (an order-1 and
/// an order-2 run over the same tree) never contaminate each other.
///
/// `T` is the word tokenizer; the default segments on Unicode word
/// boundaries.
#[derive(Debug, Clone)]
pub struct DocAnalyzer<T = UnicodeWordTokenizer>
where
    T: WordTokenizer,
{
    ngram: NgramBuilder,
    tokenizer: T,
    pipeline: TokenPipeline,
    stopwords: StopwordSet,
    reviews: Vec<Review>,
    stats: CorpusStats,
}

impl DocAnalyzer<UnicodeWordTokenizer> {
    /// Create an analyzer for n-grams of the given order (>= 1) with the
    /// default tokenizer and English stemming.
    pub fn new(order: usize) -> AnalyzeResult<Self> {
        Self::with_tokenizer(order, UnicodeWordTokenizer)
    }
}

impl<T> DocAnalyzer<T>
where
    T: WordTokenizer,
{
    /// Create an analyzer around an explicit tokenizer implementation.
    pub fn with_tokenizer(order: usize, tokenizer: T) -> AnalyzeResult<Self> {
        Ok(Self {
            ngram: NgramBuilder::new(order)?,
            tokenizer,
            pipeline: TokenPipeline::english(),
            stopwords: StopwordSet::new(),
            reviews: Vec::new(),
            stats: CorpusStats::new(),
        })
    }

    pub fn order(&self) -> usize {
        self.ngram.order()
    }

    /// Load the stopword file, pushing every line through the same
    /// normalize→stem pipeline the corpus tokens get.
    ///
    /// A missing or unreadable file is not fatal: the analyzer keeps its
    /// current (possibly empty) set and logs the failure.
    pub fn load_stopwords<P: AsRef<Path>>(&mut self, path: P) {
        let path = path.as_ref();
        match StopwordSet::load(path, &self.pipeline) {
            Ok(set) => {
                info!("loaded {} stopwords from {}", set.len(), path.display());
                self.stopwords = set;
            }
            Err(err) => {
                warn!("failed to open stopword file {}: {err}", path.display());
            }
        }
    }

    /// Replace the stopword set directly (tests, programmatic callers).
    pub fn set_stopwords(&mut self, stopwords: StopwordSet) {
        self.stopwords = stopwords;
    }

    pub fn stopwords(&self) -> &StopwordSet {
        &self.stopwords
    }

    /// Ingest one review: tokenize, canonicalize, build n-grams, accumulate
    /// statistics, commit the per-document DF set, and append the review to
    /// the corpus collection.
    ///
    /// A review without content is reported as [`AnalyzeError::MissingContent`]
    /// and leaves the analyzer untouched.
    pub fn ingest(&mut self, mut review: Review) -> AnalyzeResult<()> {
        let tokens = match review.content() {
            Some(content) => self.tokenizer.tokenize(content),
            None => return Err(AnalyzeError::MissingContent(review.id().to_string())),
        };

        self.ngram.reset();
        let mut doc_terms: IndexSet<String> = IndexSet::new();
        for raw in &tokens {
            let mut stem = self.pipeline.canonical(raw);
            if self.stopwords.contains(&stem) {
                // stopword removal policy: the token still occupies a history
                // slot, poisoning any n-gram window that spans it
                stem.clear();
            }
            if let Some(gram) = self.ngram.push(&stem) {
                self.stats.record(&gram, &mut doc_terms);
            }
        }
        self.stats.commit_document(&doc_terms);

        review.set_tokens(tokens);
        self.reviews.push(review);
        Ok(())
    }

    /// Ingest every review of a parsed batch, skipping malformed ones.
    /// Returns `(ingested, skipped)`.
    pub fn analyze_batch(&mut self, batch: ReviewBatch) -> (usize, usize) {
        let mut ingested = 0;
        let mut skipped = 0;
        for review in batch.reviews {
            match self.ingest(review) {
                Ok(()) => ingested += 1,
                Err(err) => {
                    warn!("skipping review: {err}");
                    skipped += 1;
                }
            }
        }
        (ingested, skipped)
    }

    /// Walk the directory tree under `root` and ingest every regular file
    /// whose name ends with `suffix`.
    ///
    /// The walk uses an explicit worklist rather than recursion, visits
    /// every reachable entry exactly once, and guarantees no error escapes:
    /// unreadable directories, unparsable files and malformed reviews are
    /// logged, counted, and skipped.
    pub fn load_directory<P: AsRef<Path>>(&mut self, root: P, suffix: &str) -> LoadSummary {
        let mut summary = LoadSummary::default();
        let mut pending: Vec<PathBuf> = vec![root.as_ref().to_path_buf()];

        while let Some(dir) = pending.pop() {
            let entries = match fs::read_dir(&dir) {
                Ok(entries) => entries,
                Err(err) => {
                    warn!("failed to read directory {}: {err}", dir.display());
                    summary.failures += 1;
                    continue;
                }
            };
            for entry in entries {
                let path = match entry {
                    Ok(entry) => entry.path(),
                    Err(err) => {
                        warn!("failed to read entry under {}: {err}", dir.display());
                        summary.failures += 1;
                        continue;
                    }
                };
                if path.is_dir() {
                    pending.push(path);
                } else if file_name_ends_with(&path, suffix) {
                    match corpus::read_batch(&path) {
                        Ok(batch) => {
                            let (ingested, skipped) = self.analyze_batch(batch);
                            summary.files += 1;
                            summary.reviews += ingested;
                            summary.skipped_reviews += skipped;
                        }
                        Err(err) => {
                            warn!("failed to parse {}: {err}", path.display());
                            summary.failures += 1;
                        }
                    }
                }
            }
        }

        info!(
            "loaded {} reviews from {} files under {} ({} distinct {}-grams)",
            summary.reviews,
            summary.files,
            root.as_ref().display(),
            self.stats.vocab_size(),
            self.order(),
        );
        summary
    }

    /// Accumulated corpus statistics.
    pub fn stats(&self) -> &CorpusStats {
        &self.stats
    }

    /// Consume the analyzer, keeping only its statistics (snapshot export).
    pub fn into_stats(self) -> CorpusStats {
        self.stats
    }

    /// Ingested reviews, in ingestion order.
    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    /// Number of successfully ingested documents.
    pub fn doc_count(&self) -> u64 {
        self.stats.doc_count()
    }

    /// Diagnostic view of the pipeline: for one text, the surface token,
    /// its normalized form, its stem after stopword filtering, and the
    /// n-gram emitted at that position.
    pub fn trace_pipeline(&mut self, text: &str) -> Vec<PipelineTrace> {
        self.ngram.reset();
        self.tokenizer
            .tokenize(text)
            .into_iter()
            .map(|surface| {
                let normalized = self.pipeline.normalized(&surface);
                let mut stem = self.pipeline.canonical(&surface);
                if self.stopwords.contains(&stem) {
                    stem.clear();
                }
                let ngram = self.ngram.push(&stem);
                PipelineTrace {
                    surface,
                    normalized,
                    stem,
                    ngram,
                }
            })
            .collect()
    }
}

/// One row of [`DocAnalyzer::trace_pipeline`] output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineTrace {
    pub surface: String,
    pub normalized: String,
    /// Canonical stem; empty when filtered (stopword or no lexical content).
    pub stem: String,
    /// N-gram emitted at this position, if any.
    pub ngram: Option<String>,
}

fn file_name_ends_with(path: &Path, suffix: &str) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.ends_with(suffix))
}
