use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use super::term::FrequencyTable;

/// Accumulated corpus-level frequency statistics.
///
/// Owns the three tables and the ingested-document count, so independent
/// corpora (an order-1 and an order-2 run, say) can coexist without
/// cross-contamination. Mutated only during ingestion; read by the
/// vocabulary builder afterwards.
///
/// The DF protocol is two-phase: [`record`](CorpusStats::record) only marks
/// the n-gram in a per-document distinct set, and
/// [`commit_document`](CorpusStats::commit_document) turns that set into one
/// DF increment per n-gram. In-document repetition therefore never inflates
/// DF, and `DF(g) <= doc_count` and `TTF(g) >= DF(g)` hold for every g.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CorpusStats {
    stats: FrequencyTable,
    ttf: FrequencyTable,
    df: FrequencyTable,
    doc_count: u64,
}

impl CorpusStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one emitted n-gram occurrence.
    ///
    /// Bumps the generic stats table and the TTF table, and marks the n-gram
    /// in `doc_terms`, the calling document's distinct set. Empty n-grams are
    /// the builder's "emit nothing" signal and must not reach this point;
    /// the tables reject them anyway.
    pub fn record(&mut self, ngram: &str, doc_terms: &mut IndexSet<String>) {
        if ngram.is_empty() {
            return;
        }
        self.stats.add_term(ngram);
        self.ttf.add_term(ngram);
        doc_terms.insert(ngram.to_string());
    }

    /// Commit a finished document: exactly one DF increment per distinct
    /// n-gram, then bump the document count.
    ///
    /// The set iterates in first-occurrence order, so the DF table's
    /// insertion order (the rank tie-break) is reproducible.
    pub fn commit_document(&mut self, doc_terms: &IndexSet<String>) {
        for term in doc_terms {
            self.df.add_term(term);
        }
        self.doc_count += 1;
    }

    /// Generic statistics table (kept alongside TTF for compatibility;
    /// identical content in this design).
    pub fn stats(&self) -> &FrequencyTable {
        &self.stats
    }

    /// Total term frequency: occurrences across the whole corpus.
    pub fn ttf(&self) -> &FrequencyTable {
        &self.ttf
    }

    /// Document frequency: documents containing the n-gram at least once.
    pub fn df(&self) -> &FrequencyTable {
        &self.df
    }

    /// Number of successfully ingested documents.
    pub fn doc_count(&self) -> u64 {
        self.doc_count
    }

    /// Number of distinct n-grams seen.
    pub fn vocab_size(&self) -> usize {
        self.stats.term_num()
    }
}
