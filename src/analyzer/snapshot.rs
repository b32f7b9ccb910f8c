use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::AnalyzeResult;

use super::stats::CorpusStats;

/// Serializable snapshot of a finished run's accumulated statistics,
/// tagged with the n-gram order that produced it.
///
/// Holds no reference back into the analyzer, so it can be written out and
/// inspected offline without the corpus.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatsSnapshot {
    pub order: usize,
    pub stats: CorpusStats,
}

impl StatsSnapshot {
    pub fn new(order: usize, stats: CorpusStats) -> Self {
        Self { order, stats }
    }

    /// Write the snapshot as CBOR.
    pub fn write_cbor<P: AsRef<Path>>(&self, path: P) -> AnalyzeResult<()> {
        let file = File::create(path)?;
        serde_cbor::to_writer(BufWriter::new(file), self)?;
        Ok(())
    }

    /// Read a snapshot back from CBOR.
    pub fn read_cbor<P: AsRef<Path>>(path: P) -> AnalyzeResult<Self> {
        let file = File::open(path)?;
        let snapshot = serde_cbor::from_reader(BufReader::new(file))?;
        Ok(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexSet;

    #[test]
    fn cbor_round_trip_preserves_tables() {
        let mut stats = CorpusStats::new();
        let mut doc_terms = IndexSet::new();
        stats.record("good_food", &mut doc_terms);
        stats.record("good_food", &mut doc_terms);
        stats.record("NUM", &mut doc_terms);
        stats.commit_document(&doc_terms);

        let snapshot = StatsSnapshot::new(2, stats);
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("run.cbor");
        snapshot.write_cbor(&path).unwrap();

        let loaded = StatsSnapshot::read_cbor(&path).unwrap();
        assert_eq!(loaded, snapshot);
        assert_eq!(loaded.stats.ttf().term_count("good_food"), 2);
        assert_eq!(loaded.stats.df().term_count("good_food"), 1);
    }
}
