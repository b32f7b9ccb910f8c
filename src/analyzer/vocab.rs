use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::term::FrequencyTable;
use super::weights::{DefaultWeightEngine, WeightEngine};

/// One ranked statistic record: a canonical n-gram string and its
/// accumulated count (TTF or DF depending on the source table).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermRecord {
    pub term: String,
    pub count: u64,
}

/// One controlled-vocabulary entry with its derived IDF weight.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VocabEntry {
    pub term: String,
    pub df: u64,
    pub idf: f64,
}

/// Rank a table's records by count, descending.
///
/// The sort is stable and the table iterates in first-insertion order, so
/// ties come out in first-seen order — reproducible run to run.
pub fn rank(table: &FrequencyTable) -> Vec<TermRecord> {
    let mut records: Vec<TermRecord> = table
        .iter()
        .map(|(term, count)| TermRecord {
            term: term.to_string(),
            count,
        })
        .collect();
    records.par_sort_by(|a, b| b.count.cmp(&a.count));
    records
}

/// Merge several tables into one ranked vocabulary.
///
/// Each table is filtered to records with `count >= min_count`, the
/// survivors are concatenated in table order, and the result is re-sorted
/// descending (stable, so ties keep table order then first-seen order).
pub fn merge_vocabularies(tables: &[&FrequencyTable], min_count: u64) -> Vec<TermRecord> {
    let mut merged = Vec::new();
    for table in tables {
        merged.extend(table.iter().filter(|&(_, count)| count >= min_count).map(
            |(term, count)| TermRecord {
                term: term.to_string(),
                count,
            },
        ));
    }
    merged.par_sort_by(|a, b| b.count.cmp(&a.count));
    merged
}

/// Drop the `top_k_excluded` highest-frequency entries of a merged
/// vocabulary — the corpus-specific stopword candidates — and return the
/// remainder. Fewer entries than the cutoff leaves nothing.
pub fn controlled_vocabulary(merged: Vec<TermRecord>, top_k_excluded: usize) -> Vec<TermRecord> {
    if merged.len() <= top_k_excluded {
        return Vec::new();
    }
    merged.into_iter().skip(top_k_excluded).collect()
}

/// Annotate DF records with IDF weights against a corpus of `total_docs`
/// documents. Records with a zero count (impossible for entries that came
/// out of a DF table) are dropped by the guard rather than poisoning the
/// listing.
pub fn annotate_idf(records: &[TermRecord], total_docs: u64) -> Vec<VocabEntry> {
    records
        .iter()
        .filter_map(|record| {
            DefaultWeightEngine::idf(record.count, total_docs).map(|idf| VocabEntry {
                term: record.term.clone(),
                df: record.count,
                idf,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(pairs: &[(&str, u64)]) -> FrequencyTable {
        let mut t = FrequencyTable::new();
        for &(term, count) in pairs {
            t.set_term_count(term, count);
        }
        t
    }

    #[test]
    fn rank_is_descending_and_tie_stable() {
        let t = table(&[("first", 2), ("second", 5), ("third", 2)]);
        let ranked = rank(&t);
        assert_eq!(ranked[0].term, "second");
        assert_eq!(ranked[1].term, "first");
        assert_eq!(ranked[2].term, "third");
    }

    #[test]
    fn merge_of_disjoint_tables_keeps_every_record() {
        let a = table(&[("a1", 3), ("a2", 1)]);
        let b = table(&[("b1", 2), ("b2", 4), ("b3", 1)]);
        let merged = merge_vocabularies(&[&a, &b], 0);
        assert_eq!(merged.len(), a.term_num() + b.term_num());
        for window in merged.windows(2) {
            assert!(window[0].count >= window[1].count);
        }
    }

    #[test]
    fn merge_threshold_filters_per_table() {
        let a = table(&[("keep", 50), ("drop", 49)]);
        let b = table(&[("also_keep", 51)]);
        let merged = merge_vocabularies(&[&a, &b], 50);
        let terms: Vec<&str> = merged.iter().map(|r| r.term.as_str()).collect();
        assert_eq!(terms, vec!["also_keep", "keep"]);
    }

    #[test]
    fn controlled_vocabulary_drops_the_head() {
        let t = table(&[("one", 10), ("two", 8), ("three", 5), ("four", 1)]);
        let ctrl = controlled_vocabulary(rank(&t), 2);
        let terms: Vec<&str> = ctrl.iter().map(|r| r.term.as_str()).collect();
        assert_eq!(terms, vec!["three", "four"]);
    }

    #[test]
    fn controlled_vocabulary_of_a_short_merge_is_empty() {
        let t = table(&[("only", 1)]);
        assert!(controlled_vocabulary(rank(&t), 100).is_empty());
    }

    #[test]
    fn idf_annotation_matches_the_engine() {
        let records = vec![
            TermRecord { term: "rare".into(), count: 1 },
            TermRecord { term: "common".into(), count: 10 },
        ];
        let entries = annotate_idf(&records, 10);
        assert_eq!(entries.len(), 2);
        assert!((entries[0].idf - 2.0).abs() < 1e-12);
        assert!((entries[1].idf - 1.0).abs() < 1e-12);
    }
}
