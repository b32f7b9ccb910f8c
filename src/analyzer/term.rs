use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// FrequencyTable struct
/// Maps each canonical n-gram string to its accumulated count and keeps a
/// running total. At most one record exists per distinct string; records are
/// only ever created or incremented during a run, never deleted.
///
/// Entries keep first-insertion order, which is what makes ranking ties
/// reproducible across runs.
///
/// # Examples
/// ```
/// use ngram_analyzer::analyzer::term::FrequencyTable;
/// let mut table = FrequencyTable::new();
/// table.add_term("coffee");
/// table.add_term("shop");
/// table.add_term("coffee");
///
/// assert_eq!(table.term_count("coffee"), 2);
/// assert_eq!(table.term_sum(), 3);
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    #[serde(with = "indexmap::map::serde_seq")]
    term_count: IndexMap<String, u64>,
    total_term_count: u64,
}

/// Implementation for adding terms
impl FrequencyTable {
    /// Create a new FrequencyTable
    pub fn new() -> Self {
        FrequencyTable {
            term_count: IndexMap::new(),
            total_term_count: 0,
        }
    }

    /// Count one occurrence of a term, creating its record on first sight.
    ///
    /// Empty terms are ignored: a filtered token never reaches the tables.
    #[inline]
    pub fn add_term(&mut self, term: &str) -> &mut Self {
        if term.is_empty() {
            return self;
        }
        let count = self.term_count.entry(term.to_string()).or_insert(0);
        *count += 1;
        self.total_term_count += 1;
        self
    }

    /// Count one occurrence of each term in a slice.
    ///
    /// # Arguments
    /// * `terms` - Slice of terms to add
    #[inline]
    pub fn add_terms<T>(&mut self, terms: &[T]) -> &mut Self
    where
        T: AsRef<str>,
    {
        for term in terms {
            self.add_term(term.as_ref());
        }
        self
    }

    /// Set the occurrence count for a term
    ///
    /// # Arguments
    /// * `term` - term
    /// * `count` - Occurrence count (0 removes the record)
    pub fn set_term_count(&mut self, term: &str, count: u64) -> &mut Self {
        if term.is_empty() {
            return self;
        }
        if count == 0 {
            if let Some(old) = self.term_count.shift_remove(term) {
                self.total_term_count -= old;
            }
        } else {
            let current = self.term_count.entry(term.to_string()).or_insert(0);
            self.total_term_count = self.total_term_count + count - *current;
            *current = count;
        }
        self
    }

    /// Merge another table into this one, adding counts term by term.
    ///
    /// # Arguments
    /// * `other` - table to merge from
    pub fn merge_from(&mut self, other: &FrequencyTable) -> &mut Self {
        for (term, &count) in &other.term_count {
            let entry = self.term_count.entry(term.clone()).or_insert(0);
            *entry += count;
            self.total_term_count += count;
        }
        self
    }
}

/// Implementation for retrieving information from FrequencyTable
impl FrequencyTable {
    /// Iterate over all records in first-insertion order.
    ///
    /// # Returns
    /// * `impl Iterator<Item=(&str, u64)>` - Iterator over terms and their counts
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.term_count.iter().map(|(term, &count)| (term.as_str(), count))
    }

    /// Get the occurrence count for a specific term (0 when absent).
    #[inline]
    pub fn term_count(&self, term: &str) -> u64 {
        *self.term_count.get(term).unwrap_or(&0)
    }

    /// Get the total count of all terms
    #[inline]
    pub fn term_sum(&self) -> u64 {
        self.total_term_count
    }

    /// Check if a term exists
    #[inline]
    pub fn contains_term(&self, term: &str) -> bool {
        self.term_count.contains_key(term)
    }

    /// Get the number of unique terms
    #[inline]
    pub fn term_num(&self) -> usize {
        self.term_count.len()
    }

    pub fn is_empty(&self) -> bool {
        self.term_count.is_empty()
    }

    /// Get a vector of terms sorted by frequency (descending); ties keep
    /// first-insertion order.
    ///
    /// # Returns
    /// * `Vec<(String, u64)>` - Vector of terms sorted by frequency
    #[inline]
    pub fn sorted_frequency_vector(&self) -> Vec<(String, u64)> {
        let mut term_list: Vec<(String, u64)> = self
            .term_count
            .iter()
            .map(|(term, &count)| (term.clone(), count))
            .collect();

        term_list.sort_by(|a, b| b.1.cmp(&a.1));
        term_list
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_accumulate_per_term() {
        let mut table = FrequencyTable::new();
        assert!(table.is_empty());
        table.add_terms(&["a1", "b2", "a1", "a1"]);
        assert_eq!(table.term_count("a1"), 3);
        assert_eq!(table.term_count("b2"), 1);
        assert_eq!(table.term_count("missing"), 0);
        assert_eq!(table.term_sum(), 4);
        assert_eq!(table.term_num(), 2);
    }

    #[test]
    fn empty_terms_never_enter_the_table() {
        let mut table = FrequencyTable::new();
        table.add_term("");
        table.add_terms(&["", "x", ""]);
        table.set_term_count("", 5);
        assert_eq!(table.term_num(), 1);
        assert_eq!(table.term_sum(), 1);
        assert!(!table.contains_term(""));
    }

    #[test]
    fn set_term_count_keeps_the_total_consistent() {
        let mut table = FrequencyTable::new();
        table.add_terms(&["a", "a", "b"]);
        table.set_term_count("a", 10);
        assert_eq!(table.term_sum(), 11);
        table.set_term_count("a", 0);
        assert_eq!(table.term_sum(), 1);
        assert!(!table.contains_term("a"));
    }

    #[test]
    fn merge_from_adds_counts() {
        let mut left = FrequencyTable::new();
        left.add_terms(&["a", "b"]);
        let mut right = FrequencyTable::new();
        right.add_terms(&["b", "c", "c"]);
        left.merge_from(&right);
        assert_eq!(left.term_count("a"), 1);
        assert_eq!(left.term_count("b"), 2);
        assert_eq!(left.term_count("c"), 2);
        assert_eq!(left.term_sum(), 5);
    }

    #[test]
    fn sorted_vector_is_descending_with_first_seen_ties() {
        let mut table = FrequencyTable::new();
        table.add_terms(&["low", "tie1", "tie2", "high", "high", "high", "tie1", "tie2"]);
        let sorted = table.sorted_frequency_vector();
        assert_eq!(sorted[0], ("high".to_string(), 3));
        // tie1 was inserted before tie2; stable sort keeps that order
        assert_eq!(sorted[1], ("tie1".to_string(), 2));
        assert_eq!(sorted[2], ("tie2".to_string(), 2));
        assert_eq!(sorted[3], ("low".to_string(), 1));
    }
}
