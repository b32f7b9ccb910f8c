use std::collections::VecDeque;

use crate::error::{AnalyzeError, AnalyzeResult};

/// Separator joining the stems of an n-gram into a single token string.
pub const NGRAM_SEPARATOR: char = '_';

/// Per-document n-gram state machine for a fixed order N (N >= 1).
///
/// Keeps a sliding history window of the last N-1 stems, seeded with
/// empty-string sentinels at document start. A stopword (passed in as an
/// empty stem) still advances the window with an empty slot, so it poisons
/// every n-gram that would span it. An n-gram is emitted only when the
/// incoming stem and every window entry are non-empty.
///
/// For order 1 the window is empty and every non-empty stem is emitted as
/// its own unigram.
#[derive(Debug, Clone)]
pub struct NgramBuilder {
    order: usize,
    history: VecDeque<String>,
}

impl NgramBuilder {
    /// Create a builder for the given order.
    pub fn new(order: usize) -> AnalyzeResult<Self> {
        if order == 0 {
            return Err(AnalyzeError::InvalidOrder(order));
        }
        let mut builder = NgramBuilder {
            order,
            history: VecDeque::with_capacity(order - 1),
        };
        builder.reset();
        Ok(builder)
    }

    pub fn order(&self) -> usize {
        self.order
    }

    /// Refill the window with empty sentinels. Call at every document start;
    /// no n-gram may span a document boundary.
    pub fn reset(&mut self) {
        self.history.clear();
        for _ in 0..self.order - 1 {
            self.history.push_back(String::new());
        }
    }

    /// Advance the window by one stem and return the n-gram emitted at this
    /// position, if any.
    ///
    /// Pass an empty `stem` for a filtered token (stopword); it emits nothing
    /// but still occupies a history slot.
    pub fn push(&mut self, stem: &str) -> Option<String> {
        let gram = if stem.is_empty() || self.history.iter().any(|slot| slot.is_empty()) {
            None
        } else {
            let mut gram =
                String::with_capacity(stem.len() + self.history.iter().map(|s| s.len() + 1).sum::<usize>());
            for slot in &self.history {
                gram.push_str(slot);
                gram.push(NGRAM_SEPARATOR);
            }
            gram.push_str(stem);
            Some(gram)
        };
        if self.order > 1 {
            self.history.push_back(stem.to_string());
            self.history.pop_front();
        }
        gram
    }
}
