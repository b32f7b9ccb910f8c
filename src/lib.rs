/// This crate is a corpus lexical statistics engine built around a
/// deterministic n-gram pipeline.
pub mod analyzer;
pub mod corpus;
pub mod error;
pub mod text;

/// Document Analyzer
/// The top-level struct of this crate, providing one ingestion session for
/// one n-gram order. It drives raw review text through tokenization,
/// normalization, stemming, stopword filtering and n-gram construction, and
/// accumulates total term frequency (TTF) and document frequency (DF)
/// tables across the whole corpus.
///
/// Internally, it holds:
/// - The n-gram builder (sliding history window, reset per document)
/// - The token pipeline (normalize → stem)
/// - The stopword set (canonicalized through the same pipeline)
/// - The ingested review collection
/// - The accumulated corpus statistics
///
/// `DocAnalyzer<T>` has one generic parameter:
/// - `T`: word tokenizer type (default `UnicodeWordTokenizer`)
///
/// All mutable state is owned by the instance, so independent sessions
/// (e.g. a unigram and a bigram run over the same corpus) coexist without
/// cross-contamination.
pub use analyzer::DocAnalyzer;

/// Per-run loader counters
/// Returned by `DocAnalyzer::load_directory`. The loader is a closed fault
/// domain: unreadable directories, unparsable files and malformed reviews
/// are logged and counted here instead of propagating as errors.
pub use analyzer::LoadSummary;

/// Corpus Statistics
/// The three frequency tables (generic stats, TTF, DF) plus the ingested
/// document count. Mutated only during ingestion; read by the vocabulary
/// builder afterwards. Guarantees `DF(g) <= doc_count` and
/// `TTF(g) >= DF(g)` for every recorded n-gram.
pub use analyzer::stats::CorpusStats;

/// Frequency Table
/// An insertion-ordered mapping from canonical n-gram string to its
/// accumulated count. First-seen order is preserved and is the documented
/// tie-break for ranking. Empty strings never enter a table.
pub use analyzer::term::FrequencyTable;

/// Vocabulary records
/// `TermRecord` is one ranked (term, count) statistic; `VocabEntry` is one
/// controlled-vocabulary entry annotated with DF and IDF. Produced by the
/// `analyzer::vocab` functions: `rank`, `merge_vocabularies`,
/// `controlled_vocabulary`, `annotate_idf`.
pub use analyzer::vocab::{TermRecord, VocabEntry};

/// Weight Engine Trait
/// Defines the weighting scheme used for vocabulary annotation. The default
/// implementation, `DefaultWeightEngine`, computes textbook base-10 IDF
/// (`1 + log10(total_docs / df)`, guarded against `df == 0`) for f64 and
/// f32 output types.
pub use analyzer::weights::{DefaultWeightEngine, WeightEngine};

/// Statistics Snapshot
/// A serializable, order-tagged copy of a finished run's `CorpusStats`,
/// written and read as CBOR. Holds no reference back into the analyzer.
pub use analyzer::snapshot::StatsSnapshot;

/// Review structures
/// `Review` is one customer review (identifier, raw content, surface tokens
/// once ingested); `ReviewBatch` is the wire format of one corpus file
/// (`{"Reviews": [...]}`).
pub use corpus::{Review, ReviewBatch};

/// Token Pipeline
/// The normalize→stem composition applied to corpus tokens and stopword
/// lines alike. Using any other path for stopwords silently breaks
/// stopword matching.
pub use text::TokenPipeline;

/// Stopword Set
/// Canonical stopword strings, loaded once before ingestion and used as a
/// filter. A stopword still occupies an n-gram history slot, poisoning any
/// window that spans it.
pub use text::stopwords::StopwordSet;

/// Tokenizer boundary
/// `WordTokenizer` is the black-box seam for word segmentation;
/// `UnicodeWordTokenizer` is the default UAX #29 implementation.
pub use text::tokenizer::{UnicodeWordTokenizer, WordTokenizer};

/// Error type and result alias for the whole crate.
pub use error::{AnalyzeError, AnalyzeResult};
