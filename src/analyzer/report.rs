use std::fmt::Write as _;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::term::FrequencyTable;
use super::vocab::{TermRecord, VocabEntry};

/// Write the Zipf's-law dump: one `"<ngram> <count>"` line per record,
/// UTF-8, in table order (sort beforehand if an ordering is wanted).
pub fn write_zipf<P: AsRef<Path>>(table: &FrequencyTable, path: P) -> std::io::Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    for (term, count) in table.iter() {
        writeln!(writer, "{} {}", term, count)?;
    }
    writer.flush()
}

/// Format the top `k` ranked records the way the diagnostic listings print
/// them: `term(count), term(count), ...`.
pub fn format_top(records: &[TermRecord], k: usize) -> String {
    let mut out = String::new();
    for record in records.iter().take(k) {
        if !out.is_empty() {
            out.push_str(", ");
        }
        let _ = write!(out, "{}({})", record.term, record.count);
    }
    out
}

/// Format controlled-vocabulary entries, one `term (DF=…, IDF=…)` per line.
pub fn format_vocab_entries(entries: &[VocabEntry]) -> String {
    let mut out = String::new();
    for entry in entries {
        let _ = writeln!(out, "{} (DF={}, IDF={:.2})", entry.term, entry.df, entry.idf);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zipf_lines_have_term_space_count() {
        let mut table = FrequencyTable::new();
        table.add_terms(&["pizza", "pizza", "NUM"]);
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("zipf-ttf.txt");
        write_zipf(&table, &path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines, vec!["pizza 2", "NUM 1"]);
    }

    #[test]
    fn top_listing_truncates_at_k() {
        let records = vec![
            TermRecord { term: "a".into(), count: 3 },
            TermRecord { term: "b".into(), count: 2 },
            TermRecord { term: "c".into(), count: 1 },
        ];
        assert_eq!(format_top(&records, 2), "a(3), b(2)");
        assert_eq!(format_top(&records, 10), "a(3), b(2), c(1)");
        assert_eq!(format_top(&[], 5), "");
    }

    #[test]
    fn vocab_listing_formats_idf_to_two_places() {
        let entries = vec![VocabEntry { term: "gem".into(), df: 1, idf: 2.0 }];
        assert_eq!(format_vocab_entries(&entries), "gem (DF=1, IDF=2.00)\n");
    }
}
