use crate::dictionary::{DictionaryEntry, HashDictionary};
use crate::paths::IndexPaths;
use crate::posting::{write_posting_file, TokenPostings};
use anyhow::Result;
use std::fs::OpenOptions;
use std::io::Write;
use std::time::{Duration, Instant};

/// Label recorded in the run log for every build.
const RUN_LABEL: &str = "Generación de hash table y archivo de posting";

/// Outcome of one build pass.
#[derive(Debug)]
pub struct BuildReport {
    pub collisions: u32,
    /// Wall-clock time spent writing the dictionary and posting files.
    pub elapsed: Duration,
}

/// Computes dictionary entries for a token->postings mapping and writes the
/// dictionary, posting, and run-log files under `paths`.
pub struct IndexBuilder<'a> {
    paths: &'a IndexPaths,
}

/// Single pass in ascending token order: each token's entry records its
/// posting-list length and the running total of prior tokens' lengths. The
/// offsets are valid for a posting file written from the same mapping,
/// whether or not a hash collision later discards the entry itself.
pub fn build_dictionary(postings: &TokenPostings) -> HashDictionary {
    let mut dictionary = HashDictionary::new();
    let mut posting_position = 0u32;
    for (token, list) in postings {
        let entry = DictionaryEntry {
            doc_count: list.len() as u32,
            posting_start_pos: posting_position,
        };
        dictionary.insert(token.clone(), entry);
        posting_position += entry.doc_count;
    }
    dictionary
}

impl<'a> IndexBuilder<'a> {
    pub fn new(paths: &'a IndexPaths) -> Self {
        Self { paths }
    }

    /// Build the dictionary, then write the dictionary file followed by the
    /// posting file. A write failure is reported and that file skipped; the
    /// build itself never fails. Elapsed time covers the two file writes
    /// only and is appended to the run log.
    pub fn build(&self, postings: &TokenPostings) -> BuildReport {
        let dictionary = build_dictionary(postings);

        let start = Instant::now();
        if let Err(err) = dictionary.write_to_file(&self.paths.dictionary()) {
            tracing::error!(%err, "failed to write dictionary file");
        }
        if let Err(err) = write_posting_file(postings, &self.paths.postings()) {
            tracing::error!(%err, "failed to write posting file");
        }
        let elapsed = start.elapsed();

        if let Err(err) = self.append_run_log(RUN_LABEL, elapsed) {
            tracing::error!(%err, "failed to write run log");
        }

        tracing::debug!(
            tokens = postings.len(),
            collisions = dictionary.collision_count(),
            "index build finished"
        );
        BuildReport { collisions: dictionary.collision_count(), elapsed }
    }

    fn append_run_log(&self, label: &str, elapsed: Duration) -> Result<()> {
        let mut log = OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.paths.run_log())?;
        writeln!(log, "Archivo: {label}\tTiempo: {:.5} segundos", elapsed.as_secs_f64())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::posting::Posting;

    fn fixed_corpus() -> TokenPostings {
        TokenPostings::from([
            (
                "perro".to_string(),
                vec![
                    Posting::new("108.html", 2),
                    Posting::new("005.html", 2),
                    Posting::new("444.html", 4),
                    Posting::new("321.html", 8),
                ],
            ),
            (
                "gato".to_string(),
                vec![Posting::new("049.html", 1), Posting::new("102.html", 1)],
            ),
            (
                "pato".to_string(),
                vec![
                    Posting::new("108.html", 3),
                    Posting::new("444.html", 2),
                    Posting::new("321.html", 6),
                ],
            ),
        ])
    }

    fn entry_for(dict: &HashDictionary, token: &str) -> DictionaryEntry {
        let (stored, entry) = dict.slot(dict.hash(token)).expect("token present");
        assert_eq!(stored, token);
        *entry
    }

    #[test]
    fn offsets_are_running_totals_in_ascending_key_order() {
        let dict = build_dictionary(&fixed_corpus());
        assert_eq!(entry_for(&dict, "gato"), DictionaryEntry { doc_count: 2, posting_start_pos: 0 });
        assert_eq!(entry_for(&dict, "pato"), DictionaryEntry { doc_count: 3, posting_start_pos: 2 });
        assert_eq!(entry_for(&dict, "perro"), DictionaryEntry { doc_count: 4, posting_start_pos: 5 });
        assert_eq!(dict.collision_count(), 0);
    }

    #[test]
    fn empty_mapping_builds_an_empty_dictionary() {
        let dict = build_dictionary(&TokenPostings::new());
        assert_eq!(dict.collision_count(), 0);
        for idx in 0..dict.capacity() {
            assert!(dict.slot(idx).is_none());
        }
    }
}
