use anyhow::Result;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Slot count of the dictionary table. Fixed at construction, never resized.
pub const DICTIONARY_CAPACITY: usize = 100;

/// Token written in place of an empty slot in the dictionary file.
const EMPTY_SLOT_MARKER: &str = "vacío";

/// Per-token metadata pointing into the posting file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DictionaryEntry {
    /// Number of postings (= documents containing the token).
    pub doc_count: u32,
    /// Index into the global token-ordered posting sequence where this
    /// token's postings begin.
    pub posting_start_pos: u32,
}

/// Fixed-capacity direct-addressed token table.
///
/// A collision is counted and then resolved by overwriting the slot, so the
/// previous occupant is unrecoverable afterwards. That lossy policy is the
/// table's contract and is kept deliberately (see DESIGN.md); callers that
/// need every token must check `collision_count` after inserting.
pub struct HashDictionary {
    slots: Vec<Option<(String, DictionaryEntry)>>,
    collisions: u32,
}

impl HashDictionary {
    pub fn new() -> Self {
        Self::with_capacity(DICTIONARY_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { slots: vec![None; capacity], collisions: 0 }
    }

    /// Polynomial rolling hash over the token's bytes, reduced modulo the
    /// capacity at every step. Deterministic, always in `[0, capacity)`.
    pub fn hash(&self, token: &str) -> usize {
        let capacity = self.slots.len();
        let mut hash = 0usize;
        for byte in token.bytes() {
            hash = (hash * 31 + usize::from(byte)) % capacity;
        }
        hash
    }

    /// Store `(token, entry)` at the token's slot. An occupied slot counts
    /// one collision and is overwritten, even when the occupant is the same
    /// token.
    pub fn insert(&mut self, token: String, entry: DictionaryEntry) {
        let idx = self.hash(&token);
        if self.slots[idx].is_some() {
            self.collisions += 1;
        }
        self.slots[idx] = Some((token, entry));
    }

    /// Overwrite events since construction.
    pub fn collision_count(&self) -> u32 {
        self.collisions
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn slot(&self, index: usize) -> Option<&(String, DictionaryEntry)> {
        self.slots[index].as_ref()
    }

    /// Dump the table: a `Token\tNumDocs\tPostingStartPos` header, then one
    /// line per slot in index order. Empty slots get a sentinel line. The
    /// file is truncated on every call.
    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        let mut out = BufWriter::new(File::create(path)?);
        writeln!(out, "Token\tNumDocs\tPostingStartPos")?;
        for slot in &self.slots {
            match slot {
                Some((token, entry)) => {
                    writeln!(out, "{}\t{}\t{}", token, entry.doc_count, entry.posting_start_pos)?
                }
                None => writeln!(out, "{EMPTY_SLOT_MARKER}\t0\t-1")?,
            }
        }
        out.flush()?;
        Ok(())
    }
}

impl Default for HashDictionary {
    fn default() -> Self {
        Self::new()
    }
}
