use anyhow::Result;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// One occurrence record of a token in a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Posting {
    pub document: String,
    pub frequency: u32,
}

impl Posting {
    pub fn new(document: impl Into<String>, frequency: u32) -> Self {
        Self { document: document.into(), frequency }
    }
}

/// Token -> posting list. A `BTreeMap` so iteration is always in ascending
/// token order; the posting-start offsets stored in the dictionary assume
/// exactly this order when the posting file is written.
pub type TokenPostings = BTreeMap<String, Vec<Posting>>;

/// Write every posting as `token\tdocument\tfrequency`, one per line, grouped
/// by token in ascending key order with each list in its stored order. No
/// header. The file is truncated on every call.
pub fn write_posting_file(postings: &TokenPostings, path: &Path) -> Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    for (token, list) in postings {
        for posting in list {
            writeln!(out, "{}\t{}\t{}", token, posting.document, posting.frequency)?;
        }
    }
    out.flush()?;
    Ok(())
}
