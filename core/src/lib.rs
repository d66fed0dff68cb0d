pub mod builder;
pub mod dictionary;
pub mod paths;
pub mod posting;

pub use builder::{BuildReport, IndexBuilder};
pub use dictionary::{DictionaryEntry, HashDictionary, DICTIONARY_CAPACITY};
pub use paths::IndexPaths;
pub use posting::{Posting, TokenPostings};
