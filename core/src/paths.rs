use std::path::{Path, PathBuf};

/// Output filenames rooted at a directory. The names themselves are part of
/// the on-disk interface and are not configurable.
pub struct IndexPaths {
    pub root: PathBuf,
}

impl IndexPaths {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self { root: root.as_ref().to_path_buf() }
    }

    /// Dictionary file, overwritten on every build.
    pub fn dictionary(&self) -> PathBuf {
        self.root.join("diccionario_hash.txt")
    }

    /// Posting file, overwritten on every build.
    pub fn postings(&self) -> PathBuf {
        self.root.join("posting.txt")
    }

    /// Run log, appended to on every build.
    pub fn run_log(&self) -> PathBuf {
        self.root.join("a8_matricula.txt")
    }
}
