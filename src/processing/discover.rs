//! Corpus file discovery.
use std::path::{Path, PathBuf};

use glob::glob;

use crate::error::Error;

/// Reference to one input document and its mirrored output location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocRef {
    /// Directory holding the file.
    pub root: PathBuf,
    /// File name, kept as-is in the output tree.
    pub filename: String,
    /// Path of `root` relative to the input root (empty for top-level files).
    pub subdir: PathBuf,
}

impl DocRef {
    pub fn source_path(&self) -> PathBuf {
        self.root.join(&self.filename)
    }
}

/// Walk `input_dir` and list every `.txt` file as a [DocRef].
///
/// An empty corpus is not an error; a missing input root is.
pub fn gather_documents(input_dir: &Path) -> Result<Vec<DocRef>, Error> {
    if !input_dir.is_dir() {
        return Err(Error::NotFound(input_dir.to_path_buf()));
    }

    let pattern = format!("{}/**/*.txt", input_dir.display());

    let mut documents = Vec::new();
    for entry in glob(&pattern)? {
        let path = entry?;
        if !path.is_file() {
            continue;
        }

        let filename = match path.file_name().and_then(|f| f.to_str()) {
            Some(f) => f.to_string(),
            None => continue,
        };
        let root = path.parent().unwrap_or(input_dir).to_path_buf();
        let subdir = root
            .strip_prefix(input_dir)
            .unwrap_or_else(|_| Path::new(""))
            .to_path_buf();

        documents.push(DocRef {
            root,
            filename,
            subdir,
        });
    }

    Ok(documents)
}
