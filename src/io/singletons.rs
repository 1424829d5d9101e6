//! Singleton store: the serialized artifact shared with rewrite workers.
//!
//! Rewrite workers do not share memory with the driver, so the sampled
//! singleton set travels through a JSON file under the output root.
//! Workers load it once per chunk.
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Store file name, created at the output root.
pub const SINGLETONS_FILE: &str = "singletons.json";

#[derive(Debug, Serialize, Deserialize)]
struct SingletonFile {
    singletons: Vec<String>,
}

/// Serialize the sampled singleton set, replacing any previous artifact.
///
/// Entries are sorted so that the artifact is stable for a given set.
pub fn write_singletons(path: &Path, singletons: &HashSet<String>) -> Result<(), Error> {
    let mut sorted: Vec<String> = singletons.iter().cloned().collect();
    sorted.sort_unstable();

    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer(&mut writer, &SingletonFile { singletons: sorted })?;
    writer.flush()?;
    Ok(())
}

/// Load a singleton set written by [write_singletons].
pub fn read_singletons(path: &Path) -> Result<HashSet<String>, Error> {
    let reader = BufReader::new(File::open(path)?);
    let contents: SingletonFile = serde_json::from_reader(reader)?;
    Ok(contents.singletons.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join(SINGLETONS_FILE);

        let singletons: HashSet<String> = ["tumor", "état", "q.d.", "\"quoted\"", ""]
            .iter()
            .map(|s| s.to_string())
            .collect();

        write_singletons(&path, &singletons).unwrap();
        let loaded = read_singletons(&path).unwrap();

        assert_eq!(loaded, singletons);
    }

    #[test]
    fn test_roundtrip_empty() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join(SINGLETONS_FILE);

        write_singletons(&path, &HashSet::new()).unwrap();
        assert!(read_singletons(&path).unwrap().is_empty());
    }

    #[test]
    fn test_overwrite() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join(SINGLETONS_FILE);

        let first: HashSet<String> = ["a", "b", "c"].iter().map(|s| s.to_string()).collect();
        let second: HashSet<String> = ["z"].iter().map(|s| s.to_string()).collect();

        write_singletons(&path, &first).unwrap();
        write_singletons(&path, &second).unwrap();

        assert_eq!(read_singletons(&path).unwrap(), second);
    }

    #[test]
    fn test_read_missing_file() {
        let tmp = tempfile::tempdir().unwrap();
        let res = read_singletons(&tmp.path().join("nope.json"));
        assert!(matches!(res, Err(crate::error::Error::Io(_))));
    }
}
