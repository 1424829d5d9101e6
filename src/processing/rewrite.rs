//! Document rewriting (second map phase).
use std::collections::HashSet;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use itertools::Itertools;

use crate::error::Error;
use crate::io::{ensure_dir, singletons::read_singletons};
use crate::normalize::Normalizer;

use super::discover::DocRef;

/// Replacement marker for sampled singleton tokens.
///
/// Lowercase and digit-free: a fixed point of normalization, never a
/// sampling candidate itself.
pub const UNKNOWN_TOKEN: &str = "#unk#";

/// Rewrite every document of a chunk into the mirrored output tree.
///
/// The singleton store is loaded once per chunk, not once per file. The
/// first failing document aborts the remaining files of the chunk.
pub fn rewrite_chunk(
    chunk: &[DocRef],
    singletons_path: &Path,
    documents_dst: &Path,
    normalizer: &Normalizer,
) -> Result<(), Error> {
    if chunk.is_empty() {
        return Ok(());
    }

    let singletons = read_singletons(singletons_path)?;

    for doc in chunk {
        rewrite_document(doc, &singletons, documents_dst, normalizer)?;
    }

    Ok(())
}

/// Rewrite a single document: same normalization as the counting phase,
/// plus substitution of sampled singletons.
fn rewrite_document(
    doc: &DocRef,
    singletons: &HashSet<String>,
    documents_dst: &Path,
    normalizer: &Normalizer,
) -> Result<(), Error> {
    let target_dir = documents_dst.join(&doc.subdir);
    ensure_dir(&target_dir)?;

    let text = String::from_utf8(fs::read(doc.source_path())?)?;
    let mut writer = BufWriter::new(File::create(target_dir.join(&doc.filename))?);

    for line in text.lines() {
        if line.is_empty() {
            continue;
        }

        let sentence = line
            .split(' ')
            .map(|token| {
                let token = normalizer.normalize(token);
                if singletons.contains(&token) {
                    UNKNOWN_TOKEN.to_string()
                } else {
                    token
                }
            })
            .join(" ");

        writeln!(writer, "{}", sentence)?;
    }

    writer.flush()?;
    Ok(())
}
