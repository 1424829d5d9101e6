//! Token counting (map) and count merging (reduce).
use std::collections::HashMap;
use std::fs;

use crate::error::Error;
use crate::normalize::Normalizer;

use super::discover::DocRef;

/// Count normalized tokens for a single document.
///
/// Lines are split on single spaces; empty lines are skipped. Shares no
/// state, so documents can be counted in parallel with no coordination.
pub fn count_tokens(doc: &DocRef, normalizer: &Normalizer) -> Result<HashMap<String, u64>, Error> {
    let text = String::from_utf8(fs::read(doc.source_path())?)?;

    let mut counts: HashMap<String, u64> = HashMap::new();
    for line in text.lines() {
        if line.is_empty() {
            continue;
        }

        for token in line.split(' ') {
            *counts.entry(normalizer.normalize(token)).or_insert(0) += 1;
        }
    }

    Ok(counts)
}

/// Merge per-document tables into a global table plus grand total.
///
/// A plain sum: commutative and associative, so the order in which the
/// parallel counting phase delivered its tables does not matter.
pub fn merge_counts<I>(tables: I) -> (HashMap<String, u64>, u64)
where
    I: IntoIterator<Item = HashMap<String, u64>>,
{
    let mut global: HashMap<String, u64> = HashMap::new();
    let mut total = 0u64;

    for table in tables {
        for (token, count) in table {
            *global.entry(token).or_insert(0) += count;
            total += count;
        }
    }

    (global, total)
}
