//! Singleton selection and sampling.
use std::collections::{HashMap, HashSet};

use rand::Rng;

use crate::normalize::contains_digit;

/// Singleton sets derived from the global frequency table.
///
/// `sampled` is always a subset of `all`; only `sampled` reaches the
/// rewrite phase through the store.
#[derive(Debug)]
pub struct SingletonSample {
    pub all: HashSet<String>,
    pub sampled: HashSet<String>,
}

/// Collect digit-free tokens with global count exactly 1 and sample each
/// independently with probability `ratio_unknown`.
///
/// Candidates are visited in sorted token order, so a seeded generator
/// produces the same sample on every run over the same corpus.
pub fn sample_singletons<R: Rng>(
    global: &HashMap<String, u64>,
    ratio_unknown: f64,
    rng: &mut R,
) -> SingletonSample {
    let mut candidates: Vec<&str> = global
        .iter()
        .filter(|(token, count)| **count == 1 && !contains_digit(token))
        .map(|(token, _)| token.as_str())
        .collect();
    candidates.sort_unstable();

    let mut all = HashSet::new();
    let mut sampled = HashSet::new();

    for token in candidates {
        all.insert(token.to_string());
        if rng.gen::<f64>() < ratio_unknown {
            sampled.insert(token.to_string());
        }
    }

    SingletonSample { all, sampled }
}
