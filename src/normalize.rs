/*! Token normalization.

Both counting and rewriting phases normalize tokens through the same
[Normalizer], so a raw token always maps to the same normalized form in
both passes.
!*/

/// Token normalization settings: lowercasing and digit folding.
///
/// Digit folding replaces every ASCII digit with `0`, merging numeric
/// variants (`2 mg`, `3 mg` → `0 mg`) into a single vocabulary entry.
#[derive(Debug, Clone, Copy)]
pub struct Normalizer {
    lowercase: bool,
    replace_digits: bool,
}

impl Normalizer {
    pub fn new(lowercase: bool, replace_digits: bool) -> Self {
        Self {
            lowercase,
            replace_digits,
        }
    }

    /// Normalize a single token (lowercase first, then fold digits).
    pub fn normalize(&self, token: &str) -> String {
        let token = if self.lowercase {
            token.to_lowercase()
        } else {
            token.to_string()
        };

        if self.replace_digits {
            token
                .chars()
                .map(|c| if c.is_ascii_digit() { '0' } else { c })
                .collect()
        } else {
            token
        }
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self {
            lowercase: true,
            replace_digits: true,
        }
    }
}

/// Digit check used by singleton selection.
///
/// Must agree with the folding in [Normalizer::normalize]: both look at
/// ASCII digits, so a folded token (`x0`) is still detected as digit-bearing.
pub fn contains_digit(token: &str) -> bool {
    token.bytes().any(|b| b.is_ascii_digit())
}
