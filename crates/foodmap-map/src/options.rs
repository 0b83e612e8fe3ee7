//! Engine options.

/// Longest sub-phrase, in tokens, tried by the component search.
pub const DEFAULT_MAX_NGRAM: usize = 5;

/// Upper bound on `max_ngram`. Every chunk is tried in all of its word
/// orders, so the cost of one chunk grows factorially with its length.
pub const MAX_NGRAM_LIMIT: usize = 8;

/// Tuning knobs of the matching engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchOptions {
    /// Longest chunk the component search starts from. Values outside
    /// `1..=MAX_NGRAM_LIMIT` are clamped when the search runs.
    pub max_ngram: usize,
    /// Whether suffix-relaxed lookups are tried after exact ones.
    pub relax_suffixes: bool,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            max_ngram: DEFAULT_MAX_NGRAM,
            relax_suffixes: true,
        }
    }
}

impl MatchOptions {
    /// Exact lookups only.
    #[must_use]
    pub fn exact_only() -> Self {
        Self {
            relax_suffixes: false,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_max_ngram(mut self, max_ngram: usize) -> Self {
        self.max_ngram = max_ngram.clamp(1, MAX_NGRAM_LIMIT);
        self
    }

    /// Longest chunk worth trying for a label of `token_count` tokens.
    pub(crate) fn chunk_limit(&self, token_count: usize) -> usize {
        self.max_ngram.clamp(1, MAX_NGRAM_LIMIT).min(token_count)
    }

    /// Lookup modes to try, in order.
    pub(crate) fn lookup_modes(&self) -> &'static [bool] {
        if self.relax_suffixes {
            &[false, true]
        } else {
            &[false]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_ngram_is_clamped() {
        assert_eq!(MatchOptions::default().with_max_ngram(0).max_ngram, 1);
        assert_eq!(
            MatchOptions::default().with_max_ngram(usize::MAX).max_ngram,
            MAX_NGRAM_LIMIT
        );
    }

    #[test]
    fn chunk_limit_never_exceeds_the_label() {
        let options = MatchOptions {
            max_ngram: usize::MAX,
            relax_suffixes: true,
        };
        assert_eq!(options.chunk_limit(2), 2);
        assert_eq!(options.chunk_limit(20), MAX_NGRAM_LIMIT);
        assert_eq!(options.chunk_limit(0), 0);
        assert_eq!(MatchOptions::default().chunk_limit(3), 3);
    }
}
