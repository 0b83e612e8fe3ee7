//! Raw label to (sample, cleaned sample, tokens).

use std::collections::BTreeSet;

use tracing::trace;
use unicode_normalization::UnicodeNormalization;

use crate::lexicon::{Lexicon, LexiconKind};
use crate::text::{
    is_date, is_number, is_single_letter, punctuation_treatment, remove_duplicate_tokens,
    singularize,
};

/// The forms of a label the matching engine works with.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedPhrase {
    /// Lower-cased label with punctuation treated.
    pub sample: String,
    /// `sample` after token filtering and rewrites.
    pub cleaned_sample: String,
    /// Tokens of `cleaned_sample`.
    pub tokens: Vec<String>,
}

impl NormalizedPhrase {
    pub fn from_tokens(sample: String, tokens: Vec<String>) -> Self {
        Self {
            sample,
            cleaned_sample: tokens.join(" "),
            tokens,
        }
    }
}

/// Turns a raw input label into the phrases the engine looks up.
pub trait PhraseNormalizer {
    fn normalize(&self, raw_label: &str) -> NormalizedPhrase;
}

/// Default English normalizer.
///
/// Steps, in order:
/// - NFKC fold, lower case, punctuation treatment (gives `sample`)
/// - drop numbers, dates and single letters
/// - per token: singularize, spelling, abbreviation, non-English rewrites
/// - drop lexicon stop words
/// - phrase-level abbreviation and non-English rewrites
/// - drop repeated tokens
#[derive(Debug, Clone, Default)]
pub struct StandardNormalizer {
    lexicon: Lexicon,
    vocabulary: BTreeSet<String>,
}

impl StandardNormalizer {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_lexicon(mut self, lexicon: Lexicon) -> Self {
        self.lexicon = lexicon;
        self
    }

    /// Words that must not be singularized (typically the ontology's own).
    #[must_use]
    pub fn with_vocabulary<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.vocabulary = words.into_iter().map(Into::into).collect();
        self
    }

    fn clean_token(&self, token: &str) -> Vec<String> {
        let mut lemma = singularize(token, &self.vocabulary);
        for kind in [
            LexiconKind::Spelling,
            LexiconKind::Abbreviation,
            LexiconKind::NonEnglish,
        ] {
            if let Some(rewrite) = self.lexicon.rewrite_token(kind, &lemma) {
                trace!(token = %lemma, rewrite, ?kind, "token rewritten");
                lemma = rewrite.to_string();
            }
        }
        lemma
            .split(' ')
            .filter(|word| !self.lexicon.is_stop_word(word))
            .map(str::to_string)
            .collect()
    }
}

impl PhraseNormalizer for StandardNormalizer {
    fn normalize(&self, raw_label: &str) -> NormalizedPhrase {
        let folded: String = raw_label.nfkc().collect();
        let sample = punctuation_treatment(&folded.to_lowercase());

        let mut tokens = Vec::new();
        for token in sample.split_whitespace() {
            if is_number(token) || is_date(token) || is_single_letter(token) {
                continue;
            }
            tokens.extend(self.clean_token(token));
        }
        let tokens = self
            .lexicon
            .rewrite_phrase(LexiconKind::Abbreviation, tokens);
        let tokens = self.lexicon.rewrite_phrase(LexiconKind::NonEnglish, tokens);
        let tokens = remove_duplicate_tokens(tokens);

        NormalizedPhrase::from_tokens(sample, tokens)
    }
}
