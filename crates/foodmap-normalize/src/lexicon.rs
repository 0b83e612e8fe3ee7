//! Rewrite tables applied during normalization.
//!
//! A lexicon file is a CSV with a header row:
//!
//! ```text
//! kind,from,to
//! spelling,brocoli,broccoli
//! abbreviation,choc,chocolate
//! abbreviation,pb and j,peanut butter and jelly
//! non_english,pollo,chicken
//! stop_word,with,
//! ```
//!
//! Single-word entries rewrite individual tokens; multi-word entries rewrite
//! token runs in the cleaned phrase. `stop_word` rows have no `to` value and
//! drop the word from the cleaned phrase.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use std::str::FromStr;

use csv::ReaderBuilder;
use tracing::info;

use crate::error::NormalizeError;
use crate::text::normalize_text;

/// Which rewrite table an entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LexiconKind {
    Spelling,
    Abbreviation,
    NonEnglish,
    StopWord,
}

impl FromStr for LexiconKind {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match normalize_text(value).replace([' ', '-'], "_").as_str() {
            "spelling" => Ok(Self::Spelling),
            "abbreviation" => Ok(Self::Abbreviation),
            "non_english" => Ok(Self::NonEnglish),
            "stop_word" | "stopword" => Ok(Self::StopWord),
            other => Err(other.to_string()),
        }
    }
}

#[derive(Debug, Clone)]
struct PhraseRule {
    pattern: Vec<String>,
    replacement: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    tokens: BTreeMap<LexiconKind, BTreeMap<String, String>>,
    phrases: BTreeMap<LexiconKind, Vec<PhraseRule>>,
    stop_words: BTreeSet<String>,
}

impl Lexicon {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a rewrite. Later entries for the same token replace earlier ones.
    ///
    /// For [`LexiconKind::StopWord`] `to` is ignored.
    pub fn insert(&mut self, kind: LexiconKind, from: &str, to: &str) {
        if kind == LexiconKind::StopWord {
            self.insert_stop_word(from);
            return;
        }
        let from = normalize_text(from);
        let to = normalize_text(to);
        if from.is_empty() || to.is_empty() {
            return;
        }
        let pattern: Vec<String> = from.split(' ').map(str::to_string).collect();
        if pattern.len() == 1 {
            self.tokens.entry(kind).or_default().insert(from, to);
            return;
        }
        let rules = self.phrases.entry(kind).or_default();
        rules.retain(|rule| rule.pattern != pattern);
        rules.push(PhraseRule {
            pattern,
            replacement: to.split(' ').map(str::to_string).collect(),
        });
        // Longest patterns first.
        rules.sort_by(|a, b| b.pattern.len().cmp(&a.pattern.len()));
    }

    /// Add a word that is dropped from cleaned phrases.
    pub fn insert_stop_word(&mut self, word: &str) {
        let word = normalize_text(word);
        if !word.is_empty() {
            self.stop_words.insert(word);
        }
    }

    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.tokens.values().map(BTreeMap::len).sum::<usize>()
            + self.phrases.values().map(Vec::len).sum::<usize>()
            + self.stop_words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Rewrite of a single token, if one is defined.
    pub fn rewrite_token(&self, kind: LexiconKind, token: &str) -> Option<&str> {
        self.tokens
            .get(&kind)
            .and_then(|table| table.get(token))
            .map(String::as_str)
    }

    /// Applies every multi-word rule of `kind`, longest pattern first.
    pub fn rewrite_phrase(&self, kind: LexiconKind, tokens: Vec<String>) -> Vec<String> {
        let Some(rules) = self.phrases.get(&kind) else {
            return tokens;
        };
        let mut current = tokens;
        for rule in rules {
            current = apply_rule(rule, current);
        }
        current
    }

    /// Load a lexicon CSV (`kind,from,to`).
    pub fn load(path: &Path) -> Result<Self, NormalizeError> {
        let csv_error = |e: csv::Error| NormalizeError::Csv {
            path: path.to_path_buf(),
            message: e.to_string(),
        };
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(path)
            .map_err(csv_error)?;
        let headers: Vec<String> = reader
            .headers()
            .map_err(csv_error)?
            .iter()
            .map(|h| h.trim().trim_matches('\u{feff}').to_ascii_lowercase())
            .collect();
        let column = |name: &str| {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or_else(|| NormalizeError::MissingColumn {
                    path: path.to_path_buf(),
                    column: name.to_string(),
                })
        };
        let (kind_idx, from_idx, to_idx) = (column("kind")?, column("from")?, column("to")?);

        let mut lexicon = Self::new();
        for record in reader.records() {
            let record = record.map_err(csv_error)?;
            let line = record.position().map_or(0, csv::Position::line);
            let raw_kind = record.get(kind_idx).unwrap_or_default();
            let kind = raw_kind
                .parse::<LexiconKind>()
                .map_err(|kind| NormalizeError::UnknownKind {
                    path: path.to_path_buf(),
                    line,
                    kind,
                })?;
            lexicon.insert(
                kind,
                record.get(from_idx).unwrap_or_default(),
                record.get(to_idx).unwrap_or_default(),
            );
        }
        info!(path = %path.display(), entries = lexicon.len(), "lexicon loaded");
        Ok(lexicon)
    }
}

fn apply_rule(rule: &PhraseRule, tokens: Vec<String>) -> Vec<String> {
    let width = rule.pattern.len();
    if tokens.len() < width {
        return tokens;
    }
    let mut out = Vec::with_capacity(tokens.len());
    let mut idx = 0;
    while idx < tokens.len() {
        if tokens[idx..].starts_with(&rule.pattern) {
            out.extend(rule.replacement.iter().cloned());
            idx += width;
        } else {
            out.push(tokens[idx].clone());
            idx += 1;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(raw: &str) -> Vec<String> {
        raw.split(' ').map(str::to_string).collect()
    }

    #[test]
    fn kinds_parse_loosely() {
        assert_eq!("Spelling".parse::<LexiconKind>(), Ok(LexiconKind::Spelling));
        assert_eq!("non-english".parse::<LexiconKind>(), Ok(LexiconKind::NonEnglish));
        assert_eq!("non english".parse::<LexiconKind>(), Ok(LexiconKind::NonEnglish));
        assert_eq!("Stop Word".parse::<LexiconKind>(), Ok(LexiconKind::StopWord));
        assert!("synonym".parse::<LexiconKind>().is_err());
    }

    #[test]
    fn token_rewrites_are_case_insensitive_on_insert() {
        let mut lexicon = Lexicon::new();
        lexicon.insert(LexiconKind::Abbreviation, "Choc", "Chocolate");
        assert_eq!(
            lexicon.rewrite_token(LexiconKind::Abbreviation, "choc"),
            Some("chocolate")
        );
        assert_eq!(lexicon.rewrite_token(LexiconKind::Spelling, "choc"), None);
    }

    #[test]
    fn stop_words_ignore_the_replacement() {
        let mut lexicon = Lexicon::new();
        lexicon.insert(LexiconKind::StopWord, " With ", "");
        lexicon.insert(LexiconKind::StopWord, "and", "ignored");
        lexicon.insert_stop_word("  ");
        assert!(lexicon.is_stop_word("with"));
        assert!(lexicon.is_stop_word("and"));
        assert_eq!(lexicon.rewrite_token(LexiconKind::StopWord, "and"), None);
        assert_eq!(lexicon.len(), 2);
    }

    #[test]
    fn phrase_rules_prefer_longer_patterns() {
        let mut lexicon = Lexicon::new();
        lexicon.insert(LexiconKind::NonEnglish, "pollo asado", "roast chicken");
        lexicon.insert(LexiconKind::NonEnglish, "pollo asado con papas", "chicken with potatoes");

        let rewritten =
            lexicon.rewrite_phrase(LexiconKind::NonEnglish, words("pollo asado con papas fritas"));
        assert_eq!(rewritten, words("chicken with potatoes fritas"));

        let rewritten = lexicon.rewrite_phrase(LexiconKind::NonEnglish, words("pollo asado"));
        assert_eq!(rewritten, words("roast chicken"));
        assert_eq!(lexicon.len(), 2);
    }
}
