//! Token-level text helpers.

use std::collections::BTreeSet;

const MONTHS: &[&str] = &[
    "january",
    "february",
    "march",
    "april",
    "june",
    "july",
    "august",
    "september",
    "sept",
    "october",
    "november",
    "december",
];

/// Normalizes text for comparison by lowercasing and collapsing whitespace.
pub fn normalize_text(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Replaces punctuation with spaces and collapses whitespace.
///
/// Apostrophes are dropped rather than split on (`chef's` becomes `chefs`),
/// and a decimal point between two digits is kept.
pub fn punctuation_treatment(raw: &str) -> String {
    let chars: Vec<char> = raw.chars().collect();
    let mut out = String::with_capacity(raw.len());
    for (idx, &c) in chars.iter().enumerate() {
        if c.is_alphanumeric() || c.is_whitespace() {
            out.push(c);
            continue;
        }
        match c {
            '\'' | '\u{2019}' | '`' => {}
            '.' if is_between_digits(&chars, idx) => out.push(c),
            _ => out.push(' '),
        }
    }
    out.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn is_between_digits(chars: &[char], idx: usize) -> bool {
    idx > 0
        && chars[idx - 1].is_ascii_digit()
        && chars.get(idx + 1).is_some_and(char::is_ascii_digit)
}

pub fn is_number(token: &str) -> bool {
    !token.is_empty() && token.parse::<f64>().is_ok_and(f64::is_finite)
}

/// Month names and ordinal day numbers (`1st`, `22nd`).
pub fn is_date(token: &str) -> bool {
    if MONTHS.contains(&token) {
        return true;
    }
    let digits = token.trim_end_matches(|c: char| c.is_ascii_alphabetic());
    let suffix = &token[digits.len()..];
    !digits.is_empty()
        && digits.chars().all(|c| c.is_ascii_digit())
        && matches!(suffix, "st" | "nd" | "rd" | "th")
}

pub fn is_single_letter(token: &str) -> bool {
    let mut chars = token.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if c.is_alphabetic())
}

/// Reduces an English plural to its singular form.
///
/// Words the vocabulary already knows are returned unchanged.
pub fn singularize(token: &str, vocabulary: &BTreeSet<String>) -> String {
    if token.chars().count() <= 3 || vocabulary.contains(token) {
        return token.to_string();
    }
    if ["ss", "us", "is"].iter().any(|end| token.ends_with(end)) {
        return token.to_string();
    }
    if let Some(stem) = token.strip_suffix("ies") {
        return format!("{stem}y");
    }
    if let Some(stem) = token.strip_suffix("oes") {
        return format!("{stem}o");
    }
    for ending in ["sses", "xes", "ches", "shes", "zes"] {
        if token.ends_with(ending) {
            return token[..token.len() - 2].to_string();
        }
    }
    token.strip_suffix('s').unwrap_or(token).to_string()
}

/// Removes repeated tokens, keeping the first occurrence.
pub fn remove_duplicate_tokens(tokens: Vec<String>) -> Vec<String> {
    let mut seen = BTreeSet::new();
    tokens
        .into_iter()
        .filter(|token| seen.insert(token.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn punctuation_becomes_space() {
        assert_eq!(punctuation_treatment("ground beef, raw"), "ground beef raw");
        assert_eq!(punctuation_treatment("ready-to-eat (frozen)"), "ready to eat frozen");
        assert_eq!(punctuation_treatment("chef's salad"), "chefs salad");
        assert_eq!(punctuation_treatment("milk 1.5% fat"), "milk 1.5 fat");
        assert_eq!(punctuation_treatment("end."), "end");
    }

    #[test]
    fn numbers_and_dates() {
        assert!(is_number("12"));
        assert!(is_number("1.5"));
        assert!(!is_number("nan"));
        assert!(!is_number("beef"));
        assert!(is_date("january"));
        assert!(is_date("21st"));
        assert!(!is_date("may"));
        assert!(!is_date("st"));
        assert!(!is_date("first"));
    }

    #[test]
    fn single_letters() {
        assert!(is_single_letter("a"));
        assert!(!is_single_letter("7"));
        assert!(!is_single_letter("ab"));
        assert!(!is_single_letter(""));
    }

    #[test]
    fn singular_forms() {
        let vocabulary = BTreeSet::new();
        assert_eq!(singularize("berries", &vocabulary), "berry");
        assert_eq!(singularize("tomatoes", &vocabulary), "tomato");
        assert_eq!(singularize("peaches", &vocabulary), "peach");
        assert_eq!(singularize("boxes", &vocabulary), "box");
        assert_eq!(singularize("apples", &vocabulary), "apple");
        assert_eq!(singularize("asparagus", &vocabulary), "asparagus");
        assert_eq!(singularize("peas", &vocabulary), "pea");
        assert_eq!(singularize("gas", &vocabulary), "gas");
    }

    #[test]
    fn known_words_are_not_singularized() {
        let vocabulary: BTreeSet<String> = ["molasses".to_string()].into_iter().collect();
        assert_eq!(singularize("molasses", &vocabulary), "molasses");
    }

    #[test]
    fn duplicates_keep_first() {
        let tokens = vec!["beef".to_string(), "raw".to_string(), "beef".to_string()];
        assert_eq!(remove_duplicate_tokens(tokens), vec!["beef", "raw"]);
    }
}
