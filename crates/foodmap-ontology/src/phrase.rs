//! Phrase keys for the lookup index.

/// Normalizes a phrase into its index key.
///
/// Lower-cases, turns every non-alphanumeric character into a space and
/// collapses whitespace, so `"Beef (Raw)"` and `"beef raw"` share a key.
pub fn phrase_key(raw: &str) -> String {
    let mut folded = String::with_capacity(raw.len());
    for c in raw.chars() {
        if c.is_alphanumeric() {
            folded.extend(c.to_lowercase());
        } else {
            folded.push(' ');
        }
    }
    folded.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_punctuation_and_case() {
        assert_eq!(phrase_key("Beef (Raw)"), "beef raw");
        assert_eq!(phrase_key("  ground   beef "), "ground beef");
        assert_eq!(phrase_key("half-and-half"), "half and half");
        assert_eq!(phrase_key("---"), "");
    }
}
