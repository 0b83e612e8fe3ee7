#![allow(missing_docs)]

use std::fs;

use foodmap_normalize::{
    Lexicon, LexiconKind, NormalizeError, PhraseNormalizer, StandardNormalizer,
};

#[test]
fn loads_lexicon_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("lexicon.csv");
    fs::write(
        &path,
        "Kind,From,To\n\
         spelling,yoghurt,yogurt\n\
         abbreviation,choc,chocolate\n\
         non_english,pollo,chicken\n\
         abbreviation,pb and jelly,peanut butter and jelly\n",
    )
    .unwrap();

    let lexicon = Lexicon::load(&path).unwrap();
    assert_eq!(lexicon.len(), 4);
    assert_eq!(lexicon.rewrite_token(LexiconKind::Spelling, "yoghurt"), Some("yogurt"));

    let normalizer = StandardNormalizer::new().with_lexicon(lexicon);
    assert_eq!(
        normalizer.normalize("Choc Yoghurt").cleaned_sample,
        "chocolate yogurt"
    );
    assert_eq!(
        normalizer.normalize("PB and Jelly sandwich").cleaned_sample,
        "peanut butter and jelly sandwich"
    );
    assert_eq!(normalizer.normalize("Pollo").cleaned_sample, "chicken");
}

#[test]
fn stop_word_rows_need_no_replacement() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("lexicon.csv");
    fs::write(
        &path,
        "kind,from,to\n\
         stop_word,with,\n\
         stop word,in,\n\
         spelling,tomatoe,tomato\n",
    )
    .unwrap();

    let lexicon = Lexicon::load(&path).unwrap();
    assert_eq!(lexicon.len(), 3);
    assert!(lexicon.is_stop_word("in"));

    let normalizer = StandardNormalizer::new().with_lexicon(lexicon);
    let phrase = normalizer.normalize("Pasta with Tomatoe in Sauce");
    assert_eq!(phrase.cleaned_sample, "pasta tomato sauce");
    assert_eq!(phrase.sample, "pasta with tomatoe in sauce");
}

#[test]
fn unknown_kind_reports_line() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("lexicon.csv");
    fs::write(&path, "kind,from,to\nspelling,a,b\nslang,grub,food\n").unwrap();

    let err = Lexicon::load(&path).unwrap_err();
    assert!(matches!(
        err,
        NormalizeError::UnknownKind { line: 3, ref kind, .. } if kind == "slang"
    ));
}

#[test]
fn missing_column_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("lexicon.csv");
    fs::write(&path, "kind,from\nspelling,a\n").unwrap();

    assert!(matches!(
        Lexicon::load(&path),
        Err(NormalizeError::MissingColumn { ref column, .. }) if column == "to"
    ));
}
