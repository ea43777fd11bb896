//! End-to-end runs through the standard pipeline

use yfirles_core::{Corrector, Sentence, TokenKind};

fn correct_all(text: &str) -> Vec<Sentence> {
    let corrector = Corrector::new().unwrap();
    corrector.correct(text).unwrap().collect()
}

#[test]
fn test_spelling_fixes_applied() {
    let sents = correct_all("Atvinuleysi jógst um 3%");
    assert_eq!(sents.len(), 1);
    let s = &sents[0];
    assert_eq!(s.corrected(), "Atvinnuleysi jókst um 3 %");
    assert_eq!(s.original(), "Atvinuleysi jógst um 3%");

    let codes: Vec<&str> = s.annotations().iter().map(|a| a.code.as_str()).collect();
    assert_eq!(codes, vec!["S002", "S002"]);
    assert!(s.annotations().iter().all(|a| a.suggest.is_some()));
}

#[test]
fn test_valid_word_not_touched_by_neighbor_fix() {
    let sents = correct_all("Barnið vil grænann lit");
    assert_eq!(sents.len(), 1);
    let s = &sents[0];
    assert_eq!(s.corrected(), "Barnið vil grænann lit".replace("grænann", "grænan"));

    let vil = s.tokens().iter().find(|t| t.original() == "vil").unwrap();
    assert!(!vil.is_rewritten());
    let fixed = s.tokens().iter().find(|t| t.original() == "grænann").unwrap();
    assert_eq!(fixed.corrected(), "grænan");

    assert_eq!(s.annotations().len(), 1);
    assert_eq!(s.annotations()[0].code, "S003");
}

#[test]
fn test_grammar_mood_with_nested_spelling_fix() {
    let sents = correct_all("Ég kláraði verkefnið þrátt fyrir að ég var þreittur.");
    assert_eq!(sents.len(), 1);
    let s = &sents[0];

    // Only the token rewrite lands in `corrected`; the mood suggestion
    // stays in its annotation
    assert_eq!(
        s.corrected(),
        "Ég kláraði verkefnið þrátt fyrir að ég var þreyttur ."
    );

    let anns = s.annotations();
    assert_eq!(anns.len(), 2);

    let mood = &anns[0];
    assert_eq!(mood.code, "P_MOOD_ACK");
    let var_ix = s
        .tokens()
        .iter()
        .position(|t| t.original() == "var")
        .unwrap();
    assert_eq!((mood.start, mood.end), (var_ix, var_ix));
    assert_eq!(mood.suggest.as_deref(), Some("væri"));
    assert!(!mood.detail.is_empty());

    let spelling = &anns[1];
    assert_eq!(spelling.code, "S003");
    assert_eq!(spelling.suggest.as_deref(), Some("þreyttur"));
    assert!(spelling.start > mood.start);
}

#[test]
fn test_duplicated_word_removed_end_to_end() {
    let sents = correct_all("Ég hélt mér mér fast í sætið.");
    let s = &sents[0];
    assert_eq!(s.corrected(), "Ég hélt mér fast í sætið .");
    assert_eq!(s.annotations()[0].code, "C001");
}

#[test]
fn test_allowed_multiple_passes_without_duplication_flag() {
    let sents = correct_all("Ég á á sem heitir Lína.");
    assert_eq!(sents.len(), 1);
    let s = &sents[0];
    assert_eq!(s.corrected(), "Ég á á sem heitir Lína .");
    // The only finding is the out-of-lexicon name; the repeat itself
    // raises nothing
    let codes: Vec<&str> = s.annotations().iter().map(|a| a.code.as_str()).collect();
    assert_eq!(codes, vec!["U001"]);
}

#[test]
fn test_blank_lines_delimit_sentences() {
    let sents = correct_all("Barnið vill grænan lit\n\nSlysið átti sér stað");
    assert_eq!(sents.len(), 2);
    assert_eq!(sents[0].corrected(), "Barnið vill grænan lit");
    assert_eq!(sents[1].corrected(), "Slysið átti sér stað");
}

#[test]
fn test_empty_input_yields_no_sentences() {
    assert!(correct_all("").is_empty());
    assert!(correct_all("\n\n\n").is_empty());
}

#[test]
fn test_clean_tokens_have_no_annotations() {
    let sents = correct_all("Barnið vill grænan lit.");
    let s = &sents[0];
    assert!(s.is_clean());
    for t in s.tokens() {
        assert_eq!(t.original(), t.corrected());
    }
}

#[test]
fn test_rerun_is_deterministic() {
    let corrector = Corrector::new().unwrap();
    let text = "Atvinuleysi jógst um 3%. Barnið vil grænann lit.\n\nÉg á á sem heitir Lína.";
    let first: Vec<Sentence> = corrector.correct(text).unwrap().collect();
    let second: Vec<Sentence> = corrector.correct(text).unwrap().collect();
    assert_eq!(first.len(), second.len());
    for (a, b) in first.iter().zip(&second) {
        assert_eq!(a.corrected(), b.corrected());
        assert_eq!(a.annotations(), b.annotations());
    }
}

#[test]
fn test_offsets_monotonic_within_sentence() {
    for s in correct_all("Ég á á, sem heitir Lína. Hún kann ekki að jarma!") {
        let mut prev = 0;
        for t in s.tokens() {
            assert!(t.start() >= prev);
            assert!(t.end() >= t.start());
            prev = t.start();
        }
    }
}

#[test]
fn test_sentence_markers_always_present() {
    for s in correct_all("Ein setning. Önnur setning! Þriðja?") {
        assert_eq!(s.tokens().first().unwrap().kind, TokenKind::SentenceBegin);
        assert_eq!(s.tokens().last().unwrap().kind, TokenKind::SentenceEnd);
    }
}

#[test]
fn test_consumer_may_stop_pulling_early() {
    let corrector = Corrector::new().unwrap();
    let mut sents = corrector
        .correct("Fyrsta setning. Önnur setning. Þriðja setning.")
        .unwrap();
    let first = sents.next().unwrap();
    assert_eq!(first.corrected(), "Fyrsta setning .");
    drop(sents);
}
