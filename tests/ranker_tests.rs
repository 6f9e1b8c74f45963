use wordle_advisor::{
    entropy, filter, load_dictionary, most_likely, rank, select, Dictionary, History,
    HistoryEntry, Suggestion, Word, DEFAULT_TOP_K,
};

fn words(list: &[&str]) -> Vec<Word> {
    list.iter().map(|w| Word::parse(w).unwrap()).collect()
}

fn bits_of(suggestions: &[Suggestion], word: &str) -> f64 {
    suggestions
        .iter()
        .find(|s| s.word == word)
        .map(|s| s.bits)
        .unwrap()
}

#[test]
fn test_four_word_scenario() {
    let candidates = words(&["crane", "slate", "trace", "brake"]);
    let suggestions = rank(&candidates);
    assert_eq!(suggestions.len(), 4);

    // crane splits the set four ways: ggggg, bbgbg, yggbg, bggbg
    assert!((bits_of(&suggestions, "crane") - 2.000).abs() < 1e-3);
    assert!((bits_of(&suggestions, "trace") - 2.000).abs() < 1e-3);
    assert!((bits_of(&suggestions, "slate") - 1.500).abs() < 1e-3);
    assert!((bits_of(&suggestions, "brake") - 1.500).abs() < 1e-3);
}

#[test]
fn test_rank_keeps_input_order() {
    let candidates = words(&["trace", "brake", "crane"]);
    let ranked: Vec<Word> = rank(&candidates).into_iter().map(|s| s.word).collect();
    assert_eq!(ranked, candidates);
}

#[test]
fn test_empty_candidates() {
    assert!(rank(&[]).is_empty());
    assert!(select(rank(&[]), DEFAULT_TOP_K).is_empty());
    assert!(most_likely(&[]).is_none());
}

#[test]
fn test_single_candidate_has_zero_bits() {
    let candidates = words(&["crane"]);
    let suggestions = rank(&candidates);
    assert_eq!(suggestions.len(), 1);
    assert_eq!(suggestions[0].word, "crane");
    assert_eq!(suggestions[0].bits, 0.0);
}

#[test]
fn test_entropy_bounds() {
    let dictionary = load_dictionary();
    let mut history = History::new();
    history.push(HistoryEntry::parse("trace", "bybbb").unwrap());

    for candidates in [
        filter(&dictionary, &History::new()),
        filter(&dictionary, &history),
    ] {
        let upper = (candidates.len() as f64).log2();
        for suggestion in rank(candidates.words()) {
            assert!(suggestion.bits >= 0.0);
            assert!(suggestion.bits <= upper + 1e-9, "{:?}", suggestion);
        }
    }
}

#[test]
fn test_guess_sharing_no_letters_reveals_nothing() {
    let candidates = words(&["crane", "slate", "trace", "brake"]);
    let guess = Word::parse("pygmy").unwrap();
    assert_eq!(entropy(&guess, &candidates), 0.0);
}

#[test]
fn test_single_shared_letter_splits_three_to_one() {
    let candidates = words(&["crane", "slate", "trace", "brake"]);
    let guess: Word = "pious".parse().unwrap();

    // only slate has an s, so it lands in a bucket of its own
    assert!((entropy(&guess, &candidates) - 0.811).abs() < 1e-3);
}

#[test]
fn test_select_orders_by_bits_then_word() {
    let candidates = words(&["slate", "trace", "brake", "crane"]);
    let top = select(rank(&candidates), DEFAULT_TOP_K);
    let order: Vec<String> = top.iter().map(|s| s.word.to_string()).collect();
    assert_eq!(order, ["crane", "trace", "brake", "slate"]);

    for i in 1..top.len() {
        assert!(top[i - 1].bits >= top[i].bits);
    }
}

#[test]
fn test_select_tie_break_is_reproducible() {
    let tied = words(&["zesty", "apple"]);
    let suggestions: Vec<Suggestion> = tied
        .iter()
        .map(|&word| Suggestion { word, bits: 1.0 })
        .collect();

    for _ in 0..5 {
        let selected = select(suggestions.clone(), 2);
        assert_eq!(selected[0].word, "apple");
        assert_eq!(selected[1].word, "zesty");
    }
}

#[test]
fn test_select_truncates_to_k() {
    let dictionary = Dictionary::from_words(["crane", "slate", "trace", "brake"]).unwrap();
    let suggestions = rank(dictionary.words());
    assert_eq!(select(suggestions.clone(), 2).len(), 2);
    assert_eq!(select(suggestions.clone(), 0).len(), 0);
    assert_eq!(select(suggestions, 100).len(), 4);
}

#[test]
fn test_most_likely_is_lexicographically_first() {
    let candidates = words(&["trace", "brake", "slate", "crane"]);
    assert_eq!(most_likely(&candidates).unwrap(), "brake");
}
