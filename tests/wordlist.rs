//! Word-list slicing and random selection tests

use libvaultutil::wordlist::{self, Error, WORD_MAX_LEN};
use rand::SeedableRng;
use rand::rngs::StdRng;

const TWELVE_WORDS: &str =
    "abandon ability able about above absent absorb abstract absurd abuse access accident";

#[test]
fn test_slice_twelve_word_list() {
    let words = wordlist::slice::<12>(TWELVE_WORDS).unwrap();
    assert_eq!(words.len(), 12);
    for (slot, expected) in words.iter().zip(TWELVE_WORDS.split_whitespace()) {
        assert_eq!(slot.as_str(), expected);
    }
}

#[test]
fn test_slice_handles_mixed_whitespace() {
    let words = wordlist::slice::<8>("zoo\nzebra\twrap  young").unwrap();
    assert_eq!(words.len(), 4);
    assert_eq!(words[0].as_str(), "zoo");
    assert_eq!(words[3].as_str(), "young");
}

#[test]
fn test_slice_returns_fewer_words_than_capacity() {
    let words = wordlist::slice::<24>("abandon ability").unwrap();
    assert_eq!(words.len(), 2);
}

#[test]
fn test_slice_stops_at_capacity() {
    let words = wordlist::slice::<3>(TWELVE_WORDS).unwrap();
    assert_eq!(words.len(), 3);
    assert_eq!(words[2].as_str(), "able");
}

#[test]
fn test_slice_rejects_over_long_word() {
    assert!("springtime".len() > WORD_MAX_LEN);
    assert_eq!(
        wordlist::slice::<4>("zoo springtime zebra"),
        Err(Error::WordTooLong)
    );
}

#[test]
fn test_slice_empty_input() {
    let words = wordlist::slice::<4>("").unwrap();
    assert!(words.is_empty());
}

#[test]
fn test_strip_format_chars() {
    let cleaned = wordlist::strip_format_chars::<32>("aban don\tabili ty\r\n").unwrap();
    assert_eq!(cleaned.as_str(), "abandonability");
}

#[test]
fn test_strip_format_chars_keeps_other_characters() {
    let cleaned = wordlist::strip_format_chars::<16>("a-b_c.d").unwrap();
    assert_eq!(cleaned.as_str(), "a-b_c.d");
}

#[test]
fn test_strip_format_chars_rejects_short_capacity() {
    assert_eq!(
        wordlist::strip_format_chars::<4>("abandon "),
        Err(Error::BufferTooSmall)
    );
}

#[test]
fn test_pick_random_is_deterministic_under_a_seed() {
    let mut first_rng = StdRng::seed_from_u64(0x5EED);
    let mut second_rng = StdRng::seed_from_u64(0x5EED);

    let first = wordlist::pick_random::<_, 12>(&mut first_rng, TWELVE_WORDS, 12).unwrap();
    let second = wordlist::pick_random::<_, 12>(&mut second_rng, TWELVE_WORDS, 12).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_pick_random_stays_in_vocabulary() {
    let vocabulary: Vec<&str> = TWELVE_WORDS.split_whitespace().collect();
    let mut rng = StdRng::seed_from_u64(99);

    let picked = wordlist::pick_random::<_, 24>(&mut rng, TWELVE_WORDS, 24).unwrap();
    assert_eq!(picked.len(), 24);
    for word in &picked {
        assert!(vocabulary.contains(&word.as_str()));
    }
}

#[test]
fn test_pick_random_rejects_empty_vocabulary() {
    let mut rng = StdRng::seed_from_u64(1);
    assert_eq!(
        wordlist::pick_random::<_, 4>(&mut rng, " \n\t", 2),
        Err(Error::EmptyWordList)
    );
}

#[test]
fn test_pick_random_rejects_count_over_capacity() {
    let mut rng = StdRng::seed_from_u64(1);
    assert_eq!(
        wordlist::pick_random::<_, 4>(&mut rng, TWELVE_WORDS, 5),
        Err(Error::BufferTooSmall)
    );
}

#[test]
fn test_pick_random_validates_vocabulary_before_drawing() {
    let mut rng = StdRng::seed_from_u64(1);
    assert_eq!(
        wordlist::pick_random::<_, 4>(&mut rng, "zoo springtime", 1),
        Err(Error::WordTooLong)
    );
}

#[test]
fn test_pick_random_single_word_vocabulary() {
    let mut rng = StdRng::seed_from_u64(7);
    let picked = wordlist::pick_random::<_, 3>(&mut rng, "zoo", 3).unwrap();
    for word in &picked {
        assert_eq!(word.as_str(), "zoo");
    }
}
