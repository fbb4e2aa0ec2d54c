//! End-to-end exercise of the public, re-exported API surface
//!
//! Everything here goes through the crate-root re-exports, the way a
//! downstream caller would use the helpers.
//!
//! Run: cargo test --test public_api

use pretty_assertions::assert_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;

use platform_utils::{
    as_list, concat_back, concat_front, ends_with_char, new_array, remove_trailing_char,
    replace_first, replace_last, shuffle, shuffle_with, split, starts_with_char,
    utf8_encoded_length,
};

#[test]
fn shuffle_preserves_the_multiset() {
    let data = vec!["a", "b", "b", "c", "d", "e", "f", "g"];
    let mut out = shuffle(&data);
    assert_eq!(out.len(), data.len());
    out.sort();
    let mut expected = data.clone();
    expected.sort();
    assert_eq!(out, expected);
}

#[test]
fn seeded_shuffle_is_reproducible() {
    let data: Vec<u32> = (0..64).collect();
    let first = shuffle_with(&data, &mut StdRng::seed_from_u64(99));
    let second = shuffle_with(&data, &mut StdRng::seed_from_u64(99));
    assert_eq!(first, second);
}

#[test]
fn concat_grows_by_one_at_the_right_end() {
    let base = vec![10, 20, 30];

    let front = concat_front(0, &base);
    assert_eq!(front.len(), base.len() + 1);
    assert_eq!(front[0], 0);
    assert_eq!(&front[1..], &base[..]);

    let back = concat_back(&base, 40);
    assert_eq!(back.len(), base.len() + 1);
    assert_eq!(back[back.len() - 1], 40);
    assert_eq!(&back[..3], &base[..]);
}

#[test]
fn allocation_and_views_compose() {
    let mut buffer: Vec<i64> = new_array(4);
    assert_eq!(buffer, vec![0, 0, 0, 0]);

    buffer[2] = 7;
    let view = as_list(&buffer);
    assert_eq!(view.len(), 4);
    assert_eq!(view.get(2), Some(7));
    assert!(view.contains(&7));
    assert_eq!(view.iter().sum::<i64>(), 7);
}

#[test]
fn path_segment_processing_round() {
    // A realistic composition: trim a trailing slash, split the segments,
    // inspect and patch them.
    let raw = Some("/usr//local/bin/");

    let trimmed = remove_trailing_char(raw, '/');
    assert_eq!(trimmed, Some("/usr//local/bin"));

    let segments = split(trimmed, '/', 4);
    assert_eq!(
        segments,
        Some(vec!["usr".to_string(), "local".to_string(), "bin".to_string()])
    );

    assert!(starts_with_char(raw, '/'));
    assert!(ends_with_char(raw, '/'));
    assert!(!ends_with_char(trimmed, '/'));
}

#[test]
fn replacement_edits_exactly_one_occurrence() {
    let patched = replace_first(Some("k=v,k=v"), '=', ':');
    assert_eq!(patched.as_deref(), Some("k:v,k=v"));

    let patched = replace_last(Some("k=v,k=v"), '=', ':');
    assert_eq!(patched.as_deref(), Some("k=v,k:v"));
}

#[test]
fn byte_length_counts_utf8_not_chars() {
    let text = Some("naïve 中 𝄞");
    // n,a,v,e + 2-byte ï + space + 3-byte 中 + space + 4-byte 𝄞
    assert_eq!(utf8_encoded_length(text), 15);
    assert_eq!(utf8_encoded_length(Some("")), 0);
    assert_eq!(utf8_encoded_length(None), 0);
}
