//! Scoring properties over arbitrary codes.

use mastermind_core::{score, score_codes, Code, Color, Feedback, COLOR_COUNT};
use proptest::prelude::*;

use Color::*;

fn color() -> impl Strategy<Value = Color> {
    prop::sample::select(Color::ALL.to_vec())
}

fn code() -> impl Strategy<Value = Code> {
    prop::array::uniform4(color()).prop_map(Code::new)
}

fn code_from(palette: Vec<Color>) -> impl Strategy<Value = Code> {
    prop::array::uniform4(prop::sample::select(palette)).prop_map(Code::new)
}

/// Secret and guess drawn from two non-overlapping palettes.
fn disjoint_codes() -> impl Strategy<Value = (Code, Code)> {
    (Just(Color::ALL.to_vec()).prop_shuffle(), 1..COLOR_COUNT).prop_flat_map(|(colors, split)| {
        let (left, right) = colors.split_at(split);
        (code_from(left.to_vec()), code_from(right.to_vec()))
    })
}

/// Total color matches computed by counting, independent of the two-pass walk.
fn shared_colors(secret: &Code, guess: &Code) -> u8 {
    Color::ALL
        .iter()
        .map(|&c| {
            let in_secret = secret.iter().filter(|&p| p == c).count();
            let in_guess = guess.iter().filter(|&p| p == c).count();
            in_secret.min(in_guess) as u8
        })
        .sum()
}

// =============================================================================
// Known Cases
// =============================================================================

#[test]
fn test_exact_pass_runs_before_color_pass() {
    // Slot 0 Red and slot 2 Blue are exact; the secret has no pegs left
    // for the remaining Blues to claim.
    let feedback = score(&[Red, Red, Blue, Green], &[Red, Blue, Blue, Blue]).unwrap();
    assert_eq!(feedback, Feedback::new(2, 0));
}

#[test]
fn test_exact_matches_use_up_secret_duplicates() {
    let feedback = score(&[Blue, Blue, Blue, Blue], &[Blue, Green, Green, Blue]).unwrap();
    assert_eq!(feedback, Feedback::new(2, 0));
}

#[test]
fn test_one_secret_peg_satisfies_one_guess_peg() {
    let feedback = score(&[Red, Green, Grey, Orange], &[Yellow, Red, Red, Red]).unwrap();
    assert_eq!(feedback, Feedback::new(0, 1));
}

#[test]
fn test_guess_duplicates_matched_against_secret_duplicates() {
    let feedback = score(&[Red, Red, Green, Green], &[Green, Green, Red, Red]).unwrap();
    assert_eq!(feedback, Feedback::new(0, 4));
}

#[test]
fn test_mixed_exact_and_color_only() {
    let feedback = score(&[Orange, Yellow, Grey, Blue], &[Orange, Grey, Yellow, Red]).unwrap();
    assert_eq!(feedback, Feedback::new(1, 2));
}

#[test]
fn test_wrong_lengths_rejected() {
    assert!(score(&[], &[Red, Red, Red, Red]).is_err());
    assert!(score(&[Red, Red, Red, Red], &[]).is_err());
    assert!(score(&[Red; 5], &[Red; 5]).is_err());
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn prop_deterministic(secret in code(), guess in code()) {
        prop_assert_eq!(score_codes(&secret, &guess), score_codes(&secret, &guess));
    }

    #[test]
    fn prop_counts_bounded(secret in code(), guess in code()) {
        let feedback = score_codes(&secret, &guess);
        prop_assert!(feedback.exact() + feedback.color_only() <= 4);
    }

    #[test]
    fn prop_perfect_guess(secret in code()) {
        prop_assert_eq!(score_codes(&secret, &secret), Feedback::new(4, 0));
    }

    #[test]
    fn prop_disjoint_colors_score_nothing((secret, guess) in disjoint_codes()) {
        prop_assert_eq!(score_codes(&secret, &guess), Feedback::new(0, 0));
    }

    #[test]
    fn prop_symmetric(a in code(), b in code()) {
        prop_assert_eq!(score_codes(&a, &b), score_codes(&b, &a));
    }

    #[test]
    fn prop_total_matches_equal_shared_colors(secret in code(), guess in code()) {
        let feedback = score_codes(&secret, &guess);
        prop_assert_eq!(feedback.exact() + feedback.color_only(), shared_colors(&secret, &guess));
    }

    #[test]
    fn prop_slice_and_code_paths_agree(secret in code(), guess in code()) {
        prop_assert_eq!(
            score(secret.pegs(), guess.pegs()).unwrap(),
            score_codes(&secret, &guess)
        );
    }
}
