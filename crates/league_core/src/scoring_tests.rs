use super::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Reference: sort a copy descending and sum the head.
fn top_sum(values: &[u32], squad: usize) -> u32 {
    let mut sorted = values.to_vec();
    sorted.sort_unstable_by(|a, b| b.cmp(a));
    sorted.iter().take(squad).sum()
}

#[test]
fn sums_best_eleven_of_ascending_roster() {
    let roster: Vec<u32> = (1..=25).collect();
    // 15 + 16 + ... + 25
    assert_eq!(squad_score(&roster, 11), 220);
}

#[test]
fn sums_best_of_descending_roster() {
    let roster: Vec<u32> = (1..=25).rev().collect();
    assert_eq!(squad_score(&roster, 11), 220);
}

#[test]
fn duplicates_are_counted_once_per_slot() {
    let roster = vec![50, 50, 50, 10, 10];
    assert_eq!(squad_score(&roster, 2), 100);
    assert_eq!(squad_score(&roster, 4), 160);
}

#[test]
fn all_equal_roster() {
    let roster = vec![7; 25];
    assert_eq!(squad_score(&roster, 11), 77);
}

#[test]
fn ties_resolve_by_slot_order() {
    let roster = vec![5, 9, 5, 9, 1];
    assert_eq!(select_squad(&roster, 3), vec![1, 3, 0]);
}

#[test]
fn roster_is_not_mutated() {
    let roster = vec![3, 1, 2];
    let before = roster.clone();
    let _ = squad_score(&roster, 2);
    assert_eq!(roster, before);
}

#[test]
fn matches_reference_on_random_rosters() {
    let mut rng = StdRng::seed_from_u64(0xC0FFEE);
    for roster_size in 2..30 {
        for squad in 1..roster_size {
            let roster: Vec<u32> = (0..roster_size).map(|_| rng.gen_range(1..=99)).collect();
            assert_eq!(
                squad_score(&roster, squad),
                top_sum(&roster, squad),
                "roster {:?}, squad {}",
                roster,
                squad
            );
        }
    }
}
