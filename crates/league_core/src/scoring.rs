//! Match-day squad selection and scoring.

/// Pick the `squad_size` best roster slots, best first.
///
/// Equal performances are ordered by slot index, so the same performance
/// array always yields the same squad. Works on its own index list; the
/// roster is never reordered.
pub fn select_squad(performance: &[u32], squad_size: usize) -> Vec<usize> {
    let mut slots: Vec<usize> = (0..performance.len()).collect();
    // Stable: ties keep ascending slot order
    slots.sort_by(|&a, &b| performance[b].cmp(&performance[a]));
    slots.truncate(squad_size);
    slots
}

/// Match score: sum of the `squad_size` highest performance values.
pub fn squad_score(performance: &[u32], squad_size: usize) -> u32 {
    select_squad(performance, squad_size)
        .into_iter()
        .map(|slot| performance[slot])
        .sum()
}

#[cfg(test)]
#[path = "scoring_tests.rs"]
mod scoring_tests;
