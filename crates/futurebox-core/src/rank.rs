//! Leaderboard ranking.

use crate::types::Capsule;

/// Sort capsules by descending numeric vote count.
///
/// The sort is stable: ties, and capsules whose vote field does not
/// parse (sentinel), keep their input relative order.
pub fn rank_by_votes(mut capsules: Vec<Capsule>) -> Vec<Capsule> {
    capsules.sort_by(|a, b| b.votes().cmp(&a.votes()));
    capsules
}
