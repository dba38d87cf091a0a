//! Score table for the one-ply evaluator
//!
//! A cell is scored by the runs a stone there would extend, one run per axis.

/// Points for a run of a given length through the candidate cell
pub struct RunScore;

impl RunScore {
    /// Five or longer - completes a line
    pub const FIVE: i32 = 10_000;
    pub const FOUR: i32 = 1_000;
    pub const THREE: i32 = 100;
    pub const TWO: i32 = 10;
}

/// Multiplier on the score of the evaluating player's own stone
pub const ATTACK_WEIGHT: f64 = 1.2;

/// Multiplier on the opponent's score at the same cell. Higher than
/// [`ATTACK_WEIGHT`], so blocking wins ties with extending.
pub const DEFENSE_WEIGHT: f64 = 1.5;

/// Points per step closer to the center
pub const CENTER_FACTOR: i32 = 2;

/// Map a run length (candidate stone included) to its score
#[inline]
pub fn run_score(length: usize) -> i32 {
    match length {
        0..=1 => 0,
        2 => RunScore::TWO,
        3 => RunScore::THREE,
        4 => RunScore::FOUR,
        _ => RunScore::FIVE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_score_table() {
        assert_eq!(run_score(1), 0);
        assert_eq!(run_score(2), 10);
        assert_eq!(run_score(3), 100);
        assert_eq!(run_score(4), 1_000);
        assert_eq!(run_score(5), 10_000);
        assert_eq!(run_score(9), 10_000);
    }

    #[test]
    fn test_defense_outweighs_attack() {
        assert!(DEFENSE_WEIGHT > ATTACK_WEIGHT);
    }
}
