//! Score tracking

use super::state::ScoreBoard;
use crate::tuning::Tuning;

impl ScoreBoard {
    /// Score as shown to the player
    pub fn displayed(&self) -> i64 {
        self.score.floor() as i64
    }

    /// Accumulate one tick of score. Returns the new high score if it improved.
    pub fn record_tick(&mut self, speed: f64, speed_multiplier: f64, tuning: &Tuning) -> Option<i64> {
        let gained = (tuning.base_score_per_tick
            + (speed - tuning.min_speed).max(0.0) * tuning.score_speed_factor)
            * speed_multiplier;
        self.score += gained;

        let shown = self.displayed();
        if shown > self.high_score {
            self.high_score = shown;
            Some(shown)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_speed_scores_base_rate() {
        let tuning = Tuning::default();
        let mut board = ScoreBoard::default();
        board.record_tick(tuning.min_speed, 1.0, &tuning);
        assert!((board.score - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_speed_and_multiplier_scale_score() {
        let tuning = Tuning::default();
        let mut board = ScoreBoard::default();
        board.record_tick(0.7, 2.0, &tuning);
        // (0.1 + 0.4 * 0.25) * 2
        assert!((board.score - 0.4).abs() < 1e-12);
    }

    #[test]
    fn test_high_score_only_moves_up() {
        let tuning = Tuning::default();
        let mut board = ScoreBoard {
            score: 9.95,
            high_score: 10,
        };
        assert_eq!(board.record_tick(tuning.min_speed, 1.0, &tuning), None);
        assert_eq!(board.high_score, 10);
        assert_eq!(board.record_tick(tuning.max_speed, 5.0, &tuning), Some(11));
        assert_eq!(board.high_score, 11);
    }

    #[test]
    fn test_displayed_floors() {
        let board = ScoreBoard {
            score: 41.999,
            high_score: 0,
        };
        assert_eq!(board.displayed(), 41);
    }
}
