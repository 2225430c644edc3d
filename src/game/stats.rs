//! Session statistics across rounds

use super::{Round, RoundState};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// `guess_distribution[n]` counts wins in `n + 1` attempts
    pub guess_distribution: Vec<usize>,
}

impl Statistics {
    /// Count a finished round; rounds still in play are ignored
    pub fn record(&mut self, round: &Round) {
        match round.state() {
            RoundState::Won => {
                self.total_games += 1;
                self.games_won += 1;
                let index = round.attempts().len().saturating_sub(1);
                if self.guess_distribution.len() <= index {
                    self.guess_distribution.resize(index + 1, 0);
                }
                self.guess_distribution[index] += 1;
            }
            RoundState::Exhausted => self.total_games += 1,
            RoundState::Setup | RoundState::InProgress => {}
        }
    }

    /// Win rate as a percentage, 0 before any game
    #[must_use]
    #[allow(clippy::cast_precision_loss)] // Game counts stay far below f64 precision
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}
