use super::types::{Mark, Outcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundResult {
    HumanWon,
    BotWon,
    Tie,
}

impl RoundResult {
    /// `None` while the game is still running.
    pub fn from_outcome(outcome: Outcome, human_mark: Mark) -> Option<Self> {
        match outcome {
            Outcome::InProgress => None,
            Outcome::Draw => Some(RoundResult::Tie),
            Outcome::XWon | Outcome::OWon => {
                if outcome.winner() == Some(human_mark) {
                    Some(RoundResult::HumanWon)
                } else {
                    Some(RoundResult::BotWon)
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scoreboard {
    pub human_wins: u32,
    pub bot_wins: u32,
    pub ties: u32,
}

impl Scoreboard {
    pub fn record(&mut self, result: RoundResult) {
        match result {
            RoundResult::HumanWon => self.human_wins += 1,
            RoundResult::BotWon => self.bot_wins += 1,
            RoundResult::Tie => self.ties += 1,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn games_played(&self) -> u32 {
        self.human_wins + self.bot_wins + self.ties
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_follows_human_mark() {
        assert_eq!(
            RoundResult::from_outcome(Outcome::OWon, Mark::O),
            Some(RoundResult::HumanWon)
        );
        assert_eq!(
            RoundResult::from_outcome(Outcome::OWon, Mark::X),
            Some(RoundResult::BotWon)
        );
        assert_eq!(
            RoundResult::from_outcome(Outcome::Draw, Mark::X),
            Some(RoundResult::Tie)
        );
        assert_eq!(RoundResult::from_outcome(Outcome::InProgress, Mark::X), None);
    }

    #[test]
    fn test_record_and_reset() {
        let mut scores = Scoreboard::default();
        scores.record(RoundResult::BotWon);
        scores.record(RoundResult::Tie);
        scores.record(RoundResult::Tie);

        assert_eq!(scores.bot_wins, 1);
        assert_eq!(scores.ties, 2);
        assert_eq!(scores.games_played(), 3);

        scores.reset();
        assert_eq!(scores, Scoreboard::default());
    }
}
