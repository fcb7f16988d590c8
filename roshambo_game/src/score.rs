use crate::outcome::Outcome;

/// Running totals for one play session. Ties count as rounds but score for no one,
/// so `player_score + computer_score <= rounds` always holds.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub struct ScoreState {
    player_score: u32,
    computer_score: u32,
    rounds: u32,
}

impl ScoreState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn player_score(&self) -> u32 {
        self.player_score
    }

    pub fn computer_score(&self) -> u32 {
        self.computer_score
    }

    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    /// Counts one more round. Once the round counter is full the score stops moving.
    pub fn record(&mut self, outcome: Outcome) {
        let rounds = match self.rounds.checked_add(1) {
            Some(rounds) => rounds,
            None => return,
        };
        self.rounds = rounds;
        match outcome {
            Outcome::PlayerWins => self.player_score = self.player_score.saturating_add(1),
            Outcome::ComputerWins => self.computer_score = self.computer_score.saturating_add(1),
            Outcome::Tie => {}
        }
    }

    pub fn ties(&self) -> u32 {
        self.rounds
            .saturating_sub(self.player_score)
            .saturating_sub(self.computer_score)
    }

    pub fn leader(&self) -> Outcome {
        if self.player_score > self.computer_score {
            Outcome::PlayerWins
        } else if self.player_score < self.computer_score {
            Outcome::ComputerWins
        } else {
            Outcome::Tie
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

pub fn apply_outcome(score: ScoreState, outcome: Outcome) -> ScoreState {
    let mut next = score;
    next.record(outcome);
    next
}
