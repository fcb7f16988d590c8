use log::trace;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::moves::{random_move, Move};
use crate::outcome::{decide_outcome, Outcome};
use crate::score::ScoreState;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Round {
    pub player: Move,
    pub computer: Move,
    pub outcome: Outcome,
}

/// A single play session against the computer. The session owns its score, so
/// separate sessions never see each other's rounds.
#[derive(Debug)]
pub struct Session<R = StdRng> {
    rng: R,
    score: ScoreState,
}

impl Session<StdRng> {
    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Reproducible session, the computer plays the same sequence for the same seed.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Session<R> {
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng,
            score: ScoreState::new(),
        }
    }

    /// Plays one round with the computer's move drawn from this session's source.
    pub fn play_round(&mut self, player: Move) -> (Round, ScoreState) {
        let computer = random_move(&mut self.rng);
        self.play_against(player, computer)
    }

    pub fn play_against(&mut self, player: Move, computer: Move) -> (Round, ScoreState) {
        let outcome = decide_outcome(player, computer);
        self.score.record(outcome);
        trace!(
            "Round {}: {} vs {} => {:?}",
            self.score.rounds(),
            player,
            computer,
            outcome
        );

        let round = Round {
            player,
            computer,
            outcome,
        };
        (round, self.score)
    }

    pub fn score(&self) -> ScoreState {
        self.score
    }

    pub fn reset(&mut self) {
        self.score.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::MOVES;

    #[test]
    fn concrete_rounds() {
        let mut session = Session::seeded(1);
        let (round, score) = session.play_against(Move::Rock, Move::Scissors);
        assert_eq!(round.outcome, Outcome::PlayerWins);
        assert_eq!((score.player_score(), score.computer_score()), (1, 0));

        let mut session = Session::seeded(1);
        let (round, score) = session.play_against(Move::Scissors, Move::Scissors);
        assert_eq!(round.outcome, Outcome::Tie);
        assert_eq!((score.player_score(), score.computer_score()), (0, 0));
    }

    #[test]
    fn sequence_scores() {
        let mut session = Session::seeded(1);
        session.play_against(Move::Rock, Move::Paper);
        session.play_against(Move::Rock, Move::Scissors);
        let (round, score) = session.play_against(Move::Paper, Move::Paper);

        assert_eq!(round.outcome, Outcome::Tie);
        assert_eq!(score.player_score(), 1);
        assert_eq!(score.computer_score(), 1);
        assert_eq!(score.rounds(), 3);
        assert_eq!(session.score(), score);
    }

    #[test]
    fn play_round_is_consistent() {
        let mut session = Session::seeded(99);
        for i in 0..300 {
            let player = MOVES[i % 3];
            let before = session.score();
            let (round, after) = session.play_round(player);

            assert_eq!(round.player, player);
            assert_eq!(round.outcome, decide_outcome(round.player, round.computer));
            assert_eq!(after.rounds(), before.rounds() + 1);
            assert!(after.player_score() + after.computer_score() <= after.rounds());
            assert_eq!(
                after.player_score() + after.computer_score() + after.ties(),
                after.rounds()
            );
        }
    }

    #[test]
    fn same_seed_same_game() {
        let mut a = Session::seeded(2021);
        let mut b = Session::seeded(2021);
        for _ in 0..50 {
            assert_eq!(a.play_round(Move::Paper), b.play_round(Move::Paper));
        }
    }

    #[test]
    fn sessions_are_independent() {
        let mut a = Session::seeded(3);
        let mut b = Session::seeded(4);
        a.play_against(Move::Rock, Move::Scissors);
        a.play_against(Move::Paper, Move::Rock);
        b.play_against(Move::Rock, Move::Paper);

        assert_eq!(a.score().player_score(), 2);
        assert_eq!(a.score().computer_score(), 0);
        assert_eq!(b.score().player_score(), 0);
        assert_eq!(b.score().computer_score(), 1);
    }

    #[test]
    fn reset_clears_score() {
        let mut session = Session::with_rng(StdRng::seed_from_u64(5));
        session.play_round(Move::Rock);
        session.play_round(Move::Rock);
        session.reset();
        assert_eq!(session.score(), ScoreState::new());
    }
}
