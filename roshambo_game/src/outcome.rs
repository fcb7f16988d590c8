use crate::moves::Move;

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Outcome {
    PlayerWins,
    ComputerWins,
    Tie,
}

impl Outcome {
    /// The same outcome seen from the other side of the table.
    pub fn invert(&self) -> Self {
        match self {
            Self::PlayerWins => Self::ComputerWins,
            Self::ComputerWins => Self::PlayerWins,
            _ => Self::Tie,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::PlayerWins => "Player wins!",
            Self::ComputerWins => "Computer wins!",
            Self::Tie => "It's a tie!",
        }
    }
}

pub fn decide_outcome(player: Move, computer: Move) -> Outcome {
    if player == computer {
        Outcome::Tie
    } else if player.beats(computer) {
        Outcome::PlayerWins
    } else {
        Outcome::ComputerWins
    }
}
