use rand::distributions::{Distribution, Standard};
use rand::Rng;
use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Move {
    Rock = 0,
    Paper = 1,
    Scissors = 2,
}

pub const MOVES: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

impl Move {
    /// The move this one defeats.
    pub fn beats_what(&self) -> Move {
        match self {
            Move::Rock => Move::Scissors,
            Move::Scissors => Move::Paper,
            Move::Paper => Move::Rock,
        }
    }

    /// The move that defeats this one.
    pub fn beaten_by(&self) -> Move {
        match self {
            Move::Rock => Move::Paper,
            Move::Paper => Move::Scissors,
            Move::Scissors => Move::Rock,
        }
    }

    pub fn beats(&self, other: Move) -> bool {
        self.beats_what() == other
    }

    pub fn label(&self) -> &'static str {
        match self {
            Move::Rock => "rock",
            Move::Paper => "paper",
            Move::Scissors => "scissors",
        }
    }
}

/// Draws a move uniformly from the supplied randomness source.
pub fn random_move<R: Rng + ?Sized>(rng: &mut R) -> Move {
    rng.gen()
}

impl Distribution<Move> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Move {
        MOVES[rng.gen_range(0..MOVES.len())]
    }
}

impl FromStr for Move {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "rock" => Ok(Move::Rock),
            "paper" => Ok(Move::Paper),
            "scissors" => Ok(Move::Scissors),
            _ => Err(Error::InvalidMove(s.to_owned())),
        }
    }
}

impl TryFrom<u8> for Move {
    type Error = Error;

    fn try_from(val: u8) -> Result<Self, Self::Error> {
        match val {
            0 => Ok(Move::Rock),
            1 => Ok(Move::Paper),
            2 => Ok(Move::Scissors),
            _ => Err(Error::InvalidMove(val.to_string())),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
