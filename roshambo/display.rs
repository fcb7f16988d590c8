use roshambo_game::{Outcome, Round, ScoreState};

pub const PROMPT: &str = "Choose rock, paper or scissors ('help' for commands): ";

pub const HELP: &str = "\
Commands:
  rock | paper | scissors   play a round
  score                     show the current score
  reset                     start the score over
  quit | exit               end the session";

pub fn round_text(round: &Round) -> String {
    format!(
        "You chose {}. Computer chose {}. {}",
        round.player,
        round.computer,
        round.outcome.message()
    )
}

pub fn score_text(score: &ScoreState) -> String {
    format!(
        "Score - Player: {}, Computer: {}",
        score.player_score(), score.computer_score()
    )
}

pub fn summary_text(score: &ScoreState) -> String {
    let verdict = match score.leader() {
        Outcome::PlayerWins => "You take the session!",
        Outcome::ComputerWins => "The computer takes the session.",
        Outcome::Tie => "The session ends even.",
    };
    format!(
        "{} round(s), {} tie(s). {} {}",
        score.rounds(),
        score.ties(),
        score_text(score),
        verdict
    )
}
