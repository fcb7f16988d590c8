use roshambo_game::Move;

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Command {
    Play(Move),
    Score,
    Reset,
    Help,
    Quit,
}

/// Reads one line of player input. Blank lines are `None`, anything that is
/// neither a command nor a move label is an invalid move.
pub fn parse(line: &str) -> Result<Option<Command>, roshambo_game::Error> {
    let word = line.trim().to_lowercase();
    let command = match word.as_str() {
        "" => return Ok(None),
        "score" => Command::Score,
        "reset" => Command::Reset,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        _ => Command::Play(word.parse()?),
    };
    Ok(Some(command))
}
