use log::{debug, info, warn};
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::{self, BufRead, Write};
use std::sync::Arc;

use roshambo_cli::Config;
use roshambo_game::{random_move, Round, ScoreState, Session};

mod command;
mod display;
mod error;
mod log_init;
use command::Command;
use error::RoshamboError;

pub struct Game {
    config: Config,
    session: Arc<Mutex<Session>>,
}

impl Game {
    fn new(config: Config) -> Self {
        let session = match config.seed {
            Some(seed) => Session::seeded(seed),
            None => Session::from_entropy(),
        };

        Self {
            config,
            session: Arc::new(Mutex::new(session)),
        }
    }

    /// Prints the final score on Ctrl-C (and SIGTERM) before the process goes away.
    fn register_interrupt_handler(&self) -> Result<(), RoshamboError> {
        let session = self.session.clone();
        ctrlc::set_handler(move || {
            let score = session.lock().score();
            println!();
            println!("{}", display::summary_text(&score));
            info!("Interrupted after {} round(s)", score.rounds());
            std::process::exit(0);
        })?;
        Ok(())
    }

    /// Reads commands from `input` until `quit` or end of input, writing the game to `output`.
    fn start<R: BufRead, W: Write>(
        &mut self,
        input: R,
        output: &mut W,
    ) -> Result<ScoreState, RoshamboError> {
        let mut lines = input.lines();

        loop {
            write!(output, "{}", display::PROMPT)?;
            output.flush()?;

            let line = match lines.next() {
                Some(line) => line?,
                // End of input ends the session like 'quit'
                None => {
                    writeln!(output)?;
                    break;
                }
            };

            let command = match command::parse(&line) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(e) => {
                    warn!("Ignoring input: {}", e);
                    writeln!(output, "{}", e)?;
                    continue;
                }
            };

            match command {
                Command::Play(player) => {
                    let (round, score) = self.session.lock().play_round(player);
                    self.report(&round, &score, output)?;
                }
                Command::Score => {
                    let score = self.session.lock().score();
                    writeln!(output, "{}", display::score_text(&score))?;
                }
                Command::Reset => {
                    self.session.lock().reset();
                    info!("Score reset");
                    writeln!(output, "{}", display::score_text(&ScoreState::new()))?;
                }
                Command::Help => writeln!(output, "{}", display::HELP)?,
                Command::Quit => break,
            }
        }

        Ok(self.session.lock().score())
    }

    /// Plays `rounds` rounds where the player's hand is random as well.
    fn autoplay<W: Write>(&mut self, rounds: u32, output: &mut W) -> Result<ScoreState, RoshamboError> {
        // Player draws from its own source so a seed still fixes both sides
        let mut player_rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(1)),
            None => StdRng::from_entropy(),
        };

        for _ in 0..rounds {
            let player = random_move(&mut player_rng);
            let (round, score) = self.session.lock().play_round(player);
            if self.config.log_rounds {
                self.report(&round, &score, output)?;
            }
        }

        Ok(self.session.lock().score())
    }

    fn report<W: Write>(&self, round: &Round, score: &ScoreState, output: &mut W) -> io::Result<()> {
        if self.config.log_rounds {
            info!(
                "Round {} | {} vs {} => {:?}",
                score.rounds(),
                round.player,
                round.computer,
                round.outcome
            );
        } else {
            debug!("Round {} => {:?}", score.rounds(), round.outcome);
        }

        writeln!(output, "{}", display::round_text(round))?;
        writeln!(output, "{}", display::score_text(score))
    }
}

fn run() -> Result<(), RoshamboError> {
    log_init::init()?;
    info!("Starting Roshambo...");

    let config = Config::new();
    config.log();

    let mut game = Game::new(config);
    game.register_interrupt_handler()?;

    let stdin = io::stdin();
    // Unlocked handle, the interrupt handler prints too
    let mut output = io::stdout();
    let score = match game.config.rounds {
        Some(rounds) => {
            info!("Auto-playing {} round(s)", rounds);
            game.autoplay(rounds, &mut output)?
        }
        None => game.start(stdin.lock(), &mut output)?,
    };

    println!("{}", display::summary_text(&score));
    info!(
        "Session over | Player: {}, Computer: {}, Ties: {}",
        score.player_score(),
        score.computer_score(),
        score.ties()
    );
    Ok(())
}

fn main() {
    run().unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(2);
    });
}
