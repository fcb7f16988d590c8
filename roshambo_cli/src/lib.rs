use clap::{App, Arg, ArgMatches};
use log::info;
use std::default;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub seed: Option<u64>,
    pub rounds: Option<u32>,
    pub log_rounds: bool,
}

impl Config {
    /// Parses the process arguments, exiting with a usage message on bad input.
    pub fn new() -> Self {
        let args = Self::app().get_matches();
        Self::from_matches(&args).unwrap_or_else(|e| {
            eprintln!("error: {}", e);
            std::process::exit(2);
        })
    }

    pub fn from_args<I, T>(args: I) -> Result<Self, String>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let args = Self::app()
            .get_matches_from_safe(args)
            .map_err(|e| e.message)?;
        Self::from_matches(&args)
    }

    fn app() -> App<'static, 'static> {
        let version = env!("CARGO_PKG_VERSION");
        let authors = env!("CARGO_PKG_AUTHORS");

        App::new("Roshambo")
            .version(version)
            .author(authors)
            .arg(
                Arg::with_name("SEED")
                    .short("s")
                    .takes_value(true)
                    .help("If specified, the computer's choices are seeded for a reproducible game"),
            )
            .arg(
                Arg::with_name("ROUNDS")
                    .short("r")
                    .takes_value(true)
                    .help("If specified, plays this many rounds with random player moves and prints the result"),
            )
            .arg(
                Arg::with_name("LOG_ROUNDS")
                    .short("l")
                    .help("If specified, every round will be logged"),
            )
    }

    fn from_matches(args: &ArgMatches) -> Result<Self, String> {
        let seed = parse_value::<u64>(args, "SEED")?;
        let rounds = parse_value::<u32>(args, "ROUNDS")?;
        let log_rounds = args.is_present("LOG_ROUNDS");

        Ok(Self {
            seed,
            rounds,
            log_rounds,
        })
    }

    pub fn log(&self) {
        info!("[Config]");

        let mut default = false;
        if self == &Config::default() {
            default = true;
        }

        info!("Default: {}", default);
        info!("| SEED: {:?}", self.seed);
        info!("| ROUNDS: {:?}", self.rounds);
        info!("| LOG_ROUNDS: {}", self.log_rounds);
    }
}

fn parse_value<T: std::str::FromStr>(args: &ArgMatches, name: &str) -> Result<Option<T>, String> {
    match args.value_of(name) {
        Some(raw) => raw
            .parse::<T>()
            .map(Some)
            .map_err(|_| format!("invalid value '{}' for {}", raw, name)),
        None => Ok(None),
    }
}

impl default::Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            rounds: None,
            log_rounds: false,
        }
    }
}
