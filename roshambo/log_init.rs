use log::SetLoggerError;
use simplelog::*;

// Logs go to stderr, stdout carries the game itself
pub fn init() -> Result<(), SetLoggerError> {
    CombinedLogger::init(vec![TermLogger::new(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )])
}
