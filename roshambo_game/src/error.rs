#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A value that names none of rock, paper or scissors.
    InvalidMove(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> Result<(), std::fmt::Error> {
        match self {
            Error::InvalidMove(value) => write!(
                fmt,
                "invalid move '{}', expected one of rock, paper or scissors",
                value
            ),
        }
    }
}

impl std::error::Error for Error {}
