#[derive(Debug)]
pub enum RoshamboError {
    Io(std::io::Error),
    Signal(ctrlc::Error),

    Default(String),
}

impl From<std::io::Error> for RoshamboError {
    fn from(err: std::io::Error) -> RoshamboError {
        RoshamboError::Io(err)
    }
}

impl From<ctrlc::Error> for RoshamboError {
    fn from(err: ctrlc::Error) -> RoshamboError {
        RoshamboError::Signal(err)
    }
}

impl From<log::SetLoggerError> for RoshamboError {
    fn from(err: log::SetLoggerError) -> RoshamboError {
        RoshamboError::Default(err.to_string())
    }
}

impl std::fmt::Display for RoshamboError {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> Result<(), std::fmt::Error> {
        match self {
            RoshamboError::Io(err) => write!(fmt, "io: {}", err),
            RoshamboError::Signal(err) => write!(fmt, "signal handler: {}", err),
            RoshamboError::Default(msg) => write!(fmt, "{}", msg),
        }
    }
}
