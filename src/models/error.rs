use std::fmt;

/// Errors surfaced by the collaborators around the ranking core (text
/// sources, reporters, and the CLI). Normalizing, counting, and ranking are
/// total and never produce one of these.
#[derive(Debug)]
pub enum Error {
    IoError(std::io::Error),
    CsvError(csv::Error),
    Other(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::IoError(err) => write!(f, "IO Error: {}", err),
            Error::CsvError(err) => write!(f, "CSV Error: {}", err),
            Error::Other(msg) => write!(f, "Other Error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::IoError(err) => Some(err),
            Error::CsvError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<String> for Error {
    fn from(msg: String) -> Error {
        Error::Other(msg)
    }
}

impl From<&str> for Error {
    fn from(msg: &str) -> Error {
        Error::Other(msg.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Error {
        Error::IoError(err)
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Error {
        Error::CsvError(err)
    }
}
