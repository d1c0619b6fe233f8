use std::fmt;

#[derive(Debug)]
pub enum Error {
    /// site.toml could not be read as TOML.
    ConfigParse(String),
    /// A configuration value parsed but is not usable.
    InvalidConfig { field: &'static str, message: String },
    IoError(std::io::Error),
    /// A content record did not match the expected shape.
    InvalidContent(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ConfigParse(msg) => write!(f, "Configuration parse error: {}", msg),
            Error::InvalidConfig { field, message } => {
                write!(f, "Invalid configuration for '{}': {}", field, message)
            }
            Error::IoError(err) => write!(f, "IO error: {}", err),
            Error::InvalidContent(msg) => write!(f, "Invalid content record: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::IoError(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::ConfigParse(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::InvalidContent(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
