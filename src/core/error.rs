use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimError {
    /// Malformed or missing region table entry. Fatal at startup.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Corrupt save blob or out-of-range roster index. A load that returns
    /// this has left the world state untouched.
    #[error("Persistence error: {0}")]
    Persistence(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SimError>;
