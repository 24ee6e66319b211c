use std::fmt;

#[derive(Debug)]
pub enum GatewayError {
    Transport(String),
    Status(u16),
    Decode(String),
    InvalidQuery(String),
}

impl fmt::Display for GatewayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transport(msg) => write!(f, "Transport failure: {msg}"),
            Self::Status(code) => write!(f, "Server returned status {code}"),
            Self::Decode(msg) => write!(f, "Malformed response: {msg}"),
            Self::InvalidQuery(term) => write!(f, "Not a numeric user id: {term:?}"),
        }
    }
}

impl std::error::Error for GatewayError {}
