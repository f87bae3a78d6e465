use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Movement {
    Landing,
    TakeOff,
}

impl fmt::Display for Movement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Movement::Landing => write!(f, "landing"),
            Movement::TakeOff => write!(f, "take off"),
        }
    }
}

/// Coarse grouping of rejections, for callers that only care why in broad terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Weather,
    State,
    Capacity,
    Config,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AirportError {
    #[error("The weather does not permit {0}")]
    StormyWeather(Movement),

    #[error("This plane has already landed")]
    AlreadyLanded,

    #[error("This plane is already in flight")]
    AlreadyInFlight,

    #[error("This airport is at maximum capacity")]
    AtCapacity,

    #[error("Airport capacity must be at least 1")]
    InvalidCapacity,
}

impl AirportError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AirportError::StormyWeather(_) => ErrorKind::Weather,
            AirportError::AlreadyLanded | AirportError::AlreadyInFlight => ErrorKind::State,
            AirportError::AtCapacity => ErrorKind::Capacity,
            AirportError::InvalidCapacity => ErrorKind::Config,
        }
    }
}

pub type Result<T> = std::result::Result<T, AirportError>;
