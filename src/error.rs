use std::io::ErrorKind;

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum EdgeError {
    #[error("Edge {from} - {to} must have a positive weight")]
    NonPositiveWeight { from: String, to: String },
    #[error("Edge location name is empty")]
    EmptyLocation,
    #[error("Network cannot hold any more locations")]
    TooManyLocations,
}

#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum ParseError {
    #[error("Edge record is missing the {0} field")]
    MissingField(&'static str),
    #[error("Edge weight is not a valid integer: {0:?}")]
    InvalidWeight(String),
    #[error("Edge record is not valid UTF-8")]
    InvalidEncoding,
    #[error(transparent)]
    Edge(#[from] EdgeError),
}

#[derive(Error, Debug, PartialEq, Eq, Clone, Copy)]
pub enum ReadError {
    #[error("Edge list I/O error: {0:?}")]
    Io(ErrorKind),
}

#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum RouteError {
    #[error("No route found from {origin} to {destination}")]
    RouteNotFound { origin: String, destination: String },
}

impl From<std::io::Error> for ReadError {
    fn from(error: std::io::Error) -> Self {
        Self::Io(error.kind())
    }
}
