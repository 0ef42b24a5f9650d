//! Error types for options-flow

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FlowError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Data error: {0}")]
    Data(String),

    #[error("IO error: {0}")]
    IO(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

pub type FlowResult<T> = Result<T, FlowError>;

impl FlowError {
    pub fn invalid_configuration(msg: impl Into<String>) -> Self {
        Self::InvalidConfiguration(msg.into())
    }

    pub fn data(msg: impl Into<String>) -> Self {
        Self::Data(msg.into())
    }

    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::Serialization(msg.into())
    }
}
