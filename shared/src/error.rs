use serde_json;
use std::fmt;

#[derive(Debug)]
pub enum ApplicationError {
    InvalidEvent(String),
    ContainerError(String),
    InternalError(String),
}

impl std::error::Error for ApplicationError {}

impl fmt::Display for ApplicationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ApplicationError::InvalidEvent(msg) => write!(f, "InvalidEvent: {}", msg),
            ApplicationError::ContainerError(msg) => write!(f, "ContainerError: {}", msg),
            ApplicationError::InternalError(msg) => write!(f, "InternalError: {}", msg),
        }
    }
}

impl From<serde_json::error::Error> for ApplicationError {
    fn from(value: serde_json::error::Error) -> ApplicationError {
        ApplicationError::InvalidEvent(format!("Cannot parse payload {}", value))
    }
}
