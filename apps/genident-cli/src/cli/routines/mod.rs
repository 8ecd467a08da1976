//! # Routines
//!
//! Every command is run by a routine: a plain function that prints its results to stdout and
//! returns a `RoutineSuccess`, or a `RoutineFailure` carrying the message to show the user and
//! the error that caused it.

use crate::cli::display::{Message, MessageType};

pub mod naming;
pub mod profile_info;
pub mod visibility;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug)]
pub struct RoutineSuccess {
    pub message: Message,
    pub message_type: MessageType,
}

impl RoutineSuccess {
    pub fn success(message: Message) -> Self {
        Self {
            message,
            message_type: MessageType::Success,
        }
    }

    /// Output has already been printed, nothing else to show.
    pub fn silent() -> Self {
        Self::success(Message::new(String::new(), String::new()))
    }
}

#[derive(Debug)]
pub struct RoutineFailure {
    pub message: Message,
    pub message_type: MessageType,
    pub error: Option<anyhow::Error>,
}

impl RoutineFailure {
    pub fn new<F: Into<anyhow::Error>>(message: Message, error: F) -> Self {
        Self {
            message,
            message_type: MessageType::Error,
            error: Some(error.into()),
        }
    }

    /// Create a RoutineFailure without an underlying error
    pub fn error(message: Message) -> Self {
        Self {
            message,
            message_type: MessageType::Error,
            error: None,
        }
    }
}
