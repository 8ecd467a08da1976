//! Messages shown to the user on stderr. Command results go to stdout.

use std::io::{stderr, Result as IoResult, Write};

use crossterm::{
    execute,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    tty::IsTty,
};

/// Width of the action column in terminal output
pub const ACTION_WIDTH: usize = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    Success,
    Warning,
    Error,
}

impl MessageType {
    fn color(&self) -> Color {
        match self {
            MessageType::Success => Color::Green,
            MessageType::Warning => Color::Yellow,
            MessageType::Error => Color::Red,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Message {
    pub action: String,
    pub details: String,
}

impl Message {
    pub fn new(action: String, details: String) -> Message {
        Message { action, details }
    }
}

macro_rules! show_message {
    ($message_type:expr, $message:expr) => {
        $crate::cli::display::show_message_wrapper($message_type, $message)
    };
}

pub fn show_message_wrapper(message_type: MessageType, message: Message) {
    tracing::debug!(
        "Showing {:?} message: {} {}",
        message_type,
        message.action,
        message.details
    );

    let mut stderr = stderr();
    let no_ansi = !stderr.is_tty();
    if let Err(e) = write_message_to(&mut stderr, message_type, &message, no_ansi) {
        tracing::warn!("Failed to write message to stderr: {}", e);
    }
}

/// Writes `[action right-aligned in ACTION_WIDTH] details`, styling the action column unless
/// `no_ansi` is set.
fn write_message_to<W: Write>(
    writer: &mut W,
    message_type: MessageType,
    message: &Message,
    no_ansi: bool,
) -> IoResult<()> {
    let action = message
        .action
        .chars()
        .take(ACTION_WIDTH)
        .collect::<String>();
    let padded_action = format!("{action:>ACTION_WIDTH$}");

    if !no_ansi {
        execute!(
            writer,
            SetForegroundColor(message_type.color()),
            SetAttribute(Attribute::Bold)
        )?;
    }

    execute!(writer, Print(&padded_action))?;

    if !no_ansi {
        execute!(writer, ResetColor, SetAttribute(Attribute::Reset))?;
    }

    execute!(writer, Print(" "), Print(&message.details), Print("\n"))?;
    Ok(())
}
