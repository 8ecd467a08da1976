#[macro_use]
mod cli;

use std::process::ExitCode;

use clap::Parser;
use cli::display::{Message, MessageType};

// Entry point for the CLI application
fn main() -> ExitCode {
    let settings = match cli::settings::read_settings() {
        Ok(settings) => settings,
        Err(e) => {
            show_message!(
                MessageType::Error,
                Message {
                    action: "Settings".to_string(),
                    details: format!("Failed to read settings, please check {}: {e}", cli::settings::CONFIG_FILE),
                }
            );
            return ExitCode::from(1);
        }
    };

    let cli_result = cli::Cli::parse();

    if let Err(e) = cli::logger::setup_logging(&settings.logger, cli_result.debug) {
        show_message!(
            MessageType::Warning,
            Message {
                action: "Logging".to_string(),
                details: format!("{e}, continuing without logs"),
            }
        );
    }

    match cli::top_command_handler(&settings, &cli_result) {
        Ok(s) => {
            // Empty messages mean the routine already printed its output
            if !s.message.action.is_empty() || !s.message.details.is_empty() {
                show_message!(s.message_type, s.message);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            show_message!(e.message_type, e.message);
            if let Some(err) = e.error {
                eprintln!("{err:?}");
            }
            ExitCode::from(1)
        }
    }
}
