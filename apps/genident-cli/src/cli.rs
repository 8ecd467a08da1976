#[macro_use]
pub(crate) mod display;

mod commands;
pub mod logger;
pub mod routines;
pub mod settings;

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use commands::Commands;
use genident::LanguageProfile;
use tracing::{debug, info};

use crate::cli::display::Message;
use crate::cli::routines::{naming, profile_info, visibility, RoutineFailure, RoutineSuccess};
use crate::cli::settings::Settings;

#[derive(Parser)]
#[command(author, version, about, long_about = None, arg_required_else_help(true), next_display_order = None)]
pub struct Cli {
    /// Turn debugging information on
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Built-in language profile to name for (go, typescript, python)
    #[arg(long, global = true, conflicts_with = "profile_file")]
    pub profile: Option<String>,

    /// TOML file describing a custom language profile
    #[arg(long, global = true, value_name = "PATH")]
    pub profile_file: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Flags win over settings; a profile file wins over a profile name at the same level.
fn resolve_profile(settings: &Settings, cli: &Cli) -> Result<Arc<LanguageProfile>, RoutineFailure> {
    let from_file = |path: &PathBuf| {
        LanguageProfile::from_file(path)
            .map(Arc::new)
            .map_err(|e| {
                RoutineFailure::new(
                    Message::new(
                        "Profile".to_string(),
                        format!("Failed to load language profile from {}", path.display()),
                    ),
                    e,
                )
            })
    };
    let builtin = |name: &str| {
        LanguageProfile::builtin(name).map_err(|e| {
            RoutineFailure::error(Message::new("Profile".to_string(), e.to_string()))
        })
    };

    match (&cli.profile_file, &cli.profile) {
        (Some(path), _) => from_file(path),
        (None, Some(name)) => builtin(name),
        (None, None) => match &settings.naming.profile_file {
            Some(path) => from_file(path),
            None => builtin(&settings.naming.profile),
        },
    }
}

pub fn top_command_handler(
    settings: &Settings,
    cli: &Cli,
) -> Result<RoutineSuccess, RoutineFailure> {
    let profile = resolve_profile(settings, cli)?;
    debug!("Using language profile '{}'", profile.name);

    let format = if cli.json {
        routines::OutputFormat::Json
    } else {
        routines::OutputFormat::Text
    };

    match &cli.command {
        Commands::Sanitize { names } => {
            info!("Running sanitize command");
            naming::sanitize(profile, names, format)
        }
        Commands::Suggest { inputs, claim } => {
            info!("Running suggest command");
            naming::suggest(profile, inputs, *claim, format)
        }
        Commands::Claim {
            names,
            global,
            depth,
        } => {
            info!("Running claim command");
            naming::claim(profile, names, *global, *depth, format)
        }
        Commands::Public { name } => {
            info!("Running public command");
            visibility::public(&profile, name, format)
        }
        Commands::Private { name } => {
            info!("Running private command");
            visibility::private(&profile, name, format)
        }
        Commands::Profile => {
            info!("Running profile command");
            profile_info::show(&profile, format)
        }
    }
}
