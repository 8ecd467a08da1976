use genident::LanguageProfile;

use super::{OutputFormat, RoutineFailure, RoutineSuccess};
use crate::cli::display::Message;

pub fn show(
    profile: &LanguageProfile,
    format: OutputFormat,
) -> Result<RoutineSuccess, RoutineFailure> {
    let rendered = match format {
        OutputFormat::Text => toml::to_string_pretty(profile).map_err(anyhow::Error::from),
        OutputFormat::Json => serde_json::to_string_pretty(profile).map_err(anyhow::Error::from),
    }
    .map_err(|e| {
        RoutineFailure::new(
            Message::new(
                "Profile".to_string(),
                format!("Failed to render profile '{}'", profile.name),
            ),
            e,
        )
    })?;

    println!("{}", rendered.trim_end());
    Ok(RoutineSuccess::silent())
}
