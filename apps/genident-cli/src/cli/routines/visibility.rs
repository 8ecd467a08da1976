use genident::LanguageProfile;

use super::naming::{print_outputs, NameOutput};
use super::{OutputFormat, RoutineFailure, RoutineSuccess};
use crate::cli::display::Message;

fn print_result(
    name: &str,
    result: Result<String, genident::VisibilityError>,
    action: &str,
    format: OutputFormat,
) -> Result<RoutineSuccess, RoutineFailure> {
    let output = result.map_err(|e| {
        RoutineFailure::error(Message::new(action.to_string(), e.to_string()))
    })?;

    print_outputs(
        &[NameOutput {
            input: name.to_string(),
            output,
        }],
        format,
    )?;
    Ok(RoutineSuccess::silent())
}

pub fn public(
    profile: &LanguageProfile,
    name: &str,
    format: OutputFormat,
) -> Result<RoutineSuccess, RoutineFailure> {
    print_result(name, profile.to_public(name), "Public", format)
}

pub fn private(
    profile: &LanguageProfile,
    name: &str,
    format: OutputFormat,
) -> Result<RoutineSuccess, RoutineFailure> {
    print_result(name, profile.to_private(name), "Private", format)
}
