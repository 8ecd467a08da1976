//! Sanitize, suggest and claim routines.

use std::sync::Arc;

use genident::{LanguageProfile, NamingPolicy, Scope, ScopeError};
use serde::Serialize;
use tracing::debug;

use super::{OutputFormat, RoutineFailure, RoutineSuccess};
use crate::cli::display::Message;

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct NameOutput {
    pub input: String,
    pub output: String,
}

pub fn print_outputs(outputs: &[NameOutput], format: OutputFormat) -> Result<(), RoutineFailure> {
    match format {
        OutputFormat::Text => {
            for output in outputs {
                println!("{}", output.output);
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(outputs).map_err(|e| {
                RoutineFailure::new(
                    Message::new("Output".to_string(), "Failed to serialize results".to_string()),
                    e,
                )
            })?;
            println!("{json}");
        }
    }
    Ok(())
}

fn exhausted(name: &str, e: ScopeError) -> RoutineFailure {
    RoutineFailure::new(
        Message::new("Claim".to_string(), format!("Could not allocate a name for {name:?}")),
        e,
    )
}

pub fn sanitize(
    profile: Arc<LanguageProfile>,
    names: &[String],
    format: OutputFormat,
) -> Result<RoutineSuccess, RoutineFailure> {
    let outputs = names
        .iter()
        .map(|name| NameOutput {
            input: name.clone(),
            output: profile.sanitize(name),
        })
        .collect::<Vec<_>>();

    print_outputs(&outputs, format)?;
    Ok(RoutineSuccess::silent())
}

/// With `claim` set every suggestion is claimed in one shared scope.
pub fn suggest(
    profile: Arc<LanguageProfile>,
    inputs: &[String],
    claim: bool,
    format: OutputFormat,
) -> Result<RoutineSuccess, RoutineFailure> {
    let scope = Scope::for_profile(profile);

    let outputs = inputs
        .iter()
        .map(|input| -> Result<NameOutput, RoutineFailure> {
            let suggestion = scope.suggest(input);
            let output = if claim {
                scope
                    .claim(&suggestion)
                    .map_err(|e| exhausted(&suggestion, e))?
            } else {
                suggestion
            };
            Ok(NameOutput {
                input: input.clone(),
                output,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    print_outputs(&outputs, format)?;
    Ok(RoutineSuccess::silent())
}

/// Claims `names` in order in a scope nested `depth` levels below a fresh root.
pub fn claim(
    profile: Arc<LanguageProfile>,
    names: &[String],
    global: bool,
    depth: usize,
    format: OutputFormat,
) -> Result<RoutineSuccess, RoutineFailure> {
    let root = Scope::for_profile(profile);
    let scope = (0..depth).fold(root, |scope, _| scope.child());
    debug!("Claiming {} names at depth {}", names.len(), scope.depth());

    let outputs = names
        .iter()
        .map(|name| -> Result<NameOutput, RoutineFailure> {
            let output = if global {
                scope.claim_global(name)
            } else {
                scope.claim(name)
            }
            .map_err(|e| exhausted(name, e))?;
            Ok(NameOutput {
                input: name.clone(),
                output,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    print_outputs(&outputs, format)?;
    Ok(RoutineSuccess::silent())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_routines_succeed_silently() {
        let go = LanguageProfile::go();

        let success = sanitize(go.clone(), &strings(&["panic"]), OutputFormat::Text).unwrap();
        assert!(success.message.action.is_empty());

        assert!(suggest(go.clone(), &strings(&["TablePerson"]), true, OutputFormat::Json).is_ok());
        assert!(claim(go, &strings(&["x", "x"]), true, 3, OutputFormat::Text).is_ok());
    }

    #[test]
    fn test_claim_reports_exhaustion() {
        let names = vec!["v".to_string(); 1001];
        let failure = claim(LanguageProfile::go(), &names, false, 0, OutputFormat::Text)
            .unwrap_err();
        assert_eq!(failure.message.action, "Claim");
        assert!(failure.error.is_some());
    }
}
