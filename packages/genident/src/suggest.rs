//! Short variable names from long identifiers.
//!
//! The heuristic takes the initial of every "word" in a camel-cased input, so `TablePerson`
//! becomes `tp`. Inputs that do not split cleanly into words (acronyms such as `HTTP`, or
//! inputs containing a replacement character) fall back to the first letter of the input.

use crate::profile::{is_upper, to_lower, LanguageProfile};
use crate::sanitize::sanitize_identifier;
use crate::{CONNECTOR, FALLBACK_NAME};

/// Suggests a short, lowercase variable name for `input`. The result is always sanitized
/// under `profile`.
pub fn suggest_variable_name(profile: &LanguageProfile, input: &str) -> String {
    let name = word_initials(input).unwrap_or_else(|| first_letter(profile, input));
    if name == CONNECTOR.to_string() {
        return sanitize_identifier(profile, FALLBACK_NAME);
    }

    sanitize_identifier(profile, &name)
}

/// One lowercase letter per camel-case word, always including the very first character.
///
/// Returns `None` when two uppercase characters follow each other or the input contains a
/// replacement character.
fn word_initials(input: &str) -> Option<String> {
    let mut chars = input.chars();
    let Some(first) = chars.next() else {
        return Some(FALLBACK_NAME.to_string());
    };

    let mut initials = to_lower(first).to_string();
    let mut previous_upper = is_upper(first);
    for c in chars {
        if c == char::REPLACEMENT_CHARACTER {
            return None;
        }

        let upper = is_upper(c);
        if previous_upper && upper {
            return None;
        }
        if upper {
            initials.push(to_lower(c));
        }
        previous_upper = upper;
    }

    Some(initials)
}

fn first_letter(profile: &LanguageProfile, input: &str) -> String {
    input
        .chars()
        .find(|c| profile.charset.is_letter(*c))
        .map(|c| to_lower(c).to_string())
        .unwrap_or_else(|| FALLBACK_NAME.to_string())
}
