//! Public/private forms of identifiers.
//!
//! Visibility follows the leading-letter convention: an identifier whose first character is
//! uppercase is public, anything else is private.

use crate::profile::{is_upper, to_lower, to_upper, LanguageProfile};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VisibilityError {
    #[error("Failed to change visibility of {name:?}: not a valid identifier")]
    InvalidIdentifier { name: String },

    #[error("Failed to create public identifier for {name:?}: no letter has an uppercase form")]
    NoPublicForm { name: String },

    #[error("Failed to change visibility of {name:?}: {form:?} is a reserved word")]
    ReservedForm { name: String, form: String },
}

/// Public form of `name` under the default profile.
pub fn to_public(name: &str) -> Result<String, VisibilityError> {
    LanguageProfile::go().to_public(name)
}

/// Private form of `name` under the default profile.
pub fn to_private(name: &str) -> Result<String, VisibilityError> {
    LanguageProfile::go().to_private(name)
}

fn is_public(name: &str) -> bool {
    name.starts_with(is_upper)
}

impl LanguageProfile {
    /// Returns `name` unchanged if it is already public. Otherwise the leading character is
    /// uppercased; if that does not make it public the character is dropped and the rest is
    /// tried, so `_x` becomes `X`.
    pub fn to_public(&self, name: &str) -> Result<String, VisibilityError> {
        self.check_identifier(name)?;

        let mut rest = name;
        loop {
            if is_public(rest) {
                return self.check_form(name, rest.to_string());
            }

            let mut chars = rest.chars();
            let Some(first) = chars.next() else {
                return Err(VisibilityError::NoPublicForm {
                    name: name.to_string(),
                });
            };

            let capitalized = format!("{}{}", to_upper(first), chars.as_str());
            if is_public(&capitalized) {
                return self.check_form(name, capitalized);
            }
            rest = chars.as_str();
        }
    }

    /// Lowercases only the leading character of a public `name`; private names are returned
    /// unchanged.
    pub fn to_private(&self, name: &str) -> Result<String, VisibilityError> {
        self.check_identifier(name)?;

        if !is_public(name) {
            return Ok(name.to_string());
        }

        let mut chars = name.chars();
        let private = chars
            .next()
            .map(|first| format!("{}{}", to_lower(first), chars.as_str()))
            .unwrap_or_default();
        self.check_form(name, private)
    }

    /// Changing the case of a name can turn it into a keyword, e.g. `none` into Python's `None`.
    fn check_form(&self, name: &str, form: String) -> Result<String, VisibilityError> {
        if self.is_keyword(&form) {
            return Err(VisibilityError::ReservedForm {
                name: name.to_string(),
                form,
            });
        }
        Ok(form)
    }

    fn check_identifier(&self, name: &str) -> Result<(), VisibilityError> {
        if self.is_identifier(name) {
            Ok(())
        } else {
            Err(VisibilityError::InvalidIdentifier {
                name: name.to_string(),
            })
        }
    }
}
