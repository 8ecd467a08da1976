//! Pluggable naming policies.
//!
//! The three policies a scope needs (sanitizing, choosing the next candidate after a collision,
//! suggesting a variable name) are expressed by [`NamingPolicy`]. [`LanguageProfile`] provides
//! the built-in behaviour; [`Scope`] implements the trait by resolving each method against its
//! own override, then its ancestors' overrides, then the resolved profile.

use std::rc::Rc;

use crate::profile::LanguageProfile;
use crate::sanitize::sanitize_identifier;
use crate::scope::{Scope, ScopeError};
use crate::suggest::suggest_variable_name;
use crate::unique;

/// Override for [`NamingPolicy::sanitize`].
pub type SanitizeFn = Rc<dyn Fn(&str) -> String>;

/// Override for [`NamingPolicy::next_candidate`]. Receives the scope that is claiming.
pub type UniqueNameFn = Rc<dyn Fn(&Scope, &str, bool) -> Result<String, ScopeError>>;

/// Override for [`NamingPolicy::suggest`].
pub type SuggestFn = Rc<dyn Fn(&str) -> String>;

pub trait NamingPolicy {
    /// Turns an arbitrary string into a legal identifier. Never fails.
    fn sanitize(&self, raw: &str) -> String;

    /// Derives the next candidate for `name`, which is already taken in `scope`.
    fn next_candidate(
        &self,
        scope: &Scope,
        name: &str,
        recursive: bool,
    ) -> Result<String, ScopeError>;

    /// Proposes a short variable name for `input`. Never fails.
    fn suggest(&self, input: &str) -> String;
}

impl NamingPolicy for LanguageProfile {
    fn sanitize(&self, raw: &str) -> String {
        sanitize_identifier(self, raw)
    }

    fn next_candidate(
        &self,
        scope: &Scope,
        name: &str,
        recursive: bool,
    ) -> Result<String, ScopeError> {
        unique::next_candidate(scope, name, recursive)
    }

    fn suggest(&self, input: &str) -> String {
        suggest_variable_name(self, input)
    }
}
