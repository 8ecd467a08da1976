//! Deterministic successors for names that are already taken.

use tracing::error;

use crate::scope::{Scope, ScopeError};

/// Upper bound on suffixes tried for one base name. Running out means a policy override or a
/// caller is misbehaving, and is reported as [`ScopeError::Exhausted`].
pub const MAX_ATTEMPTS: usize = 999;

/// Appends `0`, `1`, `2`, ... to the sanitized `name` and returns the first form that is not
/// claimed in `scope`. With `recursive` set the whole ancestor chain is consulted.
pub fn next_candidate(scope: &Scope, name: &str, recursive: bool) -> Result<String, ScopeError> {
    let base = scope.sanitize(name);

    (0..MAX_ATTEMPTS)
        .map(|suffix| format!("{base}{suffix}"))
        .find(|candidate| !scope.is_claimed(candidate, recursive))
        .ok_or_else(|| {
            error!(
                "Failed to find a safe, unique name for root {:?} after {} attempts",
                name, MAX_ATTEMPTS
            );
            ScopeError::Exhausted {
                base: name.to_string(),
                attempts: MAX_ATTEMPTS,
            }
        })
}
