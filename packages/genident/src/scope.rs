//! # Scope Tree
//!
//! A `Scope` is one node of the naming tree built during a generation pass. Each node owns the
//! set of names claimed in it and, except for the root, a handle to its parent. Parents never
//! reference their children, so the tree only has upward links and is dropped together with the
//! last handle to its leaves.
//!
//! ## Claiming
//!
//! - [`Scope::claim`] only consults and updates the scope's own set. A child may therefore pick a
//!   name an ancestor already holds (shadowing).
//! - [`Scope::claim_global`] consults the whole ancestor chain and records the chosen name in the
//!   scope and in every ancestor up to the root.
//!
//! A plain `claim` in an unrelated branch can still return a literal that a `claim_global`
//! elsewhere produced. Only global claims are guaranteed not to collide with each other.
//!
//! Names are never released.
//!
//! ## Policies
//!
//! Every scope resolves its sanitizer, unique-name generator, suggestion function and language
//! profile by walking up the chain to the first scope that overrides it, falling back to the
//! built-in behaviour of the resolved [`LanguageProfile`]. Resolution happens on every call.

use std::cell::RefCell;
use std::collections::HashSet;
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

use tracing::{debug, error, trace};

use crate::policy::{NamingPolicy, SanitizeFn, SuggestFn, UniqueNameFn};
use crate::profile::LanguageProfile;
use crate::unique::MAX_ATTEMPTS;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScopeError {
    #[error("Failed to find a safe, unique name for root {base:?} after {attempts} attempts")]
    Exhausted { base: String, attempts: usize },
}

/// Policy overrides for a new scope. Anything left unset is inherited from the parent.
#[derive(Clone, Default)]
pub struct ScopeOptions {
    sanitizer: Option<SanitizeFn>,
    unique_name: Option<UniqueNameFn>,
    suggest: Option<SuggestFn>,
    profile: Option<Arc<LanguageProfile>>,
}

impl ScopeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sanitizer(mut self, f: impl Fn(&str) -> String + 'static) -> Self {
        self.sanitizer = Some(Rc::new(f));
        self
    }

    pub fn with_unique_name(
        mut self,
        f: impl Fn(&Scope, &str, bool) -> Result<String, ScopeError> + 'static,
    ) -> Self {
        self.unique_name = Some(Rc::new(f));
        self
    }

    pub fn with_suggest(mut self, f: impl Fn(&str) -> String + 'static) -> Self {
        self.suggest = Some(Rc::new(f));
        self
    }

    pub fn with_profile(mut self, profile: Arc<LanguageProfile>) -> Self {
        self.profile = Some(profile);
        self
    }

    fn is_empty(&self) -> bool {
        self.sanitizer.is_none()
            && self.unique_name.is_none()
            && self.suggest.is_none()
            && self.profile.is_none()
    }
}

impl fmt::Debug for ScopeOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScopeOptions")
            .field("sanitizer", &self.sanitizer.is_some())
            .field("unique_name", &self.unique_name.is_some())
            .field("suggest", &self.suggest.is_some())
            .field("profile", &self.profile.as_ref().map(|p| p.name.as_str()))
            .finish()
    }
}

struct ScopeNode {
    parent: Option<Scope>,
    claimed: RefCell<HashSet<String>>,
    options: ScopeOptions,
}

// Unlinks the parent chain one node at a time; the default drop glue recurses once per
// ancestor and overflows the stack on deep chains.
impl Drop for ScopeNode {
    fn drop(&mut self) {
        let mut parent = self.parent.take();
        while let Some(scope) = parent {
            parent = match Rc::try_unwrap(scope.node) {
                Ok(mut node) => node.parent.take(),
                Err(_) => None,
            };
        }
    }
}

/// Handle to a node of the naming tree. Cloning the handle does not copy the node.
#[derive(Clone)]
pub struct Scope {
    node: Rc<ScopeNode>,
}

impl Scope {
    /// Creates a root scope.
    pub fn new(options: ScopeOptions) -> Self {
        Self::with_parent(None, options)
    }

    /// Creates a root scope that names things for `profile`.
    pub fn for_profile(profile: Arc<LanguageProfile>) -> Self {
        Self::new(ScopeOptions::new().with_profile(profile))
    }

    fn with_parent(parent: Option<Scope>, options: ScopeOptions) -> Self {
        if !options.is_empty() {
            debug!("Creating scope with overrides {:?}", options);
        }

        Scope {
            node: Rc::new(ScopeNode {
                parent,
                claimed: RefCell::new(HashSet::new()),
                options,
            }),
        }
    }

    /// Derives a child scope. Policies not overridden in `options` are inherited.
    pub fn derive(&self, options: ScopeOptions) -> Scope {
        Self::with_parent(Some(self.clone()), options)
    }

    /// Derives a child scope that inherits every policy.
    pub fn child(&self) -> Scope {
        self.derive(ScopeOptions::default())
    }

    pub fn parent(&self) -> Option<&Scope> {
        self.node.parent.as_ref()
    }

    /// Number of ancestors, zero for a root.
    pub fn depth(&self) -> usize {
        self.ancestors().count() - 1
    }

    /// The scope itself followed by its parent, grandparent and so on up to the root.
    fn ancestors(&self) -> impl Iterator<Item = &Scope> {
        std::iter::successors(Some(self), |scope| scope.parent())
    }

    /// Whether `name` is claimed in this scope, or with `recursive` anywhere in its ancestor
    /// chain.
    pub fn is_claimed(&self, name: &str, recursive: bool) -> bool {
        self.ancestors()
            .take(Self::reach(recursive))
            .any(|scope| scope.node.claimed.borrow().contains(name))
    }

    /// Number of scopes, starting with this one, a (non-)recursive operation touches.
    fn reach(recursive: bool) -> usize {
        if recursive {
            usize::MAX
        } else {
            1
        }
    }

    /// Sorted snapshot of the names claimed in this scope.
    pub fn claimed_names(&self) -> Vec<String> {
        let mut names = self
            .node
            .claimed
            .borrow()
            .iter()
            .cloned()
            .collect::<Vec<_>>();
        names.sort();
        names
    }

    /// Claims a safe version of `name` in this scope only.
    ///
    /// Ancestors are neither consulted nor updated, so the result may shadow a name held by an
    /// ancestor.
    pub fn claim(&self, name: &str) -> Result<String, ScopeError> {
        self.claim_with(name, false)
    }

    /// Claims a safe version of `name` that is free in this scope and every ancestor, and
    /// records it in all of them.
    pub fn claim_global(&self, name: &str) -> Result<String, ScopeError> {
        self.claim_with(name, true)
    }

    fn claim_with(&self, name: &str, recursive: bool) -> Result<String, ScopeError> {
        let mut candidate = self.sanitize(name);

        for _ in 0..MAX_ATTEMPTS {
            if !self.is_claimed(&candidate, recursive) {
                self.record(&candidate, recursive);
                return Ok(candidate);
            }

            trace!("Name {:?} is taken (recursive: {})", candidate, recursive);
            candidate = self.next_candidate(&candidate, recursive)?;
        }

        error!(
            "Unique name policy kept returning taken names for {:?} after {} attempts",
            name, MAX_ATTEMPTS
        );
        Err(ScopeError::Exhausted {
            base: name.to_string(),
            attempts: MAX_ATTEMPTS,
        })
    }

    fn record(&self, name: &str, recursive: bool) {
        for scope in self.ancestors().take(Self::reach(recursive)) {
            scope.node.claimed.borrow_mut().insert(name.to_string());
        }
    }

    /// Sanitizes `raw` with the resolved sanitizer.
    pub fn sanitize(&self, raw: &str) -> String {
        match self.resolve(|options| options.sanitizer.as_ref()) {
            Some(f) => f(raw),
            None => self.profile().sanitize(raw),
        }
    }

    /// Next candidate after `name` collided in this scope, from the resolved generator.
    pub fn next_candidate(&self, name: &str, recursive: bool) -> Result<String, ScopeError> {
        NamingPolicy::next_candidate(self, self, name, recursive)
    }

    /// Suggests a short variable name for `input` with the resolved suggestion function.
    pub fn suggest(&self, input: &str) -> String {
        match self.resolve(|options| options.suggest.as_ref()) {
            Some(f) => f(input),
            None => self.profile().suggest(input),
        }
    }

    /// First override picked from the options of this scope or its nearest ancestor.
    fn resolve<T: Clone>(&self, pick: impl Fn(&ScopeOptions) -> Option<&T>) -> Option<T> {
        self.ancestors()
            .find_map(|scope| pick(&scope.node.options).cloned())
    }

    /// The nearest profile override in the chain, or the default profile.
    pub fn profile(&self) -> Arc<LanguageProfile> {
        self.resolve(|options| options.profile.as_ref())
            .unwrap_or_else(LanguageProfile::go)
    }
}

impl Default for Scope {
    fn default() -> Self {
        Self::new(ScopeOptions::default())
    }
}

impl NamingPolicy for Scope {
    fn sanitize(&self, raw: &str) -> String {
        Scope::sanitize(self, raw)
    }

    fn next_candidate(
        &self,
        scope: &Scope,
        name: &str,
        recursive: bool,
    ) -> Result<String, ScopeError> {
        match self.resolve(|options| options.unique_name.as_ref()) {
            Some(f) => f(scope, name, recursive),
            None => self.profile().next_candidate(scope, name, recursive),
        }
    }

    fn suggest(&self, input: &str) -> String {
        Scope::suggest(self, input)
    }
}

impl fmt::Debug for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scope")
            .field("depth", &self.depth())
            .field("claimed", &self.claimed_names())
            .field("options", &self.node.options)
            .finish()
    }
}
