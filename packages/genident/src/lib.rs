//! # genident
//!
//! Allocates collision-free, target-language-legal identifiers for generated source code.
//!
//! A generator creates a root [`Scope`], derives child scopes as it enters nested generation
//! contexts, and asks the scopes for names:
//!
//! - [`Scope::claim`] reserves a name in one scope only. A child may reuse a name its ancestors
//!   already hold, which is ordinary lexical shadowing.
//! - [`Scope::claim_global`] checks the whole ancestor chain and writes the chosen name into every
//!   ancestor, so it can never be handed out again by another global claim anywhere under them.
//! - [`Scope::suggest`] turns a long identifier (usually a type name) into a short variable name,
//!   typically fed straight into `claim`.
//!
//! ```
//! use genident::Scope;
//!
//! let file = Scope::default();
//! let func = file.child();
//!
//! let helper = func.claim_global("panic").unwrap();
//! assert_eq!(helper, "_panic");
//! assert_eq!(file.claim("panic").unwrap(), "_panic0");
//!
//! let var = func.claim(&func.suggest("TablePerson")).unwrap();
//! assert_eq!(var, "tp");
//! ```
//!
//! The lexical rules of the output language are data, see [`LanguageProfile`].

pub mod locator;
pub mod policy;
pub mod profile;
pub mod sanitize;
pub mod scope;
pub mod suggest;
pub mod trigger;
pub mod unique;
pub mod visibility;

pub use locator::{DeclarationIndex, DeclarationLocator, LocateError};
pub use policy::NamingPolicy;
pub use profile::{Charset, LanguageProfile, ProfileError};
pub use scope::{Scope, ScopeError, ScopeOptions};
pub use trigger::GenerationTrigger;
pub use unique::MAX_ATTEMPTS;
pub use visibility::{to_private, to_public, VisibilityError};

/// Returned whenever nothing usable is left of an input.
pub const FALLBACK_NAME: &str = "v";

/// The identifier connector character, always legal and never reserved on its own.
pub const CONNECTOR: char = '_';

/// Profile used when no scope in a chain overrides it.
pub const DEFAULT_PROFILE: &str = "go";
