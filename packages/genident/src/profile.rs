//! # Language Profiles
//!
//! A `LanguageProfile` is the lexical policy of the language being generated: which characters
//! may appear in an identifier, which words are reserved by the grammar, and which names are
//! predeclared by the language (built-in types, constants and functions). Every default naming
//! policy in this crate is driven by a profile, so the same scope tree can back generators for
//! different output languages.
//!
//! ## Built-in profiles
//!
//! - `go` (default)
//! - `typescript`
//! - `python`
//!
//! ## Custom profiles
//!
//! Profiles can be loaded from TOML. A file may extend a built-in profile, in which case its
//! word lists are added to the built-in ones:
//!
//! ```toml
//! name = "go-with-runtime"
//! extends = "go"
//! reserved_words = ["ctx", "err"]
//! ```

use std::collections::BTreeSet;
use std::path::Path;
use std::sync::Arc;

use config::{Config, File, FileFormat};
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use tracing::debug;
use unicode_general_category::{get_general_category, GeneralCategory};

use crate::CONNECTOR;

const GO_KEYWORDS: &[&str] = &[
    "break",
    "case",
    "chan",
    "const",
    "continue",
    "default",
    "defer",
    "else",
    "fallthrough",
    "for",
    "func",
    "go",
    "goto",
    "if",
    "import",
    "interface",
    "map",
    "package",
    "range",
    "return",
    "select",
    "struct",
    "switch",
    "type",
    "var",
];

const GO_PREDECLARED: &[&str] = &[
    "bool",
    "byte",
    "complex64",
    "complex128",
    "error",
    "float32",
    "float64",
    "int",
    "int8",
    "int16",
    "int32",
    "int64",
    "rune",
    "string",
    "uint",
    "uint8",
    "uint16",
    "uint32",
    "uint64",
    "uintptr",
    "true",
    "false",
    "iota",
    "nil",
    "append",
    "cap",
    "close",
    "complex",
    "copy",
    "delete",
    "imag",
    "len",
    "make",
    "new",
    "panic",
    "print",
    "println",
    "real",
    "recover",
    "any",
];

const TYPESCRIPT_KEYWORDS: &[&str] = &[
    "break",
    "case",
    "catch",
    "class",
    "const",
    "continue",
    "debugger",
    "default",
    "delete",
    "do",
    "else",
    "enum",
    "export",
    "extends",
    "false",
    "finally",
    "for",
    "function",
    "if",
    "import",
    "in",
    "instanceof",
    "new",
    "null",
    "return",
    "super",
    "switch",
    "this",
    "throw",
    "true",
    "try",
    "typeof",
    "var",
    "void",
    "while",
    "with",
    // strict mode
    "implements",
    "interface",
    "let",
    "package",
    "private",
    "protected",
    "public",
    "static",
    "yield",
    "await",
];

const TYPESCRIPT_PREDECLARED: &[&str] = &[
    "any",
    "arguments",
    "bigint",
    "boolean",
    "eval",
    "Infinity",
    "NaN",
    "never",
    "number",
    "object",
    "string",
    "symbol",
    "undefined",
    "unknown",
];

const PYTHON_KEYWORDS: &[&str] = &[
    "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class",
    "continue", "def", "del", "elif", "else", "except", "finally", "for", "from", "global", "if",
    "import", "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return", "try",
    "while", "with", "yield",
];

const PYTHON_PREDECLARED: &[&str] = &[
    "abs",
    "all",
    "any",
    "bool",
    "bytes",
    "callable",
    "chr",
    "dict",
    "dir",
    "divmod",
    "enumerate",
    "filter",
    "float",
    "format",
    "frozenset",
    "getattr",
    "hasattr",
    "hash",
    "hex",
    "id",
    "input",
    "int",
    "isinstance",
    "issubclass",
    "iter",
    "len",
    "list",
    "map",
    "max",
    "min",
    "next",
    "object",
    "oct",
    "open",
    "ord",
    "pow",
    "print",
    "property",
    "range",
    "repr",
    "reversed",
    "round",
    "set",
    "setattr",
    "slice",
    "sorted",
    "staticmethod",
    "str",
    "sum",
    "super",
    "tuple",
    "type",
    "vars",
    "zip",
];

lazy_static! {
    static ref GO: Arc<LanguageProfile> = Arc::new(LanguageProfile::from_word_lists(
        "go",
        Charset::Unicode,
        GO_KEYWORDS,
        GO_PREDECLARED
    ));
    static ref TYPESCRIPT: Arc<LanguageProfile> = Arc::new(LanguageProfile::from_word_lists(
        "typescript",
        Charset::Unicode,
        TYPESCRIPT_KEYWORDS,
        TYPESCRIPT_PREDECLARED
    ));
    static ref PYTHON: Arc<LanguageProfile> = Arc::new(LanguageProfile::from_word_lists(
        "python",
        Charset::Unicode,
        PYTHON_KEYWORDS,
        PYTHON_PREDECLARED
    ));
}

/// Names of the profiles that ship with the crate.
pub const BUILTIN_PROFILES: &[&str] = &["go", "typescript", "python"];

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ProfileError {
    #[error("Unknown language profile '{name}', expected one of: {}", BUILTIN_PROFILES.join(", "))]
    Unknown { name: String },

    #[error("Failed to load language profile")]
    Load(#[from] config::ConfigError),

    #[error(
        "Invalid language profile '{profile}': '{word}' is reserved and so is '_{word}', sanitizing would not be stable"
    )]
    PrefixedReservedWord { profile: String, word: String },
}

/// Character classes allowed in an identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Charset {
    /// Unicode letters (general category L) and numbers (general category N)
    #[default]
    Unicode,
    /// ASCII letters and digits only
    Ascii,
}

impl Charset {
    pub fn is_letter(&self, c: char) -> bool {
        match self {
            Charset::Unicode => matches!(
                get_general_category(c),
                GeneralCategory::UppercaseLetter
                    | GeneralCategory::LowercaseLetter
                    | GeneralCategory::TitlecaseLetter
                    | GeneralCategory::ModifierLetter
                    | GeneralCategory::OtherLetter
            ),
            Charset::Ascii => c.is_ascii_alphabetic(),
        }
    }

    /// Decimal digits, letter numbers such as `Ⅻ` and other numbers such as `²`.
    pub fn is_digit(&self, c: char) -> bool {
        match self {
            Charset::Unicode => matches!(
                get_general_category(c),
                GeneralCategory::DecimalNumber
                    | GeneralCategory::LetterNumber
                    | GeneralCategory::OtherNumber
            ),
            Charset::Ascii => c.is_ascii_digit(),
        }
    }

    /// True for every character that may appear somewhere in an identifier.
    pub fn is_identifier_char(&self, c: char) -> bool {
        c == CONNECTOR || self.is_letter(c) || self.is_digit(c)
    }
}

/// Uppercase letter by general category (`Lu`). Decides exported names and camel-case words.
pub fn is_upper(c: char) -> bool {
    get_general_category(c) == GeneralCategory::UppercaseLetter
}

/// One-to-one uppercase mapping. Characters whose uppercase form is longer than one character
/// (`ß`, `ŉ`) have no mapping and are returned unchanged.
pub fn to_upper(c: char) -> char {
    let mut mapped = c.to_uppercase();
    match (mapped.next(), mapped.next()) {
        (Some(upper), None) => upper,
        _ => c,
    }
}

/// One-to-one lowercase mapping. `İ` is the only character with a longer lowercase form; its
/// single-character mapping is the leading `i`.
pub fn to_lower(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageProfile {
    pub name: String,
    #[serde(default)]
    pub charset: Charset,
    #[serde(default)]
    pub reserved_words: BTreeSet<String>,
    #[serde(default)]
    pub predeclared: BTreeSet<String>,
}

/// On-disk shape of a profile, before `extends` is resolved.
#[derive(Debug, Deserialize)]
struct ProfileSource {
    name: Option<String>,
    extends: Option<String>,
    charset: Option<Charset>,
    #[serde(default)]
    reserved_words: Vec<String>,
    #[serde(default)]
    predeclared: Vec<String>,
}

impl LanguageProfile {
    fn from_word_lists(
        name: &str,
        charset: Charset,
        reserved_words: &[&str],
        predeclared: &[&str],
    ) -> Self {
        LanguageProfile {
            name: name.to_string(),
            charset,
            reserved_words: reserved_words.iter().map(|w| w.to_string()).collect(),
            predeclared: predeclared.iter().map(|w| w.to_string()).collect(),
        }
    }

    pub fn go() -> Arc<LanguageProfile> {
        GO.clone()
    }

    pub fn typescript() -> Arc<LanguageProfile> {
        TYPESCRIPT.clone()
    }

    pub fn python() -> Arc<LanguageProfile> {
        PYTHON.clone()
    }

    /// Looks up one of the built-in profiles by name (case-insensitive).
    pub fn builtin(name: &str) -> Result<Arc<LanguageProfile>, ProfileError> {
        match name.to_ascii_lowercase().as_str() {
            "go" | "golang" => Ok(Self::go()),
            "typescript" | "ts" => Ok(Self::typescript()),
            "python" | "py" => Ok(Self::python()),
            _ => Err(ProfileError::Unknown {
                name: name.to_string(),
            }),
        }
    }

    pub fn from_file(path: &Path) -> Result<LanguageProfile, ProfileError> {
        debug!("Loading language profile from {:?}", path);
        let source = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml))
            .build()?
            .try_deserialize::<ProfileSource>()?;
        Self::resolve(source)
    }

    pub fn from_toml_str(contents: &str) -> Result<LanguageProfile, ProfileError> {
        let source = Config::builder()
            .add_source(File::from_str(contents, FileFormat::Toml))
            .build()?
            .try_deserialize::<ProfileSource>()?;
        Self::resolve(source)
    }

    fn resolve(source: ProfileSource) -> Result<LanguageProfile, ProfileError> {
        let mut profile = match &source.extends {
            Some(base) => Self::builtin(base)?.as_ref().clone(),
            None => LanguageProfile {
                name: "custom".to_string(),
                charset: Charset::default(),
                reserved_words: BTreeSet::new(),
                predeclared: BTreeSet::new(),
            },
        };

        if let Some(name) = source.name {
            profile.name = name;
        }
        if let Some(charset) = source.charset {
            profile.charset = charset;
        }
        profile.reserved_words.extend(source.reserved_words);
        profile.predeclared.extend(source.predeclared);
        profile.check_prefixed_words()?;

        debug!(
            "Resolved language profile '{}' ({} reserved words, {} predeclared names)",
            profile.name,
            profile.reserved_words.len(),
            profile.predeclared.len()
        );
        Ok(profile)
    }

    /// Sanitizing prefixes a reserved word with `_`, so that form must not be reserved too.
    fn check_prefixed_words(&self) -> Result<(), ProfileError> {
        let conflict = self
            .reserved_words
            .iter()
            .chain(&self.predeclared)
            .find(|word| self.is_reserved(&format!("{CONNECTOR}{word}")));

        match conflict {
            Some(word) => Err(ProfileError::PrefixedReservedWord {
                profile: self.name.clone(),
                word: word.clone(),
            }),
            None => Ok(()),
        }
    }

    /// Reserved by the grammar; such a word can never be used as an identifier.
    pub fn is_keyword(&self, name: &str) -> bool {
        self.reserved_words.contains(name)
    }

    /// Legal as an identifier but shadowing it in generated code is unsafe.
    pub fn is_predeclared(&self, name: &str) -> bool {
        self.predeclared.contains(name)
    }

    pub fn is_reserved(&self, name: &str) -> bool {
        self.is_keyword(name) || self.is_predeclared(name)
    }

    /// Whether `name` is a syntactically legal, non-keyword identifier.
    pub fn is_identifier(&self, name: &str) -> bool {
        let mut chars = name.chars();
        let Some(first) = chars.next() else {
            return false;
        };

        (first == CONNECTOR || self.charset.is_letter(first))
            && chars.all(|c| self.charset.is_identifier_char(c))
            && !self.is_keyword(name)
    }
}

impl Default for LanguageProfile {
    fn default() -> Self {
        GO.as_ref().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_builtin_lookup() {
        assert_eq!(LanguageProfile::builtin("go").unwrap().name, "go");
        assert_eq!(LanguageProfile::builtin("TS").unwrap().name, "typescript");
        assert_eq!(LanguageProfile::builtin("py").unwrap().name, "python");

        let err = LanguageProfile::builtin("cobol").unwrap_err();
        assert!(matches!(err, ProfileError::Unknown { ref name } if name == "cobol"));
        assert!(err.to_string().contains("go, typescript, python"));
    }

    #[test]
    fn test_go_word_sets() {
        let go = LanguageProfile::go();
        assert!(go.is_keyword("func"));
        assert!(!go.is_keyword("panic"));
        assert!(go.is_predeclared("panic"));
        assert!(go.is_reserved("panic"));
        assert!(go.is_reserved("chan"));
        assert!(!go.is_reserved("person"));
    }

    #[test]
    fn test_is_identifier() {
        let go = LanguageProfile::go();
        assert!(go.is_identifier("x"));
        assert!(go.is_identifier("_"));
        assert!(go.is_identifier("_1"));
        assert!(go.is_identifier("漢字a"));
        assert!(go.is_identifier("panic"));
        assert!(!go.is_identifier(""));
        assert!(!go.is_identifier("123"));
        assert!(!go.is_identifier("a-b"));
        assert!(!go.is_identifier("func"));
        assert!(!go.is_identifier("\u{FFFD}"));
    }

    #[test]
    fn test_ascii_charset() {
        assert!(Charset::Ascii.is_letter('a'));
        assert!(!Charset::Ascii.is_letter('é'));
        assert!(Charset::Unicode.is_letter('é'));
        assert!(Charset::Ascii.is_identifier_char('_'));
        assert!(!Charset::Ascii.is_identifier_char('٣'));
        assert!(Charset::Unicode.is_identifier_char('٣'));
    }

    #[test]
    fn test_unicode_letters_are_general_category_l() {
        let unicode = Charset::Unicode;
        assert!(unicode.is_letter('漢'));
        assert!(unicode.is_letter('ǅ'));
        assert!(unicode.is_letter('ʰ'));
        // combining marks are alphabetic but not letters
        assert!(!unicode.is_letter('\u{093E}'));
        assert!(!unicode.is_identifier_char('\u{0301}'));
        // letter numbers and other numbers count as digits
        assert!(!unicode.is_letter('Ⅻ'));
        assert!(unicode.is_digit('Ⅻ'));
        assert!(unicode.is_digit('²'));
        assert!(!unicode.is_digit('a'));
    }

    #[test]
    fn test_is_identifier_rejects_marks_and_leading_numbers() {
        let go = LanguageProfile::go();
        assert!(!go.is_identifier("\u{093E}"));
        assert!(!go.is_identifier("Ⅻ"));
        assert!(go.is_identifier("_Ⅻ"));
        assert!(go.is_identifier("x²"));
    }

    #[test]
    fn test_single_char_case_mapping() {
        assert_eq!(to_upper('a'), 'A');
        assert_eq!(to_upper('ǆ'), 'Ǆ');
        assert_eq!(to_upper('ß'), 'ß');
        assert_eq!(to_upper('ŉ'), 'ŉ');
        assert_eq!(to_upper('漢'), '漢');
        assert_eq!(to_lower('A'), 'a');
        assert_eq!(to_lower('İ'), 'i');
        assert_eq!(to_lower('Ǆ'), 'ǆ');

        assert!(is_upper('İ'));
        assert!(!is_upper('ǅ'));
        assert!(!is_upper('Ⓐ'));
        assert!(!is_upper('Ⅻ'));
    }

    #[test]
    fn test_builtin_profiles_sanitize_stably() {
        for name in BUILTIN_PROFILES {
            let profile = LanguageProfile::builtin(name).unwrap();
            assert!(profile.check_prefixed_words().is_ok(), "{name}");
        }
    }

    #[test]
    fn test_profile_rejects_prefixed_reserved_word() {
        let err = LanguageProfile::from_toml_str(
            r#"
            extends = "go"
            reserved_words = ["x"]
            predeclared = ["_x"]
            "#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ProfileError::PrefixedReservedWord { ref word, .. } if word == "x"
        ));
    }

    #[test]
    fn test_profile_from_toml_extends_builtin() {
        let profile = LanguageProfile::from_toml_str(
            r#"
            name = "go-runtime"
            extends = "go"
            reserved_words = ["ctx", "err"]
            "#,
        )
        .unwrap();

        assert_eq!(profile.name, "go-runtime");
        assert!(profile.is_keyword("ctx"));
        assert!(profile.is_keyword("func"));
        assert!(profile.is_predeclared("panic"));
        assert_eq!(profile.charset, Charset::Unicode);
    }

    #[test]
    fn test_profile_from_toml_standalone() {
        let profile = LanguageProfile::from_toml_str(
            r#"
            charset = "ascii"
            reserved_words = ["select", "from"]
            predeclared = ["count"]
            "#,
        )
        .unwrap();

        assert_eq!(profile.name, "custom");
        assert_eq!(profile.charset, Charset::Ascii);
        assert!(profile.is_keyword("select"));
        assert!(profile.is_predeclared("count"));
        assert!(!profile.is_reserved("func"));
    }

    #[test]
    fn test_profile_from_toml_unknown_base() {
        let err = LanguageProfile::from_toml_str(r#"extends = "fortran""#).unwrap_err();
        assert!(matches!(err, ProfileError::Unknown { .. }));
    }

    #[test]
    fn test_profile_from_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "extends = \"python\"").unwrap();
        writeln!(file, "predeclared = [\"df\"]").unwrap();

        let profile = LanguageProfile::from_file(file.path()).unwrap();
        assert_eq!(profile.name, "python");
        assert!(profile.is_predeclared("df"));
        assert!(profile.is_keyword("lambda"));
    }

    #[test]
    fn test_profile_from_missing_file() {
        let err = LanguageProfile::from_file(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, ProfileError::Load(_)));
    }
}
