//! Turns arbitrary strings into legal, non-reserved identifiers.

use crate::profile::LanguageProfile;
use crate::{CONNECTOR, FALLBACK_NAME};

/// Sanitizes `raw` into an identifier that is legal under `profile`.
///
/// The steps run in this order, each on the output of the previous one:
/// 1. Drop every character that cannot appear in an identifier (nothing is substituted).
/// 2. If nothing is left, return [`FALLBACK_NAME`].
/// 3. If the result is a reserved word or a predeclared name, prefix it with `_`.
/// 4. If the result does not start with a letter or `_`, prefix it with `_`.
pub fn sanitize_identifier(profile: &LanguageProfile, raw: &str) -> String {
    let mut name = raw
        .chars()
        .filter(|c| profile.charset.is_identifier_char(*c))
        .collect::<String>();
    if name.is_empty() {
        return FALLBACK_NAME.to_string();
    }

    if profile.is_reserved(&name) {
        name.insert(0, CONNECTOR);
    }

    if !name.starts_with(|c: char| c == CONNECTOR || profile.charset.is_letter(c)) {
        name.insert(0, CONNECTOR);
    }

    name
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::Charset;

    fn go(raw: &str) -> String {
        sanitize_identifier(&LanguageProfile::go(), raw)
    }

    #[test]
    fn test_reserved_and_leading_digit() {
        assert_eq!(go(""), "v");
        assert_eq!(go("panic"), "_panic");
        assert_eq!(go("func"), "_func");
        assert_eq!(go("123"), "_123");
        assert_eq!(go("person"), "person");
    }

    #[test]
    fn test_invalid_characters_are_dropped() {
        assert_eq!(go("first-name"), "firstname");
        assert_eq!(go("a.b c"), "abc");
        assert_eq!(go("  "), "v");
        assert_eq!(go("$%^"), "v");
        assert_eq!(go("\u{FFFD}"), "v");
        assert_eq!(go("漢字"), "漢字");
    }

    #[test]
    fn test_filter_runs_before_reserved_check() {
        // "f-unc" filters down to the keyword
        assert_eq!(go("f-unc"), "_func");
        // and the digit check sees the filtered string
        assert_eq!(go("-9lives"), "_9lives");
    }

    #[test]
    fn test_marks_are_dropped_and_numbers_need_a_prefix() {
        // a bare combining mark is not a letter
        assert_eq!(go("\u{093E}"), "v");
        assert_eq!(go("ka\u{0301}"), "ka");
        // letter numbers and other numbers are kept but cannot lead
        assert_eq!(go("\u{216B}"), "_\u{216B}");
        assert_eq!(go("²x"), "_²x");
        assert_eq!(go("x²"), "x²");
    }

    #[test]
    fn test_output_is_an_identifier() {
        let profile = LanguageProfile::go();
        let inputs = [
            "", "panic", "func", "123", "\u{093E}", "\u{216B}", "ßeta", "İx", "a\u{0301}",
            "漢字", "Ⓐb", "-",
        ];
        for input in inputs {
            let name = sanitize_identifier(&profile, input);
            assert!(profile.is_identifier(&name), "{input:?} became {name:?}");
        }
    }

    #[test]
    fn test_idempotent() {
        let inputs = [
            "", "_", "v", "panic", "_panic", "func", "123", "_123", "a b", "漢字a", "9", "x-y-z",
            "\u{FFFD}", "__init__", "HTTPServer", "\u{093E}", "\u{216B}", "ßeta", "İ",
        ];
        for input in inputs {
            let once = go(input);
            assert_eq!(go(&once), once, "sanitize is not idempotent for {input:?}");
        }
    }

    #[test]
    fn test_profile_specific_words() {
        let ts = LanguageProfile::typescript();
        assert_eq!(sanitize_identifier(&ts, "function"), "_function");
        assert_eq!(sanitize_identifier(&ts, "func"), "func");
        assert_eq!(sanitize_identifier(&ts, "undefined"), "_undefined");

        let py = LanguageProfile::python();
        assert_eq!(sanitize_identifier(&py, "lambda"), "_lambda");
        assert_eq!(sanitize_identifier(&py, "None"), "_None");
        assert_eq!(sanitize_identifier(&py, "panic"), "panic");
    }

    #[test]
    fn test_ascii_charset_drops_non_ascii() {
        let profile = LanguageProfile {
            charset: Charset::Ascii,
            ..LanguageProfile::go().as_ref().clone()
        };
        assert_eq!(sanitize_identifier(&profile, "café"), "caf");
        assert_eq!(sanitize_identifier(&profile, "漢字"), "v");
        assert_eq!(sanitize_identifier(&profile, "漢1"), "_1");
    }
}
