use std::collections::HashSet;

use genident::{
    to_private, to_public, LanguageProfile, Scope, ScopeError, ScopeOptions, VisibilityError,
    MAX_ATTEMPTS,
};

#[test]
fn generates_helpers_for_nested_functions() {
    let file = Scope::default();
    let marshal = file.child();
    let unmarshal = file.child();

    // package level helpers must never collide
    let m_helper = marshal.claim_global("encode").unwrap();
    let u_helper = unmarshal.claim_global("encode").unwrap();
    assert_eq!(m_helper, "encode");
    assert_eq!(u_helper, "encode0");

    // locals are independent per function body
    let m_var = marshal.claim(&marshal.suggest("PersonRecord")).unwrap();
    let u_var = unmarshal.claim(&unmarshal.suggest("PersonRecord")).unwrap();
    assert_eq!(m_var, "pr");
    assert_eq!(u_var, "pr");

    // a nested block shadows freely but respects global helpers
    let block = marshal.child();
    assert_eq!(block.claim("pr").unwrap(), "pr");
    assert_eq!(block.claim_global("encode").unwrap(), "encode1");
    assert!(file.is_claimed("encode1", false));
}

#[test]
fn global_claim_reserves_name_in_parent() {
    let g1 = Scope::default();
    let s1 = g1.child();
    assert_eq!(s1.claim_global("panic").unwrap(), "_panic");
    assert_eq!(g1.claim("panic").unwrap(), "_panic0");
}

#[test]
fn thousand_and_first_claim_fails() {
    let scope = Scope::default();
    let names = (0..1000)
        .map(|_| scope.claim("v").unwrap())
        .collect::<HashSet<_>>();
    assert_eq!(names.len(), 1000);
    assert!(names.contains("v"));
    assert!(names.contains("v998"));

    match scope.claim("v") {
        Err(ScopeError::Exhausted { attempts, .. }) => assert_eq!(attempts, MAX_ATTEMPTS),
        other => panic!("expected exhaustion, got {other:?}"),
    }
}

#[test]
fn suggestions_match_known_values() {
    let scope = Scope::default();
    let cases = [
        ("a", "a"),
        ("aPerson", "ap"),
        ("HTTP", "h"),
        ("FxUxNxC", "_func"),
        ("_", "v"),
    ];
    for (input, want) in cases {
        assert_eq!(scope.suggest(input), want, "suggest({input:?})");
    }
}

#[test]
fn visibility_round_trip_errors_are_distinct() {
    assert_eq!(to_public("x").unwrap(), "X");
    assert_eq!(to_private("X").unwrap(), "x");
    assert_eq!(to_private("_X").unwrap(), "_X");
    assert!(matches!(
        to_public("_"),
        Err(VisibilityError::NoPublicForm { .. })
    ));
    assert!(matches!(
        to_public(""),
        Err(VisibilityError::InvalidIdentifier { .. })
    ));
    assert!(matches!(
        to_private(""),
        Err(VisibilityError::InvalidIdentifier { .. })
    ));
}

#[test]
fn custom_profile_from_toml_backs_a_scope() {
    let profile = LanguageProfile::from_toml_str(
        r#"
        extends = "typescript"
        reserved_words = ["ctx"]
        "#,
    )
    .unwrap();

    let root = Scope::for_profile(profile.into());
    assert_eq!(root.claim("ctx").unwrap(), "_ctx");
    assert_eq!(root.claim("class").unwrap(), "_class");
    assert_eq!(root.child().claim("panic").unwrap(), "panic");
}

#[test]
fn overrides_are_resolved_per_call() {
    let root = Scope::new(ScopeOptions::new().with_sanitizer(|raw| raw.to_uppercase()));
    let child = root.derive(ScopeOptions::new().with_suggest(|_| "item".to_string()));

    assert_eq!(child.claim("id").unwrap(), "ID");
    assert_eq!(child.suggest("Whatever"), "item");
    assert_eq!(root.suggest("OrderLine"), "ol");
}
