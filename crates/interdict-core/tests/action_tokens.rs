//! Action token parsing and verdict semantics.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use interdict_core::action::{ActionToken, Verdict};

#[test]
fn parse_is_case_insensitive() {
    assert_eq!(ActionToken::parse("deny"), ActionToken::Deny);
    assert_eq!(ActionToken::parse("DENY"), ActionToken::Deny);
    assert_eq!(ActionToken::parse("Kick"), ActionToken::Kick);
    assert_eq!(ActionToken::parse("bAn"), ActionToken::Ban);
    assert_eq!(ActionToken::parse("NOTIFY"), ActionToken::Notify);
    assert_eq!(ActionToken::parse("Log"), ActionToken::Log);
    assert_eq!(ActionToken::parse("tell"), ActionToken::Tell);
}

#[test]
fn unknown_directives_are_kept_not_dropped() {
    let token = ActionToken::parse("explode");
    assert_eq!(token, ActionToken::Unrecognized("explode".to_string()));
    assert_eq!(token.as_str(), "explode");
}

#[test]
fn deserializes_leniently() {
    let tokens: Vec<ActionToken> = serde_yaml::from_str("[deny, KICK, frobnicate]").unwrap();
    assert_eq!(
        tokens,
        vec![
            ActionToken::Deny,
            ActionToken::Kick,
            ActionToken::Unrecognized("frobnicate".to_string()),
        ]
    );
}

#[test]
fn verdict_allows() {
    assert!(Verdict::Allow.allows());
    assert!(!Verdict::Deny.allows());
}
