//! Strict config parsing and rule compilation.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use interdict_core::action::ActionToken;
use interdict_core::InterdictError;
use interdict_engine::config;
use interdict_engine::policy::Ruleset;

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
rules:
  - id: "no-tnt"
    on_dstroy: [deny] # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert!(matches!(err, InterdictError::BadConfig(_)));
}

#[test]
fn ok_minimal_config() {
    let ok = r#"
version: 1
rules:
  - id: "no-tnt"
    on_destroy: [deny]
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.rules[0].id, "no-tnt");
    assert_eq!(
        cfg.rules[0].on_destroy.as_deref(),
        Some([ActionToken::Deny].as_slice())
    );
}

#[test]
fn version_gate() {
    let bad = r#"
version: 2
rules: []
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert!(matches!(err, InterdictError::UnsupportedVersion));
}

#[test]
fn empty_rule_id_rejected() {
    let bad = r#"
version: 1
rules:
  - id: ""
    on_use: [deny]
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert!(matches!(err, InterdictError::BadConfig(_)));
}

#[test]
fn unknown_tokens_survive_loading() {
    let ok = r#"
version: 1
rules:
  - id: "lava"
    on_use: [deny, explode]
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(
        cfg.rules[0].on_use.as_deref(),
        Some(
            [
                ActionToken::Deny,
                ActionToken::Unrecognized("explode".to_string()),
            ]
            .as_slice()
        )
    );
}

#[test]
fn duplicate_rule_ids_rejected() {
    let dup = r#"
version: 1
rules:
  - id: "lava"
    on_use: [deny]
  - id: "lava"
    on_drop: [deny]
"#;
    let cfg = config::load_from_str(dup).expect("must parse");
    let err = Ruleset::compile(&cfg).expect_err("must fail");
    assert!(matches!(err, InterdictError::BadConfig(_)));
}

#[test]
fn ruleset_lookup() {
    let ok = r#"
version: 1
rules:
  - id: "lava"
    on_use: [deny, tell]
  - id: "tnt"
    exempt_groups: [admins]
    on_create: [deny, notify]
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    let rules = Ruleset::compile(&cfg).expect("must compile");

    assert_eq!(rules.len(), 2);
    assert!(rules.get("lava").is_some());
    assert!(rules.get("water").is_none());
}

#[test]
fn exempt_groups_fold_case() {
    let ok = r#"
version: 1
rules:
  - id: "tnt"
    exempt_groups: [Admins]
    on_create: [deny]
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    let rules = Ruleset::compile(&cfg).expect("must compile");
    let rule = rules.get("tnt").unwrap();

    assert!(rule.is_exempt(&["aDmInS".to_string()]));
    assert!(!rule.is_exempt(&["mods".to_string()]));
    assert!(!rule.is_exempt(&[]));
}
