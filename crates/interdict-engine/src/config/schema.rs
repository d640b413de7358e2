use serde::Deserialize;

use interdict_core::action::ActionToken;
use interdict_core::error::{InterdictError, Result};

/// Root of a policy rule file.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PolicyConfig {
    pub version: u32,

    #[serde(default)]
    pub rules: Vec<RuleConfig>,
}

impl PolicyConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(InterdictError::UnsupportedVersion);
        }
        for rule in &self.rules {
            rule.validate()?;
        }
        Ok(())
    }
}

/// One rule as written in the file.
///
/// Action lists hold directives by name; unknown *names* survive parsing as
/// `Unrecognized` tokens (lenient by design), while unknown *fields* fail
/// loudly.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct RuleConfig {
    pub id: String,

    #[serde(default)]
    pub exempt_groups: Option<Vec<String>>,

    #[serde(default)]
    pub on_destroy: Option<Vec<ActionToken>>,

    #[serde(default)]
    pub on_destroy_with: Option<Vec<ActionToken>>,

    #[serde(default)]
    pub on_create: Option<Vec<ActionToken>>,

    #[serde(default)]
    pub on_use: Option<Vec<ActionToken>>,

    #[serde(default)]
    pub on_drop: Option<Vec<ActionToken>>,
}

impl RuleConfig {
    pub fn validate(&self) -> Result<()> {
        if self.id.is_empty() {
            return Err(InterdictError::BadConfig(
                "rule id must not be empty".into(),
            ));
        }
        Ok(())
    }
}
