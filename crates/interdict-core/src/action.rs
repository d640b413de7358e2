//! Action tokens and the allow/deny verdict.
//!
//! Rule files name actions case-insensitively. Parsing is lenient: unknown
//! directives map to [`ActionToken::Unrecognized`] so a rule file written
//! for a newer engine still loads; dispatch skips them.

use serde::{Deserialize, Deserializer};

/// One directive in a rule's action chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionToken {
    /// Flip the final verdict to deny.
    Deny,
    /// Forcibly disconnect the actor.
    Kick,
    /// Persist a ban and disconnect the actor.
    Ban,
    /// Broadcast the attempt to privileged observers. Suppressed on repeats.
    Notify,
    /// Append a structured record of the attempt. Suppressed on repeats.
    Log,
    /// Send feedback to the actor. Suppressed on repeats.
    Tell,
    /// Unknown directive, kept so the lenient ignore stays auditable.
    Unrecognized(String),
}

impl ActionToken {
    /// Parse a directive name, case-insensitively. Never fails; unknown
    /// names are preserved as [`ActionToken::Unrecognized`] and warned about.
    pub fn parse(raw: &str) -> Self {
        match raw.to_ascii_lowercase().as_str() {
            "deny" => ActionToken::Deny,
            "kick" => ActionToken::Kick,
            "ban" => ActionToken::Ban,
            "notify" => ActionToken::Notify,
            "log" => ActionToken::Log,
            "tell" => ActionToken::Tell,
            _ => {
                tracing::warn!(token = %raw, "unrecognized action token, ignoring");
                ActionToken::Unrecognized(raw.to_string())
            }
        }
    }

    /// Directive name as written in rule files.
    pub fn as_str(&self) -> &str {
        match self {
            ActionToken::Deny => "deny",
            ActionToken::Kick => "kick",
            ActionToken::Ban => "ban",
            ActionToken::Notify => "notify",
            ActionToken::Log => "log",
            ActionToken::Tell => "tell",
            ActionToken::Unrecognized(raw) => raw,
        }
    }
}

impl<'de> Deserialize<'de> for ActionToken {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(ActionToken::parse(&raw))
    }
}

/// Final decision for one event, folded left-to-right over a chain.
///
/// Starts at `Allow`; any `deny` token flips it; nothing flips it back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Let the action pass through.
    Allow,
    /// Block the action.
    Deny,
}

impl Verdict {
    /// True if the host should let the action proceed.
    pub fn allows(self) -> bool {
        matches!(self, Verdict::Allow)
    }
}
