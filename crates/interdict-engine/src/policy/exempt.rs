//! Group-based exemptions.
//!
//! Checked before any tracker mutation or effect: an exempt actor leaves no
//! trace in the engine.

use std::collections::HashSet;

/// Compiled exempt-group set, case-normalized at build time.
#[derive(Debug, Clone, Default)]
pub struct ExemptGroups {
    groups: HashSet<String>,
}

impl ExemptGroups {
    /// Build from configured group names, lowercasing once.
    pub fn new(groups: &[String]) -> Self {
        Self {
            groups: groups.iter().map(|g| g.to_lowercase()).collect(),
        }
    }

    /// True iff any of the actor's groups is exempt (case-insensitive).
    pub fn is_exempt(&self, actor_groups: &[String]) -> bool {
        actor_groups
            .iter()
            .any(|g| self.groups.contains(&g.to_lowercase()))
    }
}
