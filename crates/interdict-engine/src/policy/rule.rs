//! Compiled policy rules.

use std::collections::HashMap;
use std::sync::Arc;

use interdict_core::action::ActionToken;
use interdict_core::error::{InterdictError, Result};
use interdict_core::event::EventKind;

use crate::config::schema::{PolicyConfig, RuleConfig};

use super::exempt::ExemptGroups;

/// One rule: optional exemptions plus up to five ordered action chains.
///
/// An absent chain means that event kind is unrestricted: always allowed,
/// no side effects, no debounce interaction. The resource pattern a rule
/// governs is keyed externally (see [`Ruleset`]); the rule itself only
/// carries behavior.
#[derive(Debug, Clone, Default)]
pub struct PolicyRule {
    exempt: Option<ExemptGroups>,
    on_destroy: Option<Vec<ActionToken>>,
    on_destroy_with: Option<Vec<ActionToken>>,
    on_create: Option<Vec<ActionToken>>,
    on_use: Option<Vec<ActionToken>>,
    on_drop: Option<Vec<ActionToken>>,
}

impl PolicyRule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compile a rule from its configuration.
    ///
    /// Unrecognized action tokens survive (they were warned about during
    /// parsing) so rule files written for newer engines still load.
    pub fn from_config(cfg: &RuleConfig) -> Self {
        Self {
            exempt: cfg.exempt_groups.as_deref().map(ExemptGroups::new),
            on_destroy: cfg.on_destroy.clone(),
            on_destroy_with: cfg.on_destroy_with.clone(),
            on_create: cfg.on_create.clone(),
            on_use: cfg.on_use.clone(),
            on_drop: cfg.on_drop.clone(),
        }
    }

    /// Replace the chain for one event kind.
    pub fn set_chain(&mut self, kind: EventKind, chain: Vec<ActionToken>) {
        let slot = match kind {
            EventKind::Destroy => &mut self.on_destroy,
            EventKind::DestroyWith => &mut self.on_destroy_with,
            EventKind::Create => &mut self.on_create,
            EventKind::Use => &mut self.on_use,
            EventKind::Drop => &mut self.on_drop,
        };
        *slot = Some(chain);
    }

    /// Replace the exempt-group set.
    pub fn set_exempt_groups(&mut self, groups: &[String]) {
        self.exempt = Some(ExemptGroups::new(groups));
    }

    /// The action chain configured for an event kind, if any.
    pub fn chain(&self, kind: EventKind) -> Option<&[ActionToken]> {
        let chain = match kind {
            EventKind::Destroy => &self.on_destroy,
            EventKind::DestroyWith => &self.on_destroy_with,
            EventKind::Create => &self.on_create,
            EventKind::Use => &self.on_use,
            EventKind::Drop => &self.on_drop,
        };
        chain.as_deref()
    }

    /// True iff the actor's groups bypass this rule entirely.
    pub fn is_exempt(&self, actor_groups: &[String]) -> bool {
        self.exempt
            .as_ref()
            .is_some_and(|e| e.is_exempt(actor_groups))
    }
}

/// Compiled rules keyed by id.
///
/// Resource-pattern matching stays with the host; the id is whatever key the
/// host derives from its pattern table.
#[derive(Debug, Default)]
pub struct Ruleset {
    rules: HashMap<String, Arc<PolicyRule>>,
}

impl Ruleset {
    /// Compile every rule in a validated config. Duplicate ids are rejected.
    pub fn compile(cfg: &PolicyConfig) -> Result<Self> {
        let mut rules = HashMap::with_capacity(cfg.rules.len());
        for rc in &cfg.rules {
            let compiled = Arc::new(PolicyRule::from_config(rc));
            if rules.insert(rc.id.clone(), compiled).is_some() {
                return Err(InterdictError::BadConfig(format!(
                    "duplicate rule id: {}",
                    rc.id
                )));
            }
        }
        Ok(Self { rules })
    }

    pub fn get(&self, id: &str) -> Option<Arc<PolicyRule>> {
        self.rules.get(id).cloned()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
