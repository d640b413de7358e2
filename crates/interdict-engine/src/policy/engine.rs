//! Enforcement entry points.
//!
//! `PolicyEngine` owns the debounce tracker and the host collaborators
//! (clock, name resolver) and exposes one entry point per event kind. Every
//! entry point follows the same template: absent or empty chain means allow,
//! an exempt actor is allowed without leaving a tracker trace, otherwise the
//! event is classified fresh-or-repeating and the chain is folded.

use std::sync::Arc;

use interdict_core::action::Verdict;
use interdict_core::event::{Actor, EventKind, ResourceId};

use crate::effects::{Attempt, EffectBundle, EffectSink, SilentSink};
use crate::names::NameResolver;
use crate::obs::DecisionCounters;
use crate::time::{Clock, SystemClock};
use crate::tracker::{ActorTracker, Freshness};

use super::dispatch;
use super::rule::PolicyRule;

/// Shared enforcement runtime.
/// Construct once at startup, then share via Arc.
pub struct PolicyEngine {
    tracker: ActorTracker,
    clock: Arc<dyn Clock>,
    names: Arc<dyn NameResolver>,
    decisions: DecisionCounters,
}

impl PolicyEngine {
    /// Build an engine on the system clock.
    pub fn new(names: Arc<dyn NameResolver>) -> Self {
        Self::with_clock(names, Arc::new(SystemClock))
    }

    /// Build an engine with an explicit time source.
    pub fn with_clock(names: Arc<dyn NameResolver>, clock: Arc<dyn Clock>) -> Self {
        Self {
            tracker: ActorTracker::new(),
            clock,
            names,
            decisions: DecisionCounters::default(),
        }
    }

    /// Called when an actor destroys a resource.
    pub fn on_destroy(
        &self,
        rule: &PolicyRule,
        actor: &Actor,
        resource: ResourceId,
        sink: &dyn EffectSink,
    ) -> Verdict {
        self.enforce(EventKind::Destroy, rule, actor, resource, sink)
    }

    /// Called when an actor swings a held resource at something.
    pub fn on_destroy_with(
        &self,
        rule: &PolicyRule,
        actor: &Actor,
        resource: ResourceId,
        sink: &dyn EffectSink,
    ) -> Verdict {
        self.enforce(EventKind::DestroyWith, rule, actor, resource, sink)
    }

    /// Called when an actor creates or places a resource.
    pub fn on_create(
        &self,
        rule: &PolicyRule,
        actor: &Actor,
        resource: ResourceId,
        sink: &dyn EffectSink,
    ) -> Verdict {
        self.enforce(EventKind::Create, rule, actor, resource, sink)
    }

    /// Called when an actor uses a resource.
    pub fn on_use(
        &self,
        rule: &PolicyRule,
        actor: &Actor,
        resource: ResourceId,
        sink: &dyn EffectSink,
    ) -> Verdict {
        self.enforce(EventKind::Use, rule, actor, resource, sink)
    }

    /// Same dispatch as [`Self::on_use`] with every effect slot a no-op.
    ///
    /// The verdict is computed normally and the debounce window is still
    /// consumed: a silent check followed by a loud one inside the window
    /// reports the loud one as repeating.
    pub fn on_silent_use(&self, rule: &PolicyRule, actor: &Actor, resource: ResourceId) -> Verdict {
        self.enforce(EventKind::Use, rule, actor, resource, &SilentSink)
    }

    /// Called when an actor drops a resource.
    pub fn on_drop(
        &self,
        rule: &PolicyRule,
        actor: &Actor,
        resource: ResourceId,
        sink: &dyn EffectSink,
    ) -> Verdict {
        self.enforce(EventKind::Drop, rule, actor, resource, sink)
    }

    fn enforce(
        &self,
        kind: EventKind,
        rule: &PolicyRule,
        actor: &Actor,
        resource: ResourceId,
        sink: &dyn EffectSink,
    ) -> Verdict {
        // An unrestricted event kind never enters the debounce system.
        let Some(chain) = rule.chain(kind) else {
            return Verdict::Allow;
        };
        if chain.is_empty() {
            return Verdict::Allow;
        }
        if rule.is_exempt(&actor.groups) {
            return Verdict::Allow;
        }

        let now_ms = self.clock.now_ms();
        let freshness = self.tracker.classify(&actor.id, resource, now_ms);
        let name = self.names.display_name(resource);
        let effects = EffectBundle::new(
            sink,
            Attempt {
                kind,
                actor: &actor.id,
                resource,
                resource_name: &name,
            },
        );

        let verdict = dispatch::dispatch(chain, freshness, &effects);
        self.decisions.record(kind, verdict);
        tracing::debug!(
            kind = kind.as_str(),
            actor = %actor.id,
            resource,
            repeating = (freshness == Freshness::Repeating),
            allowed = verdict.allows(),
            "policy decision"
        );
        verdict
    }

    /// Drop an actor's debounce state (e.g. on disconnect).
    pub fn forget_actor(&self, actor_id: &str) {
        self.tracker.forget(actor_id);
    }

    /// Drop all debounce state.
    pub fn forget_all_actors(&self) {
        self.tracker.forget_all();
    }

    /// Whether an actor currently has debounce state.
    pub fn is_tracking(&self, actor_id: &str) -> bool {
        self.tracker.is_tracked(actor_id)
    }

    /// Allow/deny counters per event kind.
    pub fn decisions(&self) -> &DecisionCounters {
        &self.decisions
    }
}
