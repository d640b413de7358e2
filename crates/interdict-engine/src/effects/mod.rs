//! Host-bound side effects.
//!
//! The engine performs no I/O. Every observable consequence of a decision
//! goes through an [`EffectSink`] the host binds to its own delivery
//! mechanisms; the engine formats the per-event wording and hands finished
//! strings to the sink. Effects are fire-and-forget: slots return nothing,
//! and the engine neither retries them nor rolls anything back when one
//! misbehaves.

mod text;

use interdict_core::event::{EventKind, ResourceId};

/// One policy-relevant attempt, as handed to the `log` slot.
#[derive(Debug, Clone)]
pub struct Attempt<'a> {
    pub kind: EventKind,
    pub actor: &'a str,
    pub resource: ResourceId,
    pub resource_name: &'a str,
}

/// Capability slots the host binds per integration.
pub trait EffectSink: Send + Sync {
    /// Append a structured record of the attempt.
    fn log(&self, attempt: &Attempt<'_>);
    /// Forcibly disconnect the actor with the given message.
    fn kick(&self, actor: &str, message: &str);
    /// Persist a ban record and disconnect the actor.
    fn ban(&self, actor: &str, message: &str);
    /// Broadcast to privileged observers.
    fn notify_admins(&self, message: &str);
    /// Send feedback to the acting player.
    fn tell(&self, actor: &str, message: &str);
}

/// Sink that does nothing; used for silent verdict-only checks.
#[derive(Debug, Default)]
pub struct SilentSink;

impl EffectSink for SilentSink {
    fn log(&self, _attempt: &Attempt<'_>) {}
    fn kick(&self, _actor: &str, _message: &str) {}
    fn ban(&self, _actor: &str, _message: &str) {}
    fn notify_admins(&self, _message: &str) {}
    fn tell(&self, _actor: &str, _message: &str) {}
}

/// A sink bound to one event's identifiers and wording.
///
/// One parameterized value per dispatch; the per-event phrasing differences
/// live in the `text` table.
pub(crate) struct EffectBundle<'a> {
    sink: &'a dyn EffectSink,
    attempt: Attempt<'a>,
}

impl<'a> EffectBundle<'a> {
    pub(crate) fn new(sink: &'a dyn EffectSink, attempt: Attempt<'a>) -> Self {
        Self { sink, attempt }
    }

    pub(crate) fn log(&self) {
        self.sink.log(&self.attempt);
    }

    pub(crate) fn kick(&self) {
        let msg = text::denial(self.attempt.kind, self.attempt.resource_name);
        self.sink.kick(self.attempt.actor, &msg);
    }

    pub(crate) fn ban(&self) {
        let msg = format!(
            "Banned: {}",
            text::denial(self.attempt.kind, self.attempt.resource_name)
        );
        self.sink.ban(self.attempt.actor, &msg);
    }

    pub(crate) fn notify_admins(&self) {
        let msg = text::admin_alert(
            self.attempt.kind,
            self.attempt.actor,
            self.attempt.resource_name,
        );
        self.sink.notify_admins(&msg);
    }

    pub(crate) fn tell(&self) {
        let msg = text::feedback(self.attempt.kind, self.attempt.resource_name);
        self.sink.tell(self.attempt.actor, &msg);
    }
}
