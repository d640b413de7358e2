//! Per-event message wording.
//!
//! One table instead of five duplicated handler objects. The ban message is
//! always the denial phrase prefixed with "Banned: ".

use interdict_core::event::EventKind;

/// Phrase used for kick messages and, prefixed, for ban messages.
pub(crate) fn denial(kind: EventKind, name: &str) -> String {
    match kind {
        EventKind::Destroy => format!("You are not allowed to destroy {name}"),
        EventKind::DestroyWith => format!("You can't destroy with {name}"),
        EventKind::Create => format!("You can't create {name}"),
        EventKind::Use => format!("You can't use {name}"),
        EventKind::Drop => format!("You can't drop {name}"),
    }
}

/// Broadcast sent to privileged observers.
pub(crate) fn admin_alert(kind: EventKind, actor: &str, name: &str) -> String {
    match kind {
        EventKind::Destroy => format!("{actor} tried to destroy {name}."),
        EventKind::DestroyWith => format!("{actor} tried to destroy with {name}."),
        EventKind::Create => format!("{actor} tried to create {name}."),
        EventKind::Use => format!("{actor} tried to use {name}."),
        EventKind::Drop => format!("{actor} tried to drop {name}."),
    }
}

/// Feedback sent to the actor themselves.
pub(crate) fn feedback(kind: EventKind, name: &str) -> String {
    match kind {
        EventKind::Destroy => format!("You are not allowed to destroy {name}."),
        EventKind::DestroyWith => format!("You can't destroy with {name}."),
        EventKind::Create => format!("You can't create {name}."),
        EventKind::Use => format!("You're not allowed to use {name}."),
        EventKind::Drop => format!("You're not allowed to drop {name}."),
    }
}
