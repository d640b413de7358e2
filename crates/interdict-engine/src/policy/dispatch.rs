//! Action chain execution.

use interdict_core::action::{ActionToken, Verdict};

use crate::effects::EffectBundle;
use crate::tracker::Freshness;

/// Fold a chain into a verdict, firing effects along the way.
///
/// Every token is processed; a `deny` does not stop later tokens, it only
/// flips the final verdict. Enforcement tokens (deny/kick/ban) run on every
/// event; notify/log/tell are suppressed while the event is repeating.
pub(crate) fn dispatch(
    chain: &[ActionToken],
    freshness: Freshness,
    effects: &EffectBundle<'_>,
) -> Verdict {
    let fresh = freshness == Freshness::Fresh;
    let mut verdict = Verdict::Allow;

    for token in chain {
        match token {
            ActionToken::Deny => verdict = Verdict::Deny,
            ActionToken::Kick => effects.kick(),
            ActionToken::Ban => effects.ban(),
            ActionToken::Notify if fresh => effects.notify_admins(),
            ActionToken::Log if fresh => effects.log(),
            ActionToken::Tell if fresh => effects.tell(),
            // Suppressed observability effects and unknown directives.
            ActionToken::Notify | ActionToken::Log | ActionToken::Tell => {}
            ActionToken::Unrecognized(_) => {}
        }
    }

    verdict
}
