//! Resource display-name lookup (host collaborator).

use interdict_core::event::ResourceId;

/// Resolves a resource type id to a human-readable name for messages.
pub trait NameResolver: Send + Sync {
    fn display_name(&self, resource: ResourceId) -> String;
}

/// Fallback resolver that renders the raw id (`#4`).
#[derive(Debug, Default)]
pub struct RawIds;

impl NameResolver for RawIds {
    fn display_name(&self, resource: ResourceId) -> String {
        format!("#{resource}")
    }
}
