//! Interaction event vocabulary.

/// Resource type identifier supplied by the host (block or item type id).
pub type ResourceId = i32;

/// The five interaction kinds a rule can restrict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Destroy,
    DestroyWith,
    Create,
    Use,
    Drop,
}

impl EventKind {
    /// All kinds, in declaration order.
    pub const ALL: [EventKind; 5] = [
        EventKind::Destroy,
        EventKind::DestroyWith,
        EventKind::Create,
        EventKind::Use,
        EventKind::Drop,
    ];

    /// Stable name used in logs and counters.
    pub fn as_str(self) -> &'static str {
        match self {
            EventKind::Destroy => "destroy",
            EventKind::DestroyWith => "destroy-with",
            EventKind::Create => "create",
            EventKind::Use => "use",
            EventKind::Drop => "drop",
        }
    }
}

/// The entity attempting an interaction.
#[derive(Debug, Clone)]
pub struct Actor {
    /// Stable identity (e.g. login name).
    pub id: String,
    /// Group memberships, consulted by exemption checks.
    pub groups: Vec<String>,
}

impl Actor {
    pub fn new(id: String, groups: Vec<String>) -> Self {
        Self { id, groups }
    }
}
