//! Host-surface adapter contract.
//!
//! The engine never touches a concrete element tree. Everything it needs
//! from the screen — reading values, finding groups, flipping rendered
//! state — goes through [`FormAdapter`], which the host implements over its
//! own UI toolkit. Event wiring stays on the host side too: the adapter
//! subscribes to its toolkit's change/commit/submit signals and forwards
//! them to the coordinator's trigger handlers.

pub mod memory;

pub use memory::MemoryForm;

/// Identifier of a renderable unit containing a field and its message slot.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GroupId(pub String);

impl GroupId {
    /// Create a group id.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl std::fmt::Display for GroupId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Rendered state of a group, reflecting the latest verdict.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GroupState {
    /// No verdict rendered (untouched, or after a reset).
    #[default]
    Neutral,
    /// The field's last evaluation passed.
    Valid,
    /// The field's last evaluation failed.
    Invalid,
}

/// What the validation core requires from the host surface.
///
/// All methods take `&self`; adapters over mutable surfaces use interior
/// mutability (see [`MemoryForm`]).
pub trait FormAdapter {
    /// Current text value of a field.
    fn field_value(&self, field: &str) -> String;

    /// Current checked state of a boolean-like field.
    fn field_checked(&self, field: &str) -> bool;

    /// The group containing a field, if discoverable. `None` skips
    /// rendering for that field; its verdict is still computed.
    fn field_group(&self, field: &str) -> Option<GroupId>;

    /// Whether any field with this identifier exists on the surface,
    /// registered with the coordinator or not.
    fn has_field(&self, field: &str) -> bool;

    /// Best-effort label text for a field, used when rendering `match`
    /// failures.
    fn field_label(&self, field: &str) -> Option<String>;

    /// Reflect a verdict (or its absence) onto a group.
    fn render_group(&self, group: &GroupId, state: GroupState);

    /// Write text into a group's message slot.
    fn set_group_message(&self, group: &GroupId, text: &str);

    /// Clear every field value on the surface (reset support).
    fn clear_values(&self);
}
