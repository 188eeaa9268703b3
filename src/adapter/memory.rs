//! In-memory form surface for tests and demos.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use super::{FormAdapter, GroupId, GroupState};

#[derive(Debug, Default)]
struct MemoryField {
    value: String,
    checked: bool,
    label: Option<String>,
    grouped: bool,
}

#[derive(Debug, Default)]
struct MemoryInner {
    fields: HashMap<String, MemoryField>,
    states: HashMap<String, Vec<GroupState>>,
    messages: HashMap<String, String>,
}

/// A [`FormAdapter`] over plain in-memory tables.
///
/// Each field gets a same-named group unless detached with
/// [`detach_group`](Self::detach_group). Every `render_group` call is
/// recorded so tests can assert on the exact sequence of rendered states.
///
/// Handles share state: cloning is cheap and every clone observes the same
/// surface, so a test can keep a handle while the coordinator owns another.
#[derive(Debug, Clone, Default)]
pub struct MemoryForm {
    inner: Arc<RwLock<MemoryInner>>,
}

impl MemoryForm {
    /// Create an empty surface.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a text field with an initial value.
    pub fn add_text(&self, name: impl Into<String>, value: impl Into<String>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.fields.insert(
                name.into(),
                MemoryField {
                    value: value.into(),
                    grouped: true,
                    ..Default::default()
                },
            );
        }
    }

    /// Add a boolean-like field with an initial checked state.
    pub fn add_toggle(&self, name: impl Into<String>, checked: bool) {
        if let Ok(mut guard) = self.inner.write() {
            guard.fields.insert(
                name.into(),
                MemoryField {
                    checked,
                    grouped: true,
                    ..Default::default()
                },
            );
        }
    }

    /// Attach label text to a field.
    pub fn set_label(&self, name: &str, label: impl Into<String>) {
        if let Ok(mut guard) = self.inner.write()
            && let Some(field) = guard.fields.get_mut(name)
        {
            field.label = Some(label.into());
        }
    }

    /// Detach a field from its group; render calls for it are dropped.
    pub fn detach_group(&self, name: &str) {
        if let Ok(mut guard) = self.inner.write()
            && let Some(field) = guard.fields.get_mut(name)
        {
            field.grouped = false;
        }
    }

    /// Update a field's text value.
    pub fn set_value(&self, name: &str, value: impl Into<String>) {
        if let Ok(mut guard) = self.inner.write()
            && let Some(field) = guard.fields.get_mut(name)
        {
            field.value = value.into();
        }
    }

    /// Update a toggle's checked state.
    pub fn set_checked(&self, name: &str, checked: bool) {
        if let Ok(mut guard) = self.inner.write()
            && let Some(field) = guard.fields.get_mut(name)
        {
            field.checked = checked;
        }
    }

    /// Last state rendered for a field's group, `Neutral` if none yet.
    pub fn state(&self, name: &str) -> GroupState {
        self.inner
            .read()
            .ok()
            .and_then(|guard| guard.states.get(name).and_then(|states| states.last().copied()))
            .unwrap_or_default()
    }

    /// Every state rendered for a field's group, in call order.
    pub fn state_history(&self, name: &str) -> Vec<GroupState> {
        self.inner
            .read()
            .ok()
            .and_then(|guard| guard.states.get(name).cloned())
            .unwrap_or_default()
    }

    /// Last message written to a field's group.
    pub fn message(&self, name: &str) -> Option<String> {
        self.inner
            .read()
            .ok()
            .and_then(|guard| guard.messages.get(name).cloned())
    }
}

impl FormAdapter for MemoryForm {
    fn field_value(&self, field: &str) -> String {
        self.inner
            .read()
            .ok()
            .and_then(|guard| guard.fields.get(field).map(|f| f.value.clone()))
            .unwrap_or_default()
    }

    fn field_checked(&self, field: &str) -> bool {
        self.inner
            .read()
            .ok()
            .and_then(|guard| guard.fields.get(field).map(|f| f.checked))
            .unwrap_or(false)
    }

    fn field_group(&self, field: &str) -> Option<GroupId> {
        self.inner
            .read()
            .ok()
            .and_then(|guard| guard.fields.get(field).map(|f| f.grouped))
            .filter(|grouped| *grouped)
            .map(|_| GroupId::new(field))
    }

    fn has_field(&self, field: &str) -> bool {
        self.inner
            .read()
            .map(|guard| guard.fields.contains_key(field))
            .unwrap_or(false)
    }

    fn field_label(&self, field: &str) -> Option<String> {
        self.inner
            .read()
            .ok()
            .and_then(|guard| guard.fields.get(field).and_then(|f| f.label.clone()))
    }

    fn render_group(&self, group: &GroupId, state: GroupState) {
        if let Ok(mut guard) = self.inner.write() {
            guard.states.entry(group.0.clone()).or_default().push(state);
        }
    }

    fn set_group_message(&self, group: &GroupId, text: &str) {
        if let Ok(mut guard) = self.inner.write() {
            guard.messages.insert(group.0.clone(), text.to_string());
        }
    }

    fn clear_values(&self) {
        if let Ok(mut guard) = self.inner.write() {
            for field in guard.fields.values_mut() {
                field.value.clear();
                field.checked = false;
            }
        }
    }
}
