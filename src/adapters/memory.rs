use crate::domain::model::MessageBody;
use crate::domain::ports::FormSurface;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormMessage {
    pub class: String,
    pub body: MessageBody,
}

#[derive(Debug, Default)]
struct FormState {
    fields: HashMap<String, String>,
    displays: HashMap<String, String>,
    visible: HashMap<String, bool>,
    options: HashMap<String, Vec<SelectOption>>,
    messages: HashMap<String, FormMessage>,
    alerts: Vec<String>,
}

/// Headless `FormSurface` holding the page state in memory.
///
/// Elements are created on first write; panels start hidden.
#[derive(Debug, Default)]
pub struct MemoryForm {
    state: Mutex<FormState>,
}

impl MemoryForm {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, FormState> {
        // A panic while holding the lock cannot leave the maps half-written.
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn set_field(&self, id: &str, value: &str) {
        self.state().fields.insert(id.to_string(), value.to_string());
    }

    pub fn options(&self, list_id: &str) -> Vec<SelectOption> {
        self.state().options.get(list_id).cloned().unwrap_or_default()
    }

    pub fn is_visible(&self, id: &str) -> bool {
        self.state().visible.get(id).copied().unwrap_or(false)
    }

    pub fn message(&self, id: &str) -> Option<FormMessage> {
        self.state().messages.get(id).cloned()
    }

    pub fn alerts(&self) -> Vec<String> {
        self.state().alerts.clone()
    }

    pub fn take_alerts(&self) -> Vec<String> {
        std::mem::take(&mut self.state().alerts)
    }
}

impl FormSurface for MemoryForm {
    fn field_value(&self, id: &str) -> String {
        self.state().fields.get(id).cloned().unwrap_or_default()
    }

    fn display_value(&self, id: &str) -> String {
        self.state().displays.get(id).cloned().unwrap_or_default()
    }

    fn set_display_value(&self, id: &str, value: &str) {
        self.state()
            .displays
            .insert(id.to_string(), value.to_string());
    }

    fn set_visibility(&self, id: &str, visible: bool) {
        self.state().visible.insert(id.to_string(), visible);
    }

    fn append_option(&self, list_id: &str, value: &str, label: &str) {
        self.state()
            .options
            .entry(list_id.to_string())
            .or_default()
            .push(SelectOption {
                value: value.to_string(),
                label: label.to_string(),
            });
    }

    fn set_message(&self, id: &str, class: &str, body: MessageBody) {
        self.state().messages.insert(
            id.to_string(),
            FormMessage {
                class: class.to_string(),
                body,
            },
        );
    }

    fn reset_form(&self) {
        self.state().fields.values_mut().for_each(String::clear);
    }

    fn alert(&self, message: &str) {
        tracing::debug!("alert: {}", message);
        self.state().alerts.push(message.to_string());
    }
}
