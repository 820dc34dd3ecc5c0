use std::time::Duration;

use serde::Serialize;
use serde_json::Value;

use crate::domain::{FieldDescriptor, FieldKind};
use crate::form::{FieldState, is_truthy};

/// Suggested debounce window for autocomplete input; debouncing is a UI concern.
pub const RECOMMENDED_DEBOUNCE: Duration = Duration::from_millis(500);

/// Turns a field into a display or input representation.
pub trait FieldRenderer {
    type Output;

    fn render(
        &mut self,
        descriptor: &FieldDescriptor,
        state: &FieldState,
        editing: bool,
    ) -> Self::Output;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub id: String,
    pub name: String,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionItem {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionGroup {
    pub category: String,
    pub items: Vec<SuggestionItem>,
}

pub trait SuggestionProvider {
    fn fetch_suggestions(&mut self, category: &str, text: &str) -> Vec<Suggestion>;
}

/// Flattens grouped results, stamping each suggestion with its group's category.
pub fn flatten_groups(groups: &[SuggestionGroup]) -> Vec<Suggestion> {
    groups
        .iter()
        .flat_map(|group| {
            group.items.iter().map(|item| Suggestion {
                id: item.id.clone(),
                name: item.name.clone(),
                category: group.category.clone(),
            })
        })
        .collect()
}

#[derive(Debug, Clone)]
pub struct DisplayOptions {
    pub missing_text: String,
    pub true_text: String,
    pub false_text: String,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            missing_text: "none".to_string(),
            true_text: "Yes".to_string(),
            false_text: "No".to_string(),
        }
    }
}

/// Human-readable rendition of a field's current value.
pub fn display_value(
    descriptor: &FieldDescriptor,
    state: &FieldState,
    options: &DisplayOptions,
) -> String {
    let value = if descriptor.kind == FieldKind::Select {
        option_label(descriptor, state.value.as_ref()).or_else(|| state.value.clone())
    } else if let Some(hook) = &descriptor.hooks.on_value {
        let rendered = hook(state.value.as_ref());
        if is_truthy(Some(&rendered)) {
            Some(rendered)
        } else {
            state.value.clone()
        }
    } else {
        state.value.clone()
    };

    match value {
        None | Some(Value::Null) => options.missing_text.clone(),
        Some(Value::Bool(true)) => options.true_text.clone(),
        Some(Value::Bool(false)) => options.false_text.clone(),
        Some(Value::String(text)) => text,
        Some(other) => other.to_string(),
    }
}

fn option_label(descriptor: &FieldDescriptor, value: Option<&Value>) -> Option<Value> {
    let value = value?;
    descriptor
        .options
        .iter()
        .find(|option| option.accepts(value))
        .map(|option| Value::String(option.label.clone()))
}
