use serde_json::Value;

use super::value::is_truthy;

/// Raw input event carrying the places a new value can come from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldEvent {
    pub doc_id: Option<Value>,
    pub value: Option<Value>,
    pub checked: Option<bool>,
    pub category: Option<String>,
}

impl FieldEvent {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            value: Some(Value::String(text.into())),
            ..Self::default()
        }
    }

    pub fn value(value: impl Into<Value>) -> Self {
        Self {
            value: Some(value.into()),
            ..Self::default()
        }
    }

    pub fn checked(checked: bool) -> Self {
        Self {
            checked: Some(checked),
            ..Self::default()
        }
    }

    pub fn picked(
        doc_id: impl Into<Value>,
        name: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            doc_id: Some(doc_id.into()),
            value: Some(Value::String(name.into())),
            checked: None,
            category: Some(category.into()),
        }
    }

    /// First truthy of `doc_id`, then `value`, then `checked`, taken even when `false`.
    pub fn candidate_value(&self) -> Option<Value> {
        if is_truthy(self.doc_id.as_ref()) {
            return self.doc_id.clone();
        }
        if is_truthy(self.value.as_ref()) {
            return self.value.clone();
        }
        self.checked.map(Value::Bool)
    }
}
