use serde_json::Value;

use crate::domain::{FieldDescriptor, FieldKind};

#[derive(Debug, Clone, PartialEq)]
pub struct FieldState {
    pub value: Option<Value>,
    pub original_value: Option<Value>,
    pub default_value: Option<Value>,
    pub edited: bool,
    pub kind: FieldKind,
    pub extra: Option<Value>,
    pub always_send: bool,
}

impl FieldState {
    pub fn from_descriptor(descriptor: &FieldDescriptor, initial: Option<&Value>) -> Self {
        Self {
            value: initial.cloned(),
            original_value: initial.cloned(),
            default_value: descriptor.default_value.clone(),
            edited: false,
            kind: descriptor.kind,
            extra: descriptor.extra.clone(),
            always_send: descriptor.always_send,
        }
    }

    pub fn set_value(&mut self, candidate: Option<Value>) {
        self.edited = candidate != self.original_value;
        self.value = candidate;
    }

    pub fn revert(&mut self) {
        self.value = self.original_value.clone();
        self.edited = false;
    }

    pub fn commit(&mut self) {
        self.original_value = self.value.clone();
        self.edited = false;
    }

    pub fn is_missing(&self) -> bool {
        self.value.is_none()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn state() -> FieldState {
        let descriptor = FieldDescriptor::text("title");
        FieldState::from_descriptor(&descriptor, Some(&json!("Old")))
    }

    #[test]
    fn set_value_tracks_divergence_both_ways() {
        let mut field = state();
        field.set_value(Some(json!("New")));
        assert!(field.edited);
        field.set_value(Some(json!("Old")));
        assert!(!field.edited);
    }

    #[test]
    fn revert_and_commit_are_inverse_moves() {
        let mut field = state();
        field.set_value(Some(json!("New")));
        field.revert();
        assert_eq!(field.value, Some(json!("Old")));
        assert!(!field.edited);

        field.set_value(Some(json!("Newer")));
        field.commit();
        assert_eq!(field.original_value, Some(json!("Newer")));
        assert!(!field.edited);
    }
}
