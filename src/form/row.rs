use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::domain::FieldDescriptor;

use super::field::FieldState;
use super::resolver::{propagate_extra, resolve_extra};
use super::value::is_truthy;

/// In-memory record and save payload: field name to raw value.
pub type Record = Map<String, Value>;

#[derive(Debug, Clone, Default)]
pub struct RowState {
    fields: IndexMap<String, FieldState>,
}

impl RowState {
    /// Seeds each field from the record, forwards option metadata, then runs `on_edit` hooks.
    pub fn build(descriptors: &[FieldDescriptor], record: &Record) -> Self {
        let mut row = Self::default();
        for descriptor in descriptors {
            row.fields.insert(
                descriptor.name.clone(),
                FieldState::from_descriptor(descriptor, record.get(&descriptor.name)),
            );
        }

        for descriptor in descriptors {
            if descriptor.options.is_empty() {
                continue;
            }
            let value = row
                .field(&descriptor.name)
                .and_then(|field| field.value.clone());
            if let Some(value) = value {
                if is_truthy(Some(&value)) {
                    let extra = resolve_extra(descriptor, &value);
                    propagate_extra(descriptor, &mut row, extra.as_ref());
                }
            }
        }

        for descriptor in descriptors {
            if let Some(hook) = &descriptor.hooks.on_edit {
                hook(&mut row);
            }
        }

        row
    }

    pub fn field(&self, name: &str) -> Option<&FieldState> {
        self.fields.get(name)
    }

    pub fn field_mut(&mut self, name: &str) -> Option<&mut FieldState> {
        self.fields.get_mut(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldState)> {
        self.fields.iter().map(|(name, field)| (name.as_str(), field))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn is_dirty(&self) -> bool {
        self.fields.values().any(|field| field.edited)
    }

    pub fn revert_all(&mut self) {
        for field in self.fields.values_mut() {
            field.revert();
        }
    }

    pub fn commit_all(&mut self) {
        for field in self.fields.values_mut() {
            field.commit();
        }
    }
}
