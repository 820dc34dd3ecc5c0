use serde_json::Value;

use super::hooks::{FieldHooks, MatchFn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Select,
    Checkbox,
    Readonly,
    Autocomplete,
    Invisible,
}

/// Per-kind strategy record, resolved in one place instead of scattered branching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KindProfile {
    pub editable: bool,
    pub visible: bool,
    pub sendable: bool,
}

impl FieldKind {
    pub fn profile(self) -> KindProfile {
        match self {
            FieldKind::Text | FieldKind::Select | FieldKind::Checkbox | FieldKind::Autocomplete => {
                KindProfile {
                    editable: true,
                    visible: true,
                    sendable: true,
                }
            }
            FieldKind::Readonly => KindProfile {
                editable: false,
                visible: true,
                sendable: false,
            },
            FieldKind::Invisible => KindProfile {
                editable: false,
                visible: false,
                sendable: true,
            },
        }
    }
}

impl Default for FieldKind {
    fn default() -> Self {
        FieldKind::Text
    }
}

#[derive(Clone)]
pub struct FieldOption {
    pub value: Value,
    pub label: String,
    pub extra: Option<Value>,
    pub matcher: Option<MatchFn>,
}

impl FieldOption {
    pub fn new(value: impl Into<Value>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            extra: None,
            matcher: None,
        }
    }

    pub fn with_extra(mut self, extra: impl Into<Value>) -> Self {
        self.extra = Some(extra.into());
        self
    }

    pub fn with_matcher(
        mut self,
        matcher: impl Fn(&Value) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.matcher = Some(std::sync::Arc::new(matcher));
        self
    }

    pub fn accepts(&self, candidate: &Value) -> bool {
        if self.value == *candidate {
            return true;
        }
        self.matcher.as_ref().is_some_and(|matcher| matcher(candidate))
    }
}

impl std::fmt::Debug for FieldOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldOption")
            .field("value", &self.value)
            .field("label", &self.label)
            .field("extra", &self.extra)
            .field("matcher", &self.matcher.is_some())
            .finish()
    }
}

/// Static configuration for one editable attribute of a record.
#[derive(Debug, Clone)]
pub struct FieldDescriptor {
    pub name: String,
    pub label: String,
    pub kind: FieldKind,
    pub options: Vec<FieldOption>,
    pub required: bool,
    pub default_value: Option<Value>,
    pub always_send: bool,
    pub dependant_fields: Vec<String>,
    pub extra: Option<Value>,
    pub placeholder: Option<String>,
    pub hidden: bool,
    pub hooks: FieldHooks,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        let name = name.into();
        Self {
            label: name.clone(),
            name,
            kind,
            options: Vec::new(),
            required: false,
            default_value: None,
            always_send: false,
            dependant_fields: Vec::new(),
            extra: None,
            placeholder: None,
            hidden: false,
            hooks: FieldHooks::default(),
        }
    }

    pub fn text(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Text)
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_options(mut self, options: Vec<FieldOption>) -> Self {
        self.options = options;
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_default(mut self, value: impl Into<Value>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    pub fn always_send(mut self) -> Self {
        self.always_send = true;
        self
    }

    pub fn with_dependants(mut self, names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.dependant_fields = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_extra(mut self, extra: impl Into<Value>) -> Self {
        self.extra = Some(extra.into());
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    pub fn with_hooks(mut self, hooks: FieldHooks) -> Self {
        self.hooks = hooks;
        self
    }

    pub fn is_visible(&self) -> bool {
        !self.hidden && self.kind.profile().visible
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn profile_table_matches_kind_contracts() {
        assert!(FieldKind::Text.profile().sendable);
        assert!(!FieldKind::Readonly.profile().sendable);
        assert!(FieldKind::Readonly.profile().visible);
        assert!(FieldKind::Invisible.profile().sendable);
        assert!(!FieldKind::Invisible.profile().visible);
        assert!(!FieldKind::Readonly.profile().editable);
    }

    #[test]
    fn option_accepts_by_equality_or_matcher() {
        let plain = FieldOption::new("alpha", "Alpha");
        assert!(plain.accepts(&json!("alpha")));
        assert!(!plain.accepts(&json!("beta")));

        let fuzzy = FieldOption::new("alpha", "Alpha").with_matcher(|candidate| {
            candidate
                .as_str()
                .is_some_and(|text| text.starts_with("al"))
        });
        assert!(fuzzy.accepts(&json!("almost")));
    }

    #[test]
    fn hidden_flag_overrides_kind_visibility() {
        let descriptor = FieldDescriptor::text("notes").hidden();
        assert!(!descriptor.is_visible());
        assert!(FieldDescriptor::text("notes").is_visible());
    }
}
