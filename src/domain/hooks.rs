use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::form::{FieldEvent, RowState};

/// Replaces equality when attached to an option.
pub type MatchFn = Arc<dyn Fn(&Value) -> bool + Send + Sync>;

pub type OnChangeFn = Arc<dyn Fn(&mut RowState, &FieldEvent) + Send + Sync>;
pub type OnEditFn = Arc<dyn Fn(&mut RowState) + Send + Sync>;
pub type OnValueFn = Arc<dyn Fn(Option<&Value>) -> Value + Send + Sync>;

/// Optional per-field callbacks, invoked synchronously at fixed points in the session.
#[derive(Clone, Default)]
pub struct FieldHooks {
    pub on_change: Option<OnChangeFn>,
    pub on_edit: Option<OnEditFn>,
    pub on_value: Option<OnValueFn>,
}

impl FieldHooks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_on_change(
        mut self,
        hook: impl Fn(&mut RowState, &FieldEvent) + Send + Sync + 'static,
    ) -> Self {
        self.on_change = Some(Arc::new(hook));
        self
    }

    pub fn with_on_edit(mut self, hook: impl Fn(&mut RowState) + Send + Sync + 'static) -> Self {
        self.on_edit = Some(Arc::new(hook));
        self
    }

    pub fn with_on_value(
        mut self,
        hook: impl Fn(Option<&Value>) -> Value + Send + Sync + 'static,
    ) -> Self {
        self.on_value = Some(Arc::new(hook));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.on_change.is_none() && self.on_edit.is_none() && self.on_value.is_none()
    }
}

impl fmt::Debug for FieldHooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldHooks")
            .field("on_change", &self.on_change.is_some())
            .field("on_edit", &self.on_edit.is_some())
            .field("on_value", &self.on_value.is_some())
            .finish()
    }
}
