mod descriptor;
mod hooks;

pub use descriptor::{FieldDescriptor, FieldKind, FieldOption, KindProfile};
pub use hooks::{FieldHooks, MatchFn, OnChangeFn, OnEditFn, OnValueFn};
