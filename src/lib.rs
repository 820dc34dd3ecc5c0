#![deny(rust_2018_idioms)]

mod domain;
mod form;
mod notify;
mod persist;
mod present;
mod session;

pub use domain::{
    FieldDescriptor, FieldHooks, FieldKind, FieldOption, KindProfile, MatchFn, OnChangeFn,
    OnEditFn, OnValueFn,
};
pub use form::{FieldEvent, FieldState, Record, RowState, propagate_extra, resolve_extra};
pub use notify::{MemorySink, Notice, NoticeKind, NotificationSink};
pub use persist::{PersistAdapter, SaveCompletion, SaveSignal};
pub use present::{
    DisplayOptions, FieldRenderer, RECOMMENDED_DEBOUNCE, Suggestion, SuggestionGroup,
    SuggestionItem, SuggestionProvider, display_value, flatten_groups,
};
pub use session::{EditSession, SaveStatus, SessionError, SessionOptions, SessionPhase};

pub mod prelude {
    pub use super::{
        EditSession, FieldDescriptor, FieldEvent, FieldHooks, FieldKind, FieldOption,
        NotificationSink, PersistAdapter, Record, RowState, SaveStatus, SessionError,
        SessionOptions, SessionPhase,
    };
}
