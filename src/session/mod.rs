mod error;
mod options;
mod payload;

use std::fmt;
use std::sync::{Arc, Mutex};

use crate::domain::FieldDescriptor;
use crate::form::{FieldEvent, FieldState, Record, RowState, propagate_extra, resolve_extra};
use crate::notify::{Notice, NoticeKind, NotificationSink};
use crate::persist::{PersistAdapter, SaveCompletion, SaveSignal, SignalSlot};

pub use error::SessionError;
pub use options::SessionOptions;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Viewing,
    Editing,
    Saving,
}

impl fmt::Display for SessionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phase = match self {
            SessionPhase::Viewing => "viewing",
            SessionPhase::Editing => "editing",
            SessionPhase::Saving => "saving",
        };
        f.write_str(phase)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveStatus {
    Pending,
    Saved,
    Failed(String),
}

/// One open edit/view lifecycle bound to one record.
pub struct EditSession {
    descriptors: Vec<FieldDescriptor>,
    options: SessionOptions,
    sink: Box<dyn NotificationSink>,
    row: RowState,
    phase: SessionPhase,
    saved: bool,
    error_message: Option<String>,
    required_label: Option<String>,
    pending: Option<SignalSlot>,
}

impl EditSession {
    pub fn new(
        descriptors: Vec<FieldDescriptor>,
        options: SessionOptions,
        sink: Box<dyn NotificationSink>,
    ) -> Self {
        let row = RowState::build(&descriptors, &Record::new());
        Self {
            descriptors,
            options,
            sink,
            row,
            phase: SessionPhase::Viewing,
            saved: false,
            error_message: None,
            required_label: None,
            pending: None,
        }
    }

    /// Rebinds the session to a record; nothing carries over from the previous one.
    pub fn open(&mut self, record: &Record, start_editing: bool) -> Result<(), SessionError> {
        self.guard_not_saving("open")?;
        self.row = RowState::build(&self.descriptors, record);
        self.phase = if start_editing {
            SessionPhase::Editing
        } else {
            SessionPhase::Viewing
        };
        self.saved = false;
        self.error_message = None;
        self.required_label = None;
        self.pending = None;
        Ok(())
    }

    /// Viewing to editing; already editing is a silent no-op.
    pub fn begin_edit(&mut self) -> Result<(), SessionError> {
        self.guard_not_saving("begin_edit")?;
        self.phase = SessionPhase::Editing;
        Ok(())
    }

    /// Applies one raw input event to the named field.
    pub fn change_field(&mut self, name: &str, event: FieldEvent) -> Result<(), SessionError> {
        self.guard_not_saving("change_field")?;
        let Some(index) = self
            .descriptors
            .iter()
            .position(|descriptor| descriptor.name == name)
        else {
            return Err(SessionError::InvalidField(name.to_string()));
        };

        let candidate = event.candidate_value();
        self.row
            .field_mut(name)
            .ok_or_else(|| SessionError::InvalidField(name.to_string()))?
            .set_value(candidate.clone());

        let descriptor = &self.descriptors[index];
        if let Some(hook) = &descriptor.hooks.on_change {
            hook(&mut self.row, &event);
        }
        let extra = candidate
            .as_ref()
            .and_then(|value| resolve_extra(descriptor, value));
        propagate_extra(descriptor, &mut self.row, extra.as_ref());
        Ok(())
    }

    /// Drops all uncommitted edits and returns to viewing.
    pub fn cancel(&mut self) -> Result<(), SessionError> {
        self.guard_not_saving("cancel")?;
        self.row.revert_all();
        self.phase = SessionPhase::Viewing;
        Ok(())
    }

    /// Reports the first required field, in declaration order, with no value.
    pub fn validate_required(&mut self) -> Result<(), SessionError> {
        if let Some(descriptor) = payload::first_missing_required(&self.descriptors, &self.row) {
            let label = descriptor.label.clone();
            self.required_label = Some(label.clone());
            let message = format!("Required field \"{label}\" is empty");
            self.notify(NoticeKind::Error, message);
            return Err(SessionError::RequiredFieldMissing(label));
        }
        self.required_label = None;
        Ok(())
    }

    /// The payload a save would send right now.
    pub fn build_payload(&self) -> Record {
        payload::build_payload(&self.row)
    }

    /// Validates, then hands the payload and a one-shot completion to the adapter.
    pub fn save(&mut self, adapter: &mut dyn PersistAdapter) -> Result<SaveStatus, SessionError> {
        match self.phase {
            SessionPhase::Editing => {}
            phase => return Err(SessionError::InvalidState { op: "save", phase }),
        }
        self.validate_required()?;

        let payload = self.build_payload();
        let slot: SignalSlot = Arc::new(Mutex::new(None));
        self.pending = Some(slot.clone());
        self.phase = SessionPhase::Saving;
        adapter.persist(payload, SaveCompletion::new(slot));
        Ok(self.poll_save().unwrap_or(SaveStatus::Pending))
    }

    /// Applies a recorded save result, if one has arrived.
    pub fn poll_save(&mut self) -> Option<SaveStatus> {
        if self.phase != SessionPhase::Saving {
            return None;
        }
        let signal = {
            let slot = self.pending.as_ref()?;
            let mut guard = slot.lock().ok()?;
            guard.take()?
        };
        self.pending = None;
        match signal {
            SaveSignal::Success => {
                self.finish_success();
                Some(SaveStatus::Saved)
            }
            SaveSignal::Failure(message) => {
                let message = self.finish_failure(message);
                Some(SaveStatus::Failed(message))
            }
        }
    }

    /// Ends the session, reporting whether any save succeeded.
    pub fn close(self) -> bool {
        self.saved
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn is_editing(&self) -> bool {
        self.phase == SessionPhase::Editing
    }

    pub fn is_saving(&self) -> bool {
        self.phase == SessionPhase::Saving
    }

    pub fn saved(&self) -> bool {
        self.saved
    }

    pub fn can_save(&self) -> bool {
        self.phase == SessionPhase::Editing && self.row.is_dirty()
    }

    pub fn row(&self) -> &RowState {
        &self.row
    }

    pub fn descriptors(&self) -> &[FieldDescriptor] {
        &self.descriptors
    }

    pub fn descriptor(&self, name: &str) -> Option<&FieldDescriptor> {
        self.descriptors
            .iter()
            .find(|descriptor| descriptor.name == name)
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn required_label(&self) -> Option<&str> {
        self.required_label.as_deref()
    }

    pub fn fields(&self) -> impl Iterator<Item = (&FieldDescriptor, &FieldState)> {
        self.descriptors
            .iter()
            .filter_map(|descriptor| self.row.field(&descriptor.name).map(|f| (descriptor, f)))
    }

    pub fn visible_fields(&self) -> impl Iterator<Item = (&FieldDescriptor, &FieldState)> {
        self.fields()
            .filter(|(descriptor, _)| descriptor.is_visible())
    }

    fn guard_not_saving(&self, op: &'static str) -> Result<(), SessionError> {
        if self.phase == SessionPhase::Saving {
            return Err(SessionError::InvalidState {
                op,
                phase: self.phase,
            });
        }
        Ok(())
    }

    fn finish_success(&mut self) {
        self.row.commit_all();
        for descriptor in &self.descriptors {
            if let Some(hook) = &descriptor.hooks.on_edit {
                hook(&mut self.row);
            }
        }
        self.phase = SessionPhase::Viewing;
        self.saved = true;
        self.error_message = None;
        let message = self.options.success_message.clone();
        self.notify(NoticeKind::Success, message);
    }

    fn finish_failure(&mut self, message: Option<String>) -> String {
        let message = message
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| self.options.save_error_message.clone());
        self.phase = SessionPhase::Editing;
        self.error_message = Some(message.clone());
        self.notify(NoticeKind::Error, message.clone());
        message
    }

    fn notify(&mut self, kind: NoticeKind, message: String) {
        let (title, display_duration) = match kind {
            NoticeKind::Success => (
                self.options.success_title.clone(),
                self.options.success_duration,
            ),
            NoticeKind::Error => (self.options.error_title.clone(), self.options.error_duration),
        };
        self.sink.notify(Notice {
            title,
            message,
            kind,
            display_duration,
        });
    }
}

impl fmt::Debug for EditSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EditSession")
            .field("phase", &self.phase)
            .field("saved", &self.saved)
            .field("fields", &self.row.len())
            .field("dirty", &self.row.is_dirty())
            .finish()
    }
}
