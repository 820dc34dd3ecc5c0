use std::fmt;
use std::sync::{Arc, Mutex};

use crate::form::Record;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveSignal {
    Success,
    Failure(Option<String>),
}

pub(crate) type SignalSlot = Arc<Mutex<Option<SaveSignal>>>;

/// One-shot completion token; dropping it unresolved records a failure.
pub struct SaveCompletion {
    slot: Option<SignalSlot>,
}

impl SaveCompletion {
    pub(crate) fn new(slot: SignalSlot) -> Self {
        Self { slot: Some(slot) }
    }

    pub fn succeed(mut self) {
        self.resolve(SaveSignal::Success);
    }

    pub fn fail(mut self, message: Option<String>) {
        self.resolve(SaveSignal::Failure(message));
    }

    fn resolve(&mut self, signal: SaveSignal) {
        if let Some(slot) = self.slot.take() {
            if let Ok(mut guard) = slot.lock() {
                *guard = Some(signal);
            }
        }
    }
}

impl Drop for SaveCompletion {
    fn drop(&mut self) {
        self.resolve(SaveSignal::Failure(None));
    }
}

impl fmt::Debug for SaveCompletion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SaveCompletion")
            .field("resolved", &self.slot.is_none())
            .finish()
    }
}

/// External capability that durably stores a save payload.
pub trait PersistAdapter {
    fn persist(&mut self, payload: Record, completion: SaveCompletion);
}

impl<F> PersistAdapter for F
where
    F: FnMut(Record, SaveCompletion),
{
    fn persist(&mut self, payload: Record, completion: SaveCompletion) {
        self(payload, completion);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot() -> SignalSlot {
        Arc::new(Mutex::new(None))
    }

    #[test]
    fn succeed_records_success() {
        let slot = slot();
        SaveCompletion::new(slot.clone()).succeed();
        assert_eq!(*slot.lock().unwrap(), Some(SaveSignal::Success));
    }

    #[test]
    fn fail_keeps_the_message() {
        let slot = slot();
        SaveCompletion::new(slot.clone()).fail(Some("boom".into()));
        assert_eq!(
            *slot.lock().unwrap(),
            Some(SaveSignal::Failure(Some("boom".into())))
        );
    }

    #[test]
    fn dropping_unresolved_counts_as_failure() {
        let slot = slot();
        drop(SaveCompletion::new(slot.clone()));
        assert_eq!(*slot.lock().unwrap(), Some(SaveSignal::Failure(None)));
    }

    #[test]
    fn resolving_twice_is_impossible_by_construction() {
        let slot = slot();
        let completion = SaveCompletion::new(slot.clone());
        completion.succeed();
        // the drop glue must not overwrite the recorded signal
        assert_eq!(*slot.lock().unwrap(), Some(SaveSignal::Success));
    }
}
