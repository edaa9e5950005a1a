//! Registry of submissions currently being relayed.
//!
//! Each request builds its own `ContactForm`, so the state machine alone
//! cannot see a duplicate post. The registry is shared through `AppState`:
//! a submission identical to one still in flight is rejected until the
//! first one finishes.

use std::collections::HashSet;
use std::sync::{Arc, Mutex, PoisonError};

use super::types::{ContactError, ContactFields, ContactSubmission};

/// Identity of a submission: its fields plus the attachment's name and size.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct SubmissionKey {
    fields: ContactFields,
    attachment: Option<(String, usize)>,
}

impl SubmissionKey {
    fn of(submission: &ContactSubmission) -> Self {
        let attachment = submission
            .attachment
            .as_ref()
            .map(|a| (a.file_name.clone(), a.bytes.len()));
        Self { fields: submission.fields.clone(), attachment }
    }
}

#[derive(Clone, Default)]
pub struct InFlight {
    keys: Arc<Mutex<HashSet<SubmissionKey>>>,
}

impl InFlight {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim `submission` for relaying. The claim is released when the
    /// returned ticket drops.
    ///
    /// # Errors
    ///
    /// Returns [`ContactError::InProgress`] if an identical submission is
    /// already in flight.
    pub fn begin(&self, submission: &ContactSubmission) -> Result<Ticket, ContactError> {
        let key = SubmissionKey::of(submission);
        let mut keys = self.keys.lock().unwrap_or_else(PoisonError::into_inner);
        if !keys.insert(key.clone()) {
            return Err(ContactError::InProgress);
        }
        Ok(Ticket { keys: Arc::clone(&self.keys), key })
    }

    /// Number of submissions currently claimed.
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Claim on one in-flight submission.
pub struct Ticket {
    keys: Arc<Mutex<HashSet<SubmissionKey>>>,
    key: SubmissionKey,
}

impl Drop for Ticket {
    fn drop(&mut self) {
        self.keys
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&self.key);
    }
}
