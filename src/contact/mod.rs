//! Contact: visitor enquiries relayed to Contact Form 7.
//!
//! DESIGN
//! ======
//! The page renders a plain multipart form that posts back to this server.
//! The route parses it into a `ContactSubmission`, drives a `ContactForm`
//! through `Sending` to a terminal status, and re-renders the page with
//! that status. `ContactRelay` is the seam to the form endpoint: `Cf7Client`
//! talks HTTP, tests substitute a scripted relay. Relay failures never
//! escape as errors; they become a `Failed` status on the form.
//!
//! An identical submission posted while the first is still being relayed
//! is rejected through the shared `InFlight` registry and never reaches
//! the relay.

pub mod client;
pub mod form;
pub mod in_flight;
pub mod types;
pub mod view;

pub use client::Cf7Client;
pub use form::{ContactForm, ContactStatus};
pub use in_flight::InFlight;
pub use types::{Attachment, ContactError, ContactFields, ContactRelay, ContactSubmission, FeedbackResponse};
pub use view::ContactFormView;

/// Relay one submission and return the form in its terminal state.
pub async fn send(relay: &dyn ContactRelay, in_flight: &InFlight, submission: &ContactSubmission) -> ContactForm {
    let mut form = ContactForm::new();
    let claim = in_flight
        .begin(submission)
        .and_then(|ticket| form.begin_submit(submission.fields.clone()).map(|()| ticket));
    let _ticket = match claim {
        Ok(ticket) => ticket,
        Err(e) => return ContactForm::with_status(ContactStatus::from_outcome(Err(e)), submission.fields.clone()),
    };

    let outcome = relay.submit(submission).await;
    form.finish(outcome);
    form
}
