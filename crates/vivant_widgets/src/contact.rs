//! Contact form
//!
//! Holds the form inputs and the submission lifecycle:
//!
//! ```text
//!          Submit               Succeeded
//!   Idle ─────────→ Submitting ──────────→ Success
//!    ↑                  │                     │
//!    │                  │ Failed              │
//!    │                  ↓                     │
//!    │    SendAnother  Error ←── (Submit) ──┐ │
//!    ├─────────────────┘  └─────────────────┘ │
//!    └────────────────────────────────────────┘
//!                     SendAnother
//! ```
//!
//! A submission runs in two phases so the form lock is never held while the
//! request is in flight: [`ContactForm::begin_submit`] snapshots the fields
//! into a [`SubmissionTicket`], and [`ContactForm::settle`] applies the outcome
//! for that ticket. A ticket that no longer matches the in-flight submission is
//! ignored.

use crate::submit::{Ack, SubmitError, Submitter};
use crate::transitions::StateTransitions;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::{Arc, Mutex};
use tracing::{debug, info, trace};
use vivant_core::sync::lock;

// =============================================================================
// Fields
// =============================================================================

/// Required text inputs
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const REQUIRED: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    /// Form label
    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Message => "Message",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        })
    }
}

/// "Interested in" choice; always has a value
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Interest {
    #[default]
    SpiceBlends,
    EventCatering,
    MonthlyGranolaPack,
    MocktailService,
}

impl Interest {
    pub const ALL: [Interest; 4] = [
        Interest::SpiceBlends,
        Interest::EventCatering,
        Interest::MonthlyGranolaPack,
        Interest::MocktailService,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Interest::SpiceBlends => "Spice Blends",
            Interest::EventCatering => "Event Catering",
            Interest::MonthlyGranolaPack => "Monthly Granola Pack",
            Interest::MocktailService => "Mocktail Service",
        }
    }
}

/// Everything the visitor typed
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    /// Free-text location, optional
    pub region: String,
    pub interest: Interest,
    pub message: String,
}

impl ContactFields {
    /// Value of a required field
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    fn get_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        }
    }

    /// Required fields that are empty or whitespace-only, in form order
    pub fn missing(&self) -> Vec<Field> {
        Field::REQUIRED
            .into_iter()
            .filter(|field| self.get(*field).trim().is_empty())
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing().is_empty()
    }

    /// Reset every input to its initial value
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

// =============================================================================
// Submission FSM
// =============================================================================

/// Where the form is in its submission lifecycle
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

impl SubmissionPhase {
    /// Whether the inputs can be edited
    pub fn accepts_input(self) -> bool {
        matches!(self, SubmissionPhase::Idle | SubmissionPhase::Error)
    }

    pub fn css_class(self) -> &'static str {
        match self {
            SubmissionPhase::Idle => "contact-form contact-form--idle",
            SubmissionPhase::Submitting => "contact-form contact-form--submitting",
            SubmissionPhase::Success => "contact-form contact-form--success",
            SubmissionPhase::Error => "contact-form contact-form--error",
        }
    }
}

/// Inputs to the submission lifecycle
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FormEvent {
    Submit,
    Succeeded,
    Failed,
    SendAnother,
}

impl StateTransitions for SubmissionPhase {
    type Event = FormEvent;

    fn on_event(&self, event: FormEvent) -> Option<Self> {
        use FormEvent::*;
        use SubmissionPhase::*;

        match (self, event) {
            (Idle, Submit) | (Error, Submit) => Some(Submitting),
            (Submitting, Succeeded) => Some(Success),
            (Submitting, Failed) => Some(Error),
            (Success, SendAnother) | (Error, SendAnother) => Some(Idle),
            // Submit while submitting or after success is ignored
            _ => None,
        }
    }
}

/// One accepted submission: its generation and the fields it carries
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmissionTicket {
    generation: u64,
    fields: ContactFields,
}

impl SubmissionTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Snapshot taken when the submission began
    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }
}

// =============================================================================
// ContactForm
// =============================================================================

#[derive(Debug, Default)]
struct FormInner {
    phase: SubmissionPhase,
    fields: ContactFields,
    last_error: Option<SubmitError>,
    last_ack: Option<Ack>,
    generation: u64,
    in_flight: Option<u64>,
}

/// Contact form state, cheap to clone and share
#[derive(Clone, Debug, Default)]
pub struct ContactForm {
    inner: Arc<Mutex<FormInner>>,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> SubmissionPhase {
        lock(&self.inner).phase
    }

    /// Copy of the current inputs
    pub fn fields(&self) -> ContactFields {
        lock(&self.inner).fields.clone()
    }

    /// Type into a required field
    ///
    /// Rejected while a submission is in flight and while the success panel
    /// is shown.
    pub fn set_field(&self, field: Field, value: impl Into<String>) -> bool {
        let mut inner = lock(&self.inner);
        if !inner.phase.accepts_input() {
            return false;
        }
        *inner.fields.get_mut(field) = value.into();
        true
    }

    pub fn set_region(&self, value: impl Into<String>) -> bool {
        let mut inner = lock(&self.inner);
        if !inner.phase.accepts_input() {
            return false;
        }
        inner.fields.region = value.into();
        true
    }

    pub fn set_interest(&self, interest: Interest) -> bool {
        let mut inner = lock(&self.inner);
        if !inner.phase.accepts_input() {
            return false;
        }
        inner.fields.interest = interest;
        true
    }

    /// Error from the last failed submission, shown inline
    pub fn last_error(&self) -> Option<SubmitError> {
        lock(&self.inner).last_error.clone()
    }

    /// Confirmation from the last successful submission
    pub fn last_ack(&self) -> Option<Ack> {
        lock(&self.inner).last_ack.clone()
    }

    /// Start a submission
    ///
    /// Returns `None` (and changes nothing) unless the form is idle or in
    /// error.
    pub fn begin_submit(&self) -> Option<SubmissionTicket> {
        let mut inner = lock(&self.inner);
        let Some(next) = inner.phase.on_event(FormEvent::Submit) else {
            debug!(phase = ?inner.phase, "submit ignored");
            return None;
        };

        inner.generation += 1;
        inner.in_flight = Some(inner.generation);
        inner.phase = next;
        inner.last_error = None;
        debug!(generation = inner.generation, "submission started");

        Some(SubmissionTicket {
            generation: inner.generation,
            fields: inner.fields.clone(),
        })
    }

    /// Apply the outcome of `ticket`
    ///
    /// Success clears the inputs; failure keeps them. Returns the new phase,
    /// or `None` if the ticket is not the one in flight.
    pub fn settle(
        &self,
        ticket: &SubmissionTicket,
        outcome: Result<Ack, SubmitError>,
    ) -> Option<SubmissionPhase> {
        let mut inner = lock(&self.inner);
        if inner.in_flight != Some(ticket.generation) {
            trace!(generation = ticket.generation, "stale submission outcome ignored");
            return None;
        }

        let event = if outcome.is_ok() {
            FormEvent::Succeeded
        } else {
            FormEvent::Failed
        };
        let next = inner.phase.on_event(event)?;
        inner.in_flight = None;
        inner.phase = next;

        match outcome {
            Ok(ack) => {
                inner.fields.clear();
                inner.last_ack = Some(ack);
                info!(generation = ticket.generation, "contact message sent");
            }
            Err(err) => {
                info!(generation = ticket.generation, error = %err, "contact message failed");
                inner.last_error = Some(err);
            }
        }
        Some(next)
    }

    /// Run a full submission through `submitter`
    ///
    /// The form lock is released for the duration of the request. Returns
    /// `None` if the submission was not started.
    pub async fn submit(&self, submitter: &dyn Submitter) -> Option<SubmissionPhase> {
        let ticket = self.begin_submit()?;
        let outcome = submitter.submit(ticket.fields()).await;
        self.settle(&ticket, outcome)
    }

    /// Leave the success or error panel and show an empty-or-kept form
    pub fn send_another(&self) -> bool {
        let mut inner = lock(&self.inner);
        let Some(next) = inner.phase.on_event(FormEvent::SendAnother) else {
            return false;
        };
        inner.phase = next;
        inner.last_error = None;
        inner.last_ack = None;
        true
    }
}
