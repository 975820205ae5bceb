//! Contact submission boundary
//!
//! [`Submitter`] is where a real backend would plug in. The site ships without
//! one, so [`SimulatedSubmitter`] stands in: it waits a fixed delay and then
//! accepts the message if every required field is filled.

use crate::contact::{ContactFields, Field};
use async_trait::async_trait;
use serde::Serialize;
use std::fmt;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;
use vivant_core::config::EngineConfig;

/// Confirmation returned by a successful submission
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Ack {
    pub message: String,
}

impl Default for Ack {
    fn default() -> Self {
        Self {
            message: "We'll holla at you very soon to confirm your request.".to_string(),
        }
    }
}

/// Why a submission did not go through
#[derive(Clone, Debug, PartialEq, Eq, Error, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SubmitError {
    /// One or more required fields were empty
    #[error("please fill in: {}", FieldList(.missing))]
    Validation { missing: Vec<Field> },

    /// The backend could not be reached or refused the message
    #[error("submission failed: {0}")]
    Transport(String),
}

struct FieldList<'a>(&'a [Field]);

impl fmt::Display for FieldList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, field) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{field}")?;
        }
        Ok(())
    }
}

/// Delivers a contact message somewhere
#[async_trait]
pub trait Submitter: Send + Sync {
    async fn submit(&self, fields: &ContactFields) -> Result<Ack, SubmitError>;
}

/// Waits, then validates locally; never touches the network
#[derive(Clone, Debug)]
pub struct SimulatedSubmitter {
    delay: Duration,
}

impl SimulatedSubmitter {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Use the configured submission delay
    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(Duration::from_millis(config.submit_delay_ms))
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for SimulatedSubmitter {
    fn default() -> Self {
        Self::from_config(&EngineConfig::default())
    }
}

#[async_trait]
impl Submitter for SimulatedSubmitter {
    async fn submit(&self, fields: &ContactFields) -> Result<Ack, SubmitError> {
        tokio::time::sleep(self.delay).await;

        let missing = fields.missing();
        if missing.is_empty() {
            debug!(delay_ms = self.delay.as_millis() as u64, "simulated submission accepted");
            Ok(Ack::default())
        } else {
            debug!(?missing, "simulated submission rejected");
            Err(SubmitError::Validation { missing })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    fn filled() -> ContactFields {
        ContactFields {
            name: "Aisha".to_string(),
            email: "aisha@x.ng".to_string(),
            message: "Catering for 50".to_string(),
            ..ContactFields::default()
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_simulated_waits_configured_delay() {
        let submitter = SimulatedSubmitter::new(Duration::from_millis(1500));
        let start = Instant::now();
        let ack = submitter.submit(&filled()).await;
        assert!(ack.is_ok());
        assert!(start.elapsed() >= Duration::from_millis(1500));
    }

    #[tokio::test(start_paused = true)]
    async fn test_simulated_reports_missing_fields() {
        let submitter = SimulatedSubmitter::default();
        let fields = ContactFields {
            message: "   ".to_string(),
            ..filled()
        };
        let err = submitter.submit(&fields).await.unwrap_err();
        assert_eq!(
            err,
            SubmitError::Validation {
                missing: vec![Field::Message]
            }
        );
        assert_eq!(err.to_string(), "please fill in: message");
    }

    #[test]
    fn test_error_display() {
        let err = SubmitError::Validation {
            missing: vec![Field::Name, Field::Email],
        };
        assert_eq!(err.to_string(), "please fill in: name, email");
        assert_eq!(
            SubmitError::Transport("timeout".into()).to_string(),
            "submission failed: timeout"
        );
    }

    #[test]
    fn test_default_delay_from_config() {
        assert_eq!(SimulatedSubmitter::default().delay(), Duration::from_millis(1500));
    }
}
