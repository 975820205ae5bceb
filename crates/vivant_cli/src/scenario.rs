//! Scripted interaction scenarios
//!
//! A scenario file lists user actions in order:
//!
//! ```toml
//! name = "order from the mobile menu"
//!
//! [[steps]]
//! action = "toggle-menu"
//!
//! [[steps]]
//! action = "select"
//! index = 2
//!
//! [[steps]]
//! action = "fill"
//! name = "Aisha"
//! email = "aisha@x.ng"
//! message = "Catering for 50"
//!
//! [[steps]]
//! action = "submit"
//! ```
//!
//! Each step is applied to a live [`Page`] and followed by a snapshot, so the
//! report shows the full state trajectory.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{debug, info};
use vivant_page::page::{Page, PageSnapshot};
use vivant_widgets::contact::{Field, Interest};
use vivant_widgets::submit::Submitter;

/// A named list of steps
#[derive(Debug, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub name: Option<String>,
    pub steps: Vec<Step>,
}

/// One user action
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(tag = "action", rename_all = "kebab-case")]
pub enum Step {
    /// Change the viewport size
    Resize { width: f32, height: f32 },
    /// Scroll to an absolute offset
    Scroll { y: f32 },
    /// Advance the page clock to `ms` since load
    Tick { ms: u64 },
    /// Hamburger button
    ToggleMenu,
    /// Close control inside the menu
    CloseMenu,
    /// Click outside the menu
    Backdrop,
    /// Escape key
    Escape,
    /// Follow navigation entry `index`, scrolling to its section
    Select { index: usize },
    /// Type into the contact form; omitted fields are left alone
    Fill {
        #[serde(default)]
        name: Option<String>,
        #[serde(default)]
        email: Option<String>,
        #[serde(default)]
        region: Option<String>,
        #[serde(default)]
        interest: Option<Interest>,
        #[serde(default)]
        message: Option<String>,
    },
    /// Submit the contact form and wait for the outcome
    Submit,
    /// Leave the success or error panel
    SendAnother,
}

/// Outcome of one step
#[derive(Debug, Serialize)]
pub struct StepReport {
    pub step: usize,
    pub action: Step,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub snapshot: PageSnapshot,
}

/// Outcome of a whole scenario
#[derive(Debug, Serialize)]
pub struct ScenarioReport {
    pub name: Option<String>,
    pub initial: PageSnapshot,
    pub steps: Vec<StepReport>,
}

impl Scenario {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_toml_str(&text).with_context(|| format!("Failed to parse {}", path.display()))
    }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Apply every step to `page` in order
    pub async fn run(&self, page: &mut Page, submitter: &dyn Submitter) -> Result<ScenarioReport> {
        info!(
            "Running scenario {} ({} steps)",
            self.name.as_deref().unwrap_or("<unnamed>"),
            self.steps.len()
        );

        let initial = page.snapshot();
        let mut steps = Vec::with_capacity(self.steps.len());
        for (index, step) in self.steps.iter().enumerate() {
            let note = apply(page, step, submitter)
                .await
                .with_context(|| format!("Step {} ({:?}) failed", index + 1, step))?;
            debug!(step = index + 1, ?note, "step applied");
            steps.push(StepReport {
                step: index + 1,
                action: step.clone(),
                note,
                snapshot: page.snapshot(),
            });
        }

        Ok(ScenarioReport {
            name: self.name.clone(),
            initial,
            steps,
        })
    }
}

async fn apply(page: &mut Page, step: &Step, submitter: &dyn Submitter) -> Result<Option<String>> {
    let note = match step {
        Step::Resize { width, height } => {
            let revealed = page.resize(*width, *height);
            revealed_note(revealed)
        }
        Step::Scroll { y } => revealed_note(page.on_scroll(*y)),
        Step::Tick { ms } => {
            page.tick(*ms);
            None
        }
        Step::ToggleMenu => changed_note(page.nav_mut().toggle_menu()),
        Step::CloseMenu => changed_note(page.nav_mut().close_menu()),
        Step::Backdrop => changed_note(page.nav_mut().backdrop_click()),
        Step::Escape => changed_note(page.nav_mut().escape()),
        Step::Select { index } => {
            let Some(navigation) = page.navigate(*index) else {
                bail!(
                    "No navigation entry at index {} ({} entries)",
                    index,
                    page.nav().entries().len()
                );
            };
            match page.scroll_target(&navigation) {
                Some(y) => {
                    page.on_scroll(y);
                    Some(format!("{navigation:?} -> scrolled to {y}"))
                }
                None => Some(format!("{navigation:?} -> no matching section")),
            }
        }
        Step::Fill {
            name,
            email,
            region,
            interest,
            message,
        } => {
            let form = page.form();
            let mut accepted = true;
            for (field, value) in [
                (Field::Name, name),
                (Field::Email, email),
                (Field::Message, message),
            ] {
                if let Some(value) = value {
                    accepted &= form.set_field(field, value.as_str());
                }
            }
            if let Some(region) = region {
                accepted &= form.set_region(region.as_str());
            }
            if let Some(interest) = interest {
                accepted &= form.set_interest(*interest);
            }
            (!accepted).then(|| "form is not accepting input".to_string())
        }
        Step::Submit => match page.submit_contact(submitter).await {
            Some(phase) => Some(format!("settled as {phase:?}")),
            None => Some("ignored".to_string()),
        },
        Step::SendAnother => changed_note(page.form().send_another()),
    };
    Ok(note)
}

fn revealed_note(revealed: usize) -> Option<String> {
    (revealed > 0).then(|| format!("{revealed} section(s) revealed"))
}

fn changed_note(changed: bool) -> Option<String> {
    (!changed).then(|| "ignored".to_string())
}
