//! Stagger timing for item groups

use serde::{Deserialize, Serialize};

/// Order in which a group's items start
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum StaggerDirection {
    /// First to last
    #[default]
    Forward,
    /// Last to first
    Reverse,
    /// Center outward
    FromCenter,
}

/// Per-item delay schedule: item `i` waits `i * step_ms`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct StaggerConfig {
    /// Delay between consecutive items (ms)
    pub step_ms: u32,
    /// Direction of the cascade
    #[serde(default)]
    pub direction: StaggerDirection,
    /// Items past this position share the last delay
    #[serde(default)]
    pub limit: Option<usize>,
}

impl StaggerConfig {
    /// Forward stagger with a fixed step
    pub fn new(step_ms: u32) -> Self {
        Self {
            step_ms,
            direction: StaggerDirection::Forward,
            limit: None,
        }
    }

    /// Stagger from last to first
    pub fn reverse(mut self) -> Self {
        self.direction = StaggerDirection::Reverse;
        self
    }

    /// Stagger from the center outward
    pub fn from_center(mut self) -> Self {
        self.direction = StaggerDirection::FromCenter;
        self
    }

    /// Cap the cascade at `n` steps
    pub fn limit(mut self, n: usize) -> Self {
        self.limit = Some(n);
        self
    }

    /// Delay for item `index` of `total`
    pub fn delay_for_index(&self, index: usize, total: usize) -> u32 {
        let position = match self.direction {
            StaggerDirection::Forward => index,
            StaggerDirection::Reverse => total.saturating_sub(1).saturating_sub(index),
            StaggerDirection::FromCenter => index.abs_diff(total / 2),
        };
        let position = match self.limit {
            Some(limit) => position.min(limit),
            None => position,
        };
        let position = u32::try_from(position).unwrap_or(u32::MAX);
        self.step_ms.saturating_mul(position)
    }
}
