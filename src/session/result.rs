use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::session::controller::Mode;
use crate::session::item::ItemSet;

/// Snapshot of a session for the result screen. Never persisted.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SessionSummary {
    pub set_key: String,
    pub title: String,
    pub mode: Mode,
    pub mastered: usize,
    pub total_unique: usize,
    pub attempts: usize,
    pub mistakes: usize,
    pub accuracy: f64,
    pub elapsed_secs: f64,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub partial: bool,
}

impl SessionSummary {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        set: &ItemSet,
        mode: Mode,
        mastered: usize,
        total_unique: usize,
        attempts: usize,
        mistakes: usize,
        elapsed_secs: f64,
        partial: bool,
    ) -> Self {
        let accuracy = if attempts > 0 {
            ((attempts - mistakes) as f64 / attempts as f64 * 100.0).clamp(0.0, 100.0)
        } else {
            100.0
        };

        Self {
            set_key: set.key.clone(),
            title: set.title.clone(),
            mode,
            mastered,
            total_unique,
            attempts,
            mistakes,
            accuracy,
            elapsed_secs,
            timestamp: Utc::now(),
            partial,
        }
    }

    pub fn completion_percent(&self) -> f64 {
        if self.total_unique == 0 {
            return 0.0;
        }
        (self.mastered as f64 / self.total_unique as f64 * 100.0).clamp(0.0, 100.0)
    }
}
