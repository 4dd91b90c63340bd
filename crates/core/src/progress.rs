//! Progress and SLA estimation for service requests.
//!
//! Progress is a coarse 0-100 value derived from the discrete status at read
//! time; it is never stored. The SLA table turns customer urgency into a
//! number of days until the expected completion.

use serde::{Deserialize, Serialize};

use crate::domain::{RequestStatus, Timestamp, Urgency};
use crate::error::CoreError;

/// Upper bound accepted for any SLA entry (ten years).
pub const MAX_SLA_DAYS: i64 = 3650;

// ---------------------------------------------------------------------------
// Progress
// ---------------------------------------------------------------------------

/// Status → percentage lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressTable {
    pub pending: u8,
    pub in_progress: u8,
    pub completed: u8,
    /// Returned for any status string outside the known set.
    pub unknown: u8,
}

impl Default for ProgressTable {
    fn default() -> Self {
        Self {
            pending: 10,
            in_progress: 50,
            completed: 100,
            unknown: 0,
        }
    }
}

impl ProgressTable {
    pub fn progress_for(&self, status: RequestStatus) -> u8 {
        match status {
            RequestStatus::Pending => self.pending,
            RequestStatus::InProgress => self.in_progress,
            RequestStatus::Completed => self.completed,
        }
    }

    /// Progress for a stored status string. Never fails: unrecognised values
    /// map to [`ProgressTable::unknown`].
    pub fn calculate_progress(&self, status: &str) -> u8 {
        status
            .parse::<RequestStatus>()
            .map(|s| self.progress_for(s))
            .unwrap_or(self.unknown)
    }
}

// ---------------------------------------------------------------------------
// SLA
// ---------------------------------------------------------------------------

/// Urgency → days-to-completion lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlaTable {
    pub low: i64,
    pub medium: i64,
    pub high: i64,
    pub critical: i64,
    /// Returned for any urgency string outside the known set.
    pub unknown: i64,
}

impl Default for SlaTable {
    fn default() -> Self {
        Self {
            low: 7,
            medium: 5,
            high: 2,
            critical: 1,
            unknown: 7,
        }
    }
}

impl SlaTable {
    pub fn days_for(&self, urgency: Urgency) -> i64 {
        match urgency {
            Urgency::Low => self.low,
            Urgency::Medium => self.medium,
            Urgency::High => self.high,
            Urgency::Critical => self.critical,
        }
    }

    /// SLA days for a raw urgency string; unrecognised values map to
    /// [`SlaTable::unknown`].
    pub fn get_estimated_completion_days(&self, urgency: &str) -> i64 {
        urgency
            .parse::<Urgency>()
            .map(|u| self.days_for(u))
            .unwrap_or(self.unknown)
    }

    /// Expected completion instant for a request received at `now`.
    ///
    /// Fails instead of panicking when the table holds a day count that does
    /// not fit a timestamp; loaded tables are bounded by [`MAX_SLA_DAYS`].
    pub fn estimated_completion(
        &self,
        urgency: Urgency,
        now: Timestamp,
    ) -> Result<Timestamp, CoreError> {
        let days = self.days_for(urgency);
        chrono::Duration::try_days(days)
            .and_then(|d| now.checked_add_signed(d))
            .ok_or_else(|| {
                CoreError::Internal(format!("SLA of {days} days for {urgency} is out of range"))
            })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
