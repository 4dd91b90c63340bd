//! Case ID minting.
//!
//! A case ID is the short public code a customer uses to track a repair:
//! prefix + four-digit year + per-year sequence number, zero-padded to at
//! least [`MIN_SEQUENCE_DIGITS`] digits (`DL2026007`). Sequence numbers come
//! from a monotonic per-year counter owned by the [`CaseIdStore`]; past 999
//! the suffix simply grows (`DL20261000`), so the space never wraps.
//!
//! The generator re-checks every candidate against existing records and
//! gives up after a bounded number of attempts with
//! [`CoreError::IdSpaceExhausted`]. It does not persist anything itself; the
//! caller inserts the record and relies on the storage-level unique
//! constraint as the final arbiter.

use std::fmt;
use std::future::Future;

use serde::Serialize;

use crate::error::CoreError;

/// Default case ID prefix.
pub const DEFAULT_PREFIX: &str = "DL";
/// Default bound on candidates tried per generation.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 10;
/// Minimum width of the zero-padded sequence suffix.
pub const MIN_SEQUENCE_DIGITS: usize = 3;

const YEAR_DIGITS: usize = 4;

// ---------------------------------------------------------------------------
// CaseId
// ---------------------------------------------------------------------------

/// A minted case identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct CaseId(String);

impl CaseId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for CaseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CaseId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// ---------------------------------------------------------------------------
// Format
// ---------------------------------------------------------------------------

/// Renders and recognises case IDs for one prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseIdFormat {
    prefix: String,
}

impl CaseIdFormat {
    /// The prefix must be non-empty ASCII letters so it can never be
    /// confused with the digits that follow it.
    pub fn new(prefix: impl Into<String>) -> Result<Self, CoreError> {
        let prefix = prefix.into();
        if prefix.is_empty() || !prefix.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(CoreError::Validation(format!(
                "Case id prefix must be non-empty ASCII letters, got '{prefix}'"
            )));
        }
        Ok(Self { prefix })
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn render(&self, year: i32, sequence: u64) -> CaseId {
        CaseId(format!(
            "{}{year:04}{sequence:0width$}",
            self.prefix,
            width = MIN_SEQUENCE_DIGITS
        ))
    }

    /// Whether `candidate` has the shape this format renders.
    pub fn is_well_formed(&self, candidate: &str) -> bool {
        let Some(rest) = candidate.strip_prefix(self.prefix.as_str()) else {
            return false;
        };
        rest.len() >= YEAR_DIGITS + MIN_SEQUENCE_DIGITS
            && rest.bytes().all(|b| b.is_ascii_digit())
    }
}

impl Default for CaseIdFormat {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Store
// ---------------------------------------------------------------------------

/// Persistence collaborator consulted while minting.
pub trait CaseIdStore: Send + Sync {
    /// Advance and return the counter for `year`. Must be atomic: concurrent
    /// callers never observe the same value.
    fn next_sequence(&self, year: i32) -> impl Future<Output = Result<u64, CoreError>> + Send;

    /// Whether a record with this case ID already exists.
    fn case_id_exists(
        &self,
        case_id: &str,
    ) -> impl Future<Output = Result<bool, CoreError>> + Send;
}

// ---------------------------------------------------------------------------
// Generator
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct CaseIdGenerator {
    format: CaseIdFormat,
    max_attempts: u32,
}

impl Default for CaseIdGenerator {
    fn default() -> Self {
        Self {
            format: CaseIdFormat::default(),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl CaseIdGenerator {
    /// `max_attempts` is raised to at least 1.
    pub fn new(format: CaseIdFormat, max_attempts: u32) -> Self {
        Self {
            format,
            max_attempts: max_attempts.max(1),
        }
    }

    pub fn format(&self) -> &CaseIdFormat {
        &self.format
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Mint a case ID for `year` that does not exist in `store` at return
    /// time.
    pub async fn generate<S>(&self, store: &S, year: i32) -> Result<CaseId, CoreError>
    where
        S: CaseIdStore,
    {
        let mut budget = self.budget();
        self.generate_within(store, year, &mut budget).await
    }

    /// A fresh attempt budget of `max_attempts` counter draws.
    pub fn budget(&self) -> AttemptBudget {
        AttemptBudget {
            remaining: self.max_attempts,
        }
    }

    /// Like [`generate`](Self::generate), but draws from a caller-owned
    /// budget so several mints (e.g. re-mints after an insert collision)
    /// share one bound of `max_attempts` counter draws in total.
    pub async fn generate_within<S>(
        &self,
        store: &S,
        year: i32,
        budget: &mut AttemptBudget,
    ) -> Result<CaseId, CoreError>
    where
        S: CaseIdStore,
    {
        while budget.take() {
            let sequence = store.next_sequence(year).await?;
            let candidate = self.format.render(year, sequence);
            if !store.case_id_exists(candidate.as_str()).await? {
                return Ok(candidate);
            }
        }
        Err(CoreError::IdSpaceExhausted {
            attempts: self.max_attempts,
        })
    }
}

/// Remaining counter draws for one intake.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttemptBudget {
    remaining: u32,
}

impl AttemptBudget {
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    fn take(&mut self) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        true
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
