//! Seed search statistics.

use serde::{Deserialize, Serialize};

/// Statistics collected during one seed search.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Candidate states replayed.
    pub candidates_checked: u64,

    /// Distinct matching states.
    pub hits: u64,

    /// Wall time of the scan (microseconds).
    pub elapsed_us: u64,
}

impl SearchStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Candidates replayed per second of wall time.
    #[must_use]
    pub fn candidates_per_second(&self) -> f64 {
        if self.elapsed_us == 0 {
            0.0
        } else {
            self.candidates_checked as f64 / (self.elapsed_us as f64 / 1_000_000.0)
        }
    }
}
