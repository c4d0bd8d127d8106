//! Skill and employment statistics, one row per mandal.

use serde::{Deserialize, Serialize};

/// Skill-development progress counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillDevelopment {
    pub completed: i64,
    pub in_progress: i64,
    pub pending: i64,
}

/// One row of the statistics table.
///
/// Job and test figures are `None` when the source cell held no parseable
/// integer. Consumers render that as missing rather than as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatRecord {
    pub district_name: String,
    pub mandal_name: String,
    pub it_jobs: Option<i64>,
    pub non_it_jobs: Option<i64>,
    pub test_results: Option<i64>,
    pub skill_development: SkillDevelopment,
}

/// Which name column a statistics lookup matches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatKey {
    District,
    Mandal,
}

impl StatRecord {
    pub fn name(&self, key: StatKey) -> &str {
        match key {
            StatKey::District => &self.district_name,
            StatKey::Mandal => &self.mandal_name,
        }
    }

    /// `[it_jobs, non_it_jobs, test_results]`, the order chart labels use.
    pub fn job_figures(&self) -> [Option<i64>; 3] {
        [self.it_jobs, self.non_it_jobs, self.test_results]
    }
}

/// Sentinel rendered in place of a missing figure.
pub const NOT_AVAILABLE: &str = "N/A";
