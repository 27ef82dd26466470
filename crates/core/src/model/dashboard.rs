use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum DashboardDataError {
    #[error("completed sessions ({completed}) exceed total sessions ({total})")]
    SessionCountMismatch { completed: u32, total: u32 },

    #[error("progress {0} is outside 0..=100")]
    ProgressOutOfRange(f64),
}

/// One scheduled item on today's task list.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TodayTask {
    pub topic: String,
    /// Planned duration in hours.
    pub duration: f64,
    pub completed: bool,
}

/// Read-only progress snapshot for one plan, computed by the backend.
///
/// Deserialization funnels through [`DashboardData::from_parts`], so a
/// payload that violates the session-count or progress bounds is rejected
/// at the decode boundary rather than rendered.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "RawDashboardData")]
pub struct DashboardData {
    exam_date: String,
    days_remaining: u32,
    progress: f64,
    total_sessions: u32,
    completed_sessions: u32,
    today_tasks: Vec<TodayTask>,
}

#[derive(Deserialize)]
struct RawDashboardData {
    exam_date: String,
    days_remaining: u32,
    progress: f64,
    total_sessions: u32,
    completed_sessions: u32,
    #[serde(default)]
    today_tasks: Vec<TodayTask>,
}

impl TryFrom<RawDashboardData> for DashboardData {
    type Error = DashboardDataError;

    fn try_from(raw: RawDashboardData) -> Result<Self, Self::Error> {
        Self::from_parts(
            raw.exam_date,
            raw.days_remaining,
            raw.progress,
            raw.total_sessions,
            raw.completed_sessions,
            raw.today_tasks,
        )
    }
}

impl DashboardData {
    /// Builds a snapshot, enforcing the backend's own invariants.
    ///
    /// # Errors
    ///
    /// Returns `DashboardDataError::SessionCountMismatch` when completed
    /// sessions exceed the total, and `ProgressOutOfRange` when progress
    /// leaves 0..=100. Equality of completed and total is accepted (a fully
    /// finished plan renders as 100%).
    pub fn from_parts(
        exam_date: String,
        days_remaining: u32,
        progress: f64,
        total_sessions: u32,
        completed_sessions: u32,
        today_tasks: Vec<TodayTask>,
    ) -> Result<Self, DashboardDataError> {
        if completed_sessions > total_sessions {
            return Err(DashboardDataError::SessionCountMismatch {
                completed: completed_sessions,
                total: total_sessions,
            });
        }
        if !(0.0..=100.0).contains(&progress) {
            return Err(DashboardDataError::ProgressOutOfRange(progress));
        }

        Ok(Self {
            exam_date,
            days_remaining,
            progress,
            total_sessions,
            completed_sessions,
            today_tasks,
        })
    }

    #[must_use]
    pub fn exam_date(&self) -> &str {
        &self.exam_date
    }

    #[must_use]
    pub fn days_remaining(&self) -> u32 {
        self.days_remaining
    }

    /// Percentage of the plan completed, 0..=100.
    #[must_use]
    pub fn progress(&self) -> f64 {
        self.progress
    }

    #[must_use]
    pub fn total_sessions(&self) -> u32 {
        self.total_sessions
    }

    #[must_use]
    pub fn completed_sessions(&self) -> u32 {
        self.completed_sessions
    }

    #[must_use]
    pub fn today_tasks(&self) -> &[TodayTask] {
        &self.today_tasks
    }
}
