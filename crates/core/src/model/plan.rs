use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum BasicInfoError {
    #[error("subject must not be empty")]
    EmptySubject,

    #[error("exam type must not be empty")]
    EmptyExamType,

    #[error("target grade must not be empty")]
    EmptyTargetGrade,

    #[error("exam date must be a valid YYYY-MM-DD date: {raw}")]
    InvalidExamDate { raw: String },

    #[error("daily study hours must be a positive number")]
    InvalidDailyHours,
}

/// The user's onboarding answers: subject, exam, and study-time targets.
///
/// Built once at wizard step 1 and carried forward unchanged; it doubles as
/// the create-plan request body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BasicInfo {
    user_id: u64,
    subject: String,
    exam_type: String,
    exam_date: String,
    daily_hours: f64,
    target_grade: String,
}

impl BasicInfo {
    /// Validates and builds the step-1 answers.
    ///
    /// # Errors
    ///
    /// Returns `BasicInfoError` when any field is empty, the exam date is
    /// not an ISO `YYYY-MM-DD` date, or the daily hours are not a finite
    /// positive number.
    pub fn new(
        user_id: u64,
        subject: impl Into<String>,
        exam_type: impl Into<String>,
        exam_date: impl Into<String>,
        daily_hours: f64,
        target_grade: impl Into<String>,
    ) -> Result<Self, BasicInfoError> {
        let subject = subject.into().trim().to_string();
        if subject.is_empty() {
            return Err(BasicInfoError::EmptySubject);
        }
        let exam_type = exam_type.into().trim().to_string();
        if exam_type.is_empty() {
            return Err(BasicInfoError::EmptyExamType);
        }
        let target_grade = target_grade.into().trim().to_string();
        if target_grade.is_empty() {
            return Err(BasicInfoError::EmptyTargetGrade);
        }
        let exam_date = exam_date.into().trim().to_string();
        if NaiveDate::parse_from_str(&exam_date, "%Y-%m-%d").is_err() {
            return Err(BasicInfoError::InvalidExamDate { raw: exam_date });
        }
        if !daily_hours.is_finite() || daily_hours <= 0.0 {
            return Err(BasicInfoError::InvalidDailyHours);
        }

        Ok(Self {
            user_id,
            subject,
            exam_type,
            exam_date,
            daily_hours,
            target_grade,
        })
    }

    #[must_use]
    pub fn user_id(&self) -> u64 {
        self.user_id
    }

    #[must_use]
    pub fn subject(&self) -> &str {
        &self.subject
    }

    #[must_use]
    pub fn exam_type(&self) -> &str {
        &self.exam_type
    }

    #[must_use]
    pub fn exam_date(&self) -> &str {
        &self.exam_date
    }

    #[must_use]
    pub fn daily_hours(&self) -> f64 {
        self.daily_hours
    }

    #[must_use]
    pub fn target_grade(&self) -> &str {
        &self.target_grade
    }
}
