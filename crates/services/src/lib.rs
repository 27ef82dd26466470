#![forbid(unsafe_code)]

pub mod client;
pub mod config;
pub mod error;
pub mod onboarding;

pub use client::{
    ApiClient, CreatedPlan, ExtractedFile, PdfUpload, PlanSummary, SessionState, StudyApi,
};
pub use config::ApiConfig;
pub use error::{ApiError, OnboardingError};
pub use onboarding::{TopicExtraction, UploadSlots, create_plan_with_topics, upload_and_extract};
