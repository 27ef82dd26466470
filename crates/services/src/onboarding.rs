//! The wizard's two network workflows: upload-and-extract (step 2) and
//! create-and-generate (step 3).

use std::path::{Path, PathBuf};

use prep_core::model::{BasicInfo, PlanId, Topic, UploadKind};

use crate::client::StudyApi;
use crate::error::OnboardingError;

/// The three optional file slots of step 2.
///
/// A slot is mutated by user selection and cleared only by replacement;
/// backward navigation drops the whole value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UploadSlots {
    pyq: Option<PathBuf>,
    syllabus: Option<PathBuf>,
    notes: Option<PathBuf>,
}

impl UploadSlots {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, kind: UploadKind, path: PathBuf) {
        *self.slot_mut(kind) = Some(path);
    }

    #[must_use]
    pub fn get(&self, kind: UploadKind) -> Option<&Path> {
        match kind {
            UploadKind::Pyq => self.pyq.as_deref(),
            UploadKind::Syllabus => self.syllabus.as_deref(),
            UploadKind::Notes => self.notes.as_deref(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        UploadKind::ALL.iter().all(|kind| self.get(*kind).is_none())
    }

    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.filled().count()
    }

    /// Filled slots in the fixed pyq, syllabus, notes order.
    pub fn filled(&self) -> impl Iterator<Item = (UploadKind, &Path)> {
        UploadKind::ALL
            .into_iter()
            .filter_map(|kind| self.get(kind).map(|path| (kind, path)))
    }

    fn slot_mut(&mut self, kind: UploadKind) -> &mut Option<PathBuf> {
        match kind {
            UploadKind::Pyq => &mut self.pyq,
            UploadKind::Syllabus => &mut self.syllabus,
            UploadKind::Notes => &mut self.notes,
        }
    }
}

/// Result of the step-2 workflow: the concatenated text and the topics the
/// backend extracted from it.
#[derive(Clone, Debug, PartialEq)]
pub struct TopicExtraction {
    pub combined_text: String,
    pub topics: Vec<Topic>,
}

/// Uploads every filled slot sequentially in fixed order, then asks the
/// backend for topics over the concatenated text.
///
/// The extracted texts are joined with a blank-line separator. Any failure
/// aborts immediately: no further uploads are attempted and no extract call
/// is made, so the wizard stays on step 2 with nothing to resume.
///
/// # Errors
///
/// Returns `OnboardingError::NoFiles` when no slot is filled (the UI also
/// guards this by disabling the submit control), or the underlying
/// `ApiError` from the first call that fails.
pub async fn upload_and_extract(
    api: &dyn StudyApi,
    subject: &str,
    slots: &UploadSlots,
) -> Result<TopicExtraction, OnboardingError> {
    if slots.is_empty() {
        return Err(OnboardingError::NoFiles);
    }

    let mut combined_text = String::new();
    for (kind, path) in slots.filled() {
        let upload = api.upload_pdf(path, kind).await?;
        combined_text.push_str(&upload.text);
        combined_text.push_str("\n\n");
    }

    let topics = api.extract_topics(&combined_text, subject).await?;
    tracing::debug!(topics = topics.len(), "topic extraction finished");

    Ok(TopicExtraction {
        combined_text,
        topics,
    })
}

/// Step-3 workflow: registers the plan from the step-1 answers, then asks
/// the backend to schedule the reviewed topics against it.
///
/// # Errors
///
/// Returns the `ApiError` of whichever call fails; a failed generate call
/// leaves the created plan without a schedule, which the backend tolerates.
pub async fn create_plan_with_topics(
    api: &dyn StudyApi,
    info: &BasicInfo,
    topics: &[Topic],
) -> Result<PlanId, OnboardingError> {
    let created = api.create_study_plan(info).await?;
    api.generate_plan(created.plan_id, topics).await?;
    Ok(created.plan_id)
}
