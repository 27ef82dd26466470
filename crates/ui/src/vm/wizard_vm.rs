use prep_core::model::{BasicInfo, Topic};

/// The three onboarding panels, strictly forward/backward navigable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WizardStep {
    BasicInfo,
    Upload,
    Review,
}

impl WizardStep {
    /// 1-based position for the progress header.
    #[must_use]
    pub fn number(self) -> u8 {
        match self {
            WizardStep::BasicInfo => 1,
            WizardStep::Upload => 2,
            WizardStep::Review => 3,
        }
    }
}

/// Explicit wizard state: the current step plus everything carried between
/// steps. Owned by the onboarding view; mutation happens only through the
/// transition methods below, and a transition called from the wrong step is
/// ignored, so steps cannot be skipped.
///
/// Nothing here survives the page: closing the app loses all progress.
#[derive(Clone, Debug, PartialEq)]
pub struct WizardVm {
    step: WizardStep,
    basic_info: Option<BasicInfo>,
    topics: Vec<Topic>,
}

impl WizardVm {
    #[must_use]
    pub fn new() -> Self {
        Self {
            step: WizardStep::BasicInfo,
            basic_info: None,
            topics: Vec::new(),
        }
    }

    #[must_use]
    pub fn step(&self) -> WizardStep {
        self.step
    }

    #[must_use]
    pub fn basic_info(&self) -> Option<&BasicInfo> {
        self.basic_info.as_ref()
    }

    #[must_use]
    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }

    /// Step 1 -> 2, carrying the validated answers forward.
    pub fn submit_basic_info(&mut self, info: BasicInfo) {
        if self.step == WizardStep::BasicInfo {
            self.basic_info = Some(info);
            self.step = WizardStep::Upload;
        }
    }

    /// Step 2 -> 1. The answers stay in memory so the form can restore them.
    pub fn back_to_basic_info(&mut self) {
        if self.step == WizardStep::Upload {
            self.step = WizardStep::BasicInfo;
        }
    }

    /// Step 2 -> 3 with the freshly extracted topic list.
    pub fn topics_extracted(&mut self, topics: Vec<Topic>) {
        if self.step == WizardStep::Upload && self.basic_info.is_some() {
            self.topics = topics;
            self.step = WizardStep::Review;
        }
    }

    /// Step 3 -> 2. Extracted topics are discarded; reaching step 3 again
    /// requires re-uploading and re-extracting.
    pub fn back_to_upload(&mut self) {
        if self.step == WizardStep::Review {
            self.topics.clear();
            self.step = WizardStep::Upload;
        }
    }
}

impl Default for WizardVm {
    fn default() -> Self {
        Self::new()
    }
}
