use dioxus::prelude::*;

use prep_core::model::BasicInfo;
use services::TopicExtraction;

use crate::vm::{WizardStep, WizardVm};

use super::{StepOne, StepThree, StepTwo};

/// The 3-step onboarding wizard. All wizard state lives in one signal-held
/// [`WizardVm`]; the step panels are dumb children wired to its transitions.
#[component]
pub fn OnboardingView() -> Element {
    let mut wizard = use_signal(WizardVm::new);

    let step = wizard.read().step();
    let basic_info = wizard.read().basic_info().cloned();
    let topics = wizard.read().topics().to_vec();

    rsx! {
        div { class: "page onboarding",
            StepHeader { step }

            match step {
                WizardStep::BasicInfo => rsx! {
                    StepOne {
                        initial: basic_info.clone(),
                        on_next: move |info: BasicInfo| wizard.write().submit_basic_info(info),
                    }
                },
                WizardStep::Upload => rsx! {
                    // Basic info always exists past step 1; an empty render
                    // here means a transition bug.
                    if let Some(info) = basic_info.clone() {
                        StepTwo {
                            basic_info: info,
                            on_back: move |()| wizard.write().back_to_basic_info(),
                            on_next: move |extraction: TopicExtraction| {
                                wizard.write().topics_extracted(extraction.topics);
                            },
                        }
                    }
                },
                WizardStep::Review => rsx! {
                    if let Some(info) = basic_info.clone() {
                        StepThree {
                            basic_info: info,
                            topics: topics.clone(),
                            on_back: move |()| wizard.write().back_to_upload(),
                        }
                    }
                },
            }
        }
    }
}

#[component]
fn StepHeader(step: WizardStep) -> Element {
    let current = step.number();

    rsx! {
        div { class: "wizard-progress",
            div { class: "wizard-bars",
                for n in 1..=3u8 {
                    div {
                        key: "{n}",
                        class: if n <= current { "bar filled" } else { "bar" },
                    }
                }
            }
            p { class: "wizard-step-label", "Step {current} of 3" }
        }
    }
}
