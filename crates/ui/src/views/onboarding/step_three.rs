use dioxus::prelude::*;
use dioxus_router::use_navigator;

use prep_core::model::{BasicInfo, Topic};
use services::create_plan_with_topics;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::ViewError;

/// Step 3: review the extracted topics and generate the plan.
///
/// Topics render in backend order, untouched. Generating registers the plan
/// and schedules the topics, then routes to the dashboard; a failure stays
/// here with the message shown.
#[component]
pub fn StepThree(basic_info: BasicInfo, topics: Vec<Topic>, on_back: EventHandler<()>) -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let mut generating = use_signal(|| false);
    let mut error = use_signal(|| None::<ViewError>);

    let subject = basic_info.subject().to_string();
    let info_for_submit = basic_info.clone();
    let topics_for_submit = topics.clone();
    let generate_disabled = generating() || topics.is_empty();

    let on_generate = move |_| {
        if generating() {
            return;
        }
        let api = ctx.api();
        let info = info_for_submit.clone();
        let topics = topics_for_submit.clone();
        generating.set(true);

        spawn(async move {
            match create_plan_with_topics(api.as_ref(), &info, &topics).await {
                Ok(plan_id) => {
                    navigator.push(Route::Dashboard {
                        plan_id: Some(plan_id.value()),
                    });
                }
                Err(err) => {
                    generating.set(false);
                    error.set(Some(ViewError::from(err)));
                }
            }
        });
    };

    rsx! {
        div { class: "step",
            button {
                class: "back-link",
                r#type: "button",
                onclick: move |_| on_back.call(()),
                "Back"
            }
            h2 { "Review Extracted Topics" }
            p { class: "step-blurb", "Topics extracted for {subject}, weighted by importance." }

            if topics.is_empty() {
                p { class: "empty", "No topics were extracted. Go back and try other files." }
            } else {
                ul { class: "topic-list",
                    for topic in topics.iter() {
                        li { class: "topic-row",
                            span { class: "topic-name", "{topic.name}" }
                            span { class: "topic-weight", "weight {topic.weight}" }
                        }
                    }
                }
            }

            if let Some(err) = error() {
                p { class: "form-error", "{err.message()}" }
            }

            button {
                class: "primary",
                r#type: "button",
                disabled: generate_disabled,
                onclick: on_generate,
                if generating() { "Generating your plan..." } else { "Generate My Plan" }
            }
        }
    }
}
