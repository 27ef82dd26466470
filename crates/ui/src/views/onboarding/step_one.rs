use dioxus::prelude::*;

use prep_core::model::BasicInfo;

// Single-user client for now; the backend keys plans by user_id.
const USER_ID: u64 = 1;

/// Step 1: collect the basic exam info.
///
/// Submitting validates through `BasicInfo::new` and either advances the
/// wizard or shows the validation message inline. When the user navigates
/// back here, `initial` restores the previously entered values.
#[component]
pub fn StepOne(initial: Option<BasicInfo>, on_next: EventHandler<BasicInfo>) -> Element {
    let mut subject = use_signal(|| {
        initial
            .as_ref()
            .map(|info| info.subject().to_string())
            .unwrap_or_default()
    });
    let mut exam_type = use_signal(|| {
        initial
            .as_ref()
            .map_or_else(|| "Final".to_string(), |info| info.exam_type().to_string())
    });
    let mut exam_date = use_signal(|| {
        initial
            .as_ref()
            .map(|info| info.exam_date().to_string())
            .unwrap_or_default()
    });
    let mut daily_hours = use_signal(|| {
        initial
            .as_ref()
            .map_or_else(|| "2".to_string(), |info| info.daily_hours().to_string())
    });
    let mut target_grade = use_signal(|| {
        initial
            .as_ref()
            .map_or_else(|| "A".to_string(), |info| info.target_grade().to_string())
    });
    let mut error = use_signal(|| None::<String>);

    let on_submit = move |_| {
        let hours: f64 = match daily_hours().trim().parse() {
            Ok(value) => value,
            Err(_) => {
                error.set(Some("daily study hours must be a positive number".to_string()));
                return;
            }
        };
        match BasicInfo::new(
            USER_ID,
            subject(),
            exam_type(),
            exam_date(),
            hours,
            target_grade(),
        ) {
            Ok(info) => {
                error.set(None);
                on_next.call(info);
            }
            Err(err) => error.set(Some(err.to_string())),
        }
    };

    rsx! {
        div { class: "step",
            h2 { "Tell us about your exam" }
            p { class: "step-blurb", "We use this to size your study plan." }

            div { class: "form-grid",
                label { "Subject" }
                input {
                    r#type: "text",
                    placeholder: "e.g. Biology",
                    value: "{subject}",
                    oninput: move |evt| subject.set(evt.value()),
                }

                label { "Exam type" }
                select {
                    value: "{exam_type}",
                    onchange: move |evt| exam_type.set(evt.value()),
                    option { value: "Final", "Final" }
                    option { value: "Midterm", "Midterm" }
                    option { value: "Board", "Board" }
                    option { value: "Entrance", "Entrance" }
                }

                label { "Exam date" }
                input {
                    r#type: "date",
                    value: "{exam_date}",
                    oninput: move |evt| exam_date.set(evt.value()),
                }

                label { "Daily study hours" }
                input {
                    r#type: "number",
                    min: "0.5",
                    step: "0.5",
                    value: "{daily_hours}",
                    oninput: move |evt| daily_hours.set(evt.value()),
                }

                label { "Target grade" }
                select {
                    value: "{target_grade}",
                    onchange: move |evt| target_grade.set(evt.value()),
                    option { value: "A+", "A+" }
                    option { value: "A", "A" }
                    option { value: "B", "B" }
                    option { value: "C", "C" }
                }
            }

            if let Some(message) = error() {
                p { class: "form-error", "{message}" }
            }

            button {
                class: "primary",
                r#type: "button",
                onclick: on_submit,
                "Continue"
            }
        }
    }
}
