use std::path::PathBuf;

use dioxus::prelude::*;

use prep_core::model::{BasicInfo, UploadKind};
use services::{TopicExtraction, UploadSlots, upload_and_extract};

use crate::context::AppContext;
use crate::views::ViewError;

/// Step 2: pick up to three PDFs and extract topics from them.
///
/// Submit is enabled only once at least one slot is filled and nothing is
/// in flight. Uploads run sequentially in fixed slot order inside
/// `upload_and_extract`; any failure keeps the wizard here with the message
/// shown, and retrying is a fresh user-initiated submit.
#[component]
pub fn StepTwo(
    basic_info: BasicInfo,
    on_next: EventHandler<TopicExtraction>,
    on_back: EventHandler<()>,
) -> Element {
    let ctx = use_context::<AppContext>();
    let mut slots = use_signal(UploadSlots::new);
    let mut uploading = use_signal(|| false);
    let mut error = use_signal(|| None::<ViewError>);

    let subject = basic_info.subject().to_string();
    let submit_disabled = slots.read().is_empty() || uploading();

    let on_submit = move |_| {
        if slots.read().is_empty() || uploading() {
            return;
        }
        let api = ctx.api();
        let subject = subject.clone();
        let snapshot = slots.read().clone();
        uploading.set(true);

        spawn(async move {
            let result = upload_and_extract(api.as_ref(), &subject, &snapshot).await;
            uploading.set(false);
            match result {
                Ok(extraction) => {
                    error.set(None);
                    on_next.call(extraction);
                }
                Err(err) => error.set(Some(ViewError::from(err))),
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
            h2 { "Upload Study Materials" }
            p { class: "step-blurb",
                "Upload PDFs to extract topics and create your study plan"
            }

            for kind in UploadKind::ALL {
                FileSlot {
                    kind,
                    selected: slots
                        .read()
                        .get(kind)
                        .and_then(|path| path.file_name())
                        .map(|name| name.to_string_lossy().into_owned()),
                    on_pick: move |path: PathBuf| slots.write().set(kind, path),
                }
            }

            if let Some(err) = error() {
                p { class: "form-error", "{err.message()}" }
            }

            button {
                class: "primary",
                r#type: "button",
                disabled: submit_disabled,
                onclick: on_submit,
                if uploading() { "Processing..." } else { "Extract Topics & Continue" }
            }
        }
    }
}

#[component]
fn FileSlot(kind: UploadKind, selected: Option<String>, on_pick: EventHandler<PathBuf>) -> Element {
    rsx! {
        div { class: "file-slot",
            label { class: "file-slot-label",
                span { "{kind.label()}" }
                input {
                    r#type: "file",
                    accept: ".pdf",
                    onchange: move |evt| {
                        if let Some(file) = evt.files().into_iter().next() {
                            on_pick.call(file.path());
                        }
                    },
                }
            }
            if let Some(name) = selected {
                p { class: "file-slot-selected", "{name}" }
            }
        }
    }
}
