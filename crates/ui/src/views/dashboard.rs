use dioxus::prelude::*;

use prep_core::model::PlanId;

use crate::context::AppContext;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{DashboardVm, map_dashboard};

/// Read-only progress view for one plan, identified by the `plan_id` query
/// parameter. Fetched once per id; the signal prop restarts the fetch when
/// the route changes in place (e.g. leaving a plan via the nav link).
///
/// A missing id, a failed fetch, and a plan the backend knows nothing about
/// all collapse into the same "no data" terminal state; the failure detail
/// is logged by the API client but not shown.
#[component]
pub fn DashboardView(plan_id: ReadOnlySignal<Option<u64>>) -> Element {
    let ctx = use_context::<AppContext>();
    let api = ctx.api();

    let resource = use_resource(move || {
        let api = api.clone();
        let plan_id = plan_id();
        async move {
            match plan_id {
                None => Ok(None),
                Some(id) => api
                    .get_dashboard(PlanId::new(id))
                    .await
                    .map(|data| Some(map_dashboard(&data)))
                    .map_err(ViewError::from),
            }
        }
    });

    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page dashboard",
            h2 { "Your Study Dashboard" }

            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Ready(Some(vm)) => rsx! {
                    DashboardBody { vm }
                },
                ViewState::Ready(None) | ViewState::Error(_) => rsx! {
                    p { class: "empty", "No plan data found" }
                },
            }
        }
    }
}

#[component]
fn DashboardBody(vm: DashboardVm) -> Element {
    rsx! {
        div { class: "stats-grid",
            StatCard { label: "Days Remaining", value: vm.days_remaining.clone() }
            StatCard { label: "Progress", value: vm.progress.clone() }
            StatCard { label: "Completed", value: vm.completed.clone() }
            StatCard { label: "Total Sessions", value: vm.total.clone() }
        }

        div { class: "tasks",
            h3 { "Today's Tasks" }
            if vm.tasks.is_empty() {
                p { class: "empty", "No tasks scheduled for today" }
            } else {
                ul { class: "task-list",
                    for task in vm.tasks.iter() {
                        li { class: if task.completed { "task-row done" } else { "task-row" },
                            div { class: "task-text",
                                p { class: "task-topic", "{task.topic}" }
                                p { class: "task-duration", "{task.duration}" }
                            }
                            if !task.completed {
                                // Session launch is handled outside this client.
                                button { class: "task-start", r#type: "button", "Start" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn StatCard(label: String, value: String) -> Element {
    rsx! {
        div { class: "stat-card",
            p { class: "stat-label", "{label}" }
            p { class: "stat-value", "{value}" }
        }
    }
}
