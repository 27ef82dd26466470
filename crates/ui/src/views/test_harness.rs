use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};

use prep_core::model::{
    BasicInfo, DashboardData, LessonBody, LessonContent, PlanId, SessionId, Topic, TopicId,
    UploadKind,
};
use services::{
    ApiError, CreatedPlan, ExtractedFile, PdfUpload, PlanSummary, SessionState, StudyApi,
};

use crate::context::AppContext;

use super::onboarding::{StepThree, StepTwo};
use super::{DashboardView, LandingView, OnboardingView};

/// Canned backend for view tests: serves a fixed dashboard snapshot or a
/// scripted failure, and answers everything else with minimal defaults.
#[derive(Default)]
pub struct StubApi {
    dashboard: Option<DashboardData>,
    fail_dashboard: bool,
}

impl StubApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dashboard(data: DashboardData) -> Self {
        Self {
            dashboard: Some(data),
            fail_dashboard: false,
        }
    }

    pub fn failing_dashboard() -> Self {
        Self {
            dashboard: None,
            fail_dashboard: true,
        }
    }
}

#[async_trait]
impl StudyApi for StubApi {
    async fn create_study_plan(&self, _info: &BasicInfo) -> Result<CreatedPlan, ApiError> {
        Ok(CreatedPlan {
            plan_id: PlanId::new(1),
            subject: None,
            exam_date: None,
        })
    }

    async fn upload_pdf(&self, _path: &Path, kind: UploadKind) -> Result<PdfUpload, ApiError> {
        Ok(PdfUpload {
            text: String::new(),
            filename: None,
            file_type: Some(kind.as_str().to_string()),
        })
    }

    async fn extract_topics(&self, _text: &str, _subject: &str) -> Result<Vec<Topic>, ApiError> {
        Ok(Vec::new())
    }

    async fn extract_topics_from_json(
        &self,
        _json_paths: &[String],
    ) -> Result<Vec<Topic>, ApiError> {
        Ok(Vec::new())
    }

    async fn list_extracted_files(&self) -> Result<Vec<ExtractedFile>, ApiError> {
        Ok(Vec::new())
    }

    async fn generate_plan(
        &self,
        _plan_id: PlanId,
        _topics: &[Topic],
    ) -> Result<PlanSummary, ApiError> {
        Ok(PlanSummary {
            message: None,
            total_sessions: None,
        })
    }

    async fn get_dashboard(&self, _plan_id: PlanId) -> Result<DashboardData, ApiError> {
        if self.fail_dashboard {
            return Err(ApiError::Server {
                status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
                message: "scripted dashboard failure".to_string(),
            });
        }
        self.dashboard.clone().ok_or(ApiError::Server {
            status: reqwest::StatusCode::NOT_FOUND,
            message: "plan not found".to_string(),
        })
    }

    async fn get_lesson(&self, _topic_id: TopicId) -> Result<LessonContent, ApiError> {
        Ok(LessonContent {
            topic_name: "Stub".to_string(),
            content: LessonBody {
                explanation: String::new(),
                key_points: Vec::new(),
                example: String::new(),
                common_mistakes: Vec::new(),
            },
        })
    }

    async fn mark_session_complete(
        &self,
        session_id: SessionId,
    ) -> Result<SessionState, ApiError> {
        Ok(SessionState {
            session_id: Some(session_id),
            completed: true,
        })
    }
}

/// Which view the harness mounts. `Upload` and `Review` mount the step
/// panels directly with canned wizard data, since reaching them through the
/// wizard needs user events SSR cannot produce.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Landing,
    Onboarding,
    Dashboard(Option<u64>),
    Upload,
    Review,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    api: Arc<StubApi>,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let api: Arc<dyn StudyApi> = props.api.clone();
    use_context_provider(|| AppContext::new(api));
    use_context_provider(|| props.view);
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

fn canned_basic_info() -> BasicInfo {
    BasicInfo::new(1, "Biology", "Final", "2024-06-01", 2.0, "A").expect("valid basic info")
}

fn canned_topics() -> Vec<Topic> {
    vec![
        Topic::extracted("Cell Structure", 0.6),
        Topic::extracted("Genetics", 0.4),
    ]
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Landing => rsx! { LandingView {} },
        ViewKind::Onboarding => rsx! { OnboardingView {} },
        ViewKind::Dashboard(plan_id) => rsx! { DashboardView { plan_id } },
        ViewKind::Upload => rsx! {
            StepTwo {
                basic_info: canned_basic_info(),
                on_next: move |_extraction: services::TopicExtraction| {},
                on_back: move |()| {},
            }
        },
        ViewKind::Review => rsx! {
            StepThree {
                basic_info: canned_basic_info(),
                topics: canned_topics(),
                on_back: move |()| {},
            }
        },
    }
}

/// Route parameter feeding [`DashboardSignalHost`]; tests write it to change
/// the mounted dashboard's plan id in place, without remounting the view.
pub static DASHBOARD_PLAN_ID: GlobalSignal<Option<u64>> = Signal::global(|| Some(42));

#[derive(Props, Clone)]
struct DashboardSignalHostProps {
    api: Arc<StubApi>,
}

impl PartialEq for DashboardSignalHostProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for DashboardSignalHostProps {}

#[component]
fn DashboardSignalHost(props: DashboardSignalHostProps) -> Element {
    let api: Arc<dyn StudyApi> = props.api.clone();
    use_context_provider(|| AppContext::new(api));
    rsx! {
        DashboardView { plan_id: DASHBOARD_PLAN_ID() }
    }
}

pub fn setup_dashboard_with_plan_signal(api: StubApi) -> ViewHarness {
    let dom = VirtualDom::new_with_props(
        DashboardSignalHost,
        DashboardSignalHostProps { api: Arc::new(api) },
    );
    ViewHarness { dom }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind, api: StubApi) -> ViewHarness {
    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            api: Arc::new(api),
            view,
        },
    );
    ViewHarness { dom }
}
