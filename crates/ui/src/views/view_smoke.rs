use prep_core::model::{DashboardData, TodayTask};

use super::test_harness::{
    DASHBOARD_PLAN_ID, StubApi, ViewKind, drive_dom, setup_dashboard_with_plan_signal,
    setup_view_harness,
};

fn sample_dashboard() -> DashboardData {
    DashboardData::from_parts(
        "2024-06-01".into(),
        10,
        35.0,
        8,
        3,
        vec![TodayTask {
            topic: "Algebra".into(),
            duration: 1.5,
            completed: false,
        }],
    )
    .expect("valid dashboard")
}

#[tokio::test(flavor = "current_thread")]
async fn landing_renders_hero_and_cta() {
    let mut harness = setup_view_harness(ViewKind::Landing, StubApi::new());
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Smart Exam Prep"), "missing headline in {html}");
    assert!(html.contains("Get Started"), "missing cta in {html}");
    assert!(html.contains("Track Progress"), "missing feature card in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn onboarding_starts_at_step_one() {
    let mut harness = setup_view_harness(ViewKind::Onboarding, StubApi::new());
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Step 1 of 3"), "missing progress label in {html}");
    assert!(html.contains("Subject"), "missing subject field in {html}");
    assert!(html.contains("Continue"), "missing submit in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn upload_step_disables_submit_without_files() {
    let mut harness = setup_view_harness(ViewKind::Upload, StubApi::new());
    harness.rebuild();
    let html = harness.render();
    assert!(
        html.contains("Previous Year Questions"),
        "missing pyq slot in {html}"
    );
    assert!(html.contains("Syllabus"), "missing syllabus slot in {html}");
    assert!(html.contains("Notes"), "missing notes slot in {html}");
    assert!(html.contains("disabled"), "submit should be disabled in {html}");
    assert!(
        html.contains("Extract Topics"),
        "missing submit label in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn review_step_renders_topics_in_backend_order() {
    let mut harness = setup_view_harness(ViewKind::Review, StubApi::new());
    harness.rebuild();
    let html = harness.render();

    let first = html.find("Cell Structure").expect("first topic rendered");
    let second = html.find("Genetics").expect("second topic rendered");
    assert!(first < second, "topics out of order in {html}");
    assert!(html.contains("Generate My Plan"), "missing generate action in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn dashboard_renders_stats_and_task_row() {
    let mut harness = setup_view_harness(
        ViewKind::Dashboard(Some(42)),
        StubApi::with_dashboard(sample_dashboard()),
    );
    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;
    let html = harness.render();

    for value in ["10", "35%", "3", "8"] {
        let needle = format!("stat-value\">{value}<");
        assert!(html.contains(&needle), "missing stat {value} in {html}");
    }
    assert!(html.contains("Algebra"), "missing task topic in {html}");
    assert!(html.contains("1.5 hours"), "missing task duration in {html}");
    assert!(html.contains("Start"), "missing start action in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn dashboard_without_plan_id_shows_no_data() {
    let mut harness = setup_view_harness(ViewKind::Dashboard(None), StubApi::new());
    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("No plan data found"), "missing empty state in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn dashboard_fetch_failure_collapses_to_same_no_data_state() {
    let mut harness =
        setup_view_harness(ViewKind::Dashboard(Some(42)), StubApi::failing_dashboard());
    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("No plan data found"), "missing empty state in {html}");
    // The failure detail is logged, never rendered.
    assert!(!html.contains("scripted dashboard failure"), "leaked error in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn dashboard_refetches_when_plan_id_changes_in_place() {
    let mut harness = setup_dashboard_with_plan_signal(StubApi::with_dashboard(sample_dashboard()));
    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Algebra"), "missing initial snapshot in {html}");

    // Clearing the plan id mimics navigating to /dashboard without a plan
    // while the view stays mounted.
    harness.dom.in_runtime(|| {
        *DASHBOARD_PLAN_ID.write() = None;
    });
    drive_dom(&mut harness.dom);
    harness.drive_async().await;
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("No plan data found"), "missing empty state in {html}");
    assert!(!html.contains("Algebra"), "stale snapshot still rendered in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn dashboard_with_no_tasks_shows_empty_message() {
    let data = DashboardData::from_parts("2024-06-01".into(), 10, 0.0, 8, 0, Vec::new())
        .expect("valid dashboard");
    let mut harness =
        setup_view_harness(ViewKind::Dashboard(Some(42)), StubApi::with_dashboard(data));
    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;
    let html = harness.render();
    assert!(
        html.contains("No tasks scheduled for today"),
        "missing no-tasks message in {html}"
    );
    assert!(!html.contains("task-row"), "unexpected task rows in {html}");
}
