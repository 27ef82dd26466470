use prep_core::model::{DashboardData, TodayTask};

/// UI-ready dashboard stats, formatted once so rendering stays dumb.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DashboardVm {
    pub exam_date: String,
    pub days_remaining: String,
    pub progress: String,
    pub completed: String,
    pub total: String,
    pub tasks: Vec<TaskRowVm>,
}

/// One row of today's task list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TaskRowVm {
    pub topic: String,
    pub duration: String,
    pub completed: bool,
}

/// Map a validated backend snapshot into display strings.
///
/// Pure: identical input data always yields identical rendered values.
#[must_use]
pub fn map_dashboard(data: &DashboardData) -> DashboardVm {
    DashboardVm {
        exam_date: data.exam_date().to_string(),
        days_remaining: data.days_remaining().to_string(),
        progress: format!("{}%", data.progress()),
        completed: data.completed_sessions().to_string(),
        total: data.total_sessions().to_string(),
        tasks: data.today_tasks().iter().map(map_task).collect(),
    }
}

fn map_task(task: &TodayTask) -> TaskRowVm {
    TaskRowVm {
        topic: task.topic.clone(),
        duration: format!("{} hours", task.duration),
        completed: task.completed,
    }
}
