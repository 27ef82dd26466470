mod dashboard;
mod ids;
mod lesson;
mod plan;
mod topic;
mod upload;

pub use dashboard::{DashboardData, DashboardDataError, TodayTask};
pub use ids::{PlanId, SessionId, TopicId};
pub use lesson::{LessonBody, LessonContent};
pub use plan::{BasicInfo, BasicInfoError};
pub use topic::Topic;
pub use upload::UploadKind;
