mod dashboard_vm;
mod wizard_vm;

pub use dashboard_vm::{DashboardVm, TaskRowVm, map_dashboard};
pub use wizard_vm::{WizardStep, WizardVm};
