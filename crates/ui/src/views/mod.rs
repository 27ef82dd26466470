mod dashboard;
mod landing;
mod onboarding;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use dashboard::DashboardView;
pub use landing::LandingView;
pub use onboarding::OnboardingView;
pub use state::{ViewError, ViewState, view_state_from_resource};
