mod step_one;
mod step_three;
mod step_two;
mod view;

pub(crate) use step_one::StepOne;
pub(crate) use step_three::StepThree;
pub(crate) use step_two::StepTwo;
pub use view::OnboardingView;
