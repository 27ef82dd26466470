use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::views::{DashboardView, LandingView, OnboardingView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", LandingView)] Landing {},
        #[route("/onboarding", OnboardingView)] Onboarding {},
        #[route("/dashboard?:plan_id", DashboardView)] Dashboard { plan_id: Option<u64> },
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            header { class: "topbar",
                Link { class: "brand", to: Route::Landing {}, "Smart Exam Prep" }
                nav {
                    Link { to: Route::Onboarding {}, "Get Started" }
                    Link { to: Route::Dashboard { plan_id: None }, "Dashboard" }
                }
            }
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}
