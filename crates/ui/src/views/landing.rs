use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::routes::Route;

/// Static marketing entry point. No data model, no network calls; the only
/// action routes into the onboarding wizard.
#[component]
pub fn LandingView() -> Element {
    let navigator = use_navigator();

    rsx! {
        div { class: "page landing",
            div { class: "hero",
                h1 { "Smart Exam Prep" }
                p { class: "tagline", "Your AI-powered study companion" }
            }

            div { class: "features",
                FeatureCard {
                    title: "AI-Powered Learning",
                    blurb: "Generate personalized lessons from your study materials",
                }
                FeatureCard {
                    title: "Smart Planning",
                    blurb: "Optimized study schedules based on exam date and topics",
                }
                FeatureCard {
                    title: "Track Progress",
                    blurb: "Monitor your learning journey and stay on track",
                }
            }

            button {
                class: "cta",
                r#type: "button",
                onclick: move |_| {
                    navigator.push(Route::Onboarding {});
                },
                "Get Started"
            }
        }
    }
}

#[component]
fn FeatureCard(title: String, blurb: String) -> Element {
    rsx! {
        div { class: "feature-card",
            h3 { "{title}" }
            p { "{blurb}" }
        }
    }
}
