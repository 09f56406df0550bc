use dioxus::prelude::*;

use crate::views::{GuardFailure, RibbonBar, RibbonPage, ViewState, use_protected_route};

/// Shared frame for pages that only carry a title for now.
#[component]
fn GatedPlaceholder(page: RibbonPage, blurb: &'static str) -> Element {
    let guard = use_protected_route();

    rsx! {
        match guard.state {
            ViewState::Idle | ViewState::Loading => rsx! {
                div { class: "page loading", h1 { "Loading..." } }
            },
            ViewState::Ready(_) => rsx! {
                div { class: "page with-ribbon",
                    RibbonBar { current: page }
                    div { class: "placeholder",
                        h2 { "{page.title()}" }
                        p { "{blurb}" }
                    }
                }
            },
            ViewState::Error(error) => rsx! {
                GuardFailure { error, on_retry: guard.retry }
            },
        }
    }
}

#[component]
pub fn AccountView() -> Element {
    rsx! {
        GatedPlaceholder { page: RibbonPage::Account, blurb: "Account settings are coming soon." }
    }
}

#[component]
pub fn WorkoutLogView() -> Element {
    rsx! {
        GatedPlaceholder { page: RibbonPage::WorkoutLog, blurb: "Log today's workout here soon." }
    }
}

#[component]
pub fn PastWorkoutsView() -> Element {
    rsx! {
        GatedPlaceholder { page: RibbonPage::PastWorkouts, blurb: "Your workout history will show up here." }
    }
}
