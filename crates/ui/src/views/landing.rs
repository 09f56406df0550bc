use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::routes::Route;

#[component]
pub fn LandingView() -> Element {
    let navigator = use_navigator();

    rsx! {
        div { class: "page landing",
            h1 { class: "logo",
                "My Fitness Fiend"
                sup { "TM" }
            }
            button {
                class: "primary",
                onclick: move |_| {
                    let _ = navigator.push(Route::SignIn {});
                },
                "Start Fiending"
            }
        }
    }
}
