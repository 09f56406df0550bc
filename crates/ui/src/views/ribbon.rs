use dioxus::prelude::*;
use dioxus_router::use_navigator;
use tracing::warn;

use crate::context::{AppContext, use_session_epoch};
use crate::routes::Route;

/// Pages reachable from the ribbon.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RibbonPage {
    Monster,
    Account,
    WorkoutLog,
    PastWorkouts,
}

impl RibbonPage {
    pub const ALL: [RibbonPage; 4] = [
        RibbonPage::Account,
        RibbonPage::Monster,
        RibbonPage::WorkoutLog,
        RibbonPage::PastWorkouts,
    ];

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            RibbonPage::Monster => "Your Monster",
            RibbonPage::Account => "Your Account Info",
            RibbonPage::WorkoutLog => "Daily Workout Log",
            RibbonPage::PastWorkouts => "Your Past Workouts",
        }
    }

    #[must_use]
    pub fn route(self) -> Route {
        match self {
            RibbonPage::Monster => Route::Monster {},
            RibbonPage::Account => Route::Account {},
            RibbonPage::WorkoutLog => Route::WorkoutLog {},
            RibbonPage::PastWorkouts => Route::PastWorkouts {},
        }
    }

    /// Ribbon targets shown on `self`: every page but the current one.
    pub fn targets(self) -> impl Iterator<Item = RibbonPage> {
        Self::ALL.into_iter().filter(move |page| *page != self)
    }
}

#[component]
pub fn RibbonBar(current: RibbonPage) -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let mut open = use_signal(|| false);
    let epoch = use_session_epoch();
    let session = ctx.session();

    let logout = move |_| {
        let session = session.clone();
        let mut epoch = epoch;
        spawn(async move {
            match session.logout().await {
                Ok(destination) => {
                    epoch.bump();
                    let _ = navigator.replace(Route::from(destination));
                }
                Err(err) => warn!(error = %err, "logout failed"),
            }
        });
    };

    let ribbon_class = if open() { "ribbon open" } else { "ribbon" };

    rsx! {
        div { class: "ribbon-shell",
            button {
                class: "ribbon-toggle",
                "aria-expanded": "{open}",
                onclick: move |_| open.toggle(),
                span { class: "ribbon-toggle-bar" }
            }
            nav { class: "{ribbon_class}",
                if open() {
                    for page in current.targets() {
                        button {
                            key: "{page.title()}",
                            class: "ribbon-link",
                            onclick: move |_| {
                                let _ = navigator.push(page.route());
                            },
                            "{page.title()}"
                        }
                    }
                    button { class: "ribbon-logout", onclick: logout, "Log Out" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ribbon_hides_current_page() {
        let targets: Vec<_> = RibbonPage::Monster.targets().collect();
        assert_eq!(
            targets,
            [
                RibbonPage::Account,
                RibbonPage::WorkoutLog,
                RibbonPage::PastWorkouts
            ]
        );
        assert_eq!(RibbonPage::Account.targets().count(), 3);
    }
}
