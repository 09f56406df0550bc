use dioxus::prelude::*;
use tracing::warn;

use fiend_core::model::{MonsterInfo, UserId};

use crate::context::AppContext;
use crate::views::{
    GuardFailure, RibbonBar, RibbonPage, ViewError, ViewState, use_protected_route,
};
use crate::vm::map_monster;

#[component]
pub fn MonsterView() -> Element {
    let guard = use_protected_route();

    rsx! {
        match guard.state {
            ViewState::Idle | ViewState::Loading => rsx! {
                div { class: "page loading", h1 { "Loading..." } }
            },
            ViewState::Ready(page) => rsx! {
                div { class: "page with-ribbon",
                    RibbonBar { current: RibbonPage::Monster }
                    MonsterPanel { user_id: page.user_id, monster: page.status.monster }
                }
            },
            ViewState::Error(error) => rsx! {
                GuardFailure { error, on_retry: guard.retry }
            },
        }
    }
}

#[component]
fn MonsterPanel(user_id: UserId, monster: Option<MonsterInfo>) -> Element {
    let ctx = use_context::<AppContext>();
    let mut current = use_signal(|| monster.clone());
    let mut error = use_signal(|| None::<ViewError>);
    let mut busy = use_signal(|| false);
    let monsters = ctx.monster();

    let level_up = move |_| {
        if busy() {
            return;
        }
        let monsters = monsters.clone();
        let user_id = user_id.clone();
        busy.set(true);
        spawn(async move {
            match monsters.level_up(&user_id).await {
                Ok(next) => {
                    current.set(Some(next));
                    error.set(None);
                }
                Err(err) => {
                    warn!(error = %err, "level up failed");
                    error.set(Some(ViewError::from(&err)));
                }
            }
            busy.set(false);
        });
    };

    let Some(vm) = current.read().as_ref().map(map_monster) else {
        return rsx! {
            div { class: "monster-page",
                p { class: "monster-info", "Your fiend is still hatching. Check back soon!" }
            }
        };
    };

    rsx! {
        div { class: "monster-page",
            div {
                class: "xp-bar",
                role: "progressbar",
                "aria-valuenow": "{vm.exp}",
                "aria-valuemax": "{vm.exp_cap}",
                div { class: "xp-fill", style: "width: {vm.exp_percent}%" }
            }
            h2 { class: "monster-name", "{vm.name}" }
            p { class: "monster-level", "Level {vm.level} {vm.species} · {vm.exp}/{vm.exp_cap} XP" }
            div { class: "monster-art monster-art-{vm.art_key}", "data-art": "{vm.art_key}" }
            if let Some(err) = error() {
                p { class: "form-error", role: "alert", "{err.message()}" }
            }
            button {
                class: "secondary",
                disabled: busy(),
                onclick: level_up,
                "Level Up"
            }
        }
    }
}
