use dioxus::prelude::*;
use dioxus_router::use_navigator;
use tracing::debug;

use fiend_core::model::UserId;
use fiend_core::{QuizOutcome, QuizWizard};

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{GuardFailure, ViewState, use_quiz_route};
use crate::vm::{QuizIntent, QuizVm, apply_intent};

#[component]
pub fn QuizView() -> Element {
    let guard = use_quiz_route();

    rsx! {
        match guard.state {
            ViewState::Idle | ViewState::Loading => rsx! {
                div { class: "page loading", h1 { "Loading..." } }
            },
            ViewState::Ready(user_id) => rsx! {
                QuizWizardPanel { user_id }
            },
            ViewState::Error(error) => rsx! {
                GuardFailure { error, on_retry: guard.retry }
            },
        }
    }
}

/// Wizard state plus the handles the quiz form fires.
#[derive(Clone, Copy, PartialEq)]
pub struct QuizController {
    pub wizard: Signal<QuizWizard>,
    pub dispatch: Callback<QuizIntent>,
    pub submit: Callback<()>,
}

/// Owns the wizard for `user_id`.
///
/// Submit runs `begin_submit` synchronously, so a second press while the
/// request is out is refused before it reaches the backend.
pub fn use_quiz_controller(user_id: UserId) -> QuizController {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let wizard = use_signal(QuizWizard::new);
    let quiz = ctx.quiz();

    let dispatch = use_callback(move |intent: QuizIntent| {
        let mut wizard = wizard;
        if let Err(err) = apply_intent(&mut wizard.write(), intent) {
            debug!(error = %err, ?intent, "quiz intent refused");
        }
    });

    let submit = use_callback(move |()| {
        let mut wizard = wizard;
        let submission = match wizard.write().begin_submit(&user_id) {
            Ok(submission) => submission,
            Err(err) => {
                debug!(error = %err, "quiz submit refused");
                return;
            }
        };
        let quiz = quiz.clone();
        spawn(async move {
            let result = quiz.send(&submission).await;
            let outcome = wizard.write().finish_submit(result);
            if let Ok(QuizOutcome::Completed(destination)) = outcome {
                let _ = navigator.replace(Route::from(destination));
            }
        });
    });

    QuizController {
        wizard,
        dispatch,
        submit,
    }
}

#[component]
fn QuizWizardPanel(user_id: UserId) -> Element {
    let controller = use_quiz_controller(user_id);
    rsx! { QuizWizardForm { controller } }
}

#[component]
pub fn QuizWizardForm(controller: QuizController) -> Element {
    let QuizController {
        wizard,
        dispatch,
        submit,
    } = controller;
    let vm = QuizVm::from_wizard(&wizard.read());

    rsx! {
        div { class: "page quiz",
            section { class: "quiz-section", "data-step": "{vm.step}",
                p { class: "quiz-prompt", "{vm.prompt}" }
                if let Some(key) = vm.preview_key.clone() {
                    div { class: "monster-art monster-art-{key}", "data-art": "{key}" }
                }
                if !vm.options.is_empty() {
                    div { class: "quiz-options", role: "radiogroup",
                        for option in vm.options.clone() {
                            label {
                                key: "{option.label}",
                                class: if option.selected { "quiz-option selected" } else { "quiz-option" },
                                input {
                                    r#type: "radio",
                                    name: "quiz-{vm.step}",
                                    checked: option.selected,
                                    onchange: move |_| dispatch.call(QuizIntent::Choose(option.choice)),
                                }
                                "{option.label}"
                            }
                        }
                    }
                }
                if let Some(message) = vm.failure {
                    p { class: "form-error", role: "alert", "{message}" }
                }
                div { class: "quiz-controls",
                    if vm.show_previous {
                        button {
                            class: "secondary",
                            onclick: move |_| dispatch.call(QuizIntent::Previous),
                            "Previous"
                        }
                    }
                    if vm.show_next {
                        button {
                            class: "primary",
                            disabled: !vm.next_enabled,
                            onclick: move |_| dispatch.call(QuizIntent::Next),
                            "{vm.next_label}"
                        }
                    }
                    if vm.show_submit {
                        button {
                            class: "primary",
                            disabled: !vm.submit_enabled,
                            onclick: move |_| submit.call(()),
                            "{vm.submit_label}"
                        }
                    }
                }
            }
        }
    }
}
