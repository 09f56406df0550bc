use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};

use fiend_core::model::CreateAccountDraft;
use services::AccountAction;

use crate::context::{AppContext, use_session_epoch};
use crate::routes::Route;
use crate::views::use_guest_route;

#[component]
pub fn CreateProfileView() -> Element {
    use_guest_route();
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let epoch = use_session_epoch();
    let mut draft = use_signal(CreateAccountDraft::default);
    let error = use_signal(|| None::<String>);
    let pending = use_signal(|| false);
    let session = ctx.session();

    let submit = use_callback(move |()| {
        let mut error = error;
        let mut pending = pending;
        let mut epoch = epoch;
        if pending() {
            return;
        }
        let session = session.clone();
        let form = draft();
        pending.set(true);
        spawn(async move {
            let result = session.create_account(&form).await;
            pending.set(false);
            match result {
                Ok(destination) => {
                    error.set(None);
                    epoch.bump();
                    let _ = navigator.push(Route::from(destination));
                }
                Err(err) => error.set(Some(err.user_message(AccountAction::CreateAccount))),
            }
        });
    });

    rsx! {
        div {
            class: "page account-form",
            onkeydown: move |evt: KeyboardEvent| {
                if evt.key() == Key::Enter {
                    submit.call(());
                }
            },
            div { class: "form-card",
                h2 { "Create Profile" }
                input {
                    placeholder: "Username",
                    value: "{draft.read().username}",
                    oninput: move |evt| draft.write().username = evt.value(),
                }
                input {
                    r#type: "email",
                    placeholder: "Email",
                    value: "{draft.read().email}",
                    oninput: move |evt| draft.write().email = evt.value(),
                }
                input {
                    r#type: "password",
                    placeholder: "Password",
                    value: "{draft.read().password}",
                    oninput: move |evt| draft.write().password = evt.value(),
                }
                if let Some(message) = error() {
                    p { class: "form-error", role: "alert", "{message}" }
                }
                div { class: "form-actions",
                    Link { class: "form-switch", to: Route::SignIn {},
                        "Already a fiender?"
                        br {}
                        "Sign In"
                    }
                    button {
                        class: "primary",
                        disabled: pending(),
                        onclick: move |_| submit.call(()),
                        "Create"
                    }
                }
            }
        }
    }
}
