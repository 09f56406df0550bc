//! Route guards shared by the gated views.
//!
//! Each guard evaluates once per mount and again whenever the session epoch
//! moves. A redirect decision is applied with `replace` so the guarded page
//! never lands in history. A failed status fetch surfaces as
//! `ViewState::Error` with a retry handle; it never navigates.

use dioxus::prelude::*;
use dioxus_router::use_navigator;
use tracing::debug;

use fiend_core::model::{UserId, UserStatus};
use fiend_core::{Destination, GuestDecision};
use services::{ProtectedRoute, QuizRoute};

use crate::context::{AppContext, use_session_epoch};
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};

/// What a protected page needs once its guard has passed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProtectedPage {
    pub user_id: UserId,
    pub status: UserStatus,
}

/// Guard outcome plus a handle that re-runs the check.
#[derive(Clone)]
pub struct Guarded<T: 'static> {
    pub state: ViewState<T>,
    pub retry: Callback<()>,
}

fn redirect_to(destination: Destination) -> Route {
    debug!(?destination, "guard redirect");
    Route::from(destination)
}

/// Session gate plus onboarding check for content pages.
pub fn use_protected_route() -> Guarded<ProtectedPage> {
    let ctx = use_context::<AppContext>();
    let epoch = use_session_epoch();
    let navigator = use_navigator();
    let session = ctx.session();
    let onboarding = ctx.onboarding();

    let resource = use_resource(move || {
        let session = session.clone();
        let onboarding = onboarding.clone();
        let _ = epoch.get();
        async move {
            let decision = session.gate().await;
            match onboarding.protected_route(decision).await {
                ProtectedRoute::Failed(err) => Err(ViewError::from(&err)),
                route => Ok(route),
            }
        }
    });
    let retry = use_retry(resource);

    use_effect(move || {
        if let Some(Ok(ProtectedRoute::Redirect(destination))) = &*resource.read() {
            let _ = navigator.replace(redirect_to(*destination));
        }
    });

    let state = match view_state_from_resource(&resource) {
        ViewState::Ready(ProtectedRoute::Render { user_id, status }) => {
            ViewState::Ready(ProtectedPage { user_id, status })
        }
        ViewState::Ready(ProtectedRoute::Redirect(_) | ProtectedRoute::Failed(_))
        | ViewState::Loading => ViewState::Loading,
        ViewState::Idle => ViewState::Idle,
        ViewState::Error(err) => ViewState::Error(err),
    };
    Guarded { state, retry }
}

/// Session gate plus the inverse onboarding check for the quiz.
pub fn use_quiz_route() -> Guarded<UserId> {
    let ctx = use_context::<AppContext>();
    let epoch = use_session_epoch();
    let navigator = use_navigator();
    let session = ctx.session();
    let onboarding = ctx.onboarding();

    let resource = use_resource(move || {
        let session = session.clone();
        let onboarding = onboarding.clone();
        let _ = epoch.get();
        async move {
            let decision = session.gate().await;
            match onboarding.quiz_route(decision).await {
                QuizRoute::Failed(err) => Err(ViewError::from(&err)),
                route => Ok(route),
            }
        }
    });
    let retry = use_retry(resource);

    use_effect(move || {
        if let Some(Ok(QuizRoute::Redirect(destination))) = &*resource.read() {
            let _ = navigator.replace(redirect_to(*destination));
        }
    });

    let state = match view_state_from_resource(&resource) {
        ViewState::Ready(QuizRoute::Render { user_id }) => ViewState::Ready(user_id),
        ViewState::Ready(QuizRoute::Redirect(_) | QuizRoute::Failed(_)) | ViewState::Loading => {
            ViewState::Loading
        }
        ViewState::Idle => ViewState::Idle,
        ViewState::Error(err) => ViewState::Error(err),
    };
    Guarded { state, retry }
}

fn use_retry<T: 'static>(resource: Resource<T>) -> Callback<()> {
    use_callback(move |()| {
        let mut resource = resource;
        debug!("guard retry");
        resource.restart();
    })
}

/// Guest pages send viewers with a live session home.
pub fn use_guest_route() {
    let ctx = use_context::<AppContext>();
    let epoch = use_session_epoch();
    let navigator = use_navigator();
    let session = ctx.session();

    let resource = use_resource(move || {
        let session = session.clone();
        let _ = epoch.get();
        async move { session.guest_gate().await }
    });

    use_effect(move || {
        if let Some(GuestDecision::Redirect(destination)) = &*resource.read() {
            let _ = navigator.replace(redirect_to(*destination));
        }
    });
}

/// Message and Retry button for a guard whose status fetch failed.
#[component]
pub fn GuardFailure(error: ViewError, on_retry: Callback<()>) -> Element {
    rsx! {
        div { class: "page guard-failure",
            p { class: "form-error", role: "alert", "{error.message()}" }
            button {
                class: "primary",
                onclick: move |_| on_retry.call(()),
                "Retry"
            }
        }
    }
}
