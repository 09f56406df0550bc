use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use fiend_core::model::UserId;
use fiend_core::time::{FIXED_TEST_TIMESTAMP_MS, fixed_clock};
use fiend_core::token::unsigned_token;
use services::testing::FakeBackend;
use services::{AppServices, BackendApi};
use storage::{InMemorySessionStore, Storage};

use crate::context::{UiApp, build_app_context, use_session_epoch_provider};
use crate::views::{
    AccountView, CreateProfileView, LandingView, MonsterView, QuizView, SignInView,
};

use super::quiz::{QuizController, QuizWizardForm, use_quiz_controller};

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Landing,
    SignIn,
    CreateProfile,
    Quiz,
    Monster,
    Account,
    /// The quiz form alone, with its controller exposed to the test.
    QuizForm,
}

/// Handles registered by the hosted quiz form on its first render.
#[derive(Clone, Default)]
pub struct QuizHandles(Rc<RefCell<Option<QuizController>>>);

impl QuizHandles {
    pub fn controller(&self) -> QuizController {
        (*self.0.borrow()).expect("quiz form rendered")
    }
}

/// Token that stays valid for twenty minutes past the fixed test clock.
pub fn live_token() -> String {
    unsigned_token(FIXED_TEST_TIMESTAMP_MS / 1000 + 1200, "42")
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<AppServices>,
    view: ViewKind,
    quiz: QuizHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(app));
    use_context_provider(|| props.view);
    use_context_provider(|| props.quiz.clone());
    use_session_epoch_provider();
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Landing => rsx! { LandingView {} },
        ViewKind::SignIn => rsx! { SignInView {} },
        ViewKind::CreateProfile => rsx! { CreateProfileView {} },
        ViewKind::Quiz => rsx! { QuizView {} },
        ViewKind::Monster => rsx! { MonsterView {} },
        ViewKind::Account => rsx! { AccountView {} },
        ViewKind::QuizForm => rsx! { HostedQuizForm {} },
    }
}

#[component]
fn HostedQuizForm() -> Element {
    let handles = use_context::<QuizHandles>();
    let user_id = UserId::new("42").expect("valid id");
    let controller = use_quiz_controller(user_id);
    let mut registered = use_signal(|| false);
    if !registered() {
        registered.set(true);
        *handles.0.borrow_mut() = Some(controller);
    }
    rsx! { QuizWizardForm { controller } }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub backend: Arc<FakeBackend>,
    pub store: InMemorySessionStore,
    quiz: QuizHandles,
}

impl ViewHarness {
    pub fn quiz(&self) -> QuizController {
        self.quiz.controller()
    }

    pub fn drive(&mut self) {
        drive_dom(&mut self.dom);
    }

    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(Duration::from_millis(50), self.dom.wait_for_work()).await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Rebuild and let pending resources settle.
    pub async fn settle(&mut self) {
        self.rebuild();
        for _ in 0..4 {
            self.drive_async().await;
        }
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(
    view: ViewKind,
    token: Option<String>,
    backend: FakeBackend,
) -> ViewHarness {
    let store = token.map_or_else(InMemorySessionStore::new, InMemorySessionStore::with_token);
    let storage = Storage {
        sessions: Arc::new(store.clone()),
    };
    let backend = Arc::new(backend);
    let api: Arc<dyn BackendApi> = backend.clone();
    let app = Arc::new(AppServices::new(
        &storage,
        api,
        fixed_clock(),
        Duration::from_secs(1),
    ));

    let quiz = QuizHandles::default();
    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            view,
            quiz: quiz.clone(),
        },
    );

    ViewHarness {
        dom,
        backend,
        store,
        quiz,
    }
}
