use std::time::Duration;

use dioxus::prelude::ReadableExt;

use fiend_core::model::{DaysPerWeek, Equipment, ExperienceLevel, MonsterInfo, Species, UserStatus};
use services::ApiError;
use services::testing::FakeBackend;
use storage::{ID_TOKEN_KEY, SessionStore};

use crate::vm::{QuizChoice, QuizIntent};

use super::test_harness::{ViewKind, live_token, setup_view_harness};

#[tokio::test(flavor = "current_thread")]
async fn landing_view_smoke_renders_call_to_action() {
    let mut harness = setup_view_harness(ViewKind::Landing, None, FakeBackend::new());
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("My Fitness Fiend"), "missing logo in {html}");
    assert!(html.contains("Start Fiending"), "missing button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn sign_in_view_smoke_renders_form_for_guests() {
    let mut harness = setup_view_harness(ViewKind::SignIn, None, FakeBackend::new());
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Sign In"), "missing title in {html}");
    assert!(html.contains("placeholder=\"Email\""), "missing email in {html}");
    assert!(html.contains("Create Account"), "missing switch link in {html}");
    assert_eq!(harness.backend.calls().sign_in, 0);
}

#[tokio::test(flavor = "current_thread")]
async fn create_profile_view_smoke_renders_three_inputs() {
    let mut harness = setup_view_harness(ViewKind::CreateProfile, None, FakeBackend::new());
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Create Profile"), "missing title in {html}");
    assert!(html.contains("placeholder=\"Username\""), "missing username in {html}");
    assert!(html.contains("placeholder=\"Password\""), "missing password in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_starts_on_intro() {
    let mut harness =
        setup_view_harness(ViewKind::Quiz, Some(live_token()), FakeBackend::new());
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Welcome to the first time quiz!"), "missing intro in {html}");
    assert!(html.contains("Take Quiz"), "missing next in {html}");
    assert!(!html.contains("Previous"), "intro has no previous in {html}");
    assert_eq!(harness.backend.calls().user_status, 1);
}

#[tokio::test(flavor = "current_thread")]
async fn monster_view_smoke_renders_monster() {
    let monster = MonsterInfo::new(Some("Bubbles".into()), Species::Aquatic, 40, 5);
    let mut harness = setup_view_harness(
        ViewKind::Monster,
        Some(live_token()),
        FakeBackend::onboarded(monster),
    );
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Bubbles"), "missing name in {html}");
    assert!(html.contains("Level 5"), "missing level in {html}");
    assert!(html.contains("aqua-1"), "missing art key in {html}");
    assert!(html.contains("width: 40%"), "missing exp bar in {html}");
    assert!(html.contains("ribbon-toggle"), "missing ribbon in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn monster_view_smoke_handles_missing_monster() {
    let backend = FakeBackend::new();
    backend.set_status(Ok(UserStatus {
        has_finished_quiz: true,
        monster: None,
    }));
    let mut harness = setup_view_harness(ViewKind::Monster, Some(live_token()), backend);
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("still hatching"), "missing fallback in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn account_view_smoke_renders_placeholder() {
    let monster = MonsterInfo::new(None, Species::Goo, 0, 1);
    let mut harness = setup_view_harness(
        ViewKind::Account,
        Some(live_token()),
        FakeBackend::onboarded(monster),
    );
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Your Account Info"), "missing title in {html}");
    assert!(!html.contains("Loading..."), "guard never resolved in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn monster_view_offers_retry_when_status_fetch_fails() {
    let backend = FakeBackend::new();
    backend.set_status(Err(ApiError::Transport("connection refused".into())));
    let mut harness = setup_view_harness(ViewKind::Monster, Some(live_token()), backend);
    harness.settle().await;
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Unable to connect to server"), "missing message in {html}");
    assert!(html.contains("Retry"), "missing retry in {html}");
    assert!(!html.contains("Loading..."), "stuck loading in {html}");
    assert_eq!(harness.backend.calls().user_status, 1);
    assert_eq!(
        harness.store.get(ID_TOKEN_KEY).await.unwrap(),
        Some(live_token())
    );
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_form_submits_once_and_keeps_answers_on_failure() {
    let backend = FakeBackend::new();
    backend.set_submit_delay(Some(Duration::from_millis(150)));
    backend.set_submit(Err(ApiError::Server));
    let mut harness = setup_view_harness(ViewKind::QuizForm, Some(live_token()), backend);
    harness.settle().await;
    let quiz = harness.quiz();

    let intents = [
        QuizIntent::Next,
        QuizIntent::Choose(QuizChoice::Species(Species::Goo)),
        QuizIntent::Next,
        QuizIntent::Choose(QuizChoice::Experience(ExperienceLevel::Beginner)),
        QuizIntent::Next,
        QuizIntent::Choose(QuizChoice::Days(DaysPerWeek::new(3).unwrap())),
        QuizIntent::Next,
        QuizIntent::Choose(QuizChoice::Equipment(Equipment::Both)),
    ];
    harness.dom.in_runtime(|| {
        for intent in intents {
            quiz.dispatch.call(intent);
        }
    });
    harness.drive();
    let html = harness.render();
    assert!(html.contains("data-step=\"equipment\""), "not on equipment in {html}");

    harness.dom.in_runtime(|| {
        quiz.submit.call(());
        quiz.submit.call(());
    });
    harness.drive();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Submitting..."), "missing in-flight label in {html}");
    assert_eq!(harness.backend.calls().submit_quiz, 1);

    tokio::time::sleep(Duration::from_millis(200)).await;
    for _ in 0..3 {
        harness.drive_async().await;
    }
    let html = harness.render();
    assert_eq!(harness.backend.calls().submit_quiz, 1);
    assert!(html.contains("data-step=\"equipment\""), "left equipment in {html}");
    assert!(
        html.contains("save your answers. Please try again."),
        "missing retry message in {html}"
    );
    assert!(html.contains(">Submit<"), "submit not re-enabled in {html}");
    let answers = *quiz.wizard.peek().answers();
    assert_eq!(answers.equipment, Some(Equipment::Both));
    assert_eq!(answers.species, Some(Species::Goo));
}
