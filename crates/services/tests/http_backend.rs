use std::time::Duration;

use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{Value, json};
use tokio::net::TcpListener;

use fiend_core::model::{
    CompletedAnswers, CreateAccountDraft, DaysPerWeek, Equipment, ExperienceLevel, SignInDraft,
    Species, UserId,
};
use fiend_core::QuizSubmission;
use services::{ApiConfig, ApiError, BackendApi, HttpBackend};

async fn login(Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    if body["email"] == "sam@example.com" && body["password"] == "hunter2" {
        (StatusCode::OK, Json(json!({ "token": "issued" })))
    } else {
        (StatusCode::BAD_REQUEST, Json(json!({ "message": "nope" })))
    }
}

async fn create_account(Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    if body["email"] == "taken@example.com" {
        (StatusCode::CONFLICT, Json(json!({})))
    } else {
        (StatusCode::CREATED, Json(json!({ "token": "fresh" })))
    }
}

async fn user_info(headers: HeaderMap) -> (StatusCode, Json<Value>) {
    match headers.get("user_token").and_then(|v| v.to_str().ok()) {
        Some("1") => (
            StatusCode::CREATED,
            Json(json!({
                "name": "Bubbles",
                "species": "aqua",
                "exp": 40,
                "level": 7,
                "has_finished_quiz": 1
            })),
        ),
        Some("2") => (
            StatusCode::CREATED,
            Json(json!({
                "name": null,
                "species": null,
                "exp": null,
                "level": null,
                "has_finished_quiz": false
            })),
        ),
        _ => (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({}))),
    }
}

async fn submit_quiz(Json(body): Json<Value>) -> StatusCode {
    let results = &body["quiz_results"];
    if body["user_id"] == "1"
        && results["species"] == "blob"
        && results["daysPerWeek"] == 5
        && results["availableEquipment"].is_string()
    {
        StatusCode::CREATED
    } else {
        StatusCode::UNPROCESSABLE_ENTITY
    }
}

async fn level_up(headers: HeaderMap) -> (StatusCode, Json<Value>) {
    match headers.get("user_token").and_then(|v| v.to_str().ok()) {
        Some("1") => (
            StatusCode::CREATED,
            Json(json!({ "name": "Goop", "species": "blob", "exp": 0, "level": 16 })),
        ),
        _ => (StatusCode::CONFLICT, Json(json!({}))),
    }
}

async fn slow() -> StatusCode {
    tokio::time::sleep(Duration::from_secs(5)).await;
    StatusCode::OK
}

async fn spawn_server() -> String {
    let app = Router::new()
        .route("/login", post(login))
        .route("/create_account", post(create_account))
        .route("/get_user_info", get(user_info))
        .route("/submit_user_quiz", post(submit_quiz))
        .route("/level_monster_up", get(level_up))
        .route("/slow/login", post(slow));
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

fn backend(base: &str) -> HttpBackend {
    HttpBackend::new(ApiConfig::new(base, Duration::from_secs(2)).unwrap()).unwrap()
}

#[tokio::test]
async fn sign_in_and_create_account_round_trip() {
    let base = spawn_server().await;
    let api = backend(&base);

    let good = SignInDraft {
        email: "sam@example.com".into(),
        password: "hunter2".into(),
    };
    assert_eq!(api.sign_in(&good.validate().unwrap()).await.unwrap(), "issued");

    let bad = SignInDraft {
        email: "sam@example.com".into(),
        password: "wrong".into(),
    };
    assert_eq!(
        api.sign_in(&bad.validate().unwrap()).await,
        Err(ApiError::InvalidCredentials)
    );

    let fresh = CreateAccountDraft {
        username: "sam".into(),
        email: "new@example.com".into(),
        password: "pw".into(),
    };
    assert_eq!(
        api.create_account(&fresh.validate().unwrap()).await.unwrap(),
        "fresh"
    );
    let taken = CreateAccountDraft {
        email: "taken@example.com".into(),
        ..fresh
    };
    assert_eq!(
        api.create_account(&taken.validate().unwrap()).await,
        Err(ApiError::Conflict)
    );
}

#[tokio::test]
async fn user_status_reads_monster_columns() {
    let base = spawn_server().await;
    let api = backend(&base);

    let status = api.user_status(&UserId::new("1").unwrap()).await.unwrap();
    assert!(status.has_finished_quiz);
    let monster = status.monster.unwrap();
    assert_eq!(monster.name(), Some("Bubbles"));
    assert_eq!(monster.species(), Species::Aquatic);
    assert_eq!(monster.level(), 7);
    assert_eq!(monster.stage().asset_key(), "aqua-2");

    let fresh = api.user_status(&UserId::new("2").unwrap()).await.unwrap();
    assert!(fresh.requires_onboarding());
    assert_eq!(fresh.monster, None);

    assert_eq!(
        api.user_status(&UserId::new("3").unwrap()).await,
        Err(ApiError::Server)
    );
}

#[tokio::test]
async fn quiz_payload_uses_backend_field_names() {
    let base = spawn_server().await;
    let api = backend(&base);
    let submission = QuizSubmission {
        user_id: UserId::new("1").unwrap(),
        quiz_results: CompletedAnswers {
            species: Species::Goo,
            experience: ExperienceLevel::Intermediate,
            days_per_week: DaysPerWeek::new(5).unwrap(),
            available_equipment: Equipment::Both,
        },
    };
    api.submit_quiz(&submission).await.unwrap();

    let stranger = QuizSubmission {
        user_id: UserId::new("9").unwrap(),
        ..submission
    };
    assert_eq!(
        api.submit_quiz(&stranger).await,
        Err(ApiError::UnexpectedStatus(422))
    );
}

#[tokio::test]
async fn level_up_decodes_monster_or_conflict() {
    let base = spawn_server().await;
    let api = backend(&base);

    let monster = api.level_up(&UserId::new("1").unwrap()).await.unwrap();
    assert_eq!(monster.level(), 16);
    assert_eq!(monster.stage().asset_key(), "blob-4");
    assert_eq!(
        api.level_up(&UserId::new("2").unwrap()).await,
        Err(ApiError::Conflict)
    );
}

#[tokio::test]
async fn slow_server_times_out() {
    let base = spawn_server().await;
    let api = HttpBackend::new(
        ApiConfig::new(&format!("{base}/slow"), Duration::from_millis(50)).unwrap(),
    )
    .unwrap();
    let draft = SignInDraft {
        email: "sam@example.com".into(),
        password: "hunter2".into(),
    };
    assert_eq!(
        api.sign_in(&draft.validate().unwrap()).await,
        Err(ApiError::TimedOut)
    );
}

#[tokio::test]
async fn unreachable_server_is_transport_error() {
    let api = backend("http://127.0.0.1:9");
    let err = api
        .user_status(&UserId::new("1").unwrap())
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)));
    assert!(err.is_retryable());
}
