use storage::sqlite::SqliteSessionStore;
use storage::{ID_TOKEN_KEY, SessionStore, Storage};

#[tokio::test]
async fn sqlite_store_round_trips_token() {
    let store = SqliteSessionStore::connect("sqlite:file:memdb_token?mode=memory&cache=shared")
        .await
        .expect("connect");
    store.migrate().await.expect("migrate");

    assert_eq!(store.get(ID_TOKEN_KEY).await.unwrap(), None);
    store.set(ID_TOKEN_KEY, "first").await.unwrap();
    store.set(ID_TOKEN_KEY, "second").await.unwrap();
    assert_eq!(
        store.get(ID_TOKEN_KEY).await.unwrap().as_deref(),
        Some("second")
    );
}

#[tokio::test]
async fn sqlite_clear_removes_everything() {
    let store = SqliteSessionStore::connect("sqlite:file:memdb_clear?mode=memory&cache=shared")
        .await
        .expect("connect");
    store.migrate().await.expect("migrate");

    store.set(ID_TOKEN_KEY, "token").await.unwrap();
    store.set("theme", "dark").await.unwrap();
    store.clear().await.unwrap();

    assert_eq!(store.get(ID_TOKEN_KEY).await.unwrap(), None);
    assert_eq!(store.get("theme").await.unwrap(), None);
}

#[tokio::test]
async fn migrations_are_idempotent() {
    let store = SqliteSessionStore::connect("sqlite:file:memdb_migrate?mode=memory&cache=shared")
        .await
        .expect("connect");
    store.migrate().await.expect("first migrate");
    store.migrate().await.expect("second migrate");

    let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM schema_migrations")
        .fetch_one(store.pool())
        .await
        .unwrap();
    assert_eq!(row.0, 1);
}

#[tokio::test]
async fn storage_builder_uses_sqlite() {
    let storage = Storage::sqlite("sqlite:file:memdb_storage?mode=memory&cache=shared")
        .await
        .expect("storage");
    storage.sessions.set(ID_TOKEN_KEY, "t").await.unwrap();
    assert_eq!(
        storage.sessions.get(ID_TOKEN_KEY).await.unwrap().as_deref(),
        Some("t")
    );
}
