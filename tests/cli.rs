//! The `taskboard` binary run against a live server, checking what users see.

use std::path::Path;
use std::process::Output;
use std::sync::Arc;
use taskboard::api::{HttpTaskApi, TaskApi};
use taskboard::db::tasks::TaskStore;
use taskboard::server::create_router;
use taskboard::server::handlers::AppState;
use tempfile::TempDir;
use tokio::net::TcpListener;
use tokio::process::Command;

async fn spawn_server() -> String {
    let store = TaskStore::open(":memory:").unwrap();
    let router = create_router(AppState::new(Arc::new(store)), None);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    format!("http://{}", address)
}

/// An address nothing listens on.
async fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    drop(listener);

    format!("http://{}", address)
}

/// Runs the binary with a clean environment rooted at `home`.
async fn taskboard(home: &Path, args: &[&str], envs: &[(&str, &str)]) -> Output {
    let mut command = Command::new(env!("CARGO_BIN_EXE_taskboard"));
    command
        .args(args)
        .current_dir(home)
        .env("HOME", home)
        .env("LOCALAPPDATA", home)
        .env_remove("RUST_LOG")
        .env_remove("TASKBOARD_DEBUG")
        .env_remove("TASKBOARD_API_URL")
        .env_remove("DATABASE_URL");
    for (key, value) in envs {
        command.env(key, value);
    }

    command.output().await.expect("run taskboard")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

fn assert_success(output: &Output) {
    assert!(output.status.success(), "expected success (stderr={})", stderr(output));
}

#[tokio::test(flavor = "multi_thread")]
async fn add_toggle_delete_render_the_board() {
    let api_url = spawn_server().await;
    let home = TempDir::new().unwrap();

    let output = taskboard(home.path(), &["--api-url", api_url.as_str(), "add", "Buy", "milk"], &[]).await;
    assert_success(&output);
    let text = stdout(&output);
    assert!(text.contains("Task 'Buy milk' added"), "stdout={}", text);
    assert!(text.contains("Completed: 0 | Pending: 1 | Total: 1"), "stdout={}", text);

    let output = taskboard(home.path(), &["--api-url", api_url.as_str(), "toggle", "1"], &[]).await;
    assert_success(&output);
    let text = stdout(&output);
    assert!(text.contains("Task 'Buy milk' marked as done"), "stdout={}", text);
    assert!(text.contains("Completed: 1 | Pending: 0 | Total: 1"), "stdout={}", text);

    let output = taskboard(home.path(), &["--api-url", api_url.as_str(), "list"], &[]).await;
    assert_success(&output);
    let text = stdout(&output);
    assert!(text.contains("Buy milk"), "stdout={}", text);
    assert!(text.contains("Completed: 1 | Pending: 0 | Total: 1"), "stdout={}", text);

    let output = taskboard(home.path(), &["--api-url", api_url.as_str(), "toggle", "1"], &[]).await;
    assert_success(&output);
    assert!(stdout(&output).contains("Task 'Buy milk' marked as pending"));

    let output = taskboard(home.path(), &["--api-url", api_url.as_str(), "delete", "1"], &[]).await;
    assert_success(&output);
    let text = stdout(&output);
    assert!(text.contains("Task #1 deleted"), "stdout={}", text);
    assert!(text.contains("No tasks yet"), "stdout={}", text);
    assert!(text.contains("Total: 0"), "stdout={}", text);

    assert!(
        std::fs::read_dir(home.path()).unwrap().next().is_none(),
        "client commands must not create the data directory"
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn api_url_can_come_from_the_environment() {
    let api_url = spawn_server().await;
    let home = TempDir::new().unwrap();

    let output = taskboard(home.path(), &["add", "Walk dog"], &[("TASKBOARD_API_URL", api_url.as_str())]).await;
    assert_success(&output);

    let tasks = HttpTaskApi::new(&api_url).list().await.unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].task, "Walk dog");
}

#[tokio::test(flavor = "multi_thread")]
async fn blank_task_is_reported_and_not_sent() {
    let api_url = spawn_server().await;
    let home = TempDir::new().unwrap();

    let output = taskboard(home.path(), &["--api-url", api_url.as_str(), "add", "   "], &[]).await;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Task text must not be empty"), "stderr={}", stderr(&output));
    assert!(HttpTaskApi::new(&api_url).list().await.unwrap().is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn toggling_an_unknown_task_fails() {
    let api_url = spawn_server().await;
    let home = TempDir::new().unwrap();

    let output = taskboard(home.path(), &["--api-url", api_url.as_str(), "toggle", "999"], &[]).await;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("task 999 is not on the board"), "stderr={}", stderr(&output));
}

#[tokio::test(flavor = "multi_thread")]
async fn unreachable_server_shows_empty_board_and_error() {
    let api_url = unreachable_url().await;
    let home = TempDir::new().unwrap();

    let output = taskboard(home.path(), &["--api-url", api_url.as_str(), "list"], &[]).await;

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("No tasks yet"), "stdout={}", stdout(&output));
    assert!(stderr(&output).contains("Failed to load tasks"), "stderr={}", stderr(&output));
}

#[tokio::test(flavor = "multi_thread")]
async fn errors_still_reach_stderr_with_rust_log_set() {
    let api_url = unreachable_url().await;
    let home = TempDir::new().unwrap();

    let output = taskboard(home.path(), &["--api-url", api_url.as_str(), "list"], &[("RUST_LOG", "info")]).await;

    assert_eq!(output.status.code(), Some(1));
    let errors = stderr(&output);
    assert!(errors.contains("Failed to load tasks"), "stderr={}", errors);
    assert!(errors.contains("Total: 0"), "stderr={}", errors);
}

#[tokio::test(flavor = "multi_thread")]
async fn migrations_status_reports_version() {
    let home = TempDir::new().unwrap();
    let database_url = home.path().join("todos.db").to_string_lossy().into_owned();

    let output = taskboard(home.path(), &["migrations", "status"], &[("DATABASE_URL", database_url.as_str())]).await;
    assert_success(&output);
    let text = stdout(&output);
    assert!(text.contains("Current database version: 0"), "stdout={}", text);
    assert!(text.contains("Database schema needs to be updated"), "stdout={}", text);

    TaskStore::open(&database_url).unwrap().close().unwrap();

    let output = taskboard(home.path(), &["migrations", "status"], &[("DATABASE_URL", database_url.as_str())]).await;
    assert_success(&output);
    let text = stdout(&output);
    assert!(text.contains("Current database version: 3"), "stdout={}", text);
    assert!(text.contains("Database schema is up to date"), "stdout={}", text);
}
