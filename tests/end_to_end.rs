//! The terminal client's board driving a real server over HTTP.

use std::sync::Arc;
use taskboard::api::{ClientError, HttpTaskApi, TaskApi};
use taskboard::db::tasks::TaskStore;
use taskboard::libs::board::TaskBoard;
use taskboard::server::create_router;
use taskboard::server::handlers::AppState;
use tokio::net::TcpListener;

async fn spawn_server() -> HttpTaskApi {
    let store = TaskStore::open(":memory:").unwrap();
    let router = create_router(AppState::new(Arc::new(store)), None);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    HttpTaskApi::new(&format!("http://{}/", address))
}

#[tokio::test(flavor = "multi_thread")]
async fn board_round_trip_through_server() {
    let api = spawn_server().await;
    let mut board = TaskBoard::new();

    board.load(&api).await.unwrap();
    assert!(board.tasks().is_empty());

    for text in ["Buy milk", "Walk dog", "Read book"] {
        board.set_draft(text);
        board.submit(&api).await.unwrap();
    }
    let walk_dog = board.tasks()[1].id;
    board.toggle(&api, walk_dog).await.unwrap();

    let view = board.view();
    assert_eq!(view.pending_count(), 2);
    assert_eq!(view.completed_count(), 1);
    assert_eq!(view.completed[0].task, "Walk dog");

    let read_book = board.tasks()[2].id;
    board.delete(&api, read_book).await.unwrap();

    let mut reloaded = TaskBoard::new();
    reloaded.load(&api).await.unwrap();
    assert_eq!(reloaded.tasks(), board.tasks());
}

#[tokio::test(flavor = "multi_thread")]
async fn server_errors_surface_with_their_message() {
    let api = spawn_server().await;
    assert!(api.base_url().ends_with(|c: char| c.is_ascii_digit()));

    let result = api.create("   ").await;
    match result {
        Err(ClientError::Server { status, message }) => {
            assert_eq!(status, reqwest::StatusCode::BAD_REQUEST);
            assert_eq!(message, "Task text must not be empty");
        }
        other => panic!("expected a server error, got {:?}", other),
    }

    let result = api.set_completion(999, true).await;
    assert!(matches!(result, Err(ClientError::Server { status, .. }) if status == reqwest::StatusCode::NOT_FOUND));
}

#[tokio::test(flavor = "multi_thread")]
async fn failed_delete_leaves_board_unchanged() {
    let api = spawn_server().await;
    let mut board = TaskBoard::new();
    board.set_draft("Only task");
    let task = board.submit(&api).await.unwrap();

    api.delete(task.id).await.unwrap();
    let result = board.delete(&api, task.id).await;

    assert!(matches!(result, Err(ClientError::Server { ref message, .. }) if message == "Task not found"));
    assert_eq!(board.tasks(), &[task]);
}

#[tokio::test]
async fn unreachable_server_is_a_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    drop(listener);

    let api = HttpTaskApi::new(&format!("http://{}", address));
    let mut board = TaskBoard::new();

    let result = board.load(&api).await;
    assert!(matches!(result, Err(ClientError::Transport(_))));
    assert!(board.tasks().is_empty());
}
