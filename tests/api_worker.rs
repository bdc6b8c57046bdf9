//! The worker executes commands against a live store and reports back.

mod common;

use bookshelf::api::BookClient;
use bookshelf::model::BookId;
use bookshelf::ui::events::AppEvent;
use bookshelf::ui::worker::{spawn_worker, ApiCommand, ApiOutcome, ApiRequest, ApiResponse};
use common::mock_store::{MockResponse, MockStore};
use common::*;
use std::sync::mpsc;
use std::time::Duration;
use tokio::runtime::Handle;

async fn next_response(events: mpsc::Receiver<AppEvent>) -> (ApiResponse, mpsc::Receiver<AppEvent>) {
    tokio::task::spawn_blocking(move || loop {
        match events.recv_timeout(Duration::from_secs(5)) {
            Ok(AppEvent::Api(response)) => return (response, events),
            Ok(_) => continue,
            Err(err) => panic!("no API response: {err}"),
        }
    })
    .await
    .unwrap()
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn responses_carry_the_activation() {
    let store = MockStore::start_with(vec![book_json(1, "Dune")]).await;
    let client = BookClient::new(&store.base_url()).unwrap();
    let (tx, rx) = mpsc::channel();
    let commands = spawn_worker(&Handle::current(), client, tx);

    commands
        .send(ApiCommand {
            activation: 7,
            request: ApiRequest::List,
        })
        .unwrap();

    let (response, _rx) = next_response(rx).await;
    assert_eq!(response.activation, 7);
    match response.outcome {
        ApiOutcome::Listed(Ok(books)) => assert_eq!(books[0].title, "Dune"),
        other => panic!("unexpected outcome: {other:?}"),
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn slow_request_does_not_block_newer_ones() {
    let store = MockStore::start_with(vec![book_json(1, "Dune")]).await;
    store
        .enqueue_response(MockResponse::json("[]").with_delay(500))
        .await;
    let client = BookClient::new(&store.base_url()).unwrap();
    let (tx, rx) = mpsc::channel();
    let commands = spawn_worker(&Handle::current(), client, tx);

    commands
        .send(ApiCommand {
            activation: 1,
            request: ApiRequest::List,
        })
        .unwrap();
    tokio::time::sleep(Duration::from_millis(50)).await;
    commands
        .send(ApiCommand {
            activation: 2,
            request: ApiRequest::Get {
                id: BookId::Number(1),
            },
        })
        .unwrap();

    let (first, rx) = next_response(rx).await;
    assert_eq!(first.activation, 2);
    assert!(matches!(first.outcome, ApiOutcome::Fetched(Ok(_))));

    let (second, _rx) = next_response(rx).await;
    assert_eq!(second.activation, 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn delete_outcome_names_the_record() {
    let store = MockStore::start().await;
    let client = BookClient::new(&store.base_url()).unwrap();
    let (tx, rx) = mpsc::channel();
    let commands = spawn_worker(&Handle::current(), client, tx);

    commands
        .send(ApiCommand {
            activation: 3,
            request: ApiRequest::Delete {
                id: BookId::Text("missing".into()),
            },
        })
        .unwrap();

    let (response, _rx) = next_response(rx).await;
    match response.outcome {
        ApiOutcome::Deleted { id, result } => {
            assert_eq!(id, BookId::Text("missing".into()));
            assert!(result.unwrap_err().is_transport());
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
}
