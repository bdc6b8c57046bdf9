//! Executes round trips off the event loop.
//!
//! The event loop sends [`ApiCommand`]s tagged with the activation they were
//! issued under; outcomes come back as [`AppEvent::Api`] carrying the same
//! tag, so the shell can discard responses for screens that are gone.

use std::sync::mpsc::Sender;

use tokio::runtime::Handle;
use tokio::sync::mpsc;

use crate::api::{ApiError, BookClient};
use crate::model::{Book, BookId, NewBook};
use crate::ui::events::AppEvent;

#[derive(Debug, Clone, PartialEq)]
pub enum ApiRequest {
    List,
    Get { id: BookId },
    Create { book: NewBook },
    Update { id: BookId, book: Book },
    Delete { id: BookId },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiCommand {
    pub activation: u64,
    pub request: ApiRequest,
}

#[derive(Debug)]
pub enum ApiOutcome {
    Listed(Result<Vec<Book>, ApiError>),
    Fetched(Result<Book, ApiError>),
    Created(Result<Book, ApiError>),
    Updated(Result<Book, ApiError>),
    Deleted {
        id: BookId,
        result: Result<(), ApiError>,
    },
}

#[derive(Debug)]
pub struct ApiResponse {
    pub activation: u64,
    pub outcome: ApiOutcome,
}

pub type CommandSender = mpsc::UnboundedSender<ApiCommand>;

/// Run one request against the store.
pub async fn execute(client: &BookClient, request: ApiRequest) -> ApiOutcome {
    match request {
        ApiRequest::List => ApiOutcome::Listed(client.list().await),
        ApiRequest::Get { id } => ApiOutcome::Fetched(client.get_by_id(&id).await),
        ApiRequest::Create { book } => ApiOutcome::Created(client.create(&book).await),
        ApiRequest::Update { id, book } => ApiOutcome::Updated(client.update(&id, &book).await),
        ApiRequest::Delete { id } => {
            let result = client.delete(&id).await;
            ApiOutcome::Deleted { id, result }
        }
    }
}

/// Spawn the worker on `handle` and return the command channel.
///
/// Each command runs in its own task, so a slow stale request never delays
/// the fetch of a newer screen.
pub fn spawn_worker(handle: &Handle, client: BookClient, events: Sender<AppEvent>) -> CommandSender {
    let (sender, mut receiver) = mpsc::unbounded_channel::<ApiCommand>();

    handle.spawn(async move {
        while let Some(command) = receiver.recv().await {
            let client = client.clone();
            let events = events.clone();
            tokio::spawn(async move {
                let ApiCommand {
                    activation,
                    request,
                } = command;
                tracing::debug!(activation, request = ?request, "Executing API request");
                let outcome = execute(&client, request).await;
                if events
                    .send(AppEvent::Api(ApiResponse {
                        activation,
                        outcome,
                    }))
                    .is_err()
                {
                    tracing::trace!("API response dropped (event loop gone)");
                }
            });
        }
        tracing::debug!("API worker stopped");
    });

    sender
}
