//! API worker runtime.
//!
//! The UI task never performs HTTP itself. It sends [`ApiCommand`]s through
//! a [`CoreHandle`] and receives [`ApiEvent`]s back on a channel, keeping
//! the render loop free of network stalls.

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::{AbortHandle, JoinHandle};

use crate::api::BookstoreApi;
use crate::config::CoreConfig;
use crate::error::ApiError;
use crate::events::ApiEvent;
use crate::models::BookDraft;

/// Requests the UI task sends to the API worker.
#[derive(Debug)]
pub enum ApiCommand {
    /// Load the full collection for a fresh books-view mount. Supersedes
    /// any load or prefill fetch still in flight.
    LoadBooks { generation: u64 },
    /// Fetch one record to prefill the edit form. Tracked like a load, so
    /// the next mount cancels it.
    FetchBook { id: i64 },
    /// Abort the in-flight load without starting another. Sent when the
    /// books view is torn down with nothing replacing it.
    CancelLoad,
    CreateBook { draft: BookDraft },
    UpdateBook { id: i64, draft: BookDraft },
    /// Deletes run to completion even if the operator navigates away.
    DeleteBook { id: i64 },
    Shutdown,
}

#[derive(Clone)]
pub struct CoreHandle {
    command_tx: UnboundedSender<ApiCommand>,
}

impl CoreHandle {
    pub fn send(
        &self,
        command: ApiCommand,
    ) -> Result<(), mpsc::error::SendError<ApiCommand>> {
        self.command_tx.send(command)
    }
}

/// An unwired command channel: the handle the UI holds, and the receiver a
/// worker (or a test inspecting the traffic) consumes.
pub fn command_channel() -> (CoreHandle, UnboundedReceiver<ApiCommand>) {
    let (command_tx, command_rx) = mpsc::unbounded_channel();
    (CoreHandle { command_tx }, command_rx)
}

pub struct CoreRuntime {
    handle: CoreHandle,
    event_rx: Option<UnboundedReceiver<ApiEvent>>,
    worker_handle: Option<JoinHandle<()>>,
}

impl CoreRuntime {
    pub fn new(config: &CoreConfig) -> Result<Self, ApiError> {
        let api = BookstoreApi::new(config.api_url.clone())?;
        Ok(Self::with_api(api))
    }

    /// Wire a runtime around an existing client. Tests use this to point
    /// the worker at a local server.
    pub fn with_api(api: BookstoreApi) -> Self {
        let (handle, command_rx) = command_channel();
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let worker = ApiWorker::new(api, event_tx);
        let worker_handle = tokio::spawn(worker.run(command_rx));
        Self {
            handle,
            event_rx: Some(event_rx),
            worker_handle: Some(worker_handle),
        }
    }

    pub fn handle(&self) -> CoreHandle {
        self.handle.clone()
    }

    /// The UI task takes the event stream exactly once.
    pub fn take_event_rx(&mut self) -> Option<UnboundedReceiver<ApiEvent>> {
        self.event_rx.take()
    }

    pub async fn shutdown(&mut self) {
        let _ = self.handle.send(ApiCommand::Shutdown);
        if let Some(worker_handle) = self.worker_handle.take() {
            let _ = worker_handle.await;
        }
    }
}

struct ApiWorker {
    api: BookstoreApi,
    event_tx: UnboundedSender<ApiEvent>,
    /// The in-flight load or prefill fetch, if any. Replaced by the next
    /// load, aborted on cancel.
    active_load: Option<AbortHandle>,
}

impl ApiWorker {
    fn new(api: BookstoreApi, event_tx: UnboundedSender<ApiEvent>) -> Self {
        Self {
            api,
            event_tx,
            active_load: None,
        }
    }

    async fn run(mut self, mut command_rx: UnboundedReceiver<ApiCommand>) {
        while let Some(command) = command_rx.recv().await {
            tracing::debug!(?command, "api command");
            match command {
                ApiCommand::LoadBooks { generation } => self.start_load(generation),
                ApiCommand::FetchBook { id } => self.start_fetch(id),
                ApiCommand::CancelLoad => self.cancel_load(),
                ApiCommand::CreateBook { draft } => self.start_create(draft),
                ApiCommand::UpdateBook { id, draft } => self.start_update(id, draft),
                ApiCommand::DeleteBook { id } => self.start_delete(id),
                ApiCommand::Shutdown => break,
            }
        }
        self.cancel_load();
    }

    fn start_load(&mut self, generation: u64) {
        self.cancel_load();
        let api = self.api.clone();
        let event_tx = self.event_tx.clone();
        let task = tokio::spawn(async move {
            let result = api.list_books().await;
            let _ = event_tx.send(ApiEvent::BooksLoaded { generation, result });
        });
        self.active_load = Some(task.abort_handle());
    }

    fn start_fetch(&mut self, id: i64) {
        self.cancel_load();
        let api = self.api.clone();
        let event_tx = self.event_tx.clone();
        let task = tokio::spawn(async move {
            let result = api.fetch_book(id).await;
            let _ = event_tx.send(ApiEvent::BookFetched { id, result });
        });
        self.active_load = Some(task.abort_handle());
    }

    fn cancel_load(&mut self) {
        if let Some(active) = self.active_load.take() {
            active.abort();
        }
    }

    fn start_create(&self, draft: BookDraft) {
        let api = self.api.clone();
        let event_tx = self.event_tx.clone();
        tokio::spawn(async move {
            let result = api.create_book(&draft).await;
            let _ = event_tx.send(ApiEvent::BookCreated { result });
        });
    }

    fn start_update(&self, id: i64, draft: BookDraft) {
        let api = self.api.clone();
        let event_tx = self.event_tx.clone();
        tokio::spawn(async move {
            let result = api.update_book(id, &draft).await;
            let _ = event_tx.send(ApiEvent::BookUpdated { id, result });
        });
    }

    fn start_delete(&self, id: i64) {
        let api = self.api.clone();
        let event_tx = self.event_tx.clone();
        tokio::spawn(async move {
            let result = api.delete_book(id).await;
            let _ = event_tx.send(ApiEvent::BookDeleted { id, result });
        });
    }
}
