use std::fmt;

use log::{debug, info};
use tokio::sync::{broadcast, mpsc, oneshot};

use crate::{
    contact::Contact,
    core::store::{ContactStore, StoreError},
    draft::{ContactDraft, ValidationError},
    op::AppliedOp,
    types::ContactId,
    view::query::ViewQuery,
};

use super::events::ContactEvent;

/// Failure reported through [`ContactBookHandle`].
#[derive(Debug)]
pub enum RuntimeError {
    /// The store rejected the mutation.
    Store(StoreError),
    /// The draft failed validation before reaching the store.
    Validation(ValidationError),
    /// The command loop has stopped.
    ChannelClosed,
}

impl fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Store(err) => write!(f, "{err}"),
            Self::Validation(err) => write!(f, "{err}"),
            Self::ChannelClosed => write!(f, "contactbook runtime is not running"),
        }
    }
}

impl std::error::Error for RuntimeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            Self::Validation(err) => Some(err),
            Self::ChannelClosed => None,
        }
    }
}

impl From<StoreError> for RuntimeError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

impl From<ValidationError> for RuntimeError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Runtime channel sizing.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Capacity of the command queue.
    pub command_queue_bound: usize,
    /// Capacity of the event broadcast buffer per subscriber.
    pub event_queue_bound: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            command_queue_bound: 256,
            event_queue_bound: 1024,
        }
    }
}

/// Cloneable handle to a running contact book.
#[derive(Clone)]
pub struct ContactBookHandle {
    cmd_tx: mpsc::Sender<Command>,
    events_tx: broadcast::Sender<ContactEvent>,
}

enum Command {
    Add {
        contact: Contact,
        resp: oneshot::Sender<Result<ContactId, RuntimeError>>,
    },
    ToggleFavorite {
        id: ContactId,
        resp: oneshot::Sender<Option<bool>>,
    },
    Get {
        id: ContactId,
        resp: oneshot::Sender<Option<Contact>>,
    },
    Contacts {
        resp: oneshot::Sender<Vec<Contact>>,
    },
    Visible {
        query: ViewQuery,
        resp: oneshot::Sender<Vec<Contact>>,
    },
    FavoriteCount {
        resp: oneshot::Sender<usize>,
    },
    Shutdown {
        resp: oneshot::Sender<()>,
    },
}

/// Spawns the command loop that owns `store` and returns a handle to it.
///
/// Must be called from within a tokio runtime.
pub fn spawn_contactbook(store: ContactStore, config: RuntimeConfig) -> ContactBookHandle {
    let (cmd_tx, mut cmd_rx) = mpsc::channel::<Command>(config.command_queue_bound.max(1));
    let (events_tx, _) = broadcast::channel::<ContactEvent>(config.event_queue_bound.max(1));

    let events_tx_loop = events_tx.clone();

    tokio::spawn(async move {
        let mut store = store;
        info!("contactbook runtime started with {} contacts", store.len());

        while let Some(cmd) = cmd_rx.recv().await {
            if handle_command(cmd, &mut store, &events_tx_loop) {
                break;
            }
        }

        info!("contactbook runtime stopped at revision {}", store.revision());
    });

    ContactBookHandle { cmd_tx, events_tx }
}

impl ContactBookHandle {
    /// Subscribes to change events from this point on.
    pub fn subscribe(&self) -> broadcast::Receiver<ContactEvent> {
        self.events_tx.subscribe()
    }

    /// Adds an already validated contact.
    pub async fn add(&self, contact: Contact) -> Result<ContactId, RuntimeError> {
        let (tx, rx) = oneshot::channel();
        self.send(Command::Add { contact, resp: tx }).await?;
        rx.await.map_err(|_| RuntimeError::ChannelClosed)?
    }

    /// Validates `draft`, then adds it under a freshly minted id.
    pub async fn add_draft(&self, draft: ContactDraft) -> Result<ContactId, RuntimeError> {
        let contact = draft.into_contact()?;
        self.add(contact).await
    }

    /// Returns the new favorite value, or `None` when `id` is unknown.
    pub async fn toggle_favorite(&self, id: ContactId) -> Result<Option<bool>, RuntimeError> {
        let (tx, rx) = oneshot::channel();
        self.send(Command::ToggleFavorite { id, resp: tx }).await?;
        rx.await.map_err(|_| RuntimeError::ChannelClosed)
    }

    /// Owned copy of the contact with `id`.
    pub async fn get(&self, id: ContactId) -> Result<Option<Contact>, RuntimeError> {
        let (tx, rx) = oneshot::channel();
        self.send(Command::Get { id, resp: tx }).await?;
        rx.await.map_err(|_| RuntimeError::ChannelClosed)
    }

    /// Canonical sequence, most recently added first.
    pub async fn contacts(&self) -> Result<Vec<Contact>, RuntimeError> {
        let (tx, rx) = oneshot::channel();
        self.send(Command::Contacts { resp: tx }).await?;
        rx.await.map_err(|_| RuntimeError::ChannelClosed)
    }

    /// Visible list for `query`.
    pub async fn visible(&self, query: ViewQuery) -> Result<Vec<Contact>, RuntimeError> {
        let (tx, rx) = oneshot::channel();
        self.send(Command::Visible { query, resp: tx }).await?;
        rx.await.map_err(|_| RuntimeError::ChannelClosed)
    }

    /// Number of favorited contacts.
    pub async fn favorite_count(&self) -> Result<usize, RuntimeError> {
        let (tx, rx) = oneshot::channel();
        self.send(Command::FavoriteCount { resp: tx }).await?;
        rx.await.map_err(|_| RuntimeError::ChannelClosed)
    }

    /// Stops the command loop once queued commands ahead of it are served.
    pub async fn shutdown(&self) -> Result<(), RuntimeError> {
        let (tx, rx) = oneshot::channel();
        self.send(Command::Shutdown { resp: tx }).await?;
        rx.await.map_err(|_| RuntimeError::ChannelClosed)
    }

    async fn send(&self, cmd: Command) -> Result<(), RuntimeError> {
        self.cmd_tx
            .send(cmd)
            .await
            .map_err(|_| RuntimeError::ChannelClosed)
    }
}

fn handle_command(
    cmd: Command,
    store: &mut ContactStore,
    events_tx: &broadcast::Sender<ContactEvent>,
) -> bool {
    match cmd {
        Command::Add { contact, resp } => {
            let res = store
                .add(contact)
                .map(|applied| publish(events_tx, applied))
                .map_err(RuntimeError::from);
            let _ = resp.send(res);
        }
        Command::ToggleFavorite { id, resp } => {
            let out = store.toggle_favorite(&id).and_then(|applied| {
                let is_favorite = applied.op.is_favorite();
                publish(events_tx, applied);
                is_favorite
            });
            let _ = resp.send(out);
        }
        Command::Get { id, resp } => {
            let _ = resp.send(store.get_cloned(&id));
        }
        Command::Contacts { resp } => {
            let _ = resp.send(store.contacts_cloned());
        }
        Command::Visible { query, resp } => {
            let _ = resp.send(store.visible(&query));
        }
        Command::FavoriteCount { resp } => {
            let _ = resp.send(store.favorite_count());
        }
        Command::Shutdown { resp } => {
            let _ = resp.send(());
            return true;
        }
    }

    false
}

// No subscribers is fine; the broadcast send error is dropped.
fn publish(events_tx: &broadcast::Sender<ContactEvent>, applied: AppliedOp) -> ContactId {
    let id = applied.op.id().clone();
    debug!("publishing revision {} for {id}", applied.revision);
    let _ = events_tx.send(ContactEvent::from(applied.op));
    id
}
