use std::fmt::Debug;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, instrument, warn};

// =============================================================================
// 1. THE ABSTRACTION (Entity trait with lifecycle hooks)
// =============================================================================

/// Trait that any domain entity must implement to be held by a [`StoreActor`].
pub trait Entity: Clone + Debug + Send + Sync + 'static {
    /// Entity name used in log fields and not-found messages, e.g. `"Product"`.
    const KIND: &'static str;

    /// Get the ID of the entity
    fn id(&self) -> &str;

    /// Overwrite the ID; called by the store when the record is inserted.
    fn assign_id(&mut self, id: String);

    // --- Lifecycle Hooks ---

    /// Runs right before a new record is appended to the store.
    fn on_create(&mut self) {}

    /// Copy the mutable fields of `incoming` onto the stored record.
    fn on_update(&mut self, incoming: Self);
}

/// How the store picks an identifier for an inserted record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum IdScheme {
    /// Next id is the largest numeric id in the store plus one.
    #[default]
    Sequential,
    /// Keep the caller's id when it is non-blank and unused, else sequential.
    PreserveSupplied,
}

impl IdScheme {
    fn assign<T: Entity>(self, store: &[T], item: &mut T) {
        if self == IdScheme::PreserveSupplied {
            let supplied = item.id();
            if !supplied.trim().is_empty() && !store.iter().any(|s| s.id() == supplied) {
                return;
            }
        }
        item.assign_id(next_sequential_id(store));
    }
}

/// Max numeric id plus one, or `"1"` for an empty store.
///
/// Ids that do not parse as unsigned integers are skipped, so a store holding
/// opaque ids still produces a valid next id.
pub fn next_sequential_id<T: Entity>(store: &[T]) -> String {
    let max = store
        .iter()
        .filter_map(|item| item.id().parse::<u64>().ok())
        .max()
        .unwrap_or(0);
    (max + 1).to_string()
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StoreError {
    #[error("{kind} with ID {id} not found")]
    NotFound { kind: &'static str, id: String },
    #[error("Store actor closed")]
    ActorClosed,
    #[error("Store actor dropped the request")]
    ActorDropped,
}

pub type StoreResult<T> = Result<T, StoreError>;

// =============================================================================
// 2. THE GENERIC MESSAGES
// =============================================================================

pub type Response<T> = oneshot::Sender<StoreResult<T>>;
pub type Predicate<T> = Box<dyn Fn(&T) -> bool + Send + Sync>;

pub enum StoreRequest<T: Entity> {
    Insert {
        item: T,
        respond_to: Response<T>,
    },
    Get {
        id: String,
        respond_to: Response<Option<T>>,
    },
    Find {
        predicate: Predicate<T>,
        respond_to: Response<Option<T>>,
    },
    Filter {
        predicate: Predicate<T>,
        respond_to: Response<Vec<T>>,
    },
    Update {
        item: T,
        respond_to: Response<T>,
    },
    Delete {
        id: String,
        respond_to: Response<bool>,
    },
    Exists {
        id: String,
        respond_to: Response<bool>,
    },
    #[cfg(test)]
    Count { respond_to: Response<usize> },
}

// =============================================================================
// 3. THE GENERIC ACTOR SERVER
// =============================================================================

/// Owns one collection and applies requests to it one at a time.
///
/// Records keep insertion order, so filters return them in the order they
/// were created.
pub struct StoreActor<T: Entity> {
    receiver: mpsc::Receiver<StoreRequest<T>>,
    store: Vec<T>,
    id_scheme: IdScheme,
}

impl<T: Entity> StoreActor<T> {
    pub fn new(buffer_size: usize, id_scheme: IdScheme, seed: Vec<T>) -> (Self, StoreClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: seed,
            id_scheme,
        };
        let client = StoreClient::new(sender);
        (actor, client)
    }

    #[instrument(name = "store_actor", fields(entity = T::KIND), skip(self))]
    pub async fn run(mut self) {
        info!(records = self.store.len(), "Store starting");
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StoreRequest::Insert { item, respond_to } => {
                    let _ = respond_to.send(Ok(self.handle_insert(item)));
                }
                StoreRequest::Get { id, respond_to } => {
                    let item = self.store.iter().find(|item| item.id() == id).cloned();
                    let _ = respond_to.send(Ok(item));
                }
                StoreRequest::Find { predicate, respond_to } => {
                    let item = self.store.iter().find(|item| predicate(item)).cloned();
                    let _ = respond_to.send(Ok(item));
                }
                StoreRequest::Filter { predicate, respond_to } => {
                    let items: Vec<T> = self.store.iter().filter(|item| predicate(item)).cloned().collect();
                    debug!(matched = items.len(), "Filtered records");
                    let _ = respond_to.send(Ok(items));
                }
                StoreRequest::Update { item, respond_to } => {
                    let _ = respond_to.send(self.handle_update(item));
                }
                StoreRequest::Delete { id, respond_to } => {
                    let _ = respond_to.send(Ok(self.handle_delete(&id)));
                }
                StoreRequest::Exists { id, respond_to } => {
                    let exists = self.store.iter().any(|item| item.id() == id);
                    let _ = respond_to.send(Ok(exists));
                }
                #[cfg(test)]
                StoreRequest::Count { respond_to } => {
                    let _ = respond_to.send(Ok(self.store.len()));
                }
            }
        }
        info!("Store stopped");
    }

    fn handle_insert(&mut self, mut item: T) -> T {
        self.id_scheme.assign(&self.store, &mut item);
        item.on_create();
        info!(id = %item.id(), "Record inserted");
        self.store.push(item.clone());
        item
    }

    fn handle_update(&mut self, item: T) -> StoreResult<T> {
        match self.store.iter_mut().find(|stored| stored.id() == item.id()) {
            Some(stored) => {
                stored.on_update(item);
                info!(id = %stored.id(), "Record updated");
                Ok(stored.clone())
            }
            None => {
                warn!(id = %item.id(), "Update target not found");
                Err(StoreError::NotFound {
                    kind: T::KIND,
                    id: item.id().to_string(),
                })
            }
        }
    }

    fn handle_delete(&mut self, id: &str) -> bool {
        match self.store.iter().position(|item| item.id() == id) {
            Some(index) => {
                self.store.remove(index);
                info!(id = %id, "Record deleted");
                true
            }
            None => false,
        }
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

#[derive(Clone)]
pub struct StoreClient<T: Entity> {
    sender: mpsc::Sender<StoreRequest<T>>,
}

impl<T: Entity> StoreClient<T> {
    pub fn new(sender: mpsc::Sender<StoreRequest<T>>) -> Self {
        Self { sender }
    }

    async fn request<R>(&self, build: impl FnOnce(Response<R>) -> StoreRequest<T>) -> StoreResult<R> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| StoreError::ActorClosed)?;
        response.await.map_err(|_| StoreError::ActorDropped)?
    }

    pub async fn insert(&self, item: T) -> StoreResult<T> {
        self.request(|respond_to| StoreRequest::Insert { item, respond_to }).await
    }

    pub async fn get(&self, id: impl Into<String>) -> StoreResult<Option<T>> {
        let id = id.into();
        self.request(|respond_to| StoreRequest::Get { id, respond_to }).await
    }

    pub async fn find(&self, predicate: impl Fn(&T) -> bool + Send + Sync + 'static) -> StoreResult<Option<T>> {
        let predicate: Predicate<T> = Box::new(predicate);
        self.request(|respond_to| StoreRequest::Find { predicate, respond_to }).await
    }

    pub async fn filter(&self, predicate: impl Fn(&T) -> bool + Send + Sync + 'static) -> StoreResult<Vec<T>> {
        let predicate: Predicate<T> = Box::new(predicate);
        self.request(|respond_to| StoreRequest::Filter { predicate, respond_to }).await
    }

    pub async fn update(&self, item: T) -> StoreResult<T> {
        self.request(|respond_to| StoreRequest::Update { item, respond_to }).await
    }

    pub async fn delete(&self, id: impl Into<String>) -> StoreResult<bool> {
        let id = id.into();
        self.request(|respond_to| StoreRequest::Delete { id, respond_to }).await
    }

    pub async fn exists(&self, id: impl Into<String>) -> StoreResult<bool> {
        let id = id.into();
        self.request(|respond_to| StoreRequest::Exists { id, respond_to }).await
    }

    #[cfg(test)]
    pub async fn count(&self) -> StoreResult<usize> {
        self.request(|respond_to| StoreRequest::Count { respond_to }).await
    }
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================
