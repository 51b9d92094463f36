use crate::config::ServerConfig;
use phonebook::ContactStore;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Shared application state
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Arc<ServerConfig>,

    /// The address book. Writers hold the lock across lookup and mutation.
    pub store: Arc<RwLock<ContactStore>>,
}

impl ServerState {
    /// Create new server state
    pub fn new(config: ServerConfig) -> Self {
        let store = if config.seed_contacts {
            ContactStore::seeded()
        } else {
            ContactStore::new()
        };

        Self::with_store(config, store)
    }

    pub fn with_store(config: ServerConfig, store: ContactStore) -> Self {
        Self {
            config: Arc::new(config),
            store: Arc::new(RwLock::new(store)),
        }
    }
}
