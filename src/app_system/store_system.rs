use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::{error, info};

use super::Config;
use crate::actor_framework::{IdScheme, StoreActor};
use crate::api::AppState;
use crate::notify::{EmailSender, MockEmailSender};
use crate::product_actor::seed_products;
use crate::repository::{InMemoryProductRepository, InMemoryUserRepository};
use crate::services::{ProductService, UserService};
use crate::user_actor::seed_users;

/// Knobs for building a [`StoreSystem`].
#[derive(Debug, Clone)]
pub struct SystemOptions {
    pub channel_capacity: usize,
    pub id_scheme: IdScheme,
    pub seed: bool,
}

impl Default for SystemOptions {
    fn default() -> Self {
        Self {
            channel_capacity: 32,
            id_scheme: IdScheme::Sequential,
            seed: true,
        }
    }
}

impl From<&Config> for SystemOptions {
    fn from(config: &Config) -> Self {
        Self {
            channel_capacity: config.channel_capacity,
            id_scheme: config.id_scheme,
            seed: !config.no_seed,
        }
    }
}

/// Owns the store actors and the services built on top of them.
///
/// Starts one actor per store, wires repositories and services, and
/// handles shutdown.
pub struct StoreSystem {
    pub products: ProductService,
    pub users: UserService,
    handles: Vec<JoinHandle<()>>,
}

impl StoreSystem {
    /// Must be called inside a Tokio runtime.
    pub fn new(options: SystemOptions) -> Self {
        Self::with_email_sender(options, Arc::new(MockEmailSender))
    }

    pub fn with_email_sender(options: SystemOptions, email_sender: Arc<dyn EmailSender>) -> Self {
        // A zero-sized mpsc buffer is not allowed.
        let capacity = options.channel_capacity.max(1);
        let (product_seed, user_seed) = if options.seed {
            (seed_products(), seed_users())
        } else {
            (Vec::new(), Vec::new())
        };

        let (product_actor, product_client) = StoreActor::new(capacity, options.id_scheme, product_seed);
        let product_handle = tokio::spawn(product_actor.run());
        let products = ProductService::new(Arc::new(InMemoryProductRepository::new(product_client)));

        let (user_actor, user_client) = StoreActor::new(capacity, options.id_scheme, user_seed);
        let user_handle = tokio::spawn(user_actor.run());
        let users = UserService::new(Arc::new(InMemoryUserRepository::new(user_client)), email_sender);

        info!(
            capacity,
            id_scheme = ?options.id_scheme,
            seeded = options.seed,
            "Store system started"
        );

        Self {
            products,
            users,
            handles: vec![product_handle, user_handle],
        }
    }

    pub fn app_state(&self) -> AppState {
        AppState {
            products: self.products.clone(),
            users: self.users.clone(),
        }
    }

    /// Drops the services, which closes the store channels once every other
    /// clone (router state included) is gone, then waits for the actors.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        drop(self.products);
        drop(self.users);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Store task failed: {:?}", e);
                return Err(format!("Store task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
