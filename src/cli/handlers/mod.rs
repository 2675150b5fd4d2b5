mod execute;
mod init;
mod schema;
mod serve;

pub use execute::{handle_mutate, handle_query};
pub use init::handle_init;
pub use schema::handle_schema;
pub use serve::handle_serve;

use crate::config::BookshelfConfig;
use crate::graphql::{BookshelfSchema, build_schema};
use crate::storage::{MemoryStore, SharedStore};

/// Common context passed to all command handlers
pub struct CommandContext {
    pub config: BookshelfConfig,
    pub store: SharedStore,
}

impl CommandContext {
    /// Context over a store holding the seed data.
    pub fn new(config: BookshelfConfig) -> Self {
        Self {
            config,
            store: MemoryStore::seeded().into_shared(),
        }
    }

    pub fn schema(&self) -> BookshelfSchema {
        build_schema(self.store.clone(), &self.config.schema)
    }
}
