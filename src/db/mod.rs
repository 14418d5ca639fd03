//! Persistence module.
//!
//! Every collection lives as one JSON array, loaded and rewritten whole on
//! each operation. There is no locking between a load and its save.

mod repository;
mod store;

pub use repository::*;
pub use store::*;

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;

use crate::errors::AppError;
use crate::models::Record;

/// The record collections known to the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Users,
    Requests,
    Posts,
}

impl Collection {
    /// File name of the collection inside the data directory.
    pub fn file_name(self) -> &'static str {
        match self {
            Collection::Users => "users.json",
            Collection::Requests => "requests.json",
            Collection::Posts => "posts.json",
        }
    }
}

/// Whole-collection storage.
#[async_trait]
pub trait Store: Send + Sync {
    /// Load every record of `collection`; a collection never saved is empty.
    async fn load(&self, collection: Collection) -> Result<Vec<Record>, AppError>;

    /// Replace the stored `collection` with `records`.
    async fn save(&self, collection: Collection, records: &[Record]) -> Result<(), AppError>;
}

/// Open the JSON-file store rooted at `data_dir`, creating the directory if needed.
pub async fn init_store(data_dir: &Path) -> Result<Arc<dyn Store>, AppError> {
    let store = JsonFileStore::open(data_dir).await?;
    Ok(Arc::new(store))
}
