//! Store implementations: JSON files on disk and an in-memory map for tests.

#[cfg(test)]
use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
#[cfg(test)]
use tokio::sync::RwLock;

use super::{Collection, Store};
use crate::errors::AppError;
use crate::models::Record;

/// Read a JSON array of records from `path`.
///
/// A missing file yields an empty collection; malformed contents are a `Parse` error.
pub async fn load_json(path: &Path) -> Result<Vec<Record>, AppError> {
    let bytes = match fs::read(path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e.into()),
    };

    serde_json::from_slice(&bytes).map_err(|e| {
        tracing::error!("Malformed collection file {}: {}", path.display(), e);
        AppError::Parse(format!("Malformed JSON in {}: {}", path.display(), e))
    })
}

/// Overwrite `path` with `records` as a pretty-printed JSON array.
///
/// The write is not atomic: a crash mid-write can leave a truncated file.
pub async fn save_json(path: &Path, records: &[Record]) -> Result<(), AppError> {
    let data = serde_json::to_vec_pretty(records)
        .map_err(|e| AppError::Parse(format!("Failed to serialize records: {}", e)))?;
    fs::write(path, data).await?;
    Ok(())
}

/// Collections stored as `<dir>/users.json`, `<dir>/requests.json`, `<dir>/posts.json`.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Use `dir` as the data directory, creating it if it does not exist.
    pub async fn open(dir: impl Into<PathBuf>) -> Result<Self, AppError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).await?;
        Ok(Self { dir })
    }

    /// Path of the file backing `collection`.
    pub fn path(&self, collection: Collection) -> PathBuf {
        self.dir.join(collection.file_name())
    }
}

#[async_trait]
impl Store for JsonFileStore {
    async fn load(&self, collection: Collection) -> Result<Vec<Record>, AppError> {
        let path = self.path(collection);
        let records = load_json(&path).await?;
        tracing::debug!(?collection, count = records.len(), "loaded collection");
        Ok(records)
    }

    async fn save(&self, collection: Collection, records: &[Record]) -> Result<(), AppError> {
        save_json(&self.path(collection), records).await?;
        tracing::debug!(?collection, count = records.len(), "saved collection");
        Ok(())
    }
}

/// In-memory store with the same whole-collection semantics as [`JsonFileStore`].
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<Collection, Vec<Record>>>,
}

#[cfg(test)]
impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
#[async_trait]
impl Store for MemoryStore {
    async fn load(&self, collection: Collection) -> Result<Vec<Record>, AppError> {
        let collections = self.collections.read().await;
        Ok(collections.get(&collection).cloned().unwrap_or_default())
    }

    async fn save(&self, collection: Collection, records: &[Record]) -> Result<(), AppError> {
        let mut collections = self.collections.write().await;
        collections.insert(collection, records.to_vec());
        Ok(())
    }
}
