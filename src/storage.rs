//! Persistence adapter - write-through document snapshots to a blob store.
//!
//! The external store is reached through the narrow [`BlobStore`] trait
//! (string keys, string blobs). [`DocumentStore`] converts between the
//! in-memory tagged model and the persisted flat record layout, saves after
//! every mutation, and restores once at startup. A missing or corrupt blob
//! is never fatal: loading falls back to an empty document and logs the
//! reason.

use crate::constants::{DEFAULT_BUTTON_LINK, STORAGE_KEY};
use crate::error::StorageResult;
use crate::types::{CanvasComponent, ComponentKind, ComponentType, ImageSource, Styles};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

/// Key-value blob store boundary.
pub trait BlobStore {
    fn get(&self, key: &str) -> anyhow::Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> anyhow::Result<()>;
}

/// In-memory store, used by tests and as a null store.
#[derive(Default)]
pub struct MemoryStore {
    blobs: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BlobStore for MemoryStore {
    fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        Ok(self.blobs.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
        self.blobs.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// File-backed store: one JSON file per key inside a directory.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Store rooted in the platform data directory.
    pub fn in_data_dir() -> Option<Self> {
        dirs::data_dir().map(|dir| Self::new(dir.join("pagecanvas")))
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl BlobStore for FileStore {
    fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        match std::fs::read_to_string(self.path_for(key)) {
            Ok(blob) => Ok(Some(blob)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
        std::fs::create_dir_all(&self.dir)?;
        // Write to a temp file and rename so readers never observe a
        // partially written blob.
        let mut tmp = tempfile::NamedTempFile::new_in(&self.dir)?;
        tmp.write_all(value.as_bytes())?;
        tmp.persist(self.path_for(key))?;
        Ok(())
    }
}

/// Persisted record shape: one flat object per component, camelCase keys.
/// Transient fields (the upload handle) are never part of it; unknown keys
/// in stored blobs are ignored on load.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredComponent {
    id: u64,
    #[serde(rename = "type")]
    component_type: ComponentType,
    content: String,
    styles: Styles,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    image_source_type: Option<ImageSource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    link: Option<String>,
}

impl StoredComponent {
    fn from_component(component: &CanvasComponent) -> Self {
        Self {
            id: component.id,
            component_type: component.component_type(),
            content: component.content.clone(),
            styles: component.styles.clone(),
            image_source_type: component.image_source(),
            link: component.link().map(str::to_string),
        }
    }

    fn into_component(self) -> CanvasComponent {
        let kind = match self.component_type {
            ComponentType::Heading => ComponentKind::Heading,
            ComponentType::Paragraph => ComponentKind::Paragraph,
            ComponentType::Button => ComponentKind::Button {
                link: self
                    .link
                    .unwrap_or_else(|| DEFAULT_BUTTON_LINK.to_string()),
            },
            // the upload handle is transient and always empty after a load
            ComponentType::Image => ComponentKind::Image {
                source: self.image_source_type.unwrap_or_default(),
                file: None,
            },
        };
        CanvasComponent {
            id: self.id,
            content: self.content,
            styles: self.styles,
            kind,
        }
    }
}

/// Serializes the document into the blob store and restores it at startup.
#[derive(Clone)]
pub struct DocumentStore {
    store: Arc<dyn BlobStore>,
    key: String,
}

impl DocumentStore {
    pub fn new(store: Arc<dyn BlobStore>) -> Self {
        Self::with_key(store, STORAGE_KEY)
    }

    pub fn with_key(store: Arc<dyn BlobStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Restore the persisted components. Missing and malformed blobs both
    /// yield an empty document; the failure is logged, never surfaced.
    pub fn load(&self) -> Vec<CanvasComponent> {
        let blob = match self.store.get(&self.key) {
            Ok(Some(blob)) => blob,
            Ok(None) => {
                tracing::info!("no stored document, starting empty");
                return Vec::new();
            }
            Err(e) => {
                tracing::warn!("failed to read stored document: {e}");
                return Vec::new();
            }
        };
        match serde_json::from_str::<Vec<StoredComponent>>(&blob) {
            Ok(records) => {
                tracing::info!(components = records.len(), "restored document");
                records
                    .into_iter()
                    .map(StoredComponent::into_component)
                    .collect()
            }
            Err(e) => {
                tracing::warn!("stored document is malformed, starting empty: {e}");
                Vec::new()
            }
        }
    }

    /// Serialize `components` and write them through to the store.
    pub fn save(&self, components: &[CanvasComponent]) -> StorageResult<()> {
        let records: Vec<StoredComponent> = components
            .iter()
            .map(StoredComponent::from_component)
            .collect();
        let blob = serde_json::to_string(&records)?;
        self.store.set(&self.key, &blob)?;
        Ok(())
    }
}
