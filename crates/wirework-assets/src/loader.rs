use std::any::{type_name, Any};
use std::collections::HashMap;
use std::sync::Arc;

use tracing::info;

use crate::document::Document;
use crate::error::ResourceError;
use crate::prefab::{PrefabTemplate, SpawnedPrefab};

/// Central resource registry. Resolves symbolic paths to documents, prefab
/// instances, and opaque typed assets.
///
/// The backing store is whatever the embedding host inserts - test setup
/// populates it directly through the `insert_*` methods. Resolution is a
/// literal key lookup: no fuzzy matching, no caching across calls.
pub struct ResourceLoader {
    documents: HashMap<String, Document>,
    templates: HashMap<String, PrefabTemplate>,
    assets: HashMap<String, Arc<dyn Any + Send + Sync>>,
}

impl ResourceLoader {
    pub fn new() -> Self {
        info!("resource loader created");
        Self {
            documents: HashMap::new(),
            templates: HashMap::new(),
            assets: HashMap::new(),
        }
    }

    /// Store a document at a path, replacing any previous one.
    pub fn insert_document(&mut self, path: impl Into<String>, document: Document) {
        self.documents.insert(path.into(), document);
    }

    /// Store a prefab template at a path, replacing any previous one.
    pub fn insert_template(&mut self, path: impl Into<String>, template: PrefabTemplate) {
        self.templates.insert(path.into(), template);
    }

    /// Store an opaque asset at a path, replacing any previous one.
    pub fn insert_asset<T: Send + Sync + 'static>(&mut self, path: impl Into<String>, asset: T) {
        self.assets.insert(path.into(), Arc::new(asset));
    }

    /// Read the structured document at a path.
    pub fn load(&self, path: &str) -> Result<Document, ResourceError> {
        self.documents
            .get(path)
            .cloned()
            .ok_or_else(|| ResourceError::NotFound(path.to_string()))
    }

    /// Instantiate the prefab template at a path into a brand-new node.
    ///
    /// Every call deep-copies the template; two calls on the same path yield
    /// independent nodes. The caller registers the spawned behaviours with
    /// its update scheduler.
    pub fn instantiate(&self, path: &str) -> Result<SpawnedPrefab, ResourceError> {
        self.templates
            .get(path)
            .map(PrefabTemplate::spawn)
            .ok_or_else(|| ResourceError::NotFound(path.to_string()))
    }

    /// Resolve the opaque asset at a path as a `T`.
    ///
    /// Either the full asset is returned or an error; never a partial
    /// handle. An asset of a different type is [`ResourceError::WrongType`].
    pub fn load_asset<T: Send + Sync + 'static>(&self, path: &str) -> Result<Arc<T>, ResourceError> {
        let asset = self
            .assets
            .get(path)
            .cloned()
            .ok_or_else(|| ResourceError::NotFound(path.to_string()))?;
        asset
            .downcast::<T>()
            .map_err(|_| ResourceError::WrongType {
                path: path.to_string(),
                expected: type_name::<T>(),
            })
    }
}

impl Default for ResourceLoader {
    fn default() -> Self {
        Self::new()
    }
}
