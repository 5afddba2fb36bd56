//! Wirework Assets - Resource resolution
//!
//! Turns symbolic paths into concrete instances: structured documents,
//! freshly instantiated prefab nodes, and opaque typed assets. A path is a
//! literal lookup key; a miss is a terminal [`ResourceError::NotFound`],
//! never a placeholder.

mod document;
mod error;
mod loader;
mod prefab;

pub use document::Document;
pub use error::ResourceError;
pub use loader::ResourceLoader;
pub use prefab::{PrefabTemplate, SpawnedPrefab};
