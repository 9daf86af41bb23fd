//! JSON snapshot files.
//!
//! A snapshot holds everything a migration run reads and writes, in the shape
//! of [`MemoryStore`]:
//!
//! ```json
//! {
//!   "legacyOptions": { "modules": { "aiosp_opengraph_options": { ... } } },
//!   "options": { "social": { ... }, "searchAppearance": { ... } },
//!   "posts": { "12": { "meta": { "_aioseop_title": "..." }, "seo": null } },
//!   "userMeta": [ { "userId": 1, "key": "twitter", "value": "@me" } ],
//!   "notifications": []
//! }
//! ```

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::info;

use crate::error::StoreError;
use crate::store::MemoryStore;

/// Load and validate a snapshot.
pub fn load(path: &Path) -> Result<MemoryStore, StoreError> {
    let raw = fs::read_to_string(path)?;
    let store: MemoryStore = serde_json::from_str(&raw)?;
    store.options.validate()?;
    info!(
        path = %path.display(),
        posts = store.posts.len(),
        user_meta = store.user_meta.len(),
        "loaded snapshot"
    );
    Ok(store)
}

/// Write a snapshot atomically, replacing any existing file.
pub fn save(store: &MemoryStore, path: &Path) -> Result<(), StoreError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)?;
    serde_json::to_writer_pretty(&mut tmp, store)?;
    tmp.write_all(b"\n")?;
    tmp.persist(path).map_err(|e| StoreError::Io(e.error))?;
    info!(path = %path.display(), "saved snapshot");
    Ok(())
}
