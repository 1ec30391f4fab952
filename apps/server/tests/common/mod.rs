//! Common test utilities for the API integration tests.
//!
//! Unlike a database-backed service, the hub only needs two temp
//! directories: one for content (manifest + tier files) and one for the
//! per-student state blobs. Tests are fully hermetic.

pub mod fixtures;

use std::path::Path;
use std::sync::Arc;

use axum::Router;
use tempfile::TempDir;

use review_core::SrsEngine;
use review_hub_server::content::ContentLibrary;
use review_hub_server::store::FileStore;
use review_hub_server::{router, AppState};

pub struct TestContext {
    content_dir: TempDir,
    state_dir: TempDir,
    app: Router,
}

impl TestContext {
    /// Context with the standard fixture roster and beginner tier data.
    pub fn new() -> Self {
        Self::with_tier_data(&fixtures::beginner_tier())
    }

    /// Context whose beginner tier file holds `tier` verbatim.
    pub fn with_tier_data(tier: &serde_json::Value) -> Self {
        let content_dir = TempDir::new().expect("create content dir");
        std::fs::write(
            content_dir.path().join("manifest.json"),
            fixtures::manifest().to_string(),
        )
        .expect("write manifest");
        std::fs::write(content_dir.path().join("beginner.json"), tier.to_string())
            .expect("write tier data");

        let state_dir = TempDir::new().expect("create state dir");

        let library = ContentLibrary::load(content_dir.path()).expect("load content");
        let store = FileStore::new(state_dir.path().to_path_buf()).expect("create store");
        let state = AppState {
            library: Arc::new(library),
            engine: Arc::new(SrsEngine::new(store)),
        };

        let app = router(state);
        Self {
            content_dir,
            state_dir,
            app,
        }
    }

    pub fn router(&self) -> Router {
        self.app.clone()
    }

    /// Where the per-student blobs live, for corrupt-data tests.
    #[allow(dead_code)]
    pub fn state_path(&self) -> &Path {
        self.state_dir.path()
    }

    #[allow(dead_code)]
    pub fn content_path(&self) -> &Path {
        self.content_dir.path()
    }
}
