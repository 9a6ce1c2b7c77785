//! Common test utilities for integration tests.
//!
//! Provides a TestContext that owns a temporary storage root on disk.

#![allow(dead_code)]

pub mod fixtures;

use std::fs;
use std::path::Path;

use curriculum_core::{load_curriculum, ComrakRenderer, Curriculum, FsStorage, LoaderConfig};
use tempfile::TempDir;

/// Temporary storage root populated file by file.
pub struct TestContext {
    dir: TempDir,
}

impl TestContext {
    /// Create an empty storage root.
    ///
    /// # Panics
    /// Panics if the temporary directory cannot be created.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file at the storage root.
    pub fn write(&self, name: &str, contents: &str) -> &Self {
        fs::write(self.dir.path().join(name), contents).expect("Failed to write test file");
        self
    }

    /// Create a subdirectory at the storage root.
    pub fn mkdir(&self, name: &str) -> &Self {
        fs::create_dir(self.dir.path().join(name)).expect("Failed to create test dir");
        self
    }

    /// Load with the default configuration and the comrak renderer.
    pub fn load(&self) -> Curriculum {
        self.load_with(&LoaderConfig::default())
    }

    pub fn load_with(&self, config: &LoaderConfig) -> Curriculum {
        let storage = FsStorage::mount(self.path()).expect("Failed to mount test storage");
        load_curriculum(&storage, &ComrakRenderer::new(), config).expect("Failed to load")
    }
}
