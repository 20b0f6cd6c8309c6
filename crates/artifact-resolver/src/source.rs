use crate::Result;
use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Where resolvers read package manifests from.
#[async_trait]
pub trait PackageSource: Send + Sync {
    /// Manifest text of the package rooted at `root`, or `None` when nothing lives there.
    async fn load_manifest(&self, root: &Path) -> Result<Option<String>>;
}

/// Manifests held in memory, keyed by package root.
#[derive(Debug, Default)]
pub struct MemorySource {
    manifests: RwLock<HashMap<PathBuf, String>>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_package(self, root: impl Into<PathBuf>, manifest: impl Into<String>) -> Self {
        self.insert(root, manifest);
        self
    }

    pub fn insert(&self, root: impl Into<PathBuf>, manifest: impl Into<String>) {
        self.manifests.write().insert(root.into(), manifest.into());
    }

    pub fn contains(&self, root: &Path) -> bool {
        self.manifests.read().contains_key(root)
    }

    pub fn len(&self) -> usize {
        self.manifests.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.manifests.read().is_empty()
    }
}

#[async_trait]
impl PackageSource for MemorySource {
    async fn load_manifest(&self, root: &Path) -> Result<Option<String>> {
        Ok(self.manifests.read().get(root).cloned())
    }
}
