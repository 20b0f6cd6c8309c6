use crate::dependency::{Dependency, DependencyConfig};
use crate::package::Package;
use crate::resolver::DependencyResolver;
use crate::Result;
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::OnceCell;

type CacheKey = (PathBuf, DependencyConfig);

/// Memoizes another resolver per (package root, dependency).
///
/// Concurrent requests for the same key share a single in-flight resolution. Faults are not
/// cached; the next request retries.
pub struct CachedResolver<R> {
    inner: R,
    entries: Mutex<HashMap<CacheKey, Arc<OnceCell<Option<Dependency>>>>>,
}

impl<R: DependencyResolver> CachedResolver<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            entries: Mutex::new(HashMap::new()),
        }
    }

    pub fn inner(&self) -> &R {
        &self.inner
    }

    /// Number of settled entries, including cached absences.
    pub fn cached(&self) -> usize {
        self.entries
            .lock()
            .values()
            .filter(|cell| cell.initialized())
            .count()
    }
}

#[async_trait]
impl<R: DependencyResolver> DependencyResolver for CachedResolver<R> {
    fn name(&self) -> &str {
        self.inner.name()
    }

    async fn resolve_dependency(
        &self,
        package: &Package,
        dependency: &DependencyConfig,
    ) -> Result<Option<Dependency>> {
        let cell = self
            .entries
            .lock()
            .entry((package.root().to_path_buf(), dependency.clone()))
            .or_default()
            .clone();

        let resolved = cell
            .get_or_try_init(|| self.inner.resolve_dependency(package, dependency))
            .await?;

        Ok(resolved.clone())
    }
}
