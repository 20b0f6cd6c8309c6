use crate::dependency::{Dependency, DependencyConfig};
use crate::package::Package;
use crate::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// Resolves one declared dependency of a package.
///
/// `Ok(None)` means this resolver cannot locate the dependency; callers may try another resolver.
/// `Err` is a fault (malformed descriptor, failing source) and must not be treated as absence.
#[async_trait]
pub trait DependencyResolver: Send + Sync {
    fn name(&self) -> &str;

    async fn resolve_dependency(
        &self,
        package: &Package,
        dependency: &DependencyConfig,
    ) -> Result<Option<Dependency>>;
}

#[async_trait]
impl<R: DependencyResolver + ?Sized> DependencyResolver for Arc<R> {
    fn name(&self) -> &str {
        (**self).name()
    }

    async fn resolve_dependency(
        &self,
        package: &Package,
        dependency: &DependencyConfig,
    ) -> Result<Option<Dependency>> {
        (**self).resolve_dependency(package, dependency).await
    }
}

#[async_trait]
impl<R: DependencyResolver + ?Sized> DependencyResolver for Box<R> {
    fn name(&self) -> &str {
        (**self).name()
    }

    async fn resolve_dependency(
        &self,
        package: &Package,
        dependency: &DependencyConfig,
    ) -> Result<Option<Dependency>> {
        (**self).resolve_dependency(package, dependency).await
    }
}
