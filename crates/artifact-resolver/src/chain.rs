use crate::dependency::{Dependency, DependencyConfig};
use crate::package::Package;
use crate::resolver::DependencyResolver;
use crate::Result;
use async_trait::async_trait;
use tracing::{debug, trace};

/// Tries resolvers in insertion order; the first one that locates the dependency wins.
#[derive(Default)]
pub struct ResolverChain {
    resolvers: Vec<Box<dyn DependencyResolver>>,
}

impl ResolverChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_resolver(mut self, resolver: impl DependencyResolver + 'static) -> Self {
        self.push(resolver);
        self
    }

    pub fn push(&mut self, resolver: impl DependencyResolver + 'static) {
        self.resolvers.push(Box::new(resolver));
    }

    pub fn len(&self) -> usize {
        self.resolvers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resolvers.is_empty()
    }
}

#[async_trait]
impl DependencyResolver for ResolverChain {
    fn name(&self) -> &str {
        "chain"
    }

    async fn resolve_dependency(
        &self,
        package: &Package,
        dependency: &DependencyConfig,
    ) -> Result<Option<Dependency>> {
        for resolver in &self.resolvers {
            trace!(resolver = resolver.name(), %dependency, "trying resolver");
            if let Some(resolved) = resolver.resolve_dependency(package, dependency).await? {
                debug!(
                    resolver = resolver.name(),
                    package = package.name(),
                    dependency = resolved.package.name(),
                    version = resolved.version.as_deref(),
                    "resolved dependency"
                );
                return Ok(Some(resolved));
            }
        }

        debug!(package = package.name(), %dependency, "no resolver located dependency");
        Ok(None)
    }
}
