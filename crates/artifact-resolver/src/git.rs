use crate::dependency::{Dependency, DependencyConfig};
use crate::package::Package;
use crate::resolver::DependencyResolver;
use crate::source::PackageSource;
use crate::{ResolveError, Result};
use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::debug;

/// Host, owner and repository parsed from an `https://` git url.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GitReference {
    pub host: String,
    pub owner: String,
    pub repo: String,
}

impl GitReference {
    pub fn parse(url: &str) -> Result<Self> {
        let rest = url
            .strip_prefix("https://")
            .ok_or_else(|| ResolveError::InvalidGitUrl(url.to_string()))?;
        let rest = rest.trim_end_matches('/');
        let rest = rest.strip_suffix(".git").unwrap_or(rest);

        let segments: Vec<_> = rest.split('/').collect();
        match segments.as_slice() {
            [host, owner, repo]
                if !host.is_empty() && !owner.is_empty() && !repo.is_empty() =>
            {
                Ok(Self {
                    host: host.to_string(),
                    owner: owner.to_string(),
                    repo: repo.to_string(),
                })
            }
            _ => Err(ResolveError::InvalidGitUrl(url.to_string())),
        }
    }

    /// `<host>/<owner>/<repo>@<tag>`, relative to a checkout root.
    pub fn checkout_dir(&self, tag: &str) -> PathBuf {
        PathBuf::from(&self.host)
            .join(&self.owner)
            .join(format!("{}@{}", self.repo, tag))
    }
}

/// Resolves `{ git = "...", tag = "..." }` dependencies against checkouts laid out under a root.
pub struct GitResolver {
    source: Arc<dyn PackageSource>,
    checkout_root: PathBuf,
}

impl GitResolver {
    pub fn new(source: Arc<dyn PackageSource>, checkout_root: impl Into<PathBuf>) -> Self {
        Self {
            source,
            checkout_root: checkout_root.into(),
        }
    }

    pub fn package_root(&self, dependency: &DependencyConfig) -> Result<Option<PathBuf>> {
        let DependencyConfig::Git {
            git,
            tag,
            directory,
        } = dependency
        else {
            return Ok(None);
        };
        dependency.validate()?;

        let mut root = self
            .checkout_root
            .join(GitReference::parse(git)?.checkout_dir(tag));
        if let Some(directory) = directory {
            root.push(directory);
        }
        Ok(Some(root))
    }
}

#[async_trait]
impl DependencyResolver for GitResolver {
    fn name(&self) -> &str {
        "git"
    }

    async fn resolve_dependency(
        &self,
        package: &Package,
        dependency: &DependencyConfig,
    ) -> Result<Option<Dependency>> {
        let DependencyConfig::Git { tag, .. } = dependency else {
            return Ok(None);
        };
        let Some(root) = self.package_root(dependency)? else {
            return Ok(None);
        };

        let Some(manifest) = self.source.load_manifest(&root).await? else {
            debug!(package = package.name(), root = %root.display(), "git checkout not available");
            return Ok(None);
        };

        Ok(Some(Dependency {
            version: Some(tag.clone()),
            package: Package::from_manifest(root, &manifest)?,
        }))
    }
}
