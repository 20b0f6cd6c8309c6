use crate::dependency::{Dependency, DependencyConfig};
use crate::package::Package;
use crate::resolver::DependencyResolver;
use crate::source::PackageSource;
use crate::Result;
use async_trait::async_trait;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

/// Resolves `{ path = "..." }` dependencies relative to the declaring package.
pub struct PathResolver {
    source: Arc<dyn PackageSource>,
}

impl PathResolver {
    pub fn new(source: Arc<dyn PackageSource>) -> Self {
        Self { source }
    }
}

#[async_trait]
impl DependencyResolver for PathResolver {
    fn name(&self) -> &str {
        "path"
    }

    async fn resolve_dependency(
        &self,
        package: &Package,
        dependency: &DependencyConfig,
    ) -> Result<Option<Dependency>> {
        let DependencyConfig::Path { path } = dependency else {
            return Ok(None);
        };
        dependency.validate()?;

        let root = normalize_path(&package.root().join(path));
        let Some(manifest) = self.source.load_manifest(&root).await? else {
            debug!(
                package = package.name(),
                root = %root.display(),
                "no package at dependency path"
            );
            return Ok(None);
        };

        Ok(Some(Dependency {
            version: None,
            package: Package::from_manifest(root, &manifest)?,
        }))
    }
}

/// Lexically resolves `.` and `..` without touching the filesystem.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                let last_is_normal = matches!(
                    normalized.components().next_back(),
                    Some(Component::Normal(_))
                );
                if last_is_normal {
                    normalized.pop();
                } else if !normalized.has_root() {
                    normalized.push(component);
                }
            }
            other => normalized.push(other),
        }
    }
    normalized
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path() {
        assert_eq!(
            normalize_path(Path::new("/work/app/../lib/./math")),
            PathBuf::from("/work/lib/math")
        );
        assert_eq!(
            normalize_path(Path::new("app/../../lib")),
            PathBuf::from("../lib")
        );
        assert_eq!(normalize_path(Path::new("../../lib")), PathBuf::from("../../lib"));
        assert_eq!(normalize_path(Path::new("/../lib")), PathBuf::from("/lib"));
    }
}
