use crate::package::Package;
use crate::resolver::DependencyResolver;
use crate::{ResolveError, Result};
use futures::future::try_join_all;
use indexmap::IndexMap;
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageNode {
    pub package: Package,
    pub version: Option<String>,
}

/// `from` declares `to` under the name `name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyEdge {
    pub from: PathBuf,
    pub name: String,
    pub to: PathBuf,
}

/// Every package reachable from an entry package, keyed by root in discovery order.
#[derive(Debug, Clone)]
pub struct DependencyGraph {
    root: PathBuf,
    packages: IndexMap<PathBuf, PackageNode>,
    edges: Vec<DependencyEdge>,
}

impl DependencyGraph {
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn entry(&self) -> &Package {
        &self.packages[0].package
    }

    pub fn get(&self, root: &Path) -> Option<&PackageNode> {
        self.packages.get(root)
    }

    pub fn packages(&self) -> impl Iterator<Item = &PackageNode> {
        self.packages.values()
    }

    /// Packages other than the entry.
    pub fn libraries(&self) -> impl Iterator<Item = &PackageNode> {
        self.packages.values().skip(1)
    }

    pub fn edges(&self) -> &[DependencyEdge] {
        &self.edges
    }

    pub fn dependencies_of<'a>(
        &'a self,
        root: &'a Path,
    ) -> impl Iterator<Item = &'a DependencyEdge> + 'a {
        self.edges.iter().filter(move |edge| edge.from == root)
    }

    pub fn version_of(&self, root: &Path) -> Option<&str> {
        self.packages.get(root)?.version.as_deref()
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }
}

/// Resolve everything `entry` depends on, transitively.
///
/// Packages are walked breadth-first and the dependencies of one package are resolved
/// concurrently. A package reached twice is loaded once, so cycles terminate. A dependency that
/// no resolver can locate fails the whole walk.
pub async fn resolve_dependency_graph<R>(entry: Package, resolver: &R) -> Result<DependencyGraph>
where
    R: DependencyResolver + ?Sized,
{
    let root = entry.root().to_path_buf();
    let mut packages = IndexMap::new();
    let mut edges = Vec::new();
    let mut queue = VecDeque::new();

    packages.insert(
        root.clone(),
        PackageNode {
            package: entry,
            version: None,
        },
    );
    queue.push_back(root.clone());

    while let Some(current) = queue.pop_front() {
        let package = packages[&current].package.clone();
        trace!(
            package = package.name(),
            dependencies = package.dependencies().len(),
            "resolving dependencies"
        );

        let package = &package;
        let resolved = try_join_all(package.dependencies().iter().map(
            |(name, dependency)| async move {
                match resolver.resolve_dependency(package, dependency).await? {
                    Some(resolved) => Ok::<_, ResolveError>((name.clone(), resolved)),
                    None => Err(ResolveError::DependencyNotFound {
                        package: package.name().to_string(),
                        dependency: name.clone(),
                    }),
                }
            },
        ))
        .await?;

        for (name, dependency) in resolved {
            let to = dependency.package.root().to_path_buf();
            edges.push(DependencyEdge {
                from: current.clone(),
                name,
                to: to.clone(),
            });

            if !packages.contains_key(&to) {
                packages.insert(
                    to.clone(),
                    PackageNode {
                        package: dependency.package,
                        version: dependency.version,
                    },
                );
                queue.push_back(to);
            }
        }
    }

    debug!(
        packages = packages.len(),
        edges = edges.len(),
        "dependency graph resolved"
    );

    Ok(DependencyGraph {
        root,
        packages,
        edges,
    })
}
