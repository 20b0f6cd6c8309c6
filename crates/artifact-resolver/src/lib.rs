/*! Resolve the dependencies a Noir package declares.
 *
 * A manifest only says where a dependency lives: a path next to the package, or a tagged git
 * reference. Resolvers turn those descriptors into loaded packages. Each resolver answers for the
 * descriptors it understands and stays silent otherwise, so they compose into chains that try one
 * strategy after another.
 */

pub mod cache;
pub mod chain;
pub mod dependency;
pub mod git;
pub mod graph;
pub mod package;
pub mod path;
pub mod resolver;
pub mod source;

pub use cache::CachedResolver;
pub use chain::ResolverChain;
pub use dependency::{Dependency, DependencyConfig};
pub use git::{GitReference, GitResolver};
pub use graph::{resolve_dependency_graph, DependencyEdge, DependencyGraph, PackageNode};
pub use package::{Package, PackageConfig, PackageMetadata, PackageType};
pub use path::PathResolver;
pub use resolver::DependencyResolver;
pub use source::{MemorySource, PackageSource};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("Invalid package config: {0}")]
    InvalidConfig(#[from] toml::de::Error),
    #[error("Malformed dependency: {0}")]
    MalformedDependency(String),
    #[error("Invalid git url: {0}")]
    InvalidGitUrl(String),
    #[error("Dependency {dependency} of package {package} could not be resolved")]
    DependencyNotFound { package: String, dependency: String },
    #[error("Package source error: {0}")]
    Source(String),
}

pub type Result<T> = std::result::Result<T, ResolveError>;
