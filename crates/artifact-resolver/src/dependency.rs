use crate::package::Package;
use crate::{ResolveError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Component, Path};

/// A dependency as declared in a manifest's `[dependencies]` table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DependencyConfig {
    Git {
        git: String,
        tag: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        directory: Option<String>,
    },
    Path {
        path: String,
    },
}

impl DependencyConfig {
    pub fn kind(&self) -> &'static str {
        match self {
            DependencyConfig::Git { .. } => "git",
            DependencyConfig::Path { .. } => "path",
        }
    }

    pub fn validate(&self) -> Result<()> {
        match self {
            DependencyConfig::Path { path } => {
                if path.trim().is_empty() {
                    return Err(ResolveError::MalformedDependency(
                        "path dependency with empty path".to_string(),
                    ));
                }
            }
            DependencyConfig::Git {
                git,
                tag,
                directory,
            } => {
                if git.trim().is_empty() {
                    return Err(ResolveError::MalformedDependency(
                        "git dependency with empty url".to_string(),
                    ));
                }
                if !git.starts_with("https://") {
                    return Err(ResolveError::InvalidGitUrl(git.clone()));
                }
                if tag.trim().is_empty() {
                    return Err(ResolveError::MalformedDependency(format!(
                        "git dependency {} without a tag",
                        git
                    )));
                }
                if let Some(directory) = directory {
                    let escapes = Path::new(directory).components().any(|c| {
                        matches!(
                            c,
                            Component::ParentDir | Component::RootDir | Component::Prefix(_)
                        )
                    });
                    if escapes {
                        return Err(ResolveError::MalformedDependency(format!(
                            "directory {} must stay inside the repository",
                            directory
                        )));
                    }
                }
            }
        }
        Ok(())
    }
}

impl fmt::Display for DependencyConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DependencyConfig::Path { path } => write!(f, "path = {:?}", path),
            DependencyConfig::Git {
                git,
                tag,
                directory: None,
            } => write!(f, "git = {:?}, tag = {:?}", git, tag),
            DependencyConfig::Git {
                git,
                tag,
                directory: Some(directory),
            } => write!(
                f,
                "git = {:?}, tag = {:?}, directory = {:?}",
                git, tag, directory
            ),
        }
    }
}

/// A resolved dependency: the loaded package and the version the resolver settled on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dependency {
    pub version: Option<String>,
    pub package: Package,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn git(url: &str, tag: &str, directory: Option<&str>) -> DependencyConfig {
        DependencyConfig::Git {
            git: url.to_string(),
            tag: tag.to_string(),
            directory: directory.map(str::to_string),
        }
    }

    #[test]
    fn test_valid_descriptors() {
        DependencyConfig::Path {
            path: "../lib".to_string(),
        }
        .validate()
        .unwrap();
        git("https://github.com/noir-lang/noir-bignum", "v0.1.0", Some("lib"))
            .validate()
            .unwrap();
    }

    #[test]
    fn test_empty_path() {
        let err = DependencyConfig::Path {
            path: "  ".to_string(),
        }
        .validate()
        .unwrap_err();
        assert!(matches!(err, ResolveError::MalformedDependency(_)));
    }

    #[test]
    fn test_git_requires_https() {
        let err = git("git@github.com:noir-lang/noir.git", "v1", None)
            .validate()
            .unwrap_err();
        assert!(matches!(err, ResolveError::InvalidGitUrl(_)));
    }

    #[test]
    fn test_git_requires_tag() {
        let err = git("https://github.com/a/b", "", None).validate().unwrap_err();
        assert!(matches!(err, ResolveError::MalformedDependency(_)));
    }

    #[test]
    fn test_directory_cannot_escape() {
        for directory in ["../outside", "/abs", "lib/../../x"] {
            let err = git("https://github.com/a/b", "v1", Some(directory))
                .validate()
                .unwrap_err();
            assert!(matches!(err, ResolveError::MalformedDependency(_)));
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(
            git("https://github.com/a/b", "v1", None).to_string(),
            r#"git = "https://github.com/a/b", tag = "v1""#
        );
        assert_eq!(
            DependencyConfig::Path {
                path: "../lib".to_string()
            }
            .to_string(),
            r#"path = "../lib""#
        );
    }
}
