use crate::dependency::DependencyConfig;
use crate::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageType {
    #[default]
    Bin,
    Lib,
    Contract,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageMetadata {
    pub name: String,
    #[serde(default, rename = "type")]
    pub package_type: PackageType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entry: Option<String>,
    #[serde(default)]
    pub authors: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compiler_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Contents of a `Nargo.toml` manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageConfig {
    pub package: PackageMetadata,
    #[serde(default)]
    pub dependencies: BTreeMap<String, DependencyConfig>,
}

impl PackageConfig {
    pub fn parse(toml_text: &str) -> Result<Self> {
        Ok(toml::from_str::<PackageConfig>(toml_text)?)
    }

    pub fn validate(&self) -> Result<()> {
        self.dependencies
            .values()
            .try_for_each(DependencyConfig::validate)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Package {
    root: PathBuf,
    src_dir: PathBuf,
    config: PackageConfig,
}

impl Package {
    pub fn new(root: impl Into<PathBuf>, config: PackageConfig) -> Self {
        let root = root.into();
        let src_dir = root.join("src");
        Self {
            root,
            src_dir,
            config,
        }
    }

    pub fn from_manifest(root: impl Into<PathBuf>, manifest: &str) -> Result<Self> {
        Ok(Self::new(root, PackageConfig::parse(manifest)?))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn src_dir(&self) -> &Path {
        &self.src_dir
    }

    pub fn config(&self) -> &PackageConfig {
        &self.config
    }

    pub fn name(&self) -> &str {
        &self.config.package.name
    }

    pub fn package_type(&self) -> PackageType {
        self.config.package.package_type
    }

    pub fn dependencies(&self) -> &BTreeMap<String, DependencyConfig> {
        &self.config.dependencies
    }

    pub fn entry_path(&self) -> PathBuf {
        if let Some(entry) = &self.config.package.entry {
            return self.root.join(entry);
        }

        match self.package_type() {
            PackageType::Lib => self.src_dir.join("lib.nr"),
            PackageType::Bin | PackageType::Contract => self.src_dir.join("main.nr"),
        }
    }
}
