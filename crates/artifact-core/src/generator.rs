use crate::compilation::CompilationResult;
use crate::config::GeneratorConfig;
use crate::contract::{generate_contract_artifact, ContractArtifact};
use crate::program::{generate_program_artifact, ProgramArtifact};
use crate::Result;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Artifact {
    Contract(ContractArtifact),
    Program(ProgramArtifact),
}

impl Artifact {
    pub fn as_contract(&self) -> Option<&ContractArtifact> {
        match self {
            Artifact::Contract(contract) => Some(contract),
            Artifact::Program(_) => None,
        }
    }

    pub fn as_program(&self) -> Option<&ProgramArtifact> {
        match self {
            Artifact::Program(program) => Some(program),
            Artifact::Contract(_) => None,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Artifact::Contract(_) => "contract",
            Artifact::Program(_) => "program",
        }
    }
}

// Probed through `Value` so integer-keyed file maps survive; untagged buffering rejects them.
impl<'de> Deserialize<'de> for Artifact {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;

        if value.get("functions").is_some() {
            serde_json::from_value(value)
                .map(Artifact::Contract)
                .map_err(D::Error::custom)
        } else {
            serde_json::from_value(value)
                .map(Artifact::Program)
                .map_err(D::Error::custom)
        }
    }
}

impl From<ContractArtifact> for Artifact {
    fn from(contract: ContractArtifact) -> Self {
        Artifact::Contract(contract)
    }
}

impl From<ProgramArtifact> for Artifact {
    fn from(program: ProgramArtifact) -> Self {
        Artifact::Program(program)
    }
}

/// Entry point for turning compiler output into an artifact.
#[derive(Debug, Clone, Default)]
pub struct ArtifactGenerator {
    config: GeneratorConfig,
}

impl ArtifactGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// `version` becomes `aztecNrVersion` on contracts and `noir_version` on programs.
    pub fn generate(&self, result: &CompilationResult, version: Option<&str>) -> Result<Artifact> {
        match result {
            CompilationResult::Contract(compilation) => {
                debug!(
                    contract = %compilation.contract.name,
                    functions = compilation.contract.functions.len(),
                    "generating contract artifact"
                );
                generate_contract_artifact(compilation, version, &self.config).map(Artifact::from)
            }
            CompilationResult::Program(compilation) => {
                debug!(hash = compilation.program.hash, "generating program artifact");
                Ok(generate_program_artifact(compilation, version).into())
            }
        }
    }

    pub fn generate_from_json(&self, json: &str, version: Option<&str>) -> Result<Artifact> {
        let result = CompilationResult::from_json(json)?;
        self.generate(&result, version)
    }
}

pub fn generate_artifact(result: &CompilationResult) -> Result<Artifact> {
    ArtifactGenerator::default().generate(result, None)
}
