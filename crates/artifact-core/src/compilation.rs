use crate::abi::Abi;
use crate::{ArtifactError, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FunctionType {
    Secret,
    Open,
    Unconstrained,
}

impl FunctionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FunctionType::Secret => "secret",
            FunctionType::Open => "open",
            FunctionType::Unconstrained => "unconstrained",
        }
    }
}

impl FromStr for FunctionType {
    type Err = String;

    fn from_str(tag: &str) -> std::result::Result<Self, Self::Err> {
        match tag.to_lowercase().as_str() {
            "secret" => Ok(FunctionType::Secret),
            "open" => Ok(FunctionType::Open),
            "unconstrained" => Ok(FunctionType::Unconstrained),
            _ => Err(format!("Unknown function type: {}", tag)),
        }
    }
}

impl fmt::Display for FunctionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// nargo emits `Secret`/`Open`/`Unconstrained`; artifacts carry the lower-cased tag.
impl<'de> Deserialize<'de> for FunctionType {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let tag = String::deserialize(deserializer)?;
        tag.parse().map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionEntry {
    pub name: String,
    pub function_type: FunctionType,
    pub is_internal: bool,
    pub abi: Abi,
    pub bytecode: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompiledContract {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backend: Option<String>,
    pub functions: Vec<FunctionEntry>,
    #[serde(default)]
    pub events: Vec<Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebugFile {
    pub source: String,
    pub path: String,
}

pub type DebugFileMap = IndexMap<u32, DebugFile>;

/// Debug output as emitted by the compiler: one symbol blob per function, in the
/// compiler's function order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawDebugMetadata {
    pub debug_symbols: Vec<Value>,
    pub file_map: DebugFileMap,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractCompilation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub contract: CompiledContract,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debug: Option<RawDebugMetadata>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompiledProgram {
    pub hash: u64,
    pub backend: String,
    pub abi: Value,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgramCompilation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub program: CompiledProgram,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CompilationResult {
    Contract(ContractCompilation),
    Program(ProgramCompilation),
}

impl CompilationResult {
    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    /// Decides the variant by shape: a `contract` object carrying a function list, or a
    /// `program` object. Anything else is rejected before any field is parsed.
    pub fn from_value(value: Value) -> Result<Self> {
        let Value::Object(map) = &value else {
            return Err(ArtifactError::UnsupportedArtifactType);
        };

        let is_contract = map
            .get("contract")
            .is_some_and(|contract| contract.get("functions").is_some());

        if is_contract {
            Ok(CompilationResult::Contract(serde_json::from_value(value)?))
        } else if map.contains_key("program") {
            Ok(CompilationResult::Program(serde_json::from_value(value)?))
        } else {
            Err(ArtifactError::UnsupportedArtifactType)
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            CompilationResult::Contract(compilation) => Some(&compilation.contract.name),
            CompilationResult::Program(compilation) => compilation.name.as_deref(),
        }
    }
}

impl From<ContractCompilation> for CompilationResult {
    fn from(compilation: ContractCompilation) -> Self {
        CompilationResult::Contract(compilation)
    }
}

impl From<ProgramCompilation> for CompilationResult {
    fn from(compilation: ProgramCompilation) -> Self {
        CompilationResult::Program(compilation)
    }
}
