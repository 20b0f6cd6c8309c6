use crate::abi::Abi;
use crate::compilation::ProgramCompilation;
use crate::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A program artifact. The ABI is carried exactly as the compiler wrote it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgramArtifact {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub noir_version: Option<String>,
    pub hash: u64,
    pub backend: String,
    pub abi: Value,
}

impl ProgramArtifact {
    /// Typed view of the ABI. Fails for layouts this crate does not model.
    pub fn typed_abi(&self) -> Result<Abi> {
        Ok(serde_json::from_value(self.abi.clone())?)
    }
}

pub fn generate_program_artifact(
    compilation: &ProgramCompilation,
    noir_version: Option<&str>,
) -> ProgramArtifact {
    let program = &compilation.program;

    ProgramArtifact {
        noir_version: noir_version.map(str::to_string),
        hash: program.hash,
        backend: program.backend.clone(),
        abi: program.abi.clone(),
    }
}
