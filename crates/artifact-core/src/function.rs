use crate::abi::{AbiParameter, AbiType};
use crate::compilation::{FunctionEntry, FunctionType};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionArtifact {
    pub name: String,
    pub function_type: FunctionType,
    pub is_internal: bool,
    pub parameters: Vec<AbiParameter>,
    pub return_types: Vec<AbiType>,
    pub bytecode: String,
    pub verification_key: String,
}

impl FunctionArtifact {
    pub fn address_parameters(&self) -> impl Iterator<Item = &AbiParameter> {
        self.parameters
            .iter()
            .filter(|param| param.param_type.is_address_struct())
    }
}

/// Builds the public view of a compiled function.
///
/// Constrained functions receive a synthesized context parameter in first position, which is
/// dropped. Secret functions repurpose their return value as protocol public inputs, so no return
/// type is exposed for them.
pub fn generate_function_artifact(
    entry: &FunctionEntry,
    verification_key: &str,
) -> FunctionArtifact {
    let function_type = entry.function_type;

    let parameters = match function_type {
        FunctionType::Unconstrained => entry.abi.parameters.clone(),
        FunctionType::Secret | FunctionType::Open => {
            entry.abi.parameters.iter().skip(1).cloned().collect()
        }
    };

    let return_types = match function_type {
        FunctionType::Secret => Vec::new(),
        FunctionType::Open | FunctionType::Unconstrained => {
            entry.abi.return_type.iter().cloned().collect()
        }
    };

    FunctionArtifact {
        name: entry.name.clone(),
        function_type,
        is_internal: entry.is_internal,
        parameters,
        return_types,
        bytecode: entry.bytecode.clone(),
        verification_key: verification_key.to_string(),
    }
}
