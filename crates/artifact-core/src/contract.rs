use crate::compilation::{ContractCompilation, FunctionEntry, RawDebugMetadata};
use crate::config::GeneratorConfig;
use crate::debug::{encode_debug_symbols, DebugMetadata};
use crate::function::{generate_function_artifact, FunctionArtifact};
use crate::{ArtifactError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashSet;
use tracing::{debug, trace};

pub const CONSTRUCTOR_NAME: &str = "constructor";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractArtifact {
    pub name: String,
    pub functions: Vec<FunctionArtifact>,
    #[serde(default)]
    pub events: Vec<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debug: Option<DebugMetadata>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aztec_nr_version: Option<String>,
}

impl ContractArtifact {
    pub fn get_function(&self, name: &str) -> Option<&FunctionArtifact> {
        self.functions.iter().find(|function| function.name == name)
    }

    pub fn constructor(&self) -> Option<&FunctionArtifact> {
        self.get_function(CONSTRUCTOR_NAME)
    }
}

pub fn generate_contract_artifact(
    compilation: &ContractCompilation,
    aztec_nr_version: Option<&str>,
    config: &GeneratorConfig,
) -> Result<ContractArtifact> {
    let contract = &compilation.contract;
    validate_functions(&contract.name, &contract.functions, config)?;

    if let Some(raw) = &compilation.debug {
        if raw.debug_symbols.len() != contract.functions.len() {
            return Err(ArtifactError::DebugSymbolsMismatch {
                functions: contract.functions.len(),
                symbols: raw.debug_symbols.len(),
            });
        }
    }

    // Artifact order depends on names only, never on compiler emission order.
    let ordered = order_functions(&contract.functions);
    debug!(
        contract = %contract.name,
        functions = ordered.len(),
        "ordered contract functions by name"
    );

    let debug = compilation
        .debug
        .as_ref()
        .map(|raw| realign_debug_metadata(raw, &ordered, config))
        .transpose()?;

    let functions = ordered
        .iter()
        .map(|(_, entry)| generate_function_artifact(entry, &config.verification_key))
        .collect();

    Ok(ContractArtifact {
        name: contract.name.clone(),
        functions,
        events: contract.events.clone(),
        debug,
        aztec_nr_version: aztec_nr_version.map(str::to_string),
    })
}

fn validate_functions(
    contract: &str,
    functions: &[FunctionEntry],
    config: &GeneratorConfig,
) -> Result<()> {
    if !functions.iter().any(|f| f.name == CONSTRUCTOR_NAME) {
        return Err(ArtifactError::MissingConstructor {
            contract: contract.to_string(),
        });
    }

    let limit = config.max_functions();
    if functions.len() > limit {
        return Err(ArtifactError::TooManyFunctions {
            limit,
            found: functions.len(),
        });
    }

    let mut seen = HashSet::with_capacity(functions.len());
    for function in functions {
        if !seen.insert(function.name.as_str()) {
            return Err(ArtifactError::DuplicateFunction(function.name.clone()));
        }
    }

    Ok(())
}

/// Stable byte-wise ordering by name, paired with each function's index in compiler order.
fn order_functions(functions: &[FunctionEntry]) -> Vec<(usize, &FunctionEntry)> {
    let mut ordered: Vec<_> = functions.iter().enumerate().collect();
    ordered.sort_by(|(_, a), (_, b)| a.name.as_bytes().cmp(b.name.as_bytes()));
    ordered
}

fn realign_debug_metadata(
    raw: &RawDebugMetadata,
    ordered: &[(usize, &FunctionEntry)],
    config: &GeneratorConfig,
) -> Result<DebugMetadata> {
    let level = config.compression();

    let debug_symbols = ordered
        .iter()
        .map(|(original_index, entry)| {
            let symbols = raw.debug_symbols.get(*original_index).ok_or(
                ArtifactError::DebugSymbolsMismatch {
                    functions: ordered.len(),
                    symbols: raw.debug_symbols.len(),
                },
            )?;
            trace!(function = %entry.name, original_index, "encoding debug symbols");
            encode_debug_symbols(symbols, level)
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(DebugMetadata {
        debug_symbols,
        file_map: raw.file_map.clone(),
    })
}
