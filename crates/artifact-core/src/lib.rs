/*! Turn raw Noir compiler output into stable build artifacts.
 *
 * The compiler emits functions in whatever order its internals happen to produce, with
 * synthesized context parameters and protocol-level return values mixed into the ABI. This crate
 * normalizes that output into contract and program artifacts that external tooling can consume
 * and that stay byte-identical across compilations of the same source.
 */

pub mod abi;
pub mod compilation;
pub mod config;
pub mod contract;
pub mod debug;
pub mod function;
pub mod generator;
pub mod program;

pub use abi::{Abi, AbiField, AbiParameter, AbiType, AbiVisibility, Sign};
pub use compilation::{
    CompilationResult, CompiledContract, CompiledProgram, ContractCompilation, DebugFile,
    DebugFileMap, FunctionEntry, FunctionType, ProgramCompilation, RawDebugMetadata,
};
pub use config::{GeneratorConfig, FUNCTION_TREE_HEIGHT, MOCK_VERIFICATION_KEY};
pub use contract::{generate_contract_artifact, ContractArtifact, CONSTRUCTOR_NAME};
pub use debug::{canonical_json, decode_debug_symbols, encode_debug_symbols, DebugMetadata};
pub use function::{generate_function_artifact, FunctionArtifact};
pub use generator::{generate_artifact, Artifact, ArtifactGenerator};
pub use program::{generate_program_artifact, ProgramArtifact};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArtifactError {
    #[error("Unsupported artifact type")]
    UnsupportedArtifactType,
    #[error("Contract {contract} must have a constructor function")]
    MissingConstructor { contract: String },
    #[error("Contract can only have a maximum of {limit} functions, found {found}")]
    TooManyFunctions { limit: usize, found: usize },
    #[error("Duplicate function name: {0}")]
    DuplicateFunction(String),
    #[error("Debug metadata has {symbols} symbol entries for {functions} functions")]
    DebugSymbolsMismatch { functions: usize, symbols: usize },
    #[error("Debug symbol encoding error: {0}")]
    DebugEncoding(String),
    #[error("Malformed compilation output: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ArtifactError>;

#[cfg(test)]
mod tests;
