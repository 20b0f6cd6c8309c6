/*! Everything needed to go from compiler output to a deployable artifact.
 *
 * Single import for generating artifacts, writing and summarizing them, and resolving the
 * packages a contract depends on.
 */

pub use artifact_core as core;
pub use artifact_emit as emit;
pub use artifact_resolver as resolver;

pub use artifact_core::{
    abi::{Abi, AbiParameter, AbiType},
    compilation::{CompilationResult, FunctionType},
    config::GeneratorConfig,
    contract::ContractArtifact,
    function::FunctionArtifact,
    generator::{generate_artifact, Artifact, ArtifactGenerator},
    program::ProgramArtifact,
    ArtifactError,
};

pub use artifact_emit::{load_artifact, render_summary, write_artifact, SummaryEmitter};

pub use artifact_resolver::{
    resolve_dependency_graph, DependencyConfig, DependencyResolver, Package, ResolveError,
};
