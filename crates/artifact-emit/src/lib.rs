/*! Put artifacts on disk and in front of people.
 *
 * Artifacts are consumed by deployment tooling as JSON, but they are also read by whoever has to
 * check what a contract exposes. The writer handles the former, the summary emitter the latter:
 * function types, internal flags and parameters, with address-typed parameters called out.
 */

pub mod config;
pub mod output;
pub mod summary;
pub mod writer;

pub use config::{EmitterConfig, VerbosityLevel};
pub use output::{MarkdownFormatter, OutputFormat, OutputFormatter, OutputStyle, TextFormatter};
pub use summary::{render_summary, SummaryEmitter};
pub use writer::{artifact_to_string, load_artifact, write_artifact, write_artifact_to};
