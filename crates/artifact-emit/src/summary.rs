use crate::config::EmitterConfig;
use crate::output::{OutputFormat, OutputFormatter};
use anyhow::Result;
use artifact_core::{
    AbiParameter, AbiType, AbiVisibility, Artifact, ContractArtifact, FunctionArtifact,
    ProgramArtifact,
};
use colored::Colorize;
use std::io::Write;

/// Renders what an artifact exposes for a human reader.
pub struct SummaryEmitter {
    config: EmitterConfig,
}

impl SummaryEmitter {
    pub fn new(config: EmitterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EmitterConfig {
        &self.config
    }

    pub fn render(&self, artifact: &Artifact) -> String {
        let formatter = self.config.format.formatter();
        let lines = match artifact {
            Artifact::Contract(contract) => self.contract_lines(contract, formatter.as_ref()),
            Artifact::Program(program) => self.program_lines(program, formatter.as_ref()),
        };
        lines.join("\n")
    }

    pub fn emit<W: Write>(&self, writer: &mut W, artifact: &Artifact) -> Result<()> {
        writeln!(writer, "{}", self.render(artifact))?;
        Ok(())
    }

    fn contract_lines(&self, contract: &ContractArtifact, f: &dyn OutputFormatter) -> Vec<String> {
        let verbosity = self.config.verbosity;
        let mut lines = vec![f.format_section(&format!("Contract {}", contract.name))];

        lines.push(f.format_pair("functions", &contract.functions.len().to_string()));
        if let Some(version) = &contract.aztec_nr_version {
            lines.push(f.format_pair("aztec-nr", version));
        }
        if !contract.events.is_empty() {
            lines.push(f.format_pair("events", &contract.events.len().to_string()));
        }
        if verbosity.should_print_debug() {
            if let Some(debug) = &contract.debug {
                let files = debug
                    .file_map
                    .values()
                    .map(|file| file.path.as_str())
                    .collect::<Vec<_>>()
                    .join(", ");
                lines.push(f.format_pair(
                    "debug",
                    &format!("{} symbol tables, files: {}", debug.debug_symbols.len(), files),
                ));
            }
        }

        lines.push(f.format_section("Functions"));
        let items: Vec<String> = contract
            .functions
            .iter()
            .map(|function| self.describe_function(function, f))
            .collect();
        lines.push(f.format_list(&items));
        lines
    }

    fn program_lines(&self, program: &ProgramArtifact, f: &dyn OutputFormatter) -> Vec<String> {
        let mut lines = vec![f.format_section("Program")];

        lines.push(f.format_pair("hash", &program.hash.to_string()));
        lines.push(f.format_pair("backend", &program.backend));
        if let Some(version) = &program.noir_version {
            lines.push(f.format_pair("noir", version));
        }

        // Layouts without a typed view are shown as the raw ABI.
        let Ok(abi) = program.typed_abi() else {
            lines.push(f.format_section("ABI"));
            lines.push(f.format_block(&format!("{:#}", program.abi), "json"));
            return lines;
        };

        if self.config.verbosity.should_print_parameters() {
            lines.push(f.format_section("Parameters"));
            let items: Vec<String> = abi
                .parameters
                .iter()
                .map(|param| match param.visibility {
                    Some(visibility) => format!(
                        "{} {}",
                        self.describe_parameter(param, f),
                        f.format_flag(visibility_label(visibility))
                    ),
                    None => self.describe_parameter(param, f),
                })
                .collect();
            lines.push(f.format_list(&items));
        }

        let returns = abi
            .return_type
            .as_ref()
            .map(AbiType::to_string)
            .unwrap_or_else(|| "()".to_string());
        lines.push(f.format_pair("returns", &returns));
        lines
    }

    fn describe_function(&self, function: &FunctionArtifact, f: &dyn OutputFormatter) -> String {
        let verbosity = self.config.verbosity;
        let mut line = self.paint_name(&function.name);

        if verbosity.should_print_parameters() {
            let params = function
                .parameters
                .iter()
                .map(|param| self.describe_parameter(param, f))
                .collect::<Vec<_>>()
                .join(", ");
            line.push_str(&format!("({})", params));

            if !function.return_types.is_empty() {
                let returns = function
                    .return_types
                    .iter()
                    .map(AbiType::to_string)
                    .collect::<Vec<_>>()
                    .join(", ");
                line.push_str(&format!(" -> {}", returns));
            }
        }

        line.push(' ');
        line.push_str(&f.format_flag(function.function_type.as_str()));
        if function.is_internal {
            line.push(' ');
            line.push_str(&f.format_flag("internal"));
        }
        if verbosity.should_print_sizes() {
            line.push_str(&format!(" ({} bytes of bytecode)", function.bytecode.len()));
        }
        line
    }

    fn describe_parameter(&self, param: &AbiParameter, f: &dyn OutputFormatter) -> String {
        let mut text = format!("{}: {}", param.name, param.param_type);
        if let Some(flag) = address_flag(&param.param_type) {
            text.push(' ');
            text.push_str(&self.paint_flag(&f.format_flag(flag)));
        }
        text
    }

    fn colorize(&self) -> bool {
        self.config.use_colors && self.config.format == OutputFormat::Text
    }

    fn paint_name(&self, name: &str) -> String {
        if self.colorize() {
            name.bold().to_string()
        } else {
            name.to_string()
        }
    }

    fn paint_flag(&self, flag: &str) -> String {
        if self.colorize() {
            flag.yellow().to_string()
        } else {
            flag.to_string()
        }
    }
}

fn address_flag(abi_type: &AbiType) -> Option<&'static str> {
    if abi_type.is_ethereum_address_struct() {
        Some("ethereum address")
    } else if abi_type.is_aztec_address_struct() {
        Some("aztec address")
    } else {
        None
    }
}

fn visibility_label(visibility: AbiVisibility) -> &'static str {
    match visibility {
        AbiVisibility::Public => "public",
        AbiVisibility::Private => "private",
        AbiVisibility::Databus => "databus",
    }
}

/// Uncolored summary in the given format.
pub fn render_summary(artifact: &Artifact, format: OutputFormat) -> String {
    SummaryEmitter::new(EmitterConfig {
        format,
        ..EmitterConfig::plain()
    })
    .render(artifact)
}
