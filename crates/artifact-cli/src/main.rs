use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "artifact")]
#[command(about = "Assemble deployable build artifacts from Noir compiler output")]
#[command(version = "0.1.0")]
#[command(author = "Gianluca Brigandi <gbrigand@gmail.com>")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Turn a compilation result into an artifact
    Generate {
        input: PathBuf,

        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Recorded as aztecNrVersion on contracts, noir_version on programs
        #[arg(long)]
        version_tag: Option<String>,

        /// JSON generator configuration
        #[arg(long)]
        config: Option<PathBuf>,

        #[arg(long)]
        compact: bool,

        #[arg(short, long)]
        verbose: bool,
    },

    /// Summarize what an artifact exposes
    Inspect {
        input: PathBuf,

        #[arg(long)]
        markdown: bool,
    },

    /// List and validate the dependencies a Nargo.toml declares
    Deps { manifest: PathBuf },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let verbose = matches!(cli.command, Commands::Generate { verbose: true, .. });
    tracing_subscriber::fmt()
        .with_max_level(if verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        })
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Generate {
            input,
            output,
            version_tag,
            config,
            compact,
            verbose,
        } => cmd_generate(input, output, version_tag, config, compact, verbose),
        Commands::Inspect { input, markdown } => cmd_inspect(input, markdown),
        Commands::Deps { manifest } => cmd_deps(manifest),
    }
}

fn cmd_generate(
    input: PathBuf,
    output: Option<PathBuf>,
    version_tag: Option<String>,
    config: Option<PathBuf>,
    compact: bool,
    verbose: bool,
) -> Result<()> {
    use artifact_core::{ArtifactGenerator, GeneratorConfig};
    use artifact_emit::{write_artifact, write_artifact_to, OutputStyle};
    use colored::*;
    use std::fs;
    use std::time::Instant;

    if verbose {
        eprintln!("{}", " Artifact Generator".bright_blue().bold());
        eprintln!("{}", "=".repeat(50).bright_blue());
        eprintln!(" Input: {}", input.display());
        if let Some(ref out) = output {
            eprintln!(" Output: {}", out.display());
        }
        eprintln!();
    }

    let start = Instant::now();

    let config = match config {
        Some(path) => {
            let text = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config {}", path.display()))?;
            serde_json::from_str::<GeneratorConfig>(&text)
                .with_context(|| format!("Invalid generator config {}", path.display()))?
        }
        None => GeneratorConfig::default(),
    };

    let compilation = fs::read_to_string(&input)
        .with_context(|| format!("Failed to read {}", input.display()))?;
    let artifact = ArtifactGenerator::new(config)
        .generate_from_json(&compilation, version_tag.as_deref())
        .with_context(|| format!("Failed to generate artifact from {}", input.display()))?;

    let style = if compact {
        OutputStyle::Compact
    } else {
        OutputStyle::Pretty
    };

    if let Some(output_path) = output {
        write_artifact(&artifact, &output_path, style)?;
        if verbose {
            let elapsed = start.elapsed();
            eprintln!(
                "\n {} Generated {} artifact",
                "SUCCESS:".bright_green().bold(),
                artifact.kind()
            );
            eprintln!("   Time: {:.3}s", elapsed.as_secs_f64());
            eprintln!("   Output: {}", output_path.display());
        }
    } else {
        write_artifact_to(&mut std::io::stdout().lock(), &artifact, style)?;
    }

    Ok(())
}

fn cmd_inspect(input: PathBuf, markdown: bool) -> Result<()> {
    use artifact_emit::{load_artifact, EmitterConfig, OutputFormat, SummaryEmitter};
    use std::io::IsTerminal;

    let artifact = load_artifact(&input)?;

    let config = EmitterConfig {
        use_colors: !markdown && std::io::stdout().is_terminal(),
        format: if markdown {
            OutputFormat::Markdown
        } else {
            OutputFormat::Text
        },
        ..EmitterConfig::default()
    };
    SummaryEmitter::new(config).emit(&mut std::io::stdout().lock(), &artifact)?;

    Ok(())
}

fn cmd_deps(manifest: PathBuf) -> Result<()> {
    use artifact_resolver::Package;
    use colored::*;
    use std::fs;
    use std::path::Path;

    let manifest = if manifest.is_dir() {
        manifest.join("Nargo.toml")
    } else {
        manifest
    };
    let root = manifest.parent().unwrap_or_else(|| Path::new("."));

    let text = fs::read_to_string(&manifest)
        .with_context(|| format!("Failed to read {}", manifest.display()))?;
    let package = Package::from_manifest(root, &text)
        .with_context(|| format!("Failed to parse {}", manifest.display()))?;
    package
        .config()
        .validate()
        .with_context(|| format!("Invalid dependency in {}", manifest.display()))?;

    println!(
        "{}",
        format!(
            " Package {} ({:?})",
            package.name(),
            package.package_type()
        )
        .bright_green()
        .bold()
    );
    println!(" Entry: {}", package.entry_path().display());

    if package.dependencies().is_empty() {
        println!("  No dependencies");
        return Ok(());
    }

    println!(" Dependencies: {}", package.dependencies().len());
    for (name, dependency) in package.dependencies() {
        println!("   {} [{}] {}", name, dependency.kind(), dependency);
    }

    Ok(())
}
