use crate::output::OutputStyle;
use anyhow::{Context, Result};
use artifact_core::Artifact;
use std::fs;
use std::io::Write;
use std::path::Path;

pub fn artifact_to_string(artifact: &Artifact, style: OutputStyle) -> Result<String> {
    let json = match style {
        OutputStyle::Pretty => serde_json::to_string_pretty(artifact)?,
        OutputStyle::Compact => serde_json::to_string(artifact)?,
    };
    Ok(json)
}

pub fn write_artifact_to<W: Write>(
    writer: &mut W,
    artifact: &Artifact,
    style: OutputStyle,
) -> Result<()> {
    match style {
        OutputStyle::Pretty => serde_json::to_writer_pretty(&mut *writer, artifact)?,
        OutputStyle::Compact => serde_json::to_writer(&mut *writer, artifact)?,
    }
    writeln!(writer)?;
    Ok(())
}

pub fn write_artifact(
    artifact: &Artifact,
    path: impl AsRef<Path>,
    style: OutputStyle,
) -> Result<()> {
    let path = path.as_ref();
    let mut json = artifact_to_string(artifact, style)?;
    json.push('\n');

    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

pub fn load_artifact(path: impl AsRef<Path>) -> Result<Artifact> {
    let path = path.as_ref();
    let json =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let artifact = serde_json::from_str(&json)
        .with_context(|| format!("{} is not a build artifact", path.display()))?;
    Ok(artifact)
}
