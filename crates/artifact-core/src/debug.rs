use crate::compilation::DebugFileMap;
use crate::{ArtifactError, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use flate2::read::ZlibDecoder;
use flate2::write::ZlibEncoder;
use flate2::Compression;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::io::{Read, Write};

/// Debug metadata as embedded in a contract artifact: one compressed, base64-encoded
/// symbol table per function, in artifact function order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DebugMetadata {
    pub debug_symbols: Vec<String>,
    pub file_map: DebugFileMap,
}

impl DebugMetadata {
    pub fn decode_symbols(&self, index: usize) -> Result<Option<Value>> {
        self.debug_symbols
            .get(index)
            .map(|encoded| decode_debug_symbols(encoded))
            .transpose()
    }
}

/// Serializes the symbol table to canonical JSON, zlib-compresses it and base64-encodes the
/// result. Equal tables always encode to equal strings.
pub fn encode_debug_symbols(symbols: &Value, level: Compression) -> Result<String> {
    let text = canonical_json(symbols)?;

    let mut encoder = ZlibEncoder::new(Vec::new(), level);
    encoder.write_all(text.as_bytes())?;
    let compressed = encoder.finish()?;

    Ok(STANDARD.encode(compressed))
}

/// Compact JSON with object keys sorted at every depth, whatever order the map type keeps.
pub fn canonical_json(value: &Value) -> Result<String> {
    Ok(serde_json::to_string(&canonicalize(value))?)
}

fn canonicalize(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<_> = map.iter().collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));

            let mut sorted = Map::new();
            for (key, value) in entries {
                sorted.insert(key.clone(), canonicalize(value));
            }
            Value::Object(sorted)
        }
        Value::Array(items) => Value::Array(items.iter().map(canonicalize).collect()),
        other => other.clone(),
    }
}

pub fn decode_debug_symbols(encoded: &str) -> Result<Value> {
    let compressed = STANDARD
        .decode(encoded)
        .map_err(|e| ArtifactError::DebugEncoding(e.to_string()))?;

    let mut text = String::new();
    ZlibDecoder::new(compressed.as_slice()).read_to_string(&mut text)?;

    Ok(serde_json::from_str(&text)?)
}
