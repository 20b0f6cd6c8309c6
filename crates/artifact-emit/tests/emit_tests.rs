use artifact_core::{
    AbiParameter, AbiType, Artifact, ContractArtifact, FunctionArtifact, FunctionType,
    ProgramArtifact, Sign,
};
use artifact_emit::{
    artifact_to_string, load_artifact, render_summary, write_artifact, write_artifact_to,
    EmitterConfig, OutputFormat, OutputStyle, SummaryEmitter, VerbosityLevel,
};
use pretty_assertions::assert_eq;
use serde_json::json;
use tempfile::TempDir;

fn aztec_address() -> AbiType {
    AbiType::Struct {
        path: "dep::aztec::types::address::AztecAddress".to_string(),
        fields: Vec::new(),
    }
}

fn function(
    name: &str,
    function_type: FunctionType,
    parameters: Vec<AbiParameter>,
) -> FunctionArtifact {
    FunctionArtifact {
        name: name.to_string(),
        function_type,
        is_internal: false,
        parameters,
        return_types: Vec::new(),
        bytecode: "H4sIAAAAAAAA".to_string(),
        verification_key: "0000".to_string(),
    }
}

fn token() -> Artifact {
    let mut balance_of = function(
        "balance_of",
        FunctionType::Unconstrained,
        vec![AbiParameter::new("owner", aztec_address())],
    );
    balance_of.return_types = vec![AbiType::Integer {
        sign: Sign::Unsigned,
        width: 64,
    }];

    let mut reduce = function("_reduce", FunctionType::Open, Vec::new());
    reduce.is_internal = true;

    Artifact::Contract(ContractArtifact {
        name: "Token".to_string(),
        functions: vec![
            reduce,
            balance_of,
            function("constructor", FunctionType::Secret, Vec::new()),
            function(
                "transfer",
                FunctionType::Secret,
                vec![
                    AbiParameter::new("to", aztec_address()),
                    AbiParameter::new("amount", AbiType::Field),
                ],
            ),
        ],
        events: vec![json!({ "name": "Transfer", "fields": [] })],
        debug: None,
        aztec_nr_version: Some("aztec-nr-0.16.0".to_string()),
    })
}

fn program() -> Artifact {
    Artifact::Program(ProgramArtifact {
        noir_version: Some("0.18.0".to_string()),
        hash: 7,
        backend: "acvm-backend-barretenberg".to_string(),
        abi: json!({
            "parameters": [{ "name": "x", "type": { "kind": "field" }, "visibility": "private" }],
            "return_type": { "kind": "boolean" }
        }),
    })
}

#[test]
fn test_write_and_load_contract() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("target").join("token.json");

    write_artifact(&token(), &path, OutputStyle::Pretty).unwrap();
    let loaded = load_artifact(&path).unwrap();

    assert_eq!(loaded, token());
}

#[test]
fn test_write_and_load_program() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("main.json");

    write_artifact(&program(), &path, OutputStyle::Compact).unwrap();
    let text = std::fs::read_to_string(&path).unwrap();

    assert_eq!(text.lines().count(), 1);
    assert_eq!(load_artifact(&path).unwrap(), program());
}

#[test]
fn test_load_rejects_non_artifact() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("garbage.json");
    std::fs::write(&path, "[1, 2, 3]").unwrap();

    let err = load_artifact(&path).unwrap_err();
    assert!(err.to_string().contains("is not a build artifact"));
}

#[test]
fn test_load_missing_file() {
    let dir = TempDir::new().unwrap();

    let err = load_artifact(dir.path().join("absent.json")).unwrap_err();
    assert!(err.to_string().contains("Failed to read"));
}

#[test]
fn test_compact_and_pretty_agree() {
    let compact = artifact_to_string(&token(), OutputStyle::Compact).unwrap();
    let pretty = artifact_to_string(&token(), OutputStyle::Pretty).unwrap();

    assert!(!compact.contains('\n'));
    assert_eq!(
        serde_json::from_str::<serde_json::Value>(&compact).unwrap(),
        serde_json::from_str::<serde_json::Value>(&pretty).unwrap()
    );

    let mut buffer = Vec::new();
    write_artifact_to(&mut buffer, &token(), OutputStyle::Compact).unwrap();
    assert_eq!(String::from_utf8(buffer).unwrap(), format!("{}\n", compact));
}

#[test]
fn test_text_summary_flags_addresses() {
    let summary = render_summary(&token(), OutputFormat::Text);

    assert!(summary.contains("=== Contract Token ==="));
    assert!(summary.contains("functions: 4"));
    assert!(summary.contains("aztec-nr: aztec-nr-0.16.0"));
    assert!(summary.contains("events: 1"));
    assert!(summary.contains(concat!(
        "  - transfer(to: dep::aztec::types::address::AztecAddress [aztec address], ",
        "amount: Field) [secret]"
    )));
    assert!(summary.contains(concat!(
        "  - balance_of(owner: dep::aztec::types::address::AztecAddress [aztec address]) ",
        "-> u64 [unconstrained]"
    )));
    assert!(summary.contains("  - _reduce() [open] [internal]"));
}

#[test]
fn test_markdown_summary() {
    let summary = render_summary(&token(), OutputFormat::Markdown);

    assert!(summary.contains("## Contract Token"));
    assert!(summary.contains("**functions**: 4"));
    assert!(summary.contains("- constructor() `secret`"));
    assert!(summary.contains("`aztec address`"));
}

#[test]
fn test_quiet_summary_omits_parameters() {
    let emitter = SummaryEmitter::new(EmitterConfig {
        verbosity: VerbosityLevel::Quiet,
        ..EmitterConfig::plain()
    });

    let summary = emitter.render(&token());

    assert!(summary.contains("  - transfer [secret]"));
    assert!(!summary.contains("amount"));
}

#[test]
fn test_verbose_summary_reports_sizes() {
    let emitter = SummaryEmitter::new(EmitterConfig {
        verbosity: VerbosityLevel::Verbose,
        ..EmitterConfig::plain()
    });

    let mut buffer = Vec::new();
    emitter.emit(&mut buffer, &token()).unwrap();
    let summary = String::from_utf8(buffer).unwrap();

    assert!(summary.contains("(12 bytes of bytecode)"));
}

#[test]
fn test_program_summary() {
    let summary = render_summary(&program(), OutputFormat::Text);

    assert!(summary.contains("=== Program ==="));
    assert!(summary.contains("hash: 7"));
    assert!(summary.contains("noir: 0.18.0"));
    assert!(summary.contains("  - x: Field [private]"));
    assert!(summary.contains("returns: bool"));
}

#[test]
fn test_program_summary_shows_unmodeled_abi_raw() {
    let artifact = Artifact::Program(ProgramArtifact {
        noir_version: None,
        hash: 3,
        backend: "bb".to_string(),
        abi: json!({
            "parameters": [{ "name": "x", "type": { "kind": "field" } }],
            "return_type": { "kind": "bytes", "length": 32 }
        }),
    });

    let text = render_summary(&artifact, OutputFormat::Text);
    assert!(text.contains("=== ABI ==="));
    assert!(text.contains("    \"return_type\": {"));
    assert!(!text.contains("=== Parameters ==="));

    let markdown = render_summary(&artifact, OutputFormat::Markdown);
    assert!(markdown.contains("```json\n{"));
    assert!(markdown.contains("\"kind\": \"bytes\""));
}

#[test]
fn test_program_summary_omits_unstated_visibility() {
    let artifact = Artifact::Program(ProgramArtifact {
        noir_version: None,
        hash: 4,
        backend: "bb".to_string(),
        abi: json!({ "parameters": [{ "name": "x", "type": { "kind": "field" } }] }),
    });

    let summary = render_summary(&artifact, OutputFormat::Text);

    assert!(summary.contains("  - x: Field\n"));
    assert!(summary.contains("returns: ()"));
}
