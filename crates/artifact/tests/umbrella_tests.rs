use artifact::{emit::OutputFormat, render_summary, Artifact, ArtifactGenerator, FunctionType};

const PROGRAM: &str = r#"{
    "name": "main",
    "program": {
        "hash": 9,
        "backend": "acvm-backend-barretenberg",
        "abi": { "parameters": [{ "name": "x", "type": { "kind": "field" }, "visibility": "public" }] }
    }
}"#;

#[test]
fn test_generate_and_summarize_program() {
    let artifact = ArtifactGenerator::default()
        .generate_from_json(PROGRAM, Some("0.18.0"))
        .unwrap();

    assert!(matches!(artifact, Artifact::Program(ref program) if program.hash == 9));
    let summary = render_summary(&artifact, OutputFormat::Text);
    assert!(summary.contains("  - x: Field [public]"));
}

#[test]
fn test_function_type_reexport() {
    assert_eq!("Unconstrained".parse::<FunctionType>().unwrap(), FunctionType::Unconstrained);
}
