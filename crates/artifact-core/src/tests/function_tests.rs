use super::fixtures::{entry, field, param, struct_type, u32_type};
use crate::compilation::FunctionType;
use crate::config::MOCK_VERIFICATION_KEY;
use crate::function::generate_function_artifact;
use pretty_assertions::assert_eq;

#[test]
fn test_constrained_function_drops_context_parameter() {
    for function_type in [FunctionType::Secret, FunctionType::Open] {
        let raw = entry(
            "transfer",
            function_type,
            vec![
                param("ctx", struct_type("aztec::context::Inputs")),
                param("x", field()),
                param("y", u32_type()),
            ],
            None,
        );

        let artifact = generate_function_artifact(&raw, MOCK_VERIFICATION_KEY);

        assert_eq!(
            artifact.parameters,
            vec![param("x", field()), param("y", u32_type())]
        );
    }
}

#[test]
fn test_unconstrained_function_keeps_parameters() {
    let raw = entry(
        "balance_of",
        FunctionType::Unconstrained,
        vec![param("x", field()), param("y", u32_type())],
        Some(field()),
    );

    let artifact = generate_function_artifact(&raw, MOCK_VERIFICATION_KEY);

    assert_eq!(artifact.parameters, raw.abi.parameters);
    assert_eq!(artifact.return_types, vec![field()]);
}

#[test]
fn test_secret_function_hides_return_type() {
    let raw = entry(
        "mint",
        FunctionType::Secret,
        vec![param("inputs", field())],
        Some(u32_type()),
    );

    let artifact = generate_function_artifact(&raw, MOCK_VERIFICATION_KEY);

    assert!(artifact.return_types.is_empty());
}

#[test]
fn test_open_function_keeps_return_type() {
    let raw = entry(
        "update",
        FunctionType::Open,
        vec![param("inputs", field())],
        Some(u32_type()),
    );

    let artifact = generate_function_artifact(&raw, MOCK_VERIFICATION_KEY);

    assert_eq!(artifact.return_types, vec![u32_type()]);
}

#[test]
fn test_missing_return_type_yields_no_entries() {
    let raw = entry("noop", FunctionType::Open, vec![param("inputs", field())], None);

    let artifact = generate_function_artifact(&raw, MOCK_VERIFICATION_KEY);

    assert!(artifact.return_types.is_empty());
}

#[test]
fn test_constrained_function_without_parameters() {
    let raw = entry("broken", FunctionType::Secret, Vec::new(), None);

    let artifact = generate_function_artifact(&raw, MOCK_VERIFICATION_KEY);

    assert!(artifact.parameters.is_empty());
}

#[test]
fn test_copies_metadata_and_attaches_key() {
    let mut raw = entry("secret_op", FunctionType::Secret, vec![param("inputs", field())], None);
    raw.is_internal = true;

    let artifact = generate_function_artifact(&raw, "feedface");

    assert_eq!(artifact.name, "secret_op");
    assert_eq!(artifact.function_type, FunctionType::Secret);
    assert!(artifact.is_internal);
    assert_eq!(artifact.bytecode, raw.bytecode);
    assert_eq!(artifact.verification_key, "feedface");
}

#[test]
fn test_function_type_tag_is_lowercased() {
    let raw: crate::compilation::FunctionEntry = serde_json::from_str(
        r#"{
            "name": "get",
            "function_type": "Unconstrained",
            "is_internal": false,
            "abi": { "parameters": [], "return_type": null },
            "bytecode": "H4sIAAAAAAAA"
        }"#,
    )
    .unwrap();

    let artifact = generate_function_artifact(&raw, MOCK_VERIFICATION_KEY);
    let json = serde_json::to_value(&artifact).unwrap();

    assert_eq!(json["functionType"], "unconstrained");
    assert_eq!(json["isInternal"], false);
    assert_eq!(json["returnTypes"], serde_json::json!([]));
    assert_eq!(json["verificationKey"], MOCK_VERIFICATION_KEY);
}

#[test]
fn test_unknown_function_type_is_rejected() {
    let result: Result<FunctionType, _> = serde_json::from_str(r#""Hidden""#);
    assert!(result.is_err());
}

#[test]
fn test_address_parameters() {
    let raw = entry(
        "bridge",
        FunctionType::Open,
        vec![
            param("inputs", field()),
            param("to", struct_type("aztec::types::address::AztecAddress")),
            param("amount", field()),
            param("portal", struct_type("aztec::types::address::EthereumAddress")),
        ],
        None,
    );

    let artifact = generate_function_artifact(&raw, MOCK_VERIFICATION_KEY);
    let names: Vec<_> = artifact
        .address_parameters()
        .map(|p| p.name.as_str())
        .collect();

    assert_eq!(names, vec!["to", "portal"]);
}
