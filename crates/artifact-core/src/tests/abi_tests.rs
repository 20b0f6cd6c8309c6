use super::fixtures::{field, struct_type, u32_type};
use crate::abi::{Abi, AbiField, AbiType, Sign};
use pretty_assertions::assert_eq;

#[test]
fn test_ethereum_address_struct() {
    let ty = struct_type("aztec::types::address::EthereumAddress");

    assert!(ty.is_ethereum_address_struct());
    assert!(!ty.is_aztec_address_struct());
    assert!(ty.is_address_struct());
}

#[test]
fn test_aztec_address_struct() {
    let ty = struct_type("dep::aztec::types::address::AztecAddress");

    assert!(ty.is_aztec_address_struct());
    assert!(!ty.is_ethereum_address_struct());
    assert!(ty.is_address_struct());
}

#[test]
fn test_other_structs_are_not_addresses() {
    assert!(!struct_type("my_contract::Note").is_address_struct());
    assert!(!struct_type("types::address::AztecAddressExt").is_address_struct());
    assert!(!struct_type("AztecAddress").is_address_struct());
}

#[test]
fn test_non_struct_kinds_are_not_addresses() {
    let kinds = vec![
        field(),
        AbiType::Boolean,
        u32_type(),
        AbiType::String { length: 42 },
        AbiType::Array {
            length: 2,
            element: Box::new(struct_type("aztec::types::address::AztecAddress")),
        },
        AbiType::Tuple {
            fields: vec![struct_type("aztec::types::address::EthereumAddress")],
        },
    ];

    for kind in kinds {
        assert!(!kind.is_address_struct(), "{} matched", kind);
    }
}

#[test]
fn test_abi_type_json_shape() {
    let json = r#"{
        "kind": "struct",
        "path": "aztec::types::address::AztecAddress",
        "fields": [
            { "name": "inner", "type": { "kind": "field" } },
            { "name": "flags", "type": { "kind": "array", "length": 2, "type": { "kind": "integer", "sign": "unsigned", "width": 8 } } }
        ]
    }"#;

    let ty: AbiType = serde_json::from_str(json).unwrap();

    assert_eq!(
        ty,
        AbiType::Struct {
            path: "aztec::types::address::AztecAddress".to_string(),
            fields: vec![
                AbiField {
                    name: "inner".to_string(),
                    field_type: AbiType::Field,
                },
                AbiField {
                    name: "flags".to_string(),
                    field_type: AbiType::Array {
                        length: 2,
                        element: Box::new(AbiType::Integer {
                            sign: Sign::Unsigned,
                            width: 8,
                        }),
                    },
                },
            ],
        }
    );
    assert!(ty.is_aztec_address_struct());
}

#[test]
fn test_display() {
    assert_eq!(u32_type().to_string(), "u32");
    assert_eq!(
        AbiType::Integer {
            sign: Sign::Signed,
            width: 64
        }
        .to_string(),
        "i64"
    );
    assert_eq!(
        AbiType::Array {
            length: 3,
            element: Box::new(field())
        }
        .to_string(),
        "[Field; 3]"
    );
    assert_eq!(
        AbiType::Tuple {
            fields: vec![AbiType::Boolean, AbiType::String { length: 5 }]
        }
        .to_string(),
        "(bool, str<5>)"
    );
}

#[test]
fn test_abi_defaults_missing_witnesses() {
    let abi: Abi = serde_json::from_str(
        r#"{ "parameters": [{ "name": "x", "type": { "kind": "field" }, "visibility": "public" }], "return_type": null }"#,
    )
    .unwrap();

    assert_eq!(abi.parameters.len(), 1);
    assert!(abi.param_witnesses.is_empty());
    assert!(abi.return_type.is_none());
    assert!(abi.return_witnesses.is_empty());
}
