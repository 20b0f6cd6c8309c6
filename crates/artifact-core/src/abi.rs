use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

pub const ETHEREUM_ADDRESS_PATH_SUFFIX: &str = "::types::address::EthereumAddress";
pub const AZTEC_ADDRESS_PATH_SUFFIX: &str = "::types::address::AztecAddress";

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum AbiType {
    Field,
    Boolean,
    Integer {
        sign: Sign,
        width: u32,
    },
    Array {
        length: u64,
        #[serde(rename = "type")]
        element: Box<AbiType>,
    },
    String {
        length: u64,
    },
    Struct {
        path: String,
        fields: Vec<AbiField>,
    },
    Tuple {
        fields: Vec<AbiType>,
    },
}

impl AbiType {
    pub fn struct_path(&self) -> Option<&str> {
        match self {
            AbiType::Struct { path, .. } => Some(path),
            _ => None,
        }
    }

    /// Whether this is the `EthereumAddress` struct defined in Aztec.nr.
    pub fn is_ethereum_address_struct(&self) -> bool {
        self.struct_path()
            .is_some_and(|path| path.ends_with(ETHEREUM_ADDRESS_PATH_SUFFIX))
    }

    /// Whether this is the `AztecAddress` struct defined in Aztec.nr.
    pub fn is_aztec_address_struct(&self) -> bool {
        self.struct_path()
            .is_some_and(|path| path.ends_with(AZTEC_ADDRESS_PATH_SUFFIX))
    }

    pub fn is_address_struct(&self) -> bool {
        self.is_ethereum_address_struct() || self.is_aztec_address_struct()
    }
}

impl fmt::Display for AbiType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AbiType::Field => write!(f, "Field"),
            AbiType::Boolean => write!(f, "bool"),
            AbiType::Integer {
                sign: Sign::Unsigned,
                width,
            } => write!(f, "u{}", width),
            AbiType::Integer {
                sign: Sign::Signed,
                width,
            } => write!(f, "i{}", width),
            AbiType::Array { length, element } => write!(f, "[{}; {}]", element, length),
            AbiType::String { length } => write!(f, "str<{}>", length),
            AbiType::Struct { path, .. } => write!(f, "{}", path),
            AbiType::Tuple { fields } => {
                let fields = fields
                    .iter()
                    .map(|t| t.to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "({})", fields)
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sign {
    Unsigned,
    Signed,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AbiField {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: AbiType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AbiVisibility {
    Public,
    #[default]
    Private,
    Databus,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AbiParameter {
    pub name: String,
    #[serde(rename = "type")]
    pub param_type: AbiType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<AbiVisibility>,
}

impl AbiParameter {
    pub fn new(name: impl Into<String>, param_type: AbiType) -> Self {
        Self {
            name: name.into(),
            param_type,
            visibility: None,
        }
    }

    pub fn with_visibility(mut self, visibility: AbiVisibility) -> Self {
        self.visibility = Some(visibility);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WitnessRange {
    pub start: u32,
    pub end: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Abi {
    pub parameters: Vec<AbiParameter>,
    #[serde(default)]
    pub param_witnesses: BTreeMap<String, Vec<WitnessRange>>,
    #[serde(default)]
    pub return_type: Option<AbiType>,
    #[serde(default)]
    pub return_witnesses: Vec<u32>,
}

impl Abi {
    pub fn new(parameters: Vec<AbiParameter>, return_type: Option<AbiType>) -> Self {
        Self {
            parameters,
            return_type,
            ..Default::default()
        }
    }
}
