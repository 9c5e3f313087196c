// Path: crates/abi/src/function.rs

//! Contract function descriptors parsed from JSON ABI fragments.

use crate::codec::{decode_words, encode_word, WORD_LEN};
use serde::Deserialize;
use sysreg_api::abi::AbiFunction;
use sysreg_types::abi::{ParamType, Token};
use sysreg_types::app::keccak256;
use sysreg_types::error::CodecError;

/// A named, typed function parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    /// The parameter name. May be empty for outputs.
    pub name: String,
    /// The parameter type.
    pub kind: ParamType,
}

/// A contract function that can encode calls and decode return data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Function {
    name: String,
    inputs: Vec<Param>,
    output_kinds: Vec<ParamType>,
    selector: [u8; 4],
}

#[derive(Deserialize)]
struct RawParam {
    #[serde(default)]
    name: String,
    #[serde(rename = "type")]
    kind: String,
}

#[derive(Deserialize)]
struct RawEntry {
    #[serde(rename = "type", default = "default_entry_type")]
    entry_type: String,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    inputs: Vec<RawParam>,
    #[serde(default)]
    outputs: Vec<RawParam>,
}

fn default_entry_type() -> String {
    "function".to_string()
}

/// Returns the 4-byte selector for a canonical signature like `getAddressFor(bytes32)`.
pub fn selector(signature: &str) -> [u8; 4] {
    let hash = keccak256(signature.as_bytes());
    let mut out = [0u8; 4];
    out.iter_mut().zip(hash.0).for_each(|(dst, src)| *dst = src);
    out
}

/// Parses a canonical static ABI type name.
pub fn parse_param_type(s: &str) -> Result<ParamType, CodecError> {
    let unsupported = || CodecError::UnsupportedType(s.to_string());
    match s {
        "address" => Ok(ParamType::Address),
        "bool" => Ok(ParamType::Bool),
        "uint" => Ok(ParamType::Uint(256)),
        _ => {
            if let Some(n) = s.strip_prefix("bytes") {
                let n: usize = n.parse().map_err(|_| unsupported())?;
                if (1..=WORD_LEN).contains(&n) {
                    return Ok(ParamType::FixedBytes(n));
                }
            } else if let Some(bits) = s.strip_prefix("uint") {
                let bits: usize = bits.parse().map_err(|_| unsupported())?;
                if bits % 8 == 0 && (8..=256).contains(&bits) {
                    return Ok(ParamType::Uint(bits));
                }
            }
            Err(unsupported())
        }
    }
}

fn canonical_signature(name: &str, inputs: &[Param]) -> String {
    let kinds: Vec<String> = inputs.iter().map(|p| p.kind.to_string()).collect();
    format!("{}({})", name, kinds.join(","))
}

fn convert_params(raw: Vec<RawParam>) -> Result<Vec<Param>, CodecError> {
    raw.into_iter()
        .map(|p| {
            Ok(Param {
                kind: parse_param_type(&p.kind)?,
                name: p.name,
            })
        })
        .collect()
}

impl Function {
    /// Builds a function from its name and parameter lists.
    pub fn new(name: impl Into<String>, inputs: Vec<Param>, outputs: Vec<Param>) -> Self {
        let name = name.into();
        let selector = selector(&canonical_signature(&name, &inputs));
        Self {
            selector,
            output_kinds: outputs.iter().map(|p| p.kind).collect(),
            name,
            inputs,
        }
    }

    /// Parses a JSON ABI array and returns the function entry called `name`.
    pub fn from_json(abi_json: &str, name: &str) -> Result<Self, CodecError> {
        let entries: Vec<RawEntry> =
            serde_json::from_str(abi_json).map_err(|e| CodecError::InvalidAbi(e.to_string()))?;
        let entry = entries
            .into_iter()
            .find(|e| e.entry_type == "function" && e.name.as_deref() == Some(name))
            .ok_or_else(|| CodecError::FunctionNotFound(name.to_string()))?;
        Ok(Self::new(
            name,
            convert_params(entry.inputs)?,
            convert_params(entry.outputs)?,
        ))
    }

    /// The canonical signature, e.g. `getAddressFor(bytes32)`.
    pub fn signature(&self) -> String {
        canonical_signature(&self.name, &self.inputs)
    }

    /// The 4-byte selector that prefixes encoded calls.
    pub fn selector(&self) -> [u8; 4] {
        self.selector
    }

    /// The declared inputs.
    pub fn inputs(&self) -> &[Param] {
        &self.inputs
    }

    /// Splits call data into this function's arguments, checking the selector.
    pub fn decode_input(&self, data: &[u8]) -> Result<Vec<Token>, CodecError> {
        let (sel, args) = data
            .split_first_chunk::<4>()
            .ok_or(CodecError::InvalidLength {
                expected: 4,
                got: data.len(),
            })?;
        if *sel != self.selector {
            return Err(CodecError::FunctionNotFound(format!(
                "selector 0x{:02x}{:02x}{:02x}{:02x}",
                sel[0], sel[1], sel[2], sel[3]
            )));
        }
        let kinds: Vec<ParamType> = self.inputs.iter().map(|p| p.kind).collect();
        if kinds.is_empty() {
            return Ok(Vec::new());
        }
        decode_words(args, &kinds)
    }
}

impl AbiFunction for Function {
    fn name(&self) -> &str {
        &self.name
    }

    fn outputs(&self) -> &[ParamType] {
        &self.output_kinds
    }

    fn encode_input(&self, args: &[Token]) -> Result<Vec<u8>, CodecError> {
        if args.len() != self.inputs.len() {
            return Err(CodecError::ArgumentMismatch(format!(
                "{} expects {} argument(s), got {}",
                self.name,
                self.inputs.len(),
                args.len()
            )));
        }
        let mut out = Vec::with_capacity(4 + WORD_LEN * args.len());
        out.extend_from_slice(&self.selector);
        for (arg, param) in args.iter().zip(&self.inputs) {
            out.extend_from_slice(&encode_word(arg, &param.kind)?);
        }
        Ok(out)
    }

    fn decode_output(&self, data: &[u8]) -> Result<Vec<Token>, CodecError> {
        decode_words(data, &self.output_kinds)
    }
}
