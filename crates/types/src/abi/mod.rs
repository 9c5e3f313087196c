// Path: crates/types/src/abi/mod.rs
//! Value tokens and parameter types for the contract ABI.
//!
//! Only static (fixed-width, single-word) types are modelled. Protocol lookups
//! against system contracts never need dynamic types.

use crate::app::{Address, RegistryId, B256};
use std::fmt;

/// The declared type of a function input or output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamType {
    /// A 20-byte `address`.
    Address,
    /// A `bool`.
    Bool,
    /// A fixed-size byte array, `bytes1` to `bytes32`.
    FixedBytes(usize),
    /// An unsigned integer, `uint8` to `uint256`, with the width in bits.
    Uint(usize),
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamType::Address => write!(f, "address"),
            ParamType::Bool => write!(f, "bool"),
            ParamType::FixedBytes(n) => write!(f, "bytes{}", n),
            ParamType::Uint(bits) => write!(f, "uint{}", bits),
        }
    }
}

/// A decoded (or to-be-encoded) ABI value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// An `address` value.
    Address(Address),
    /// A `bool` value.
    Bool(bool),
    /// A `bytesN` value. Only the first `N` bytes of the word are significant.
    FixedBytes(Vec<u8>),
    /// A `uintN` value as a big-endian 32-byte word.
    Uint(B256),
}

impl Token {
    /// Returns the address if this token is an `address`.
    pub fn into_address(self) -> Option<Address> {
        match self {
            Token::Address(a) => Some(a),
            _ => None,
        }
    }

    /// Returns true if this token can be encoded as `kind`.
    pub fn type_check(&self, kind: &ParamType) -> bool {
        match (self, kind) {
            (Token::Address(_), ParamType::Address) => true,
            (Token::Bool(_), ParamType::Bool) => true,
            (Token::FixedBytes(bytes), ParamType::FixedBytes(n)) => bytes.len() == *n,
            (Token::Uint(_), ParamType::Uint(_)) => true,
            _ => false,
        }
    }
}

impl From<Address> for Token {
    fn from(a: Address) -> Self {
        Token::Address(a)
    }
}

impl From<RegistryId> for Token {
    fn from(id: RegistryId) -> Self {
        Token::FixedBytes(id.0.to_vec())
    }
}
