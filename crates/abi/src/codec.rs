// Path: crates/abi/src/codec.rs

//! Word-level encoding and decoding of static ABI values.

use sysreg_types::abi::{ParamType, Token};
use sysreg_types::app::{Address, B256};
use sysreg_types::error::CodecError;

/// The size of one ABI word in bytes.
pub const WORD_LEN: usize = 32;

const ADDRESS_LEN: usize = 20;

/// Returns how many leading bytes of a word must be zero for `kind`, which
/// also rejects widths that do not fit in one word.
fn padding_len(kind: &ParamType) -> Result<usize, CodecError> {
    let significant = match kind {
        ParamType::Address => Some(ADDRESS_LEN),
        ParamType::Bool => Some(1),
        ParamType::FixedBytes(n) if (1..=WORD_LEN).contains(n) => Some(*n),
        ParamType::Uint(bits) if bits % 8 == 0 && (8..=256).contains(bits) => Some(bits / 8),
        _ => None,
    };
    significant
        .and_then(|n| WORD_LEN.checked_sub(n))
        .ok_or_else(|| CodecError::UnsupportedType(kind.to_string()))
}

/// Encodes a single static token into one 32-byte word.
pub fn encode_word(token: &Token, kind: &ParamType) -> Result<[u8; WORD_LEN], CodecError> {
    let padding = padding_len(kind)?;
    if !token.type_check(kind) {
        return Err(CodecError::ArgumentMismatch(format!(
            "expected {}, got {:?}",
            kind, token
        )));
    }
    let mut word = [0u8; WORD_LEN];
    match token {
        Token::Address(a) => word = a.into_word().0,
        Token::Bool(b) => {
            if let Some(last) = word.last_mut() {
                *last = u8::from(*b);
            }
        }
        Token::FixedBytes(bytes) => {
            for (dst, src) in word.iter_mut().zip(bytes) {
                *dst = *src;
            }
        }
        Token::Uint(value) => {
            if !high_bytes_zero(&value.0, padding) {
                return Err(CodecError::ArgumentMismatch(format!(
                    "value does not fit in {}",
                    kind
                )));
            }
            word = value.0;
        }
    }
    Ok(word)
}

/// Decodes one token per entry of `kinds` from consecutive 32-byte words.
///
/// The data must be a whole number of words. Whole words beyond the declared
/// outputs are ignored.
pub fn decode_words(data: &[u8], kinds: &[ParamType]) -> Result<Vec<Token>, CodecError> {
    if kinds.is_empty() {
        return Ok(Vec::new());
    }
    if data.is_empty() {
        return Err(CodecError::EmptyResult);
    }
    let expected = kinds.len() * WORD_LEN;
    if data.len() < expected || data.len() % WORD_LEN != 0 {
        return Err(CodecError::InvalidLength {
            expected,
            got: data.len(),
        });
    }
    data.chunks_exact(WORD_LEN)
        .zip(kinds)
        .map(|(chunk, kind)| decode_word(B256::from_slice(chunk), kind))
        .collect()
}

fn decode_word(word: B256, kind: &ParamType) -> Result<Token, CodecError> {
    let padding = padding_len(kind)?;
    let invalid = || CodecError::InvalidPadding(*kind);
    match kind {
        ParamType::Address => {
            if !high_bytes_zero(&word.0, padding) {
                return Err(invalid());
            }
            Ok(Token::Address(Address::from_word(word)))
        }
        ParamType::Bool => match word.last() {
            Some(0 | 1) if high_bytes_zero(&word.0, padding) => {
                Ok(Token::Bool(word.last() == Some(&1)))
            }
            _ => Err(invalid()),
        },
        ParamType::FixedBytes(n) => {
            if word.iter().skip(*n).any(|b| *b != 0) {
                return Err(invalid());
            }
            Ok(Token::FixedBytes(word.iter().take(*n).copied().collect()))
        }
        ParamType::Uint(_) => {
            if !high_bytes_zero(&word.0, padding) {
                return Err(invalid());
            }
            Ok(Token::Uint(word))
        }
    }
}

fn high_bytes_zero(word: &[u8; WORD_LEN], count: usize) -> bool {
    word.iter().take(count).all(|b| *b == 0)
}
