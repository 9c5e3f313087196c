// Path: crates/abi/src/lib.rs
#![forbid(unsafe_code)]
#![cfg_attr(
    not(test),
    deny(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::unimplemented,
        clippy::todo,
        clippy::indexing_slicing
    )
)]
//! # System Registry ABI
//!
//! A small contract ABI codec covering the static types that protocol-internal
//! system calls use (`address`, `bool`, `bytesN`, `uintN`). Functions are
//! described by a JSON ABI fragment, the same format contract toolchains emit.

mod codec;
mod function;

pub use codec::{decode_words, encode_word, WORD_LEN};
pub use function::{parse_param_type, selector, Function, Param};
