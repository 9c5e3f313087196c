// Path: crates/telemetry/src/lib.rs
//! Logging setup shared by binaries embedding the resolver and by tests.

pub mod init;

pub use init::{init_test_tracing, init_tracing};
