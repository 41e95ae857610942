//! Common test utilities for webpify integration and scenario tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated project directory plus helpers to run the CLI
//! - Assertion macros: `assert_exists!`, `assert_missing!`
//! - Fixtures: real PNG bytes and typical code files

#![allow(dead_code)]

pub mod assertions;
pub mod env;
pub mod fixtures;

pub use assertions::*;
pub use env::*;
pub use fixtures::*;
