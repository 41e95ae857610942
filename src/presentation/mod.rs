//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating the use case with infrastructure dependencies
//!
//! ## Structure
//!
//! - `cli` - Command-line interface
//! - `factory` - Creates the use case with production dependencies

pub mod cli;
pub mod factory;

pub use cli::{Cli, ColorWhen};
pub use factory::create_migration_use_case;
