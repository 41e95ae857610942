//! Use Case Factory
//!
//! Creates the migration use case with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use crate::application::MigrationUseCase;
use crate::config::Config;
use crate::infrastructure::{LocalFs, WebpEncoder};

/// Type alias for the concrete MigrationUseCase with all dependencies
pub type ConcreteMigrationUseCase = MigrationUseCase<LocalFs, WebpEncoder>;

/// Create a migration use case backed by the local file system and the WebP
/// encoder.
pub fn create_migration_use_case(config: Config) -> ConcreteMigrationUseCase {
    MigrationUseCase::new(LocalFs::new(), WebpEncoder::new(), config)
}
