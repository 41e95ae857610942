//! Webpify - PNG to WebP asset migration
//!
//! Webpify converts every PNG under an image directory to WebP, then finds
//! every reference to the converted images across a codebase and points it at
//! the new file.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{MigrationPlan, MigrationRequest, MigrationUseCase};
pub use config::Config;
pub use domain::entities::MigrationReport;
pub use error::{WebpifyError, WebpifyResult};
pub use infrastructure::{LocalFs, WebpEncoder};
