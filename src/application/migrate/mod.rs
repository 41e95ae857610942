//! Migrate Use Case
//!
//! Converts every image under an image root, then rewrites the references to
//! them across the project.

mod request;
mod use_case;


pub use request::{MigrationPlan, MigrationRequest};
pub use use_case::MigrationUseCase;
