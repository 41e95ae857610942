//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `MigrationUseCase` - Validate, convert, generate candidates, rewrite
//!
//! ## Services
//!
//! - `ImageConverter` - Convert one image and replace the original
//! - `ReferenceRewriter` - Apply replacement candidates to code files

pub mod convert;
pub mod migrate;
pub mod rewrite;

#[cfg(test)]
mod testing;

pub use convert::{ConvertOptions, ImageConverter};
pub use migrate::{MigrationPlan, MigrationRequest, MigrationUseCase};
pub use rewrite::{ReferenceRewriter, ReplacementRules, RewriteOptions};
