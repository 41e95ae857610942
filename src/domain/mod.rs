//! Domain Layer
//!
//! The conversion-and-rewrite rules, free of direct I/O.
//!
//! ## Structure
//!
//! - `entities/` - Results of converting and rewriting (ConvertedAsset, FileRewrite, MigrationReport)
//! - `value_objects/` - Immutable value types (ImageRootAlias, ReferenceForm)
//! - `services/` - Pure services (CandidateGenerator, LiteralMatcher, tree scanning)
//! - `ports/` - Interface definitions for infrastructure (FileSystem, Encoder, events)
//!
//! All I/O goes through the ports; infrastructure provides the implementations.

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
