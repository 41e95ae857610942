//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod encoder;
pub mod file_system;
pub mod migration_events;

pub use encoder::{EncodeError, EncodeOptions, Encoder};
pub use file_system::{FileSystem, FsError, FsResult, WalkEntry};
pub use migration_events::{MigrationEvent, MigrationEventSink, NoopEventSink};
