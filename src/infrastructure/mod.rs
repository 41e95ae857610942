//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//!
//! ## Structure
//!
//! - `fs/` - File system implementations (Local, Memory)
//! - `encoder/` - Image encoders (WebP)

pub mod encoder;
pub mod fs;

pub use encoder::WebpEncoder;
pub use fs::{LocalFs, MemoryFs};
