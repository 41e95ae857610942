//! Domain Services
//!
//! Stateless logic built on top of the ports.

mod candidates;
mod filter;
mod literal;
mod tree;

pub use candidates::CandidateGenerator;
pub use filter::PathFilter;
pub use literal::LiteralMatcher;
pub use tree::{format_size, scan, total_size};
