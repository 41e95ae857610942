pub mod header;
pub mod summary;
