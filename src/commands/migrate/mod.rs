//! `webpify [IMAGE_ROOT]`

mod cmd;
mod console;
mod prompt;

pub use cmd::cmd_migrate;
