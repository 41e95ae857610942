//! Image encoder implementations

mod webp;

pub use self::webp::WebpEncoder;
