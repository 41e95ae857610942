//! Domain Value Objects

mod image_root;
mod reference_form;

pub use image_root::ImageRootAlias;
pub use reference_form::ReferenceForm;
