//! Test fixtures - real image bytes and typical code files.

use std::io::Cursor;

use image::{ImageFormat, Rgba, RgbaImage};

/// A small RGBA gradient encoded as PNG
pub fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let img = RgbaImage::from_fn(width, height, |x, y| {
        Rgba([(x * 16) as u8, (y * 16) as u8, 128, 255])
    });
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, ImageFormat::Png)
        .expect("encoding a PNG in memory cannot fail");
    out.into_inner()
}

/// Signature every WebP file starts with (`RIFF....WEBP`)
pub fn is_webp(bytes: &[u8]) -> bool {
    bytes.len() > 12 && &bytes[0..4] == b"RIFF" && &bytes[8..12] == b"WEBP"
}

/// A Vue component referencing the logo through the public prefix
pub const APP_VUE: &str = r#"<template>
  <img src="/images/logo.png" alt="logo" />
</template>
"#;

/// A stylesheet referencing an image relative to the stylesheet
pub const HERO_CSS: &str = ".hero {\n  background: url(../assets/img/hero.png);\n}\n";
