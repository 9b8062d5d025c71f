// SPDX-License-Identifier: MPL-2.0
//! Source image loading and pixel format normalization.

use crate::error::{Error, Result};
use image_rs::{ColorType, DynamicImage};
use std::fs;
use std::io;
use std::path::Path;

/// Load and decode the source image at `path`.
///
/// The format is detected from the file content, not its extension.
///
/// # Errors
///
/// Returns an error if:
/// - The path does not exist or is a directory ([`Error::NotFound`])
/// - The file cannot be read ([`Error::Io`])
/// - The bytes are not a decodable image ([`Error::Decode`], decoder message verbatim)
pub fn load_source_image<P: AsRef<Path>>(path: P) -> Result<DynamicImage> {
    let path = path.as_ref();

    if path.is_dir() {
        return Err(Error::NotFound(path.to_path_buf()));
    }

    let img_bytes = fs::read(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => Error::NotFound(path.to_path_buf()),
        _ => Error::Io(e.to_string()),
    })?;

    image_rs::load_from_memory(&img_bytes).map_err(|e| Error::Decode(e.to_string()))
}

/// Convert `image` to 8-bit RGBA unless it already is.
///
/// Returns `None` when no conversion was needed, so callers keep the original
/// and the conversion happens at most once.
pub fn normalize_alpha(image: &DynamicImage) -> Option<DynamicImage> {
    if image.color() == ColorType::Rgba8 {
        return None;
    }
    Some(DynamicImage::ImageRgba8(image.to_rgba8()))
}
