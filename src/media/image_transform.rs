// SPDX-License-Identifier: MPL-2.0
//! Square icon rendering and PNG persistence.

use crate::domain::icon::IconSize;
use crate::error::{Error, Result};
use image_rs::{imageops::FilterType, DynamicImage, ImageFormat};
use std::path::Path;

/// Resize `image` to a `size`x`size` square using a high-quality filter.
///
/// Non-square sources are stretched, never cropped or padded.
pub fn render_icon(image: &DynamicImage, size: IconSize) -> DynamicImage {
    let (width, height) = size.dimensions();
    image.resize_exact(width, height, FilterType::Lanczos3)
}

/// Encode `image` as PNG at `path`, overwriting any existing file.
///
/// The parent directory must already exist.
pub fn save_png(image: &DynamicImage, path: &Path) -> Result<()> {
    image
        .save_with_format(path, ImageFormat::Png)
        .map_err(Error::from)
}
