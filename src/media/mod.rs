// SPDX-License-Identifier: MPL-2.0
//! Source image decoding and icon rendering.

pub mod image;
pub mod image_transform;

// Re-export commonly used types
pub use image::{load_source_image, normalize_alpha};
pub use image_transform::{render_icon, save_png};
