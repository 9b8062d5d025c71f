// SPDX-License-Identifier: MPL-2.0
//! Icon set generation.
//!
//! Loads one source image, normalizes it to RGBA once, then renders and saves
//! one PNG per [`IconSize`] in order. Any failure aborts the run immediately;
//! icons already written stay on disk.

use crate::config::ICON_DIR;
use crate::domain::icon::IconSize;
use crate::error::Result;
use crate::media::{load_source_image, normalize_alpha, render_icon, save_png};
use crate::paths;
use image_rs::GenericImageView;
use std::path::{Path, PathBuf};

/// One icon written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedIcon {
    pub size: IconSize,
    pub path: PathBuf,
}

/// Generate the full icon set from `source_path` into [`ICON_DIR`], relative
/// to the current working directory.
pub fn create_icons(source_path: &Path) -> Result<()> {
    create_icons_in(source_path, Path::new(ICON_DIR)).map(|_| ())
}

/// Generate the full icon set from `source_path` into `icon_dir`.
///
/// `icon_dir` must already exist. Progress is reported on stdout as each
/// step completes.
pub fn create_icons_in(source_path: &Path, icon_dir: &Path) -> Result<Vec<CreatedIcon>> {
    let mut img = load_source_image(source_path)?;
    println!("✓ Loaded source image: {}", source_path.display());
    let (width, height) = img.dimensions();
    println!("  Original size: ({}, {})", width, height);

    // Wide RGBA sources are narrowed to 8 bits silently; they already carry alpha.
    let had_alpha = img.color().has_alpha();
    if let Some(converted) = normalize_alpha(&img) {
        img = converted;
        if !had_alpha {
            println!("  Converted to RGBA mode");
        }
    }

    let mut created = Vec::new();
    for size in IconSize::all() {
        let rendered = render_icon(&img, size);
        let output_path = paths::icon_path(icon_dir, size);
        save_png(&rendered, &output_path)?;
        println!("✓ Created {} ({})", output_path.display(), size);
        created.push(CreatedIcon {
            size,
            path: output_path,
        });
    }

    println!("\n✓ All icons created successfully!");
    println!("  Location: {}/", paths::absolute_dir(icon_dir)?.display());

    Ok(created)
}
