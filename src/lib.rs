// SPDX-License-Identifier: MPL-2.0
//! `icon_updater` regenerates the browser-extension icon set from one source
//! image.
//!
//! The source is decoded once, normalized to RGBA, and written as square PNGs
//! at 16, 32, 48 and 128 pixels into `icons/icon-<size>.png`.

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod icons;
pub mod media;
pub mod paths;

pub use error::{Error, Result};
pub use icons::{create_icons, create_icons_in, CreatedIcon};
