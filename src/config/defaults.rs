// SPDX-License-Identifier: MPL-2.0
//! Centralized constants for icon generation.
//!
//! The icon set and output location are fixed. They are deliberately not
//! exposed as runtime settings.

// ==========================================================================
// Icon Set
// ==========================================================================

/// Square edge lengths, in pixels, of every generated icon, in generation order.
pub const ICON_SIZES: [u32; 4] = [16, 32, 48, 128];

/// Output directory, relative to the current working directory.
pub const ICON_DIR: &str = "icons";

// ==========================================================================
// Console
// ==========================================================================

/// Title printed before any work starts.
pub const BANNER_TITLE: &str = "insidebar.ai Icon Updater";

/// Width of the `=` rule printed under the banner title.
pub const BANNER_RULE_WIDTH: usize = 50;
