// SPDX-License-Identifier: MPL-2.0
//! Compile-time configuration.
//!
//! There is no settings file and no environment lookup: everything the tool
//! needs is a named constant in [`defaults`].

pub mod defaults;

pub use defaults::{BANNER_RULE_WIDTH, BANNER_TITLE, ICON_DIR, ICON_SIZES};
