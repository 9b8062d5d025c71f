// SPDX-License-Identifier: MPL-2.0
//! Path handling for the source image and generated icons.
//!
//! # Home Expansion
//!
//! A leading `~` in the source path is replaced by the user's home directory,
//! resolved in the following priority order:
//! 1. **Explicit override** - parameter to [`expand_home_with_override`] (for tests)
//! 2. **Platform default** - via `dirs` crate
//!
//! Only the bare `~` and `~/...` forms are expanded. `~user/...` and paths
//! without a leading `~` are returned unchanged, as is everything when no home
//! directory can be determined.

use crate::domain::icon::IconSize;
use crate::error::Result;
use std::path::{Path, PathBuf, MAIN_SEPARATOR};

/// Expands a leading `~` to the current user's home directory.
pub fn expand_home(input: &str) -> PathBuf {
    expand_home_with_override(input, None)
}

/// Expands a leading `~` using `home_override` instead of the platform home
/// directory when it is `Some`.
pub fn expand_home_with_override(input: &str, home_override: Option<PathBuf>) -> PathBuf {
    let Some(rest) = input.strip_prefix('~') else {
        return PathBuf::from(input);
    };

    let rest = if rest.is_empty() {
        rest
    } else if let Some(stripped) = rest.strip_prefix(['/', MAIN_SEPARATOR]) {
        stripped
    } else {
        // `~user` form
        return PathBuf::from(input);
    };

    match home_override.or_else(dirs::home_dir) {
        Some(home) if rest.is_empty() => home,
        Some(home) => home.join(rest),
        None => PathBuf::from(input),
    }
}

/// Path of the PNG written for `size` inside `icon_dir`.
pub fn icon_path(icon_dir: &Path, size: IconSize) -> PathBuf {
    icon_dir.join(size.file_name())
}

/// Absolute form of `dir` for operator feedback.
///
/// Relative paths are joined onto the current working directory without
/// touching the filesystem or resolving symlinks.
pub fn absolute_dir(dir: &Path) -> Result<PathBuf> {
    Ok(std::path::absolute(dir)?)
}
