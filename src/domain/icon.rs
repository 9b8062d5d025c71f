// SPDX-License-Identifier: MPL-2.0
//! Icon domain types.

use crate::config::ICON_SIZES;
use std::fmt;

// =============================================================================
// IconSize
// =============================================================================

/// Square edge length of one generated icon, in pixels.
///
/// Only the sizes listed in [`ICON_SIZES`] can be constructed, so every
/// rendered icon is guaranteed to be one of the fixed extension sizes.
///
/// # Example
///
/// ```ignore
/// let size = IconSize::new(48).unwrap();
/// assert_eq!(size.dimensions(), (48, 48));
/// assert_eq!(size.file_name(), "icon-48.png");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IconSize(u32);

impl IconSize {
    /// Returns the icon size for `pixels`, or `None` if it is not part of the icon set.
    #[must_use]
    pub fn new(pixels: u32) -> Option<Self> {
        ICON_SIZES.contains(&pixels).then_some(Self(pixels))
    }

    /// Every icon size, in generation order.
    pub fn all() -> impl Iterator<Item = Self> {
        ICON_SIZES.into_iter().map(Self)
    }

    /// Returns the edge length in pixels.
    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }

    /// Width and height of the rendered icon. Always equal.
    #[must_use]
    pub fn dimensions(self) -> (u32, u32) {
        (self.0, self.0)
    }

    /// File name of the icon inside the output directory.
    #[must_use]
    pub fn file_name(self) -> String {
        format!("icon-{}.png", self.0)
    }
}

impl fmt::Display for IconSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.0, self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_accepts_only_icon_set_sizes() {
        for pixels in ICON_SIZES {
            assert_eq!(IconSize::new(pixels).map(IconSize::value), Some(pixels));
        }
        assert_eq!(IconSize::new(0), None);
        assert_eq!(IconSize::new(64), None);
        assert_eq!(IconSize::new(256), None);
    }

    #[test]
    fn all_yields_sizes_in_generation_order() {
        let values: Vec<u32> = IconSize::all().map(IconSize::value).collect();
        assert_eq!(values, vec![16, 32, 48, 128]);
    }

    #[test]
    fn dimensions_are_square() {
        for size in IconSize::all() {
            let (width, height) = size.dimensions();
            assert_eq!(width, height);
            assert_eq!(width, size.value());
        }
    }

    #[test]
    fn file_name_follows_icon_pattern() {
        let size = IconSize::new(128).unwrap();
        assert_eq!(size.file_name(), "icon-128.png");
    }

    #[test]
    fn display_shows_both_dimensions() {
        let size = IconSize::new(16).unwrap();
        assert_eq!(size.to_string(), "16x16");
    }
}
