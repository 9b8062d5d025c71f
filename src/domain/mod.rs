// SPDX-License-Identifier: MPL-2.0
//! Domain layer - pure value types with no external dependencies.
//!
//! # Modules
//!
//! - [`icon`]: Icon set types ([`IconSize`](icon::IconSize))

pub mod icon;
