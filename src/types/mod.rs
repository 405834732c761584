//! Core domain types for starfield.
//!
//! - `Colour` - RGBA colour values rendered as CSS hex
//! - `Tier` - Star-size classes with their counts and colours
//! - `ShadowPoint` - A single star as a `box-shadow` entry

mod colour;
mod shadow;
mod tier;

pub use colour::Colour;
pub use shadow::{ShadowPoint, FIELD_EXTENT};
pub use tier::{Tier, TierKind};
