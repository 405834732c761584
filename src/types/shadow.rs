//! Shadow points.
//!
//! One shadow entry renders one star via the `box-shadow` mechanism:
//! `{x}px {y}px {colour}`.

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, StarfieldError};

use super::Colour;

/// Side length of the square star field, in pixels.
///
/// Coordinates are sampled from `0..=FIELD_EXTENT`; the `:after` copy of each
/// layer sits `FIELD_EXTENT` below it and the animation scrolls by the same
/// distance, so the loop is seamless.
pub const FIELD_EXTENT: u32 = 2000;

/// A single star position with its colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShadowPoint {
    pub x: u32,
    pub y: u32,
    pub colour: Colour,
}

impl ShadowPoint {
    pub fn new(x: u32, y: u32, colour: Colour) -> Self {
        Self { x, y, colour }
    }
}

impl fmt::Display for ShadowPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}px {}px {}", self.x, self.y, self.colour)
    }
}

impl FromStr for ShadowPoint {
    type Err = StarfieldError;

    /// Parse a `<int>px <int>px <colour>` entry with both offsets inside the field.
    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.split_whitespace().collect();
        let [x, y, colour] = parts.as_slice() else {
            return Err(StarfieldError::Parse {
                message: format!("Invalid shadow entry: '{}'", s.trim()),
                help: Some("Expected '<x>px <y>px <colour>'".to_string()),
            });
        };

        Ok(Self {
            x: parse_offset(x)?,
            y: parse_offset(y)?,
            colour: colour.parse()?,
        })
    }
}

fn parse_offset(token: &str) -> Result<u32> {
    let value = token
        .strip_suffix("px")
        .filter(|n| !n.is_empty() && n.bytes().all(|b| b.is_ascii_digit()))
        .and_then(|n| n.parse::<u32>().ok())
        .ok_or_else(|| StarfieldError::Parse {
            message: format!("Invalid offset: '{}'", token),
            help: Some("Offsets are non-negative integers with a px unit".to_string()),
        })?;

    if value > FIELD_EXTENT {
        return Err(StarfieldError::Parse {
            message: format!("Offset {}px is outside the star field", value),
            help: Some(format!("Offsets range from 0px to {}px", FIELD_EXTENT)),
        });
    }

    Ok(value)
}
