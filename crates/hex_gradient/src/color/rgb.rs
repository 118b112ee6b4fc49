use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::hex::{self, HexError};

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Convex combination weighted `pct` towards `self` and `1 - pct` towards `other`.
    pub fn blend(self, other: Rgb, pct: f64) -> Rgb {
        Rgb {
            r: mix(self.r, other.r, pct),
            g: mix(self.g, other.g, pct),
            b: mix(self.b, other.b, pct),
        }
    }
}

/// Floored channel interpolation.
///
/// Works in plain `f64` arithmetic, so `0 * 0.8 + 255 * (1 - 0.8)` floors to
/// 50, not 51.
pub fn mix(a: u8, b: u8, pct: f64) -> u8 {
    let value = f64::from(a) * pct + f64::from(b) * (1.0 - pct);
    value.floor().clamp(0.0, 255.0) as u8
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::to_hex(*self))
    }
}

impl FromStr for Rgb {
    type Err = HexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        hex::parse_hex(s)
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(serde::de::Error::custom)
    }
}
