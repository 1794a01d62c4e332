//! Fixed display palette for log records.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the seven swatch colors a record can carry.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum DisplayColor {
    Green,
    Blue,
    Cyan,
    Orange,
    Red,
    Grey,
    Purple,
}

impl DisplayColor {
    /// Used for anything that cannot be mapped to a known kind.
    pub const FALLBACK: DisplayColor = DisplayColor::Grey;

    /// Packed `0xAARRGGBB` value.
    pub fn argb(&self) -> u32 {
        match self {
            Self::Green => 0xFF4C_AF50,
            Self::Blue => 0xFF21_96F3,
            Self::Cyan => 0xFF00_BCD4,
            Self::Orange => 0xFFFF_9800,
            Self::Red => 0xFFF4_4336,
            Self::Grey => 0xFF61_6161,
            Self::Purple => 0xFF9C_27B0,
        }
    }

    /// `#RRGGBB`, alpha dropped.
    pub fn hex(&self) -> String {
        format!("#{:06X}", self.argb() & 0x00FF_FFFF)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Cyan => "cyan",
            Self::Orange => "orange",
            Self::Red => "red",
            Self::Grey => "grey",
            Self::Purple => "purple",
        }
    }
}

impl fmt::Display for DisplayColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
