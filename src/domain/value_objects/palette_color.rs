use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::domain::errors::ValidationError;

/// Closed palette a service card can be drawn in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum PaletteColor {
    Emerald,
    Rose,
    Violet,
    Blue,
}

/// Style bundle resolved from a palette color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceStyle {
    /// Classes for the card background and border
    pub card: &'static str,
    /// Classes for the badge in the card header
    pub badge: &'static str,
}

impl PaletteColor {
    pub const ALL: [PaletteColor; 4] = [
        PaletteColor::Emerald,
        PaletteColor::Rose,
        PaletteColor::Violet,
        PaletteColor::Blue,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PaletteColor::Emerald => "emerald",
            PaletteColor::Rose => "rose",
            PaletteColor::Violet => "violet",
            PaletteColor::Blue => "blue",
        }
    }

    /// Resolve the style bundle for this color
    pub fn style(self) -> ServiceStyle {
        match self {
            PaletteColor::Emerald => ServiceStyle {
                card: "from-emerald-50 to-emerald-100 border-emerald-200",
                badge: "bg-emerald-100 text-emerald-800",
            },
            PaletteColor::Rose => ServiceStyle {
                card: "from-rose-50 to-rose-100 border-rose-200",
                badge: "bg-rose-100 text-rose-800",
            },
            PaletteColor::Violet => ServiceStyle {
                card: "from-violet-50 to-violet-100 border-violet-200",
                badge: "bg-violet-100 text-violet-800",
            },
            PaletteColor::Blue => ServiceStyle {
                card: "from-blue-50 to-blue-100 border-blue-200",
                badge: "bg-blue-100 text-blue-800",
            },
        }
    }
}

impl FromStr for PaletteColor {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        PaletteColor::ALL
            .into_iter()
            .find(|color| color.as_str() == value)
            .ok_or_else(|| ValidationError::UnknownPaletteColor(value.to_string()))
    }
}

impl TryFrom<String> for PaletteColor {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PaletteColor> for &'static str {
    fn from(color: PaletteColor) -> Self {
        color.as_str()
    }
}

impl std::fmt::Display for PaletteColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
