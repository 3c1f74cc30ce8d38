// SPDX-License-Identifier: MPL-2.0
//! Screen region a toast is stacked in.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Screen region a toast is placed in.
///
/// Unknown names are kept verbatim as [`Position::Custom`] and get a region
/// of their own, so parsing never fails.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Position {
    TopLeft,
    TopCenter,
    #[default]
    TopRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
    Custom(String),
}

impl Position {
    /// All named positions, in reading order.
    pub const NAMED: [Position; 6] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Returns the value stored in the region container's `position` tag.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Position::TopLeft => "top-left",
            Position::TopCenter => "top-center",
            Position::TopRight => "top-right",
            Position::BottomLeft => "bottom-left",
            Position::BottomCenter => "bottom-center",
            Position::BottomRight => "bottom-right",
            Position::Custom(name) => name,
        }
    }

    #[must_use]
    pub fn is_top(&self) -> bool {
        matches!(
            self,
            Position::TopLeft | Position::TopCenter | Position::TopRight
        )
    }
}

impl From<&str> for Position {
    fn from(value: &str) -> Self {
        match value {
            "top-left" => Position::TopLeft,
            "top-center" => Position::TopCenter,
            "top-right" => Position::TopRight,
            "bottom-left" => Position::BottomLeft,
            "bottom-center" => Position::BottomCenter,
            "bottom-right" => Position::BottomRight,
            other => Position::Custom(other.to_string()),
        }
    }
}

impl From<String> for Position {
    fn from(value: String) -> Self {
        Position::from(value.as_str())
    }
}

impl From<Position> for String {
    fn from(value: Position) -> Self {
        match value {
            Position::Custom(name) => name,
            named => named.as_str().to_string(),
        }
    }
}

impl FromStr for Position {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Position::from(s))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
