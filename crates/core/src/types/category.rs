//! Product category axis.

use serde::{Deserialize, Serialize};

/// Product category.
///
/// The demo catalog is split along a single `men`/`women` axis; query
/// parameters carry the lowercase form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Men,
    Women,
}

impl Category {
    /// The lowercase wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Men => "men",
            Self::Women => "women",
        }
    }

    /// The opposite category.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Men => Self::Women,
            Self::Women => Self::Men,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "men" => Ok(Self::Men),
            "women" => Ok(Self::Women),
            _ => Err(format!("invalid category: {s}")),
        }
    }
}
