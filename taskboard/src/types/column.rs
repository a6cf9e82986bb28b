//! Column type and its colour presets

use super::ids::ColumnId;
use crate::error::BoardError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A column defines a workflow stage ("To Do", "Done", ...)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Column {
    pub id: ColumnId,
    pub title: String,
    #[serde(default)]
    pub color: ColumnColor,
    /// Display position among all columns, contiguous from zero
    pub order: usize,
}

impl Column {
    /// Create a column with a fresh id. `order` is assigned on insertion.
    pub fn new(title: impl Into<String>, color: ColumnColor) -> Self {
        Self::with_id(ColumnId::new(), title, color)
    }

    /// Create a column with a caller-chosen id
    pub fn with_id(id: impl Into<ColumnId>, title: impl Into<String>, color: ColumnColor) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            color,
            order: 0,
        }
    }
}

/// The preset colours a column can carry
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnColor {
    #[default]
    Blue,
    Emerald,
    Purple,
    Amber,
    Rose,
    Gray,
}

impl ColumnColor {
    pub const ALL: [ColumnColor; 6] = [
        Self::Blue,
        Self::Emerald,
        Self::Purple,
        Self::Amber,
        Self::Rose,
        Self::Gray,
    ];

    /// Lowercase slug, as used on the wire
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::Emerald => "emerald",
            Self::Purple => "purple",
            Self::Amber => "amber",
            Self::Rose => "rose",
            Self::Gray => "gray",
        }
    }

    /// Display label
    pub fn label(self) -> &'static str {
        match self {
            Self::Blue => "Blue",
            Self::Emerald => "Emerald",
            Self::Purple => "Purple",
            Self::Amber => "Amber",
            Self::Rose => "Rose",
            Self::Gray => "Gray",
        }
    }

    /// RGB swatch (6-char hex without `#`) for renderers that want one
    pub fn hex(self) -> &'static str {
        match self {
            Self::Blue => "3b82f6",
            Self::Emerald => "10b981",
            Self::Purple => "a855f7",
            Self::Amber => "f59e0b",
            Self::Rose => "f43f5e",
            Self::Gray => "6b7280",
        }
    }
}

impl fmt::Display for ColumnColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColumnColor {
    type Err = BoardError;

    /// Accepts the slug in any case, and the `bg-<name>-500` class names
    /// older boards stored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        let name = lowered
            .strip_prefix("bg-")
            .and_then(|rest| rest.strip_suffix("-500"))
            .unwrap_or(&lowered);

        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == name)
            .ok_or_else(|| {
                BoardError::invalid_value(
                    "color",
                    format!(
                        "'{}' is not one of {}",
                        s,
                        Self::ALL.map(|c| c.as_str()).join(", ")
                    ),
                )
            })
    }
}
