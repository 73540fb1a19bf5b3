//! Presenter modes and the layout-derivation table.

use crate::model::Alignment;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Device class the screen is laid out for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DeviceMode {
    /// Phone-sized: centered, two subtitle lines.
    #[default]
    Compact,
    /// Tablet-sized: leading, three subtitle lines.
    Regular,
}

/// Which subtitle text is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ContentMode {
    /// [`SubtitleTexts::short`](crate::state::SubtitleTexts::short).
    Short,
    /// [`SubtitleTexts::long`](crate::state::SubtitleTexts::long).
    #[default]
    Long,
}

/// Wrap parameters applied to one node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WrapRule {
    /// 0 = unlimited.
    pub max_lines: u32,
    /// Stack or text alignment.
    pub alignment: Alignment,
}

/// Result of the layout-derivation table for one device mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutRules {
    /// Rule for the root node.
    pub root: WrapRule,
    /// Rule for the subtitle.
    pub subtitle: WrapRule,
}

impl DeviceMode {
    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            DeviceMode::Compact => DeviceMode::Regular,
            DeviceMode::Regular => DeviceMode::Compact,
        }
    }

    /// Layout-derivation table (pure function of the mode).
    pub fn layout_rules(self) -> LayoutRules {
        match self {
            DeviceMode::Compact => LayoutRules {
                root: WrapRule {
                    max_lines: 0,
                    alignment: Alignment::Center,
                },
                subtitle: WrapRule {
                    max_lines: 2,
                    alignment: Alignment::Center,
                },
            },
            DeviceMode::Regular => LayoutRules {
                root: WrapRule {
                    max_lines: 0,
                    alignment: Alignment::Leading,
                },
                subtitle: WrapRule {
                    max_lines: 3,
                    alignment: Alignment::Leading,
                },
            },
        }
    }

    /// Lowercase name, as accepted by `FromStr`.
    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceMode::Compact => "compact",
            DeviceMode::Regular => "regular",
        }
    }
}

impl ContentMode {
    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            ContentMode::Short => ContentMode::Long,
            ContentMode::Long => ContentMode::Short,
        }
    }

    /// Lowercase name, as accepted by `FromStr`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentMode::Short => "short",
            ContentMode::Long => "long",
        }
    }
}

impl fmt::Display for DeviceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ContentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for an unrecognized mode name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown mode '{0}'")]
pub struct UnknownMode(pub String);

impl FromStr for DeviceMode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "compact" => Ok(DeviceMode::Compact),
            "regular" => Ok(DeviceMode::Regular),
            _ => Err(UnknownMode(s.to_string())),
        }
    }
}

impl FromStr for ContentMode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "short" => Ok(ContentMode::Short),
            "long" => Ok(ContentMode::Long),
            _ => Err(UnknownMode(s.to_string())),
        }
    }
}
