use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Orderings applied to the input once, before the first sheet is opened.
///
/// Every order breaks ties by the other dimension (descending), then by input
/// position, so layouts are deterministic for duplicate sizes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Tallest first. Fills rows the first-fit scan opens with the tallest items.
    #[default]
    HeightDesc,
    AreaDesc,
    MaxSideDesc,
    WidthDesc,
    /// Keep input order.
    None,
}

impl FromStr for SortOrder {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "height_desc" => Ok(Self::HeightDesc),
            "area_desc" => Ok(Self::AreaDesc),
            "max_side_desc" => Ok(Self::MaxSideDesc),
            "width_desc" => Ok(Self::WidthDesc),
            "none" => Ok(Self::None),
            _ => Err(()),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SortOrder::HeightDesc => "height_desc",
            SortOrder::AreaDesc => "area_desc",
            SortOrder::MaxSideDesc => "max_side_desc",
            SortOrder::WidthDesc => "width_desc",
            SortOrder::None => "none",
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PackerConfig {
    /// Sheet width in pixels.
    #[serde(default = "default_sheet_dim")]
    pub sheet_width: u32,
    /// Sheet height in pixels.
    #[serde(default = "default_sheet_dim")]
    pub sheet_height: u32,
    #[serde(default)]
    pub sort_order: SortOrder,
}

impl Default for PackerConfig {
    fn default() -> Self {
        Self {
            sheet_width: default_sheet_dim(),
            sheet_height: default_sheet_dim(),
            sort_order: SortOrder::default(),
        }
    }
}

impl PackerConfig {
    /// Validates the configuration parameters.
    ///
    /// Returns an error if either sheet dimension is zero.
    pub fn validate(&self) -> crate::error::Result<()> {
        use crate::error::PackError;

        if self.sheet_width == 0 || self.sheet_height == 0 {
            return Err(PackError::InvalidDimensions {
                width: self.sheet_width,
                height: self.sheet_height,
            });
        }
        Ok(())
    }

    /// Create a fluent builder for `PackerConfig`.
    pub fn builder() -> PackerConfigBuilder {
        PackerConfigBuilder::new()
    }
}

fn default_sheet_dim() -> u32 {
    1024
}

/// Builder for `PackerConfig` for ergonomic construction.
#[derive(Debug, Default, Clone)]
pub struct PackerConfigBuilder {
    cfg: PackerConfig,
}

impl PackerConfigBuilder {
    pub fn new() -> Self {
        Self {
            cfg: PackerConfig::default(),
        }
    }
    pub fn with_sheet_size(mut self, w: u32, h: u32) -> Self {
        self.cfg.sheet_width = w;
        self.cfg.sheet_height = h;
        self
    }
    pub fn sort_order(mut self, v: SortOrder) -> Self {
        self.cfg.sort_order = v;
        self
    }
    pub fn build(self) -> PackerConfig {
        self.cfg
    }
}
