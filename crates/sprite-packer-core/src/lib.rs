//! Core library for packing sprite rectangles into fixed-size sheets.
//!
//! - Free space per sheet is a row/column grid with one occupancy flag per cell
//! - Insertion is first-fit: rows top to bottom, the first wide-enough free run wins
//! - The driver sorts once (tallest first by default) and opens sheets until nothing is left
//! - Data model is serde-serializable; text and JSON exporters are provided.
//!
//! Quick example:
//! ```
//! use sprite_packer_core::{PackerConfig, Size, pack_sizes};
//! # fn main() -> sprite_packer_core::Result<()> {
//! let sizes = vec![Size::new(700, 700), Size::new(700, 700)];
//! let cfg = PackerConfig { sheet_width: 1024, sheet_height: 1024, ..Default::default() };
//! let layout = pack_sizes(&sizes, cfg)?;
//! assert_eq!(layout.sheets.len(), 2);
//! # Ok(()) }
//! ```

pub mod config;
pub mod error;
pub mod export;
pub mod listing;
pub mod model;
pub mod packer;
pub mod pipeline;

pub use config::*;
pub use error::*;
pub use export::*;
pub use listing::*;
pub use model::*;
pub use packer::*;
pub use pipeline::*;

/// Convenience prelude for common types and functions.
/// Importing `sprite_packer_core::prelude::*` brings the primary APIs into scope.
pub mod prelude {
    pub use crate::config::{PackerConfig, PackerConfigBuilder, SortOrder};
    pub use crate::error::{InvariantViolation, PackError};
    pub use crate::listing::{parse_listing, to_text_listing};
    pub use crate::model::{Layout, Meta, PackStats, Placement, Rect, Sheet, Size};
    pub use crate::packer::{FreeSpaceGrid, SheetPacker};
    pub use crate::{pack_layout, pack_sizes};
}
