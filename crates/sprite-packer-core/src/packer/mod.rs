//! Per-sheet packing: the free-space grid and the first-fit sheet packer.

pub mod grid;
pub mod sheet;

pub use grid::{FreeSpaceGrid, split_partition};
pub use sheet::SheetPacker;
