use crate::model::{Axis, Rect};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PackError {
    #[error("Invalid size token `{token}`: {reason}")]
    Parse { token: String, reason: String },
    #[error("Rectangle #{index} ({width}x{height}) has a zero dimension")]
    EmptyRectangle { index: usize, width: u32, height: u32 },
    #[error(
        "Rectangle #{index} ({width}x{height}) does not fit a {sheet_width}x{sheet_height} sheet"
    )]
    OversizedRectangle {
        index: usize,
        width: u32,
        height: u32,
        sheet_width: u32,
        sheet_height: u32,
    },
    #[error("Invalid sheet dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
    #[error("Internal invariant violated: {0}")]
    Invariant(#[from] InvariantViolation),
}

/// Logic errors inside the packer. Any of these means a bug, not bad input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    #[error("{axis} split at index {index} ran past the end with {deficit} units left")]
    PartitionOverrun { axis: Axis, index: usize, deficit: u32 },
    #[error("{axis} split index {index} is outside a partition of {len} entries")]
    PartitionIndex { axis: Axis, index: usize, len: usize },
    #[error("{axis} partition sums to {sum}, expected {expected}")]
    PartitionSum { axis: Axis, sum: u64, expected: u32 },
    #[error("{axis} partition holds a zero-sized entry at index {index}")]
    ZeroPartition { axis: Axis, index: usize },
    #[error("occupancy has {actual} cells, expected {rows}x{columns}")]
    OccupancySize {
        rows: usize,
        columns: usize,
        actual: usize,
    },
    #[error("placement {new:?} overlaps {existing:?}")]
    Overlap { new: Rect, existing: Rect },
    #[error("placement {rect:?} leaves the {width}x{height} sheet")]
    OutOfBounds { rect: Rect, width: u32, height: u32 },
    #[error("a fresh sheet accepted none of {pending} pending rectangles")]
    EmptySheet { pending: usize },
}

pub type Result<T> = std::result::Result<T, PackError>;
