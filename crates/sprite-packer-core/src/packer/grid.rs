use crate::error::InvariantViolation;
use crate::model::{Axis, Rect, Size};
use tracing::trace;

/// Row/column decomposition of one sheet with a free/occupied flag per cell.
///
/// Column widths always sum to the sheet width and row heights to the sheet
/// height. Every placed box starts and ends on partition boundaries, so each
/// cell is either fully covered by one box or entirely free.
#[derive(Debug, Clone)]
pub struct FreeSpaceGrid {
    width: u32,
    height: u32,
    columns: Vec<u32>,
    rows: Vec<u32>,
    /// Row-major, `rows.len() * columns.len()` cells.
    occupied: Vec<bool>,
}

impl FreeSpaceGrid {
    /// A single free cell covering the whole sheet.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            columns: vec![width],
            rows: vec![height],
            occupied: vec![false],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Column widths, left to right.
    pub fn columns(&self) -> &[u32] {
        &self.columns
    }

    /// Row heights, top to bottom.
    pub fn rows(&self) -> &[u32] {
        &self.rows
    }

    pub fn is_occupied(&self, row: usize, col: usize) -> bool {
        if row >= self.rows.len() || col >= self.columns.len() {
            return false;
        }
        self.occupied
            .get(row * self.columns.len() + col)
            .copied()
            .unwrap_or(false)
    }

    /// Box covered by cell `(row, col)`.
    pub fn cell_rect(&self, row: usize, col: usize) -> Option<Rect> {
        let w = *self.columns.get(col)?;
        let h = *self.rows.get(row)?;
        let x = self.columns[..col].iter().sum();
        let y = self.rows[..row].iter().sum();
        Some(Rect::new(x, y, w, h))
    }

    /// Total area of unoccupied cells.
    pub fn free_area(&self) -> u64 {
        let mut area = 0u64;
        for (row, &h) in self.rows.iter().enumerate() {
            for (col, &w) in self.columns.iter().enumerate() {
                if !self.is_occupied(row, col) {
                    area += (w as u64) * (h as u64);
                }
            }
        }
        area
    }

    /// Splits the partitions so that a box of `size` anchored at cell
    /// `(row, col)` ends on a column and a row boundary, then recomputes
    /// occupancy from `placed` (which must already include the new box).
    pub fn split_at(
        &mut self,
        row: usize,
        col: usize,
        size: Size,
        placed: &[Rect],
    ) -> Result<(), InvariantViolation> {
        split_partition(&mut self.columns, col, size.w, Axis::Columns)?;
        split_partition(&mut self.rows, row, size.h, Axis::Rows)?;
        trace!(
            row,
            col,
            rows = self.rows.len(),
            columns = self.columns.len(),
            "grid split"
        );
        self.recompute_occupancy(placed);
        self.check()
    }

    /// Marks every cell whose box intersects any of `placed`. Full rescan on
    /// each call: `O(rows * columns * placed)`.
    fn recompute_occupancy(&mut self, placed: &[Rect]) {
        let cols = self.columns.len();
        self.occupied.clear();
        self.occupied.resize(self.rows.len() * cols, false);
        let mut y = 0;
        for (row, &h) in self.rows.iter().enumerate() {
            let mut x = 0;
            for (col, &w) in self.columns.iter().enumerate() {
                let cell = Rect::new(x, y, w, h);
                self.occupied[row * cols + col] = placed.iter().any(|p| p.intersects(&cell));
                x += w;
            }
            y += h;
        }
    }

    /// Verifies the partition sums, that no entry is zero, and the occupancy size.
    pub fn check(&self) -> Result<(), InvariantViolation> {
        check_partition(&self.columns, self.width, Axis::Columns)?;
        check_partition(&self.rows, self.height, Axis::Rows)?;
        let expected = self.rows.len() * self.columns.len();
        if self.occupied.len() != expected {
            return Err(InvariantViolation::OccupancySize {
                rows: self.rows.len(),
                columns: self.columns.len(),
                actual: self.occupied.len(),
            });
        }
        Ok(())
    }
}

fn check_partition(list: &[u32], expected: u32, axis: Axis) -> Result<(), InvariantViolation> {
    if let Some(index) = list.iter().position(|&v| v == 0) {
        return Err(InvariantViolation::ZeroPartition { axis, index });
    }
    let sum: u64 = list.iter().map(|&v| v as u64).sum();
    if sum != expected as u64 {
        return Err(InvariantViolation::PartitionSum { axis, sum, expected });
    }
    Ok(())
}

/// Makes a boundary fall exactly `required` units after the start of
/// `list[index]`.
///
/// - `required == list[index]`: nothing to do.
/// - `required < list[index]`: `required` is inserted at `index` and the
///   original entry (now at `index + 1`) keeps the remainder.
/// - `required > list[index]`: whole entries are consumed until the deficit fits
///   one; that entry is split like the case above unless the deficit matches it
///   exactly.
///
/// Running past the last entry means the caller asked for more space than the
/// partition holds and is reported as [`InvariantViolation::PartitionOverrun`].
pub fn split_partition(
    list: &mut Vec<u32>,
    index: usize,
    required: u32,
    axis: Axis,
) -> Result<(), InvariantViolation> {
    let Some(&current) = list.get(index) else {
        return Err(InvariantViolation::PartitionIndex {
            axis,
            index,
            len: list.len(),
        });
    };
    if required == 0 {
        return Err(InvariantViolation::ZeroPartition { axis, index });
    }

    let (at, rest) = if required > current {
        let mut rest = required - current;
        let mut i = index + 1;
        loop {
            match list.get(i) {
                Some(&entry) if rest > entry => {
                    rest -= entry;
                    i += 1;
                }
                Some(_) => break,
                None => {
                    return Err(InvariantViolation::PartitionOverrun {
                        axis,
                        index,
                        deficit: rest,
                    });
                }
            }
        }
        (i, rest)
    } else {
        (index, required)
    };

    if rest < list[at] {
        list[at] -= rest;
        list.insert(at, rest);
    }
    Ok(())
}
