use super::grid::FreeSpaceGrid;
use crate::error::{InvariantViolation, Result};
use crate::model::{Placement, Rect, Size};
use tracing::trace;

/// Where a first-fit scan found room: the cell the box is anchored to and the
/// box's origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Slot {
    row: usize,
    col: usize,
    x: u32,
    y: u32,
}

/// Packs rectangles into one sheet with a first-fit scan over a [`FreeSpaceGrid`].
pub struct SheetPacker {
    grid: FreeSpaceGrid,
    used: Vec<Rect>,
}

impl SheetPacker {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            grid: FreeSpaceGrid::new(width, height),
            used: Vec::new(),
        }
    }

    pub fn grid(&self) -> &FreeSpaceGrid {
        &self.grid
    }

    /// Boxes placed so far, in placement order.
    pub fn placed(&self) -> &[Rect] {
        &self.used
    }

    pub fn free_area(&self) -> u64 {
        self.grid.free_area()
    }

    /// Rows are scanned top to bottom; rows lower than `size.h` are skipped.
    /// Within a row, the first run of contiguous free columns at least
    /// `size.w` wide wins and the box is anchored at the run's left edge.
    fn find_slot(&self, size: Size) -> Option<Slot> {
        let rows = self.grid.rows();
        let columns = self.grid.columns();
        let mut y = 0;
        for (row, &row_h) in rows.iter().enumerate() {
            if row_h >= size.h {
                let mut x = 0;
                // (start column, start x, accumulated width)
                let mut run: Option<(usize, u32, u32)> = None;
                for (col, &col_w) in columns.iter().enumerate() {
                    if self.grid.is_occupied(row, col) {
                        run = None;
                    } else {
                        let (start_col, start_x, run_w) = match run {
                            Some((c, sx, w)) => (c, sx, w + col_w),
                            None => (col, x, col_w),
                        };
                        if run_w >= size.w {
                            return Some(Slot {
                                row,
                                col: start_col,
                                x: start_x,
                                y,
                            });
                        }
                        run = Some((start_col, start_x, run_w));
                    }
                    x += col_w;
                }
            }
            y += row_h;
        }
        None
    }

    /// Returns true if `size` fits somewhere in the remaining free space.
    pub fn can_place(&self, size: Size) -> bool {
        self.find_slot(size).is_some()
    }

    /// Places `size` at the first fitting position and returns its box, or
    /// `None` when the sheet has no room for it.
    pub fn try_place(&mut self, size: Size) -> Result<Option<Rect>> {
        let Some(slot) = self.find_slot(size) else {
            return Ok(None);
        };
        let rect = Rect::at(slot.x, slot.y, size);
        if !rect.fits_within(self.grid.width(), self.grid.height()) {
            return Err(InvariantViolation::OutOfBounds {
                rect,
                width: self.grid.width(),
                height: self.grid.height(),
            }
            .into());
        }
        if let Some(existing) = self.used.iter().find(|u| u.intersects(&rect)) {
            return Err(InvariantViolation::Overlap {
                new: rect,
                existing: *existing,
            }
            .into());
        }
        self.used.push(rect);
        self.grid.split_at(slot.row, slot.col, size, &self.used)?;
        trace!(x = rect.x, y = rect.y, w = rect.w, h = rect.h, "placed");
        Ok(Some(rect))
    }

    /// Makes one pass over `pending`, placing what fits and removing it.
    ///
    /// Items that do not fit stay in `pending` in their original order and are
    /// not retried during this pass. Returns the placements made, in order.
    pub fn consume_many<K>(&mut self, pending: &mut Vec<(K, Size)>) -> Result<Vec<Placement<K>>> {
        let mut placements = Vec::new();
        let mut i = 0;
        while i < pending.len() {
            match self.try_place(pending[i].1)? {
                Some(rect) => {
                    let (key, _) = pending.remove(i);
                    placements.push(Placement { key, rect });
                }
                None => i += 1,
            }
        }
        Ok(placements)
    }
}
