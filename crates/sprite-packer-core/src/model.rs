use serde::{Deserialize, Serialize};
use std::fmt;

/// Width/height of an unplaced rectangle (pixels).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Size {
    pub w: u32,
    pub h: u32,
}

impl Size {
    pub fn new(w: u32, h: u32) -> Self {
        Self { w, h }
    }
    pub fn area(&self) -> u64 {
        (self.w as u64) * (self.h as u64)
    }
    pub fn is_empty(&self) -> bool {
        self.w == 0 || self.h == 0
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.w, self.h)
    }
}

/// Axis-aligned box inside a sheet. `x,y` is top-left; covers `[x, x+w) x [y, y+h)`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl Rect {
    pub fn new(x: u32, y: u32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }
    pub fn at(x: u32, y: u32, size: Size) -> Self {
        Self::new(x, y, size.w, size.h)
    }
    /// Exclusive right edge (`x + w`).
    pub fn right(&self) -> u32 {
        self.x + self.w
    }
    /// Exclusive bottom edge (`y + h`).
    pub fn bottom(&self) -> u32 {
        self.y + self.h
    }
    pub fn size(&self) -> Size {
        Size::new(self.w, self.h)
    }
    /// Half-open overlap test on both axes; touching edges do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
    /// True if `self` lies within a `width x height` sheet anchored at the origin.
    pub fn fits_within(&self, width: u32, height: u32) -> bool {
        self.right() <= width && self.bottom() <= height
    }
}

/// Which partition list of a free-space grid an operation touches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Columns,
    Rows,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Columns => f.write_str("column"),
            Axis::Rows => f.write_str("row"),
        }
    }
}

/// A rectangle placed within a sheet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Placement<K = usize> {
    /// Caller-supplied key (input index when packing bare sizes).
    pub key: K,
    /// Placed box; its size is the input size, unchanged.
    pub rect: Rect,
}

/// One fixed-size output sheet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sheet<K = usize> {
    /// Zero-based index; listings print `id + 1`.
    pub id: usize,
    pub width: u32,
    pub height: u32,
    /// Placements in the order they were made.
    pub placements: Vec<Placement<K>>,
}

/// Run-level metadata carried alongside the sheets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Meta {
    /// Schema version for JSON exports; current: "1".
    pub schema_version: String,
    pub app: String,
    pub version: String,
    pub sheet_width: u32,
    pub sheet_height: u32,
    pub sort_order: String,
}

/// Result of a packing run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Layout<K = usize> {
    pub sheets: Vec<Sheet<K>>,
    pub meta: Meta,
}

/// Statistics about sheet usage.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PackStats {
    pub num_sheets: usize,
    pub num_placements: usize,
    /// Sum of `width * height` over all sheets.
    pub total_sheet_area: u64,
    /// Sum of placed rectangle areas.
    pub used_area: u64,
    /// `used_area / total_sheet_area` (0.0 to 1.0).
    pub occupancy: f64,
}

impl<K> Layout<K> {
    pub fn num_placements(&self) -> usize {
        self.sheets.iter().map(|s| s.placements.len()).sum()
    }

    /// Iterates `(sheet index, placement)` across all sheets.
    pub fn placements(&self) -> impl Iterator<Item = (usize, &Placement<K>)> {
        self.sheets
            .iter()
            .flat_map(|s| s.placements.iter().map(move |p| (s.id, p)))
    }

    pub fn stats(&self) -> PackStats {
        let mut total_sheet_area = 0u64;
        let mut used_area = 0u64;
        let mut num_placements = 0;
        for sheet in &self.sheets {
            total_sheet_area += (sheet.width as u64) * (sheet.height as u64);
            for p in &sheet.placements {
                num_placements += 1;
                used_area += p.rect.size().area();
            }
        }
        let occupancy = if total_sheet_area > 0 {
            used_area as f64 / total_sheet_area as f64
        } else {
            0.0
        };
        PackStats {
            num_sheets: self.sheets.len(),
            num_placements,
            total_sheet_area,
            used_area,
            occupancy,
        }
    }
}

impl PackStats {
    /// Returns a human-readable summary of the statistics.
    pub fn summary(&self) -> String {
        format!(
            "Sheets: {}, Placements: {}, Occupancy: {:.2}%, Total Area: {} px², Used Area: {} px²",
            self.num_sheets,
            self.num_placements,
            self.occupancy * 100.0,
            self.total_sheet_area,
            self.used_area,
        )
    }

    pub fn wasted_area(&self) -> u64 {
        self.total_sheet_area.saturating_sub(self.used_area)
    }

    /// Wasted space as a percentage (0.0 to 100.0).
    pub fn waste_percentage(&self) -> f64 {
        if self.total_sheet_area > 0 {
            (self.wasted_area() as f64 / self.total_sheet_area as f64) * 100.0
        } else {
            0.0
        }
    }
}
