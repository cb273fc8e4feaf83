use crate::config::{PackerConfig, SortOrder};
use crate::error::{InvariantViolation, PackError, Result};
use crate::model::{Layout, Meta, Sheet, Size};
use crate::packer::SheetPacker;
use tracing::{debug, instrument};

#[instrument(skip_all, fields(count = sizes.len()))]
/// Packs bare sizes into sheets. Each placement's key is the size's index in `sizes`.
pub fn pack_sizes(sizes: &[Size], cfg: PackerConfig) -> Result<Layout<usize>> {
    let items = sizes.iter().copied().enumerate().collect();
    pack_layout(items, cfg)
}

#[instrument(skip_all, fields(count = items.len()))]
/// Packs keyed sizes into as few `sheet_width x sheet_height` sheets as the
/// first-fit heuristic manages.
///
/// Notes:
/// - Every item is checked before packing starts: zero dimensions and sizes
///   larger than the sheet are rejected, so the sheet loop always terminates.
/// - Items are ordered once by `cfg.sort_order`; the sort is stable.
/// - Each sheet gets a single pass over the items still pending.
pub fn pack_layout<K>(items: Vec<(K, Size)>, cfg: PackerConfig) -> Result<Layout<K>> {
    cfg.validate()?;
    check_sizes(items.iter().map(|(_, s)| *s), &cfg)?;

    let mut pending = items;
    sort_pending(&mut pending, cfg.sort_order);

    let mut sheets: Vec<Sheet<K>> = Vec::new();
    while !pending.is_empty() {
        let mut packer = SheetPacker::new(cfg.sheet_width, cfg.sheet_height);
        let placements = packer.consume_many(&mut pending)?;
        if placements.is_empty() {
            return Err(InvariantViolation::EmptySheet {
                pending: pending.len(),
            }
            .into());
        }
        debug!(
            sheet = sheets.len(),
            placed = placements.len(),
            remaining = pending.len(),
            free_area = packer.free_area(),
            "sheet closed"
        );
        sheets.push(Sheet {
            id: sheets.len(),
            width: cfg.sheet_width,
            height: cfg.sheet_height,
            placements,
        });
    }

    let meta = Meta {
        schema_version: "1".into(),
        app: "sprite-packer".into(),
        version: env!("CARGO_PKG_VERSION").into(),
        sheet_width: cfg.sheet_width,
        sheet_height: cfg.sheet_height,
        sort_order: cfg.sort_order.to_string(),
    };
    Ok(Layout { sheets, meta })
}

/// Rejects sizes that could never be placed on an empty sheet.
pub fn check_sizes<I: IntoIterator<Item = Size>>(sizes: I, cfg: &PackerConfig) -> Result<()> {
    for (index, size) in sizes.into_iter().enumerate() {
        if size.is_empty() {
            return Err(PackError::EmptyRectangle {
                index,
                width: size.w,
                height: size.h,
            });
        }
        if size.w > cfg.sheet_width || size.h > cfg.sheet_height {
            return Err(PackError::OversizedRectangle {
                index,
                width: size.w,
                height: size.h,
                sheet_width: cfg.sheet_width,
                sheet_height: cfg.sheet_height,
            });
        }
    }
    Ok(())
}

/// Stable sort of pending items per `order`. Ties fall back to the other
/// dimension (descending), then to input order.
pub fn sort_pending<K>(items: &mut [(K, Size)], order: SortOrder) {
    match order {
        SortOrder::None => {}
        SortOrder::HeightDesc => {
            items.sort_by(|(_, a), (_, b)| b.h.cmp(&a.h).then_with(|| b.w.cmp(&a.w)))
        }
        SortOrder::WidthDesc => {
            items.sort_by(|(_, a), (_, b)| b.w.cmp(&a.w).then_with(|| b.h.cmp(&a.h)))
        }
        SortOrder::AreaDesc => {
            items.sort_by(|(_, a), (_, b)| b.area().cmp(&a.area()).then_with(|| b.h.cmp(&a.h)))
        }
        SortOrder::MaxSideDesc => items.sort_by(|(_, a), (_, b)| {
            b.w.max(b.h)
                .cmp(&a.w.max(a.h))
                .then_with(|| b.h.cmp(&a.h))
        }),
    }
}
