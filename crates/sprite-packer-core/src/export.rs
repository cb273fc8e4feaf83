use crate::model::Layout;
use serde_json::{Value, json};

/// Serialize the whole `Layout` as a JSON object `{ sheets, meta }` (array-of-sheets style).
pub fn to_json_array<K: ToString>(layout: &Layout<K>) -> Value {
    let sheets_val = layout
        .sheets
        .iter()
        .map(|s| {
            let frames_val: Vec<Value> = s
                .placements
                .iter()
                .map(|p| {
                    json!({
                        "key": p.key.to_string(),
                        "frame": {"x": p.rect.x, "y": p.rect.y, "w": p.rect.w, "h": p.rect.h},
                    })
                })
                .collect();
            json!({
                "id": s.id,
                "width": s.width,
                "height": s.height,
                "frames": frames_val,
            })
        })
        .collect::<Vec<_>>();
    json!({"sheets": sheets_val, "meta": &layout.meta})
}

/// Flatten placements keyed by name, with the sheet index and size on each entry.
/// Shape: `{ frames: { name: { frame, sheet, sheetSize } }, meta }`.
/// Later duplicates of a key overwrite earlier ones.
pub fn to_json_hash<K: ToString>(layout: &Layout<K>) -> Value {
    let mut frames = serde_json::Map::new();
    for sheet in &layout.sheets {
        for p in &sheet.placements {
            frames.insert(
                p.key.to_string(),
                json!({
                    "frame": {"x": p.rect.x, "y": p.rect.y, "w": p.rect.w, "h": p.rect.h},
                    "sheet": sheet.id,
                    "sheetSize": {"w": sheet.width, "h": sheet.height},
                }),
            );
        }
    }
    json!({ "frames": frames, "meta": &layout.meta })
}
