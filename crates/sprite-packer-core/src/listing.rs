//! Plain-text sprite listings: `WxH` size tokens in, `sheet N` blocks of
//! `WxH X Y` lines out.

use crate::error::{PackError, Result};
use crate::model::{Layout, Size};
use std::str::FromStr;

impl FromStr for Size {
    type Err = PackError;

    /// Parses `WxH` (`X` also accepted as separator).
    fn from_str(token: &str) -> Result<Self> {
        let fail = |reason: &str| PackError::Parse {
            token: token.to_string(),
            reason: reason.to_string(),
        };
        let (w, h) = token
            .split_once(['x', 'X'])
            .ok_or_else(|| fail("expected WxH"))?;
        let w: u32 = w.trim().parse().map_err(|_| fail("width is not a number"))?;
        let h: u32 = h.trim().parse().map_err(|_| fail("height is not a number"))?;
        if w == 0 || h == 0 {
            return Err(fail("dimensions must be positive"));
        }
        Ok(Size::new(w, h))
    }
}

/// Parses whitespace separated `WxH` tokens.
///
/// A leading bare integer is read as a count header; the number of sizes that
/// follow must match it.
pub fn parse_listing(input: &str) -> Result<Vec<Size>> {
    let mut tokens = input.split_whitespace().peekable();
    let mut expected = None;
    if let Some(first) = tokens.peek() {
        if first.bytes().all(|b| b.is_ascii_digit()) {
            let count = first.parse::<usize>().map_err(|_| PackError::Parse {
                token: first.to_string(),
                reason: "count header is out of range".into(),
            })?;
            expected = Some((first.to_string(), count));
            tokens.next();
        }
    }
    let sizes = tokens.map(str::parse).collect::<Result<Vec<Size>>>()?;
    if let Some((token, count)) = expected {
        if count != sizes.len() {
            return Err(PackError::Parse {
                token,
                reason: format!("count header says {}, found {} sizes", count, sizes.len()),
            });
        }
    }
    Ok(sizes)
}

/// Renders the classic listing: a 1-indexed `sheet N` header, one
/// `WxH X Y` line per placement in placement order, and a blank line after
/// each sheet.
pub fn to_text_listing<K>(layout: &Layout<K>) -> String {
    let mut s = String::new();
    for sheet in &layout.sheets {
        s.push_str(&format!("sheet {}\n", sheet.id + 1));
        for p in &sheet.placements {
            s.push_str(&format!(
                "{}x{} {} {}\n",
                p.rect.w, p.rect.h, p.rect.x, p.rect.y
            ));
        }
        s.push('\n');
    }
    s
}
