use sprite_packer_core::config::PackerConfig;
use sprite_packer_core::error::PackError;
use sprite_packer_core::model::Size;
use sprite_packer_core::{pack_layout, pack_sizes};

/// Test zero-sized sheet dimensions
#[test]
fn test_zero_width() {
    let cfg = PackerConfig {
        sheet_width: 0,
        sheet_height: 1024,
        ..Default::default()
    };

    let result = cfg.validate();
    match result {
        Err(PackError::InvalidDimensions { width, height }) => {
            assert_eq!(width, 0);
            assert_eq!(height, 1024);
        }
        _ => panic!("Expected InvalidDimensions error"),
    }
}

#[test]
fn test_zero_height() {
    let cfg = PackerConfig {
        sheet_width: 1024,
        sheet_height: 0,
        ..Default::default()
    };
    assert!(matches!(
        cfg.validate(),
        Err(PackError::InvalidDimensions { width: 1024, height: 0 })
    ));
}

#[test]
fn test_invalid_config_rejected_by_pack() {
    let cfg = PackerConfig {
        sheet_width: 0,
        sheet_height: 0,
        ..Default::default()
    };
    let result = pack_sizes(&[Size::new(1, 1)], cfg);
    assert!(matches!(result, Err(PackError::InvalidDimensions { .. })));
}

/// Test rectangle wider than the sheet
#[test]
fn test_rectangle_too_wide() {
    let cfg = PackerConfig {
        sheet_width: 100,
        sheet_height: 100,
        ..Default::default()
    };
    let sizes = vec![Size::new(10, 10), Size::new(200, 50)];
    match pack_sizes(&sizes, cfg) {
        Err(PackError::OversizedRectangle {
            index,
            width,
            height,
            sheet_width,
            sheet_height,
        }) => {
            assert_eq!(index, 1);
            assert_eq!((width, height), (200, 50));
            assert_eq!((sheet_width, sheet_height), (100, 100));
        }
        other => panic!("Expected OversizedRectangle, got {:?}", other),
    }
}

#[test]
fn test_rectangle_too_tall() {
    let cfg = PackerConfig {
        sheet_width: 100,
        sheet_height: 100,
        ..Default::default()
    };
    let result = pack_sizes(&[Size::new(50, 101)], cfg);
    assert!(matches!(
        result,
        Err(PackError::OversizedRectangle { index: 0, .. })
    ));
}

#[test]
fn test_oversize_in_default_sheet() {
    let result = pack_sizes(&[Size::new(1025, 10)], PackerConfig::default());
    assert!(matches!(result, Err(PackError::OversizedRectangle { .. })));
}

#[test]
fn test_zero_dimension_rectangle() {
    let items = vec![("a", Size::new(10, 10)), ("b", Size::new(0, 10))];
    let result = pack_layout(items, PackerConfig::default());
    assert!(matches!(
        result,
        Err(PackError::EmptyRectangle { index: 1, width: 0, height: 10 })
    ));
}

/// Test 1x1 minimum valid configuration
#[test]
fn test_minimum_valid_config() {
    let cfg = PackerConfig {
        sheet_width: 1,
        sheet_height: 1,
        ..Default::default()
    };
    assert!(cfg.validate().is_ok());
}

/// Test 1x1 rectangles in a 1x1 sheet: one sheet each
#[test]
fn test_single_pixel_sheets() {
    let cfg = PackerConfig::builder().with_sheet_size(1, 1).build();
    let layout = pack_sizes(&[Size::new(1, 1); 3], cfg).expect("pack");
    assert_eq!(layout.sheets.len(), 3);
    for (i, sheet) in layout.sheets.iter().enumerate() {
        assert_eq!(sheet.id, i);
        assert_eq!(sheet.placements.len(), 1);
    }
}

/// Exact-fit strips on a non-square sheet
#[test]
fn test_exact_fit_strips() {
    let cfg = PackerConfig::builder().with_sheet_size(300, 100).build();
    let sizes = vec![Size::new(100, 100), Size::new(200, 100)];
    let layout = pack_sizes(&sizes, cfg).expect("pack");
    assert_eq!(layout.sheets.len(), 1);
    let rects: Vec<_> = layout.sheets[0].placements.iter().map(|p| p.rect).collect();
    assert_eq!(rects[0].x, 0);
    assert_eq!(rects[1].x, 200);
}

#[test]
fn test_error_messages_name_the_rectangle() {
    let err = pack_sizes(&[Size::new(2000, 5)], PackerConfig::default()).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("#0"), "{}", msg);
    assert!(msg.contains("2000x5"), "{}", msg);
    assert!(msg.contains("1024x1024"), "{}", msg);
}
