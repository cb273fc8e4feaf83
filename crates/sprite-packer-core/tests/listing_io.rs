use sprite_packer_core::error::PackError;
use sprite_packer_core::model::Size;
use sprite_packer_core::prelude::*;

#[test]
fn parses_size_tokens() {
    assert_eq!("864x480".parse::<Size>().expect("size"), Size::new(864, 480));
    assert_eq!("39X32".parse::<Size>().expect("size"), Size::new(39, 32));
}

#[test]
fn rejects_malformed_tokens() {
    for bad in ["864", "x480", "864x", "axb", "0x10", "10x0", "-5x5", "10x10x10"] {
        match bad.parse::<Size>() {
            Err(PackError::Parse { token, .. }) => assert_eq!(token, bad),
            other => panic!("{} parsed as {:?}", bad, other),
        }
    }
}

#[test]
fn listing_accepts_spaces_and_newlines() {
    let sizes = parse_listing("864x480 78x107\n410x321\n\n  188x167 ").expect("parse");
    assert_eq!(
        sizes,
        vec![
            Size::new(864, 480),
            Size::new(78, 107),
            Size::new(410, 321),
            Size::new(188, 167),
        ]
    );
    assert!(parse_listing("   \n").expect("parse").is_empty());
}

#[test]
fn listing_honors_count_header() {
    let sizes = parse_listing("3\n10x10\n20x20\n30x30\n").expect("parse");
    assert_eq!(sizes.len(), 3);

    match parse_listing("4\n10x10\n20x20\n") {
        Err(PackError::Parse { token, reason }) => {
            assert_eq!(token, "4");
            assert!(reason.contains("found 2"), "{}", reason);
        }
        other => panic!("expected count mismatch, got {:?}", other),
    }
}

#[test]
fn listing_reports_first_bad_token() {
    match parse_listing("10x10 oops 20x20") {
        Err(PackError::Parse { token, .. }) => assert_eq!(token, "oops"),
        other => panic!("expected parse error, got {:?}", other),
    }
}

#[test]
fn text_listing_matches_classic_format() {
    let sizes = parse_listing("700x700 700x700 100x50").expect("parse");
    let layout = pack_sizes(&sizes, PackerConfig::default()).expect("pack");
    let text = to_text_listing(&layout);
    assert_eq!(
        text,
        "sheet 1\n700x700 0 0\n100x50 700 0\n\nsheet 2\n700x700 0 0\n\n"
    );
}
