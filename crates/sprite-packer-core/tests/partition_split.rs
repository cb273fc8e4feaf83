use sprite_packer_core::error::InvariantViolation;
use sprite_packer_core::model::Axis;
use sprite_packer_core::packer::split_partition;

#[test]
fn exact_match_leaves_partition_alone() {
    let mut cols = vec![40, 60];
    split_partition(&mut cols, 1, 60, Axis::Columns).expect("split");
    assert_eq!(cols, vec![40, 60]);
}

#[test]
fn smaller_requirement_inserts_used_part_first() {
    let mut cols = vec![1024];
    split_partition(&mut cols, 0, 864, Axis::Columns).expect("split");
    assert_eq!(cols, vec![864, 160]);

    let mut rows = vec![480, 544];
    split_partition(&mut rows, 1, 321, Axis::Rows).expect("split");
    assert_eq!(rows, vec![480, 321, 223]);
}

#[test]
fn larger_requirement_walks_into_following_entries() {
    // 70 = 40 + 20 + 10: the third entry is split, the leftover 30 stays free.
    let mut cols = vec![40, 20, 40];
    split_partition(&mut cols, 0, 70, Axis::Columns).expect("split");
    assert_eq!(cols, vec![40, 20, 10, 30]);
    assert_eq!(cols.iter().sum::<u32>(), 100);
}

#[test]
fn larger_requirement_landing_on_boundary_does_not_split() {
    let mut cols = vec![10, 20, 30, 40];
    split_partition(&mut cols, 1, 50, Axis::Columns).expect("split");
    assert_eq!(cols, vec![10, 20, 30, 40]);
}

#[test]
fn walk_past_the_end_is_an_invariant_violation() {
    let mut cols = vec![10, 20, 30];
    let err = split_partition(&mut cols, 1, 60, Axis::Columns).unwrap_err();
    assert_eq!(
        err,
        InvariantViolation::PartitionOverrun {
            axis: Axis::Columns,
            index: 1,
            deficit: 10,
        }
    );
    // Nothing was modified.
    assert_eq!(cols, vec![10, 20, 30]);
}

#[test]
fn index_outside_partition_is_rejected() {
    let mut rows = vec![100];
    let err = split_partition(&mut rows, 3, 10, Axis::Rows).unwrap_err();
    assert!(matches!(
        err,
        InvariantViolation::PartitionIndex { index: 3, len: 1, .. }
    ));
}

#[test]
fn zero_requirement_is_rejected() {
    let mut rows = vec![100];
    let err = split_partition(&mut rows, 0, 0, Axis::Rows).unwrap_err();
    assert!(matches!(err, InvariantViolation::ZeroPartition { .. }));
    assert_eq!(rows, vec![100]);
}
