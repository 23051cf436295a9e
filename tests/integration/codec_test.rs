//! Integration tests for packing and querying permission sets.

use std::collections::BTreeSet;

use perms_codec::{
    PackedPermissions, PermissionId, has_any_permission, has_permission, pack, pack_optional,
    to_binary_string, unpack,
};
use perms_core::error::ErrorKind;
use proptest::prelude::*;

#[test]
fn test_pack_set_and_list_agree() {
    let set: BTreeSet<PermissionId> = [17, 4, 85].into_iter().collect();
    let list: Vec<PermissionId> = vec![17, 4, 85];
    assert_eq!(pack(set).unwrap(), "CABAAAAAAAAAAAQ");
    assert_eq!(pack(list).unwrap(), "CABAAAAAAAAAAAQ");
}

#[test]
fn test_pack_full_range() {
    let packed = pack(0..10_008).unwrap();
    assert_eq!(packed, "_".repeat(10_008 / 6));
}

#[test]
fn test_pack_empty() {
    assert_eq!(pack(std::iter::empty()).unwrap(), "");
}

#[test]
fn test_pack_missing_element() {
    let err = pack_optional(vec![Some(2), None]).unwrap_err();
    assert_eq!(err.kind, ErrorKind::MissingValue);
}

#[test]
fn test_binary_string_known_vector() {
    assert_eq!(
        to_binary_string("CABAAAAAAAAAAAQ").unwrap(),
        "000010000000000001000000000000000000000000000000000000000000000000000000000000000000010000"
    );
}

#[test]
fn test_binary_string_rejects_foreign_symbol() {
    let err = to_binary_string("CABAAAAAAAAAAAQ@").unwrap_err();
    assert_eq!(err.kind, ErrorKind::InvalidArgument);
}

#[test]
fn test_binary_string_marks_packed_ids() {
    let packed = pack([17, 4, 85]).unwrap();
    let bits = to_binary_string(&packed).unwrap();
    let ones: Vec<PermissionId> = bits
        .char_indices()
        .filter(|(_, c)| *c == '1')
        .map(|(i, _)| i as PermissionId)
        .collect();
    assert_eq!(ones, vec![4, 17, 85]);
}

#[test]
fn test_has_permission_dense_range() {
    let packed = pack(0..10_000).unwrap();
    for id in 0..10_000 {
        assert!(has_permission(&packed, id).unwrap(), "missing {id}");
    }
}

#[test]
fn test_has_permission_negative() {
    for id in [-1, -10] {
        let err = has_permission("A", id).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidArgument);
    }
}

#[test]
fn test_has_any_permission_none_match() {
    let packed = pack([17, 4, 85]).unwrap();
    assert!(!has_any_permission(&packed, [0, 1, 2]).unwrap());
}

#[test]
fn test_unpack_sparse_ids() {
    let ids = vec![2, 4, 7, 8, 9, 10, 12, 14, 15, 1000, 2005, 10002, 10007];
    let packed = pack(ids.iter().copied()).unwrap();
    assert_eq!(packed.len(), 10_008 / 6);
    assert_eq!(unpack(&packed).unwrap(), ids);
}

fn id_set() -> impl Strategy<Value = BTreeSet<PermissionId>> {
    prop::collection::btree_set(0..10_000i64, 0..300)
}

proptest! {
    #[test]
    fn test_packed_ids_are_members(set in id_set()) {
        let packed = pack(set.iter().copied()).unwrap();
        for id in &set {
            prop_assert!(has_permission(&packed, *id).unwrap());
        }
    }

    #[test]
    fn test_absent_ids_are_not_members(set in id_set(), probe in 0..11_000i64) {
        let packed = pack(set.iter().copied()).unwrap();
        prop_assert_eq!(has_permission(&packed, probe).unwrap(), set.contains(&probe));
    }

    #[test]
    fn test_length_is_minimal(set in id_set()) {
        let packed = pack(set.iter().copied()).unwrap();
        let expected = set.last().map_or(0, |max| (*max as usize) / 6 + 1);
        prop_assert_eq!(packed.len(), expected);
        prop_assert_eq!(to_binary_string(&packed).unwrap().len(), expected * 6);
    }

    #[test]
    fn test_pack_is_order_and_duplicate_independent(
        ids in prop::collection::vec(0..2_000i64, 0..100),
    ) {
        let mut shuffled: Vec<PermissionId> = ids.iter().rev().copied().collect();
        shuffled.extend(ids.iter().copied());
        prop_assert_eq!(pack(ids.iter().copied()).unwrap(), pack(shuffled).unwrap());
    }

    #[test]
    fn test_unpack_recovers_set(set in id_set()) {
        let packed = PackedPermissions::from_ids(set.iter().copied()).unwrap();
        let recovered: BTreeSet<PermissionId> = packed.ids().unwrap().into_iter().collect();
        prop_assert_eq!(recovered, set);
    }
}
