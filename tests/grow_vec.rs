use anyhow::Result;
use keel::{GrowVec, OutOfRange};

#[test]
fn build_inspect_and_shrink() -> Result<()> {
    let mut v: GrowVec<i64> = GrowVec::with_capacity(8)?;
    for i in 0..8 {
        v.push(i * i)?;
    }
    assert_eq!(v.len(), 8);
    assert_eq!(v.capacity(), 8);
    assert_eq!(v.front(), Some(&0));
    assert_eq!(v.back(), Some(&49));

    v.truncate(3);
    assert_eq!(v.as_slice(), &[0, 1, 4]);
    assert_eq!(v.capacity(), 8);
    Ok(())
}

#[test]
fn checked_access_error_carries_context() {
    let v: GrowVec<i32> = [10, 20].into();
    assert_eq!(v.at(1), Ok(&20));
    assert_eq!(v.at(5), Err(OutOfRange { index: 5, len: 2 }));
}

#[test]
fn checked_access_error_converts_to_anyhow() {
    fn fetch(v: &GrowVec<i32>, pos: usize) -> Result<i32> {
        Ok(*v.at(pos)?)
    }
    let v: GrowVec<i32> = [1].into();
    assert_eq!(fetch(&v, 0).unwrap(), 1);
    let err = fetch(&v, 9).unwrap_err();
    assert!(err.to_string().contains("out of range"));
}

#[test]
fn cursor_traversal_matches_slice_iteration() {
    let v: GrowVec<i32> = (0..20).collect();
    let forward: Vec<i32> = v.cursor().copied().collect();
    let backward: Vec<i32> = v.rev_cursor().copied().collect();
    assert_eq!(forward, (0..20).collect::<Vec<_>>());
    assert_eq!(backward, (0..20).rev().collect::<Vec<_>>());
}

#[test]
fn cursor_arithmetic_wraps_but_deref_checks() {
    let v: GrowVec<i32> = [1, 2, 3].into();
    let start = v.cursor();
    let end = v.cursor_at(v.len());
    assert_eq!(end.position() - start.position(), 3);
    assert!(end.is_end());
    assert_eq!(end.get(), None);

    // Walking past either end never traps; dereference just yields None.
    let past = end + 10;
    assert_eq!(past.get(), None);
    let before = start - 1;
    assert_eq!(before.get(), None);
}

#[test]
fn mutable_cursor_writes_through() {
    let mut v: GrowVec<i32> = [1, 2, 3].into();
    let mut cursor = v.cursor_mut();
    while let Some(slot) = cursor.get_mut() {
        *slot *= 10;
        cursor.advance();
    }
    assert_eq!(v.as_slice(), &[10, 20, 30]);
}

#[test]
fn insert_cursor_can_keep_editing() {
    let mut v: GrowVec<i32> = [1, 4].into();
    let mut cursor = v.insert(1, 2).unwrap();
    cursor.advance();
    assert_eq!(cursor.get(), Some(&4));
    drop(cursor);
    assert_eq!(v.as_slice(), &[1, 2, 4]);
}

#[test]
fn serde_round_trip_through_json() -> Result<()> {
    let v: GrowVec<String> = ["alpha", "beta", "gamma"]
        .into_iter()
        .map(str::to_string)
        .collect();
    let json = serde_json::to_string(&v)?;
    assert_eq!(json, r#"["alpha","beta","gamma"]"#);
    let back: GrowVec<String> = serde_json::from_str(&json)?;
    assert_eq!(back, v);
    Ok(())
}

#[test]
fn nested_vectors_compose() -> Result<()> {
    let mut grid: GrowVec<GrowVec<u8>> = GrowVec::new();
    for r in 0..4u8 {
        grid.push(GrowVec::filled(3, r)?)?;
    }
    grid.remove(1);
    assert_eq!(grid.len(), 3);
    assert_eq!(grid[1].as_slice(), &[2, 2, 2]);
    Ok(())
}

#[test]
fn hash_agrees_with_equality() {
    use std::collections::HashSet;

    let mut set = HashSet::new();
    let mut a: GrowVec<i32> = [1, 2, 3].into();
    a.reserve(64).unwrap();
    let b: GrowVec<i32> = [1, 2, 3].into();
    set.insert(a);
    assert!(set.contains(&b));
}
