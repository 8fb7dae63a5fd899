//! End-to-end allocate → use → release scenarios.

use simheap_arena::{AllocError, Handle, ManualArena};

#[test]
fn scalar_lifecycle() {
    let mut arena: ManualArena<char> = ManualArena::new();

    let mut h = arena.allocate_scalar();
    arena.write(&h, 'F').unwrap();
    assert_eq!(arena.read(&h).unwrap(), 'F');

    h = arena.release(h).unwrap();
    assert!(h.is_null());
    assert_eq!(arena.read(&h), Err(AllocError::NullDereference));
}

#[test]
fn array_lifecycle_with_both_traversal_styles() {
    let mut arena: ManualArena<i64> = ManualArena::new();

    let h = arena.allocate_array(3).unwrap();
    for (i, v) in [10, 20, 30].into_iter().enumerate() {
        arena.write_at(&h, i as i64, v).unwrap();
    }

    // Indexed presentation.
    let by_index: Vec<_> = (0..3).map(|i| arena.read_at(&h, i).unwrap()).collect();
    assert_eq!(by_index, vec![10, 20, 30]);

    // Cursor presentation, restarted once to show the traversal is
    // finite and restartable.
    let by_cursor: Vec<_> = arena.iter(&h).unwrap().collect();
    assert_eq!(by_cursor, vec![10, 20, 30]);
    let restarted: Vec<_> = arena.iter(&h).unwrap().collect();
    assert_eq!(restarted, by_cursor);

    let h = arena.release(h).unwrap();
    assert!(h.is_null());
}

#[test]
fn read_after_release_is_refused() {
    let mut arena: ManualArena<i64> = ManualArena::new();

    let h = arena.allocate_array(3).unwrap();
    let stale = h;
    let _ = arena.release(h).unwrap();

    match arena.read_at(&stale, 0) {
        Err(AllocError::UseAfterFree { .. }) => {}
        other => panic!("expected UseAfterFree, got {other:?}"),
    }
}

#[test]
fn double_release_is_refused_in_both_shapes() {
    let mut arena: ManualArena<i64> = ManualArena::new();

    // Through the adopted null handle.
    let h = arena.allocate_scalar();
    let adopted = arena.release(h).unwrap();
    assert_eq!(arena.release(adopted), Err(AllocError::DoubleFree { id: None }));

    // Through a stale copy of the original handle.
    let h = arena.allocate_scalar();
    let stale = h;
    let _ = arena.release(h).unwrap();
    match arena.release(stale) {
        Err(AllocError::DoubleFree { id: Some(_) }) => {}
        other => panic!("expected DoubleFree with id, got {other:?}"),
    }
}

#[test]
fn never_assigned_handle_cannot_be_used_or_released() {
    let mut arena: ManualArena<i64> = ManualArena::new();
    let h: Handle<i64> = Handle::null();

    assert_eq!(arena.read(&h), Err(AllocError::NullDereference));
    assert_eq!(arena.write(&h, 1), Err(AllocError::NullDereference));
    assert_eq!(arena.release(h), Err(AllocError::DoubleFree { id: None }));
}

#[test]
fn arena_survives_misuse_and_keeps_serving_live_handles() {
    let mut arena: ManualArena<i64> = ManualArena::new();

    let live = arena.allocate_array(2).unwrap();
    arena.write_at(&live, 0, 7).unwrap();

    let doomed = arena.allocate_scalar();
    let stale = doomed;
    let _ = arena.release(doomed).unwrap();
    let _ = arena.read(&stale).unwrap_err();
    let _ = arena.release(stale).unwrap_err();
    let _ = arena.allocate_array(-4).unwrap_err();

    // Misuse is refused without corrupting unrelated allocations.
    assert_eq!(arena.read_at(&live, 0).unwrap(), 7);
    assert_eq!(arena.live_count(), 1);
}
