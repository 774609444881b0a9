use std::collections::HashSet;

use dijkstra_core::{Distance, Error, VertexIndex, VertexRecord, VertexState};

#[test]
fn test_dense_ids_use_direct_table() {
    let index = VertexIndex::build(100..200).unwrap();

    assert!(!index.is_hashed());
    assert_eq!(index.len(), 100);
    for (slot, id) in (100..200).enumerate() {
        assert_eq!(index.slot_of(id), Some(slot));
        assert_eq!(index.ids()[slot], id);
    }
    assert_eq!(index.slot_of(99), None);
    assert_eq!(index.slot_of(200), None);
    assert_eq!(index.slot(5).unwrap_err(), Error::UnknownVertex(5));
}

#[test]
fn test_scattered_ids_use_perfect_hash() {
    let ids: Vec<usize> = (0..1_000).map(|i| i * 7_919_993 + (i % 13)).collect();
    let index = VertexIndex::build(ids.iter().copied()).unwrap();

    assert!(index.is_hashed());
    for (slot, &id) in ids.iter().enumerate() {
        assert_eq!(index.slot_of(id), Some(slot), "lost id {}", id);
    }

    let members: HashSet<usize> = ids.iter().copied().collect();
    for candidate in (0..5_000).map(|i| i * 1_597 + 1) {
        if !members.contains(&candidate) {
            assert_eq!(index.slot_of(candidate), None, "unknown id {} resolved", candidate);
        }
    }
}

#[test]
fn test_extreme_ids() {
    let index = VertexIndex::build(vec![usize::MAX, 0, usize::MAX / 2]).unwrap();

    assert!(index.is_hashed());
    assert_eq!(index.slot_of(usize::MAX), Some(0));
    assert_eq!(index.slot_of(0), Some(1));
    assert_eq!(index.slot_of(usize::MAX / 2), Some(2));
    assert_eq!(index.slot_of(1), None);
}

#[test]
fn test_duplicate_ids_are_rejected() {
    assert_eq!(
        VertexIndex::build(vec![1, 2, 1]).unwrap_err(),
        Error::DuplicateVertex(1)
    );
    assert_eq!(
        VertexIndex::build(vec![0, 1_000_000_000, 0]).unwrap_err(),
        Error::DuplicateVertex(0)
    );
}

#[test]
fn test_repeated_scattered_id_is_a_duplicate() {
    let mut ids = vec![1_000_000_000; 10];
    ids.push(0);

    assert_eq!(
        VertexIndex::build(ids).unwrap_err(),
        Error::DuplicateVertex(1_000_000_000)
    );
}

#[test]
fn test_empty_index() {
    let index = VertexIndex::build(Vec::new()).unwrap();
    assert!(index.is_empty());
    assert_eq!(index.slot_of(0), None);
}

#[test]
fn test_state_initialization() {
    let state: VertexState<u32> = VertexState::build(vec![7, 3, 11], 3).unwrap();

    assert_eq!(state.len(), 3);
    assert_eq!(
        state.get(3).unwrap(),
        VertexRecord {
            distance: Distance::Finite(0),
            predecessor: None,
        }
    );
    for id in [7, 11] {
        assert_eq!(state.distance(id).unwrap(), Distance::Infinite);
        assert_eq!(state.predecessor(id).unwrap(), None);
    }
    assert_eq!(state.vertex_ids(), &[7, 3, 11]);
}

#[test]
fn test_state_set_and_unknown_ids() {
    let mut state: VertexState<u32> = VertexState::build(vec![7, 3, 11], 3).unwrap();

    state.set(11, Distance::Finite(4), Some(3)).unwrap();
    assert_eq!(state.distance(11).unwrap(), Distance::Finite(4));
    assert_eq!(state.predecessor(11).unwrap(), Some(3));

    assert_eq!(state.get(8).unwrap_err(), Error::UnknownVertex(8));
    assert_eq!(
        state.set(8, Distance::Finite(1), None).unwrap_err(),
        Error::UnknownVertex(8)
    );
    assert!(!state.contains(8));

    let reached: Vec<usize> = state
        .iter()
        .filter(|(_, record)| record.distance.is_finite())
        .map(|(id, _)| id)
        .collect();
    assert_eq!(reached, vec![3, 11]);
}

#[test]
fn test_state_rejects_unknown_source() {
    let err = VertexState::<u32>::build(vec![1, 2], 5).unwrap_err();
    assert_eq!(err, Error::UnknownVertex(5));
}

#[test]
fn test_infinity_sorts_above_every_finite_distance() {
    assert!(Distance::Finite(u64::MAX) < Distance::Infinite);
    assert!(Distance::Finite(0u64) < Distance::Finite(1));
    assert_eq!(Distance::from(None::<u32>), Distance::Infinite);
    assert_eq!(Distance::from(Some(3u32)).finite(), Some(3));
}
