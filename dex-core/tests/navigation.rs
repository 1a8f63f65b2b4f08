//! Wrap-around and range properties of the navigator, checked over the
//! whole default catalog.

use std::collections::HashSet;

use dex_core::{Action, Navigator, DEFAULT_MAX_ID};

fn at(id: u32) -> Navigator {
    Navigator::new(DEFAULT_MAX_ID)
        .and_then(|nav| nav.commit(id))
        .expect("id in range")
}

#[test]
fn test_previous_over_full_range() {
    for id in 2..=DEFAULT_MAX_ID {
        assert_eq!(at(id).target(Action::Previous), id - 1);
    }
    assert_eq!(at(1).target(Action::Previous), DEFAULT_MAX_ID);
}

#[test]
fn test_next_over_full_range() {
    for id in 1..DEFAULT_MAX_ID {
        assert_eq!(at(id).target(Action::Next), id + 1);
    }
    assert_eq!(at(DEFAULT_MAX_ID).target(Action::Next), 1);
}

#[test]
fn test_previous_then_next_returns_home() {
    for id in [1, 2, 512, DEFAULT_MAX_ID - 1, DEFAULT_MAX_ID] {
        let nav = at(id);
        let back = nav.commit(nav.previous()).unwrap();
        assert_eq!(back.next(), id);
    }
}

#[test]
fn test_random_stays_in_range_and_reaches_everything() {
    let nav = at(1);
    let mut seen = HashSet::new();

    // ~49 draws per id; missing one by chance is vanishingly unlikely
    for _ in 0..50_000 {
        let id = nav.target(Action::Random);
        assert!((1..=DEFAULT_MAX_ID).contains(&id), "random id {id} out of range");
        seen.insert(id);
    }

    assert_eq!(seen.len(), DEFAULT_MAX_ID as usize);
}

#[test]
fn test_random_ignores_current_id() {
    let nav = Navigator::new(4).unwrap().commit(4).unwrap();
    let seen: HashSet<u32> = (0..2_000).map(|_| nav.target(Action::Random)).collect();
    assert_eq!(seen, HashSet::from([1, 2, 3, 4]));
}

#[test]
fn test_configurable_bound() {
    let nav = Navigator::new(151).unwrap();
    assert_eq!(nav.previous(), 151);
    assert_eq!(nav.commit(151).unwrap().next(), 1);
    assert!(nav.commit(152).is_err());
}
