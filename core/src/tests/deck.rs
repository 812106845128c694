use alloc::vec::Vec;

use super::{id, pairs, positions_of, rng};
use crate::deck::build_deck;
use crate::error::GameError;

#[test]
fn test_build_deck_deals_two_cards_per_pair() {
    let committed = pairs(&[(0, 1), (2, 2), (3, 4)]);
    let deck = build_deck(&committed, &mut rng(7)).unwrap();

    assert_eq!(deck.len(), 6);
    for pair_index in 0..3u32 {
        let count = deck.iter().filter(|c| c.pair_index == pair_index).count();
        assert_eq!(count, 2, "pair {} should have two cards", pair_index);
    }
    assert!(deck.iter().all(|c| !c.matched));
}

#[test]
fn test_build_deck_positions_are_dense_slots() {
    let committed = pairs(&[(0, 1), (2, 3), (4, 5), (6, 7), (8, 9)]);
    let deck = build_deck(&committed, &mut rng(99)).unwrap();

    for (slot, card) in deck.iter().enumerate() {
        assert_eq!(card.position as usize, slot);
    }
}

#[test]
fn test_build_deck_keeps_faces_with_their_pair() {
    let committed = pairs(&[(0, 1), (2, 2)]);
    let deck = build_deck(&committed, &mut rng(3)).unwrap();

    let [a, b] = positions_of(&deck, 0);
    let mut faces = [deck[a as usize].face_id, deck[b as usize].face_id];
    faces.sort();
    assert_eq!(faces, [id(0), id(1)]);

    let [c, d] = positions_of(&deck, 1);
    assert_eq!(deck[c as usize].face_id, id(2));
    assert_eq!(deck[d as usize].face_id, id(2));
}

#[test]
fn test_build_deck_rejects_empty_pairs() {
    assert_eq!(build_deck(&[], &mut rng(1)), Err(GameError::NoPairs));
}

#[test]
fn test_same_seed_same_deck() {
    let committed = pairs(&[(0, 1), (2, 3), (4, 5), (6, 7)]);
    let a = build_deck(&committed, &mut rng(2024)).unwrap();
    let b = build_deck(&committed, &mut rng(2024)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_consecutive_builds_are_independent() {
    let committed = pairs(&[(0, 1), (2, 3), (4, 5), (6, 7)]);
    let mut source = rng(77);

    let first = build_deck(&committed, &mut source).unwrap();
    let second = build_deck(&committed, &mut source).unwrap();

    let order = |deck: &[crate::types::Card]| -> Vec<(u32, crate::types::ImageId)> {
        deck.iter().map(|c| (c.pair_index, c.face_id)).collect()
    };
    assert_ne!(order(&first), order(&second));
}

#[test]
fn test_shuffle_spreads_first_card() {
    // Over many draws the first pair's left face should land in every slot.
    let committed = pairs(&[(0, 1), (2, 3)]);
    let mut source = rng(5);
    let mut seen = [false; 4];

    for _ in 0..200 {
        let deck = build_deck(&committed, &mut source).unwrap();
        let slot = deck
            .iter()
            .position(|c| c.face_id == id(0))
            .unwrap();
        seen[slot] = true;
    }
    assert_eq!(seen, [true; 4]);
}
