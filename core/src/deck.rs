//! Deck construction
//!
//! Two cards per committed pair, shuffled as a whole. Positions are the
//! post-shuffle slots, so they are always dense and unique.

use alloc::vec::Vec;

use crate::error::{GameError, GameResult};
use crate::log;
use crate::rng::DeckRng;
use crate::types::{Card, Pair};

/// Build a freshly shuffled, fully unmatched deck from the committed pairs.
pub fn build_deck<R: DeckRng>(pairs: &[Pair], rng: &mut R) -> GameResult<Vec<Card>> {
    if pairs.is_empty() {
        return Err(GameError::NoPairs);
    }

    let mut cards: Vec<Card> = pairs
        .iter()
        .enumerate()
        .flat_map(|(i, pair)| {
            [pair.left, pair.right].map(|face_id| Card {
                position: 0,
                pair_index: i as u32,
                face_id,
                matched: false,
            })
        })
        .collect();

    rng.shuffle(&mut cards);
    for (position, card) in cards.iter_mut().enumerate() {
        card.position = position as u32;
    }

    log::debug(
        "deck",
        &alloc::format!("dealt {} cards from {} pairs", cards.len(), pairs.len()),
    );
    Ok(cards)
}
