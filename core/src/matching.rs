//! Play-phase matching engine
//!
//! A card is hidden, face up or matched. Face up cards are either in the
//! reveal set (the comparison in progress) or part of a resolved mismatch
//! that is still on display until its hide timer fires.
//!
//! The second reveal does not resolve immediately: it schedules a
//! `Resolve` timer and the engine refuses further reveals until that timer
//! fires, giving the player time to see both faces.

use alloc::vec::Vec;

use crate::error::{GameError, GameResult};
use crate::log;
use crate::timer::{Scheduler, TimerId, TimerKind};
use crate::types::{Card, Visibility};

/// Number of cards compared at once
pub const REVEAL_LIMIT: usize = 2;

/// Result of resolving a revealed pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    Matched { pair_index: u32 },
    Mismatched,
    /// The final pair was matched. Reported once per deck.
    Won,
}

/// A resolved mismatch still face up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PendingHide {
    timer: TimerId,
    positions: [u32; 2],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchEngine {
    deck: Vec<Card>,
    total_pairs: u32,
    matched_pairs: u32,
    revealed: Vec<u32>,
    resolving: Option<TimerId>,
    hiding: Vec<PendingHide>,
    won: bool,
}

impl MatchEngine {
    pub fn new(deck: Vec<Card>) -> Self {
        let total_pairs = (deck.len() / 2) as u32;
        Self {
            deck,
            total_pairs,
            matched_pairs: 0,
            revealed: Vec::new(),
            resolving: None,
            hiding: Vec::new(),
            won: false,
        }
    }

    pub fn deck(&self) -> &[Card] {
        &self.deck
    }

    pub fn total_pairs(&self) -> u32 {
        self.total_pairs
    }

    pub fn matched_pairs(&self) -> u32 {
        self.matched_pairs
    }

    pub fn revealed(&self) -> &[u32] {
        &self.revealed
    }

    pub fn is_resolving(&self) -> bool {
        self.resolving.is_some()
    }

    pub fn is_won(&self) -> bool {
        self.won
    }

    fn is_hiding(&self, position: u32) -> bool {
        self.hiding.iter().any(|h| h.positions.contains(&position))
    }

    pub fn visibility(&self, position: u32) -> Option<Visibility> {
        let card = self.deck.get(position as usize)?;
        Some(if card.matched {
            Visibility::Matched
        } else if self.revealed.contains(&position) || self.is_hiding(position) {
            Visibility::Revealed
        } else {
            Visibility::Hidden
        })
    }

    /// Turn a card face up. The second card of a pair schedules resolution.
    pub fn reveal(&mut self, position: u32, scheduler: &mut Scheduler) -> GameResult<()> {
        if self.resolving.is_some() {
            return Err(GameError::Resolving);
        }
        let card = self
            .deck
            .get(position as usize)
            .ok_or(GameError::InvalidPosition { position })?;
        if card.matched {
            return Err(GameError::AlreadyMatched);
        }
        if self.revealed.contains(&position) || self.is_hiding(position) {
            return Err(GameError::AlreadyRevealed);
        }
        if self.revealed.len() >= REVEAL_LIMIT {
            return Err(GameError::RevealFull);
        }

        self.revealed.push(position);
        if self.revealed.len() == REVEAL_LIMIT {
            let timer = scheduler.schedule(TimerKind::Resolve);
            self.resolving = Some(timer);
            log::debug(
                "match",
                &alloc::format!("revealed {:?}, resolving via {:?}", self.revealed, timer),
            );
        }
        Ok(())
    }

    /// Compare the two revealed cards
    pub fn resolve(&mut self, scheduler: &mut Scheduler) -> GameResult<MatchOutcome> {
        let (first, second) = match (self.resolving, self.revealed.as_slice()) {
            (Some(_), [first, second]) => (*first, *second),
            _ => return Err(GameError::NotResolving),
        };
        if let Some(timer) = self.resolving.take() {
            // No-op when called from the timer itself, which was already taken.
            scheduler.cancel(timer);
        }
        self.revealed.clear();

        let a = self.deck[first as usize].pair_index;
        let b = self.deck[second as usize].pair_index;

        if a != b {
            let timer = scheduler.schedule(TimerKind::HideMismatch { first, second });
            self.hiding.push(PendingHide {
                timer,
                positions: [first, second],
            });
            log::debug("match", &alloc::format!("mismatch at {} / {}", first, second));
            return Ok(MatchOutcome::Mismatched);
        }

        self.deck[first as usize].matched = true;
        self.deck[second as usize].matched = true;
        self.matched_pairs += 1;
        log::debug(
            "match",
            &alloc::format!(
                "pair {} matched ({}/{})",
                a,
                self.matched_pairs,
                self.total_pairs
            ),
        );

        if !self.won && self.matched_pairs == self.total_pairs {
            self.won = true;
            return Ok(MatchOutcome::Won);
        }
        Ok(MatchOutcome::Matched { pair_index: a })
    }

    /// Flip a displayed mismatch back over once its timer fires
    pub fn finish_hide(&mut self, timer: TimerId) -> GameResult<()> {
        let idx = self
            .hiding
            .iter()
            .position(|h| h.timer == timer)
            .ok_or(GameError::StaleTimer)?;
        self.hiding.remove(idx);
        Ok(())
    }

    /// Drop the comparison in progress and every displayed mismatch,
    /// cancelling their timers.
    pub fn cancel_pending(&mut self, scheduler: &mut Scheduler) {
        if let Some(timer) = self.resolving.take() {
            scheduler.cancel(timer);
        }
        for hide in self.hiding.drain(..) {
            scheduler.cancel(hide.timer);
        }
        self.revealed.clear();
    }
}
