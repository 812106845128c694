//! Manual pairing of face images
//!
//! Tracks which face ids are still unpaired, up to two ids staged for the
//! next pair, and the committed pairs. Staged ids stay in the unpaired set
//! until the pair is committed.

use alloc::collections::BTreeSet;
use alloc::vec::Vec;

use crate::error::{GameError, GameResult};
use crate::log;
use crate::types::{ImageId, Pair};

/// Maximum number of staged ids
pub const SELECTION_SIZE: usize = 2;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PairingEngine {
    unpaired: BTreeSet<ImageId>,
    selection: Vec<ImageId>,
    pairs: Vec<Pair>,
}

impl PairingEngine {
    /// Start with every given id unpaired
    pub fn new(ids: impl IntoIterator<Item = ImageId>) -> Self {
        Self {
            unpaired: ids.into_iter().collect(),
            selection: Vec::new(),
            pairs: Vec::new(),
        }
    }

    pub fn unpaired(&self) -> &BTreeSet<ImageId> {
        &self.unpaired
    }

    pub fn selection(&self) -> &[ImageId] {
        &self.selection
    }

    pub fn pairs(&self) -> &[Pair] {
        &self.pairs
    }

    pub fn is_selected(&self, id: ImageId) -> bool {
        self.selection.contains(&id)
    }

    pub fn can_commit(&self) -> bool {
        self.selection.len() == SELECTION_SIZE
    }

    pub fn is_fully_paired(&self) -> bool {
        self.unpaired.is_empty()
    }

    /// Stage an unpaired id. Selecting an already staged id is rejected;
    /// self-pairs go through [`Self::select_self`].
    pub fn select(&mut self, id: ImageId) -> GameResult<()> {
        if self.selection.len() >= SELECTION_SIZE {
            return Err(GameError::SelectionFull);
        }
        if !self.unpaired.contains(&id) {
            return Err(GameError::NotUnpaired { id: id.0 });
        }
        if self.is_selected(id) {
            return Err(GameError::AlreadySelected { id: id.0 });
        }
        self.selection.push(id);
        Ok(())
    }

    /// Stage `[id, id]` so the next commit pairs the image with itself.
    ///
    /// Allowed from an empty selection or one holding only `id`.
    pub fn select_self(&mut self, id: ImageId) -> GameResult<()> {
        if !self.unpaired.contains(&id) {
            return Err(GameError::NotUnpaired { id: id.0 });
        }
        match (self.selection.len(), self.selection.first().copied()) {
            (0, _) => {
                self.selection.push(id);
                self.selection.push(id);
                Ok(())
            }
            (1, Some(first)) if first == id => {
                self.selection.push(id);
                Ok(())
            }
            (1, Some(first)) => Err(GameError::AlreadySelected { id: first.0 }),
            _ => Err(GameError::SelectionFull),
        }
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Commit the staged ids as a pair, returning its index
    pub fn commit(&mut self) -> GameResult<usize> {
        let (left, right) = match self.selection.as_slice() {
            [left, right] => (*left, *right),
            _ => return Err(GameError::IncompleteSelection),
        };
        self.unpaired.remove(&left);
        self.unpaired.remove(&right);
        self.pairs.push(Pair::new(left, right));
        self.selection.clear();

        let index = self.pairs.len() - 1;
        log::debug(
            "pairing",
            &alloc::format!("committed pair #{} ({}, {})", index, left.0, right.0),
        );
        Ok(index)
    }

    /// Remove a committed pair and return its ids to the unpaired set
    pub fn delete_pair(&mut self, index: usize) -> GameResult<Pair> {
        if index >= self.pairs.len() {
            return Err(GameError::InvalidPairIndex { index: index as u32 });
        }
        let pair = self.pairs.remove(index);
        self.unpaired.insert(pair.left);
        self.unpaired.insert(pair.right);
        Ok(pair)
    }

    /// Return every committed id to the unpaired set and drop all pairs
    pub fn reset_all(&mut self) {
        for pair in self.pairs.drain(..) {
            self.unpaired.insert(pair.left);
            self.unpaired.insert(pair.right);
        }
        self.selection.clear();
    }
}
