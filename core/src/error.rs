//! Error types for game operations
//!
//! Every operation in this crate checks its preconditions before touching
//! state, so an `Err` always means "rejected, nothing changed". Frontends are
//! expected to disable the matching control instead of surfacing these.

use core::fmt;

use parity_scale_codec::{Decode, Encode};
use scale_info::TypeInfo;
use serde::{Deserialize, Serialize};

/// Reasons an action was rejected
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, TypeInfo, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum GameError {
    /// Action not allowed in the current stage
    WrongStage,
    /// Setup needs a back image and at least two face images
    MissingImages,
    /// Face image id is not registered
    UnknownImage { id: u32 },
    /// Selection buffer already holds two ids
    SelectionFull,
    /// Id is already staged in the selection buffer
    AlreadySelected { id: u32 },
    /// Id is not in the unpaired set
    NotUnpaired { id: u32 },
    /// Commit needs exactly two staged ids
    IncompleteSelection,
    /// No committed pair at this index
    InvalidPairIndex { index: u32 },
    /// A deck cannot be built without pairs
    NoPairs,
    /// No card at this deck position
    InvalidPosition { position: u32 },
    /// Card is already matched
    AlreadyMatched,
    /// Card is already face up
    AlreadyRevealed,
    /// Two cards are already face up
    RevealFull,
    /// A revealed pair is waiting for resolution
    Resolving,
    /// Resolution requested without two revealed cards
    NotResolving,
    /// Timer was cancelled or has already fired
    StaleTimer,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::WrongStage => write!(f, "action not allowed in this stage"),
            GameError::MissingImages => {
                write!(f, "need a back image and at least two face images")
            }
            GameError::UnknownImage { id } => write!(f, "unknown image {}", id),
            GameError::SelectionFull => write!(f, "selection already holds two images"),
            GameError::AlreadySelected { id } => write!(f, "image {} is already selected", id),
            GameError::NotUnpaired { id } => write!(f, "image {} is not unpaired", id),
            GameError::IncompleteSelection => write!(f, "select two images before committing"),
            GameError::InvalidPairIndex { index } => write!(f, "no pair at index {}", index),
            GameError::NoPairs => write!(f, "no pairs committed"),
            GameError::InvalidPosition { position } => write!(f, "no card at position {}", position),
            GameError::AlreadyMatched => write!(f, "card already matched"),
            GameError::AlreadyRevealed => write!(f, "card already face up"),
            GameError::RevealFull => write!(f, "two cards already face up"),
            GameError::Resolving => write!(f, "waiting for the revealed pair to resolve"),
            GameError::NotResolving => write!(f, "nothing to resolve"),
            GameError::StaleTimer => write!(f, "timer is no longer pending"),
        }
    }
}

/// Result type alias for game operations
pub type GameResult<T> = Result<T, GameError>;
