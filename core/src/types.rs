//! Shared model types

use alloc::string::String;
use alloc::vec::Vec;
use parity_scale_codec::{Decode, Encode, MaxEncodedLen};
use scale_info::TypeInfo;
use serde::{Deserialize, Serialize};

/// Identifier of an uploaded face image (dense, in upload order)
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Encode,
    Decode,
    TypeInfo,
    MaxEncodedLen,
    Serialize,
    Deserialize,
)]
pub struct ImageId(pub u32);

impl From<u32> for ImageId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// An uploaded image. The bytes are never decoded by the core.
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, TypeInfo, Serialize, Deserialize)]
pub struct ImageAsset {
    pub id: ImageId,
    pub name: String,
    pub bytes: Vec<u8>,
}

impl ImageAsset {
    pub fn new(id: ImageId, name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            id,
            name: name.into(),
            bytes,
        }
    }

    /// MIME type guessed from the file extension, for labelling blob URLs
    pub fn mime_type(&self) -> &'static str {
        let ext = self
            .name
            .rsplit_once('.')
            .map(|(_, ext)| ext)
            .unwrap_or_default();
        if ext.eq_ignore_ascii_case("png") {
            "image/png"
        } else if ext.eq_ignore_ascii_case("jpg") || ext.eq_ignore_ascii_case("jpeg") {
            "image/jpeg"
        } else if ext.eq_ignore_ascii_case("webp") {
            "image/webp"
        } else {
            "application/octet-stream"
        }
    }
}

/// Two face images that will appear as matching cards. `left == right` is a self-pair.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Encode,
    Decode,
    TypeInfo,
    MaxEncodedLen,
    Serialize,
    Deserialize,
)]
pub struct Pair {
    pub left: ImageId,
    pub right: ImageId,
}

impl Pair {
    pub fn new(left: ImageId, right: ImageId) -> Self {
        Self { left, right }
    }

    pub fn is_self_pair(&self) -> bool {
        self.left == self.right
    }
}

/// A card in the dealt deck
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Encode,
    Decode,
    TypeInfo,
    MaxEncodedLen,
    Serialize,
    Deserialize,
)]
pub struct Card {
    /// Slot in the shuffled deck
    pub position: u32,
    /// Index of the committed pair this card belongs to
    pub pair_index: u32,
    pub face_id: ImageId,
    pub matched: bool,
}

/// What the player currently sees of a card
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Encode,
    Decode,
    TypeInfo,
    MaxEncodedLen,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum Visibility {
    Hidden,
    Revealed,
    Matched,
}

/// Top-level phase of the application
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Encode,
    Decode,
    TypeInfo,
    MaxEncodedLen,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum Stage {
    Setup,
    Pairing,
    Play,
    Win,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Setup => "setup",
            Stage::Pairing => "pairing",
            Stage::Play => "play",
            Stage::Win => "win",
        }
    }
}
