//! View types for UI serialization
//!
//! This module provides the snapshot a frontend renders after every action.

use alloc::string::String;
use alloc::vec::Vec;
use parity_scale_codec::{Decode, Encode};
use scale_info::TypeInfo;
use serde::{Deserialize, Serialize};

use crate::config::DisplayPrefs;
use crate::session::Session;
use crate::types::{ImageAsset, ImageId, Pair, Stage, Visibility};

/// Face image metadata (bytes are fetched separately by id)
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, TypeInfo, Serialize, Deserialize)]
pub struct ImageView {
    pub id: ImageId,
    pub name: String,
    pub mime_type: String,
}

impl From<&ImageAsset> for ImageView {
    fn from(asset: &ImageAsset) -> Self {
        Self {
            id: asset.id,
            name: asset.name.clone(),
            mime_type: String::from(asset.mime_type()),
        }
    }
}

/// A card as the player sees it
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, TypeInfo, Serialize, Deserialize)]
pub struct CardView {
    pub position: u32,
    pub visibility: Visibility,
    /// Face to draw; `None` while the card is face down
    pub face_id: Option<ImageId>,
}

/// The complete game view sent to the frontend
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, TypeInfo, Serialize, Deserialize)]
pub struct GameView {
    /// Current stage
    pub stage: String,
    /// Uploaded face images, in id order
    pub images: Vec<ImageView>,
    pub has_back_image: bool,
    /// Setup can move on to pairing
    pub can_confirm: bool,
    /// Face ids not yet in a pair
    pub unpaired: Vec<ImageId>,
    /// Ids staged for the next pair
    pub selection: Vec<ImageId>,
    pub pairs: Vec<Pair>,
    /// Pairing can move on to play
    pub can_start: bool,
    /// Dealt cards (empty outside play and win)
    pub cards: Vec<CardView>,
    pub matched_pairs: u32,
    pub total_pairs: u32,
    /// Share of pairs found, in percent
    pub progress_percent: u32,
    /// A revealed pair is on display waiting to be compared
    pub resolving: bool,
    pub prefs: DisplayPrefs,
}

impl GameView {
    pub fn from_session(session: &Session) -> Self {
        let pairing = session.pairing();
        let in_game = matches!(session.stage(), Stage::Play | Stage::Win);
        let game = session.game().filter(|_| in_game);

        let cards = game
            .map(|game| {
                game.deck()
                    .iter()
                    .map(|card| {
                        let visibility = game
                            .visibility(card.position)
                            .unwrap_or(Visibility::Hidden);
                        CardView {
                            position: card.position,
                            visibility,
                            face_id: match visibility {
                                Visibility::Hidden => None,
                                _ => Some(card.face_id),
                            },
                        }
                    })
                    .collect()
            })
            .unwrap_or_default();

        let matched_pairs = game.map_or(0, |g| g.matched_pairs());
        let total_pairs = game.map_or(0, |g| g.total_pairs());

        Self {
            stage: String::from(session.stage().as_str()),
            images: session.images().faces().iter().map(ImageView::from).collect(),
            has_back_image: session.images().back().is_some(),
            can_confirm: session.can_confirm_images(),
            unpaired: pairing.unpaired().iter().copied().collect(),
            selection: pairing.selection().to_vec(),
            pairs: pairing.pairs().to_vec(),
            can_start: session.can_start_game(),
            cards,
            matched_pairs,
            total_pairs,
            progress_percent: progress_percent(matched_pairs, total_pairs),
            resolving: game.map_or(false, |g| g.is_resolving()),
            prefs: *session.prefs(),
        }
    }
}

fn progress_percent(matched: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    matched * 100 / total
}
