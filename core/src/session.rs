//! Stage controller
//!
//! `Session` owns every piece of game state for one player and applies the
//! stage transition table:
//!
//! | from    | action           | to      |
//! |---------|------------------|---------|
//! | setup   | `confirm_images` | pairing |
//! | pairing | `start_game`     | play    |
//! | pairing | `back_to_setup`  | setup   |
//! | play    | `reshuffle`      | play    |
//! | play    | `edit_pairs`     | pairing |
//! | play    | `back_to_setup`  | setup   |
//! | play    | win announced    | win     |
//! | win     | `play_again`     | play    |
//! | win     | `edit_pairs`     | pairing |
//! | win     | `restart`        | setup   |
//!
//! Anything else is rejected with `WrongStage` and leaves the session as it
//! was.

use alloc::string::String;
use alloc::vec::Vec;

use crate::config::{DisplayPrefs, Timing};
use crate::deck::build_deck;
use crate::error::{GameError, GameResult};
use crate::log;
use crate::matching::{MatchEngine, MatchOutcome};
use crate::pairing::PairingEngine;
use crate::registry::ImageRegistry;
use crate::rng::DeckRng;
use crate::timer::{ScheduledTimer, Scheduler, TimerId, TimerKind};
use crate::types::{ImageAsset, ImageId, Stage};
use crate::view::GameView;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    stage: Stage,
    images: ImageRegistry,
    pairing: PairingEngine,
    game: Option<MatchEngine>,
    scheduler: Scheduler,
    prefs: DisplayPrefs,
}

fn logged<T>(name: &str, result: GameResult<T>) -> GameResult<T> {
    if let Err(e) = &result {
        log::rejected(name, e);
    }
    result
}

impl Session {
    pub fn new() -> Self {
        Self::with_timing(Timing::default())
    }

    pub fn with_timing(timing: Timing) -> Self {
        Self {
            stage: Stage::Setup,
            images: ImageRegistry::new(),
            pairing: PairingEngine::default(),
            game: None,
            scheduler: Scheduler::new(timing),
            prefs: DisplayPrefs::default(),
        }
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn images(&self) -> &ImageRegistry {
        &self.images
    }

    pub fn pairing(&self) -> &PairingEngine {
        &self.pairing
    }

    pub fn game(&self) -> Option<&MatchEngine> {
        self.game.as_ref()
    }

    pub fn prefs(&self) -> &DisplayPrefs {
        &self.prefs
    }

    pub fn timing(&self) -> &Timing {
        self.scheduler.timing()
    }

    /// Timers the host must currently be running
    pub fn pending_timers(&self) -> &[ScheduledTimer] {
        self.scheduler.pending()
    }

    pub fn can_confirm_images(&self) -> bool {
        self.stage == Stage::Setup && self.images.is_ready()
    }

    pub fn can_start_game(&self) -> bool {
        self.stage == Stage::Pairing && !self.pairing.pairs().is_empty()
    }

    pub fn face_image(&self, id: ImageId) -> GameResult<&ImageAsset> {
        self.images.face(id).ok_or(GameError::UnknownImage { id: id.0 })
    }

    /// Snapshot for rendering
    pub fn view(&self) -> GameView {
        GameView::from_session(self)
    }

    pub fn set_display_prefs(&mut self, prefs: DisplayPrefs) {
        self.prefs = prefs.clamped();
    }

    // ------------------------------------------------------------------
    // Setup
    // ------------------------------------------------------------------

    pub fn set_back_image(&mut self, name: impl Into<String>, bytes: Vec<u8>) -> GameResult<()> {
        logged("set_back_image", self.expect_stage(Stage::Setup))?;
        self.images.set_back(name, bytes);
        Ok(())
    }

    pub fn add_face_image(
        &mut self,
        name: impl Into<String>,
        bytes: Vec<u8>,
    ) -> GameResult<ImageId> {
        logged("add_face_image", self.expect_stage(Stage::Setup))?;
        Ok(self.images.add_face(name, bytes))
    }

    pub fn set_face_images<I, S>(&mut self, files: I) -> GameResult<()>
    where
        I: IntoIterator<Item = (S, Vec<u8>)>,
        S: Into<String>,
    {
        logged("set_face_images", self.expect_stage(Stage::Setup))?;
        self.images.set_faces(files);
        Ok(())
    }

    pub fn clear_face_images(&mut self) -> GameResult<()> {
        logged("clear_face_images", self.expect_stage(Stage::Setup))?;
        self.images.clear_faces();
        Ok(())
    }

    /// Use the uploaded images and start pairing from scratch
    pub fn confirm_images(&mut self) -> GameResult<()> {
        log::action("confirm_images", self.images.faces().len());
        logged("confirm_images", self.expect_stage(Stage::Setup))?;
        if !self.images.is_ready() {
            return logged("confirm_images", Err(GameError::MissingImages));
        }
        self.pairing = PairingEngine::new(self.images.face_ids());
        self.game = None;
        self.scheduler.cancel_all();
        self.set_stage(Stage::Pairing);
        Ok(())
    }

    // ------------------------------------------------------------------
    // Pairing
    // ------------------------------------------------------------------

    pub fn select(&mut self, id: ImageId) -> GameResult<()> {
        logged("select", self.expect_stage(Stage::Pairing))?;
        logged("select", self.pairing.select(id))
    }

    pub fn select_self(&mut self, id: ImageId) -> GameResult<()> {
        logged("select_self", self.expect_stage(Stage::Pairing))?;
        logged("select_self", self.pairing.select_self(id))
    }

    pub fn clear_selection(&mut self) -> GameResult<()> {
        logged("clear_selection", self.expect_stage(Stage::Pairing))?;
        self.pairing.clear_selection();
        Ok(())
    }

    pub fn commit_pair(&mut self) -> GameResult<usize> {
        logged("commit_pair", self.expect_stage(Stage::Pairing))?;
        logged("commit_pair", self.pairing.commit())
    }

    pub fn delete_pair(&mut self, index: usize) -> GameResult<()> {
        log::action("delete_pair", index);
        logged("delete_pair", self.expect_stage(Stage::Pairing))?;
        logged("delete_pair", self.pairing.delete_pair(index)).map(|_| ())
    }

    /// Drop every committed pair and the current selection
    pub fn clear_pairs(&mut self) -> GameResult<()> {
        logged("clear_pairs", self.expect_stage(Stage::Pairing))?;
        self.pairing.reset_all();
        Ok(())
    }

    /// Deal a deck from the committed pairs and enter play
    pub fn start_game<R: DeckRng>(&mut self, rng: &mut R) -> GameResult<()> {
        log::action("start_game", self.pairing.pairs().len());
        logged("start_game", self.expect_stage(Stage::Pairing))?;
        self.deal(rng)?;
        self.set_stage(Stage::Play);
        Ok(())
    }

    // ------------------------------------------------------------------
    // Play
    // ------------------------------------------------------------------

    pub fn reveal(&mut self, position: u32) -> GameResult<()> {
        log::action("reveal", position);
        logged("reveal", self.expect_stage(Stage::Play))?;
        let game = self.game.as_mut().ok_or(GameError::WrongStage)?;
        logged("reveal", game.reveal(position, &mut self.scheduler))
    }

    /// Deal a new deck from the same pairs
    pub fn reshuffle<R: DeckRng>(&mut self, rng: &mut R) -> GameResult<()> {
        log::action("reshuffle", self.pairing.pairs().len());
        logged("reshuffle", self.expect_stage(Stage::Play))?;
        self.deal(rng)
    }

    /// Run the action behind a timer whose delay has elapsed
    pub fn fire_timer(&mut self, id: TimerId) -> GameResult<()> {
        let kind = logged(
            "fire_timer",
            self.scheduler.take(id).ok_or(GameError::StaleTimer),
        )?;
        log::debug("timer", &alloc::format!("{:?} fired ({:?})", id, kind));

        match kind {
            TimerKind::Resolve => {
                let game = self.game.as_mut().ok_or(GameError::WrongStage)?;
                let outcome = logged("resolve", game.resolve(&mut self.scheduler))?;
                if outcome == MatchOutcome::Won {
                    log::info("all pairs found");
                    self.scheduler.schedule(TimerKind::AnnounceWin);
                }
                Ok(())
            }
            TimerKind::HideMismatch { .. } => {
                let game = self.game.as_mut().ok_or(GameError::WrongStage)?;
                logged("hide_mismatch", game.finish_hide(id))
            }
            TimerKind::AnnounceWin => {
                let won = self.game.as_ref().map_or(false, MatchEngine::is_won);
                if self.stage != Stage::Play || !won {
                    return logged("announce_win", Err(GameError::WrongStage));
                }
                self.set_stage(Stage::Win);
                Ok(())
            }
        }
    }

    // ------------------------------------------------------------------
    // Leaving play / win
    // ------------------------------------------------------------------

    /// Go back to pairing, keeping the committed pairs
    pub fn edit_pairs(&mut self) -> GameResult<()> {
        logged("edit_pairs", self.expect_stage_in(&[Stage::Play, Stage::Win]))?;
        self.stop_play();
        self.set_stage(Stage::Pairing);
        Ok(())
    }

    /// Go back to setup, keeping the uploaded images
    pub fn back_to_setup(&mut self) -> GameResult<()> {
        logged(
            "back_to_setup",
            self.expect_stage_in(&[Stage::Pairing, Stage::Play]),
        )?;
        self.stop_play();
        self.set_stage(Stage::Setup);
        Ok(())
    }

    /// Deal a fresh deck after winning
    pub fn play_again<R: DeckRng>(&mut self, rng: &mut R) -> GameResult<()> {
        log::action("play_again", self.pairing.pairs().len());
        logged("play_again", self.expect_stage(Stage::Win))?;
        self.deal(rng)?;
        self.set_stage(Stage::Play);
        Ok(())
    }

    /// Forget everything, including the images. Display preferences survive.
    pub fn restart(&mut self) -> GameResult<()> {
        logged("restart", self.expect_stage(Stage::Win))?;
        self.scheduler.cancel_all();
        self.images.clear();
        self.pairing = PairingEngine::default();
        self.game = None;
        self.set_stage(Stage::Setup);
        Ok(())
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    fn expect_stage(&self, stage: Stage) -> GameResult<()> {
        self.expect_stage_in(&[stage])
    }

    fn expect_stage_in(&self, stages: &[Stage]) -> GameResult<()> {
        if stages.contains(&self.stage) {
            Ok(())
        } else {
            Err(GameError::WrongStage)
        }
    }

    fn set_stage(&mut self, stage: Stage) {
        log::stage_change(self.stage, stage);
        self.stage = stage;
    }

    /// Replace the current deck with a freshly shuffled one
    fn deal<R: DeckRng>(&mut self, rng: &mut R) -> GameResult<()> {
        let deck = logged("deal", build_deck(self.pairing.pairs(), rng))?;
        self.scheduler.cancel_all();
        self.game = Some(MatchEngine::new(deck));
        Ok(())
    }

    fn stop_play(&mut self) {
        if let Some(game) = self.game.as_mut() {
            game.cancel_pending(&mut self.scheduler);
        }
        self.scheduler.cancel_all();
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
