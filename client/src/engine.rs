//! Game engine for browser WASM builds
//!
//! This module wraps a `Session` for JavaScript. Every action returns
//! `true` when it was accepted; rejected actions leave the game untouched
//! and return `false`, so the UI never has to catch exceptions.
//!
//! The session only records which timers should be running. After each
//! accepted action the engine starts a browser timeout for every new pending
//! timer and drops the timeouts of cancelled ones. When a timeout elapses the
//! timer is fired into the session and the `on_change` callback runs so the
//! UI can re-render.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::format;
use std::rc::Rc;
use std::string::String;
use std::vec::Vec;

use gloo::timers::callback::Timeout;
use memory_core::log;
use memory_core::{DisplayPrefs, GameResult, ImageId, Session, TimerId, XorShiftRng};
use parity_scale_codec::Encode;
use wasm_bindgen::prelude::*;

struct Shared {
    session: RefCell<Session>,
    timers: RefCell<BTreeMap<TimerId, Timeout>>,
    on_change: RefCell<Option<js_sys::Function>>,
}

/// The main game engine exposed to WASM
#[wasm_bindgen]
pub struct GameEngine {
    shared: Rc<Shared>,
}

#[wasm_bindgen]
impl GameEngine {
    /// Create a new engine in the setup stage
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        log::info("=== MEMORY ENGINE INITIALIZED ===");
        Self {
            shared: Rc::new(Shared {
                session: RefCell::new(Session::new()),
                timers: RefCell::new(BTreeMap::new()),
                on_change: RefCell::new(None),
            }),
        }
    }

    /// Register a callback invoked after every state change, including the
    /// ones caused by timers
    #[wasm_bindgen]
    pub fn set_on_change(&self, callback: js_sys::Function) {
        *self.shared.on_change.borrow_mut() = Some(callback);
    }

    /// Get the current game view as JSON
    #[wasm_bindgen]
    pub fn get_view(&self) -> JsValue {
        log::debug("get_view", "Serializing session to view");
        let view = self.shared.session.borrow().view();
        match serde_wasm_bindgen::to_value(&view) {
            Ok(val) => val,
            Err(e) => {
                log::error(&format!("get_view serialization failed: {:?}", e));
                JsValue::NULL
            }
        }
    }

    /// Get the current game view as SCALE-encoded bytes
    #[wasm_bindgen]
    pub fn get_view_scale(&self) -> Vec<u8> {
        self.shared.session.borrow().view().encode()
    }

    #[wasm_bindgen]
    pub fn get_stage(&self) -> String {
        String::from(self.shared.session.borrow().stage().as_str())
    }

    /// Timers currently waiting to fire (for debugging)
    #[wasm_bindgen]
    pub fn get_pending_timers(&self) -> JsValue {
        let session = self.shared.session.borrow();
        serde_wasm_bindgen::to_value(session.pending_timers()).unwrap_or(JsValue::NULL)
    }

    // ========================================================================
    // Images
    // ========================================================================

    #[wasm_bindgen]
    pub fn set_back_image(&self, name: String, bytes: Vec<u8>) -> bool {
        self.apply(|s| s.set_back_image(name, bytes))
    }

    #[wasm_bindgen]
    pub fn add_face_image(&self, name: String, bytes: Vec<u8>) -> bool {
        self.apply(|s| s.add_face_image(name, bytes))
    }

    #[wasm_bindgen]
    pub fn clear_face_images(&self) -> bool {
        self.apply(|s| s.clear_face_images())
    }

    /// Raw bytes of a face image, for building a blob URL
    #[wasm_bindgen]
    pub fn get_face_image(&self, id: u32) -> Option<Vec<u8>> {
        let session = self.shared.session.borrow();
        session.face_image(ImageId(id)).ok().map(|f| f.bytes.clone())
    }

    #[wasm_bindgen]
    pub fn get_back_image(&self) -> Option<Vec<u8>> {
        let session = self.shared.session.borrow();
        session.images().back().map(|b| b.bytes.clone())
    }

    #[wasm_bindgen]
    pub fn can_confirm_images(&self) -> bool {
        self.shared.session.borrow().can_confirm_images()
    }

    #[wasm_bindgen]
    pub fn confirm_images(&self) -> bool {
        self.apply(|s| s.confirm_images())
    }

    // ========================================================================
    // Pairing
    // ========================================================================

    #[wasm_bindgen]
    pub fn select_image(&self, id: u32) -> bool {
        self.apply(|s| s.select(ImageId(id)))
    }

    /// Stage an image to be paired with itself
    #[wasm_bindgen]
    pub fn select_self(&self, id: u32) -> bool {
        self.apply(|s| s.select_self(ImageId(id)))
    }

    #[wasm_bindgen]
    pub fn clear_selection(&self) -> bool {
        self.apply(|s| s.clear_selection())
    }

    #[wasm_bindgen]
    pub fn commit_pair(&self) -> bool {
        self.apply(|s| s.commit_pair())
    }

    #[wasm_bindgen]
    pub fn delete_pair(&self, index: usize) -> bool {
        self.apply(|s| s.delete_pair(index))
    }

    #[wasm_bindgen]
    pub fn clear_pairs(&self) -> bool {
        self.apply(|s| s.clear_pairs())
    }

    #[wasm_bindgen]
    pub fn can_start_game(&self) -> bool {
        self.shared.session.borrow().can_start_game()
    }

    #[wasm_bindgen]
    pub fn start_game(&self) -> bool {
        let mut rng = fresh_rng();
        self.apply(|s| s.start_game(&mut rng))
    }

    #[wasm_bindgen]
    pub fn back_to_setup(&self) -> bool {
        self.apply(|s| s.back_to_setup())
    }

    // ========================================================================
    // Play
    // ========================================================================

    /// Turn the card at `position` face up
    #[wasm_bindgen]
    pub fn reveal(&self, position: u32) -> bool {
        self.apply(|s| s.reveal(position))
    }

    #[wasm_bindgen]
    pub fn reshuffle(&self) -> bool {
        let mut rng = fresh_rng();
        self.apply(|s| s.reshuffle(&mut rng))
    }

    #[wasm_bindgen]
    pub fn edit_pairs(&self) -> bool {
        self.apply(|s| s.edit_pairs())
    }

    #[wasm_bindgen]
    pub fn play_again(&self) -> bool {
        let mut rng = fresh_rng();
        self.apply(|s| s.play_again(&mut rng))
    }

    /// Start over with new images
    #[wasm_bindgen]
    pub fn restart(&self) -> bool {
        self.apply(|s| s.restart())
    }

    /// Update layout preferences; values are clamped to their slider ranges
    #[wasm_bindgen]
    pub fn set_display_prefs(
        &self,
        columns: u32,
        card_size: u32,
        card_spacing: u32,
        container_scale: u32,
    ) {
        let prefs = DisplayPrefs::new(columns, card_size, card_spacing, container_scale);
        self.shared.session.borrow_mut().set_display_prefs(prefs);
        notify(&self.shared);
    }
}

// Private implementation methods
impl GameEngine {
    /// Run an action against the session, then bring the browser timers in
    /// line with it and tell the UI
    fn apply<T>(&self, action: impl FnOnce(&mut Session) -> GameResult<T>) -> bool {
        let result = action(&mut self.shared.session.borrow_mut());
        if result.is_err() {
            return false;
        }
        sync_timers(&self.shared);
        notify(&self.shared);
        true
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Seed a new shuffle source from the browser's entropy source
fn fresh_rng() -> XorShiftRng {
    let mut seed = [0u8; 8];
    match getrandom::getrandom(&mut seed) {
        Ok(()) => XorShiftRng::seed_from_u64(u64::from_le_bytes(seed)),
        Err(e) => {
            log::warn(&format!("getrandom failed ({}), seeding from clock", e));
            XorShiftRng::seed_from_u64(js_sys::Date::now() as u64)
        }
    }
}

/// Start a timeout for every newly pending timer and drop the timeouts of
/// timers the session no longer wants. Dropping a `Timeout` clears it.
fn sync_timers(shared: &Rc<Shared>) {
    let pending = shared.session.borrow().pending_timers().to_vec();
    let mut timers = shared.timers.borrow_mut();

    timers.retain(|id, _| pending.iter().any(|t| t.id == *id));

    for timer in pending {
        if timers.contains_key(&timer.id) {
            continue;
        }
        let weak = Rc::downgrade(shared);
        let id = timer.id;
        let handle = Timeout::new(timer.delay_ms, move || {
            if let Some(shared) = weak.upgrade() {
                on_timer(&shared, id);
            }
        });
        timers.insert(id, handle);
    }
}

fn on_timer(shared: &Rc<Shared>, id: TimerId) {
    // Clearing an elapsed timeout is a no-op; this just frees its closure.
    let fired = shared.timers.borrow_mut().remove(&id);

    let result = shared.session.borrow_mut().fire_timer(id);
    sync_timers(shared);
    if result.is_ok() {
        notify(shared);
    }
    drop(fired);
}

fn notify(shared: &Shared) {
    let callback = shared.on_change.borrow().clone();
    if let Some(callback) = callback {
        if let Err(e) = callback.call0(&JsValue::NULL) {
            web_sys::console::warn_2(&JsValue::from_str("on_change callback threw"), &e);
        }
    }
}
