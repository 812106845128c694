#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod config;
pub mod deck;
pub mod error;
pub mod log;
pub mod matching;
pub mod pairing;
pub mod registry;
pub mod rng;
pub mod session;
pub mod timer;
pub mod types;
pub mod view;

#[cfg(test)]
mod tests;

pub use config::{DisplayPrefs, Timing};
pub use error::{GameError, GameResult};
pub use matching::{MatchEngine, MatchOutcome};
pub use pairing::PairingEngine;
pub use registry::ImageRegistry;
pub use rng::{DeckRng, XorShiftRng};
pub use session::Session;
pub use timer::{ScheduledTimer, Scheduler, TimerId, TimerKind};
pub use types::*;
pub use view::GameView;
