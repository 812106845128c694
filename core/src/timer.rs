//! Cancellable timers
//!
//! The core never sleeps. Anything that has to happen "later" is recorded
//! here as a pending entry; the host starts a real timeout for each entry
//! and calls back with its id once the delay has elapsed. Cancelling an
//! entry is just removing it, so a late callback finds nothing and is
//! rejected.

use alloc::vec::Vec;
use parity_scale_codec::{Decode, Encode, MaxEncodedLen};
use scale_info::TypeInfo;
use serde::{Deserialize, Serialize};

use crate::config::Timing;

/// Handle of a scheduled timer. Never reused within a session.
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
pub struct TimerId(pub u64);

/// What happens when a timer fires
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Encode, Decode, TypeInfo, MaxEncodedLen, Serialize, Deserialize,
)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum TimerKind {
    /// Compare the two revealed cards
    Resolve,
    /// Turn a mismatched pair face down again
    HideMismatch { first: u32, second: u32 },
    /// Move from play to the win stage
    AnnounceWin,
}

impl TimerKind {
    pub fn delay_ms(&self, timing: &Timing) -> u32 {
        match self {
            TimerKind::Resolve => timing.reveal_delay_ms,
            TimerKind::HideMismatch { .. } => timing.mismatch_delay_ms,
            TimerKind::AnnounceWin => timing.win_delay_ms,
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Encode, Decode, TypeInfo, MaxEncodedLen, Serialize, Deserialize,
)]
pub struct ScheduledTimer {
    pub id: TimerId,
    pub kind: TimerKind,
    pub delay_ms: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scheduler {
    timing: Timing,
    next_id: u64,
    pending: Vec<ScheduledTimer>,
}

impl Scheduler {
    pub fn new(timing: Timing) -> Self {
        Self {
            timing,
            next_id: 1,
            pending: Vec::new(),
        }
    }

    pub fn timing(&self) -> &Timing {
        &self.timing
    }

    /// Record a new pending timer and return its handle
    pub fn schedule(&mut self, kind: TimerKind) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.pending.push(ScheduledTimer {
            id,
            kind,
            delay_ms: kind.delay_ms(&self.timing),
        });
        id
    }

    /// Remove a pending timer that is firing, returning what it was for.
    /// `None` means it was cancelled or already fired.
    pub fn take(&mut self, id: TimerId) -> Option<TimerKind> {
        let idx = self.pending.iter().position(|t| t.id == id)?;
        Some(self.pending.remove(idx).kind)
    }

    pub fn cancel(&mut self, id: TimerId) -> bool {
        self.take(id).is_some()
    }

    pub fn cancel_all(&mut self) {
        self.pending.clear();
    }

    pub fn is_pending(&self, id: TimerId) -> bool {
        self.pending.iter().any(|t| t.id == id)
    }

    pub fn pending(&self) -> &[ScheduledTimer] {
        &self.pending
    }
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new(Timing::default())
    }
}
