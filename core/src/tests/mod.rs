mod deck;
mod view;

use alloc::vec::Vec;

use crate::rng::XorShiftRng;
use crate::session::Session;
use crate::timer::{Scheduler, TimerId, TimerKind};
use crate::types::{Card, ImageId, Pair};

// ==========================================
// HELPER FUNCTIONS (Boilerplate Reduction)
// ==========================================

fn id(raw: u32) -> ImageId {
    ImageId(raw)
}

fn pairs(raw: &[(u32, u32)]) -> Vec<Pair> {
    raw.iter().map(|&(a, b)| Pair::new(id(a), id(b))).collect()
}

fn rng(seed: u64) -> XorShiftRng {
    XorShiftRng::seed_from_u64(seed)
}

/// Positions of the two cards dealt for `pair_index`
fn positions_of(deck: &[Card], pair_index: u32) -> [u32; 2] {
    let found: Vec<u32> = deck
        .iter()
        .filter(|c| c.pair_index == pair_index)
        .map(|c| c.position)
        .collect();
    assert_eq!(found.len(), 2, "every pair deals exactly two cards");
    [found[0], found[1]]
}

/// Two positions holding cards of different pairs
fn mismatched_positions(deck: &[Card]) -> [u32; 2] {
    let first = deck[0];
    let other = deck
        .iter()
        .find(|c| c.pair_index != first.pair_index)
        .expect("deck has at least two pairs");
    [first.position, other.position]
}

/// Id of the single pending timer of the given kind
fn pending_timer(scheduler: &Scheduler, matches: impl Fn(&TimerKind) -> bool) -> TimerId {
    let found: Vec<TimerId> = scheduler
        .pending()
        .iter()
        .filter(|t| matches(&t.kind))
        .map(|t| t.id)
        .collect();
    assert_eq!(found.len(), 1, "expected exactly one matching timer");
    found[0]
}

fn session_timer(session: &Session, matches: impl Fn(&TimerKind) -> bool) -> TimerId {
    let found: Vec<TimerId> = session
        .pending_timers()
        .iter()
        .filter(|t| matches(&t.kind))
        .map(|t| t.id)
        .collect();
    assert_eq!(found.len(), 1, "expected exactly one matching timer");
    found[0]
}

/// Session in setup with a back image and `faces` face images
fn setup_session(faces: usize) -> Session {
    let mut session = Session::new();
    session
        .set_back_image("back.png", alloc::vec![0xAA])
        .expect("setup accepts a back image");
    for i in 0..faces {
        session
            .add_face_image(alloc::format!("face{}.png", i), alloc::vec![i as u8])
            .expect("setup accepts face images");
    }
    session
}

/// Session in pairing with `faces` unpaired images
fn pairing_session(faces: usize) -> Session {
    let mut session = setup_session(faces);
    session.confirm_images().expect("images are ready");
    session
}

/// Session in play with the given pairs committed
fn playing_session(faces: usize, raw_pairs: &[(u32, u32)], seed: u64) -> Session {
    let mut session = pairing_session(faces);
    for &(a, b) in raw_pairs {
        if a == b {
            session.select_self(id(a)).expect("self pair stages");
        } else {
            session.select(id(a)).expect("left stages");
            session.select(id(b)).expect("right stages");
        }
        session.commit_pair().expect("pair commits");
    }
    session.start_game(&mut rng(seed)).expect("game starts");
    session
}

/// Reveal two positions and fire the resolve timer they schedule
fn reveal_and_resolve(session: &mut Session, [a, b]: [u32; 2]) {
    session.reveal(a).expect("first reveal");
    session.reveal(b).expect("second reveal");
    let timer = session_timer(session, |k| *k == TimerKind::Resolve);
    session.fire_timer(timer).expect("resolve fires");
}
