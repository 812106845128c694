use alloc::vec;

use super::{id, pairing_session, playing_session, positions_of, reveal_and_resolve, setup_session};
use crate::config::DisplayPrefs;
use crate::types::{ImageId, Pair, Visibility};
use crate::view::GameView;

#[test]
fn test_setup_view_lists_images() {
    let session = setup_session(3);
    let view = session.view();

    assert_eq!(view.stage, "setup");
    assert_eq!(view.images.len(), 3);
    assert_eq!(view.images[2].name, "face2.png");
    assert_eq!(view.images[2].mime_type, "image/png");
    assert!(view.has_back_image);
    assert!(view.can_confirm);
    assert!(!view.can_start);
    assert!(view.cards.is_empty());
    assert_eq!(view.prefs, DisplayPrefs::default());
}

#[test]
fn test_pairing_view_tracks_selection_and_pairs() {
    let mut session = pairing_session(4);
    session.select(id(3)).unwrap();
    session.select(id(1)).unwrap();
    session.commit_pair().unwrap();
    session.select(id(2)).unwrap();

    let view = session.view();

    assert_eq!(view.stage, "pairing");
    assert_eq!(view.unpaired, vec![ImageId(0), ImageId(2)]);
    assert_eq!(view.selection, vec![ImageId(2)]);
    assert_eq!(view.pairs, vec![Pair::new(id(3), id(1))]);
    assert!(view.can_start);
    assert!(!view.can_confirm);
}

#[test]
fn test_play_view_hides_faces_of_hidden_cards() {
    let mut session = playing_session(4, &[(0, 1), (2, 3)], 9);
    let deck = session.game().unwrap().deck().to_vec();
    let [a, b] = positions_of(&deck, 0);
    reveal_and_resolve(&mut session, [a, b]);

    let [c, _] = positions_of(&deck, 1);
    session.reveal(c).unwrap();

    let view = session.view();
    assert_eq!(view.stage, "play");
    assert_eq!(view.cards.len(), 4);
    assert_eq!(view.matched_pairs, 1);
    assert_eq!(view.total_pairs, 2);
    assert_eq!(view.progress_percent, 50);
    assert!(!view.resolving);

    for card in &view.cards {
        let expected = if card.position == a || card.position == b {
            Visibility::Matched
        } else if card.position == c {
            Visibility::Revealed
        } else {
            Visibility::Hidden
        };
        assert_eq!(card.visibility, expected);
        match card.visibility {
            Visibility::Hidden => assert!(card.face_id.is_none()),
            _ => assert_eq!(card.face_id, Some(deck[card.position as usize].face_id)),
        }
    }
}

#[test]
fn test_view_reports_resolving() {
    let mut session = playing_session(4, &[(0, 1), (2, 3)], 9);
    session.reveal(0).unwrap();
    session.reveal(1).unwrap();
    assert!(session.view().resolving);
}

#[test]
fn test_view_omits_cards_after_editing_pairs() {
    let mut session = playing_session(2, &[(0, 1)], 9);
    session.edit_pairs().unwrap();

    let view = session.view();
    assert_eq!(view.stage, "pairing");
    assert!(view.cards.is_empty());
    assert_eq!(view.total_pairs, 0);
    assert_eq!(view.progress_percent, 0);
}

#[test]
fn test_stage_names() {
    let mut session = playing_session(2, &[(0, 1)], 9);
    let deck = session.game().unwrap().deck().to_vec();
    reveal_and_resolve(&mut session, positions_of(&deck, 0));
    let win = session.pending_timers()[0].id;
    session.fire_timer(win).unwrap();

    let view = GameView::from_session(&session);
    assert_eq!(view.stage, "win");
    assert_eq!(view.progress_percent, 100);
    assert!(view
        .cards
        .iter()
        .all(|card| card.visibility == Visibility::Matched));
}
