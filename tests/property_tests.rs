//! Property tests for board generation and session invariants.

use proptest::prelude::*;

use memory_match::cards::{Board, CardId};
use memory_match::core::{GameRng, SessionConfig, ThemeId};
use memory_match::session::{GameSession, SessionState};

/// Even-product dimensions up to 8x8.
fn even_dimensions() -> impl Strategy<Value = (u16, u16)> {
    (1u16..=8, 1u16..=8).prop_filter("product must be even", |(r, c)| (r * c) % 2 == 0)
}

/// Odd numbers 1..=9.
fn odd() -> impl Strategy<Value = u16> {
    (0u16..5).prop_map(|n| 2 * n + 1)
}

proptest! {
    #[test]
    fn prop_board_has_every_value_twice((rows, columns) in even_dimensions(), seed in any::<u64>()) {
        let config = SessionConfig::new(rows, columns, 10, ThemeId::light());
        let board = Board::generate(&config, &mut GameRng::new(seed)).unwrap();

        let mut values: Vec<_> = board.iter().map(|c| c.pair_value).collect();
        values.sort();
        prop_assert_eq!(values, Board::pair_values(config.pair_count()));
        prop_assert!(board.iter().all(|c| !c.is_face_up && !c.is_matched));
    }

    #[test]
    fn prop_odd_boards_rejected(rows in odd(), columns in odd()) {
        let mut session = GameSession::with_seed(0);
        prop_assert!(session.start(SessionConfig::new(rows, columns, 10, ThemeId::light())).is_err());
        prop_assert_eq!(session.state(), SessionState::Idle);
    }

    #[test]
    fn prop_shuffle_is_seeded_permutation(data in prop::collection::vec(any::<u32>(), 0..64), seed in any::<u64>()) {
        let mut data = data;
        let mut again = data.clone();
        let mut sorted = data.clone();
        sorted.sort();

        GameRng::new(seed).shuffle(&mut data);
        GameRng::new(seed).shuffle(&mut again);
        prop_assert_eq!(&data, &again);

        data.sort();
        prop_assert_eq!(data, sorted);
    }

    /// Random clicks and time steps never break the session invariants.
    #[test]
    fn prop_random_play_keeps_invariants(
        seed in any::<u64>(),
        steps in prop::collection::vec((0u32..20, 0u64..1_500, 0u8..10), 1..120),
    ) {
        let mut session = GameSession::with_seed(seed);
        session.start(SessionConfig::new(4, 4, 30, ThemeId::light())).unwrap();

        for (card, ms, action) in steps {
            match action {
                0 => session.pause(),
                1 => session.resume(),
                2 => session.tick(),
                _ => session.select_card(CardId::new(card)),
            }
            session.advance(ms);

            prop_assert!(session.selection().len() <= 2);
            prop_assert!(session.matched_pairs() <= session.total_pairs());

            let matched_cards = session.board().iter().filter(|c| c.is_matched).count();
            prop_assert!(matched_cards <= session.matched_pairs() * 2);

            for id in session.selection() {
                let card = session.board().get(*id).unwrap();
                prop_assert!(card.is_face_up);
                prop_assert!(!card.is_matched);
            }

            if session.time_left() == 0 {
                prop_assert!(session.state().is_ended());
            }
        }
    }
}
