//! Tests for the turn controller.

use tictaco::{
    AgentKind, BoardError, Figure, GameConfig, GameMode, Match, MatchError, MatchOutcome, Player,
    RandomAgent, Seat, TurnOutcome,
};

fn human(name: &str, figure: &str, goes_first: bool) -> Seat {
    Seat::human(Player::human(name, Figure::new(figure), goes_first))
}

fn cpu(name: &str, figure: &str, goes_first: bool, kind: AgentKind, seed: u64) -> Seat {
    Seat::cpu(
        Player::cpu(name, Figure::new(figure), goes_first),
        kind.build(Some(seed)),
    )
}

#[test]
fn test_turns_alternate_only_on_accepted_moves() {
    let mut game = Match::new([human("Ada", "X", true), human("Bob", "O", false)]).unwrap();

    let attempts = [5, 5, 0, 1, 1, 10, 9];
    let accepted = [true, false, false, true, false, false, true];
    for (pos, ok) in attempts.into_iter().zip(accepted) {
        let before = game.turn();
        let result = game.play(pos).unwrap();
        if ok {
            assert_eq!(result, TurnOutcome::Continue);
            assert_ne!(game.turn(), before);
        } else {
            assert!(matches!(result, TurnOutcome::Rejected(_)));
            assert_eq!(game.turn(), before);
        }
    }

    assert_eq!(game.history(), &[(0, 5), (1, 1), (0, 9)]);
    assert_eq!(game.seats()[0].player().moves(), &vec![5, 9]);
    assert_eq!(game.seats()[1].player().last_move(), Some(1));
    assert!(game.check_invariants().is_ok());
}

#[test]
fn test_second_seat_can_open() {
    let game = Match::new([human("Ada", "X", false), human("Bob", "O", true)]).unwrap();
    assert_eq!(game.first_mover(), 1);
    assert_eq!(game.current().name(), "Bob");
}

#[test]
fn test_win_ends_match() {
    let mut game = Match::new([human("Ada", "X", true), human("Bob", "O", false)]).unwrap();
    for pos in [1, 4, 2, 5] {
        assert_eq!(game.play(pos), Ok(TurnOutcome::Continue));
    }
    let expected = MatchOutcome::Winner {
        seat: 0,
        name: "Ada".to_string(),
        figure: Figure::new("X"),
    };
    assert_eq!(game.play(3), Ok(TurnOutcome::Finished(expected.clone())));
    assert_eq!(game.outcome(), Some(&expected));
    assert_eq!(game.play(9), Err(MatchError::MatchOver));
    assert!(!game.is_cpu_turn());
}

#[test]
fn test_full_board_is_a_draw() {
    let mut game = Match::new([human("Ada", "X", true), human("Bob", "O", false)]).unwrap();
    let moves = [1, 2, 3, 6, 4, 7, 5, 9, 8];
    for pos in &moves[..8] {
        assert_eq!(game.play(*pos), Ok(TurnOutcome::Continue));
    }
    assert_eq!(
        game.play(moves[8]),
        Ok(TurnOutcome::Finished(MatchOutcome::Draw))
    );
    assert!(game.board().is_full());
}

#[test]
fn test_moves_left_tracks_each_player() {
    let mut game = Match::new([human("Ada", "X", true), human("Bob", "O", false)]).unwrap();
    assert_eq!(game.current().moves_left(), 5);
    assert_eq!(game.opponent().moves_left(), 4);
    game.play(1).unwrap();
    assert_eq!(game.opponent().moves_left(), 4);
    assert_eq!(game.current().moves_left(), 4);
}

#[test]
fn test_cpu_without_agent_is_rejected() {
    let seat = Seat::human(Player::cpu("Randy", Figure::new("🦦"), false));
    let err = Match::new([human("Ada", "X", true), seat]).unwrap_err();
    assert_eq!(err, MatchError::AgentMissing("Randy".to_string()));
}

#[test]
fn test_human_with_agent_is_rejected() {
    let seat = Seat::cpu(
        Player::human("Bob", Figure::new("O"), false),
        Box::new(RandomAgent::seeded(1)),
    );
    let err = Match::new([human("Ada", "X", true), seat]).unwrap_err();
    assert_eq!(err, MatchError::AgentMismatch("Bob".to_string()));
}

#[test]
fn test_shared_figure_is_rejected() {
    let err = Match::new([human("Ada", "X", true), human("Bob", "X", false)]).unwrap_err();
    assert_eq!(err, MatchError::DuplicateFigure(Figure::new("X")));
}

#[test]
fn test_cpu_replies_to_human() {
    let mut game = Match::new([
        human("Ada", "X", true),
        cpu("TicTaco", "🌮", false, AgentKind::Minimax, 3),
    ])
    .unwrap();

    assert_eq!(
        game.play_cpu_turn(),
        Err(MatchError::NotCpuTurn("Ada".to_string()))
    );
    game.play(1).unwrap();
    assert!(game.is_cpu_turn());
    assert_eq!(game.play_cpu_turn(), Ok(TurnOutcome::Continue));
    // The only non-losing reply to a corner opening is the center.
    assert_eq!(game.history(), &[(0, 1), (1, 5)]);
    assert!(!game.is_cpu_turn());
}

#[test]
fn test_run_to_end_stops_at_human() {
    let mut game = Match::new([
        human("Ada", "X", true),
        cpu("Randy", "🦦", false, AgentKind::Random, 3),
    ])
    .unwrap();
    assert_eq!(
        game.run_to_end(),
        Err(MatchError::NotCpuTurn("Ada".to_string()))
    );
}

#[test]
fn test_minimax_self_play_draws() {
    let mut game = Match::new([
        cpu("A", "X", true, AgentKind::Minimax, 1),
        cpu("B", "O", false, AgentKind::Minimax, 2),
    ])
    .unwrap();
    assert_eq!(game.run_to_end(), Ok(MatchOutcome::Draw));
    assert!(game.check_invariants().is_ok());
}

#[test]
fn test_minimax_never_loses_to_random() {
    for seed in 0..20 {
        let mut game = Match::new([
            cpu("Randy", "🦦", true, AgentKind::Random, seed),
            cpu("TicTaco", "🌮", false, AgentKind::Minimax, seed),
        ])
        .unwrap();
        let outcome = game.run_to_end().unwrap();
        assert!(
            !matches!(outcome, MatchOutcome::Winner { seat: 0, .. }),
            "seed {seed}: {outcome}"
        );
    }
}

#[test]
fn test_modes_seat_expected_opponents() {
    let config = GameConfig::default().with_seed(Some(5));
    let game = Match::for_mode(GameMode::CpuEasy, &config).unwrap();
    assert_eq!(game.seats()[1].agent_kind(), Some(AgentKind::Random));
    assert_eq!(game.current().name(), "Player 1");

    let game = Match::for_mode(GameMode::Pvp, &config).unwrap();
    assert_eq!(game.seats()[1].agent_kind(), None);
    assert_eq!(game.opponent().name(), "Player 2");
}

#[test]
fn test_rejected_error_is_reported() {
    let mut game = Match::new([human("Ada", "X", true), human("Bob", "O", false)]).unwrap();
    game.play(7).unwrap();
    assert_eq!(
        game.play(7),
        Ok(TurnOutcome::Rejected(BoardError::Occupied(7)))
    );
}
