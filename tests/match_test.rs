//! Tests that play whole games and matches from a script.

#![expect(
    unused_crate_dependencies,
    reason = "Integration tests only exercise the library crate."
)]

use tictacterm::{
    Board, Coin, MatchLoop, Outcome, Player, ScriptedInput, Seat, Token, Transcript,
    TurnSequencer,
};

/// Moves that make whoever opens win on row a.
const OPENER_WINS: [&str; 5] = ["a0", "b1", "a1", "c2", "a2"];

#[test]
fn test_player_one_wins_row_a() {
    let mut board = Board::new();
    let mut players = [Player::new(Seat::One, "Ada"), Player::new(Seat::Two, "Grace")];
    Seat::One.of_mut(&mut players).set_first_mover(true);
    let mut input = ScriptedInput::new(OPENER_WINS);
    let mut transcript = Transcript::new();

    let outcome = TurnSequencer::new(&mut board, &mut players, Seat::One)
        .run(&mut input, &mut transcript)
        .unwrap();

    assert_eq!(outcome, Outcome::Win(Token::X));
    let [ada, grace] = &players;
    assert_eq!(ada.wins(), 1);
    assert!(ada.made_last_move());
    assert_eq!(grace.wins(), 0);
}

#[test]
fn test_invalid_moves_are_asked_again() {
    let mut board = Board::new();
    let mut players = [Player::new(Seat::One, "Ada"), Player::new(Seat::Two, "Grace")];
    let mut input = ScriptedInput::new([
        "a0", "d4", "", "a0", "b1", "a1", "c2", "a2",
    ]);
    let mut transcript = Transcript::new();

    let outcome = TurnSequencer::new(&mut board, &mut players, Seat::One)
        .run(&mut input, &mut transcript)
        .unwrap();

    assert_eq!(outcome, Outcome::Win(Token::X));
    assert!(transcript.contains("there is no row d"));
    assert!(transcript.contains("is not a position"));
    assert!(transcript.contains("a0 is already taken"));
}

#[test]
fn test_tally_carries_over_to_the_next_game() {
    let mut script = vec!["Ada", "Grace"];
    script.extend(OPENER_WINS);
    script.push("y");
    script.extend(OPENER_WINS);
    script.push("n");
    let mut input = ScriptedInput::new(script);
    let mut transcript = Transcript::new();

    let mut games = MatchLoop::setup(Coin::with_seed(2024), &mut input).unwrap();
    let summaries = games.run(&mut input, &mut transcript).unwrap();

    assert_eq!(summaries.len(), 2);
    assert_eq!(games.games_played(), 2);
    assert_eq!(input.remaining(), 0);

    let first_winner = summaries
        .first()
        .and_then(|summary| summary.winner())
        .unwrap();
    let name = first_winner.of(games.players()).name().to_owned();

    assert!(transcript.contains("----------Game 2----------"));
    assert!(transcript.contains(&format!("{name} : 1")));

    let total: u32 = games.players().iter().map(Player::wins).sum();
    assert_eq!(total, 2);
}

#[test]
fn test_only_lowercase_y_replays() {
    let mut script = vec!["Ada", "Grace"];
    script.extend(OPENER_WINS);
    script.push("Y");
    let mut input = ScriptedInput::new(script);
    let mut transcript = Transcript::new();

    let mut games = MatchLoop::setup(Coin::with_seed(8), &mut input).unwrap();
    let summaries = games.run(&mut input, &mut transcript).unwrap();

    assert_eq!(summaries.len(), 1);
    assert_eq!(games.games_played(), 1);
    assert!(!transcript.contains("----------Game 2----------"));
}

#[test]
fn test_ties_leave_the_tally_alone() {
    let mut script = vec!["Ada", "Grace"];
    script.extend(["a0", "a1", "a2", "b1", "b0", "b2", "c1", "c0", "c2"]);
    script.push("n");
    let mut input = ScriptedInput::new(script);
    let mut transcript = Transcript::new();

    let mut games = MatchLoop::setup(Coin::with_seed(11), &mut input).unwrap();
    let summaries = games.run(&mut input, &mut transcript).unwrap();

    let summary = summaries.first().unwrap();
    assert_eq!(summary.outcome, Outcome::Tie);
    assert_eq!(summary.moves, 9);
    assert!(games.players().iter().all(|player| player.wins() == 0));
    assert!(transcript.contains("TIE!"));
}

#[test]
fn test_both_players_open_over_many_games() {
    let mut coin = Coin::with_seed(77);
    let mut openers = [0_u32; 2];
    for _ in 0..2_000 {
        match Seat::called_by(coin.flip()) {
            Seat::One => openers[0] += 1,
            Seat::Two => openers[1] += 1,
        }
    }
    for count in openers {
        assert!((900..=1_100).contains(&count), "opened {count} of 2000 games");
    }
}

#[test]
fn test_running_out_of_script_is_an_error() {
    let mut input = ScriptedInput::new(["Ada", "Grace", "a0"]);
    let mut transcript = Transcript::new();
    let mut games = MatchLoop::setup(Coin::with_seed(1), &mut input).unwrap();

    assert!(games.play_game(&mut input, &mut transcript).is_err());
}
