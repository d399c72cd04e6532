//! The library components of the game. They hold the board and the rules of tic-tac-toe, the
//! players and their tallies, and the loop that runs one game after another on the terminal.
//!
//! The starting point of the library is the game.rs file, which contains the match loop and the
//! `init()` function the binary calls. Everything that reads from or writes to the terminal goes
//! through the [`InputProvider`] and [`Reporter`] traits, so whole matches can be played from a
//! script.

#![expect(
    clippy::cargo_common_metadata,
    reason = "The package has not yet been pushed to a remote."
)]

mod board;
mod coin;
mod game;
mod input;
mod messages;
mod outcome;
mod player;
mod session;
mod turn;
mod validator;

pub use board::{Board, Cell, Position, Token, ROW_LABELS, SIZE};
pub use coin::Coin;
pub use game::{init, wants_replay, MatchLoop};
pub use input::{ConsoleInput, InputProvider, ScriptedInput};
pub use messages::{render_board, Reporter, TermReporter, Transcript};
pub use outcome::{evaluate, winning_line, Outcome, LINES};
pub use player::{CoinSide, Player, Seat};
pub use session::{GameSession, GameSummary};
pub use turn::{TurnSequencer, TurnState};
pub use validator::{check, is_valid, parse, MoveError};
