//! The turn sequencer, a small state machine that drives one game from the opening move to a win
//! or a tie.
//!
//! ```text
//! AwaitingMove(p) -> Validating(p) -> Applying(p) -> Evaluating(p) -> AwaitingMove(other)
//!                        ^    |                                    \-> Terminal
//!                        \----/ (move turned down)
//! ```

use anyhow::Result;
use tracing::debug;

use crate::board::{Board, Position};
use crate::input::InputProvider;
use crate::messages::Reporter;
use crate::outcome::{evaluate, Outcome};
use crate::player::{Player, Seat};
use crate::validator;

/// Where the sequencer is within a turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnState {
    /// Waiting for the seated player to type a move.
    AwaitingMove(Seat),
    /// Checking the line the player typed.
    Validating(Seat, String),
    /// Writing an accepted move to the board.
    Applying(Seat, Position),
    /// Looking for a win or a tie after the player's move.
    Evaluating(Seat),
    /// The game is over.
    Terminal(Outcome),
}

/// Runs the turns of a single game over a board and a pair of players it borrows.
pub struct TurnSequencer<'game> {
    /// The board moves are written to.
    board: &'game mut Board,
    /// Both players, indexed by [`Seat`].
    players: &'game mut [Player; 2],
    /// The current state.
    state: TurnState,
    /// Accepted moves so far.
    moves: usize,
}

impl<'game> TurnSequencer<'game> {
    /// Starts a game with `first` to move.
    pub fn new(board: &'game mut Board, players: &'game mut [Player; 2], first: Seat) -> Self {
        Self {
            board,
            players,
            state: TurnState::AwaitingMove(first),
            moves: 0,
        }
    }

    /// The current state.
    #[must_use]
    pub const fn state(&self) -> &TurnState {
        &self.state
    }

    /// How many moves have been accepted.
    #[must_use]
    pub const fn moves(&self) -> usize {
        self.moves
    }

    /// Advances the machine by one transition. Stepping a finished game does nothing.
    ///
    /// # Errors
    ///
    /// Fails only if `input` or `reporter` do; turned down moves are handled here.
    pub fn step<I, R>(&mut self, input: &mut I, reporter: &mut R) -> Result<()>
    where
        I: InputProvider + ?Sized,
        R: Reporter + ?Sized,
    {
        self.state = match self.state.clone() {
            TurnState::AwaitingMove(seat) => {
                let raw = input.read_move(seat.of(self.players), false)?;
                TurnState::Validating(seat, raw)
            }
            TurnState::Validating(seat, raw) => match validator::check(self.board, &raw) {
                Ok(position) => TurnState::Applying(seat, position),
                Err(err) => {
                    debug!(player = seat.number(), input = %raw, %err, "move turned down");
                    reporter.invalid_move(&err)?;
                    let raw = input.read_move(seat.of(self.players), true)?;
                    TurnState::Validating(seat, raw)
                }
            },
            TurnState::Applying(seat, position) => {
                self.board.place(position, seat.token());
                self.moves += 1;
                debug!(player = seat.number(), %position, "move placed");
                reporter.board(self.board)?;
                TurnState::Evaluating(seat)
            }
            TurnState::Evaluating(seat) => match evaluate(self.board, seat.token()) {
                Outcome::Ongoing => {
                    let next = seat.other();
                    reporter.turn(next.of(self.players))?;
                    TurnState::AwaitingMove(next)
                }
                outcome => {
                    self.finish(seat, outcome, reporter)?;
                    TurnState::Terminal(outcome)
                }
            },
            TurnState::Terminal(outcome) => TurnState::Terminal(outcome),
        };

        Ok(())
    }

    /// Steps until the game ends and returns how it ended.
    ///
    /// # Errors
    ///
    /// Fails only if `input` or `reporter` do.
    pub fn run<I, R>(&mut self, input: &mut I, reporter: &mut R) -> Result<Outcome>
    where
        I: InputProvider + ?Sized,
        R: Reporter + ?Sized,
    {
        loop {
            if let TurnState::Terminal(outcome) = self.state {
                break Ok(outcome);
            }
            self.step(input, reporter)?;
        }
    }

    /// Credits the player in `seat` with ending the game, and with the win if there is one.
    fn finish<R>(&mut self, seat: Seat, outcome: Outcome, reporter: &mut R) -> Result<()>
    where
        R: Reporter + ?Sized,
    {
        let player = seat.of_mut(self.players);
        player.set_last_move(true);

        if let Outcome::Win(_) = outcome {
            player.record_win();
            reporter.victory(player)
        } else {
            reporter.tie()
        }
    }
}
