//! A single game, from the coin flip to the last move.

use anyhow::Result;
use tracing::{info, instrument};

use crate::board::Board;
use crate::coin::Coin;
use crate::input::InputProvider;
use crate::messages::Reporter;
use crate::outcome::Outcome;
use crate::player::{Player, Seat};
use crate::turn::TurnSequencer;

/// How a finished game went.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSummary {
    /// The game's number within the match, counting from 1.
    pub number: u32,
    /// The seat that opened the game.
    pub first: Seat,
    /// The seat whose move ended the game.
    pub last: Seat,
    /// How the game ended; never [`Outcome::Ongoing`].
    pub outcome: Outcome,
    /// How many moves were placed.
    pub moves: usize,
}

impl GameSummary {
    /// The seat that won, if anybody did.
    #[must_use]
    pub const fn winner(&self) -> Option<Seat> {
        match self.outcome {
            Outcome::Win(_) => Some(self.last),
            Outcome::Ongoing | Outcome::Tie => None,
        }
    }
}

/// One game between two players who outlive it.
pub struct GameSession<'game> {
    /// The game's number within the match.
    number: u32,
    /// Both players, borrowed from the match.
    players: &'game mut [Player; 2],
    /// The board this game is played on.
    board: Board,
}

impl<'game> GameSession<'game> {
    /// Prepares game `number` between `players`.
    pub fn new(number: u32, players: &'game mut [Player; 2]) -> Self {
        Self {
            number,
            players,
            board: Board::new(),
        }
    }

    /// The board as it stands.
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Plays the game to the end.
    ///
    /// Both players' last-move flags are cleared, the tally is announced, and the coin decides who
    /// goes first before the turns start on an empty board.
    ///
    /// # Errors
    ///
    /// Fails only if `input` or `reporter` do.
    #[instrument(skip_all, fields(game = self.number))]
    pub fn start<I, R>(
        &mut self,
        coin: &mut Coin,
        input: &mut I,
        reporter: &mut R,
    ) -> Result<GameSummary>
    where
        I: InputProvider + ?Sized,
        R: Reporter + ?Sized,
    {
        for player in self.players.iter_mut() {
            player.set_last_move(false);
        }
        reporter.game_started(self.number, self.players)?;

        let first = self.flip(coin, reporter)?;
        info!(first = first.number(), "game started");

        self.board.reset();
        reporter.board(&self.board)?;
        reporter.turn(first.of(self.players))?;

        let mut turns = TurnSequencer::new(&mut self.board, self.players, first);
        let outcome = turns.run(input, reporter)?;
        let moves = turns.moves();

        let last = Seat::BOTH
            .into_iter()
            .find(|seat| seat.of(self.players).made_last_move())
            .unwrap_or(first);
        info!(?outcome, moves, "game over");

        Ok(GameSummary {
            number: self.number,
            first,
            last,
            outcome,
            moves,
        })
    }

    /// Flips the coin and marks exactly one player as the first mover.
    fn flip<R>(&mut self, coin: &mut Coin, reporter: &mut R) -> Result<Seat>
    where
        R: Reporter + ?Sized,
    {
        let side = coin.flip();
        let first = Seat::called_by(side);

        first.of_mut(self.players).set_first_mover(true);
        first.other().of_mut(self.players).set_first_mover(false);

        reporter.coin_flipped(side, first.of(self.players))?;
        Ok(first)
    }
}
