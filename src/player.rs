//! Players and the seats they sit in.
//!
//! A [`Player`] outlives any single game: the match keeps both of them around and every game only
//! borrows them. All changes to a player's per-game flags and tally go through the methods here.

use std::fmt;

use crate::board::Token;

/// One side of the coin used to pick who moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoinSide {
    /// The side that sends player two first.
    Heads,
    /// The side that sends player one first.
    Tails,
}

impl fmt::Display for CoinSide {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Heads => write!(formatter, "heads"),
            Self::Tails => write!(formatter, "tails"),
        }
    }
}

/// Which of the two players is meant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Seat {
    /// Player one, who plays X and calls tails.
    One,
    /// Player two, who plays O and calls heads.
    Two,
}

impl Seat {
    /// Both seats, in order.
    pub const BOTH: [Self; 2] = [Self::One, Self::Two];

    /// The number the seat is announced with.
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
        }
    }

    /// The token the seat always plays.
    #[must_use]
    pub const fn token(self) -> Token {
        match self {
            Self::One => Token::X,
            Self::Two => Token::O,
        }
    }

    /// The coin side the seat calls. Purely cosmetic; see [`Seat::called_by`].
    #[must_use]
    pub const fn coin_side(self) -> CoinSide {
        match self {
            Self::One => CoinSide::Tails,
            Self::Two => CoinSide::Heads,
        }
    }

    /// The seat that moves first when the coin lands on `side`.
    #[must_use]
    pub const fn called_by(side: CoinSide) -> Self {
        match side {
            CoinSide::Heads => Self::Two,
            CoinSide::Tails => Self::One,
        }
    }

    /// The opponent's seat.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::One => Self::Two,
            Self::Two => Self::One,
        }
    }

    /// The player sitting in this seat.
    #[must_use]
    pub const fn of(self, players: &[Player; 2]) -> &Player {
        match self {
            Self::One => &players[0],
            Self::Two => &players[1],
        }
    }

    /// The player sitting in this seat, mutably.
    pub fn of_mut(self, players: &mut [Player; 2]) -> &mut Player {
        match self {
            Self::One => &mut players[0],
            Self::Two => &mut players[1],
        }
    }
}

/// A person at the keyboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    /// Which seat the player sits in.
    seat: Seat,
    /// The name shown on the console.
    name: String,
    /// Whether the player moves first in the current game.
    goes_first: bool,
    /// Whether the player's move ended the current game.
    made_last_move: bool,
    /// Games won since the program started.
    wins: u32,
}

impl Player {
    /// Seats a new player with no wins.
    #[must_use]
    pub fn new(seat: Seat, name: impl Into<String>) -> Self {
        Self {
            seat,
            name: name.into(),
            goes_first: false,
            made_last_move: false,
            wins: 0,
        }
    }

    /// The seat the player sits in.
    #[must_use]
    pub const fn seat(&self) -> Seat {
        self.seat
    }

    /// The player's number, 1 or 2.
    #[must_use]
    pub const fn number(&self) -> u8 {
        self.seat.number()
    }

    /// The player's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The token the player places.
    #[must_use]
    pub const fn token(&self) -> Token {
        self.seat.token()
    }

    /// The coin side the player called.
    #[must_use]
    pub const fn coin_side(&self) -> CoinSide {
        self.seat.coin_side()
    }

    /// Whether the player moves first in the current game.
    #[must_use]
    pub const fn goes_first(&self) -> bool {
        self.goes_first
    }

    /// Whether the player's move ended the current game.
    #[must_use]
    pub const fn made_last_move(&self) -> bool {
        self.made_last_move
    }

    /// Games won so far.
    #[must_use]
    pub const fn wins(&self) -> u32 {
        self.wins
    }

    /// Marks whether the player moves first in the coming game.
    pub fn set_first_mover(&mut self, first: bool) {
        self.goes_first = first;
    }

    /// Marks whether the player's move ended the game.
    pub fn set_last_move(&mut self, last: bool) {
        self.made_last_move = last;
    }

    /// Adds a win to the player's tally.
    pub fn record_win(&mut self) {
        self.wins = self.wins.saturating_add(1);
    }
}
