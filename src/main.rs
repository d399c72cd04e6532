//! # tictacterm
//!
//! A game of tic-tac-toe for two players sharing one terminal. A coin flip decides who opens each
//! game, and a running tally is kept for as long as the players keep asking for another round.

#![expect(
    unused_crate_dependencies,
    reason = "The dependencies are used in the library crate."
)]

use anyhow::Result;
use tictacterm::init;

fn main() -> Result<()> {
    init()
}
