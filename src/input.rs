//! This module contains everything related to taking input from the players. The game only ever
//! asks for a line of text; turning that text into a name, a move or an answer is left to the
//! caller, so that a scripted source can stand in for the keyboard.
//!
//! The console implementation uses the `dialoguer` crate for its prompts.

use std::collections::VecDeque;

use anyhow::{bail, Result};
use console::{style, Term};
use dialoguer::theme::ColorfulTheme;
use dialoguer::Input;

use crate::player::{Player, Seat};

/// A source of lines typed by the players. Every call blocks until a line is available.
pub trait InputProvider {
    /// Reads the display name for the player about to sit in `seat`.
    ///
    /// # Errors
    ///
    /// Fails if the underlying source can't produce a line.
    fn read_name(&mut self, seat: Seat) -> Result<String>;

    /// Reads a move for `player`. `retry` is set when the previous attempt was turned down.
    ///
    /// # Errors
    ///
    /// Fails if the underlying source can't produce a line.
    fn read_move(&mut self, player: &Player, retry: bool) -> Result<String>;

    /// Reads the answer to whether another game should be played.
    ///
    /// # Errors
    ///
    /// Fails if the underlying source can't produce a line.
    fn read_continue(&mut self) -> Result<String>;
}

/// Prompts on the terminal.
pub struct ConsoleInput {
    /// The terminal the prompts are drawn on.
    term: Term,
    /// The prompt theme.
    theme: ColorfulTheme,
}

impl ConsoleInput {
    /// Prompts on `term`.
    #[must_use]
    pub fn new(term: Term) -> Self {
        Self {
            term,
            theme: ColorfulTheme::default(),
        }
    }

    /// Reads one line after showing `prompt`. Empty answers are allowed.
    fn line(&self, prompt: String) -> Result<String> {
        let input: String = Input::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text_on(&self.term)?;

        Ok(input)
    }
}

impl InputProvider for ConsoleInput {
    fn read_name(&mut self, seat: Seat) -> Result<String> {
        self.term.write_line("")?;
        self.term.write_line(&format!(
            "Player {} will play token {} and choose {} on the coin flip.",
            seat.number(),
            style(seat.token()).bold(),
            seat.coin_side()
        ))?;

        self.line(format!("{}", style("What is your name?").bold()))
    }

    fn read_move(&mut self, player: &Player, retry: bool) -> Result<String> {
        let prompt = if retry {
            "Please enter a valid position".to_owned()
        } else {
            format!(
                "{} ({}), enter a position to place a token (i.e. b1)",
                player.name(),
                player.token()
            )
        };

        self.line(format!("{}", style(prompt).bold()))
    }

    fn read_continue(&mut self) -> Result<String> {
        self.line(format!("{}", style("Do you want to play again? y/n").bold()))
    }
}

/// Replays a fixed list of lines, for tests and demos. Running out of lines is an error, so a
/// script that is too short can't hang a game.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    /// Lines not yet handed out.
    lines: VecDeque<String>,
}

impl ScriptedInput {
    /// A script made of `lines`, handed out in order regardless of which prompt asks.
    #[must_use]
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// How many lines are left.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }

    /// Hands out the next line.
    fn next_line(&mut self, wanted: &str) -> Result<String> {
        match self.lines.pop_front() {
            Some(line) => Ok(line),
            None => bail!("the input script ran out while waiting for {wanted}"),
        }
    }
}

impl InputProvider for ScriptedInput {
    fn read_name(&mut self, seat: Seat) -> Result<String> {
        self.next_line(&format!("the name of player {}", seat.number()))
    }

    fn read_move(&mut self, player: &Player, _retry: bool) -> Result<String> {
        self.next_line(&format!("a move by {}", player.name()))
    }

    fn read_continue(&mut self) -> Result<String> {
        self.next_line("an answer to the replay prompt")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_hands_out_lines_in_order() {
        let player = Player::new(Seat::One, "Ada");
        let mut input = ScriptedInput::new(["Ada", "b1", "y"]);

        assert_eq!(input.read_name(Seat::One).unwrap(), "Ada");
        assert_eq!(input.read_move(&player, false).unwrap(), "b1");
        assert_eq!(input.read_continue().unwrap(), "y");
        assert_eq!(input.remaining(), 0);
    }

    #[test]
    fn test_exhausted_script_is_an_error() {
        let mut input = ScriptedInput::default();
        let err = input.read_continue().unwrap_err();
        assert!(err.to_string().contains("ran out"));
    }
}
