//! Everything the game says to the players. The [`Reporter`] trait lists the moments worth
//! announcing; [`TermReporter`] draws them on the terminal and [`Transcript`] keeps them as plain
//! lines.

use std::{thread, time::Duration};

use anyhow::Result;
use console::{style, Term};
use indicatif::ProgressBar;

use crate::board::{Board, Cell, Token, ROW_LABELS, SIZE};
use crate::player::{CoinSide, Player};
use crate::validator::MoveError;

/// How long the coin stays in the air when animated.
const FLIP_TIME: Duration = Duration::from_millis(1200);

/// What gets said when a game ends with a full board.
const TIE_MESSAGE: &str = "TIE! Impressive defense. Let's consider everyone a winner here \
(but not the kind of winner that gets a point on the tally).";

/// The line printed while the coin is in the air.
const COIN_TOSS: &str = "A coin is flung high into the air...";

/// A sink for the moments of a game worth telling the players about.
pub trait Reporter {
    /// A new game is about to start; `game` counts from 1.
    ///
    /// # Errors
    ///
    /// Fails if the output can't be written.
    fn game_started(&mut self, game: u32, players: &[Player; 2]) -> Result<()>;

    /// The coin landed on `side`, sending `first` first.
    ///
    /// # Errors
    ///
    /// Fails if the output can't be written.
    fn coin_flipped(&mut self, side: CoinSide, first: &Player) -> Result<()>;

    /// The board changed, or a game just started on it.
    ///
    /// # Errors
    ///
    /// Fails if the output can't be written.
    fn board(&mut self, board: &Board) -> Result<()>;

    /// It is now `player`'s turn.
    ///
    /// # Errors
    ///
    /// Fails if the output can't be written.
    fn turn(&mut self, player: &Player) -> Result<()>;

    /// A move was turned down.
    ///
    /// # Errors
    ///
    /// Fails if the output can't be written.
    fn invalid_move(&mut self, error: &MoveError) -> Result<()>;

    /// `winner` completed a line.
    ///
    /// # Errors
    ///
    /// Fails if the output can't be written.
    fn victory(&mut self, winner: &Player) -> Result<()>;

    /// The board filled up with no winner.
    ///
    /// # Errors
    ///
    /// Fails if the output can't be written.
    fn tie(&mut self) -> Result<()>;
}

/// Renders the board as text, one line per entry, with row letters down the side and column
/// numbers across the top.
#[must_use]
pub fn render_board(board: &Board) -> Vec<String> {
    render_board_with(board, ToString::to_string)
}

/// Renders the board, formatting each cell with `paint`.
fn render_board_with<F>(board: &Board, paint: F) -> Vec<String>
where
    F: Fn(&Cell) -> String,
{
    let mut lines = vec!["      0     1     2".to_owned(), String::new()];

    for (index, (label, row)) in ROW_LABELS.iter().zip(board.rows()).enumerate() {
        let cells: Vec<String> = row.iter().map(&paint).collect();
        lines.push(format!("{label}  [  {}  ]", cells.join("  |  ")));

        if index + 1 < SIZE {
            lines.push("   -------------------".to_owned());
        }
    }

    lines
}

/// The heading printed at the start of each game.
fn game_heading(game: u32) -> String {
    format!("----------Game {game}----------")
}

/// The running tally printed under the game heading.
fn tally_line(players: &[Player; 2]) -> String {
    let [one, two] = players;
    format!(
        "  {} : {}     {} : {}",
        one.name(),
        one.wins(),
        two.name(),
        two.wins()
    )
}

/// Where the coin landed and what that means.
fn coin_landing(side: CoinSide, first: &Player) -> String {
    format!(
        "It turns round and round eventually landing {side} side up. {} goes first.",
        first.name()
    )
}

/// The banner shown before each move.
fn turn_banner(player: &Player) -> String {
    format!("------{}'s turn!------", player.name())
}

/// The congratulations for the winner.
fn victory_message(winner: &Player) -> String {
    format!("VICTORY! Congratulations {}, you win!", winner.name())
}

/// Draws everything on a terminal, with some color.
pub struct TermReporter {
    /// Where the output goes.
    term: Term,
    /// Whether the coin flip gets a spinner.
    animate: bool,
}

impl TermReporter {
    /// Reports on `term`, spinning the coin if `animate` is set.
    #[must_use]
    pub const fn new(term: Term, animate: bool) -> Self {
        Self { term, animate }
    }

    /// Paints a cell in its player's color.
    fn paint(cell: &Cell) -> String {
        match *cell {
            Cell::Empty => " ".to_owned(),
            Cell::Taken(Token::X) => format!("{}", style(cell).cyan().bold()),
            Cell::Taken(Token::O) => format!("{}", style(cell).magenta().bold()),
        }
    }
}

impl Reporter for TermReporter {
    fn game_started(&mut self, game: u32, players: &[Player; 2]) -> Result<()> {
        self.term.write_line("")?;
        self.term
            .write_line(&format!("{}", style(game_heading(game)).bold()))?;
        self.term.write_line(&tally_line(players))?;
        Ok(())
    }

    fn coin_flipped(&mut self, side: CoinSide, first: &Player) -> Result<()> {
        self.term.write_line("")?;

        if self.animate {
            let spinner = ProgressBar::new_spinner();
            spinner.set_message(COIN_TOSS);
            spinner.enable_steady_tick(Duration::from_millis(80));
            thread::sleep(FLIP_TIME);
            spinner.finish_and_clear();
        }

        self.term.write_line(COIN_TOSS)?;
        self.term.write_line(&coin_landing(side, first))?;
        self.term.write_line("")?;
        Ok(())
    }

    fn board(&mut self, board: &Board) -> Result<()> {
        for line in render_board_with(board, Self::paint) {
            self.term.write_line(&line)?;
        }
        self.term.write_line("")?;
        Ok(())
    }

    fn turn(&mut self, player: &Player) -> Result<()> {
        self.term
            .write_line(&format!("{}", style(turn_banner(player)).bold()))?;
        Ok(())
    }

    fn invalid_move(&mut self, error: &MoveError) -> Result<()> {
        self.term
            .write_line(&format!("{}", style(error).red().underlined()))?;
        Ok(())
    }

    fn victory(&mut self, winner: &Player) -> Result<()> {
        self.term
            .write_line(&format!("{}", style(victory_message(winner)).green().bold()))?;
        self.term.write_line("")?;
        Ok(())
    }

    fn tie(&mut self) -> Result<()> {
        self.term
            .write_line(&format!("{}", style(TIE_MESSAGE).yellow().bold()))?;
        self.term.write_line("")?;
        Ok(())
    }
}

/// Keeps every report as a plain line of text.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    /// Lines in the order they were reported.
    lines: Vec<String>,
}

impl Transcript {
    /// An empty transcript.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every line reported so far.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Whether any line contains `needle`.
    #[must_use]
    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|line| line.contains(needle))
    }
}

impl Reporter for Transcript {
    fn game_started(&mut self, game: u32, players: &[Player; 2]) -> Result<()> {
        self.lines.push(game_heading(game));
        self.lines.push(tally_line(players));
        Ok(())
    }

    fn coin_flipped(&mut self, side: CoinSide, first: &Player) -> Result<()> {
        self.lines.push(COIN_TOSS.to_owned());
        self.lines.push(coin_landing(side, first));
        Ok(())
    }

    fn board(&mut self, board: &Board) -> Result<()> {
        self.lines.extend(render_board(board));
        Ok(())
    }

    fn turn(&mut self, player: &Player) -> Result<()> {
        self.lines.push(turn_banner(player));
        Ok(())
    }

    fn invalid_move(&mut self, error: &MoveError) -> Result<()> {
        self.lines.push(error.to_string());
        Ok(())
    }

    fn victory(&mut self, winner: &Player) -> Result<()> {
        self.lines.push(victory_message(winner));
        Ok(())
    }

    fn tie(&mut self) -> Result<()> {
        self.lines.push(TIE_MESSAGE.to_owned());
        Ok(())
    }
}
