//! The game module contains the match loop, which seats the players once and keeps starting new
//! games for as long as they want to play.
//!
//! It also contains the `init()` function that parses the command line, sets up logging and the
//! terminal, and hands control to the match loop.

use anyhow::Result;
use clap::Parser;
use console::{style, Term};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::coin::Coin;
use crate::input::{ConsoleInput, InputProvider};
use crate::messages::{Reporter, TermReporter};
use crate::player::{Player, Seat};
use crate::session::{GameSession, GameSummary};

/// This struct holds the command-line options. Every option can also be set through the
/// environment, which is handy when the game is launched from a script.
#[derive(Parser, Debug)]
#[command(name = "tictacterm", version, about)]
#[command(next_line_help = true)]
struct Cli {
    /// Seed for the coin flip, to make the choice of first player reproducible.
    ///
    /// Without a seed the coin is seeded by the operating system and every run differs.
    #[arg(long, env = "TICTACTERM_SEED", value_name = "SEED")]
    seed: Option<u64>,
    /// Filter for diagnostic logging on stderr, in `tracing` env-filter syntax.
    #[arg(long, env = "TICTACTERM_LOG", value_name = "FILTER", default_value = "warn")]
    log: String,
    /// Skip the coin-flip animation.
    #[arg(long)]
    no_animation: bool,
}

/// Whether an answer to the replay prompt asks for another game. Only `y` does.
#[must_use]
pub fn wants_replay(answer: &str) -> bool {
    answer.trim() == "y"
}

/// A run of games between the same two players.
#[derive(Debug)]
pub struct MatchLoop {
    /// Both players, who keep their tallies from game to game.
    players: [Player; 2],
    /// Games started so far.
    games_played: u32,
    /// The coin that picks each game's opener.
    coin: Coin,
}

impl MatchLoop {
    /// Starts a match between players who have already been seated.
    #[must_use]
    pub const fn new(players: [Player; 2], coin: Coin) -> Self {
        Self {
            players,
            games_played: 0,
            coin,
        }
    }

    /// Asks each player for a name and seats them.
    ///
    /// # Errors
    ///
    /// Fails if the names can't be read.
    pub fn setup<I>(coin: Coin, input: &mut I) -> Result<Self>
    where
        I: InputProvider + ?Sized,
    {
        let one = Player::new(Seat::One, input.read_name(Seat::One)?);
        let two = Player::new(Seat::Two, input.read_name(Seat::Two)?);
        info!(one = one.name(), two = two.name(), "players seated");

        Ok(Self::new([one, two], coin))
    }

    /// Both players.
    #[must_use]
    pub const fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// How many games have been started.
    #[must_use]
    pub const fn games_played(&self) -> u32 {
        self.games_played
    }

    /// Plays the next game.
    ///
    /// # Errors
    ///
    /// Fails only if `input` or `reporter` do.
    pub fn play_game<I, R>(&mut self, input: &mut I, reporter: &mut R) -> Result<GameSummary>
    where
        I: InputProvider + ?Sized,
        R: Reporter + ?Sized,
    {
        self.games_played += 1;
        GameSession::new(self.games_played, &mut self.players).start(
            &mut self.coin,
            input,
            reporter,
        )
    }

    /// Plays games until the players decline another one, and returns every game's summary.
    ///
    /// # Errors
    ///
    /// Fails only if `input` or `reporter` do.
    pub fn run<I, R>(&mut self, input: &mut I, reporter: &mut R) -> Result<Vec<GameSummary>>
    where
        I: InputProvider + ?Sized,
        R: Reporter + ?Sized,
    {
        let mut summaries = Vec::new();

        loop {
            summaries.push(self.play_game(input, reporter)?);

            let answer = input.read_continue()?;
            if !wants_replay(&answer) {
                debug!(%answer, games = self.games_played, "match over");
                break Ok(summaries);
            }
        }
    }
}

/// Initializes the game and runs the match on the terminal. This is a `main()` function of sorts
/// though it is still called from main.rs.
///
/// # Errors
///
/// The function returns any terminal or prompt error, none of which the game can recover from.
pub fn init() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&cli.log))
        .with_writer(std::io::stderr)
        .init();

    let term = Term::stdout();
    let coin = cli.seed.map_or_else(Coin::new, Coin::with_seed);
    debug!(?cli, "configured");

    init_message(&term)?;

    let mut input = ConsoleInput::new(term.clone());
    let mut reporter = TermReporter::new(term.clone(), !cli.no_animation);
    let mut games = MatchLoop::setup(coin, &mut input)?;
    let summaries = games.run(&mut input, &mut reporter)?;

    let [one, two] = games.players();
    term.write_line(&format!(
        "{} after {} game(s): {} {}, {} {}.",
        style("Final tally").bold(),
        summaries.len(),
        one.name(),
        one.wins(),
        two.name(),
        two.wins()
    ))?;

    Ok(())
}

/// Clears the screen, sets the window title and greets the players.
fn init_message(term: &Term) -> Result<()> {
    const MSG: &str = "Welcome to tic-tac-toe";
    let msg = style(MSG).bold();

    term.clear_screen()?;
    term.set_title("tictacterm");

    term.write_line(&format!("{msg}"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::ScriptedInput;
    use crate::messages::Transcript;

    #[test]
    fn test_wants_replay() {
        assert!(wants_replay("y"));
        assert!(wants_replay(" y\n"));
        assert!(!wants_replay("Y"));
        assert!(!wants_replay("n"));
        assert!(!wants_replay("yes"));
        assert!(!wants_replay(""));
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["tictacterm"]).unwrap();
        assert_eq!(cli.seed, None);
        assert!(!cli.no_animation);
    }

    #[test]
    fn test_cli_flags() {
        let cli =
            Cli::try_parse_from(["tictacterm", "--seed", "7", "--log", "debug", "--no-animation"])
                .unwrap();
        assert_eq!(cli.seed, Some(7));
        assert_eq!(cli.log, "debug");
        assert!(cli.no_animation);
    }

    #[test]
    fn test_setup_reads_both_names() {
        let mut input = ScriptedInput::new(["Ada", ""]);
        let games = MatchLoop::setup(Coin::with_seed(3), &mut input).unwrap();

        let [one, two] = games.players();
        assert_eq!((one.name(), one.token()), ("Ada", Seat::One.token()));
        assert_eq!(two.name(), "");
        assert_eq!(games.games_played(), 0);
    }

    #[test]
    fn test_run_stops_on_anything_but_y() {
        let mut input = ScriptedInput::new([
            "Ada", "Grace", "a0", "b1", "a1", "c2", "a2", "nope",
        ]);
        let mut transcript = Transcript::new();
        let mut games = MatchLoop::setup(Coin::with_seed(5), &mut input).unwrap();

        let summaries = games.run(&mut input, &mut transcript).unwrap();

        assert_eq!(summaries.len(), 1);
        assert_eq!(games.games_played(), 1);
        assert_eq!(input.remaining(), 0);
    }
}
