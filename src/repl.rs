use std::{
    error::Error,
    fmt::{self, Display, Formatter, Write as _},
    io::{self, BufRead, Write},
    num::ParseIntError,
    str::FromStr,
};

use log::debug;
use rand::{SeedableRng, rngs::SmallRng};

use crate::{
    board_display::BoardDisplay,
    coord::{Coord, ParseCoordError},
    event::TurnOutcome,
    game::Game,
    misc::{split_first_token, strip_prefix_token},
    playout::random_playout,
    side::Side,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Input {
    Help,
    Board,
    Flip,
    Restart,
    History,
    Quit,
    Options(Coord),
    Move(Coord, Coord),
    Random(usize),
}
impl Display for Input {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Input::Help => write!(f, "help")?,
            Input::Board => write!(f, "board")?,
            Input::Flip => write!(f, "flip")?,
            Input::Restart => write!(f, "restart")?,
            Input::History => write!(f, "history")?,
            Input::Quit => write!(f, "quit")?,
            Input::Options(position) => write!(f, "options {position}")?,
            Input::Move(origin, destination) => write!(f, "move {origin} {destination}")?,
            Input::Random(plies) => write!(f, "random {plies}")?,
        }
        Ok(())
    }
}
impl FromStr for Input {
    type Err = ParseInputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "help" => Ok(Input::Help),
            "board" => Ok(Input::Board),
            "flip" => Ok(Input::Flip),
            "restart" => Ok(Input::Restart),
            "history" => Ok(Input::History),
            "quit" => Ok(Input::Quit),
            s => {
                if let Some(s) = strip_prefix_token(s, "options") {
                    Ok(Input::Options(s.parse()?))
                } else if let Some(s) = strip_prefix_token(s, "move") {
                    let (origin, destination) =
                        split_first_token(s).ok_or(ParseInputError::MissingDestination)?;
                    Ok(Input::Move(origin.parse()?, destination.parse()?))
                } else if let Some(s) = strip_prefix_token(s, "random") {
                    Ok(Input::Random(s.parse()?))
                } else if let Ok(position) = s.parse() {
                    Ok(Input::Options(position))
                } else {
                    Err(ParseInputError::Unknown)
                }
            }
        }
    }
}

/// Startup settings of the interactive session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Settings {
    pub view: Side,
    /// Seed of the `random` command; `None` draws one from the OS.
    pub seed: Option<u64>,
}

fn new_game() -> io::Result<Game> {
    Game::new().map_err(io::Error::other)
}
fn write_outcome(output: &mut impl Write, outcome: TurnOutcome) -> io::Result<()> {
    for event in outcome.events() {
        writeln!(output, "{event}")?;
    }
    Ok(())
}
/// Runs the interactive loop on the process' standard streams.
///
/// # Errors
///
/// Fails on I/O errors and on broken game invariants.
pub fn repl(settings: Settings) -> io::Result<()> {
    run(
        io::stdin().lock(),
        io::stdout().lock(),
        io::stderr().lock(),
        settings,
    )
}
#[allow(
    clippy::too_many_lines,
    reason = "the commands are small and read best next to the state they touch"
)]
fn run(
    input: impl BufRead,
    mut output: impl Write,
    mut error: impl Write,
    settings: Settings,
) -> io::Result<()> {
    let mut lines = input.lines();

    let mut game = new_game()?;
    let mut rng = match settings.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    };
    let mut info = String::new();
    let mut highlighted = Vec::new();
    let mut update = true;
    let mut view = settings.view;
    let mut first_time = true;
    loop {
        if update {
            info.clear();
            match game.end_state() {
                Some(end_state) => writeln!(&mut info, "{end_state}").map_err(io::Error::other)?,
                None => {
                    let side = game.current_side();
                    writeln!(&mut info, "{side} plays").map_err(io::Error::other)?;
                    if game.is_targeted(side) {
                        writeln!(&mut info, "the {side} king is targeted")
                            .map_err(io::Error::other)?;
                    }
                }
            }
            if first_time {
                writeln!(&mut info, "type `help` for instructions").map_err(io::Error::other)?;
                first_time = false;
            }
            update = false;
            write!(
                output,
                "{}",
                BoardDisplay {
                    board: &game.board(),
                    view,
                    highlighted: &highlighted,
                    info: &info,
                },
            )?;
        }
        write!(output, "> ")?;
        output.flush()?;
        let Some(text) = lines.next() else {
            return Ok(());
        };
        let text = text?;
        let input = match text.trim().parse() {
            Ok(input) => input,
            Err(err) => {
                writeln!(error, "Error: {err}")?;
                writeln!(error, "for available command, enter `help`")?;
                continue;
            }
        };
        debug!("command: {input}");
        match input {
            Input::Help => {
                writeln!(output, "board              - show the board again")?;
                writeln!(output, "flip               - flip the board")?;
                writeln!(output, "restart            - reset to starting position")?;
                writeln!(output, "history            - list the plies played so far")?;
                writeln!(output, "quit               - quit the game")?;
                writeln!(output, "options 2e2 (2e2)  - view the options of a piece")?;
                writeln!(output, "move 2e2 2e3       - move, capture, or promote")?;
                writeln!(output, "random <plies>     - play random plies")?;
            }
            Input::Board => update = true,
            Input::Flip => {
                view = !view;
                update = true;
            }
            Input::Restart => {
                game = new_game()?;
                highlighted.clear();
                update = true;
            }
            Input::History => {
                for (ply, event) in game.history().iter().enumerate() {
                    writeln!(output, "{}. {event}", ply + 1)?;
                }
            }
            Input::Quit => return Ok(()),
            Input::Options(position) => {
                let Some(piece) = game.piece_at(position) else {
                    writeln!(error, "Error: No piece found on {position}")?;
                    continue;
                };
                let options = game.options(piece.id()).map_err(io::Error::other)?;
                writeln!(output, "{piece} on {position}:")?;
                if options.is_empty() {
                    writeln!(output, "  no options")?;
                }
                for option in options.sorted() {
                    writeln!(output, "  {option}")?;
                }
                highlighted.clear();
                highlighted.extend(options.iter().map(|option| option.destination));
                update = true;
            }
            Input::Move(origin, destination) => {
                let Some(piece) = game.piece_at(origin) else {
                    writeln!(error, "Error: No piece found on {origin}")?;
                    continue;
                };
                let outcome = game
                    .request_action(piece.id(), destination)
                    .map_err(io::Error::other)?;
                write_outcome(&mut output, outcome)?;
                highlighted.clear();
                if !outcome.is_rejected() {
                    highlighted.push(origin);
                    highlighted.push(destination);
                }
                update = true;
            }
            Input::Random(plies) => {
                let outcomes =
                    random_playout(&mut game, &mut rng, plies).map_err(io::Error::other)?;
                for outcome in outcomes {
                    write_outcome(&mut output, outcome)?;
                }
                highlighted.clear();
                update = true;
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum ParseInputError {
    Coord(ParseCoordError),
    Int(ParseIntError),
    MissingDestination,
    Unknown,
}
impl From<ParseCoordError> for ParseInputError {
    fn from(value: ParseCoordError) -> Self {
        ParseInputError::Coord(value)
    }
}
impl From<ParseIntError> for ParseInputError {
    fn from(value: ParseIntError) -> Self {
        ParseInputError::Int(value)
    }
}
impl Display for ParseInputError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ParseInputError::Coord(err) => write!(f, "{err}")?,
            ParseInputError::Int(err) => write!(f, "{err}")?,
            ParseInputError::MissingDestination => write!(f, "a destination was expected")?,
            ParseInputError::Unknown => write!(f, "unknown command")?,
        }
        Ok(())
    }
}
impl Error for ParseInputError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ParseInputError::Coord(err) => Some(err),
            ParseInputError::Int(err) => Some(err),
            ParseInputError::MissingDestination | ParseInputError::Unknown => None,
        }
    }
}
#[cfg(test)]
mod test {
    use crate::{
        coord,
        repl::{Input, ParseInputError, Settings, run},
        side::Side,
    };

    fn session(commands: &str) -> (String, String) {
        let mut output = Vec::new();
        let mut error = Vec::new();
        run(
            commands.as_bytes(),
            &mut output,
            &mut error,
            Settings {
                view: Side::Gold,
                seed: Some(3),
            },
        )
        .unwrap();
        (
            String::from_utf8(output).unwrap(),
            String::from_utf8(error).unwrap(),
        )
    }

    #[test]
    fn parse_commands() {
        assert_eq!("help".parse(), Ok(Input::Help));
        assert_eq!(
            "move 2e2 2e3".parse(),
            Ok(Input::Move(coord!("2e2"), coord!("2e3")))
        );
        assert_eq!("options 1c1".parse(), Ok(Input::Options(coord!("1c1"))));
        assert_eq!("3a2".parse(), Ok(Input::Options(coord!("3a2"))));
        assert_eq!("random 12".parse(), Ok(Input::Random(12)));
        assert_eq!(
            "move 2e2".parse::<Input>(),
            Err(ParseInputError::MissingDestination)
        );
        assert_eq!("dance".parse::<Input>(), Err(ParseInputError::Unknown));
        assert!("random many".parse::<Input>().is_err());
    }
    #[test]
    fn display_parses_back() {
        for input in [
            Input::Flip,
            Input::Move(coord!("2e2"), coord!("2e3")),
            Input::Options(coord!("1b2")),
            Input::Random(4),
        ] {
            assert_eq!(input.to_string().parse(), Ok(input));
        }
    }
    #[test]
    fn plays_a_move() {
        let (output, error) = session("move 2e2 2e3\nhistory\nquit\n");
        assert!(error.is_empty());
        assert!(output.contains("gold plays"));
        assert!(output.contains("moves to 2e3"));
        assert!(output.contains("scarlet plays"));
        assert!(output.contains("1. "));
    }
    #[test]
    fn reports_bad_input() {
        let (output, error) = session("move 2f5 2f6\nnonsense\noptions 2e2\n");
        assert!(error.contains("No piece found on 2f5"));
        assert!(error.contains("unknown command"));
        assert!(output.contains("move 2e3"));
    }
    #[test]
    fn random_plies_follow_the_seed() {
        let (first, _) = session("random 6\nhistory\n");
        let (second, _) = session("random 6\nhistory\n");
        assert!(first.contains("6. "));
        let strip_ids = |text: &str| text.replace(|c: char| c == '#' || c.is_ascii_digit(), "");
        assert_eq!(strip_ids(&first), strip_ids(&second));
    }
}
