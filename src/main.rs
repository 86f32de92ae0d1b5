use std::io::{self, BufRead, Write};

use clap::Parser;
use log::{error, info};

use plum_board::errors::{BoardError, BoardResult};
use plum_board::game_state::chess_types::{GameState, Square};
use plum_board::interaction::selection::{BoardSession, SelectionOutcome};
use plum_board::notation::move_notation::PieceSymbols;
use plum_board::utils::algebraic::algebraic_to_square;
use plum_board::utils::move_list_export::write_move_list;
use plum_board::utils::render_game_state::render_board;

const HELP: &str = "\
commands:
  click <sq>         select a piece, or move the selected piece to <sq>
  drag <sq>          pick up the piece on <sq>
  drop <sq>          drop the picked-up piece on <sq>
  move <from> <to>   click <from> then click <to>
  moves <sq>         list candidate destinations for <sq>
  board | history | status | fen | export
  reset | help | quit";

#[derive(Parser, Debug)]
#[command(author, version, about = "Terminal chess board", long_about = None)]
struct Args {
    /// Write pieces as FEN letters instead of chess glyphs
    #[arg(long)]
    ascii: bool,

    /// Start from this FEN instead of the standard position
    #[arg(long)]
    fen: Option<String>,

    /// Enable info logging
    #[arg(short, long)]
    verbose: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn main() {
    let args = Args::parse();

    let log_level = if args.debug {
        "debug"
    } else if args.verbose {
        "info"
    } else {
        "warn"
    };
    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, log_level),
    )
    .target(env_logger::Target::Stderr)
    .init();

    if let Err(e) = run(&args) {
        error!("fatal error: {e}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> io::Result<()> {
    let symbols = if args.ascii {
        PieceSymbols::Letters
    } else {
        PieceSymbols::Unicode
    };

    let mut session = match args.fen.as_deref() {
        Some(fen) => match GameState::from_fen(fen) {
            Ok(state) => BoardSession::from_game_state(state),
            Err(e) => {
                error!("{e}");
                std::process::exit(2);
            }
        },
        None => BoardSession::new(),
    };
    info!("starting from {}", session.game_state().get_fen());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "Game started. White to move.")?;
    print_board(&mut out, &session, symbols)?;

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let Some((&command, rest)) = tokens.split_first() else {
            continue;
        };

        match command {
            "quit" | "exit" => break,
            "help" => writeln!(out, "{HELP}")?,
            "board" => print_board(&mut out, &session, symbols)?,
            "history" => print_history(&mut out, session.game_state(), symbols)?,
            "status" => print_status(&mut out, session.game_state())?,
            "fen" => writeln!(out, "{}", session.game_state().get_fen())?,
            "export" => write!(out, "{}", write_move_list(session.game_state(), symbols))?,
            "reset" => {
                session.reset();
                writeln!(out, "Game started. White to move.")?;
                print_board(&mut out, &session, symbols)?;
            }
            "moves" => match parse_squares::<1>(rest) {
                Ok([sq]) => {
                    let names: Vec<String> =
                        session.candidates(sq).iter().map(Square::to_string).collect();
                    writeln!(out, "{sq}: {}", names.join(" "))?;
                }
                Err(e) => writeln!(out, "{e}")?,
            },
            "click" | "drag" | "drop" => match parse_squares::<1>(rest) {
                Ok([sq]) => {
                    let outcome = match command {
                        "click" => session.click(sq),
                        "drag" => session.drag_start(sq),
                        _ => {
                            let outcome = session.drop(sq);
                            session.drag_end();
                            outcome
                        }
                    };
                    report(&mut out, &session, symbols, &outcome)?;
                }
                Err(e) => writeln!(out, "{e}")?,
            },
            "move" => match parse_squares::<2>(rest) {
                Ok([from, to]) => move_command(&mut out, &mut session, symbols, from, to)?,
                Err(e) => writeln!(out, "{e}")?,
            },
            other => writeln!(out, "unknown command: {other} (try 'help')")?,
        }
        out.flush()?;
    }

    Ok(())
}

fn parse_squares<const N: usize>(tokens: &[&str]) -> BoardResult<[Square; N]> {
    if tokens.len() != N {
        return Err(BoardError::InvalidAlgebraic(tokens.join(" ")));
    }
    let squares = tokens
        .iter()
        .map(|token| algebraic_to_square(token))
        .collect::<BoardResult<Vec<_>>>()?;
    squares
        .try_into()
        .map_err(|_| BoardError::InvalidAlgebraic(tokens.join(" ")))
}

/// `move <from> <to>`: a refused move prints one line and leaves the board
/// unprinted.
fn move_command(
    out: &mut impl Write,
    session: &mut BoardSession,
    symbols: PieceSymbols,
    from: Square,
    to: Square,
) -> io::Result<()> {
    match session.move_piece(from, to) {
        outcome @ SelectionOutcome::Moved(_) => report(out, session, symbols, &outcome),
        _ => writeln!(out, "illegal move: {from}{to}"),
    }
}

fn report(
    out: &mut impl Write,
    session: &BoardSession,
    symbols: PieceSymbols,
    outcome: &SelectionOutcome,
) -> io::Result<()> {
    match outcome {
        SelectionOutcome::Selected { origin, targets } => {
            let names: Vec<String> = targets.iter().map(Square::to_string).collect();
            writeln!(out, "selected {origin}: {}", names.join(" "))?;
            print_board(out, session, symbols)
        }
        SelectionOutcome::Moved(applied) => {
            writeln!(
                out,
                "{}. {}",
                applied.move_number,
                applied.record.notation(symbols)
            )?;
            print_board(out, session, symbols)?;
            print_status(out, session.game_state())
        }
        SelectionOutcome::Cleared => writeln!(out, "selection cleared"),
        SelectionOutcome::Ignored => Ok(()),
    }
}

fn print_board(out: &mut impl Write, session: &BoardSession, symbols: PieceSymbols) -> io::Result<()> {
    writeln!(
        out,
        "{}",
        render_board(
            &session.game_state().board,
            symbols,
            session.selected(),
            session.highlighted_mask(),
        )
    )
}

fn print_history(out: &mut impl Write, game_state: &GameState, symbols: PieceSymbols) -> io::Result<()> {
    if game_state.move_log.is_empty() {
        return writeln!(out, "no moves yet");
    }
    for line in game_state.move_log.render_lines(symbols) {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

fn print_status(out: &mut impl Write, game_state: &GameState) -> io::Result<()> {
    writeln!(
        out,
        "{} to move, move {} ({})",
        game_state.active_player(),
        game_state.move_number(),
        game_state.status()
    )
}
