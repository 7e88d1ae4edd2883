//! Terminal driver for an interactive game session.
//!
//! Reads commands from stdin, feeds them to a `GameSession`, and renders the
//! board between moves. This is the stand-in for a graphical board layer:
//! it exercises the same gesture API a UI would call.

use std::io::{self, BufRead, Write};

use tracing_subscriber::EnvFilter;

use parlor_chess::errors::GameError;
use parlor_chess::game_state::chess_types::Square;
use parlor_chess::session::game_session::{GameSession, GestureOutcome};
use parlor_chess::utils::algebraic::{algebraic_to_square, parse_long_algebraic};
use parlor_chess::utils::render_game_state::render_game_state;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut session = GameSession::new();
    println!("parlor chess");
    println!("type 'help' for commands");
    print_board(&session);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("> ");
        io::stdout().flush().ok();

        let Some(Ok(line)) = lines.next() else {
            break;
        };
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let (command, argument) = match trimmed.split_once(' ') {
            Some((head, tail)) => (head, tail.trim()),
            None => (trimmed, ""),
        };

        match command {
            "quit" | "exit" => break,
            "help" => print_help(),
            "board" => print_board(&session),
            "fen" => println!("{}", session.export_position()),
            "status" => println!("{}", session.status().describe()),
            "move" => run_move(&mut session, argument),
            "select" => run_select(&mut session, argument),
            "mark" => run_mark(&mut session, argument),
            "history" => print_history(&session),
            "undo" => match session.undo() {
                Ok(()) => print_board(&session),
                Err(err) => println!("cannot undo: {err}"),
            },
            "reset" => {
                session.reset();
                print_board(&session);
            }
            "import" => match session.import_position(argument) {
                Ok(()) => print_board(&session),
                Err(err) => println!("import failed: {err}"),
            },
            _ => println!("unknown command '{command}', type 'help'"),
        }
    }
}

fn print_help() {
    println!("commands:");
    println!("  move <lan>     play a move, e.g. 'move e2e4' or 'move a7a8q'");
    println!("  select <sq>    click a square, e.g. 'select e2'");
    println!("  mark <sq>      toggle a right-click mark on a square");
    println!("  undo           take back the last move");
    println!("  reset          start a fresh game");
    println!("  fen            print the current position string");
    println!("  import <fen>   load a position string");
    println!("  history        list played moves");
    println!("  status         print the game status");
    println!("  board          redraw the board");
    println!("  quit           leave");
}

fn run_move(session: &mut GameSession, argument: &str) {
    let (from, to, promotion) = match parse_long_algebraic(argument) {
        Ok(parts) => parts,
        Err(message) => {
            println!("{message}");
            return;
        }
    };

    match session.drop_piece(from, to, promotion) {
        Ok(outcome) => {
            report_outcome(&outcome);
            print_board(session);
        }
        Err(err @ GameError::InvalidMove { .. }) => println!("{err}"),
        Err(err) => println!("move failed: {err}"),
    }
}

fn run_select(session: &mut GameSession, argument: &str) {
    let Some(square) = read_square(argument) else {
        return;
    };

    match session.select_square(square) {
        Ok(outcome) => {
            report_outcome(&outcome);
            if matches!(outcome, GestureOutcome::Moved { .. }) {
                print_board(session);
            }
        }
        Err(err) => println!("{err}"),
    }
}

fn run_mark(session: &mut GameSession, argument: &str) {
    let Some(square) = read_square(argument) else {
        return;
    };
    session.right_click_square(square);
    let marks: Vec<String> = session
        .selection()
        .marked_squares
        .iter()
        .map(Square::to_string)
        .collect();
    println!("marked: {}", marks.join(" "));
}

fn read_square(argument: &str) -> Option<Square> {
    match algebraic_to_square(argument) {
        Ok(square) => Some(square),
        Err(message) => {
            println!("{message}");
            None
        }
    }
}

fn report_outcome(outcome: &GestureOutcome) {
    match outcome {
        GestureOutcome::Selected {
            square,
            destinations,
        } => {
            let targets: Vec<String> = destinations.iter().map(Square::to_string).collect();
            println!("selected {square}: {}", targets.join(" "));
        }
        GestureOutcome::Cleared => println!("selection cleared"),
        GestureOutcome::Ignored => println!("nothing to do"),
        GestureOutcome::Moved { san, status } => {
            println!("played {san}");
            if status.is_terminal() {
                println!("{}", status.describe());
            }
        }
    }
}

fn print_board(session: &GameSession) {
    println!("{}", render_game_state(session.state()));
    println!("{} to move", session.side_to_move());
}

fn print_history(session: &GameSession) {
    let pairs = session.move_pairs();
    if pairs.is_empty() {
        println!("no moves yet");
        return;
    }
    for pair in pairs {
        let white = pair
            .white
            .as_ref()
            .map(|row| row.san.clone())
            .unwrap_or_else(|| "...".to_owned());
        let black = pair
            .black
            .as_ref()
            .map(|row| row.san.clone())
            .unwrap_or_default();
        println!("{:>3}. {:<8} {}", pair.number, white, black);
    }
}
