use ripple_doku::{board::Board, core::*, solve::*};
use std::io::Read;
use std::process::ExitCode;
use std::str::FromStr;

/// Solves a puzzle read from the command line or stdin and prints the
/// resulting board, coloring deduced values green and unresolved flag
/// pairs red.
fn main() -> ExitCode {
  let text = match std::env::args().nth(1) {
    Some(arg) => arg,
    None => {
      let mut buf = String::new();
      if std::io::stdin().read_to_string(&mut buf).is_err() {
        eprintln!("couldn't read puzzle from stdin");
        return ExitCode::FAILURE;
      }
      buf
    }
  };
  let grid = match Grid::from_str(&normalize(&text)) {
    Ok(grid) => grid,
    Err(e) => {
      eprintln!("bad puzzle: {}", e);
      return ExitCode::FAILURE;
    }
  };
  let mut board = match Board::new(&grid) {
    Ok(board) => board,
    Err(e) => {
      eprintln!("bad clues: {}", e);
      return ExitCode::FAILURE;
    }
  };
  match run(&mut board, &mut Quiet) {
    Ok(status) => {
      print_board(&board);
      match status {
        Status::Solved => ExitCode::SUCCESS,
        Status::Stalled => {
          println!("stalled with {} cells solved", board.solved_count());
          ExitCode::FAILURE
        }
      }
    }
    Err(e) => {
      print_board(&board);
      eprintln!("contradiction: {}", e);
      ExitCode::FAILURE
    }
  }
}

/// Turns line-oriented input into flat grid text: spaces within a line
/// become blanks, and short lines are padded out to 9 locations.  Flat
/// 81-character input passes through untouched.
fn normalize(text: &str) -> String {
  let trimmed = text.trim();
  if !trimmed.contains('\n') {
    return trimmed.to_string();
  }
  let mut out = String::new();
  for line in trimmed.lines() {
    let mut count = 0;
    for c in line.chars() {
      match c {
        '1'..='9' => {
          out.push(c);
          count += 1;
        }
        ' ' | '.' | '0' | '_' => {
          out.push('.');
          count += 1;
        }
        _ => {}
      }
    }
    while count < 9 {
      out.push('.');
      count += 1;
    }
    out.push('\n');
  }
  out
}

const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

fn print_board(board: &Board) {
  for row in Row::all() {
    if row.get() > 0 && row.get() % 3 == 0 {
      println!("------+-------+------");
    }
    let mut line = String::new();
    for col in Col::all() {
      if col.get() > 0 && col.get() % 3 == 0 {
        line.push_str("| ");
      }
      let cell = board.cell(Loc::at(row, col));
      match cell.value() {
        Some(num) if cell.given() => line.push_str(&format!("{} ", num)),
        Some(num) => line.push_str(&format!("{}{}{} ", GREEN, num, RESET)),
        None => {
          let flags = cell.flags();
          if flags.is_empty() {
            line.push_str(". ");
          } else {
            let mut tags = String::new();
            for num in flags.iter() {
              tags.push_str(&num.to_string());
            }
            line.push_str(&format!("{}{}{} ", RED, tags, RESET));
          }
        }
      }
    }
    println!("{}", line.trim_end());
  }
}
