use colored::Colorize;
use log::info;
use std::io::{self, BufRead, Write};

use super::board::{Board, Move, Player};
use super::minimax::minimax;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Winner(Player),
    Tie,
    /// Input ended before the game did.
    Abandoned,
}

/// Parses `"row col"` (or `"row,col"`), zero-based.
pub fn parse_move(line: &str) -> Option<Move> {
    let mut parts = line
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty());
    let row = parts.next()?.parse().ok()?;
    let col = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(Move::new(row, col))
}

/// Console game between a human reading from `input` and the minimax player.
pub fn play<R: BufRead, W: Write>(input: R, output: &mut W, human: Player) -> io::Result<Outcome> {
    let mut lines = input.lines();
    let mut board = Board::initial();
    writeln!(output, "You are playing {}.", human)?;

    while !board.terminal() {
        writeln!(output, "\n{}", board)?;
        if board.player() == human {
            write!(output, "Your move (row col): ")?;
            output.flush()?;
            let line = match lines.next() {
                Some(line) => line?,
                None => return Ok(Outcome::Abandoned),
            };
            let Some(mv) = parse_move(&line) else {
                writeln!(output, "{}", "Enter two numbers between 0 and 2, e.g. `1 2`.".yellow())?;
                continue;
            };
            match board.result(mv) {
                Ok(next) => board = next,
                Err(e) => writeln!(output, "{}", e.to_string().yellow())?,
            }
        } else {
            writeln!(output, "Computer thinking...")?;
            let Some(mv) = minimax(&board) else {
                break;
            };
            info!("Computer ({}) plays {:?}", board.player(), mv);
            board = board.place(mv);
        }
    }

    writeln!(output, "\n{}", board)?;
    let outcome = match board.winner() {
        Some(player) => {
            writeln!(output, "{}", format!("Game Over: {} wins.", player).green())?;
            Outcome::Winner(player)
        }
        None => {
            writeln!(output, "{}", "Game Over: Tie.".blue())?;
            Outcome::Tie
        }
    };
    Ok(outcome)
}
