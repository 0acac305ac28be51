pub mod sleeper;

use std::io::{self, Write};

use colored::Colorize;
use libgame::board::{GameBoard, TileState};

/// Moves the cursor home and clears the terminal.
const CLEAR_SCREEN: &str = "\x1b[H\x1b[2J";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyphs {
    pub alive: char,
    pub dead: char,
}

impl Glyphs {
    fn tile(&self, tile: TileState) -> char {
        match tile {
            TileState::Alive => self.alive,
            TileState::Dead => self.dead,
        }
    }
}

/// One line per board row, each terminated by a newline.
pub fn render_board(board: &GameBoard, glyphs: Glyphs) -> String {
    let mut rendered = String::with_capacity((board.width + 1) * board.height);

    for row in board.rows() {
        rendered.extend(row.iter().map(|tile| glyphs.tile(*tile)));
        rendered.push('\n');
    }

    rendered
}

pub struct FrameStatus {
    pub generation: usize,
    pub total: usize,
}

/// Status line under each frame, without trailing whitespace.
pub fn status_line(status: &FrameStatus) -> String {
    format!("generation {} of {}", status.generation, status.total)
}

pub fn write_frame<W>(
    out: &mut W,
    board: &GameBoard,
    glyphs: Glyphs,
    status: FrameStatus,
    clear_screen: bool,
) -> io::Result<()>
where
    W: Write,
{
    if clear_screen {
        out.write_all(CLEAR_SCREEN.as_bytes())?;
    }

    out.write_all(render_board(board, glyphs).as_bytes())?;

    writeln!(out, "{}", status_line(&status).bold())?;

    out.flush()
}
