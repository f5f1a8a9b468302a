//! Text rendering of a board with a legal-move overlay
//!
//! Output is one header line (corner marker, then a marker per column)
//! followed by one line per board row (row marker, then a glyph per cell).
//! Markers are 1-based, matching the coordinates players type.

use std::collections::HashSet;

use crate::board::{Board, Cell, Position};

const KEYCAPS: [&str; 10] = [
    "1\u{fe0f}\u{20e3}",
    "2\u{fe0f}\u{20e3}",
    "3\u{fe0f}\u{20e3}",
    "4\u{fe0f}\u{20e3}",
    "5\u{fe0f}\u{20e3}",
    "6\u{fe0f}\u{20e3}",
    "7\u{fe0f}\u{20e3}",
    "8\u{fe0f}\u{20e3}",
    "9\u{fe0f}\u{20e3}",
    "\u{1f51f}",
];

/// How row and column markers are drawn
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Markers {
    /// Keycap emoji up to 10, plain numbers after
    Keycap,
    /// Right-aligned decimal numbers
    Plain,
}

/// The glyph set a board is drawn with
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Glyphs {
    pub corner: &'static str,
    pub empty: &'static str,
    pub legal: &'static str,
    pub white: &'static str,
    pub black: &'static str,
    pub markers: Markers,
}

impl Glyphs {
    /// Chat style
    pub const EMOJI: Glyphs = Glyphs {
        corner: "\u{23f9}\u{fe0f}",
        empty: "\u{2b1c}",
        legal: "\u{2795}",
        white: "\u{26aa}",
        black: "\u{26ab}",
        markers: Markers::Keycap,
    };

    /// Terminal style
    pub const ASCII: Glyphs = Glyphs {
        corner: " ",
        empty: ".",
        legal: "*",
        white: "O",
        black: "X",
        markers: Markers::Plain,
    };

    fn marker(&self, n: usize, pad: usize) -> String {
        match self.markers {
            Markers::Keycap if n <= KEYCAPS.len() => KEYCAPS[n - 1].to_string(),
            _ => format!("{n:>pad$}"),
        }
    }

    fn cell(&self, cell: Cell, legal: bool, pad: usize) -> String {
        let glyph = match cell {
            Cell::Empty if legal => self.legal,
            Cell::Empty => self.empty,
            Cell::White => self.white,
            Cell::Black => self.black,
        };
        match self.markers {
            Markers::Plain => format!("{glyph:>pad$}"),
            Markers::Keycap => glyph.to_string(),
        }
    }
}

impl Default for Glyphs {
    fn default() -> Self {
        Glyphs::EMOJI
    }
}

/// Draw `board`, highlighting the empty cells listed in `legal`
pub fn render(board: &Board, legal: &[Position], glyphs: &Glyphs) -> String {
    let legal: HashSet<Position> = legal.iter().copied().collect();
    let width = board.width();
    let pad = width.to_string().len();

    let mut out = String::new();
    out.push_str(&format!("{:>pad$}", glyphs.corner));
    for col in 1..=width {
        out.push_str(&glyphs.marker(col, pad));
    }
    out.push('\n');

    for (row, cells) in board.rows().enumerate() {
        out.push_str(&glyphs.marker(row + 1, pad));
        for (col, &cell) in cells.iter().enumerate() {
            let highlighted = legal.contains(&Position::new(row, col));
            out.push_str(&glyphs.cell(cell, highlighted, pad));
        }
        out.push('\n');
    }

    out
}
