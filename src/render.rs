//! Tile to text conversion

use std::str::FromStr;

use itertools::Itertools;
use thiserror::Error;

use crate::canvas::{Canvas, Tile};

/// How tiles are drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// Walls and corridors on an empty background
    #[default]
    Standard,
    /// Solid rock everywhere except rooms and corridors
    Dungeon,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown render mode `{0}`, expected `standard` or `dungeon`")]
pub struct ParseModeError(String);

impl FromStr for RenderMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" | "s" => Ok(RenderMode::Standard),
            "dungeon" | "d" => Ok(RenderMode::Dungeon),
            _ => Err(ParseModeError(s.trim().to_string())),
        }
    }
}

/// Character for `tile` in `mode`
pub fn render(tile: Tile, mode: RenderMode) -> char {
    match (mode, tile) {
        (_, Tile::Wall) => '#',
        (RenderMode::Standard, Tile::Corridor) => ':',
        (RenderMode::Standard, Tile::Door | Tile::Floor | Tile::Blank) => ' ',
        (RenderMode::Dungeon, Tile::Blank) => '#',
        (RenderMode::Dungeon, Tile::Door | Tile::Floor | Tile::Corridor) => ' ',
    }
}

/// Whole canvas as text, one line per row
pub fn render_canvas(canvas: &Canvas, mode: RenderMode) -> String {
    canvas
        .rows()
        .map(|row| row.iter().map(|tile| render(*tile, mode)).join(""))
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::Point;

    #[test]
    fn standard_glyphs() {
        let mode = RenderMode::Standard;
        assert_eq!(render(Tile::Wall, mode), '#');
        assert_eq!(render(Tile::Door, mode), ' ');
        assert_eq!(render(Tile::Floor, mode), ' ');
        assert_eq!(render(Tile::Blank, mode), ' ');
        assert_eq!(render(Tile::Corridor, mode), ':');
    }

    #[test]
    fn dungeon_glyphs() {
        let mode = RenderMode::Dungeon;
        assert_eq!(render(Tile::Wall, mode), '#');
        assert_eq!(render(Tile::Door, mode), ' ');
        assert_eq!(render(Tile::Floor, mode), ' ');
        assert_eq!(render(Tile::Corridor, mode), ' ');
        assert_eq!(render(Tile::Blank, mode), '#');
    }

    #[test]
    fn parse_mode() {
        assert_eq!("standard".parse::<RenderMode>(), Ok(RenderMode::Standard));
        assert_eq!(" D\n".parse::<RenderMode>(), Ok(RenderMode::Dungeon));
        assert_eq!(
            "fancy".parse::<RenderMode>(),
            Err(ParseModeError("fancy".to_string()))
        );
    }

    #[test]
    fn canvas_to_text() {
        let mut canvas = Canvas::new(3, 2);
        canvas.set(Point::new(0, 0), Tile::Wall);
        canvas.set(Point::new(1, 2), Tile::Corridor);
        assert_eq!(render_canvas(&canvas, RenderMode::Standard), "#  \n  :");
        assert_eq!(render_canvas(&canvas, RenderMode::Dungeon), "###\n## ");
    }
}
