//! Tile canvas and grid primitives

use std::fmt;

/// Kind of a single canvas cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tile {
    /// Unclaimed space, free for rooms and corridors
    #[default]
    Blank,
    Wall,
    Door,
    Floor,
    Corridor,
}

impl Tile {
    pub fn is_blank(self) -> bool {
        self == Tile::Blank
    }
}

/// Cardinal direction on the canvas
///
/// North is towards row 0, west towards column 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Row and column step `(dy, dx)` of one move in this direction
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (-1, 0),
            Direction::East => (0, 1),
            Direction::South => (1, 0),
            Direction::West => (0, -1),
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }

    pub fn is_vertical(self) -> bool {
        matches!(self, Direction::North | Direction::South)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::North => "north",
            Direction::East => "east",
            Direction::South => "south",
            Direction::West => "west",
        };
        f.write_str(name)
    }
}

/// Location on the canvas
///
/// Components are signed, so that arithmetic may leave the canvas; whether
/// a point is usable is decided by [Canvas::contains].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    pub y: i32,
    pub x: i32,
}

impl Point {
    pub const fn new(y: i32, x: i32) -> Self {
        Self { y, x }
    }

    /// Point `steps` moves away in `direction`
    pub fn step(self, direction: Direction, steps: i32) -> Self {
        let (dy, dx) = direction.delta();
        Self {
            y: self.y + dy * steps,
            x: self.x + dx * steps,
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(y={}, x={})", self.y, self.x)
    }
}

/// Where a room or corridor starts growing from
///
/// `direction` is the way the point was reached; `None` only for the
/// first room, which has no entry side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryPoint {
    pub point: Point,
    pub direction: Option<Direction>,
}

/// Fixed size tile buffer
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Canvas {
    width: usize,
    height: usize,
    tiles: Vec<Tile>,
}

impl Canvas {
    /// Create an all-blank canvas
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            tiles: vec![Tile::Blank; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Middle of the canvas, rounding towards the origin
    pub fn center(&self) -> Point {
        Point::new((self.height / 2) as i32, (self.width / 2) as i32)
    }

    pub fn contains(&self, point: Point) -> bool {
        point.y >= 0
            && point.x >= 0
            && (point.y as usize) < self.height
            && (point.x as usize) < self.width
    }

    fn index(&self, point: Point) -> Option<usize> {
        if self.contains(point) {
            Some(point.y as usize * self.width + point.x as usize)
        } else {
            None
        }
    }

    /// Tile at `point`, or `None` outside the canvas
    pub fn get(&self, point: Point) -> Option<Tile> {
        self.index(point).map(|i| self.tiles[i])
    }

    /// Write `tile` at `point`
    ///
    /// Writes outside the canvas are dropped; returns whether the write
    /// happened.
    pub fn set(&mut self, point: Point, tile: Tile) -> bool {
        match self.index(point) {
            Some(i) => {
                self.tiles[i] = tile;
                true
            }
            None => false,
        }
    }

    /// Whether `point` is on the canvas and still blank
    pub fn is_blank(&self, point: Point) -> bool {
        self.get(point).is_some_and(Tile::is_blank)
    }

    /// Iterate rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> {
        // chunks panics on zero; an empty canvas simply has no rows
        self.tiles.chunks(self.width.max(1))
    }

    /// Number of cells holding `tile`
    pub fn count(&self, tile: Tile) -> usize {
        self.tiles.iter().filter(|t| **t == tile).count()
    }
}
