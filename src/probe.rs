//! Free space measurement around a point

use crate::canvas::{Canvas, Direction, EntryPoint, Point};

/// Vertical and horizontal clearance available to a new room
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Envelope {
    pub vertical: usize,
    pub horizontal: usize,
}

/// Clearance to both sides of an entry, across its arrival axis
///
/// For a north or south entry `low` is towards the west and `high`
/// towards the east; for an east or west entry `low` is towards the north
/// and `high` towards the south.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lateral {
    pub low: usize,
    pub high: usize,
}

impl Lateral {
    pub fn total(self) -> usize {
        self.low + self.high
    }
}

/// Read-only view on a canvas answering "how much blank space is there"
pub struct SpaceProbe<'a> {
    canvas: &'a Canvas,
}

impl<'a> SpaceProbe<'a> {
    pub fn new(canvas: &'a Canvas) -> Self {
        Self { canvas }
    }

    /// Count blank tiles from `point` (exclusive) outwards in `direction`
    ///
    /// Both the canvas edge and the first non-blank tile stop the count.
    pub fn run(&self, point: Point, direction: Direction) -> usize {
        (1..)
            .map(|steps| point.step(direction, steps))
            .take_while(|p| self.canvas.is_blank(*p))
            .count()
    }

    pub fn check_above(&self, point: Point) -> usize {
        self.run(point, Direction::North)
    }

    pub fn check_below(&self, point: Point) -> usize {
        self.run(point, Direction::South)
    }

    pub fn check_left(&self, point: Point) -> usize {
        self.run(point, Direction::West)
    }

    pub fn check_right(&self, point: Point) -> usize {
        self.run(point, Direction::East)
    }

    /// Clearance across the arrival axis of `direction`
    pub fn lateral(&self, point: Point, direction: Direction) -> Lateral {
        if direction.is_vertical() {
            Lateral {
                low: self.check_left(point),
                high: self.check_right(point),
            }
        } else {
            Lateral {
                low: self.check_above(point),
                high: self.check_below(point),
            }
        }
    }

    /// Room envelope around an entry point
    ///
    /// The first room (no arrival direction) gets a fixed `max_room` square
    /// regardless of its surroundings. Otherwise the run along the arrival
    /// direction gives the depth and the lateral clearance gives the span.
    pub fn space_in_direction(&self, entry: EntryPoint, max_room: usize) -> Envelope {
        let Some(direction) = entry.direction else {
            return Envelope {
                vertical: max_room,
                horizontal: max_room,
            };
        };
        let depth = self.run(entry.point, direction);
        let span = self.lateral(entry.point, direction).total();
        if direction.is_vertical() {
            Envelope {
                vertical: depth,
                horizontal: span,
            }
        } else {
            Envelope {
                vertical: span,
                horizontal: depth,
            }
        }
    }

    /// Whether a room grown from `entry` can be slid sideways
    ///
    /// The entry door has to end up inside a wall, not at a corner, which
    /// needs at least one free tile on either side.
    pub fn can_shift(&self, entry: EntryPoint) -> bool {
        match entry.direction {
            None => true,
            Some(direction) => {
                let lateral = self.lateral(entry.point, direction);
                lateral.low > 0 && lateral.high > 0
            }
        }
    }
}
