//! Room sizing, anchoring and drawing

use log::{debug, trace};
use rand::Rng;

use crate::canvas::{Canvas, Direction, EntryPoint, Point, Tile};
use crate::probe::{Lateral, SpaceProbe};

/// Rectangle of a placed room, walls included
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Room {
    pub top: i32,
    pub left: i32,
    pub height: usize,
    pub width: usize,
}

impl Room {
    pub fn bottom(&self) -> i32 {
        self.top + self.height as i32 - 1
    }

    pub fn right(&self) -> i32 {
        self.left + self.width as i32 - 1
    }

    pub fn contains(&self, point: Point) -> bool {
        (self.top..=self.bottom()).contains(&point.y)
            && (self.left..=self.right()).contains(&point.x)
    }

    pub fn is_border(&self, point: Point) -> bool {
        self.contains(point)
            && (point.y == self.top
                || point.y == self.bottom()
                || point.x == self.left
                || point.x == self.right())
    }

    /// All cells of the bounding box, row by row
    pub fn cells(&self) -> impl Iterator<Item = Point> + '_ {
        (self.top..=self.bottom())
            .flat_map(move |y| (self.left..=self.right()).map(move |x| Point::new(y, x)))
    }

    /// Cells of the wall on `side`, corners excluded
    pub fn side(&self, side: Direction) -> Vec<Point> {
        match side {
            Direction::North => (self.left + 1..self.right())
                .map(|x| Point::new(self.top, x))
                .collect(),
            Direction::South => (self.left + 1..self.right())
                .map(|x| Point::new(self.bottom(), x))
                .collect(),
            Direction::West => (self.top + 1..self.bottom())
                .map(|y| Point::new(y, self.left))
                .collect(),
            Direction::East => (self.top + 1..self.bottom())
                .map(|y| Point::new(y, self.right()))
                .collect(),
        }
    }
}

/// Draw a room size from `[min, available]`, never above `max`
///
/// Callers make sure `available >= min`.
pub fn pick_dimension<R: Rng + ?Sized>(
    rng: &mut R,
    available: usize,
    min: usize,
    max: usize,
) -> usize {
    let upper = available.min(max);
    if upper <= min {
        min
    } else {
        rng.gen_range(min..=upper)
    }
}

/// Position a `height` x `width` room relative to its entry
///
/// Without an arrival direction the room is centred on the entry point.
/// Otherwise the room's near wall sits on the entry point and the room is
/// slid sideways by a random offset, keeping the entry off the corners and
/// inside the measured `lateral` clearance. Returns `None` if no offset
/// satisfies both.
pub fn anchor_room<R: Rng + ?Sized>(
    rng: &mut R,
    entry: EntryPoint,
    height: usize,
    width: usize,
    lateral: Lateral,
) -> Option<Room> {
    let Point { y, x } = entry.point;
    let Some(direction) = entry.direction else {
        return Some(Room {
            top: y - height as i32 / 2,
            left: x - width as i32 / 2,
            height,
            width,
        });
    };

    let span = if direction.is_vertical() { width } else { height };
    if span < 3 {
        return None;
    }
    let lowest = 1usize.max((span - 1).saturating_sub(lateral.high));
    let highest = (span - 2).min(lateral.low);
    if lowest > highest {
        return None;
    }
    let offset = rng.gen_range(lowest..=highest) as i32;

    let room = match direction {
        Direction::North => Room {
            top: y - height as i32 + 1,
            left: x - offset,
            height,
            width,
        },
        Direction::South => Room {
            top: y,
            left: x - offset,
            height,
            width,
        },
        Direction::West => Room {
            top: y - offset,
            left: x - width as i32 + 1,
            height,
            width,
        },
        Direction::East => Room {
            top: y - offset,
            left: x,
            height,
            width,
        },
    };
    Some(room)
}

/// Draw `room` onto the canvas
///
/// Tiles that are already taken are kept as they are, so neighbouring
/// walls and doors survive. Cells outside the canvas are skipped.
pub fn rasterize(canvas: &mut Canvas, room: &Room) {
    for point in room.cells() {
        match canvas.get(point) {
            Some(Tile::Blank) => {
                let tile = if room.is_border(point) {
                    Tile::Wall
                } else {
                    Tile::Floor
                };
                canvas.set(point, tile);
            }
            Some(_) | None => (),
        }
    }
}

/// Places rooms when there is enough space for them
#[derive(Debug, Clone, Copy)]
pub struct RoomPlacer {
    pub min_room_size: usize,
    pub max_room_size: usize,
}

impl RoomPlacer {
    pub fn new(min_room_size: usize, max_room_size: usize) -> Self {
        Self {
            min_room_size,
            max_room_size,
        }
    }

    /// Try to grow a room from `entry`
    ///
    /// Returns the drawn room, or `None` with the canvas untouched when the
    /// envelope is smaller than the minimum room or the room cannot be
    /// shifted sideways.
    pub fn place<R: Rng + ?Sized>(
        &self,
        canvas: &mut Canvas,
        entry: EntryPoint,
        rng: &mut R,
    ) -> Option<Room> {
        let (envelope, lateral) = {
            let probe = SpaceProbe::new(canvas);
            let envelope = probe.space_in_direction(entry, self.max_room_size);
            if envelope.vertical < self.min_room_size || envelope.horizontal < self.min_room_size
            {
                trace!("no room at {}: envelope {:?} too small", entry.point, envelope);
                return None;
            }
            if !probe.can_shift(entry) {
                trace!("no room at {}: cannot shift sideways", entry.point);
                return None;
            }
            let lateral = match entry.direction {
                Some(direction) => probe.lateral(entry.point, direction),
                None => Lateral { low: 0, high: 0 },
            };
            (envelope, lateral)
        };

        let (min, max) = (self.min_room_size, self.max_room_size);
        let height = pick_dimension(rng, envelope.vertical, min, max);
        let width = pick_dimension(rng, envelope.horizontal, min, max);
        let room = anchor_room(rng, entry, height, width, lateral)?;
        rasterize(canvas, &room);
        debug!(
            "placed {}x{} room at (y={}, x={})",
            room.height, room.width, room.top, room.left
        );
        Some(room)
    }
}
