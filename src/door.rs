//! Doors and the door registry

use log::{debug, warn};
use rand::Rng;

use crate::canvas::{Canvas, Direction, Point, Tile};
use crate::room::Room;

/// Upper bound on wall picks while punching doors into one room
pub const MAX_DOOR_ATTEMPTS: usize = 32;

/// Progress of a door
///
/// Only moves forward: `Unopened -> Opened` once a corridor is carved from
/// it, `CorridorEnd -> Opened` once a room is grown behind it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DoorStatus {
    /// Room door without a corridor yet
    Unopened,
    Opened,
    /// Door at the end of a corridor, waiting for a room
    CorridorEnd,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Door {
    pub point: Point,
    /// Outward facing direction, away from the room that owns the door
    pub direction: Direction,
    status: DoorStatus,
}

impl Door {
    pub fn status(&self) -> DoorStatus {
        self.status
    }
}

/// Every door created during a run, in discovery order
///
/// Doors are never removed; only their status changes.
#[derive(Debug, Clone, Default)]
pub struct DoorRegistry {
    doors: Vec<Door>,
}

impl DoorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a door, returning its index
    pub fn push(&mut self, point: Point, direction: Direction, status: DoorStatus) -> usize {
        self.doors.push(Door {
            point,
            direction,
            status,
        });
        self.doors.len() - 1
    }

    pub fn get(&self, index: usize) -> Option<&Door> {
        self.doors.get(index)
    }

    /// Mark door `index` as opened
    ///
    /// Returns `false` if the door does not exist or is already open.
    pub fn open(&mut self, index: usize) -> bool {
        match self.doors.get_mut(index) {
            Some(door) if door.status != DoorStatus::Opened => {
                door.status = DoorStatus::Opened;
                true
            }
            _ => false,
        }
    }

    pub fn len(&self) -> usize {
        self.doors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.doors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Door> {
        self.doors.iter()
    }

    /// Indices of the doors currently in `status`
    pub fn indices_with(&self, status: DoorStatus) -> Vec<usize> {
        self.doors
            .iter()
            .enumerate()
            .filter(|(_, door)| door.status == status)
            .map(|(i, _)| i)
            .collect()
    }

    pub fn count(&self, status: DoorStatus) -> usize {
        self.doors.iter().filter(|door| door.status == status).count()
    }
}

/// Outcome of punching doors into a room
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DoorQuota {
    pub requested: usize,
    pub placed: usize,
    /// Walls that already held a door, such as a follow-up room's entry
    pub occupied: usize,
}

impl DoorQuota {
    /// Fewer doors were placed than requested
    pub fn is_short(&self) -> bool {
        self.placed < self.requested
    }

    /// Short, and not because every free wall already got its door
    ///
    /// A room with all four walls taken before punching counts as stalled.
    pub fn is_stalled(&self) -> bool {
        let sides = Direction::ALL.len();
        self.is_short() && (self.occupied == sides || self.placed + self.occupied < sides)
    }
}

fn side_has_door(canvas: &Canvas, room: &Room, side: Direction) -> bool {
    room.side(side)
        .into_iter()
        .any(|point| canvas.get(point) == Some(Tile::Door))
}

/// Punch one to four doors into `room`, at most one per wall
pub fn generate_doors<R: Rng + ?Sized>(
    canvas: &mut Canvas,
    room: &Room,
    registry: &mut DoorRegistry,
    rng: &mut R,
) -> DoorQuota {
    let requested = rng.gen_range(1..=4);
    punch_doors(canvas, room, registry, rng, requested)
}

/// Punch `requested` doors into `room`
///
/// A wall is picked at random; walls that already hold a door, and picks
/// that land on something other than a wall tile, are retried. After
/// [MAX_DOOR_ATTEMPTS] picks the room keeps however many doors it got.
pub fn punch_doors<R: Rng + ?Sized>(
    canvas: &mut Canvas,
    room: &Room,
    registry: &mut DoorRegistry,
    rng: &mut R,
    requested: usize,
) -> DoorQuota {
    let occupied = Direction::ALL
        .into_iter()
        .filter(|side| side_has_door(canvas, room, *side))
        .count();
    let mut placed = 0;
    for _ in 0..MAX_DOOR_ATTEMPTS {
        if placed == requested {
            break;
        }
        let side = Direction::ALL[rng.gen_range(0..Direction::ALL.len())];
        if side_has_door(canvas, room, side) {
            continue;
        }
        let cells = room.side(side);
        if cells.is_empty() {
            continue;
        }
        let point = cells[rng.gen_range(0..cells.len())];
        if canvas.get(point) != Some(Tile::Wall) {
            continue;
        }
        canvas.set(point, Tile::Door);
        registry.push(point, side, DoorStatus::Unopened);
        debug!("door facing {} at {}", side, point);
        placed += 1;
    }

    let quota = DoorQuota {
        requested,
        placed,
        occupied,
    };
    if quota.is_stalled() {
        warn!(
            "room at (y={}, x={}) got {} of {} doors",
            room.top, room.left, placed, requested
        );
    } else if quota.is_short() {
        debug!(
            "room at (y={}, x={}) has no free wall left after {} doors",
            room.top, room.left, placed
        );
    }
    quota
}
