//! Dungeon growth: first room, corridors, and rooms behind corridor ends

use std::collections::VecDeque;

use log::{debug, info};
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::canvas::{Canvas, EntryPoint};
use crate::config::{Config, ConfigError};
use crate::corridor::{Corridor, CorridorCarver};
use crate::door::{generate_doors, DoorRegistry, DoorStatus};
use crate::render::{render_canvas, RenderMode};
use crate::room::{Room, RoomPlacer};

/// Something noteworthy that happened during generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A room ran out of door attempts before reaching its quota
    GenerationStalled {
        room: Room,
        requested: usize,
        placed: usize,
    },
}

/// Result of one generation run
#[derive(Debug, Clone)]
pub struct Dungeon {
    pub canvas: Canvas,
    /// Every door, in the order it was created
    pub doors: DoorRegistry,
    /// Placed rooms, first room first
    pub rooms: Vec<Room>,
    pub corridors: Vec<Corridor>,
    pub diagnostics: Vec<Diagnostic>,
}

impl Dungeon {
    /// Text picture of the canvas
    pub fn render(&self, mode: RenderMode) -> String {
        render_canvas(&self.canvas, mode)
    }

    /// Print summary to console
    pub fn print_report(&self) {
        println!(
            "{} rooms, {} corridors, {} doors ({} opened, {} unopened, {} waiting for a room)",
            self.rooms.len(),
            self.corridors.len(),
            self.doors.len(),
            self.doors.count(DoorStatus::Opened),
            self.doors.count(DoorStatus::Unopened),
            self.doors.count(DoorStatus::CorridorEnd),
        );
        for diagnostic in &self.diagnostics {
            match diagnostic {
                Diagnostic::GenerationStalled {
                    room,
                    requested,
                    placed,
                } => println!(
                    "room at (y={}, x={}) got {} of {} doors",
                    room.top, room.left, placed, requested
                ),
            }
        }
    }
}

/// Dungeon generator owning the run's random source
pub struct DungeonGenerator {
    config: Config,
    random: StdRng,
    seed: u64,
}

impl DungeonGenerator {
    /// Create a generator for `config`
    ///
    /// Without a `seed` one is drawn from entropy; [Self::seed] tells which,
    /// so the run can be repeated.
    pub fn new(config: Config, seed: Option<u64>) -> Result<Self, ConfigError> {
        config.validate()?;
        let seed = seed.unwrap_or_else(rand::random);
        Ok(Self {
            config,
            random: StdRng::seed_from_u64(seed),
            seed,
        })
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn generate(&mut self) -> Dungeon {
        grow(&self.config, &mut self.random)
    }
}

/// Grow a dungeon on a blank canvas using `rng`
///
/// Fails without touching `rng` if `config` does not pass
/// [Config::validate].
pub fn generate<R: Rng + ?Sized>(config: &Config, rng: &mut R) -> Result<Dungeon, ConfigError> {
    config.validate()?;
    Ok(grow(config, rng))
}

/// Grow a dungeon from an already validated `config`
fn grow<R: Rng + ?Sized>(config: &Config, rng: &mut R) -> Dungeon {
    let mut growth = Growth::new(config);
    growth.start(rng);
    while growth.step(rng) {}

    let dungeon = growth.dungeon;
    info!(
        "generated {} rooms and {} corridors",
        dungeon.rooms.len(),
        dungeon.corridors.len()
    );
    dungeon
}

/// State of a single run
struct Growth {
    dungeon: Dungeon,
    placer: RoomPlacer,
    carver: CorridorCarver,
    /// Corridor-end doors still waiting for a room
    pending: VecDeque<usize>,
}

impl Growth {
    fn new(config: &Config) -> Self {
        Self {
            dungeon: Dungeon {
                canvas: Canvas::new(config.canvas_width, config.canvas_height),
                doors: DoorRegistry::new(),
                rooms: Vec::new(),
                corridors: Vec::new(),
                diagnostics: Vec::new(),
            },
            placer: RoomPlacer::new(config.min_room_size, config.max_room_size),
            carver: CorridorCarver::new(config.min_corridor_length, config.max_corridor_length),
            pending: VecDeque::new(),
        }
    }

    /// First room in the middle of the canvas, and its corridors
    fn start<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let first = EntryPoint {
            point: self.dungeon.canvas.center(),
            direction: None,
        };
        self.add_room(first, rng);
        self.carve(rng);
    }

    /// Try to grow a room behind the next pending corridor end
    ///
    /// Returns `false` once nothing is pending.
    fn step<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        let Some(index) = self.pending.pop_front() else {
            return false;
        };
        let Some(door) = self.dungeon.doors.get(index) else {
            return true;
        };
        let entry = EntryPoint {
            point: door.point,
            direction: Some(door.direction),
        };
        if self.add_room(entry, rng) {
            self.dungeon.doors.open(index);
            self.carve(rng);
        } else {
            debug!("corridor end at {} stays closed", entry.point);
        }
        true
    }

    /// Place a room at `entry` and punch its doors
    fn add_room<R: Rng + ?Sized>(&mut self, entry: EntryPoint, rng: &mut R) -> bool {
        let dungeon = &mut self.dungeon;
        let Some(room) = self.placer.place(&mut dungeon.canvas, entry, rng) else {
            return false;
        };
        let quota = generate_doors(&mut dungeon.canvas, &room, &mut dungeon.doors, rng);
        if quota.is_stalled() {
            dungeon.diagnostics.push(Diagnostic::GenerationStalled {
                room,
                requested: quota.requested,
                placed: quota.placed,
            });
        }
        dungeon.rooms.push(room);
        true
    }

    /// Carve corridors from every unopened door, queueing their end doors
    fn carve<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let dungeon = &mut self.dungeon;
        let corridors = self
            .carver
            .carve_all(&mut dungeon.canvas, &mut dungeon.doors, rng);
        self.pending
            .extend(corridors.iter().filter_map(|corridor| corridor.end_door));
        dungeon.corridors.extend(corridors);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{Direction, Point, Tile};

    #[test]
    fn invalid_config_is_rejected() {
        let config = Config {
            min_room_size: 8,
            max_room_size: 4,
            ..Config::default()
        };
        assert!(matches!(
            DungeonGenerator::new(config, Some(0)),
            Err(ConfigError::RoomRange { min: 8, max: 4 })
        ));
    }

    #[test]
    fn generate_checks_config() {
        let config = Config {
            min_corridor_length: 5,
            max_corridor_length: 2,
            ..Config::default()
        };
        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(
            generate(&config, &mut rng),
            Err(ConfigError::CorridorRange { min: 5, max: 2 })
        ));
        assert!(generate(&Config::default(), &mut rng).is_ok());
    }

    #[test]
    fn same_seed_same_dungeon() {
        let a = DungeonGenerator::new(Config::default(), Some(42))
            .unwrap()
            .generate();
        let b = DungeonGenerator::new(Config::default(), Some(42))
            .unwrap()
            .generate();
        assert_eq!(a.canvas, b.canvas);
        assert_eq!(a.rooms, b.rooms);
    }

    #[test]
    fn seed_is_reported() {
        let generator = DungeonGenerator::new(Config::default(), None).unwrap();
        assert_eq!(generator.config(), &Config::default());
        let seed = generator.seed();
        let mut again = DungeonGenerator::new(Config::default(), Some(seed)).unwrap();
        let mut generator = generator;
        assert_eq!(generator.generate().canvas, again.generate().canvas);
    }

    #[test]
    fn small_canvas_first_room_is_centred() {
        let config = Config {
            canvas_width: 10,
            canvas_height: 10,
            min_room_size: 3,
            max_room_size: 5,
            ..Config::default()
        };
        for seed in 0..20 {
            let dungeon = DungeonGenerator::new(config.clone(), Some(seed))
                .unwrap()
                .generate();
            let first = dungeon.rooms[0];
            assert!((3..=5).contains(&first.height));
            assert!((3..=5).contains(&first.width));
            assert_eq!(first.top, 5 - first.height as i32 / 2);
            assert_eq!(first.left, 5 - first.width as i32 / 2);
            assert!(first.contains(Point::new(5, 5)));

            // The first room's doors are registered before any corridor end
            let first_doors = dungeon
                .corridors
                .iter()
                .filter_map(|c| c.end_door)
                .min()
                .unwrap_or(dungeon.doors.len());
            assert!((1..=4).contains(&first_doors));
            for door in dungeon.doors.iter().take(first_doors) {
                assert!(first.side(door.direction).contains(&door.point));
                assert_eq!(dungeon.canvas.get(door.point), Some(Tile::Door));
            }
        }
    }

    #[test]
    fn first_room_perimeter_is_wall_or_door() {
        let dungeon = DungeonGenerator::new(Config::default(), Some(7))
            .unwrap()
            .generate();
        let first = dungeon.rooms[0];
        let door_points: Vec<Point> = dungeon.doors.iter().map(|d| d.point).collect();
        for point in first.cells() {
            let tile = dungeon.canvas.get(point).unwrap();
            if first.is_border(point) {
                if door_points.contains(&point) {
                    assert_eq!(tile, Tile::Door);
                } else {
                    assert_eq!(tile, Tile::Wall, "{point}");
                }
            } else {
                assert_eq!(tile, Tile::Floor);
            }
        }
    }

    #[test]
    fn pending_door_at_edge_stays_pending() {
        // Corridor-end door on the top row facing north has nowhere to go
        let mut rng = StdRng::seed_from_u64(3);
        let config = Config {
            canvas_width: 10,
            canvas_height: 10,
            min_room_size: 3,
            max_room_size: 5,
            min_corridor_length: 1,
            max_corridor_length: 3,
        };
        let mut growth = Growth::new(&config);
        let point = Point::new(0, 5);
        growth.dungeon.canvas.set(point, Tile::Door);
        let index = growth
            .dungeon
            .doors
            .push(point, Direction::North, DoorStatus::CorridorEnd);

        let entry = EntryPoint {
            point,
            direction: Some(Direction::North),
        };
        assert!(!growth.add_room(entry, &mut rng));
        assert_eq!(
            growth.dungeon.doors.get(index).unwrap().status(),
            DoorStatus::CorridorEnd
        );
        assert!(growth.dungeon.rooms.is_empty());
    }

    #[test]
    fn every_room_came_from_a_door() {
        let dungeon = DungeonGenerator::new(Config::default(), Some(2024))
            .unwrap()
            .generate();
        let follow_ups = dungeon.rooms.len() - 1;
        let opened_ends = dungeon
            .corridors
            .iter()
            .filter_map(|c| c.end_door)
            .filter(|i| dungeon.doors.get(*i).unwrap().status() == DoorStatus::Opened)
            .count();
        assert_eq!(follow_ups, opened_ends);
    }

    #[test]
    fn every_room_is_walled_where_it_was_drawn() {
        for seed in 0..40 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut growth = Growth::new(&Config::default());
            let mut before = growth.dungeon.canvas.clone();
            let mut rooms = 0;
            growth.start(&mut rng);
            loop {
                if growth.dungeon.rooms.len() > rooms {
                    let room = growth.dungeon.rooms[rooms];
                    let after = &growth.dungeon.canvas;
                    let drawn = room
                        .cells()
                        .filter(|p| room.is_border(*p) && before.get(*p) == Some(Tile::Blank));
                    for point in drawn {
                        assert!(
                            matches!(after.get(point), Some(Tile::Wall | Tile::Door)),
                            "seed {seed}: {point} of {room:?}"
                        );
                    }
                    rooms = growth.dungeon.rooms.len();
                }
                before = growth.dungeon.canvas.clone();
                if !growth.step(&mut rng) {
                    break;
                }
            }
        }
    }
}
