//! Grow a random dungeon of rooms and corridors on a tile canvas
//!
//! Generation starts with a room in the middle of the canvas. Every room
//! gets one to four doors, each door a straight corridor, and the door at
//! the far end of a corridor a new room, until the free space runs out.
//!
//! # Examples
//! ```
//! use dungeon_random::{Config, DungeonGenerator, RenderMode, Tile};
//!
//! let mut generator = DungeonGenerator::new(Config::default(), Some(7)).unwrap();
//! let dungeon = generator.generate();
//!
//! assert!(!dungeon.rooms.is_empty());
//! assert!(dungeon.canvas.count(Tile::Wall) > 0);
//!
//! let text = dungeon.render(RenderMode::Dungeon);
//! assert_eq!(text.lines().count(), 20);
//! ```
//!
//! The random source can also be supplied directly:
//! ```
//! use dungeon_random::{generate, Config};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let config = Config {
//!     canvas_width: 40,
//!     canvas_height: 12,
//!     ..Config::default()
//! };
//! let a = generate(&config, &mut StdRng::seed_from_u64(1)).unwrap();
//! let b = generate(&config, &mut StdRng::seed_from_u64(1)).unwrap();
//! assert_eq!(a.canvas, b.canvas);
//!
//! let broken = Config { min_room_size: 9, max_room_size: 4, ..config };
//! assert!(generate(&broken, &mut StdRng::seed_from_u64(1)).is_err());
//! ```

pub mod canvas;
pub mod config;
pub mod corridor;
pub mod door;
pub mod generator;
pub mod probe;
pub mod render;
pub mod room;

pub use canvas::{Canvas, Direction, EntryPoint, Point, Tile};
pub use config::{Config, ConfigError};
pub use door::{Door, DoorRegistry, DoorStatus};
pub use generator::{generate, Diagnostic, Dungeon, DungeonGenerator};
pub use render::{render, render_canvas, ParseModeError, RenderMode};
pub use room::Room;
