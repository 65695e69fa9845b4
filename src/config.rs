//! Generation parameters

use thiserror::Error;

/// Smallest room that still has a floor tile between its walls
pub const SMALLEST_ROOM: usize = 3;

/// Size limits for one generation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub canvas_width: usize,
    pub canvas_height: usize,
    /// Smallest room side, walls included
    pub min_room_size: usize,
    /// Largest room side, walls included
    pub max_room_size: usize,
    /// Shortest corridor, counting its end door
    pub min_corridor_length: usize,
    /// Longest corridor, counting its end door
    pub max_corridor_length: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            canvas_width: 80,
            canvas_height: 20,
            min_room_size: 3,
            max_room_size: 10,
            min_corridor_length: 2,
            max_corridor_length: 8,
        }
    }
}

/// Reasons a [Config] cannot be used
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("canvas must not be empty, got {width}x{height}")]
    EmptyCanvas { width: usize, height: usize },

    #[error("canvas of {width}x{height} tiles is too large")]
    CanvasTooLarge { width: usize, height: usize },

    #[error("rooms need at least 3 tiles per side, got {0}")]
    RoomTooSmall(usize),

    #[error("minimum room size {min} exceeds maximum {max}")]
    RoomRange { min: usize, max: usize },

    #[error("corridors need a length of at least 1")]
    ZeroCorridor,

    #[error("minimum corridor length {min} exceeds maximum {max}")]
    CorridorRange { min: usize, max: usize },
}

impl Config {
    /// Check that all sizes are positive and every range is ordered
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.canvas_width == 0 || self.canvas_height == 0 {
            return Err(ConfigError::EmptyCanvas {
                width: self.canvas_width,
                height: self.canvas_height,
            });
        }
        // Coordinates and tile indices must fit in a signed 32-bit integer
        let area = self.canvas_width.checked_mul(self.canvas_height);
        if area.map_or(true, |area| area > i32::MAX as usize) {
            return Err(ConfigError::CanvasTooLarge {
                width: self.canvas_width,
                height: self.canvas_height,
            });
        }
        if self.min_room_size < SMALLEST_ROOM {
            return Err(ConfigError::RoomTooSmall(self.min_room_size));
        }
        if self.min_room_size > self.max_room_size {
            return Err(ConfigError::RoomRange {
                min: self.min_room_size,
                max: self.max_room_size,
            });
        }
        if self.min_corridor_length == 0 {
            return Err(ConfigError::ZeroCorridor);
        }
        if self.min_corridor_length > self.max_corridor_length {
            return Err(ConfigError::CorridorRange {
                min: self.min_corridor_length,
                max: self.max_corridor_length,
            });
        }
        Ok(())
    }
}
