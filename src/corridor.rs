//! Straight corridors leading out of room doors

use log::{debug, trace};
use rand::Rng;

use crate::canvas::{Canvas, Direction, Point, Tile};
use crate::door::{DoorRegistry, DoorStatus};
use crate::probe::SpaceProbe;

/// A carved corridor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Corridor {
    /// Registry index of the door the corridor leaves from
    pub door: usize,
    pub start: Point,
    pub direction: Direction,
    /// Length chosen before walking, end door included
    pub planned: usize,
    /// Tiles actually written, end door included
    pub carved: usize,
    /// Registry index of the door at the far end, if one was made
    pub end_door: Option<usize>,
}

/// Carves corridors out of unopened doors
#[derive(Debug, Clone, Copy)]
pub struct CorridorCarver {
    pub min_length: usize,
    pub max_length: usize,
}

impl CorridorCarver {
    pub fn new(min_length: usize, max_length: usize) -> Self {
        Self {
            min_length,
            max_length,
        }
    }

    /// Carve a corridor from every door that is still unopened
    ///
    /// Returns the corridors in registry order. Doors facing no free space
    /// stay unopened.
    pub fn carve_all<R: Rng + ?Sized>(
        &self,
        canvas: &mut Canvas,
        registry: &mut DoorRegistry,
        rng: &mut R,
    ) -> Vec<Corridor> {
        registry
            .indices_with(DoorStatus::Unopened)
            .into_iter()
            .filter_map(|index| self.carve(canvas, registry, index, rng))
            .collect()
    }

    /// Carve a corridor out of door `index`
    pub fn carve<R: Rng + ?Sized>(
        &self,
        canvas: &mut Canvas,
        registry: &mut DoorRegistry,
        index: usize,
        rng: &mut R,
    ) -> Option<Corridor> {
        let door = registry.get(index)?;
        if door.status() != DoorStatus::Unopened {
            return None;
        }
        let (start, direction) = (door.point, door.direction);

        let available = SpaceProbe::new(canvas).run(start, direction);
        if available == 0 {
            trace!("door at {} faces no free space", start);
            return None;
        }
        let planned = rng
            .gen_range(self.min_length..=self.max_length)
            .min(available);
        registry.open(index);

        let mut carved = 0;
        let mut end_door = None;
        for steps in 1..=planned {
            let point = start.step(direction, steps as i32);
            if !canvas.is_blank(point) {
                break;
            }
            carved += 1;
            if steps == planned {
                canvas.set(point, Tile::Door);
                end_door = Some(registry.push(point, direction, DoorStatus::CorridorEnd));
            } else {
                canvas.set(point, Tile::Corridor);
            }
        }
        debug!(
            "corridor of {} tiles heading {} from {}",
            carved, direction, start
        );

        Some(Corridor {
            door: index,
            start,
            direction,
            planned,
            carved,
            end_door,
        })
    }
}
