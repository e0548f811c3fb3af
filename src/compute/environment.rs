//! Toroidal, double-buffered simulation grid.

use std::collections::TryReserveError;
use std::fmt;

use super::{Coordinate, SimulationAnalytics};

/// Smallest allowed width or height.
///
/// Neighbourhood offsets reach 2 cells away, and [`Coordinate::wrap`] applies a
/// single correction per axis.
pub const MIN_DIMENSION: usize = 3;

/// Environment construction errors.
#[derive(Debug, thiserror::Error)]
pub enum EnvironmentError {
    #[error("Grid dimensions {width}x{height} are below the minimum of {min}", min = MIN_DIMENSION)]
    InvalidDimensions { width: usize, height: usize },
    #[error("Grid of {width}x{height} cells is too large to index")]
    Overflow { width: usize, height: usize },
    #[error("Failed to allocate cell buffers: {0}")]
    Allocation(#[from] TryReserveError),
}

/// Simulation grid.
///
/// Cells are stored row-major (`y * width + x`). The current generation lives
/// in `cells`; `next_generation` is the write target while stepping and the two
/// swap roles after every generation.
#[derive(Debug, Clone)]
pub struct Environment {
    width: usize,
    height: usize,
    pub(crate) cells: Vec<bool>,
    pub(crate) next_generation: Vec<bool>,
    pub(crate) analytics: SimulationAnalytics,
}

impl Environment {
    /// Create an all-dead environment.
    pub fn new(
        width: usize,
        height: usize,
        generation_speed: u32,
    ) -> Result<Self, EnvironmentError> {
        if width < MIN_DIMENSION || height < MIN_DIMENSION {
            return Err(EnvironmentError::InvalidDimensions { width, height });
        }
        // Coordinates are i32 during neighbour lookups.
        if width > i32::MAX as usize || height > i32::MAX as usize {
            return Err(EnvironmentError::Overflow { width, height });
        }
        let size = width
            .checked_mul(height)
            .ok_or(EnvironmentError::Overflow { width, height })?;

        let cells = dead_buffer(size)?;
        let next_generation = dead_buffer(size)?;
        log::debug!("Created {width}x{height} environment ({generation_speed}ms generations)");

        Ok(Self {
            width,
            height,
            cells,
            next_generation,
            analytics: SimulationAnalytics::new(generation_speed),
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells.
    #[inline]
    pub fn area(&self) -> usize {
        self.width * self.height
    }

    pub fn analytics(&self) -> &SimulationAnalytics {
        &self.analytics
    }

    /// Mutable analytics access, for speed adjustments.
    pub fn analytics_mut(&mut self) -> &mut SimulationAnalytics {
        &mut self.analytics
    }

    /// Kill every cell and reset the counters. Buffers and speed are kept.
    pub fn clear(&mut self) {
        self.cells.fill(false);
        self.analytics.reset();
        log::debug!("Cleared {}x{} environment", self.width, self.height);
    }

    /// Whether (x, y) addresses a cell of this grid.
    #[inline]
    pub fn in_bounds(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    /// Signed variant of [`in_bounds`](Self::in_bounds).
    #[inline]
    pub fn contains(&self, coord: Coordinate) -> bool {
        coord.x >= 0 && coord.y >= 0 && self.in_bounds(coord.x as usize, coord.y as usize)
    }

    #[inline]
    pub fn idx(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Wrap a coordinate onto this torus. See [`Coordinate::wrap`].
    #[inline]
    pub fn wrap(&self, coord: Coordinate) -> Coordinate {
        coord.wrap(self.width, self.height)
    }

    /// State of the cell at (x, y) in the current generation.
    ///
    /// (x, y) must be in bounds; this is only checked in debug builds. Callers
    /// holding external coordinates (pointer positions) check
    /// [`in_bounds`](Self::in_bounds) first.
    #[inline]
    pub fn read(&self, x: usize, y: usize) -> bool {
        debug_assert!(self.in_bounds(x, y), "read ({x}, {y}) out of bounds");
        self.cells[self.idx(x, y)]
    }

    /// Set the cell at (x, y). Same precondition as [`read`](Self::read).
    #[inline]
    pub fn write(&mut self, x: usize, y: usize, value: bool) {
        debug_assert!(self.in_bounds(x, y), "write ({x}, {y}) out of bounds");
        let i = self.idx(x, y);
        self.cells[i] = value;
    }

    /// Flip a user-drawn cell and return its new state.
    ///
    /// Drawn cells count towards the initial population; erasing one removes it
    /// again without going below zero.
    pub fn toggle(&mut self, x: usize, y: usize) -> bool {
        let state = !self.read(x, y);
        if state {
            self.analytics.cell_drawn();
        } else {
            self.analytics.cell_erased();
        }
        self.write(x, y, state);
        state
    }

    /// Current generation as a row-major slice.
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Live cells in the current buffer, counted directly.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Percentage of the grid that is alive.
    pub fn percent_alive(&self) -> f64 {
        self.analytics.percent_alive(self.area())
    }

    /// Population relative to the initial cells, in percent.
    pub fn growth(&self) -> f64 {
        self.analytics.growth()
    }
}

fn dead_buffer(size: usize) -> Result<Vec<bool>, TryReserveError> {
    let mut buffer = Vec::new();
    buffer.try_reserve_exact(size)?;
    buffer.resize(size, false);
    Ok(buffer)
}

/// Renders the grid as rows of `#` (alive) and `.` (dead).
impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.cells.chunks(self.width).enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            for &alive in row {
                f.write_str(if alive { "#" } else { "." })?;
            }
        }
        Ok(())
    }
}
