//! Neighbourhood offset tables and neighbour-state gathering.
//!
//! Every larger neighbourhood lists its smaller constituent first, so rules can
//! split a neighbour vector into "closest K" and "remaining" without a second
//! lookup:
//!
//! ```text
//! VON_NEUMANN          (4)  ─┐
//! VON_NEUMANN_CORNERS  (4)  ─┴─ MOORE (8) ── VON_NEUMANN_R2 (12) ── TRIPLE_MOORE (20) ── TRIPLE_MOORE_CORNER (24)
//! VON_NEUMANN_CORNERS  (4)  ─── LESSE (8)
//! ```

use super::{Coordinate, Environment};

const fn c(x: i32, y: i32) -> Coordinate {
    Coordinate::new(x, y)
}

const VON_NEUMANN_OFFSETS: [Coordinate; 4] = [c(0, -1), c(0, 1), c(1, 0), c(-1, 0)];

const VON_NEUMANN_CORNERS_OFFSETS: [Coordinate; 4] = [c(1, -1), c(1, 1), c(-1, -1), c(-1, 1)];

const LESSE_OFFSETS: [Coordinate; 8] = [
    c(1, -1),
    c(1, 1),
    c(-1, -1),
    c(-1, 1),
    c(0, -2),
    c(0, 2),
    c(2, 0),
    c(-2, 0),
];

const MOORE_OFFSETS: [Coordinate; 8] = [
    c(0, -1),
    c(0, 1),
    c(1, 0),
    c(-1, 0),
    c(1, -1),
    c(1, 1),
    c(-1, -1),
    c(-1, 1),
];

const VON_NEUMANN_R2_OFFSETS: [Coordinate; 12] = [
    c(0, -1),
    c(0, 1),
    c(1, 0),
    c(-1, 0),
    c(1, -1),
    c(1, 1),
    c(-1, -1),
    c(-1, 1),
    c(0, -2),
    c(0, 2),
    c(2, 0),
    c(-2, 0),
];

const TRIPLE_MOORE_OFFSETS: [Coordinate; 20] = [
    c(0, -1),
    c(0, 1),
    c(1, 0),
    c(-1, 0),
    c(1, -1),
    c(1, 1),
    c(-1, -1),
    c(-1, 1),
    c(0, -2),
    c(0, 2),
    c(2, 0),
    c(-2, 0),
    c(-1, -2),
    c(1, -2),
    c(-1, 2),
    c(1, 2),
    c(-2, -1),
    c(-2, 1),
    c(2, -1),
    c(2, 1),
];

const TRIPLE_MOORE_CORNER_OFFSETS: [Coordinate; 24] = [
    c(0, -1),
    c(0, 1),
    c(1, 0),
    c(-1, 0),
    c(1, -1),
    c(1, 1),
    c(-1, -1),
    c(-1, 1),
    c(0, -2),
    c(0, 2),
    c(2, 0),
    c(-2, 0),
    c(-1, -2),
    c(1, -2),
    c(-1, 2),
    c(1, 2),
    c(-2, -1),
    c(-2, 1),
    c(2, -1),
    c(2, 1),
    c(-2, -2),
    c(-2, 2),
    c(2, -2),
    c(2, 2),
];

/// The 4 orthogonally adjacent cells.
pub const VON_NEUMANN: Neighbourhood = Neighbourhood::new("von neumann", &VON_NEUMANN_OFFSETS);
/// The 4 diagonally adjacent cells.
pub const VON_NEUMANN_CORNERS: Neighbourhood =
    Neighbourhood::new("von neumann corners", &VON_NEUMANN_CORNERS_OFFSETS);
/// Diagonals plus the orthogonal cells at distance 2.
pub const LESSE: Neighbourhood = Neighbourhood::new("lesse", &LESSE_OFFSETS);
/// The 8 cells surrounding a cell.
pub const MOORE: Neighbourhood = Neighbourhood::new("moore", &MOORE_OFFSETS);
/// Moore plus the orthogonal cells at distance 2.
pub const VON_NEUMANN_R2: Neighbourhood =
    Neighbourhood::new("von neumann r2", &VON_NEUMANN_R2_OFFSETS);
/// The 5x5 block without its centre and corners.
pub const TRIPLE_MOORE: Neighbourhood = Neighbourhood::new("triple moore", &TRIPLE_MOORE_OFFSETS);
/// The full 5x5 block without its centre.
pub const TRIPLE_MOORE_CORNER: Neighbourhood =
    Neighbourhood::new("triple moore corner", &TRIPLE_MOORE_CORNER_OFFSETS);

/// Every built-in neighbourhood, smallest first.
pub const NEIGHBOURHOODS: [Neighbourhood; 7] = [
    VON_NEUMANN,
    VON_NEUMANN_CORNERS,
    LESSE,
    MOORE,
    VON_NEUMANN_R2,
    TRIPLE_MOORE,
    TRIPLE_MOORE_CORNER,
];

/// Fixed, ordered set of relative offsets around a focal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Neighbourhood {
    name: &'static str,
    offsets: &'static [Coordinate],
}

impl Neighbourhood {
    const fn new(name: &'static str, offsets: &'static [Coordinate]) -> Self {
        Self { name, offsets }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn offsets(&self) -> &'static [Coordinate] {
        self.offsets
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Live/dead state of each neighbour of (x, y), in offset order.
    ///
    /// Neighbour positions are wrapped toroidally before the lookup.
    pub fn states<'a>(
        &'a self,
        env: &'a Environment,
        x: usize,
        y: usize,
    ) -> impl Iterator<Item = bool> + 'a {
        let focal = Coordinate::new(x as i32, y as i32);
        self.offsets.iter().map(move |offset| {
            let n = env.wrap(focal.translate(offset.x, offset.y));
            env.read(n.x as usize, n.y as usize)
        })
    }

    /// Materialized neighbour-state vector.
    pub fn neighbour_states(&self, env: &Environment, x: usize, y: usize) -> Vec<bool> {
        self.states(env, x, y).collect()
    }

    /// Number of live neighbours of (x, y).
    #[inline]
    pub fn count(&self, env: &Environment, x: usize, y: usize) -> u32 {
        self.states(env, x, y).map(u32::from).sum()
    }

    /// Live count among the leading `split` offsets, and over the whole
    /// neighbourhood, as `(closest, total)`.
    pub fn partitioned_count(
        &self,
        env: &Environment,
        x: usize,
        y: usize,
        split: usize,
    ) -> (u32, u32) {
        debug_assert!(split <= self.len());
        let mut closest = 0;
        let mut total = 0;
        for (i, alive) in self.states(env, x, y).enumerate() {
            let alive = u32::from(alive);
            if i < split {
                closest += alive;
            }
            total += alive;
        }
        (closest, total)
    }
}
