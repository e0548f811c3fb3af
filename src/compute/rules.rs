//! Cell types and their state-transition rules.
//!
//! Every rule is a pure function of the current generation: it reads the
//! cell's own state and the live count of a fixed neighbourhood, and never
//! sees cells written during the same generation.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Environment;
use super::neighbourhood::{
    LESSE, MOORE, Neighbourhood, TRIPLE_MOORE, VON_NEUMANN, VON_NEUMANN_CORNERS, VON_NEUMANN_R2,
};

/// Computes the next state of the cell at (x, y).
pub type StateCalculator = fn(&Environment, usize, usize) -> bool;

/// A kind of cell, selecting the rule used to compute each generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CellType {
    /// Conway's Game of Life, B3/S23 on the Moore neighbourhood.
    #[default]
    Conway,
    /// B3/S23 on the Lesse neighbourhood.
    LesseConway,
    /// B3/S2345.
    Maze,
    /// B2/S45.
    Noise,
    /// B1/S2+ on the Von Neumann neighbourhood.
    Fractal,
    /// B1/S2+ on the diagonal neighbourhood.
    FractalCorner,
    /// Triple Moore totals moderated by the closest eight cells.
    TripleMooreConway,
    /// Von Neumann radius 2 totals moderated by the closest four cells.
    VonNeumannR2Conway,
    /// Unmoderated B4/S3456 on Von Neumann radius 2. Grows without bound.
    ConwayCancer,
}

/// Digit key to cell type. Index `n` is selected by pressing `n`.
pub const CELL_MAP: [CellType; 10] = [
    CellType::Conway,
    CellType::Conway,
    CellType::LesseConway,
    CellType::VonNeumannR2Conway,
    CellType::TripleMooreConway,
    CellType::Maze,
    CellType::FractalCorner,
    CellType::Fractal,
    CellType::Noise,
    CellType::ConwayCancer,
];

impl CellType {
    pub const ALL: [CellType; 9] = [
        CellType::Conway,
        CellType::LesseConway,
        CellType::Maze,
        CellType::Noise,
        CellType::Fractal,
        CellType::FractalCorner,
        CellType::TripleMooreConway,
        CellType::VonNeumannR2Conway,
        CellType::ConwayCancer,
    ];

    /// Look up the cell type bound to a digit key (0-9).
    pub fn from_digit(digit: u8) -> Option<Self> {
        let cell_type = CELL_MAP.get(usize::from(digit)).copied();
        if let Some(cell_type) = cell_type {
            log::debug!("Selected {cell_type} for digit {digit}");
        }
        cell_type
    }

    /// Human-readable label.
    pub fn name(self) -> &'static str {
        match self {
            CellType::Conway => "conway cell",
            CellType::LesseConway => "lesse conway cell",
            CellType::Maze => "maze cell",
            CellType::Noise => "noise cell",
            CellType::Fractal => "fractal cell",
            CellType::FractalCorner => "fractal corner cell",
            CellType::TripleMooreConway => "triple moore conway cell",
            CellType::VonNeumannR2Conway => "von neumann r2 conway cell",
            CellType::ConwayCancer => "conway cancer cell",
        }
    }

    /// Neighbourhood inspected by this cell type's rule.
    pub fn neighbourhood(self) -> Neighbourhood {
        match self {
            CellType::Conway | CellType::Maze | CellType::Noise => MOORE,
            CellType::LesseConway => LESSE,
            CellType::Fractal => VON_NEUMANN,
            CellType::FractalCorner => VON_NEUMANN_CORNERS,
            CellType::TripleMooreConway => TRIPLE_MOORE,
            CellType::VonNeumannR2Conway | CellType::ConwayCancer => VON_NEUMANN_R2,
        }
    }

    /// State calculator implementing this cell type's rule.
    pub fn calculator(self) -> StateCalculator {
        match self {
            CellType::Conway => conway_next_state,
            CellType::LesseConway => lesse_conway_next_state,
            CellType::Maze => maze_next_state,
            CellType::Noise => noise_next_state,
            CellType::Fractal => fractal_next_state,
            CellType::FractalCorner => fractal_corner_next_state,
            CellType::TripleMooreConway => triple_moore_conway_next_state,
            CellType::VonNeumannR2Conway => von_neumann_r2_conway_next_state,
            CellType::ConwayCancer => conway_cancer_next_state,
        }
    }

    /// Next state of the cell at (x, y).
    #[inline]
    pub fn next_state(self, env: &Environment, x: usize, y: usize) -> bool {
        (self.calculator())(env, x, y)
    }
}

impl fmt::Display for CellType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Survive on `survive`, be born on exactly `birth`.
#[inline]
fn life_like(
    alive: bool,
    neighbours: u32,
    survive: impl FnOnce(u32) -> bool,
    birth: u32,
) -> bool {
    if alive {
        survive(neighbours)
    } else {
        neighbours == birth
    }
}

pub fn conway_next_state(env: &Environment, x: usize, y: usize) -> bool {
    let neighbours = MOORE.count(env, x, y);
    life_like(env.read(x, y), neighbours, |n| (2..=3).contains(&n), 3)
}

pub fn lesse_conway_next_state(env: &Environment, x: usize, y: usize) -> bool {
    let neighbours = LESSE.count(env, x, y);
    life_like(env.read(x, y), neighbours, |n| (2..=3).contains(&n), 3)
}

pub fn maze_next_state(env: &Environment, x: usize, y: usize) -> bool {
    let neighbours = MOORE.count(env, x, y);
    life_like(env.read(x, y), neighbours, |n| (2..=5).contains(&n), 3)
}

pub fn noise_next_state(env: &Environment, x: usize, y: usize) -> bool {
    let neighbours = MOORE.count(env, x, y);
    life_like(env.read(x, y), neighbours, |n| (4..=5).contains(&n), 2)
}

pub fn fractal_next_state(env: &Environment, x: usize, y: usize) -> bool {
    let neighbours = VON_NEUMANN.count(env, x, y);
    life_like(env.read(x, y), neighbours, |n| n >= 2, 1)
}

pub fn fractal_corner_next_state(env: &Environment, x: usize, y: usize) -> bool {
    let neighbours = VON_NEUMANN_CORNERS.count(env, x, y);
    life_like(env.read(x, y), neighbours, |n| n >= 2, 1)
}

pub fn triple_moore_conway_next_state(env: &Environment, x: usize, y: usize) -> bool {
    let (closest_eight, total) = TRIPLE_MOORE.partitioned_count(env, x, y, MOORE.len());

    if env.read(x, y) {
        !(total <= 4 || total >= 11 || closest_eight > 5)
    } else {
        (7..=10).contains(&total) && (3..=4).contains(&closest_eight)
    }
}

pub fn von_neumann_r2_conway_next_state(env: &Environment, x: usize, y: usize) -> bool {
    let (closest_four, total) = VON_NEUMANN_R2.partitioned_count(env, x, y, VON_NEUMANN.len());

    if env.read(x, y) {
        !(total <= 2 || total >= 6 || closest_four == 4) && closest_four > 0
    } else {
        total == 4 && closest_four > 0
    }
}

pub fn conway_cancer_next_state(env: &Environment, x: usize, y: usize) -> bool {
    let neighbours = VON_NEUMANN_R2.count(env, x, y);
    life_like(env.read(x, y), neighbours, |n| n > 2 && n <= 6, 4)
}
