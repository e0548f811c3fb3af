//! Generation stepping.
//!
//! Next states are written into the environment's scratch buffer while every
//! rule reads the untouched current buffer; the buffers then swap roles.

#[cfg(not(target_arch = "wasm32"))]
use rayon::prelude::*;

use super::{CellType, Environment};

/// Advance the environment by one generation under `cell_type`'s rule.
pub fn next_generation(env: &mut Environment, cell_type: CellType) {
    let calculator = cell_type.calculator();
    let width = env.width();

    // Take the scratch buffer out so the rule can borrow the environment
    // immutably while we write.
    let mut next = std::mem::take(&mut env.next_generation);
    let mut total_cells = 0u64;
    for (y, row) in next.chunks_mut(width).enumerate() {
        for (x, cell) in row.iter_mut().enumerate() {
            let state = calculator(env, x, y);
            total_cells += u64::from(state);
            *cell = state;
        }
    }

    commit(env, next, total_cells);
    log::trace!(
        "Generation {} ({}): {} live cells",
        env.analytics.generations,
        cell_type,
        total_cells
    );
}

/// Data-parallel [`next_generation`]: rows are computed concurrently and
/// their live counts reduced, giving the same grid and totals.
#[cfg(not(target_arch = "wasm32"))]
pub fn par_next_generation(env: &mut Environment, cell_type: CellType) {
    let calculator = cell_type.calculator();
    let width = env.width();

    let mut next = std::mem::take(&mut env.next_generation);
    let current: &Environment = env;
    let total_cells: u64 = next
        .par_chunks_mut(width)
        .enumerate()
        .map(|(y, row)| {
            let mut live = 0u64;
            for (x, cell) in row.iter_mut().enumerate() {
                let state = calculator(current, x, y);
                live += u64::from(state);
                *cell = state;
            }
            live
        })
        .sum();

    commit(env, next, total_cells);
    log::trace!(
        "Generation {} ({}, parallel): {} live cells",
        env.analytics.generations,
        cell_type,
        total_cells
    );
}

/// Run `generations` sequential steps.
pub fn run(env: &mut Environment, cell_type: CellType, generations: u64) {
    for _ in 0..generations {
        next_generation(env, cell_type);
    }
}

/// Install `next` as the current generation and recycle the old buffer.
fn commit(env: &mut Environment, next: Vec<bool>, total_cells: u64) {
    env.next_generation = std::mem::replace(&mut env.cells, next);
    env.analytics.total_cells = total_cells;
    env.analytics.generations += 1;
}
