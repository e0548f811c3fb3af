//! Simulation analytics counters and the statistics derived from them.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::CellType;

/// Default delay between generations in milliseconds.
pub const DEFAULT_GENERATION_SPEED: u32 = 100;
/// Slowest allowed delay between generations in milliseconds.
pub const MAX_GENERATION_SPEED: u32 = 2000;
/// Step applied by [`SimulationAnalytics::slow_down`] and [`SimulationAnalytics::speed_up`].
pub const GENERATION_SPEED_STEP: u32 = 25;

/// Counters maintained by an [`Environment`](super::Environment).
///
/// Percentages are never cached: they are recomputed from these counters and
/// the grid area on every query, so a persisted snapshot reproduces them exactly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationAnalytics {
    pub(crate) total_cells: u64,
    pub(crate) initial_cells: u32,
    pub(crate) generations: u64,
    pub(crate) generation_speed: u32,
}

impl SimulationAnalytics {
    pub(crate) fn new(generation_speed: u32) -> Self {
        Self {
            generation_speed,
            ..Default::default()
        }
    }

    /// Live cells in the current generation.
    pub fn total_cells(&self) -> u64 {
        self.total_cells
    }

    /// Cells placed by a seed or drawn by the user.
    pub fn initial_cells(&self) -> u32 {
        self.initial_cells
    }

    /// Generations computed since creation or the last clear.
    pub fn generations(&self) -> u64 {
        self.generations
    }

    /// Delay between generations in milliseconds. Not used by the engine.
    pub fn generation_speed(&self) -> u32 {
        self.generation_speed
    }

    /// Live cells as a percentage of `area`.
    pub fn percent_alive(&self, area: usize) -> f64 {
        self.total_cells as f64 / area as f64 * 100.0
    }

    /// Live cells relative to the initial population, in percent.
    ///
    /// Zero initial cells are treated as one for this ratio only.
    pub fn growth(&self) -> f64 {
        let initial = self.initial_cells.max(1) as f64;
        self.total_cells as f64 / initial * 100.0
    }

    /// Lengthen the generation delay by one step, up to the maximum.
    pub fn slow_down(&mut self) {
        if self.generation_speed <= MAX_GENERATION_SPEED - GENERATION_SPEED_STEP {
            self.generation_speed += GENERATION_SPEED_STEP;
        }
    }

    /// Shorten the generation delay by one step, down to zero.
    pub fn speed_up(&mut self) {
        if self.generation_speed >= GENERATION_SPEED_STEP {
            self.generation_speed -= GENERATION_SPEED_STEP;
        }
    }

    /// Remove the generation delay entirely.
    pub fn max_speed(&mut self) {
        self.generation_speed = 0;
    }

    pub fn set_generation_speed(&mut self, generation_speed: u32) {
        self.generation_speed = generation_speed.min(MAX_GENERATION_SPEED);
    }

    pub(crate) fn reset(&mut self) {
        self.total_cells = 0;
        self.initial_cells = 0;
        self.generations = 0;
    }

    pub(crate) fn cell_drawn(&mut self) {
        self.initial_cells = self.initial_cells.saturating_add(1);
    }

    pub(crate) fn cell_erased(&mut self) {
        self.initial_cells = self.initial_cells.saturating_sub(1);
    }
}

/// Analytics snapshot for display alongside the grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsReport {
    pub cell_type: String,
    pub generations: u64,
    pub initial_cells: u32,
    pub total_cells: u64,
    pub percent_alive: f64,
    pub growth: f64,
    pub generation_speed: u32,
}

impl AnalyticsReport {
    pub fn new(analytics: &SimulationAnalytics, area: usize, cell_type: CellType) -> Self {
        Self {
            cell_type: cell_type.name().to_string(),
            generations: analytics.generations,
            initial_cells: analytics.initial_cells,
            total_cells: analytics.total_cells,
            percent_alive: analytics.percent_alive(area),
            growth: analytics.growth(),
            generation_speed: analytics.generation_speed,
        }
    }
}

impl fmt::Display for AnalyticsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "cell type: {}", self.cell_type)?;
        writeln!(f, "generations: {}", self.generations)?;
        writeln!(f, "initial cells: {}", self.initial_cells)?;
        writeln!(f, "cells: {}", self.total_cells)?;
        writeln!(f, "percentage alive: {:.3}%", self.percent_alive)?;
        writeln!(f, "growth: {:.1}%", self.growth)?;
        write!(f, "generation length: {}ms", self.generation_speed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(total_cells: u64, initial_cells: u32) -> SimulationAnalytics {
        SimulationAnalytics {
            total_cells,
            initial_cells,
            generations: 12,
            generation_speed: DEFAULT_GENERATION_SPEED,
        }
    }

    #[test]
    fn test_zero_initial_cells_guard() {
        let analytics = snapshot(50, 0);
        assert!((analytics.percent_alive(100) - 50.0).abs() < 1e-9);
        assert!((analytics.growth() - 5000.0).abs() < 1e-9);
        assert_eq!(analytics.initial_cells(), 0);
    }

    #[test]
    fn test_growth_ratio() {
        let analytics = snapshot(18, 9);
        assert!((analytics.growth() - 200.0).abs() < 1e-9);
        assert!((analytics.percent_alive(400) - 4.5).abs() < 1e-9);
    }

    #[test]
    fn test_speed_controls() {
        let mut analytics = SimulationAnalytics::new(DEFAULT_GENERATION_SPEED);
        analytics.slow_down();
        assert_eq!(analytics.generation_speed(), 125);
        analytics.speed_up();
        analytics.speed_up();
        assert_eq!(analytics.generation_speed(), 75);

        analytics.max_speed();
        analytics.speed_up();
        assert_eq!(analytics.generation_speed(), 0);

        analytics.set_generation_speed(MAX_GENERATION_SPEED);
        analytics.slow_down();
        assert_eq!(analytics.generation_speed(), MAX_GENERATION_SPEED);
    }

    #[test]
    fn test_erase_clamps_at_zero() {
        let mut analytics = SimulationAnalytics::new(0);
        analytics.cell_erased();
        assert_eq!(analytics.initial_cells(), 0);
        analytics.cell_drawn();
        assert_eq!(analytics.initial_cells(), 1);
    }

    #[test]
    fn test_persisted_snapshot_recomputes_identically() {
        let analytics = snapshot(37, 4);
        let json = serde_json::to_string(&analytics).unwrap();
        let restored: SimulationAnalytics = serde_json::from_str(&json).unwrap();

        assert_eq!(restored, analytics);
        assert_eq!(restored.growth(), analytics.growth());
        assert_eq!(restored.percent_alive(256), analytics.percent_alive(256));
    }

    #[test]
    fn test_report_display() {
        let report = AnalyticsReport::new(&snapshot(50, 0), 100, CellType::Conway);
        let text = report.to_string();

        assert!(text.starts_with("cell type: conway cell\n"));
        assert!(text.contains("generations: 12\n"));
        assert!(text.contains("percentage alive: 50.000%\n"));
        assert!(text.contains("growth: 5000.0%\n"));
        assert!(text.ends_with("generation length: 100ms"));
    }
}
