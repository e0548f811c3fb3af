//! Life Analyzer - Toroidal cellular automata with simulation analytics.
//!
//! This crate provides the simulation engine behind an interactive Game of
//! Life explorer: a wrap-around boolean grid, a family of neighbourhoods, and
//! nine birth/survival rules that share one stepping driver.
//!
//! # Architecture
//!
//! The crate is split into two main modules:
//!
//! - `schema`: Configuration types and seeding for simulations
//! - `compute`: Grid, neighbourhoods, rules, generation stepping and analytics
//!
//! A front end owns an [`Environment`] and the currently selected
//! [`CellType`], calls [`next_generation`] once per tick, and reads cells and
//! [`SimulationAnalytics`] back for display.
//!
//! # Example
//!
//! ```rust,no_run
//! use life_analyzer::{
//!     compute::{AnalyticsReport, CellType, Coordinate, Environment, next_generation},
//!     schema::Seed,
//! };
//!
//! let mut env = Environment::new(64, 48, 100).expect("valid dimensions");
//! Seed::shoebox().place(&mut env, Coordinate::new(32, 24));
//!
//! let cell_type = CellType::from_digit(0).unwrap_or_default();
//! for _ in 0..100 {
//!     next_generation(&mut env, cell_type);
//! }
//!
//! println!("{}", AnalyticsReport::new(env.analytics(), env.area(), cell_type));
//! ```

pub mod compute;
pub mod schema;

// Re-export commonly used types
pub use compute::{CellType, Environment, SimulationAnalytics, next_generation};
pub use schema::{Pattern, Seed, SeedSpec, SimulationConfig};
