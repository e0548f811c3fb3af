//! Seed types for initializing simulations.

use rand::{Rng, SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};

use crate::compute::{Coordinate, Environment, translate_all};

/// A fixed pattern of live cells, as offsets relative to a placement origin.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Seed {
    pub points: Vec<Coordinate>,
}

impl Seed {
    pub fn new(points: Vec<Coordinate>) -> Self {
        Self { points }
    }

    /// The nine-cell "shoebox", which grows into a large symmetric colony
    /// under the Conway rule.
    pub fn shoebox() -> Self {
        Self::from_offsets(&[
            (-1, -1),
            (0, -1),
            (1, -1),
            (2, -1),
            (-1, 0),
            (2, 0),
            (-1, 1),
            (1, 1),
            (2, 1),
        ])
    }

    /// Period-2 oscillator centred on the origin.
    pub fn blinker() -> Self {
        Self::from_offsets(&[(-1, 0), (0, 0), (1, 0)])
    }

    /// Spaceship travelling one cell towards +x, +y every four generations.
    pub fn glider() -> Self {
        Self::from_offsets(&[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)])
    }

    /// Random fill of a `width` x `height` block anchored at the origin.
    ///
    /// Each cell is alive with probability `density`. The same `seed` always
    /// yields the same pattern.
    pub fn soup(width: usize, height: usize, density: f64, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let density = density.clamp(0.0, 1.0);

        let mut points = Vec::new();
        for y in 0..height as i32 {
            for x in 0..width as i32 {
                if rng.gen_bool(density) {
                    points.push(Coordinate::new(x, y));
                }
            }
        }
        Self { points }
    }

    fn from_offsets(offsets: &[(i32, i32)]) -> Self {
        Self {
            points: offsets.iter().copied().map(Coordinate::from).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Points moved to `origin`.
    pub fn translated(&self, origin: Coordinate) -> Vec<Coordinate> {
        let mut points = self.points.clone();
        translate_all(&mut points, origin.x, origin.y);
        points
    }

    /// Whether every point lands inside `env` when placed at `origin`.
    pub fn fits(&self, env: &Environment, origin: Coordinate) -> bool {
        self.fits_within(env.width(), env.height(), origin)
    }

    pub(crate) fn fits_within(&self, width: usize, height: usize, origin: Coordinate) -> bool {
        self.points.iter().all(|p| {
            match (p.x.checked_add(origin.x), p.y.checked_add(origin.y)) {
                (Some(x), Some(y)) => {
                    x >= 0 && y >= 0 && (x as usize) < width && (y as usize) < height
                }
                _ => false,
            }
        })
    }

    /// Stamp the seed onto `env` at `origin` and record its size as the
    /// initial population.
    ///
    /// Points are not wrapped. The caller chooses an origin that keeps every
    /// point in bounds (see [`fits`](Self::fits)); this is only checked in
    /// debug builds.
    pub fn place(&self, env: &mut Environment, origin: Coordinate) {
        for point in self.translated(origin) {
            debug_assert!(env.contains(point), "seed point {point:?} out of bounds");
            env.write(point.x as usize, point.y as usize, true);
        }
        env.analytics.initial_cells = u32::try_from(self.len()).unwrap_or(u32::MAX);
        log::debug!("Placed {} seed cells at {:?}", self.len(), origin);
    }
}

/// Predefined patterns for initialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Pattern {
    ShoeBox,
    Blinker,
    Glider,
    /// Uniform random fill of the whole grid.
    Soup {
        /// Probability of each cell starting alive.
        density: f64,
        /// Random seed.
        seed: u64,
    },
    /// Explicit offsets from the origin.
    Custom { points: Vec<Coordinate> },
}

/// Seed file contents: a pattern and where to place it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedSpec {
    pub pattern: Pattern,
    /// Placement origin. Defaults to the grid centre, or the top-left corner
    /// for soups.
    #[serde(default)]
    pub origin: Option<Coordinate>,
}

impl Default for SeedSpec {
    fn default() -> Self {
        Self {
            pattern: Pattern::ShoeBox,
            origin: None,
        }
    }
}

impl SeedSpec {
    /// Build the seed for a `width` x `height` grid and resolve its origin.
    pub fn resolve(&self, width: usize, height: usize) -> (Seed, Coordinate) {
        let centre = Coordinate::new((width / 2) as i32, (height / 2) as i32);
        let (seed, default_origin) = match &self.pattern {
            Pattern::ShoeBox => (Seed::shoebox(), centre),
            Pattern::Blinker => (Seed::blinker(), centre),
            Pattern::Glider => (Seed::glider(), centre),
            Pattern::Soup { density, seed } => (
                Seed::soup(width, height, *density, *seed),
                Coordinate::default(),
            ),
            Pattern::Custom { points } => (Seed::new(points.clone()), centre),
        };
        (seed, self.origin.unwrap_or(default_origin))
    }
}
