//! Configuration types for simulation parameters.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::compute::{
    CellType, DEFAULT_GENERATION_SPEED, Environment, EnvironmentError, MAX_GENERATION_SPEED,
    MIN_DIMENSION,
};

use super::SeedSpec;

fn default_generation_speed() -> u32 {
    DEFAULT_GENERATION_SPEED
}

/// Top-level simulation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Grid width in cells.
    pub width: usize,
    /// Grid height in cells.
    pub height: usize,
    /// Delay between generations in milliseconds.
    #[serde(default = "default_generation_speed")]
    pub generation_speed: u32,
    /// Rule used to compute each generation.
    #[serde(default)]
    pub cell_type: CellType,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            width: 160,
            height: 100,
            generation_speed: DEFAULT_GENERATION_SPEED,
            cell_type: CellType::Conway,
        }
    }
}

impl SimulationConfig {
    /// Get total grid size (width * height).
    #[inline]
    pub fn grid_size(&self) -> usize {
        self.width * self.height
    }

    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width < MIN_DIMENSION || self.height < MIN_DIMENSION {
            return Err(ConfigError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if self.generation_speed > MAX_GENERATION_SPEED {
            return Err(ConfigError::InvalidGenerationSpeed(self.generation_speed));
        }
        Ok(())
    }

    /// Check that `seed` fits inside the configured grid.
    pub fn validate_seed(&self, seed: &SeedSpec) -> Result<(), ConfigError> {
        let (points, origin) = seed.resolve(self.width, self.height);
        if !points.fits_within(self.width, self.height, origin) {
            return Err(ConfigError::SeedOutOfBounds {
                x: origin.x,
                y: origin.y,
            });
        }
        Ok(())
    }

    /// Parse and validate a JSON configuration.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON configuration file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Build an empty environment for this configuration.
    pub fn build_environment(&self) -> Result<Environment, ConfigError> {
        self.validate()?;
        Ok(Environment::new(
            self.width,
            self.height,
            self.generation_speed,
        )?)
    }
}

/// Load a seed specification from a JSON file.
pub fn load_seed<P: AsRef<Path>>(path: P) -> Result<SeedSpec, ConfigError> {
    let json = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&json)?)
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Grid dimensions {width}x{height} must both be at least {min}", min = MIN_DIMENSION)]
    InvalidDimensions { width: usize, height: usize },
    #[error("Generation speed {0}ms exceeds the maximum of {max}ms", max = MAX_GENERATION_SPEED)]
    InvalidGenerationSpeed(u32),
    #[error("Seed placed at ({x}, {y}) does not fit inside the grid")]
    SeedOutOfBounds { x: i32, y: i32 },
    #[error("Failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Environment(#[from] EnvironmentError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compute::Coordinate;
    use crate::schema::Pattern;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_is_valid() {
        let config = SimulationConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.grid_size(), 16_000);
    }

    #[test]
    fn test_validate_dimensions() {
        let config = SimulationConfig {
            width: 2,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidDimensions { width: 2, .. })
        ));
    }

    #[test]
    fn test_validate_speed() {
        let config = SimulationConfig {
            generation_speed: MAX_GENERATION_SPEED + 1,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidGenerationSpeed(_))
        ));
    }

    #[test]
    fn test_json_defaults() {
        let config = SimulationConfig::from_json_str(r#"{"width": 32, "height": 24}"#).unwrap();
        assert_eq!(config.generation_speed, DEFAULT_GENERATION_SPEED);
        assert_eq!(config.cell_type, CellType::Conway);

        let config = SimulationConfig::from_json_str(
            r#"{"width": 32, "height": 24, "cell_type": "maze", "generation_speed": 0}"#,
        )
        .unwrap();
        assert_eq!(config.cell_type, CellType::Maze);
    }

    #[test]
    fn test_json_rejects_unknown_cell_type() {
        let result =
            SimulationConfig::from_json_str(r#"{"width": 32, "height": 24, "cell_type": "langtons-ant"}"#);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"width": 12, "height": 9, "cell_type": "noise"}}"#).unwrap();

        let config = SimulationConfig::load(file.path()).unwrap();
        assert_eq!((config.width, config.height), (12, 9));

        let env = config.build_environment().unwrap();
        assert_eq!(env.area(), 108);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = SimulationConfig::load(dir.path().join("missing.json"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_load_seed() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"pattern": {{"type": "Blinker"}}, "origin": {{"x": 1, "y": 1}}}}"#)
            .unwrap();

        let seed = load_seed(file.path()).unwrap();
        assert_eq!(seed.origin, Some(Coordinate::new(1, 1)));
    }

    #[test]
    fn test_validate_seed() {
        let config = SimulationConfig {
            width: 8,
            height: 8,
            ..Default::default()
        };
        assert!(config.validate_seed(&SeedSpec::default()).is_ok());

        let corner = SeedSpec {
            pattern: Pattern::ShoeBox,
            origin: Some(Coordinate::new(0, 0)),
        };
        assert!(matches!(
            config.validate_seed(&corner),
            Err(ConfigError::SeedOutOfBounds { x: 0, y: 0 })
        ));
    }

    #[test]
    fn test_validate_seed_rejects_overflowing_points() {
        let config = SimulationConfig {
            width: 10,
            height: 10,
            ..Default::default()
        };
        let far: SeedSpec =
            serde_json::from_str(r#"{"pattern": {"type": "Custom", "points": [{"x": 2147483647, "y": 0}]}}"#)
                .unwrap();
        assert!(matches!(
            config.validate_seed(&far),
            Err(ConfigError::SeedOutOfBounds { x: 5, y: 5 })
        ));

        let below = SeedSpec {
            pattern: Pattern::Custom {
                points: vec![Coordinate::new(0, i32::MIN)],
            },
            origin: Some(Coordinate::new(1, -1)),
        };
        assert!(matches!(
            config.validate_seed(&below),
            Err(ConfigError::SeedOutOfBounds { .. })
        ));
    }
}
