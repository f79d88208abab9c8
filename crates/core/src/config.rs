//! Engine configuration - board size, cell pixel size and score weight
//!
//! Supplied once when the engine is built and immutable afterwards.

use std::env;

use thiserror::Error;

use crate::types::{
    DEFAULT_CELL_HEIGHT, DEFAULT_CELL_WIDTH, DEFAULT_COLS, DEFAULT_ROWS, MAX_SHAPE_SIZE,
};

/// Narrowest board a tetromino always fits on
pub const MIN_COLS: u16 = MAX_SHAPE_SIZE as u16;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("board needs at least one row")]
    NoRows,
    #[error("board has {cols} columns, at least {min} are required")]
    TooFewColumns { cols: u16, min: u16 },
    #[error("cell pixel size must be non-zero")]
    ZeroCellSize,
    #[error("starting board is {rows}x{cols}, configuration expects {expected_rows}x{expected_cols}")]
    BoardMismatch {
        rows: u16,
        cols: u16,
        expected_rows: u16,
        expected_cols: u16,
    },
}

/// Rule engine configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    rows: u16,
    cols: u16,
    cell_width: u32,
    cell_height: u32,
    line_weight: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            cell_width: DEFAULT_CELL_WIDTH,
            cell_height: DEFAULT_CELL_HEIGHT,
            line_weight: 1,
        }
    }
}

impl EngineConfig {
    pub fn new(
        rows: u16,
        cols: u16,
        cell_width: u32,
        cell_height: u32,
    ) -> Result<Self, ConfigError> {
        if rows == 0 {
            return Err(ConfigError::NoRows);
        }
        if cols < MIN_COLS {
            return Err(ConfigError::TooFewColumns {
                cols,
                min: MIN_COLS,
            });
        }
        if cell_width == 0 || cell_height == 0 {
            return Err(ConfigError::ZeroCellSize);
        }

        Ok(Self {
            rows,
            cols,
            cell_width,
            cell_height,
            line_weight: 1,
        })
    }

    /// Board of the given size with default cell pixels
    pub fn with_board(rows: u16, cols: u16) -> Result<Self, ConfigError> {
        Self::new(rows, cols, DEFAULT_CELL_WIDTH, DEFAULT_CELL_HEIGHT)
    }

    /// Score added per cleared line
    pub fn with_line_weight(self, line_weight: u32) -> Self {
        Self {
            line_weight,
            ..self
        }
    }

    /// Create from environment variables, falling back to defaults per field
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let rows = env_parse("BLOCKFALL_ROWS").unwrap_or(defaults.rows);
        let cols = env_parse("BLOCKFALL_COLS").unwrap_or(defaults.cols);
        let cell_width = env_parse("BLOCKFALL_CELL_WIDTH").unwrap_or(defaults.cell_width);
        let cell_height = env_parse("BLOCKFALL_CELL_HEIGHT").unwrap_or(defaults.cell_height);
        let line_weight = env_parse("BLOCKFALL_LINE_WEIGHT").unwrap_or(defaults.line_weight);

        Ok(Self::new(rows, cols, cell_width, cell_height)?.with_line_weight(line_weight))
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }

    pub fn cell_width(&self) -> u32 {
        self.cell_width
    }

    pub fn cell_height(&self) -> u32 {
        self.cell_height
    }

    pub fn line_weight(&self) -> u32 {
        self.line_weight
    }

    /// Board size in pixels as (width, height)
    pub fn board_pixel_size(&self) -> (u64, u64) {
        (
            u64::from(self.cols) * u64::from(self.cell_width),
            u64::from(self.rows) * u64::from(self.cell_height),
        )
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|s| s.trim().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let d = EngineConfig::default();
        assert_eq!(
            EngineConfig::new(d.rows(), d.cols(), d.cell_width(), d.cell_height()),
            Ok(d)
        );
        assert_eq!(d.board_pixel_size(), (320, 640));
    }

    #[test]
    fn test_rejects_bad_dimensions() {
        assert_eq!(EngineConfig::new(0, 10, 1, 1), Err(ConfigError::NoRows));
        assert_eq!(
            EngineConfig::new(20, 3, 1, 1),
            Err(ConfigError::TooFewColumns { cols: 3, min: 4 })
        );
        assert_eq!(EngineConfig::new(20, 10, 0, 1), Err(ConfigError::ZeroCellSize));
    }

    #[test]
    fn test_line_weight() {
        let config = EngineConfig::with_board(4, 4).unwrap().with_line_weight(100);
        assert_eq!(config.line_weight(), 100);
        assert_eq!(config.rows(), 4);
    }

    #[test]
    fn test_error_messages() {
        let err = ConfigError::TooFewColumns { cols: 2, min: 4 };
        assert_eq!(err.to_string(), "board has 2 columns, at least 4 are required");
    }
}
