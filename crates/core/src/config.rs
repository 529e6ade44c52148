//! Grid and game configuration.
//!
//! The playfield is configured in pixels (board width/height plus cell size)
//! and the simulation works in derived cell counts. Both pixel dimensions must
//! divide evenly by the cell size.

use thiserror::Error;

use crate::types::{
    Cell, Heading, BOARD_PX_HEIGHT, BOARD_PX_WIDTH, CELL_PX, DEFAULT_HEADING, DROPPING_CAPACITY,
    INITIAL_SNAKE_LENGTH,
};

/// Reasons a pixel-based grid derivation may be rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("cell size must be non-zero")]
    ZeroCellSize,
    #[error("cell size {cell_px}px does not divide board width {px}px")]
    UnevenWidth { px: u32, cell_px: u32 },
    #[error("cell size {cell_px}px does not divide board height {px}px")]
    UnevenHeight { px: u32, cell_px: u32 },
    #[error("grid of {width}x{height} cells is too small to play on")]
    DegenerateGrid { width: u32, height: u32 },
}

/// Playfield dimensions in cells.
///
/// The grid is toroidal; [`GridConfig::step`] wraps on both axes
/// independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridConfig {
    pub width: u16,
    pub height: u16,
}

impl GridConfig {
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Derive cell counts from pixel dimensions.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_snek_core::GridConfig;
    ///
    /// let grid = GridConfig::from_pixels(4000, 2000, 100).unwrap();
    /// assert_eq!((grid.width, grid.height), (40, 20));
    ///
    /// assert!(GridConfig::from_pixels(4000, 2000, 300).is_err());
    /// ```
    pub fn from_pixels(px_width: u32, px_height: u32, cell_px: u32) -> Result<Self, ConfigError> {
        if cell_px == 0 {
            return Err(ConfigError::ZeroCellSize);
        }
        if px_width % cell_px != 0 {
            return Err(ConfigError::UnevenWidth {
                px: px_width,
                cell_px,
            });
        }
        if px_height % cell_px != 0 {
            return Err(ConfigError::UnevenHeight {
                px: px_height,
                cell_px,
            });
        }

        let width = px_width / cell_px;
        let height = px_height / cell_px;
        // A 1-wide or 1-high torus degenerates into self-collision on the
        // first wrap; u16 keeps cell coordinates representable.
        if width < 2 || height < 2 || width > u16::MAX as u32 || height > u16::MAX as u32 {
            return Err(ConfigError::DegenerateGrid { width, height });
        }

        Ok(Self::new(width as u16, height as u16))
    }

    /// Total number of cells on the grid.
    pub fn cell_count(&self) -> u32 {
        self.width as u32 * self.height as u32
    }

    /// Move one cell in `heading`, wrapping toroidally on the moved axis.
    ///
    /// The orthogonal axis is unchanged.
    pub fn step(&self, from: Cell, heading: Heading) -> Cell {
        match heading {
            Heading::Right => {
                let x = if from.x + 1 >= self.width { 0 } else { from.x + 1 };
                Cell::new(x, from.y)
            }
            Heading::Left => {
                let x = if from.x == 0 { self.width - 1 } else { from.x - 1 };
                Cell::new(x, from.y)
            }
            Heading::Down => {
                let y = if from.y + 1 >= self.height { 0 } else { from.y + 1 };
                Cell::new(from.x, y)
            }
            Heading::Up => {
                let y = if from.y == 0 { self.height - 1 } else { from.y - 1 };
                Cell::new(from.x, y)
            }
        }
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        // The pixel constants are known-good; deriving them cannot fail.
        Self::from_pixels(BOARD_PX_WIDTH, BOARD_PX_HEIGHT, CELL_PX)
            .expect("default board constants divide evenly")
    }
}

/// Everything the simulation needs to build and advance a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub grid: GridConfig,
    /// Segment count of a freshly spawned snake.
    pub initial_snake_len: usize,
    /// Runtime cap on retained droppings (at most [`DROPPING_CAPACITY`]).
    pub dropping_capacity: usize,
    /// Heading the snake starts with; also the direction queue's reset value.
    pub default_heading: Heading,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid: GridConfig::default(),
            initial_snake_len: INITIAL_SNAKE_LENGTH,
            dropping_capacity: DROPPING_CAPACITY,
            default_heading: DEFAULT_HEADING,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_pixels_default_constants() {
        let grid = GridConfig::from_pixels(4000, 2000, 100).unwrap();
        assert_eq!(grid, GridConfig::new(40, 20));
        assert_eq!(grid.cell_count(), 800);
    }

    #[test]
    fn test_from_pixels_rejects_uneven_division() {
        assert_eq!(
            GridConfig::from_pixels(4001, 2000, 100),
            Err(ConfigError::UnevenWidth {
                px: 4001,
                cell_px: 100
            })
        );
        assert_eq!(
            GridConfig::from_pixels(4000, 2050, 100),
            Err(ConfigError::UnevenHeight {
                px: 2050,
                cell_px: 100
            })
        );
        assert_eq!(
            GridConfig::from_pixels(4000, 2000, 0),
            Err(ConfigError::ZeroCellSize)
        );
    }

    #[test]
    fn test_from_pixels_rejects_degenerate_grid() {
        assert!(matches!(
            GridConfig::from_pixels(100, 2000, 100),
            Err(ConfigError::DegenerateGrid { .. })
        ));
    }

    #[test]
    fn test_step_wraps_on_every_edge() {
        let grid = GridConfig::new(10, 8);

        assert_eq!(grid.step(Cell::new(9, 4), Heading::Right), Cell::new(0, 4));
        assert_eq!(grid.step(Cell::new(0, 4), Heading::Left), Cell::new(9, 4));
        assert_eq!(grid.step(Cell::new(3, 7), Heading::Down), Cell::new(3, 0));
        assert_eq!(grid.step(Cell::new(3, 0), Heading::Up), Cell::new(3, 7));
    }

    #[test]
    fn test_step_leaves_orthogonal_axis_alone() {
        let grid = GridConfig::default();
        let from = Cell::new(5, 5);

        assert_eq!(grid.step(from, Heading::Right).y, 5);
        assert_eq!(grid.step(from, Heading::Up).x, 5);
    }
}
