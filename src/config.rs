use crate::error::Error;

/// Default edge length of one grid cell in pixels.
pub const DEFAULT_CELL_SIZE_PX: i32 = 20;

/// Default display width in pixels.
pub const DEFAULT_DISPLAY_WIDTH_PX: i32 = 320;

/// Default display height in pixels, control panel included.
pub const DEFAULT_DISPLAY_HEIGHT_PX: i32 = 400;

/// Height of the control panel in cells, subtracted from the display
/// height when deriving the playable board.
pub const CONTROL_PANEL_CELLS: i32 = 4;

/// Base tick interval in milliseconds.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 200;

/// Minimum tick interval in milliseconds.
pub const MIN_TICK_INTERVAL_MS: u64 = 30;

/// Input poll timeout per loop iteration in milliseconds.
pub const INPUT_POLL_INTERVAL_MS: u64 = 16;

/// Snake head glyphs by travel direction.
pub const GLYPH_SNAKE_HEAD_UP: &str = "▲";
pub const GLYPH_SNAKE_HEAD_DOWN: &str = "▼";
pub const GLYPH_SNAKE_HEAD_LEFT: &str = "◀";
pub const GLYPH_SNAKE_HEAD_RIGHT: &str = "▶";

/// Body segment glyph.
pub const GLYPH_SNAKE_BODY: &str = "█";

/// Tail segment glyph.
pub const GLYPH_SNAKE_TAIL: &str = "▓";

/// Food glyph.
pub const GLYPH_FOOD: &str = "●";

/// Board geometry fixed at startup.
///
/// Coordinates across the game are absolute pixels; every entity sits on a
/// multiple of `cell_size`. The playable area is derived from the display
/// dimensions minus the control-panel band and is not runtime-mutable.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct BoardConfig {
    pub cell_size: i32,
    pub width_px: i32,
    pub height_px: i32,
}

impl BoardConfig {
    /// Derives the playable board from display dimensions.
    ///
    /// The control panel claims [`CONTROL_PANEL_CELLS`] rows of the display
    /// height; both axes are then truncated to whole cells.
    pub fn from_display(
        display_width_px: i32,
        display_height_px: i32,
        cell_size: i32,
    ) -> Result<Self, Error> {
        if cell_size <= 0 {
            return Err(Error::Board(format!("cell size must be positive, got {cell_size}")));
        }

        let panel_px = cell_size * CONTROL_PANEL_CELLS;
        let width_px = align_to_cell(display_width_px, cell_size);
        let height_px = align_to_cell(display_height_px - panel_px, cell_size);

        let board = Self {
            cell_size,
            width_px,
            height_px,
        };

        if board.cells_wide() < 2 || board.cells_high() < 2 {
            return Err(Error::Board(format!(
                "display {display_width_px}×{display_height_px} with cell size {cell_size} \
                 leaves a board smaller than 2×2 cells"
            )));
        }

        Ok(board)
    }

    /// Number of cells along the horizontal axis.
    #[must_use]
    pub fn cells_wide(self) -> i32 {
        self.width_px / self.cell_size
    }

    /// Number of cells along the vertical axis.
    #[must_use]
    pub fn cells_high(self) -> i32 {
        self.height_px / self.cell_size
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::from_display(
            DEFAULT_DISPLAY_WIDTH_PX,
            DEFAULT_DISPLAY_HEIGHT_PX,
            DEFAULT_CELL_SIZE_PX,
        )
        .expect("default board dimensions must be valid")
    }
}

/// Truncates a pixel coordinate down to the nearest cell boundary.
#[must_use]
pub fn align_to_cell(value_px: i32, cell_size: i32) -> i32 {
    value_px / cell_size * cell_size
}
