pub mod ui_consts {
    //! Dashboard Layout Constants
    //!
    //! Fixed sizes of the panel grid, in terminal cells. Breakpoints and
    //! timings that users may tune live in [`crate::config::Config`] instead.

    // =============================================================================
    // PAGE GRID
    // =============================================================================

    /// Rows above and below the grid.
    pub const PAGE_PADDING_ROWS: u16 = 1;

    /// Columns left and right of the grid.
    pub const PAGE_PADDING_COLS: u16 = 2;

    /// Rows between two grid rows.
    pub const GRID_GAP_ROWS: u16 = 1;

    /// Columns between two grid columns.
    pub const GRID_GAP_COLS: u16 = 2;

    /// Height of every chart panel, borders included.
    pub const CHART_PANEL_HEIGHT: u16 = 20;

    /// Columns a card's borders and horizontal padding take from its width.
    pub const CARD_INSET_COLS: u16 = 4;

    /// Height of the footer strip below the scrolling content.
    pub const FOOTER_HEIGHT: u16 = 2;

    // =============================================================================
    // RISK WALL
    // =============================================================================

    /// Risk Wall metric cell configuration
    pub mod risk_wall {
        /// Blank rows and columns around the content of a metric cell.
        pub const CELL_PADDING: u16 = 1;

        /// Gap between metric cells, both directions.
        pub const CELL_GAP: u16 = 1;

        /// Rows taken by the panel title and the blank line under it.
        pub const HEADER_ROWS: u16 = 2;

        /// Sub-grid columns for narrow, medium and wide viewports.
        pub const NARROW_COLUMNS: u16 = 2;
        pub const MEDIUM_COLUMNS: u16 = 3;
        pub const WIDE_COLUMNS: u16 = 7;
    }

    // =============================================================================
    // CHARTS
    // =============================================================================

    /// Chart rendering configuration
    pub mod charts {
        /// Number of intervals on a line chart y-axis.
        pub const Y_TICK_INTERVALS: u32 = 4;

        /// Samples per grid line; every other run of `GRID_DASH` samples is skipped.
        pub const GRID_SAMPLES: usize = 96;
        pub const GRID_DASH: usize = 3;

        /// Gap between bars of the bar chart.
        pub const BAR_GAP: u16 = 2;

        /// Scale ceiling of the probability bar chart.
        pub const BAR_MAX: u64 = 100;

        /// Share of the pie panel width given to the disc.
        pub const PIE_DISC_PERCENT: u16 = 60;
    }

    // =============================================================================
    // SNAPSHOT
    // =============================================================================

    /// Default width of a headless snapshot.
    pub const SNAPSHOT_DEFAULT_WIDTH: u16 = 160;

    /// Smallest width a snapshot or terminal can be rendered at.
    pub const MIN_RENDER_WIDTH: u16 = 40;
}
