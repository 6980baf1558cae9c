//! Responsive panel grid
//!
//! Panels flow left to right into one or two columns depending on the
//! terminal width. Full-span panels always take a row of their own.

use super::components::risk_wall::tile_height;
use super::view::{MetricGrid, Panel, PanelContent, PanelSpan};
use crate::config::Config;
use crate::consts::ui_consts::{
    CARD_INSET_COLS, CHART_PANEL_HEIGHT, GRID_GAP_COLS, GRID_GAP_ROWS, PAGE_PADDING_COLS,
    PAGE_PADDING_ROWS, risk_wall,
};
use ratatui::layout::Rect;

/// Width classes the layout responds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum Viewport {
    Narrow,
    Medium,
    Wide,
}

/// Column counts at which the viewport class changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Breakpoints {
    pub small: u16,
    pub wide: u16,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for Breakpoints {
    fn from(config: &Config) -> Self {
        Self {
            small: config.small_breakpoint,
            wide: config.wide_breakpoint,
        }
    }
}

impl Viewport {
    pub fn classify(width: u16, breakpoints: Breakpoints) -> Self {
        if width >= breakpoints.wide {
            Viewport::Wide
        } else if width >= breakpoints.small {
            Viewport::Medium
        } else {
            Viewport::Narrow
        }
    }

    /// Columns of the panel grid.
    pub fn grid_columns(self) -> u16 {
        match self {
            Viewport::Wide => 2,
            Viewport::Narrow | Viewport::Medium => 1,
        }
    }

    /// Columns of the Risk Wall metric sub-grid.
    pub fn metric_columns(self) -> u16 {
        match self {
            Viewport::Narrow => risk_wall::NARROW_COLUMNS,
            Viewport::Medium => risk_wall::MEDIUM_COLUMNS,
            Viewport::Wide => risk_wall::WIDE_COLUMNS,
        }
    }
}

/// One panel placed on the page, in content coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCell {
    /// Index into [`super::view::DashboardView::panels`].
    pub panel: usize,
    pub area: Rect,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridLayout {
    pub viewport: Viewport,
    pub cells: Vec<GridCell>,
    /// Total page height, padding included.
    pub content_height: u16,
}

/// Rows taken by a Risk Wall card `width` columns wide laying `grid` out in
/// `columns` columns.
pub fn metric_grid_height(grid: &MetricGrid, columns: u16, width: u16) -> u16 {
    let tile = tile_height(grid, width.saturating_sub(CARD_INSET_COLS), columns);
    let rows = grid.cells.len().div_ceil(usize::from(columns.max(1))) as u16;
    let cells = rows * tile + rows.saturating_sub(1) * risk_wall::CELL_GAP;
    2 + risk_wall::HEADER_ROWS + cells
}

pub fn panel_height(panel: &Panel, viewport: Viewport, width: u16) -> u16 {
    match &panel.content {
        PanelContent::Metrics(grid) => metric_grid_height(grid, viewport.metric_columns(), width),
        PanelContent::Pie(_) | PanelContent::Line(_) | PanelContent::Bar(_) => CHART_PANEL_HEIGHT,
    }
}

/// Places every panel for a page `width` columns wide.
pub fn arrange(panels: &[Panel], width: u16, breakpoints: Breakpoints) -> GridLayout {
    let viewport = Viewport::classify(width, breakpoints);
    let columns = viewport.grid_columns();
    let inner_x = PAGE_PADDING_COLS;
    let inner_width = width.saturating_sub(2 * PAGE_PADDING_COLS);
    let column_width = inner_width.saturating_sub(GRID_GAP_COLS * (columns - 1)) / columns;

    let mut cells = Vec::with_capacity(panels.len());
    let mut y = PAGE_PADDING_ROWS;
    let mut slot = 0;
    let mut row_height = 0;

    for (index, panel) in panels.iter().enumerate() {
        match panel.span {
            PanelSpan::Full => {
                let height = panel_height(panel, viewport, inner_width);
                if slot > 0 {
                    y += row_height + GRID_GAP_ROWS;
                    slot = 0;
                    row_height = 0;
                }
                cells.push(GridCell {
                    panel: index,
                    area: Rect::new(inner_x, y, inner_width, height),
                });
                y += height + GRID_GAP_ROWS;
            }
            PanelSpan::Half => {
                let x = inner_x + slot * (column_width + GRID_GAP_COLS);
                // The last column absorbs the division remainder.
                let cell_width = if slot + 1 == columns {
                    (inner_x + inner_width).saturating_sub(x)
                } else {
                    column_width
                };
                let height = panel_height(panel, viewport, cell_width);
                cells.push(GridCell {
                    panel: index,
                    area: Rect::new(x, y, cell_width, height),
                });
                row_height = row_height.max(height);
                slot += 1;
                if slot == columns {
                    y += row_height + GRID_GAP_ROWS;
                    slot = 0;
                    row_height = 0;
                }
            }
        }
    }
    if slot > 0 {
        y += row_height + GRID_GAP_ROWS;
    }

    let content_height = if cells.is_empty() {
        2 * PAGE_PADDING_ROWS
    } else {
        y - GRID_GAP_ROWS + PAGE_PADDING_ROWS
    };

    GridLayout {
        viewport,
        cells,
        content_height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::dashboard::view::{self, PanelId};

    fn layout_at(width: u16) -> (view::DashboardView, GridLayout) {
        let view = view::render();
        let layout = arrange(&view.panels, width, Breakpoints::default());
        (view, layout)
    }

    fn risk_wall_cell(view: &view::DashboardView, layout: &GridLayout) -> GridCell {
        *layout
            .cells
            .iter()
            .find(|c| view.panels[c.panel].id == PanelId::RiskWall)
            .unwrap()
    }

    #[test]
    fn test_classify_viewports() {
        let bp = Breakpoints::default();
        assert_eq!(Viewport::classify(60, bp), Viewport::Narrow);
        assert_eq!(Viewport::classify(80, bp), Viewport::Medium);
        assert_eq!(Viewport::classify(119, bp), Viewport::Medium);
        assert_eq!(Viewport::classify(120, bp), Viewport::Wide);
    }

    #[test]
    // Narrow viewports stack every panel into one full-width column.
    fn test_narrow_single_column() {
        for width in [60, 100] {
            let (_, layout) = layout_at(width);
            let inner_width = width - 2 * PAGE_PADDING_COLS;
            assert!(layout.viewport != Viewport::Wide);
            for cell in &layout.cells {
                assert_eq!(cell.area.x, PAGE_PADDING_COLS);
                assert_eq!(cell.area.width, inner_width);
            }
            // Strictly top to bottom.
            assert!(layout.cells.windows(2).all(|w| w[0].area.bottom() < w[1].area.y));
        }
    }

    #[test]
    // Wide viewports form two columns; the Risk Wall keeps a whole row.
    fn test_wide_two_columns() {
        let (view, layout) = layout_at(160);
        assert_eq!(layout.viewport, Viewport::Wide);

        let charts: Vec<&GridCell> = layout
            .cells
            .iter()
            .filter(|c| view.panels[c.panel].id != PanelId::RiskWall)
            .collect();
        let mut columns: Vec<u16> = charts.iter().map(|c| c.area.x).collect();
        columns.sort_unstable();
        columns.dedup();
        assert_eq!(columns.len(), 2);

        // Scenario and timeline share the first row.
        assert_eq!(charts[0].area.y, charts[1].area.y);
        assert!(charts[0].area.right() < charts[1].area.x);

        let wall = risk_wall_cell(&view, &layout);
        assert_eq!(wall.area.x, PAGE_PADDING_COLS);
        assert_eq!(wall.area.width, 160 - 2 * PAGE_PADDING_COLS);
        for chart in &charts {
            let overlaps_row =
                chart.area.y < wall.area.bottom() && wall.area.y < chart.area.bottom();
            assert!(!overlaps_row, "{:?} shares a row with the Risk Wall", chart);
        }
    }

    #[test]
    fn test_risk_wall_spans_full_width_everywhere() {
        for width in [50, 90, 130, 200] {
            let (view, layout) = layout_at(width);
            let wall = risk_wall_cell(&view, &layout);
            assert_eq!(wall.area.width, width - 2 * PAGE_PADDING_COLS);
        }
    }

    #[test]
    fn test_metric_columns_by_viewport() {
        assert_eq!(Viewport::Narrow.metric_columns(), 2);
        assert_eq!(Viewport::Medium.metric_columns(), 3);
        assert_eq!(Viewport::Wide.metric_columns(), 7);
    }

    #[test]
    // 7 metrics: 4 rows narrow, 1 row wide.
    fn test_risk_wall_height_follows_wrapped_tiles() {
        let view = view::render();
        let PanelContent::Metrics(grid) = &view.panel(PanelId::RiskWall).unwrap().content else {
            unreachable!()
        };
        // Every name fits next to its value: one content row per tile.
        assert_eq!(metric_grid_height(grid, 2, 200), 2 + 2 + 4 * 3 + 3);
        // 156 columns of card leave 20-column tiles; "Expected Time to Relief"
        // wraps onto two rows above its value.
        assert_eq!(metric_grid_height(grid, 7, 156), 2 + 2 + 5);

        let (view, layout) = layout_at(160);
        let wall = risk_wall_cell(&view, &layout);
        assert_eq!(wall.area.height, metric_grid_height(grid, 7, 156));
    }

    #[test]
    fn test_content_height_covers_last_panel() {
        for width in [60, 160] {
            let (_, layout) = layout_at(width);
            let last = layout.cells.iter().map(|c| c.area.bottom()).max().unwrap();
            assert_eq!(layout.content_height, last + PAGE_PADDING_ROWS);
        }
    }
}
