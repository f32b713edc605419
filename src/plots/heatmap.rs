//! SVG heatmap of a binary methylation matrix.
//!
//! One cell per CpG call, methylated cells drawn dark on a white
//! background, with a solid border around the plot area. Uses the
//! plotters SVG backend.

use std::path::Path;

use anyhow::Context;
use ndarray::Array2;
use plotters::prelude::*;

use super::HeatmapRenderer;

/// Renders a matrix as a fixed-size SVG grid.
#[derive(Debug, Clone, Copy)]
pub struct SvgHeatmap {
    pub width: u32,
    pub height: u32,
    pub border_width: u32,
}

impl Default for SvgHeatmap {
    fn default() -> Self {
        // Tall, narrow canvas: rows are reads, columns are CpG sites.
        Self {
            width: 200,
            height: 500,
            border_width: 2,
        }
    }
}

impl HeatmapRenderer for SvgHeatmap {
    fn render(&self, matrix: &Array2<u8>, path: &Path) -> anyhow::Result<()> {
        let root = SVGBackend::new(path, (self.width, self.height)).into_drawing_area();
        root.fill(&WHITE)
            .with_context(|| format!("filling heatmap canvas {}", path.display()))?;

        let (n_rows, n_cols) = matrix.dim();
        if n_rows > 0 && n_cols > 0 {
            let cell_width = self.width as f64 / n_cols as f64;
            let cell_height = self.height as f64 / n_rows as f64;

            for ((row, col), &call) in matrix.indexed_iter() {
                if call == 0 {
                    continue;
                }
                let x0 = (col as f64 * cell_width).round() as i32;
                let y0 = (row as f64 * cell_height).round() as i32;
                let x1 = ((col + 1) as f64 * cell_width).round() as i32;
                let y1 = ((row + 1) as f64 * cell_height).round() as i32;
                root.draw(&Rectangle::new([(x0, y0), (x1, y1)], BLACK.filled()))
                    .with_context(|| format!("drawing heatmap cell ({row}, {col})"))?;
            }
        }

        root.draw(&Rectangle::new(
            [
                (0, 0),
                (self.width as i32 - 1, self.height as i32 - 1),
            ],
            BLACK.stroke_width(self.border_width),
        ))
        .context("drawing heatmap border")?;

        root.present()
            .with_context(|| format!("writing heatmap to {}", path.display()))?;
        Ok(())
    }
}
