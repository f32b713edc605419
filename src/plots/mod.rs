//! Heatmap rendering for sorted methylation matrices.

mod heatmap;

use std::path::Path;

use ndarray::Array2;

pub use heatmap::SvgHeatmap;

/// Array-in, file-out rendering collaborator.
///
/// The analyzer hands over the sorted/truncated binary matrix; the
/// renderer owns everything about the image.
pub trait HeatmapRenderer {
    fn render(&self, matrix: &Array2<u8>, path: &Path) -> anyhow::Result<()>;
}
