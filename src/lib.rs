//! # amplimeth
//!
//! `amplimeth` computes per-site methylation statistics for targeted
//! bisulfite amplicon sequencing panels. It covers two independent
//! pipelines:
//!
//! * **VCF methylation extraction** — decodes allele depths from filtered
//!   variant records to estimate a global bisulfite-conversion rate and to
//!   report per-target methylated/unmethylated counts
//!   ([`extract::MethylationExtractor`]).
//! * **CpG matrix analysis** — validates aligned CpG-site files against a
//!   per-amplicon schema fingerprint, builds a binary methylation matrix,
//!   sorts and truncates it for presentation, and derives aggregate and
//!   (for amplicon 3) classification statistics
//!   ([`data_structs::matrix::MethylationMatrix`]).
//!
//! The pipelines share no runtime state. External collaborators — the
//! read-count lookup ([`external::ReadCounter`]) and heatmap rendering
//! ([`plots::HeatmapRenderer`]) — are traits so the core logic can be
//! exercised without invoking real tools.
//!
//! ## Structure
//!
//! * [`data_structs`]: amplicon schema registry, the methylation matrix and
//!   its statistics payloads.
//! * [`extract`]: the VCF methylation extractor.
//! * [`io`]: variant/aligned-file readers, membership sets, report writers.
//! * [`external`]: the read-count collaborator.
//! * [`plots`]: heatmap rendering.

pub mod data_structs;
pub mod error;
pub mod external;
pub mod extract;
pub mod io;
pub mod plots;

pub use data_structs::amplicon::AmpliconSchema;
pub use data_structs::matrix::MethylationMatrix;
pub use data_structs::stats::MatrixStats;
pub use error::{AmplimethError, Result};
