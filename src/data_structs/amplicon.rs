//! Amplicon schema registry.
//!
//! Each amplicon of the panel has a fixed number of CpG sites and a
//! fingerprint string that must appear verbatim as the first line of any
//! aligned CpG file claiming that amplicon. Validation and classification
//! are driven by this table rather than per-amplicon branches.

use crate::error::{AmplimethError, Result};

/// Classification bucket for a single matrix row.
///
/// Only amplicon 3 distinguishes biological categories. The terms do not
/// mean strictly what they say: "fully" is all sites methylated, "partially"
/// is a row sum inside the partial band, "unmethylated" is everything below
/// it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MethylationClass {
    Fully,
    Partially,
    Unmethylated,
}

/// Row-sum band for the partially-methylated bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassBounds {
    pub partial_min: usize,
    pub partial_max: usize,
}

/// Static description of one amplicon of the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AmpliconSchema {
    /// Panel id, 1-based.
    pub id: u8,
    /// Expected number of CpG sites per row.
    pub cpg_sites: usize,
    /// Exact first line of a valid aligned CpG file.
    pub fingerprint: &'static str,
    /// Classification bounds, present only where the amplicon has
    /// biological categories.
    pub classes: Option<ClassBounds>,
}

/// The fixed amplicon panel, ids 1..=5.
pub static AMPLICONS: [AmpliconSchema; 5] = [
    AmpliconSchema {
        id: 1,
        cpg_sites: 16,
        fingerprint: "4181151171181191201201211221241241241241251261",
        classes: None,
    },
    AmpliconSchema {
        id: 2,
        cpg_sites: 15,
        fingerprint: "3141415181101131141141151161191191201231",
        classes: None,
    },
    AmpliconSchema {
        id: 3,
        cpg_sites: 11,
        fingerprint: "618181919191101131151221251",
        classes: Some(ClassBounds {
            partial_min: 3,
            partial_max: 10,
        }),
    },
    AmpliconSchema {
        id: 4,
        cpg_sites: 5,
        fingerprint: "317181191201",
        classes: None,
    },
    AmpliconSchema {
        id: 5,
        cpg_sites: 8,
        fingerprint: "314171101101131161191",
        classes: None,
    },
];

impl AmpliconSchema {
    /// Looks up an amplicon by panel id.
    pub fn from_id(id: u8) -> Result<&'static AmpliconSchema> {
        AMPLICONS
            .iter()
            .find(|schema| schema.id == id)
            .ok_or(AmplimethError::UnknownAmplicon { id })
    }

    /// Buckets a row sum, if this amplicon carries classification bounds.
    ///
    /// The buckets partition `0..=cpg_sites` exactly: everything equal to
    /// the site count is fully methylated, the partial band is closed on
    /// both ends, and the remainder is unmethylated.
    pub fn classify(&self, row_sum: usize) -> Option<MethylationClass> {
        let bounds = self.classes?;
        let class = if row_sum == self.cpg_sites {
            MethylationClass::Fully
        } else if row_sum >= bounds.partial_min && row_sum <= bounds.partial_max {
            MethylationClass::Partially
        } else {
            MethylationClass::Unmethylated
        };
        Some(class)
    }
}
